// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

//! # Notebook hub session spawner
//!
//! A multi-user notebook hub starts an isolated notebook server (a pod in the
//! orchestrator) for every user logging in. Authentication is handled by an
//! external OAuth authenticator and creating the actual workload is the job
//! of the orchestrator client. What remains in between is covered here:
//!
//! - loading the deployment configuration from the environment and failing
//!   fast when anything is missing ([config]),
//! - deciding whether the authenticated user may start a session at all
//!   ([policy]),
//! - rendering the per-user resource names while refusing identities that
//!   are not safe to be used in names and paths ([template]),
//! - building the complete, deterministic session specification and turning
//!   the whole request into an admitted or denied result ([spawner]).
//!
//! ```text
//! identity ──► Service::spawn ──► AccessPolicy ──(deny)──► SpawnResult::Denied
//!                                      │
//!                                      └──► templates + SessionSpec ──► SpawnResult::Admitted
//! ```
//!
//! Everything below [hub::Service] is a pure function of the configuration
//! and the identity. The configuration is read once and shared read-only
//! behind an `Arc`, so requests can be resolved concurrently without any
//! locking.

pub mod config;
pub mod error;
pub mod hub;
pub mod identity;
pub mod logging;
pub mod policy;
pub mod spawner;
pub mod template;

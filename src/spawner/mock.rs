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
//! Session spawner - internal mocking tools.
use mockall::mock;
use std::sync::Arc;

use crate::config::DeploymentConfig;
use crate::identity::Identity;
use crate::spawner::error::BuildError;
use crate::spawner::types::{SessionSpec, SpawnApi, SpawnResult};

mock! {
    pub SpawnProvider {
        pub fn new(config: Arc<DeploymentConfig>) -> Self;
    }

    impl SpawnApi for SpawnProvider {
        fn build_session_spec(&self, identity: &Identity) -> Result<SessionSpec, BuildError>;

        fn resolve(&self, identity: &Identity) -> SpawnResult;
    }

    impl Clone for SpawnProvider {
        fn clone(&self) -> Self;
    }
}

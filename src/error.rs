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
//! # Error
//!
//! Errors that can occur while setting up and running the spawner.
use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum HubSpawnerError {
    #[error(transparent)]
    Config {
        #[from]
        source: ConfigError,
    },

    /// Additional log file cannot be opened.
    #[error("failed to open the log file {}", path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Log subscriber could not be installed.
    #[error("failed to initialize logging: {}", source)]
    Logging {
        #[from]
        source: tracing_subscriber::util::TryInitError,
    },
}

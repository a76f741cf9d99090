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
use thiserror::Error;

/// Deployment configuration error.
///
/// Every variant is fatal: the process must not start with a partial
/// configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Required environment variable is not set.
    #[error("required configuration key {0} is not set")]
    MissingKey(String),

    /// Required environment variable is set, but empty.
    #[error("configuration key {0} must not be empty")]
    EmptyValue(String),

    /// Value is present but cannot be used.
    #[error("configuration key {key} is invalid: {reason}")]
    InvalidValue { key: String, reason: String },

    /// Settings file could not be read or parsed.
    #[error("failed to load the spawner settings")]
    Settings {
        #[from]
        source: config::ConfigError,
    },
}

impl ConfigError {
    pub(crate) fn invalid<K: Into<String>, R: Into<String>>(key: K, reason: R) -> Self {
        Self::InvalidValue {
            key: key.into(),
            reason: reason.into(),
        }
    }
}

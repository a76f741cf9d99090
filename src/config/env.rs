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
//! # Environment access
use std::collections::HashMap;
use std::env::VarError;

use crate::config::error::ConfigError;

/// Log level of the hub.
pub const LOG_LEVEL: &str = "JHUB_LOG_LEVEL";
/// Comma separated list of administrators.
pub const ADMIN_USERS: &str = "ADMIN_USERS";
/// Comma separated list of users allowed to start a session.
pub const WHITELIST: &str = "OAUTH_WHITELIST";
/// OAuth client id.
pub const OAUTH_CLIENT_ID: &str = "OAUTH_CLIENT_ID";
/// OAuth client secret.
pub const OAUTH_CLIENT_SECRET: &str = "OAUTH_CLIENT_SECRET";
/// OAuth callback url.
pub const OAUTH_CALLBACK_URL: &str = "OAUTH_CALLBACK_URL";
/// Notebook container image.
pub const IMAGE: &str = "KUBESPAWN_IMAGE";
/// Spawner debug switch. Only `TRUE` enables it.
pub const SPAWNER_DEBUG: &str = "JHUB_SPWN_DEBUG";
pub const CPU_LIMIT: &str = "KUBESPAWN_CPU_LIMIT";
pub const CPU_REQUEST: &str = "KUBESPAWN_CPU_REQUEST";
pub const MEM_LIMIT: &str = "KUBESPAWN_MEM_LIMIT";
pub const MEM_REQUEST: &str = "KUBESPAWN_MEM_REQUEST";
/// Export path on the NFS server.
pub const NFS_PATH: &str = "KUBESPAWN_NFS_PATH";
/// NFS server address.
pub const NFS_SERVER: &str = "KUBESPAWN_NFS_SERVER";
/// IP the notebook sessions use to reach back to the hub.
pub const HUB_CONNECT_IP: &str = "KSPAWN_HUB_IP";

/// Source of the deployment environment variables.
pub trait EnvSource {
    /// Value of the variable or `None` when it is not set.
    fn var(&self, key: &str) -> Result<Option<String>, ConfigError>;
}

/// The environment of the running process.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Result<Option<String>, ConfigError> {
        process_value(key, std::env::var(key))
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Result<Option<String>, ConfigError> {
        Ok(self.get(key).cloned())
    }
}

/// A variable that is set to a non UTF-8 value is invalid, not missing.
fn process_value(
    key: &str,
    value: Result<String, VarError>,
) -> Result<Option<String>, ConfigError> {
    match value {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => {
            Err(ConfigError::invalid(key, "value is not valid UTF-8"))
        }
    }
}

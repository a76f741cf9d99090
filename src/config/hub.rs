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
use serde::Deserialize;
use std::path::PathBuf;

use crate::config::common::default_true;
use crate::config::error::ConfigError;

/// Hub process settings.
///
/// The core does not bind any socket itself, the bind addresses are passed
/// through to the hub integration. Logs are additionally appended to
/// `extra_log_file` (see [crate::logging::init]).
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct HubSection {
    /// Address the hub binds to.
    #[serde(default = "default_bind_ip")]
    pub hub_ip: String,

    /// Address the proxy API binds to.
    #[serde(default = "default_bind_ip")]
    pub proxy_api_ip: String,

    /// Additional log file of the hub.
    #[serde(default = "default_extra_log_file")]
    pub extra_log_file: PathBuf,

    /// Allow administrators to access sessions of other users.
    #[serde(default = "default_true")]
    pub admin_access: bool,
}

impl Default for HubSection {
    fn default() -> Self {
        Self {
            hub_ip: default_bind_ip(),
            proxy_api_ip: default_bind_ip(),
            extra_log_file: default_extra_log_file(),
            admin_access: true,
        }
    }
}

impl HubSection {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, value) in [
            ("hub.hub_ip", self.hub_ip.as_str()),
            ("hub.proxy_api_ip", self.proxy_api_ip.as_str()),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::EmptyValue(key.into()));
            }
        }
        if self.extra_log_file.as_os_str().is_empty() {
            return Err(ConfigError::EmptyValue("hub.extra_log_file".into()));
        }
        Ok(())
    }
}

fn default_bind_ip() -> String {
    "0.0.0.0".into()
}

fn default_extra_log_file() -> PathBuf {
    PathBuf::from("/var/log/jupyterhub.log")
}

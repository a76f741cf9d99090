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
use std::time::Duration;

use crate::config::common::{default_true, duration_from_seconds};
use crate::config::error::ConfigError;
use crate::template::{self, USERNAME_PLACEHOLDER};

/// Session spawner settings.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SpawnerSection {
    /// Namespace the notebook sessions are created in.
    #[serde(default = "default_namespace")]
    pub namespace: String,

    /// Time the session is given to become ready (in seconds).
    #[serde(
        default = "default_start_timeout",
        deserialize_with = "duration_from_seconds"
    )]
    pub start_timeout: Duration,

    /// Template of the session (pod) name.
    #[serde(default = "default_pod_name_template")]
    pub pod_name_template: String,

    /// Template of the per-user storage volume name.
    #[serde(default = "default_volume_name_template")]
    pub volume_name_template: String,

    /// Directory the user storage is mounted at and the notebook server is
    /// started in.
    #[serde(default = "default_notebook_dir")]
    pub notebook_dir: String,

    /// Present the user with the options form before starting the session.
    #[serde(default = "default_true")]
    pub options_form: bool,

    /// Create the user volume on the storage server when it does not exist.
    #[serde(default = "default_true")]
    pub create_user_volume_locally: bool,
}

impl Default for SpawnerSection {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
            start_timeout: default_start_timeout(),
            pod_name_template: default_pod_name_template(),
            volume_name_template: default_volume_name_template(),
            notebook_dir: default_notebook_dir(),
            options_form: true,
            create_user_volume_locally: true,
        }
    }
}

impl SpawnerSection {
    /// Validate the settings.
    ///
    /// - namespace and notebook dir must not be empty
    /// - start timeout must be positive
    /// - both templates must contain the username placeholder
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.namespace.trim().is_empty() {
            return Err(ConfigError::EmptyValue("spawner.namespace".into()));
        }
        if self.notebook_dir.trim().is_empty() {
            return Err(ConfigError::EmptyValue("spawner.notebook_dir".into()));
        }
        if self.start_timeout.is_zero() {
            return Err(ConfigError::invalid(
                "spawner.start_timeout",
                "must be greater than 0",
            ));
        }
        for (key, value) in [
            ("spawner.pod_name_template", &self.pod_name_template),
            ("spawner.volume_name_template", &self.volume_name_template),
        ] {
            template::validate_template(value).map_err(|_| {
                ConfigError::invalid(key, format!("must contain {USERNAME_PLACEHOLDER}"))
            })?;
        }
        Ok(())
    }
}

fn default_namespace() -> String {
    "jupyterhub".into()
}

fn default_start_timeout() -> Duration {
    Duration::from_secs(45)
}

fn default_pod_name_template() -> String {
    "jupyter-{username}".into()
}

fn default_volume_name_template() -> String {
    "{username}-nfs".into()
}

fn default_notebook_dir() -> String {
    "/mnt/notebooks".into()
}

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
//! # Hub service
//!
//! State shared by the hub integration for the lifetime of the process.
use mockall_double::double;
use std::sync::Arc;
use tracing::{info, warn};

use crate::config::{DeploymentConfig, Settings};
use crate::error::HubSpawnerError;
use crate::identity::Identity;
use crate::spawner::SpawnApi;
#[double]
use crate::spawner::SpawnProvider;
use crate::spawner::SpawnResult;

pub struct Service {
    /// Deployment configuration.
    pub config: Arc<DeploymentConfig>,
    /// Session spawner.
    pub spawner: SpawnProvider,
}

impl Service {
    pub fn new(config: DeploymentConfig) -> Self {
        let config = Arc::new(config);
        Self {
            spawner: SpawnProvider::new(config.clone()),
            config,
        }
    }

    /// Build the service from the process environment.
    pub fn from_env(settings: Settings) -> Result<Self, HubSpawnerError> {
        Ok(Self::new(DeploymentConfig::from_env(settings)?))
    }

    /// Handle the spawn request of the authenticated user.
    #[tracing::instrument(name = "hub.spawn", skip(self))]
    pub fn spawn(&self, user: &str) -> SpawnResult {
        let result = self.spawner.resolve(&Identity::from(user));
        match &result {
            SpawnResult::Admitted { spec, is_admin } => info!(
                pod = %spec.pod_name,
                namespace = %spec.namespace,
                is_admin,
                "Session admitted"
            ),
            SpawnResult::Denied { reason } => warn!("Session denied: {}", reason),
        }
        result
    }
}

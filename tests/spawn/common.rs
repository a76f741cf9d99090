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
//

use std::collections::HashMap;

use hub_spawner::config::{DeploymentConfig, Settings};

/// Environment of a typical deployment.
pub fn deployment_env() -> HashMap<String, String> {
    [
        ("JHUB_LOG_LEVEL", "INFO"),
        ("ADMIN_USERS", "bob"),
        ("OAUTH_WHITELIST", "alice"),
        ("OAUTH_CLIENT_ID", "hub-client"),
        ("OAUTH_CLIENT_SECRET", "s3cr3t"),
        ("OAUTH_CALLBACK_URL", "https://hub.example.org/hub/oauth_callback"),
        ("KUBESPAWN_IMAGE", "jupyter/minimal-notebook:latest"),
        ("JHUB_SPWN_DEBUG", "true"),
        ("KUBESPAWN_CPU_LIMIT", "2"),
        ("KUBESPAWN_CPU_REQUEST", "500m"),
        ("KUBESPAWN_MEM_LIMIT", "4Gi"),
        ("KUBESPAWN_MEM_REQUEST", "1Gi"),
        ("KUBESPAWN_NFS_PATH", "/exports/home"),
        ("KUBESPAWN_NFS_SERVER", "nfs.example.org"),
        ("KSPAWN_HUB_IP", "10.12.0.5"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

pub fn deployment_config() -> DeploymentConfig {
    DeploymentConfig::load(&deployment_env(), Settings::default())
        .expect("deployment configuration is valid")
}

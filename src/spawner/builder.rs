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
//! Session specification construction.
//!
//! The specification is a pure function of the deployment configuration and
//! the identity: building it twice for the same input yields equal results,
//! which the orchestrator relies on when retrying or reconciling sessions.
use crate::config::DeploymentConfig;
use crate::identity::Identity;
use crate::spawner::error::BuildError;
use crate::spawner::types::{SessionSpec, Volume, VolumeMount, VolumeSource};
use crate::template;

/// Build the session specification of the identity.
///
/// The identity is not checked against the access policy here, the
/// administrator capability is however derived from it.
pub fn build(config: &DeploymentConfig, identity: &Identity) -> Result<SessionSpec, BuildError> {
    let spawner = &config.spawner;
    let pod_name = template::render(&spawner.pod_name_template, identity)?;
    let volume_name = template::render(&spawner.volume_name_template, identity)?;

    let volume = Volume {
        name: volume_name.clone(),
        source: VolumeSource::Nfs(config.storage.clone()),
    };
    let mount = VolumeMount {
        name: volume_name,
        mount_path: spawner.notebook_dir.clone(),
    };

    Ok(SessionSpec::builder()
        .user(identity.clone())
        .pod_name(pod_name)
        .image(config.image.clone())
        .resources(config.resources.clone())
        .namespace(spawner.namespace.clone())
        .volumes(vec![volume])
        .volume_mounts(vec![mount])
        .notebook_dir(spawner.notebook_dir.clone())
        .hub_connect_ip(config.hub_connect_ip.clone())
        .start_timeout(spawner.start_timeout)
        .debug(config.debug)
        .admin_access(config.hub.admin_access && config.access.is_admin(identity))
        .options_form(spawner.options_form)
        .create_volume_locally(spawner.create_user_volume_locally)
        .build()?)
}

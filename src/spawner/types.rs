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
//! Session spawner types definitions.
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::{NfsStorage, ResourceQuota};
use crate::identity::Identity;
use crate::policy::DenialReason;
use crate::spawner::error::BuildError;

/// Session spawner interface.
pub trait SpawnApi: Send + Sync + Clone {
    /// Build the session specification for the identity.
    ///
    /// Does not check whether the identity is authorized.
    fn build_session_spec(&self, identity: &Identity) -> Result<SessionSpec, BuildError>;

    /// Resolve the spawn request of the identity.
    fn resolve(&self, identity: &Identity) -> SpawnResult;
}

/// Fully resolved specification of a single user notebook session.
#[derive(Builder, Clone, Debug, Deserialize, PartialEq, Serialize)]
#[builder(setter(into))]
#[serde(rename_all = "camelCase")]
pub struct SessionSpec {
    /// Session owner.
    pub user: Identity,

    /// Session (pod) name.
    pub pod_name: String,

    /// Notebook container image.
    pub image: String,

    /// Compute resources.
    pub resources: ResourceQuota,

    /// Namespace of the session.
    pub namespace: String,

    pub volumes: Vec<Volume>,

    pub volume_mounts: Vec<VolumeMount>,

    /// Working directory of the notebook server.
    pub notebook_dir: String,

    /// IP the session uses to reach the hub.
    pub hub_connect_ip: String,

    /// Time the session is given to become ready.
    #[serde(with = "seconds")]
    pub start_timeout: Duration,

    /// Spawner debug mode.
    pub debug: bool,

    /// The owner may access sessions of other users.
    pub admin_access: bool,

    /// Present the options form before starting.
    pub options_form: bool,

    /// Create the user volume when it does not exist yet.
    pub create_volume_locally: bool,
}

impl SessionSpec {
    pub fn builder() -> SessionSpecBuilder {
        SessionSpecBuilder::default()
    }
}

/// Volume attached to the session.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Volume {
    pub name: String,
    #[serde(flatten)]
    pub source: VolumeSource,
}

/// Backend of a volume.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VolumeSource {
    Nfs(NfsStorage),
}

/// Mount of a volume inside of the session.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeMount {
    /// Name of the mounted volume.
    pub name: String,
    pub mount_path: String,
}

/// Outcome of the spawn request.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SpawnResult {
    /// Session may be started with the given specification.
    Admitted {
        spec: Box<SessionSpec>,
        /// Identity is an administrator.
        is_admin: bool,
    },
    /// Session must not be started.
    Denied { reason: DenialReason },
}

impl SpawnResult {
    pub fn is_admitted(&self) -> bool {
        matches!(self, Self::Admitted { .. })
    }

    pub fn spec(&self) -> Option<&SessionSpec> {
        match self {
            Self::Admitted { spec, .. } => Some(spec.as_ref()),
            Self::Denied { .. } => None,
        }
    }

    pub fn denial_reason(&self) -> Option<DenialReason> {
        match self {
            Self::Admitted { .. } => None,
            Self::Denied { reason } => Some(*reason),
        }
    }
}

mod seconds {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_secs())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        Ok(Duration::from_secs(u64::deserialize(deserializer)?))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn spec() -> SessionSpec {
        SessionSpec::builder()
            .user("alice")
            .pod_name("jupyter-alice")
            .image("img")
            .resources(ResourceQuota {
                cpu_limit: "1".into(),
                cpu_request: "500m".into(),
                mem_limit: "2Gi".into(),
                mem_request: "1Gi".into(),
            })
            .namespace("jupyterhub")
            .volumes(vec![Volume {
                name: "alice-nfs".into(),
                source: VolumeSource::Nfs(NfsStorage {
                    server: "10.0.0.2".into(),
                    path: "/exports".into(),
                }),
            }])
            .volume_mounts(vec![VolumeMount {
                name: "alice-nfs".into(),
                mount_path: "/mnt/notebooks".into(),
            }])
            .notebook_dir("/mnt/notebooks")
            .hub_connect_ip("10.0.0.1")
            .start_timeout(Duration::from_secs(45))
            .debug(false)
            .admin_access(false)
            .options_form(true)
            .create_volume_locally(true)
            .build()
            .unwrap()
    }

    #[test]
    fn test_builder_requires_all_fields() {
        assert!(SessionSpec::builder().user("alice").build().is_err());
    }

    #[test]
    fn test_serialize_admitted() {
        let sot = SpawnResult::Admitted {
            spec: Box::new(spec()),
            is_admin: false,
        };
        let value = serde_json::to_value(&sot).unwrap();
        assert_eq!(value["status"], json!("admitted"));
        assert_eq!(value["is_admin"], json!(false));
        assert_eq!(value["spec"]["podName"], json!("jupyter-alice"));
        assert_eq!(value["spec"]["startTimeout"], json!(45));
        assert_eq!(value["spec"]["resources"]["cpuRequest"], json!("500m"));
        assert_eq!(
            value["spec"]["volumes"],
            json!([{"name": "alice-nfs", "nfs": {"server": "10.0.0.2", "path": "/exports"}}])
        );
        assert_eq!(
            value["spec"]["volumeMounts"],
            json!([{"name": "alice-nfs", "mountPath": "/mnt/notebooks"}])
        );
        let back: SpawnResult = serde_json::from_value(value).unwrap();
        assert_eq!(back, sot);
    }

    #[test]
    fn test_serialize_denied() {
        let sot = SpawnResult::Denied {
            reason: DenialReason::NotWhitelisted,
        };
        assert_eq!(
            serde_json::to_value(&sot).unwrap(),
            json!({"status": "denied", "reason": "not_whitelisted"})
        );
        assert!(!sot.is_admitted());
        assert!(sot.spec().is_none());
        assert_eq!(sot.denial_reason(), Some(DenialReason::NotWhitelisted));
    }
}

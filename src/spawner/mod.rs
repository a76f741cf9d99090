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
//! Session spawner.
//!
//! Resolution of a spawn request of a single verified identity:
//!
//!   1. the identity is checked against the [access
//!      policy](crate::policy::AccessPolicy). Unknown identities are denied
//!      with [DenialReason::NotWhitelisted].
//!   2. the session specification is built from the deployment configuration
//!      (see [builder::build]).
//!   3. identities which cannot be used in the resource names are denied with
//!      [DenialReason::InvalidIdentity].
//!
//! Nothing here performs I/O or keeps state. Realizing the specification as
//! a running workload (and its eventual teardown) is up to the caller.
use std::sync::Arc;
use tracing::{debug, warn};

pub mod builder;
pub mod error;
#[cfg(test)]
mod mock;
pub mod types;

use crate::config::DeploymentConfig;
use crate::identity::Identity;
use crate::policy::{AccessDecision, DenialReason};

pub use builder::build;
pub use error::BuildError;
#[cfg(test)]
pub use mock::MockSpawnProvider;
pub use types::*;

/// Session spawner provider.
#[derive(Clone, Debug)]
pub struct SpawnProvider {
    /// Deployment configuration.
    config: Arc<DeploymentConfig>,
}

impl SpawnProvider {
    pub fn new(config: Arc<DeploymentConfig>) -> Self {
        Self { config }
    }
}

impl SpawnApi for SpawnProvider {
    /// Build the session specification for the identity.
    #[tracing::instrument(level = "debug", skip(self))]
    fn build_session_spec(&self, identity: &Identity) -> Result<SessionSpec, BuildError> {
        build(&self.config, identity)
    }

    /// Resolve the spawn request of the identity.
    #[tracing::instrument(level = "debug", skip(self))]
    fn resolve(&self, identity: &Identity) -> SpawnResult {
        resolve(&self.config, identity)
    }
}

/// Resolve the spawn request of the identity.
///
/// Never fails: every problem with the identity results in a denial.
pub fn resolve(config: &DeploymentConfig, identity: &Identity) -> SpawnResult {
    if let AccessDecision::Deny(reason) = config.access.decide(identity) {
        debug!("Identity is not allowed to start a session");
        return SpawnResult::Denied { reason };
    }

    match build(config, identity) {
        Ok(spec) => SpawnResult::Admitted {
            spec: Box::new(spec),
            is_admin: config.access.is_admin(identity),
        },
        Err(err) => {
            warn!("Session specification cannot be built: {}", err);
            SpawnResult::Denied {
                reason: DenialReason::InvalidIdentity,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    use super::*;
    use crate::config::tests::test_config;
    use crate::policy::AccessPolicy;

    #[test]
    fn test_resolve_whitelisted() {
        let config = test_config();
        let result = resolve(&config, &Identity::from("alice"));
        match result {
            SpawnResult::Admitted { spec, is_admin } => {
                assert!(!is_admin);
                assert_eq!(spec.pod_name, "jupyter-alice");
                assert_eq!(spec.volumes.len(), 1);
                assert_eq!(spec.volumes[0].name, "alice-nfs");
                assert_eq!(spec.volume_mounts.len(), 1);
                assert_eq!(spec.volume_mounts[0].name, "alice-nfs");
                assert_eq!(spec.volume_mounts[0].mount_path, "/mnt/notebooks");
            }
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn test_resolve_admin() {
        let config = test_config();
        match resolve(&config, &Identity::from("bob")) {
            SpawnResult::Admitted { spec, is_admin } => {
                assert!(is_admin);
                assert!(spec.admin_access);
                assert_eq!(spec.pod_name, "jupyter-bob");
            }
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn test_resolve_unknown() {
        let config = test_config();
        assert_eq!(
            resolve(&config, &Identity::from("carol")),
            SpawnResult::Denied {
                reason: DenialReason::NotWhitelisted
            }
        );
    }

    #[test]
    #[traced_test]
    fn test_resolve_unsafe_identity() {
        let mut config = test_config();
        config.access = AccessPolicy::new(["bob"], ["alice", "al/ice"]);
        assert_eq!(
            resolve(&config, &Identity::from("al/ice")),
            SpawnResult::Denied {
                reason: DenialReason::InvalidIdentity
            }
        );
        assert!(logs_contain("Session specification cannot be built"));
    }

    #[test]
    fn test_resolve_unknown_unsafe_identity() {
        let config = test_config();
        assert_eq!(
            resolve(&config, &Identity::from("../etc")).denial_reason(),
            Some(DenialReason::NotWhitelisted)
        );
    }

    #[test]
    fn test_provider() {
        let config = Arc::new(test_config());
        let provider = SpawnProvider::new(config.clone());
        let alice = Identity::from("alice");

        assert_eq!(
            provider.build_session_spec(&alice).unwrap(),
            build(&config, &alice).unwrap()
        );
        assert_eq!(provider.resolve(&alice), resolve(&config, &alice));
        assert!(
            provider
                .build_session_spec(&Identity::from("al/ice"))
                .is_err()
        );
    }
}

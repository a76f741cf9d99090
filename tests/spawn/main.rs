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

use serde_json::json;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

mod common;

use common::*;

use hub_spawner::config::{ConfigError, DeploymentConfig, Settings};
use hub_spawner::hub::Service;
use hub_spawner::identity::Identity;
use hub_spawner::policy::DenialReason;
use hub_spawner::spawner::{self, SpawnApi, SpawnProvider, SpawnResult};

#[test]
fn test_admin_is_admitted() {
    let service = Service::new(deployment_config());

    match service.spawn("bob") {
        SpawnResult::Admitted { spec, is_admin } => {
            assert!(is_admin);
            assert!(spec.admin_access);
            assert_eq!(spec.pod_name, "jupyter-bob");
            assert_eq!(spec.namespace, "jupyterhub");
        }
        other => panic!("unexpected result {other:?}"),
    }
}

#[test]
fn test_whitelisted_user_session() {
    let service = Service::new(deployment_config());

    let result = service.spawn("alice");
    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(
        value,
        json!({
            "status": "admitted",
            "is_admin": false,
            "spec": {
                "user": "alice",
                "podName": "jupyter-alice",
                "image": "jupyter/minimal-notebook:latest",
                "resources": {
                    "cpuLimit": "2",
                    "cpuRequest": "500m",
                    "memLimit": "4Gi",
                    "memRequest": "1Gi"
                },
                "namespace": "jupyterhub",
                "volumes": [
                    {"name": "alice-nfs", "nfs": {"server": "nfs.example.org", "path": "/exports/home"}}
                ],
                "volumeMounts": [
                    {"name": "alice-nfs", "mountPath": "/mnt/notebooks"}
                ],
                "notebookDir": "/mnt/notebooks",
                "hubConnectIp": "10.12.0.5",
                "startTimeout": 45,
                "debug": false,
                "adminAccess": false,
                "optionsForm": true,
                "createVolumeLocally": true
            }
        })
    );
}

#[test]
fn test_unknown_user_is_denied() {
    let service = Service::new(deployment_config());
    assert_eq!(
        service.spawn("carol"),
        SpawnResult::Denied {
            reason: DenialReason::NotWhitelisted
        }
    );
}

#[test]
fn test_unsafe_whitelisted_user_is_denied() {
    let mut env = deployment_env();
    env.insert("OAUTH_WHITELIST".into(), "alice,al/ice".into());
    let config = DeploymentConfig::load(&env, Settings::default()).unwrap();

    assert_eq!(
        spawner::resolve(&config, &Identity::from("al/ice")),
        SpawnResult::Denied {
            reason: DenialReason::InvalidIdentity
        }
    );
}

#[test]
fn test_missing_key_aborts() {
    let mut env = deployment_env();
    env.remove("KUBESPAWN_NFS_SERVER");
    match DeploymentConfig::load(&env, Settings::default()) {
        Err(ConfigError::MissingKey(key)) => assert_eq!(key, "KUBESPAWN_NFS_SERVER"),
        other => panic!("unexpected result {other:?}"),
    }
}

#[test]
fn test_settings_change_the_session() {
    let mut settings = Settings::default();
    settings.spawner.namespace = "notebooks".into();
    settings.spawner.start_timeout = Duration::from_secs(300);
    let config = DeploymentConfig::load(&deployment_env(), settings).unwrap();

    let spec = spawner::build(&config, &Identity::from("alice")).unwrap();
    assert_eq!(spec.namespace, "notebooks");
    assert_eq!(spec.start_timeout, Duration::from_secs(300));
}

#[test]
fn test_concurrent_requests_are_identical() {
    let provider = SpawnProvider::new(Arc::new(deployment_config()));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let provider = provider.clone();
            thread::spawn(move || provider.resolve(&Identity::from("alice")))
        })
        .collect();
    let results: Vec<SpawnResult> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert!(results[0].is_admitted());
    assert!(results.iter().all(|r| *r == results[0]));
}

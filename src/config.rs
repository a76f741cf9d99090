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
//! # Deployment configuration
//!
//! The deployment is described by a fixed set of environment variables (see
//! [env]) and an optional INI settings file with the `[spawner]` and `[hub]`
//! sections. Both are read once during the process startup into the
//! immutable [DeploymentConfig]. Missing or malformed required values abort
//! the startup, there are no partially initialized configurations.
use config::{File, FileFormat};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::debug;

pub mod common;
pub mod env;
pub mod error;
pub mod hub;
pub mod oauth;
pub mod spawner;

use crate::policy::AccessPolicy;
use common::{csv_set, debug_flag};
pub use env::{EnvSource, ProcessEnv};
pub use error::ConfigError;
pub use hub::HubSection;
pub use oauth::OAuthCredentials;
pub use spawner::SpawnerSection;

/// Hub log level.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DEBUG" => Ok(Self::Debug),
            "INFO" => Ok(Self::Info),
            "WARN" | "WARNING" => Ok(Self::Warn),
            "ERROR" => Ok(Self::Error),
            other => Err(ConfigError::invalid(
                env::LOG_LEVEL,
                format!("unsupported log level {other}"),
            )),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        })
    }
}

/// Compute resources of a single session.
///
/// Quantities keep the orchestrator notation (`500m`, `1Gi`) and are not
/// converted.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceQuota {
    pub cpu_limit: String,
    pub cpu_request: String,
    pub mem_limit: String,
    pub mem_request: String,
}

/// NFS export holding the user notebooks.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct NfsStorage {
    /// Server address.
    pub server: String,
    /// Exported path.
    pub path: String,
}

/// Optional settings file.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Settings {
    /// Hub process settings.
    #[serde(default)]
    pub hub: HubSection,

    /// Session spawner settings.
    #[serde(default)]
    pub spawner: SpawnerSection,
}

impl Settings {
    /// Read the settings file. A missing file results in the defaults.
    pub fn new(path: PathBuf) -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder();

        if path.is_file() {
            builder = builder.add_source(File::from(path).format(FileFormat::Ini));
        }

        builder.try_into()
    }
}

impl TryFrom<config::ConfigBuilder<config::builder::DefaultState>> for Settings {
    type Error = ConfigError;
    fn try_from(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, Self::Error> {
        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.hub.validate()?;
        settings.spawner.validate()?;
        Ok(settings)
    }
}

/// Immutable deployment configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct DeploymentConfig {
    /// Hub log level.
    pub log_level: LogLevel,
    /// Administrators and whitelisted users.
    pub access: AccessPolicy,
    /// OAuth client registration.
    pub oauth: OAuthCredentials,
    /// Notebook container image.
    pub image: String,
    /// Per session compute resources.
    pub resources: ResourceQuota,
    /// User notebook storage.
    pub storage: NfsStorage,
    /// IP the sessions use to connect back to the hub.
    pub hub_connect_ip: String,
    /// Spawner debug mode.
    pub debug: bool,
    /// Hub process settings.
    pub hub: HubSection,
    /// Session spawner settings.
    pub spawner: SpawnerSection,
}

impl DeploymentConfig {
    /// Load the configuration from the process environment.
    pub fn from_env(settings: Settings) -> Result<Self, ConfigError> {
        Self::load(&ProcessEnv, settings)
    }

    /// Load the configuration from the given environment.
    pub fn load<E: EnvSource + ?Sized>(env: &E, settings: Settings) -> Result<Self, ConfigError> {
        settings.hub.validate()?;
        settings.spawner.validate()?;
        let reader = EnvReader { env };

        let log_level: LogLevel = reader.required(env::LOG_LEVEL)?.parse()?;
        let admins = reader.required_set(env::ADMIN_USERS)?;
        let whitelist = reader.required_set(env::WHITELIST)?;
        let oauth = OAuthCredentials {
            client_id: reader.required(env::OAUTH_CLIENT_ID)?,
            client_secret: reader.required(env::OAUTH_CLIENT_SECRET)?.into(),
            callback_url: reader.required(env::OAUTH_CALLBACK_URL)?,
        };
        let image = reader.required(env::IMAGE)?;
        let debug_enabled = debug_flag(&reader.present(env::SPAWNER_DEBUG)?);
        let resources = ResourceQuota {
            cpu_limit: reader.required(env::CPU_LIMIT)?,
            cpu_request: reader.required(env::CPU_REQUEST)?,
            mem_limit: reader.required(env::MEM_LIMIT)?,
            mem_request: reader.required(env::MEM_REQUEST)?,
        };
        let storage = NfsStorage {
            path: reader.required(env::NFS_PATH)?,
            server: reader.required(env::NFS_SERVER)?,
        };
        let hub_connect_ip = reader.required(env::HUB_CONNECT_IP)?;

        debug!(
            admins = admins.len(),
            whitelisted = whitelist.len(),
            %log_level,
            spawner_debug = debug_enabled,
            "Deployment configuration loaded"
        );

        Ok(Self {
            log_level,
            access: AccessPolicy::new(admins, whitelist),
            oauth,
            image,
            resources,
            storage,
            hub_connect_ip,
            debug: debug_enabled,
            hub: settings.hub,
            spawner: settings.spawner,
        })
    }
}

struct EnvReader<'a, E: ?Sized> {
    env: &'a E,
}

impl<E: EnvSource + ?Sized> EnvReader<'_, E> {
    /// Raw value of a key that must be set but may be empty.
    fn present(&self, key: &str) -> Result<String, ConfigError> {
        self.env
            .var(key)?
            .ok_or_else(|| ConfigError::MissingKey(key.into()))
    }

    /// Trimmed value of a key that must be set and not empty.
    fn required(&self, key: &str) -> Result<String, ConfigError> {
        let value = self.present(key)?;
        let value = value.trim();
        if value.is_empty() {
            return Err(ConfigError::EmptyValue(key.into()));
        }
        Ok(value.into())
    }

    /// Comma separated set with at least one member.
    fn required_set(&self, key: &str) -> Result<BTreeSet<String>, ConfigError> {
        let set = csv_set(&self.required(key)?);
        if set.is_empty() {
            return Err(ConfigError::EmptyValue(key.into()));
        }
        Ok(set)
    }
}

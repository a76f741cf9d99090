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
//! # Logging
//!
//! Log subscriber setup driven by the deployment configuration.
use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing::Level;
use tracing_subscriber::{
    Layer,
    filter::{LevelFilter, Targets},
    fmt::{
        self,
        format::{DefaultFields, Format},
    },
    prelude::*,
};

use crate::config::{DeploymentConfig, LogLevel};
use crate::error::HubSpawnerError;

impl From<LogLevel> for LevelFilter {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Error => LevelFilter::ERROR,
        }
    }
}

/// Log filter for the default level.
///
/// With the spawner debug mode enabled messages of this crate are emitted
/// starting from the DEBUG level regardless of the default.
pub fn filter(level: LevelFilter, debug: bool) -> Targets {
    let targets = Targets::new().with_default(level);
    if debug && level < LevelFilter::DEBUG {
        targets.with_target(env!("CARGO_CRATE_NAME"), Level::DEBUG)
    } else {
        targets
    }
}

/// Plain text log layer appending to the file.
///
/// The file is created when it does not exist.
pub fn file_layer<S>(
    path: &Path,
) -> Result<fmt::Layer<S, DefaultFields, Format, Mutex<File>>, HubSpawnerError> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| HubSpawnerError::LogFile {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
}

/// Install the global log subscriber writing to stderr and to the
/// additional log file of the hub.
///
/// `level` takes precedence over the configured log level when given.
pub fn init(config: &DeploymentConfig, level: Option<LevelFilter>) -> Result<(), HubSpawnerError> {
    let level = level.unwrap_or_else(|| config.log_level.into());
    let log_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_filter(filter(level, config.debug));
    let extra_layer =
        file_layer(&config.hub.extra_log_file)?.with_filter(filter(level, config.debug));

    tracing_subscriber::registry()
        .with(log_layer)
        .with(extra_layer)
        .try_init()?;
    Ok(())
}

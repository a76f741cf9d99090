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
//! Spawner executable.
//!
//! Validates the deployment configuration of the hub and shows what would be
//! started for the given users.

use clap::Parser;
use color_eyre::eyre::{Report, Result};
use eyre::WrapErr;
use std::path::PathBuf;
use tracing::{info, level_filters::LevelFilter};

use hub_spawner::config::Settings;
use hub_spawner::hub::Service;
use hub_spawner::logging;

/// Notebook hub session spawner.
///
/// Reads the deployment configuration from the environment (and the optional
/// settings file) and prints the spawn decision and session specification
/// for every given user as JSON.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the spawner settings file.
    #[arg(short, long, default_value = "/etc/jupyterhub/spawner.conf")]
    settings: PathBuf,

    /// Verbosity level. Repeat to increase level. Overrides `JHUB_LOG_LEVEL`.
    #[arg(short, long, global=true, action = clap::ArgAction::Count, display_order = 920)]
    verbose: u8,

    /// Only validate the configuration.
    #[arg(long)]
    check: bool,

    /// Users to resolve the spawn requests for.
    users: Vec<String>,
}

fn main() -> Result<(), Report> {
    color_eyre::install()?;
    let args = Args::parse();

    let settings = Settings::new(args.settings).wrap_err("Failed to read the settings file")?;
    let service = Service::from_env(settings).wrap_err("Invalid deployment configuration")?;
    let config = &service.config;

    let level = match args.verbose {
        0 => None,
        1 => Some(LevelFilter::INFO),
        2 => Some(LevelFilter::DEBUG),
        _ => Some(LevelFilter::TRACE),
    };
    logging::init(config, level)?;

    info!(
        admins = config.access.admins().len(),
        whitelisted = config.access.whitelist().len(),
        image = %config.image,
        namespace = %config.spawner.namespace,
        "Deployment configuration is valid"
    );
    if args.check {
        return Ok(());
    }

    for user in &args.users {
        let result = service.spawn(user);
        println!(
            "{}",
            serde_json::to_string_pretty(&result).wrap_err("Failed to serialize the result")?
        );
    }

    Ok(())
}

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
//! # Access policy
//!
//! Who may start a notebook session. The policy is the union of two sets
//! configured at the deployment time: the administrators and the whitelist.
//! Administrators are always implicitly whitelisted. What the administrator
//! role permits beyond starting an own session is decided by the hub
//! integration, the policy only answers the membership question.
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::config::DeploymentConfig;
use crate::identity::Identity;

/// Reason for refusing to start a session.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DenialReason {
    /// Identity is neither an administrator nor whitelisted.
    NotWhitelisted,
    /// Identity cannot be used to name the session resources.
    InvalidIdentity,
}

impl fmt::Display for DenialReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NotWhitelisted => "user is not whitelisted",
            Self::InvalidIdentity => "user name contains unsupported characters",
        })
    }
}

/// Result of the access policy evaluation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AccessDecision {
    Admit,
    Deny(DenialReason),
}

/// Administrators and whitelisted identities.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AccessPolicy {
    admins: BTreeSet<String>,
    whitelist: BTreeSet<String>,
}

impl AccessPolicy {
    pub fn new<A, W>(admins: A, whitelist: W) -> Self
    where
        A: IntoIterator,
        A::Item: Into<String>,
        W: IntoIterator,
        W::Item: Into<String>,
    {
        Self {
            admins: admins.into_iter().map(Into::into).collect(),
            whitelist: whitelist.into_iter().map(Into::into).collect(),
        }
    }

    /// Administrator identities.
    pub fn admins(&self) -> &BTreeSet<String> {
        &self.admins
    }

    /// Whitelisted identities (without the administrators).
    pub fn whitelist(&self) -> &BTreeSet<String> {
        &self.whitelist
    }

    /// Whether the identity may start a session.
    pub fn is_authorized(&self, identity: &Identity) -> bool {
        self.is_admin(identity) || self.whitelist.contains(identity.as_str())
    }

    /// Whether the identity is an administrator.
    pub fn is_admin(&self, identity: &Identity) -> bool {
        self.admins.contains(identity.as_str())
    }

    pub fn decide(&self, identity: &Identity) -> AccessDecision {
        if self.is_authorized(identity) {
            AccessDecision::Admit
        } else {
            AccessDecision::Deny(DenialReason::NotWhitelisted)
        }
    }
}

/// Whether the identity may start a session in the deployment.
pub fn is_authorized(config: &DeploymentConfig, identity: &Identity) -> bool {
    config.access.is_authorized(identity)
}

/// Whether the identity is an administrator of the deployment.
pub fn is_admin(config: &DeploymentConfig, identity: &Identity) -> bool {
    config.access.is_admin(identity)
}

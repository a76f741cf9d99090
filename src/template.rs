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
//! # Identity templates
//!
//! Session resource names are produced from templates like
//! `jupyter-{username}`. The rendered strings end up as orchestrator resource
//! names and as path segments, therefore the identity is checked against the
//! safe character set before the substitution happens.
use thiserror::Error;

use crate::identity::Identity;

/// Placeholder replaced by the identity.
pub const USERNAME_PLACEHOLDER: &str = "{username}";

/// Template rendering error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    /// Identity is empty or contains characters outside of the safe set.
    #[error("identity {0:?} contains characters not allowed in resource names")]
    UnsafeIdentity(String),

    /// Template does not reference the identity.
    #[error("template {0:?} does not contain the {{username}} placeholder")]
    MissingPlaceholder(String),
}

/// Render the template for the identity.
///
/// Every occurrence of [USERNAME_PLACEHOLDER] is replaced with the identity.
pub fn render(template: &str, identity: &Identity) -> Result<String, TemplateError> {
    if !identity.is_safe() {
        return Err(TemplateError::UnsafeIdentity(identity.to_string()));
    }
    Ok(template.replace(USERNAME_PLACEHOLDER, identity.as_str()))
}

/// Ensure the template references the identity.
pub fn validate_template(template: &str) -> Result<(), TemplateError> {
    if template.contains(USERNAME_PLACEHOLDER) {
        Ok(())
    } else {
        Err(TemplateError::MissingPlaceholder(template.into()))
    }
}

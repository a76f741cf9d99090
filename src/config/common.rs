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
//! # Configuration helpers
//!
//! Shared parsing helpers for the environment and the settings file.
use serde::{Deserialize, Deserializer};
use std::collections::BTreeSet;
use std::time::Duration;

/// Split a comma separated list of identities into a set.
///
/// Segments are trimmed and empty segments are dropped. Duplicates collapse.
pub fn csv_set(value: &str) -> BTreeSet<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(Into::into)
        .collect()
}

/// Interpret the debug switch.
///
/// Only the exact literal `TRUE` enables it. `true`, `1` and everything else
/// keep it disabled.
pub fn debug_flag(value: &str) -> bool {
    value == "TRUE"
}

/// Deserializes an u64 and interprets it as total SECONDS.
pub fn duration_from_seconds<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let seconds = u64::deserialize(deserializer)?;
    Ok(Duration::from_secs(seconds))
}

pub fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_set() {
        let set = csv_set(" alice, bob,,alice ,");
        assert_eq!(
            set.into_iter().collect::<Vec<_>>(),
            vec!["alice".to_string(), "bob".to_string()]
        );
        assert!(csv_set(" , ,").is_empty());
    }

    #[test]
    fn test_debug_flag() {
        assert!(debug_flag("TRUE"));
        assert!(!debug_flag("true"));
        assert!(!debug_flag("True"));
        assert!(!debug_flag("1"));
        assert!(!debug_flag(""));
        assert!(!debug_flag(" TRUE"));
    }
}

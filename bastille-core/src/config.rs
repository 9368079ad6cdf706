// Copyright 2026 Bastille Project Developers
//
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
//! Enforcement configuration
//!
//! The operator-facing input to the gating logic: a global aggressiveness
//! level plus explicit per-policy overrides. The catalog of policies itself
//! lives elsewhere; this module only carries the decision inputs and the
//! order they are applied in.
//!
//! # Example
//!
//! ```toml
//! global_level = "high"
//!
//! [overrides]
//! "Disable Anonymously Accessible Named Pipes" = true
//! "Disable Cached Logons" = false
//! ```

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::level::EnforcementLevel;
use crate::policy::MitigationPolicy;

/// Operator-selected enforcement decisions for a hardening run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnforcementConfig {
    /// Global aggressiveness. Every policy whose intrinsic level is at or
    /// below this is enforced by default.
    #[serde(default = "default_global_level")]
    pub global_level: EnforcementLevel,

    /// Explicit per-policy decisions, keyed by policy name. Applied after
    /// the level comparison, so an override always wins.
    #[serde(default)]
    pub overrides: HashMap<String, bool>,
}

fn default_global_level() -> EnforcementLevel {
    // Middle of the scale: hardened without the disruptive tail.
    EnforcementLevel::Moderate
}

impl Default for EnforcementConfig {
    fn default() -> Self {
        Self {
            global_level: default_global_level(),
            overrides: HashMap::new(),
        }
    }
}

impl EnforcementConfig {
    /// Loads the configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or does not parse as an enforcement
    /// configuration.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("failed to parse config file: {}", path.display()))?;
        tracing::debug!(
            target: "bastille.config",
            global_level = %config.global_level,
            overrides = config.overrides.len(),
            "enforcement configuration loaded"
        );
        Ok(config)
    }

    /// Decides enforcement for one policy: the level comparison first, then
    /// the explicit override for its name, if any. Callers that sequence
    /// these themselves must keep that order, since the last write wins.
    pub fn apply(&self, policy: &mut dyn MitigationPolicy) {
        policy.set_enforced_by_level(self.global_level);
        if let Some(&enforced) = self.overrides.get(policy.policy_name()) {
            policy.set_enforced(enforced);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::PolicyMeta;

    struct NoopPolicy {
        meta: PolicyMeta,
    }

    impl NoopPolicy {
        fn new(name: &str, level: EnforcementLevel) -> Self {
            Self {
                meta: PolicyMeta::new(name, level, None).unwrap(),
            }
        }
    }

    impl MitigationPolicy for NoopPolicy {
        fn meta(&self) -> &PolicyMeta {
            &self.meta
        }

        fn meta_mut(&mut self) -> &mut PolicyMeta {
            &mut self.meta
        }

        fn enforce(&self) -> bool {
            true
        }

        fn matches_system(&self) -> bool {
            true
        }
    }

    #[test]
    fn test_default_is_moderate_with_no_overrides() {
        let config = EnforcementConfig::default();
        assert_eq!(config.global_level, EnforcementLevel::Moderate);
        assert!(config.overrides.is_empty());
    }

    #[test]
    fn test_apply_gates_by_level() {
        let config = EnforcementConfig::default();

        let mut low = NoopPolicy::new("low rule", EnforcementLevel::Low);
        let mut high = NoopPolicy::new("high rule", EnforcementLevel::High);
        config.apply(&mut low);
        config.apply(&mut high);

        assert!(low.is_enforced());
        assert!(!high.is_enforced());
    }

    #[test]
    fn test_apply_override_wins_in_both_directions() {
        let mut config = EnforcementConfig::default();
        config.overrides.insert("low rule".to_string(), false);
        config.overrides.insert("high rule".to_string(), true);

        let mut low = NoopPolicy::new("low rule", EnforcementLevel::Low);
        let mut high = NoopPolicy::new("high rule", EnforcementLevel::High);
        config.apply(&mut low);
        config.apply(&mut high);

        assert!(!low.is_enforced());
        assert!(high.is_enforced());
    }

    #[test]
    fn test_parse_full_config() {
        let config: EnforcementConfig = toml::from_str(
            r#"
            global_level = "high"

            [overrides]
            "Disable Cached Logons" = false
            "#,
        )
        .unwrap();
        assert_eq!(config.global_level, EnforcementLevel::High);
        assert_eq!(config.overrides.get("Disable Cached Logons"), Some(&false));
    }

    #[test]
    fn test_parse_empty_config_uses_defaults() {
        let config: EnforcementConfig = toml::from_str("").unwrap();
        assert_eq!(config.global_level, EnforcementLevel::Moderate);
        assert!(config.overrides.is_empty());
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let result: Result<EnforcementConfig, _> = toml::from_str("agression = \"high\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "global_level = \"all\"").unwrap();

        let config = EnforcementConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.global_level, EnforcementLevel::All);
    }

    #[test]
    fn test_load_missing_file_fails_with_path_context() {
        let err = EnforcementConfig::load_from_file("/nonexistent/bastille.toml").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/bastille.toml"));
    }
}

//! Enforcement level scale
//!
//! One ordered scale serves two roles: a policy's intrinsic threshold (the
//! level at which it starts being enforced by default) and the operator's
//! global aggressiveness setting. Gating is a single comparison between the
//! two, so the only semantics this type carries is a total order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PolicyError;

/// Aggressiveness of a hardening posture, from "never" to "everything".
///
/// Larger is more aggressive. A policy with intrinsic level `L` is enforced
/// by default whenever the global level `G` satisfies `G >= L`, so `All`
/// policies are picked up only by an `All` run, and every level's enforced
/// set is a superset of the levels below it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EnforcementLevel {
    /// The floor of the scale. As the global setting it enforces nothing,
    /// since no policy is normally authored at this level. As a policy's
    /// intrinsic level it is degenerate: every global level compares `>=
    /// None`, so such a policy passes the level gate unconditionally. The
    /// comparison stays total either way; whether `None`-level policies may
    /// be authored at all is the catalog's call.
    None,
    /// Uncontroversial hardening with negligible compatibility impact.
    Low,
    /// The recommended baseline for most hosts.
    Moderate,
    /// Aggressive hardening that can break legacy software.
    High,
    /// Enforced only when the operator explicitly asks for everything.
    All,
}

/// All levels in ascending order, for iteration in tests and catalogs.
pub const ALL_LEVELS: [EnforcementLevel; 5] = [
    EnforcementLevel::None,
    EnforcementLevel::Low,
    EnforcementLevel::Moderate,
    EnforcementLevel::High,
    EnforcementLevel::All,
];

impl EnforcementLevel {
    /// Stable lowercase name, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            EnforcementLevel::None => "none",
            EnforcementLevel::Low => "low",
            EnforcementLevel::Moderate => "moderate",
            EnforcementLevel::High => "high",
            EnforcementLevel::All => "all",
        }
    }
}

impl fmt::Display for EnforcementLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EnforcementLevel {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(EnforcementLevel::None),
            "low" => Ok(EnforcementLevel::Low),
            "moderate" => Ok(EnforcementLevel::Moderate),
            "high" => Ok(EnforcementLevel::High),
            "all" => Ok(EnforcementLevel::All),
            other => Err(PolicyError::UnknownLevel(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(EnforcementLevel::None < EnforcementLevel::Low);
        assert!(EnforcementLevel::Low < EnforcementLevel::Moderate);
        assert!(EnforcementLevel::Moderate < EnforcementLevel::High);
        assert!(EnforcementLevel::High < EnforcementLevel::All);
    }

    #[test]
    fn test_level_display_round_trip() {
        for level in ALL_LEVELS {
            let parsed: EnforcementLevel = level.to_string().parse().unwrap();
            assert_eq!(parsed, level);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(
            "Moderate".parse::<EnforcementLevel>().unwrap(),
            EnforcementLevel::Moderate
        );
        assert_eq!(
            "HIGH".parse::<EnforcementLevel>().unwrap(),
            EnforcementLevel::High
        );
    }

    #[test]
    fn test_parse_rejects_unknown_names() {
        let err = "maximum".parse::<EnforcementLevel>().unwrap_err();
        assert!(matches!(err, PolicyError::UnknownLevel(name) if name == "maximum"));
    }

    #[test]
    fn test_serde_lowercase() {
        let toml = "level = \"high\"";
        #[derive(Deserialize)]
        struct Wrapper {
            level: EnforcementLevel,
        }
        let wrapper: Wrapper = toml::from_str(toml).unwrap();
        assert_eq!(wrapper.level, EnforcementLevel::High);
    }
}

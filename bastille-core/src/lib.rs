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
//! Bastille Core — mitigation policy contract and enforcement gating
//!
//! The core abstraction of the Bastille host-hardening engine: a uniform way
//! to represent, evaluate, and apply discrete security configuration changes
//! ("mitigations"), gated by an operator-selected aggressiveness level.
//!
//! Concrete hardening rules live in the platform crates and the catalog; this
//! crate only defines what any rule must satisfy:
//!
//! - [`EnforcementLevel`] — the ordered aggressiveness scale shared by rule
//!   thresholds and the operator's global setting.
//! - [`MitigationPolicy`] — the per-rule contract: identity, a gated
//!   enforcement decision, and the `enforce`/`matches_system` capability pair
//!   against real system state.
//! - [`EnforcementConfig`] — the operator's decision inputs and the order
//!   they are applied in (level comparison first, explicit overrides last).
//!
//! ```
//! use bastille_core::{EnforcementLevel, MitigationPolicy, PolicyMeta};
//!
//! struct AlwaysCompliant(PolicyMeta);
//!
//! impl MitigationPolicy for AlwaysCompliant {
//!     fn meta(&self) -> &PolicyMeta { &self.0 }
//!     fn meta_mut(&mut self) -> &mut PolicyMeta { &mut self.0 }
//!     fn enforce(&self) -> bool { true }
//!     fn matches_system(&self) -> bool { true }
//! }
//!
//! let meta = PolicyMeta::new(
//!     "Disable Anonymously Accessible Named Pipes",
//!     EnforcementLevel::Moderate,
//!     None,
//! ).unwrap();
//! let mut policy = AlwaysCompliant(meta);
//!
//! policy.set_enforced_by_level(EnforcementLevel::High);
//! assert!(policy.is_enforced());
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod level;
pub mod policy;

pub use config::EnforcementConfig;
pub use error::{PolicyError, PolicyResult};
pub use level::{EnforcementLevel, ALL_LEVELS};
pub use policy::{CombineMode, CombinePolicy, MitigationPolicy, PolicyMeta};

/// Crate version, for compatibility checks by the engine binaries.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

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
//! Mitigation policy contract
//!
//! A mitigation policy represents a single setting, configuration, or change
//! to be enforced on the host. Every concrete hardening rule — registry
//! value, service configuration, audit setting, firewall rule — implements
//! the same [`MitigationPolicy`] trait, so the orchestrator can hold a
//! heterogeneous catalog behind `Box<dyn MitigationPolicy>` and never needs
//! concrete type knowledge.
//!
//! Where possible, implement the trait once per *kind* of policy rather than
//! per individual mitigation: a registry-backed policy type instantiated with
//! the keys and values in question covers a whole family of rules.

use serde::{Deserialize, Serialize};

use crate::error::PolicyError;
use crate::level::EnforcementLevel;

pub mod combine;

pub use combine::{CombineMode, CombinePolicy};

/// Shared identity and decision state carried by every mitigation policy.
///
/// `name`, `description`, and `level` are immutable after construction; the
/// enforcement decision is the only mutable piece and starts out `false`
/// until a level comparison or explicit override sets it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyMeta {
    /// Briefly describes what the policy does, i.e. "Disable Anonymously
    /// Accessible Named Pipes". Never empty.
    name: String,

    /// Optional rationale for the policy, i.e. "Anonymously accessible named
    /// pipes can be used in X, Y and Z attacks and should be disabled. See
    /// abc.com/xyz for more info [v-123]". `None` means no rationale was
    /// supplied, which is distinct from an empty one.
    description: Option<String>,

    /// The level at or above which this policy is enforced by default.
    /// Normally `Low`, `Moderate`, `High`, or `All`.
    level: EnforcementLevel,

    /// Whether the policy should currently be applied.
    enforced: bool,
}

impl PolicyMeta {
    /// Creates the shared state for a mitigation policy. Called from concrete
    /// policies' constructors.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::EmptyName`] if `name` is empty; a policy with
    /// no name cannot be reported on or overridden by name.
    pub fn new(
        name: impl Into<String>,
        level: EnforcementLevel,
        description: Option<String>,
    ) -> Result<Self, PolicyError> {
        let name = name.into();
        if name.is_empty() {
            return Err(PolicyError::EmptyName);
        }
        Ok(Self {
            name,
            description,
            level,
            enforced: false,
        })
    }

    /// The policy's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The policy's rationale, if one was supplied.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The level at or above which this policy is enforced by default.
    pub fn level(&self) -> EnforcementLevel {
        self.level
    }

    /// Whether the policy is currently set to be enforced.
    pub fn is_enforced(&self) -> bool {
        self.enforced
    }

    /// Overrides the enforcement decision directly, bypassing the level
    /// comparison. Last write wins: an override after a level comparison
    /// replaces its result. Used when an operator names a policy explicitly.
    pub fn set_enforced(&mut self, enforced: bool) {
        tracing::debug!(
            target: "bastille.policy",
            policy = %self.name,
            enforced,
            "enforcement decision overridden"
        );
        self.enforced = enforced;
    }

    /// Decides enforcement from the operator's global level: the policy is
    /// enforced iff `global >= self.level()`. Pure function of its inputs —
    /// calling it again with the same level yields the same decision.
    ///
    /// A policy with intrinsic level `None` passes this gate at every global
    /// level, since everything compares `>= None`. That case is degenerate —
    /// policies should not be authored at level `None` — and is left to the
    /// catalog to forbid, not special-cased here.
    pub fn set_enforced_by_level(&mut self, global: EnforcementLevel) {
        self.enforced = global >= self.level;
        tracing::debug!(
            target: "bastille.policy",
            policy = %self.name,
            level = %self.level,
            global = %global,
            enforced = self.enforced,
            "enforcement decision gated by level"
        );
    }
}

/// The contract every concrete hardening rule satisfies.
///
/// Implementors supply the two system-facing operations and expose their
/// [`PolicyMeta`]; identity accessors and the enforcement decision come for
/// free from the provided methods.
///
/// A policy instance is not inherently thread-safe: the mutators take
/// `&mut self`, so the borrow checker already guarantees at most one thread
/// drives a given instance's decision. Immutable identity (`name`,
/// `description`, `level`) is always safe to read from anywhere. Concrete
/// policies that share an underlying system resource (say, two rules editing
/// the same registry key) are responsible for serializing access to it.
pub trait MitigationPolicy: Send + Sync {
    /// The policy's shared identity and decision state.
    fn meta(&self) -> &PolicyMeta;

    /// Mutable access to the decision state, for the provided mutators.
    fn meta_mut(&mut self) -> &mut PolicyMeta;

    /// Applies the policy's intended configuration to the live system and
    /// reports whether the system now satisfies the policy.
    ///
    /// Must be idempotent: enforcing an already-satisfied policy performs no
    /// duplicate side effects and still returns `true`. Routine failures —
    /// insufficient privilege, unsupported OS version, conflicting state —
    /// are expected operating conditions and reported as `false`, never as a
    /// panic; implementations should avoid leaving the system partially
    /// modified where avoidable. The base contract permits calling this even
    /// when [`is_enforced`](MitigationPolicy::is_enforced) is `false`;
    /// honoring the gating decision is the orchestrator's job.
    fn enforce(&self) -> bool;

    /// Checks whether the live system already matches what
    /// [`enforce`](MitigationPolicy::enforce) would produce.
    ///
    /// Read-only; must have no side effects. If the check itself cannot be
    /// performed (read access denied), report `false` — "cannot verify" is
    /// "not confirmed compliant", and the caller's fallback is simply to flag
    /// the policy.
    fn matches_system(&self) -> bool;

    /// The policy's name.
    fn policy_name(&self) -> &str {
        self.meta().name()
    }

    /// The policy's rationale, if one was supplied.
    fn description(&self) -> Option<&str> {
        self.meta().description()
    }

    /// The minimum global level at which this policy is enforced by default.
    fn enforcement_level(&self) -> EnforcementLevel {
        self.meta().level()
    }

    /// Whether the policy is currently set to be enforced.
    fn is_enforced(&self) -> bool {
        self.meta().is_enforced()
    }

    /// Overrides the enforcement decision directly. See
    /// [`PolicyMeta::set_enforced`].
    fn set_enforced(&mut self, enforced: bool) {
        self.meta_mut().set_enforced(enforced);
    }

    /// Decides enforcement from the operator's global level. See
    /// [`PolicyMeta::set_enforced_by_level`].
    fn set_enforced_by_level(&mut self, global: EnforcementLevel) {
        self.meta_mut().set_enforced_by_level(global);
    }
}

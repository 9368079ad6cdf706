//! Composite mitigation policies
//!
//! Some hardening rules only make sense as a group: "disable this service"
//! may mean flipping a start-type value *and* stopping the running instance,
//! and "use a hardened transport" may be satisfied by any one of several
//! acceptable configurations. [`CombinePolicy`] expresses both shapes as a
//! single policy, so the orchestrator gates and reports on the group as one
//! unit.

use crate::level::EnforcementLevel;
use crate::policy::{MitigationPolicy, PolicyMeta};
use crate::PolicyResult;

/// How a composite relates to its sub-policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombineMode {
    /// Compliant iff every sub-policy matches; enforcing enforces them all.
    AllOf,
    /// Compliant iff at least one sub-policy matches; enforcing stops at the
    /// first sub-policy that can be applied.
    AnyOf,
}

/// A mitigation policy composed of other mitigation policies.
///
/// The composite is gated as a unit: its own enforcement decision does not
/// propagate into the sub-policies, which are an internal detail never seen
/// by the orchestrator.
pub struct CombinePolicy {
    meta: PolicyMeta,
    mode: CombineMode,
    policies: Vec<Box<dyn MitigationPolicy>>,
}

impl CombinePolicy {
    /// Creates an empty composite.
    ///
    /// # Errors
    ///
    /// Returns [`crate::PolicyError::EmptyName`] if `name` is empty.
    pub fn new(
        name: impl Into<String>,
        level: EnforcementLevel,
        description: Option<String>,
        mode: CombineMode,
    ) -> PolicyResult<Self> {
        Ok(Self {
            meta: PolicyMeta::new(name, level, description)?,
            mode,
            policies: Vec::new(),
        })
    }

    /// Adds a sub-policy. In `AnyOf` mode, declaration order is enforcement
    /// preference order.
    pub fn with_policy(mut self, policy: Box<dyn MitigationPolicy>) -> Self {
        self.policies.push(policy);
        self
    }

    /// Adds a sub-policy in place.
    pub fn push(&mut self, policy: Box<dyn MitigationPolicy>) {
        self.policies.push(policy);
    }

    /// The combination mode.
    pub fn mode(&self) -> CombineMode {
        self.mode
    }

    /// Number of sub-policies.
    pub fn len(&self) -> usize {
        self.policies.len()
    }

    /// Whether the composite has no sub-policies.
    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }

    fn enforce_all(&self) -> bool {
        let mut satisfied = true;
        for policy in &self.policies {
            if !policy.enforce() {
                tracing::debug!(
                    target: "bastille.policy",
                    composite = %self.meta.name(),
                    sub_policy = %policy.policy_name(),
                    "sub-policy could not be enforced"
                );
                // Keep going: a later retry only has the remainder to fix.
                satisfied = false;
            }
        }
        satisfied
    }

    fn enforce_any(&self) -> bool {
        // Already satisfied by some alternative: no side effects.
        if self.policies.iter().any(|p| p.matches_system()) {
            return true;
        }
        for policy in &self.policies {
            if policy.enforce() {
                return true;
            }
            tracing::debug!(
                target: "bastille.policy",
                composite = %self.meta.name(),
                sub_policy = %policy.policy_name(),
                "alternative could not be enforced, trying next"
            );
        }
        false
    }
}

impl MitigationPolicy for CombinePolicy {
    fn meta(&self) -> &PolicyMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut PolicyMeta {
        &mut self.meta
    }

    fn enforce(&self) -> bool {
        match self.mode {
            CombineMode::AllOf => self.enforce_all(),
            CombineMode::AnyOf => self.enforce_any(),
        }
    }

    fn matches_system(&self) -> bool {
        match self.mode {
            // Vacuously true for an empty AllOf, false for an empty AnyOf,
            // consistent with the enforcement results above.
            CombineMode::AllOf => self.policies.iter().all(|p| p.matches_system()),
            CombineMode::AnyOf => self.policies.iter().any(|p| p.matches_system()),
        }
    }
}

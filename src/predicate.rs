//! # Dispatch Predicates
//!
//! Pure accept/reject functions gating whether a resolved action runs for a
//! given situation. Predicates see only the dispatch arguments and the
//! per-dispatch [`Capabilities`] snapshot; they must be side-effect free and
//! deterministic for the same input.
//!
//! Predicates compose: a per-action override can wrap an SDK default with
//! [`Predicate::and`] / [`Predicate::or`] rather than reimplementing it. The
//! registry stores only the final composed predicate.

use crate::arguments::ActionArguments;
use crate::capabilities::Capabilities;
use std::fmt;
use std::sync::Arc;

type PredicateFn = dyn Fn(&ActionArguments, &Capabilities) -> bool + Send + Sync;

/// Shareable accept/reject function over (arguments, capability facts)
#[derive(Clone)]
pub struct Predicate {
    inner: Arc<PredicateFn>,
}

impl Predicate {
    /// Create a predicate from a pure function
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&ActionArguments, &Capabilities) -> bool + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(predicate),
        }
    }

    /// Predicate that accepts every dispatch
    pub fn accept_all() -> Self {
        Self::new(|_, _| true)
    }

    /// Predicate that rejects every dispatch
    pub fn reject_all() -> Self {
        Self::new(|_, _| false)
    }

    /// Predicate over the situation alone
    pub fn for_situations(situations: &[crate::situation::Situation]) -> Self {
        let accepted = situations.to_vec();
        Self::new(move |arguments, _| accepted.contains(&arguments.situation))
    }

    /// Evaluate against a dispatch
    pub fn evaluate(&self, arguments: &ActionArguments, capabilities: &Capabilities) -> bool {
        (self.inner)(arguments, capabilities)
    }

    /// Compose: accept only when both predicates accept
    pub fn and(self, other: Predicate) -> Self {
        Self::new(move |arguments, capabilities| {
            self.evaluate(arguments, capabilities) && other.evaluate(arguments, capabilities)
        })
    }

    /// Compose: accept when either predicate accepts
    pub fn or(self, other: Predicate) -> Self {
        Self::new(move |arguments, capabilities| {
            self.evaluate(arguments, capabilities) || other.evaluate(arguments, capabilities)
        })
    }

    /// Compose: invert the decision
    pub fn negate(self) -> Self {
        Self::new(move |arguments, capabilities| !self.evaluate(arguments, capabilities))
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate").finish_non_exhaustive()
    }
}

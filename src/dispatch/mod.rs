//! # Dispatch State Machine
//!
//! Drives a single dispatch attempt through resolution, predicate
//! evaluation, and the perform step.
//!
//! ## State machine
//!
//! ```text
//! Created -> Resolved -> PredicateChecked -> Performing -> Completed
//!    |           |               |                |
//!    |           v               v                v
//!    +----> Failed(UnknownAction)  Rejected    Failed(...)
//! ```
//!
//! Each dispatch is logically synchronous from the caller's viewpoint and
//! read-only with respect to the registry; predicates and perform steps
//! never re-enter registration.

pub mod dispatcher;
pub mod states;

pub use dispatcher::Dispatcher;
pub use states::DispatchState;

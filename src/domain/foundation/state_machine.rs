//! State machine trait for status enums.
//!
//! Callbacks from the processor may be delivered more than once, so besides
//! validated transitions the trait classifies a requested move as a real
//! change, a repeat of the current state, or a rejected move.

/// Outcome of asking a state machine to move to a target state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition<S> {
    /// The target differs from the current state and the move is allowed.
    Changed { from: S, to: S },
    /// Already in the target state; nothing to do.
    Unchanged(S),
    /// The move is not allowed from the current state.
    Rejected { from: S, to: S },
}

/// Trait for status enums that represent state machines.
///
/// Implementors define valid state transitions and get `plan` for free.
///
/// # Example
///
/// ```ignore
/// impl StateMachine for OrderStatus {
///     fn can_transition_to(&self, target: &Self) -> bool {
///         matches!((self, target), (Pending, Processing) | (Pending, Cancelled))
///     }
/// }
///
/// match status.plan(OrderStatus::Cancelled) {
///     Transition::Changed { .. } => { /* mutate */ }
///     Transition::Unchanged(_) => { /* retry, skip */ }
///     Transition::Rejected { .. } => { /* log */ }
/// }
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Classifies a requested move without performing it.
    ///
    /// Staying in the current state is always `Unchanged`, even for
    /// terminal states, so retried deliveries are harmless.
    fn plan(&self, target: Self) -> Transition<Self> {
        if *self == target {
            Transition::Unchanged(target)
        } else if self.can_transition_to(&target) {
            Transition::Changed {
                from: *self,
                to: target,
            }
        } else {
            Transition::Rejected {
                from: *self,
                to: target,
            }
        }
    }
}

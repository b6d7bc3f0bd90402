//! Lifecycle trait shared by the subscription and referral status enums.

use super::ValidationError;

/// A status enum with a fixed set of allowed moves.
///
/// ```ignore
/// let next = ReferralStatus::Pending.transition_to(ReferralStatus::Completed)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug + 'static {
    /// States reachable in one step from `self`.
    fn successors(&self) -> &'static [Self];

    fn can_transition_to(&self, target: &Self) -> bool {
        self.successors().contains(target)
    }

    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if !self.can_transition_to(&target) {
            return Err(ValidationError::invalid_format(
                "status",
                format!("cannot move from {:?} to {:?}", self, target),
            ));
        }
        Ok(target)
    }

    fn is_terminal(&self) -> bool {
        self.successors().is_empty()
    }
}

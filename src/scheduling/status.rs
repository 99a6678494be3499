use thiserror::Error;

use crate::db::{BookingStatus, UserRole};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransitionError {
    #[error("Unrecognized booking status `{0}`")]
    InvalidStatus(String),

    #[error("A {role} may not move a booking from {from} to {to}")]
    Forbidden {
        role: UserRole,
        from: BookingStatus,
        to: BookingStatus,
    },
}

/// Enforce who may move a booking between statuses.
///
/// Only the tutor confirms or completes; only the student cancels. Completed
/// and cancelled are terminal.
pub fn check_transition(
    role: UserRole,
    current: BookingStatus,
    target: BookingStatus,
) -> Result<(), TransitionError> {
    let allowed = !current.is_terminal()
        && matches!(
            (role, target),
            (UserRole::Tutor, BookingStatus::Confirmed)
                | (UserRole::Tutor, BookingStatus::Completed)
                | (UserRole::Student, BookingStatus::Cancelled)
        );

    if allowed {
        Ok(())
    } else {
        Err(TransitionError::Forbidden {
            role,
            from: current,
            to: target,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::BookingStatus::*;
    use crate::db::UserRole::*;

    #[test]
    fn tutor_confirms_and_completes_from_non_terminal_states() {
        assert_eq!(check_transition(Tutor, Pending, Confirmed), Ok(()));
        assert_eq!(check_transition(Tutor, Pending, Completed), Ok(()));
        assert_eq!(check_transition(Tutor, Confirmed, Completed), Ok(()));
    }

    #[test]
    fn tutor_may_not_cancel() {
        assert!(check_transition(Tutor, Pending, Cancelled).is_err());
        assert!(check_transition(Tutor, Confirmed, Cancelled).is_err());
    }

    #[test]
    fn student_cancels_from_non_terminal_states() {
        assert_eq!(check_transition(Student, Pending, Cancelled), Ok(()));
        assert_eq!(check_transition(Student, Confirmed, Cancelled), Ok(()));
    }

    #[test]
    fn student_may_not_confirm_or_complete() {
        assert!(check_transition(Student, Pending, Confirmed).is_err());
        assert!(check_transition(Student, Confirmed, Completed).is_err());
    }

    #[test]
    fn terminal_states_reject_every_transition() {
        for role in [Tutor, Student] {
            for from in [Completed, Cancelled] {
                for to in [Pending, Confirmed, Completed, Cancelled] {
                    assert!(check_transition(role, from, to).is_err());
                }
            }
        }
    }

    #[test]
    fn forbidden_error_names_the_actors() {
        let err = check_transition(Student, Pending, Confirmed).unwrap_err();
        assert_eq!(
            err.to_string(),
            "A student may not move a booking from pending to confirmed"
        );
    }
}

use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MembershipError {
    #[error("The creator is already part of the group")]
    AlreadyCreator,

    #[error("Already a participant of this group")]
    AlreadyJoined,

    #[error("The creator cannot leave their own group")]
    CreatorCannotLeave,

    #[error("Not a participant of this group")]
    NotAParticipant,

    #[error("Only the group's creator may do that")]
    ForbiddenEditor,

    #[error("Subject, date and time are locked once other participants have joined")]
    GroupLocked,

    #[error("The group still has other participants")]
    GroupHasParticipants,
}

/// The creator holds a participant row from creation, so `participants`
/// always includes them.
pub fn check_join(
    creator_id: Uuid,
    participants: &[Uuid],
    requester: Uuid,
) -> Result<(), MembershipError> {
    if requester == creator_id {
        return Err(MembershipError::AlreadyCreator);
    }
    if participants.contains(&requester) {
        return Err(MembershipError::AlreadyJoined);
    }
    Ok(())
}

pub fn check_leave(
    creator_id: Uuid,
    participants: &[Uuid],
    requester: Uuid,
) -> Result<(), MembershipError> {
    if requester == creator_id {
        return Err(MembershipError::CreatorCannotLeave);
    }
    if !participants.contains(&requester) {
        return Err(MembershipError::NotAParticipant);
    }
    Ok(())
}

pub fn check_update(
    creator_id: Uuid,
    participant_count: usize,
    requester: Uuid,
    touches_locked_fields: bool,
) -> Result<(), MembershipError> {
    if requester != creator_id {
        return Err(MembershipError::ForbiddenEditor);
    }
    if touches_locked_fields && participant_count > 1 {
        return Err(MembershipError::GroupLocked);
    }
    Ok(())
}

pub fn check_delete(
    creator_id: Uuid,
    participant_count: usize,
    requester: Uuid,
) -> Result<(), MembershipError> {
    if requester != creator_id {
        return Err(MembershipError::ForbiddenEditor);
    }
    if participant_count > 1 {
        return Err(MembershipError::GroupHasParticipants);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids() -> (Uuid, Uuid, Uuid) {
        (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4())
    }

    #[test]
    fn creator_cannot_join_their_own_group() {
        let (creator, _, _) = ids();
        assert_eq!(
            check_join(creator, &[creator], creator),
            Err(MembershipError::AlreadyCreator)
        );
    }

    #[test]
    fn joining_twice_is_rejected() {
        let (creator, member, _) = ids();
        assert_eq!(check_join(creator, &[creator], member), Ok(()));
        assert_eq!(
            check_join(creator, &[creator, member], member),
            Err(MembershipError::AlreadyJoined)
        );
    }

    #[test]
    fn join_then_leave_restores_the_participant_set() {
        let (creator, member, _) = ids();
        let mut participants = vec![creator];

        check_join(creator, &participants, member).unwrap();
        participants.push(member);

        check_leave(creator, &participants, member).unwrap();
        participants.retain(|p| *p != member);

        assert_eq!(participants, vec![creator]);
    }

    #[test]
    fn creator_cannot_leave() {
        let (creator, member, _) = ids();
        assert_eq!(
            check_leave(creator, &[creator, member], creator),
            Err(MembershipError::CreatorCannotLeave)
        );
    }

    #[test]
    fn leaving_without_joining_is_rejected() {
        let (creator, _, outsider) = ids();
        assert_eq!(
            check_leave(creator, &[creator], outsider),
            Err(MembershipError::NotAParticipant)
        );
    }

    #[test]
    fn only_the_creator_edits_or_deletes() {
        let (creator, member, _) = ids();
        assert_eq!(
            check_update(creator, 1, member, false),
            Err(MembershipError::ForbiddenEditor)
        );
        assert_eq!(
            check_delete(creator, 1, member),
            Err(MembershipError::ForbiddenEditor)
        );
    }

    #[test]
    fn locked_fields_reject_once_a_second_participant_joins() {
        let (creator, _, _) = ids();
        // Two participants: subject/date/time changes are locked, but
        // description/duration edits still go through.
        assert_eq!(
            check_update(creator, 2, creator, true),
            Err(MembershipError::GroupLocked)
        );
        assert_eq!(check_update(creator, 2, creator, false), Ok(()));
        // Alone in the group, everything is editable.
        assert_eq!(check_update(creator, 1, creator, true), Ok(()));
    }

    #[test]
    fn delete_requires_an_empty_group() {
        let (creator, _, _) = ids();
        assert_eq!(
            check_delete(creator, 2, creator),
            Err(MembershipError::GroupHasParticipants)
        );
        assert_eq!(check_delete(creator, 1, creator), Ok(()));
    }
}

//! Partial update with an equality short-circuit.
//!
//! An update first computes the candidate state from the current entity and the
//! requested changes, then compares the two on the fields the entity declares as
//! its persisted state. Only a `Changed` revision is written back.

/// Entities that can be revised by a set of resolved changes.
pub trait Revisable: Sized {
    type Changes;

    /// Candidate state after applying `changes`; identity fields are kept.
    fn apply(&self, changes: &Self::Changes) -> Self;

    /// Compares persisted state explicitly, field by field.
    fn same_state(&self, other: &Self) -> bool;
}

#[derive(Debug, Clone, PartialEq)]
pub enum Revision<T> {
    Unchanged(T),
    Changed { previous: T, next: T },
}

pub fn revise<T: Revisable + Clone>(current: &T, changes: &T::Changes) -> Revision<T> {
    let next = current.apply(changes);
    if current.same_state(&next) {
        Revision::Unchanged(current.clone())
    } else {
        Revision::Changed {
            previous: current.clone(),
            next,
        }
    }
}

/// Referential-integrity engine shared by every domain service
///
/// Components are stateless functions over the repositories of the current unit of
/// work, so each call site passes its transaction explicitly:
/// - `lookup`: identifier resolution and existence assertions (NotFound / BadRequest)
/// - `uniqueness`: case-insensitive name checks, global or scoped to a faculty (Conflict)
/// - `association`: attach-only maintenance of the instructor/course association
/// - `deletion_guard`: dependent-row checks before deletes and association detach
pub mod association;
pub mod deletion_guard;
pub mod lookup;
pub mod uniqueness;

#[cfg(test)]
pub(crate) mod testing;

pub use deletion_guard::DeletionTarget;
pub use lookup::Presence;
pub use uniqueness::NameScope;

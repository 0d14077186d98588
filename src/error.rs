use thiserror::Error;

use crate::models::Specialty;

/// Errors surfaced by the matching core
///
/// A ranking run either succeeds with one result or fails with one of these
/// before producing anything. Malformed slot strings are not an error: they
/// simply never match.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatchError {
    #[error("Empty candidate pool: no {0} providers to rank")]
    EmptyCandidatePool(Specialty),

    #[error("Out of range input: {0}")]
    OutOfRangeInput(String),

    #[error("Unknown specialty: {0}")]
    UnknownSpecialty(String),
}

use thiserror::Error;

/// Failures raised while assembling a [`Registry`](crate::Registry).
///
/// Any of these aborts the build; a registry is either complete and valid
/// or does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A settings object reported an empty title identifier.
    #[error("rom settings at index {index} have an empty identifier")]
    EmptyIdentifier { index: usize },

    /// Two settings objects claim the same title identifier.
    #[error("rom identifier `{rom}` registered twice (indices {first} and {second})")]
    DuplicateIdentifier {
        rom: String,
        first: usize,
        second: usize,
    },
}

use thiserror::Error;

/// Result type for operations that can produce FindError
pub type FindResult<T> = Result<T, FindError>;

/// Errors raised when constructing tree nodes or criteria.
///
/// All variants are construction-time failures; a search over well-formed
/// input cannot fail.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FindError {
    /// A node was given an empty name
    #[error("node name must not be empty")]
    EmptyName,

    /// A name criterion was given an empty keyword
    #[error("search keyword must not be empty")]
    EmptyKeyword,
}

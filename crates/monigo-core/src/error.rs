//! Error types for the Monigo data model.

/// Errors that can occur when parsing identifiers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    /// The identifier is empty or only whitespace.
    #[error("identifier is empty")]
    Empty,

    /// The identifier contains a character that cannot appear in a path segment.
    #[error("identifier {value:?} contains reserved character {character:?}")]
    ReservedCharacter {
        /// The rejected identifier.
        value: String,
        /// The offending character.
        character: char,
    },
}

/// A string did not match any wire value of a closed enumeration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} value: {value:?}")]
pub struct ParseEnumError {
    /// Name of the enumeration being parsed.
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

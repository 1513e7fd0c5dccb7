use std::fmt::Display;

use thiserror::Error;

/// What a validated name is used for
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NameKind {
    Tag,
    Attribute,
}

impl Display for NameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NameKind::Tag => f.write_str("tag"),
            NameKind::Attribute => f.write_str("attribute"),
        }
    }
}

/// Raised when a tree is built with a name that cannot be rendered
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("{kind} name cannot be empty")]
    EmptyName { kind: NameKind },

    #[error("{kind} name {name:?} contains invalid character {character:?}")]
    InvalidCharacter {
        kind: NameKind,
        name: String,
        character: char,
    },
}

/// Raised when the shape of a tree is rejected at render time
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StructuralError {
    #[error("tree depth {depth} exceeds the limit of {limit}")]
    DepthExceeded { depth: usize, limit: usize },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Structural(#[from] StructuralError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

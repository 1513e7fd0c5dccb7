use std::{fmt::Display, ops::Deref};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigurationError, NameKind};

/// Characters that would break the structure of the rendered tag
const FORBIDDEN: &[char] = &['<', '>', '"', '\'', '=', '/'];

fn validate(kind: NameKind, name: &str) -> Result<(), ConfigurationError> {
    if name.is_empty() {
        return Err(ConfigurationError::EmptyName { kind });
    }

    if let Some(character) = name
        .chars()
        .find(|c| c.is_whitespace() || c.is_control() || FORBIDDEN.contains(c))
    {
        return Err(ConfigurationError::InvalidCharacter {
            kind,
            name: name.to_string(),
            character,
        });
    }

    Ok(())
}

macro_rules! make_name {
    ($(#[$meta:meta])* $ident:ident => $kind:expr) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $ident(pub(super) String);

        impl $ident {
            pub fn new(name: impl Into<String>) -> Result<Self, ConfigurationError> {
                let name = name.into();
                validate($kind, &name)?;
                Ok(Self(name))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $ident {
            type Error = ConfigurationError;

            fn try_from(name: String) -> Result<Self, Self::Error> {
                Self::new(name)
            }
        }

        impl<'a> TryFrom<&'a str> for $ident {
            type Error = ConfigurationError;

            fn try_from(name: &'a str) -> Result<Self, Self::Error> {
                Self::new(name)
            }
        }

        impl From<$ident> for String {
            fn from(name: $ident) -> Self {
                name.0
            }
        }

        impl Deref for $ident {
            type Target = str;

            fn deref(&self) -> &str {
                &self.0
            }
        }

        impl Display for $ident {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

make_name!(
    /// Name of a tag, such as `form` or `img`
    TagName => NameKind::Tag
);
make_name!(
    /// Name of an attribute, such as `src` or `data-id`
    AttributeName => NameKind::Attribute
);

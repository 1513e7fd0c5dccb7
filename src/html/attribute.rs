use serde::{Deserialize, Serialize};

use crate::{config::Config, error::ConfigurationError};

use super::AttributeName;

/// A single `name = "value"` pair.
///
/// The value is written verbatim. A value containing `"` produces malformed
/// markup; nothing is escaped.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    name: AttributeName,
    value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl ToString) -> Result<Self, ConfigurationError> {
        Ok(Self {
            name: AttributeName::new(name)?,
            value: value.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub(crate) fn render(&self, output: &mut String, config: &Config) {
        output.push_str(&self.name);
        output.push_str(config.assignment());
        output.push('"');
        output.push_str(&self.value);
        output.push('"');
    }
}

use serde::{Deserialize, Serialize};

use crate::{config::Config, error::ConfigurationError};

use super::Attribute;

/// Ordered list of attributes. Insertion order is rendering order.
#[derive(Clone, Default, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes {
    list: Vec<Attribute>,
}

impl Attributes {
    /// Builds a list from `(name, value)` pairs, failing on the first invalid name.
    pub fn try_from_pairs(pairs: Vec<(String, String)>) -> Result<Self, ConfigurationError> {
        let mut attributes = Self::default();
        for (name, value) in pairs {
            attributes.insert(name, value)?;
        }

        Ok(attributes)
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.list.iter()
    }

    /// Appends an attribute.
    ///
    /// Repeated names are kept as separate entries, in order. Browsers only
    /// honor the first one.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl ToString,
    ) -> Result<(), ConfigurationError> {
        self.push(Attribute::new(name, value)?);
        Ok(())
    }

    pub fn push(&mut self, attribute: Attribute) {
        self.list.push(attribute);
    }

    pub(crate) fn render(&self, output: &mut String, config: &Config) {
        for (i, attr) in self.list.iter().enumerate() {
            if i != 0 {
                output.push(' ');
            }

            attr.render(output, config);
        }
    }
}

impl<'a> IntoIterator for &'a Attributes {
    type Item = &'a Attribute;
    type IntoIter = std::slice::Iter<'a, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.list.iter()
    }
}

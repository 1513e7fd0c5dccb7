use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    error::{ConfigurationError, Result},
};

use super::{Attributes, TagName};

/// Writes `<name attr attr>`. Shared by leaves and containers.
pub(super) fn render_open_tag(
    name: &str,
    attributes: &Attributes,
    config: &Config,
    output: &mut String,
) {
    output.push('<');
    output.push_str(name);

    if !attributes.is_empty() {
        output.push(' ');
        attributes.render(output, config);
    } else if config.pad_bare_tags {
        output.push(' ');
    }

    output.push('>');
}

/// A self-closing tag, like `img` or `input`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Element {
    name: TagName,
    #[serde(default)]
    attributes: Attributes,
}

impl Element {
    pub fn new(name: impl Into<String>) -> std::result::Result<Self, ConfigurationError> {
        Self::with_attributes(name, Attributes::default())
    }

    pub fn with_attributes(
        name: impl Into<String>,
        attributes: Attributes,
    ) -> std::result::Result<Self, ConfigurationError> {
        Ok(Self {
            name: TagName::new(name)?,
            attributes,
        })
    }

    pub(super) fn from_parts(name: TagName, attributes: Attributes) -> Self {
        Self { name, attributes }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn add_attribute(
        &mut self,
        name: impl Into<String>,
        value: impl ToString,
    ) -> std::result::Result<(), ConfigurationError> {
        self.attributes.insert(name, value)?;
        tracing::trace!(tag = %self.name, count = self.attributes.len(), "added attribute");
        Ok(())
    }

    /// Renders with the default [`Config`]
    pub fn render(&self) -> String {
        let mut output = String::new();
        self.render_into(&mut output, &Config::default());
        output
    }

    pub fn render_with(&self, config: &Config) -> Result<String> {
        // a leaf is always depth 1
        if let Some(limit) = config.max_depth() {
            super::check_depth((limit == 0).then_some(1), limit)?;
        }

        let mut output = String::new();
        self.render_into(&mut output, config);
        Ok(output)
    }

    pub(crate) fn render_into(&self, output: &mut String, config: &Config) {
        render_open_tag(&self.name, &self.attributes, config, output);
    }
}

impl Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

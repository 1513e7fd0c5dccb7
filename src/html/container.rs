use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    error::{ConfigurationError, Result},
};

use super::{element::render_open_tag, Attributes, Node, TagName};

/// A pair tag that wraps child nodes, like `form` or `label`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContainerElement {
    name: TagName,
    #[serde(default)]
    attributes: Attributes,
    #[serde(default)]
    children: Vec<Node>,
}

impl ContainerElement {
    pub fn new(name: impl Into<String>) -> std::result::Result<Self, ConfigurationError> {
        Self::with_attributes(name, Attributes::default())
    }

    pub fn with_attributes(
        name: impl Into<String>,
        attributes: Attributes,
    ) -> std::result::Result<Self, ConfigurationError> {
        Ok(Self::from_parts(TagName::new(name)?, attributes, vec![]))
    }

    pub(super) fn from_parts(name: TagName, attributes: Attributes, children: Vec<Node>) -> Self {
        Self {
            name,
            attributes,
            children,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn children(&self) -> &[Node] {
        &self.children
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

    /// Appends a leaf or another container. Children render in the order they were added.
    pub fn add_child(&mut self, child: impl Into<Node>) {
        let child = child.into();
        tracing::trace!(parent = %self.name, child = child.name(), "added child");
        self.children.push(child);
    }

    /// Number of levels in this subtree, counting the container itself
    pub fn depth(&self) -> usize {
        let mut deepest = 1;
        let mut stack = vec![(self, 1)];

        while let Some((container, depth)) = stack.pop() {
            deepest = deepest.max(depth);

            for child in &container.children {
                match child {
                    Node::Leaf(_) => deepest = deepest.max(depth + 1),
                    Node::Container(child) => stack.push((child, depth + 1)),
                }
            }
        }

        deepest
    }

    /// Returns the first depth past `limit` found in this subtree, without
    /// descending any further than that.
    pub fn exceeds(&self, limit: usize) -> Option<usize> {
        if limit == 0 {
            return Some(1);
        }

        let mut stack = vec![(self, 1)];

        while let Some((container, depth)) = stack.pop() {
            for child in &container.children {
                if depth + 1 > limit {
                    return Some(depth + 1);
                }

                if let Node::Container(child) = child {
                    stack.push((child, depth + 1));
                }
            }
        }

        None
    }

    /// Renders with the default [`Config`]
    pub fn render(&self) -> String {
        let mut output = String::new();
        self.render_into(&mut output, &Config::default());
        output
    }

    pub fn render_with(&self, config: &Config) -> Result<String> {
        tracing::debug!(tag = %self.name, children = self.children.len(), "rendering tree");
        if let Some(limit) = config.max_depth() {
            super::check_depth(self.exceeds(limit), limit)?;
        }

        let mut output = String::new();
        self.render_into(&mut output, config);
        Ok(output)
    }

    pub(crate) fn render_into(&self, output: &mut String, config: &Config) {
        render_open_tag(&self.name, &self.attributes, config, output);

        for child in &self.children {
            child.render_into(output, config);
        }

        output.push_str("</");
        output.push_str(&self.name);
        output.push('>');
    }
}

// Dropping a deep tree recursively would overflow the stack.
impl Drop for ContainerElement {
    fn drop(&mut self) {
        let mut stack = std::mem::take(&mut self.children);

        while let Some(node) = stack.pop() {
            if let Node::Container(mut container) = node {
                stack.append(&mut container.children);
            }
        }
    }
}

impl Display for ContainerElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{
        error::{Error, StructuralError},
        html::{div, img, p, span, Element},
    };

    use super::*;

    #[test]
    fn test_empty_container() {
        let el = ContainerElement::new("div").unwrap();

        assert_eq!(el.render(), "<div ></div>");
        assert_eq!(el.render_with(&Config::compact()).unwrap(), "<div></div>");
    }

    #[test]
    fn test_basic() {
        let mut el = ContainerElement::new("label").unwrap();
        el.add_attribute("for", "name").unwrap();
        el.add_child(Element::new("br").unwrap());
        el.add_child(ContainerElement::new("span").unwrap());

        assert_eq!(el.render(), "<label for = \"name\"><br ><span ></span></label>");
    }

    #[test]
    fn test_render_composes_children_in_order() {
        let first = img(attrs!("src" => "1.png").unwrap());
        let second = p(vec![], attrs!("class" => "caption").unwrap());
        let third = span(vec![img(Default::default()).into()], Default::default());

        let el = div(
            vec![first.clone().into(), second.clone().into(), third.clone().into()],
            Default::default(),
        );

        let expected = format!(
            "<div >{}{}{}</div>",
            first.render(),
            second.render(),
            third.render()
        );
        assert_eq!(el.render(), expected);
        assert_eq!(el.render(), el.render());
    }

    #[test]
    fn test_render_reflects_later_mutation() {
        let mut el = div(vec![], Default::default());
        assert_eq!(el.render(), "<div ></div>");

        el.add_child(img(Default::default()));
        el.add_attribute("id", "main").unwrap();

        assert_eq!(el.render(), "<div id = \"main\"><img ></div>");
        assert_eq!(el.children().len(), 1);
    }

    #[test]
    fn test_depth_limit() {
        let mut inner = div(vec![], Default::default());
        inner.add_child(img(Default::default()));
        let mut outer = div(vec![], Default::default());
        outer.add_child(inner);

        assert_eq!(outer.depth(), 3);
        assert!(outer.render_with(&Config::default().with_max_depth(3)).is_ok());

        let err = outer
            .render_with(&Config::default().with_max_depth(2))
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Structural(StructuralError::DepthExceeded { depth: 3, limit: 2 })
        ));
    }

    fn nested_divs(levels: usize) -> ContainerElement {
        let mut el = div(vec![], Default::default());
        for _ in 1..levels {
            el = div(vec![el.into()], Default::default());
        }
        el
    }

    #[test]
    fn test_depth_limit_stops_early_on_very_deep_trees() {
        let el = nested_divs(200_000);

        assert_eq!(el.exceeds(10), Some(11));

        let err = el
            .render_with(&Config::default().with_max_depth(10))
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Structural(StructuralError::DepthExceeded {
                depth: 11,
                limit: 10
            })
        ));
    }

    #[test]
    fn test_exceeds_matches_depth() {
        let mut el = nested_divs(4);
        el.add_child(img(Default::default()));

        assert_eq!(el.depth(), 4);
        assert_eq!(el.exceeds(4), None);
        assert_eq!(el.exceeds(3), Some(4));
        assert_eq!(el.exceeds(0), Some(1));
        assert_eq!(nested_divs(200_000).depth(), 200_000);
    }
}

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{config::Config, error::Result};

use super::{ContainerElement, Element};

/// Either kind of tag. This is what a container stores as its children.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    Leaf(Element),
    Container(ContainerElement),
}

impl Node {
    pub fn name(&self) -> &str {
        match self {
            Node::Leaf(element) => element.name(),
            Node::Container(container) => container.name(),
        }
    }

    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf(_) => 1,
            Node::Container(container) => container.depth(),
        }
    }

    /// Renders with the default [`Config`]
    pub fn render(&self) -> String {
        let mut output = String::new();
        self.render_into(&mut output, &Config::default());
        output
    }

    pub fn render_with(&self, config: &Config) -> Result<String> {
        match self {
            Node::Leaf(element) => element.render_with(config),
            Node::Container(container) => container.render_with(config),
        }
    }

    pub(crate) fn render_into(&self, output: &mut String, config: &Config) {
        match self {
            Node::Leaf(element) => element.render_into(output, config),
            Node::Container(container) => container.render_into(output, config),
        }
    }

    /// Reads a tree from its JSON description. Names are validated.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Leaf(element)
    }
}
impl From<ContainerElement> for Node {
    fn from(container: ContainerElement) -> Self {
        Self::Container(container)
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{
        error::{ConfigurationError, Error, NameKind},
        html::{br, ul},
    };

    use super::*;

    #[test]
    fn test_dispatches_by_kind() {
        let leaf: Node = br(Default::default()).into();
        let container: Node = ul(vec![], Default::default()).into();

        assert_eq!(leaf.render(), "<br >");
        assert_eq!(container.render(), "<ul ></ul>");
        assert_eq!(leaf.depth(), 1);
        assert_eq!(container.name(), "ul");
    }

    #[test]
    fn test_from_json() {
        let node = Node::from_json(
            r#"{
                "kind": "container",
                "name": "p",
                "attributes": [{ "name": "class", "value": "note" }],
                "children": [
                    { "kind": "leaf", "name": "br" },
                    { "kind": "container", "name": "em" }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(
            node.render_with(&Config::compact()).unwrap(),
            "<p class=\"note\"><br><em></em></p>"
        );
    }

    #[test]
    fn test_json_keeps_structure() {
        let mut list = ul(vec![], Default::default());
        list.add_child(br(attrs!("class" => "gap").unwrap()));
        let node: Node = list.into();

        let json = node.to_json().unwrap();

        assert_eq!(Node::from_json(&json).unwrap(), node);
    }

    #[test]
    fn test_from_json_rejects_unknown_fields() {
        // a leaf cannot carry children
        assert!(Node::from_json(
            r#"{ "kind": "leaf", "name": "img", "children": [{ "kind": "leaf", "name": "br" }] }"#
        )
        .is_err());

        let err = Node::from_json(
            r#"{ "kind": "container", "name": "div", "atributes": [{ "name": "id", "value": "x" }] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Json(_)));
        assert!(err.to_string().contains("atributes"));
    }

    #[test]
    fn test_from_json_validates_names() {
        let err = Node::from_json(r#"{ "kind": "leaf", "name": "" }"#).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
        assert!(err
            .to_string()
            .contains(&ConfigurationError::EmptyName { kind: NameKind::Tag }.to_string()));

        assert!(Node::from_json(
            r#"{ "kind": "leaf", "name": "img", "attributes": [{ "name": "a b", "value": "" }] }"#
        )
        .is_err());
    }
}

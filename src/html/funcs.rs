use super::{Attributes, ContainerElement, Element, Node, TagName};

macro_rules! make_container_funcs {
    ($($name:ident),* $(,)?) => {
        $(
            pub fn $name(children: Vec<Node>, attributes: Attributes) -> ContainerElement {
                debug_assert!(!is_void(stringify!($name)));

                ContainerElement::from_parts(
                    TagName(stringify!($name).to_string()),
                    attributes,
                    children,
                )
            }
        )*
    };
}

make_container_funcs!(
    div, p, a, button, form, label, section, span, ul, ol, li, select, option, textarea,
    fieldset, legend, em, strong
);

macro_rules! make_void_elements {
    ($($name:ident),* $(,)?) => {
        /// HTML elements that cannot have any child nodes
        ///
        /// https://developer.mozilla.org/en-US/docs/Glossary/Void_element
        pub(crate) const VOID_ELEMENTS: &[&str] = &[ $(stringify!($name)),* ];

        $(
            pub fn $name(attributes: Attributes) -> Element {
                Element::from_parts(TagName(stringify!($name).to_string()), attributes)
            }
        )*
    };
}

make_void_elements!(
    area, base, br, col, embed, hr, img, input, link, meta, param, source, track, wbr,
);

/// Whether `name` is an HTML element that cannot have children
pub fn is_void(name: &str) -> bool {
    VOID_ELEMENTS.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_void_elements_are_leaves() {
        assert!(is_void("img"));
        assert!(is_void("input"));
        assert!(!is_void("label"));

        for name in VOID_ELEMENTS {
            assert!(Element::new(*name).is_ok());
        }

        assert_eq!(hr(Default::default()).name(), "hr");
    }

    #[test]
    fn test_container_funcs_keep_children() {
        let el = form(
            vec![input(Default::default()).into(), button(vec![], Default::default()).into()],
            Default::default(),
        );

        assert!(!is_void(el.name()));
        assert_eq!(el.children().len(), 2);
        assert_eq!(el.render(), "<form ><input ><button ></button></form>");
    }
}

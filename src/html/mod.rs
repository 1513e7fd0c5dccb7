/// Builds an [`Attributes`] list from `name => value` pairs, in order.
///
/// Evaluates to `Result<Attributes, ConfigurationError>`, failing on the first invalid name.
#[macro_export]
macro_rules! attrs {
    ( $( $name:expr => $value:expr ),* $(,)?) => {
        $crate::html::Attributes::try_from_pairs(
            vec![$( ($name.to_string(), $value.to_string()), )*]
        )
    };
}

mod attribute;
mod attributes;
mod container;
mod element;
mod funcs;
mod name;
mod node;

pub use attribute::Attribute;
pub use attributes::Attributes;
pub use container::ContainerElement;
pub use element::Element;
pub use funcs::*;
pub use name::{AttributeName, TagName};
pub use node::Node;

use crate::error::StructuralError;

/// Fails with the depth a bounded walk tripped at, if any
pub(crate) fn check_depth(tripped: Option<usize>, limit: usize) -> Result<(), StructuralError> {
    match tripped {
        Some(depth) => {
            tracing::warn!(depth, limit, "refusing to render tree past the depth limit");
            Err(StructuralError::DepthExceeded { depth, limit })
        }
        None => Ok(()),
    }
}

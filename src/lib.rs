//! Build HTML tag trees out of leaf and container elements, and render them to markup.
//!
//! ```
//! use tagtree::{attrs, html::{form, input, label, img}};
//!
//! let mut field = label(vec![], Default::default());
//! field.add_child(img(attrs!("src" => "img1.jpg").unwrap()));
//! field.add_child(input(attrs!("type" => "text").unwrap()));
//!
//! let form = form(vec![field.into()], Default::default());
//!
//! assert_eq!(
//!     form.render(),
//!     r#"<form ><label ><img src = "img1.jpg"><input type = "text"></label></form>"#
//! );
//! ```
//!
//! Trees are built through `&mut self` by a single owner. Rendering only reads,
//! so a finished tree can be rendered from several threads at once.

mod config;
mod error;
pub mod html;

pub use config::Config;
pub use error::{ConfigurationError, Error, NameKind, Result, StructuralError};

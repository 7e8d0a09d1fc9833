//! Message rendering using Handlebars.
//!
//! Comment bodies and issue descriptions are rendered from the templates in
//! [`SyncOptions`](crate::config::SyncOptions).

mod error;
mod renderer;

pub use error::TemplateError;
pub use renderer::{create_handlebars_registry, TemplateRenderer};

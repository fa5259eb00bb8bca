//! Page builders for the content site.
//!
//! Builders produce [`ViewNode`] trees; the browser glue turns them into DOM
//! nodes and the CLI prints them as HTML.

pub mod collection;
pub mod config;
pub mod detail;
pub mod error;
pub mod home;
pub mod messages;
pub mod query;
pub mod view;

pub use collection::*;
pub use config::*;
pub use detail::*;
pub use error::*;
pub use home::*;
pub use query::*;
pub use view::*;

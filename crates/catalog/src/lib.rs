//! Content catalog: the records behind collection, detail and home pages.

pub mod category;
pub mod error;
pub mod filter;
pub mod links;
pub mod recency;
pub mod record;
pub mod store;

pub use category::*;
pub use error::*;
pub use filter::*;
pub use recency::*;
pub use record::*;
pub use store::*;

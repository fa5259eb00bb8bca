//! Map region interaction: which shapes and labels belong to which region,
//! and the single-active-region highlight state driven by pointer events.
//!
//! Everything here is DOM-agnostic. The browser glue implements
//! [`MapElement`] / [`MapDocument`] over `web_sys` types and forwards events.

pub mod config;
pub mod element;
pub mod highlight;
pub mod lookup;
pub mod snapshot;
pub mod table;

#[cfg(test)]
pub(crate) mod testing;

pub use config::*;
pub use element::*;
pub use highlight::*;
pub use lookup::*;
pub use snapshot::*;
pub use table::*;

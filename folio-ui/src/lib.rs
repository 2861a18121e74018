//! folio-ui - View components for the portfolio site
//!
//! Contains display types, the gallery hook, and pure props-driven section
//! views. The web app supplies content and wires callbacks.

pub mod components;
pub mod display_types;
pub mod stores;

pub use components::*;
pub use display_types::*;
pub use stores::*;

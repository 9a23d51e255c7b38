//! Problems viewer: fetches the list from the problems service, falls back
//! to the bundled dataset when that fails, and renders the page.

pub mod client;
pub mod config;
pub mod error;
pub mod render;
pub mod source;
pub mod viewer;

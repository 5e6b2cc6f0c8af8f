//! subsift - interactive filter-expression builder for subdomain scan results
//!
//! The library half hosts the suggestion engine and the TUI glue; the binary
//! wires them to a terminal.

pub mod app;
pub mod config;
pub mod error;
pub mod input;
pub mod layout;
pub mod suggest;
pub mod widgets;

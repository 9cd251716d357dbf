//! Admin client for the wishlists REST service
//!
//! The [`binder`] maps user actions onto requests made through the [`api`]
//! client and renders the responses into an explicit view state, which the
//! command line and the terminal UI ([`tui`]) present.

pub mod api;
pub mod binder;
pub mod config;
pub mod models;
pub mod tui;

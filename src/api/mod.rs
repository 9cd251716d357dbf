//! Wishlists REST service client
//!
//! This module provides the typed endpoints of the wishlists service, the
//! error type for failed requests and the reqwest-backed client used by the
//! form binder.

pub mod types;
pub mod errors;
pub mod client;

#[cfg(test)]
pub mod fake;

pub use types::*;
pub use errors::ApiError;
pub use client::{HttpWishlistApi, WishlistApi};

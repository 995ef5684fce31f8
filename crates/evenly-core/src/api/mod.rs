//! HTTP client for the Evenly backend.
//!
//! All server calls go through [`ApiClient`]: it attaches the bearer token
//! to every outgoing request and maps credential rejections to a typed
//! [`ApiError`] with kind [`ApiErrorKind::Unauthorized`]. Navigation is not
//! this layer's business; a single coordinator upstream reacts to the
//! unauthorized variant by clearing the session and landing on login.
//!
//! One module per backend resource, each an `impl ApiClient` block.

mod client;
mod error;

mod auth;
mod features;
mod insights;
mod manual;
mod predictions;
mod smoothing;
mod transactions;

pub use client::ApiClient;
pub use error::{ApiError, ApiErrorKind, ApiResult};

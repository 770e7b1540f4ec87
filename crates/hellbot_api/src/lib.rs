//! Remote fetcher for the Helldivers 2 community API.
//!
//! [`HelldiversClient`] implements [`hellbot_interface::OrderFetcher`] over
//! `reqwest`, sending the identification headers the public API requires.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod config;

pub use client::{HelldiversClient, SUPER_CLIENT_HEADER, SUPER_CONTACT_HEADER};
pub use config::ApiConfig;

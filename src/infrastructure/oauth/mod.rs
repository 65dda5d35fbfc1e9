//! Outbound HTTP integration with the external OAuth endpoint.

mod client;

pub use client::OauthClient;

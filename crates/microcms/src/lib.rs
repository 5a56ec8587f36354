//! Read-only access to the microCMS content API.
//!
//! [`MicroCmsClient`] performs the authenticated HTTP calls. Callers depend on
//! the [`ContentApi`] trait so the transport can be replaced in tests.

mod client;
mod content;
mod error;
mod query;

pub use client::{API_KEY_HEADER, ContentApi, MicroCmsClient};
pub use content::{ContentItem, ContentList, Fetched};
pub use error::ContentError;
pub use query::Query;

pub use secrecy::SecretString;

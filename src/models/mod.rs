//! Data models for the ID-card application.
//!
//! Field names serialize in camelCase so stored records stay compatible with the browser portal.

mod account;
mod draft;
mod form;
mod resolved;
mod submission;

pub use account::*;
pub use draft::*;
pub use form::*;
pub use resolved::*;
pub use submission::*;

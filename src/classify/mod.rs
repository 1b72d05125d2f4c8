//! Response classification module
//!
//! Assigns every normalized schema exactly one [`ResponseType`] tag based
//! on its shape alone.
//!
//! # Rules (first match wins)
//!
//! - **Pagination**: `properties` has `data`, `links`, and `meta`
//! - **Error**: `properties` has `type`, `title`, and `status` (RFC 9457)
//! - **Message**: `properties` has `message` and at most 2 keys total
//! - **Array**: top-level `type` is `"array"`
//! - **Object**: everything else

mod rules;
mod types;

pub use rules::classify;
pub use types::ResponseType;

#[cfg(test)]
mod tests;

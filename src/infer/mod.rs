//! Schema inference module
//!
//! Builds a single unified JSON Schema from any number of JSON value
//! instances, GenSON style.
//!
//! # Features
//!
//! - **Type Unification**: One observation slot per JSON shape category
//! - **Schema Seeding**: Start from an existing schema fragment
//! - **Required Tracking**: `required` is the intersection over all observed objects
//! - **Integer Promotion**: `integer` widens to `number` on the first non-integral value
//! - **Format Detection**: Opt-in date-time/date/uri/email/uuid detection

mod builder;
mod node;

pub use builder::SchemaBuilder;

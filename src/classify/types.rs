//! Classification types

use serde::{Deserialize, Serialize};

/// Semantic shape of an API response schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseType {
    /// Paginated list with `data`, `links`, and `meta` members
    Pagination,
    /// RFC 9457 problem-details error shape
    Error,
    /// Bare status message
    Message,
    /// Top-level array
    Array,
    /// Generic object fallback
    Object,
}

impl ResponseType {
    /// All variants, in classification precedence order
    pub const ALL: [ResponseType; 5] = [
        ResponseType::Pagination,
        ResponseType::Error,
        ResponseType::Message,
        ResponseType::Array,
        ResponseType::Object,
    ];

    /// Tag string as written into output schemas
    pub fn as_str(self) -> &'static str {
        match self {
            ResponseType::Pagination => "pagination",
            ResponseType::Error => "error",
            ResponseType::Message => "message",
            ResponseType::Array => "array",
            ResponseType::Object => "object",
        }
    }
}

impl std::fmt::Display for ResponseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

//! API version identity.
//!
//! The version token rides in the URL (`/api/{culture}/v1/...`). Each
//! supported version has its own router; this type is what handlers use
//! when they must name their own version, e.g. when building a
//! `Location` header that has to resolve back to the same version.

use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiVersion {
    V1,
    V2,
}

impl ApiVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiVersion::V1 => "v1",
            ApiVersion::V2 => "v2",
        }
    }

    /// Canonical path of the get-by-id operation for a product, in
    /// *this* version. Never hardcode these in handlers.
    pub fn product_location(&self, culture: &str, id: Uuid) -> String {
        format!("/api/{culture}/{}/products/{id}", self.as_str())
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiVersion {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "v1" => Ok(ApiVersion::V1),
            "v2" => Ok(ApiVersion::V2),
            _ => Err(()),
        }
    }
}

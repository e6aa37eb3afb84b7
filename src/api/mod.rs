pub mod extractors;
pub mod v1;
pub mod v2;
pub mod version;

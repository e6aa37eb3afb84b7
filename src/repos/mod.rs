pub mod error;
pub mod memory;
pub mod product_repo;
pub mod store;

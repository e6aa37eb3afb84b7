pub mod products;
pub mod token;

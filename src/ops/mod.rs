pub mod aggregate;
pub mod filter;
pub mod store;
pub mod validate;

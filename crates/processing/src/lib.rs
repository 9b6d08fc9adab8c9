pub mod error;
pub mod normalize;
pub mod schema;
pub mod summary;

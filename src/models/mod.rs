pub mod collection_models;

pub use collection_models::*;

//! Custom extractors whose rejections render as [`crate::errors::ErrorResponse`].

pub mod id_path;
pub mod json_body;
pub mod validated_query;

pub use id_path::IdPath;
pub use json_body::JsonBody;
pub use validated_query::ValidatedQuery;

//! Query string extractor with validation using the validator crate.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// Deserializes the query string into `T` and runs its `Validate` rules.
///
/// Both unparsable and out-of-range parameters become a 400 response; the
/// latter carries the validator field errors in `details`.
///
/// ```ignore
/// #[derive(Deserialize, Validate)]
/// struct Paging {
///     #[serde(default)]
///     page: u64,
///     #[validate(range(min = 1, max = 1000))]
///     size: u64,
/// }
///
/// async fn list(ValidatedQuery(paging): ValidatedQuery<Paging>) -> String { ... }
/// ```
pub struct ValidatedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state).await?;
        value.validate()?;
        Ok(ValidatedQuery(value))
    }
}

use crate::errors::ApiError;
use axum::{
    async_trait,
    extract::{FromRequest, Request},
    response::Json,
};
use serde::de::DeserializeOwned;
use tracing::debug;
use validator::Validate;

/// JSON body that has been deserialized and then checked with `validator`.
///
/// Malformed bodies and failed checks are both rejected as
/// [`ApiError::Validation`], so clients always get the `{errors: [...]}` shape.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        if let Err(errors) = value.validate() {
            debug!("Request body failed validation: {}", errors);
            return Err(errors.into());
        }
        Ok(Self(value))
    }
}

use crate::error::TicklistError;
use crate::utils::logging::debug_json;
use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::{Serialize, de::DeserializeOwned};
use ticklist_schema::IntoValid;
use tracing::debug;

/// JSON body that has been deserialized and validated into `R::Valid`.
///
/// Rejections:
/// - missing `Content-Type: application/json` => 415 `UNSUPPORTED_MEDIA_TYPE`
/// - JSON syntax or type errors => 400 `INVALID_BODY`
/// - field rule violations => 400 `VALIDATION_ERROR` with per-field details
pub(crate) struct ValidJson<R: IntoValid>(pub(crate) R::Valid);

impl<S, R> FromRequest<S> for ValidJson<R>
where
    S: Send + Sync,
    R: IntoValid + DeserializeOwned + Serialize + Send,
    R::Valid: Send,
{
    type Rejection = TicklistError;

    async fn from_request(req: Request, _state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<R>::from_request(req, &()).await?;

        if let Some(pretty_body) = debug_json(&body) {
            debug!(body = %pretty_body, "[Todos] Extracted request body");
        }

        Ok(Self(body.into_valid()?))
    }
}

use axum::http::{HeaderValue, Method, header::InvalidHeaderValue};
use serde::{Deserialize, Serialize};
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};

/// Cross-origin policy for the browser frontend.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorsConfig {
    /// The single origin allowed to call the API with credentials.
    /// TOML: `cors.allowed_origin`. Default: `http://localhost:3000`.
    #[serde(default = "default_allowed_origin")]
    pub allowed_origin: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origin: default_allowed_origin(),
        }
    }
}

impl CorsConfig {
    /// Builds the CORS layer. Request headers are mirrored because a wildcard
    /// `Access-Control-Allow-Headers` cannot be combined with credentials.
    pub fn layer(&self) -> Result<CorsLayer, InvalidHeaderValue> {
        let origin = HeaderValue::from_str(self.allowed_origin.trim())?;
        Ok(CorsLayer::new()
            .allow_origin(AllowOrigin::exact(origin))
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers(AllowHeaders::mirror_request())
            .allow_credentials(true))
    }
}

fn default_allowed_origin() -> String {
    "http://localhost:3000".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_origin_with_control_characters() {
        let cfg = CorsConfig {
            allowed_origin: "http://bad\norigin".to_string(),
        };
        assert!(cfg.layer().is_err());
    }

    #[test]
    fn builds_layer_for_default_origin() {
        assert!(CorsConfig::default().layer().is_ok());
    }
}

//! Shorten API service
//!
//! Accepts a long URL and returns a newly generated short code together
//! with the fully-qualified short link.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{HttpMessage, HttpRequest, HttpResponse, Responder, web};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::storages::{ShortLink, Storage};
use crate::utils::{generate_random_code, normalize_url};

#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub original_url: String,
    pub short_code: String,
    pub short_url: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub struct ShortenService {}

impl ShortenService {
    pub async fn shorten(
        req: HttpRequest,
        body: web::Bytes,
        storage: web::Data<Arc<dyn Storage>>,
        config: web::Data<Config>,
    ) -> impl Responder {
        if !is_json_content_type(req.content_type()) {
            warn!("Shorten request rejected: content type is not JSON");
            return Self::error_response(StatusCode::UNSUPPORTED_MEDIA_TYPE, "Request must be JSON");
        }

        let payload: ShortenRequest = match serde_json::from_slice(&body) {
            Ok(payload) => payload,
            Err(e) => {
                warn!("Shorten request rejected: malformed JSON body: {}", e);
                return Self::error_response(
                    StatusCode::BAD_REQUEST,
                    "Malformed JSON in request body",
                );
            }
        };

        let Some(url) = payload.url.filter(|url| !url.is_empty()) else {
            warn!("Shorten request rejected: missing 'url' field");
            return Self::error_response(
                StatusCode::BAD_REQUEST,
                "Missing 'url' field in request body",
            );
        };

        let target = normalize_url(&url);

        // Sample-and-insert until a free code is claimed. The insert is
        // atomic, so two concurrent requests can never share a code; a
        // collision just means we sample again.
        let code = loop {
            let code = generate_random_code(config.random_code_length);
            let link = ShortLink::new(code.clone(), target.clone());
            if storage.insert_if_absent(link).await {
                break code;
            }
            debug!("Short code collision, resampling: {}", code);
        };

        let connection_info = req.connection_info();
        let short_url = format!(
            "{}://{}/{}",
            connection_info.scheme(),
            connection_info.host(),
            code
        );

        info!("Created short link {} -> {}", code, target);

        HttpResponse::build(StatusCode::CREATED).json(ShortenResponse {
            original_url: target,
            short_code: code,
            short_url,
        })
    }

    #[inline]
    fn error_response(status: StatusCode, message: &str) -> HttpResponse {
        HttpResponse::build(status).json(ErrorResponse {
            error: message.to_string(),
        })
    }
}

fn is_json_content_type(content_type: &str) -> bool {
    content_type == "application/json" || content_type.ends_with("+json")
}

/// Shorten API route configuration
pub fn api_routes() -> actix_web::Scope {
    web::scope("/api").route("/shorten", web::post().to(ShortenService::shorten))
}

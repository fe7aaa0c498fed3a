//! Optional decorative assets (the issuer logo).
//!
//! The logo lives on the local filesystem; resolution failures are never
//! fatal. Handlers receive the already-resolved bytes, keeping the renderer
//! free of I/O.

use actix_web::{web, HttpResponse, Responder};
use std::path::Path;

use crate::render::common::detect_image;
use crate::state::AppState;
use crate::ErrorResponse;

/// Read the logo bytes, if the file exists and is non-empty.
pub async fn resolve_logo(path: &Path) -> Option<Vec<u8>> {
    match tokio::fs::read(path).await {
        Ok(bytes) if !bytes.is_empty() => Some(bytes),
        Ok(_) => {
            log::warn!("logo file {} is empty, skipping", path.display());
            None
        }
        Err(e) => {
            log::debug!("logo not available at {}: {}", path.display(), e);
            None
        }
    }
}

#[utoipa::path(
    get,
    path = "/assets/logo",
    tag = "Asset Service",
    responses(
        (status = 200, description = "The configured logo image"),
        (status = 404, description = "No logo configured", body = ErrorResponse)
    )
)]
pub async fn serve_logo(state: web::Data<AppState>) -> impl Responder {
    match resolve_logo(&state.logo_path).await {
        Some(bytes) => {
            let content_type = detect_image(&bytes)
                .map(|kind| kind.content_type())
                .unwrap_or("application/octet-stream");
            HttpResponse::Ok().content_type(content_type).body(bytes)
        }
        None => HttpResponse::NotFound().json(ErrorResponse::not_found("No logo configured")),
    }
}

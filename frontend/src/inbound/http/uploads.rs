//! Streams uploaded CV files through from the backend.

use actix_web::http::header;
use actix_web::{get, web, HttpResponse};
use tracing::warn;

use crate::domain::ports::GatewayError;
use crate::inbound::http::guards::Authenticated;
use crate::inbound::http::state::HttpState;

#[get("/uploads/cvs/{year}/{month}/{filename}")]
pub async fn download_cv(
    _viewer: Authenticated,
    state: web::Data<HttpState>,
    path: web::Path<(String, String, String)>,
) -> HttpResponse {
    let (year, month, filename) = path.into_inner();
    match state.cvs.fetch(&year, &month, &filename).await {
        Ok(file) => {
            let mut response = HttpResponse::Ok();
            response.insert_header((header::CONTENT_TYPE, file.content_type));
            if let Some(disposition) = file.content_disposition {
                response.insert_header((header::CONTENT_DISPOSITION, disposition));
            }
            response.body(file.bytes)
        }
        Err(GatewayError::NotFound) => HttpResponse::NotFound().body("File not found"),
        Err(error) => {
            warn!(%error, filename, "CV download failed");
            HttpResponse::InternalServerError().body("Error downloading file")
        }
    }
}

pub mod documents;
pub mod streams;
pub mod templates;
pub mod viewer;

use crate::docgen::DocgenError;
use actix_web::HttpResponse;

/// Maps engine errors onto HTTP responses. Failed operations change nothing,
/// so the body is just the error text.
pub(crate) fn docgen_error_response(err: &DocgenError) -> HttpResponse {
    match err {
        DocgenError::NotFound(_) => HttpResponse::NotFound().body(err.to_string()),
        DocgenError::Validation(_) | DocgenError::Format(_) => {
            HttpResponse::UnprocessableEntity().body(err.to_string())
        }
        DocgenError::Generation(_) => HttpResponse::InternalServerError().body(err.to_string()),
    }
}

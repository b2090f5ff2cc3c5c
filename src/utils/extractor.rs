use actix_web::error::InternalError;
use actix_web::{FromRequest, HttpRequest, HttpResponse, dev::Payload};
use futures_util::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};

/// Path extractor for `{id}` segments: rejects non-numeric and non-positive
/// values with a 400 envelope instead of a plain actix error page.
pub struct SafeIdI64(pub i64);

impl FromRequest for SafeIdI64 {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let parsed = req
            .match_info()
            .get("id")
            .and_then(|raw| raw.parse::<i64>().ok())
            .filter(|id| *id > 0);

        ready(match parsed {
            Some(id) => Ok(SafeIdI64(id)),
            None => {
                let response = HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::BadRequest,
                    "Path id must be a positive integer",
                ));
                Err(InternalError::from_response("invalid path id", response).into())
            }
        })
    }
}

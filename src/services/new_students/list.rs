use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::NewStudentService;
use crate::models::{
    ApiResponse, ErrorCode,
    new_students::requests::{NewStudentListParams, NewStudentListQuery},
};

pub async fn list_new_students(
    service: &NewStudentService,
    query: NewStudentListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let list_query = NewStudentListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        approval_status: query.approval_status,
        search: query.search,
    };

    match storage.list_new_students_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Application list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve application list: {e}"),
            )),
        ),
    }
}

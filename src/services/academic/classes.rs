use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::AcademicService;
use crate::errors::TsmartError;
use crate::models::{
    ApiResponse, ErrorCode,
    academic::{
        requests::{ClassListParams, ClassListQuery, CreateClassRequest, UpdateClassRequest},
        responses::ClassResponse,
    },
};

pub async fn create_class(
    service: &AcademicService,
    class_data: CreateClassRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if class_data.name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Class name must not be empty",
        )));
    }

    if class_data.spp_amount < 0 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "SPP amount must not be negative",
        )));
    }

    match storage.create_class(class_data).await {
        Ok(class) => Ok(HttpResponse::Created().json(ApiResponse::success(
            ClassResponse { class },
            "Class created successfully",
        ))),
        Err(TsmartError::Conflict(msg)) => Ok(HttpResponse::Conflict()
            .json(ApiResponse::error_empty(ErrorCode::ClassAlreadyExists, msg))),
        Err(e) => {
            error!("Failed to create class: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to create class",
                )),
            )
        }
    }
}

pub async fn get_class(
    service: &AcademicService,
    class_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_class_by_id(class_id).await {
        Ok(Some(class)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ClassResponse { class },
            "Class retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ClassNotFound,
            format!("Class {class_id} not found"),
        ))),
        Err(e) => {
            error!("Failed to get class {}: {}", class_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to retrieve class",
                )),
            )
        }
    }
}

pub async fn update_class(
    service: &AcademicService,
    class_id: i64,
    update_data: UpdateClassRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Some(spp_amount) = update_data.spp_amount
        && spp_amount < 0
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "SPP amount must not be negative",
        )));
    }

    match storage.update_class(class_id, update_data).await {
        Ok(Some(class)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ClassResponse { class },
            "Class updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ClassNotFound,
            "Class not found",
        ))),
        Err(e) => {
            error!("Failed to update class {}: {}", class_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to update class",
                )),
            )
        }
    }
}

pub async fn list_classes(
    service: &AcademicService,
    query: ClassListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let list_query = ClassListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        search: query.search,
    };

    match storage.list_classes_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Class list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve class list: {e}"),
            )),
        ),
    }
}

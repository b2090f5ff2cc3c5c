use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::academic::requests::{
    ClassListParams, CreateAcademicYearRequest, CreateClassRequest, EnrollStudentRequest,
    UpdateClassRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::AcademicService;
use crate::utils::SafeIdI64;

static ACADEMIC_SERVICE: Lazy<AcademicService> = Lazy::new(AcademicService::new_lazy);

pub async fn create_academic_year(
    req: HttpRequest,
    year_data: web::Json<CreateAcademicYearRequest>,
) -> ActixResult<HttpResponse> {
    ACADEMIC_SERVICE
        .create_academic_year(year_data.into_inner(), &req)
        .await
}

pub async fn list_academic_years(req: HttpRequest) -> ActixResult<HttpResponse> {
    ACADEMIC_SERVICE.list_academic_years(&req).await
}

pub async fn activate_academic_year(
    req: HttpRequest,
    year_id: SafeIdI64,
) -> ActixResult<HttpResponse> {
    ACADEMIC_SERVICE
        .activate_academic_year(year_id.0, &req)
        .await
}

pub async fn create_class(
    req: HttpRequest,
    class_data: web::Json<CreateClassRequest>,
) -> ActixResult<HttpResponse> {
    ACADEMIC_SERVICE
        .create_class(class_data.into_inner(), &req)
        .await
}

pub async fn list_classes(
    req: HttpRequest,
    query: web::Query<ClassListParams>,
) -> ActixResult<HttpResponse> {
    ACADEMIC_SERVICE.list_classes(query.into_inner(), &req).await
}

pub async fn get_class(req: HttpRequest, class_id: SafeIdI64) -> ActixResult<HttpResponse> {
    ACADEMIC_SERVICE.get_class(class_id.0, &req).await
}

pub async fn update_class(
    req: HttpRequest,
    class_id: SafeIdI64,
    update_data: web::Json<UpdateClassRequest>,
) -> ActixResult<HttpResponse> {
    ACADEMIC_SERVICE
        .update_class(class_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn enroll_student(
    req: HttpRequest,
    class_id: SafeIdI64,
    enrollment: web::Json<EnrollStudentRequest>,
) -> ActixResult<HttpResponse> {
    ACADEMIC_SERVICE
        .enroll_student(class_id.0, enrollment.into_inner(), &req)
        .await
}

pub fn configure_academic_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/academic-years")
            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
            .wrap(middlewares::RequireJWT)
            .route("", web::post().to(create_academic_year))
            .route("", web::get().to(list_academic_years))
            .route("/{id}/activate", web::post().to(activate_academic_year)),
    );
    cfg.service(
        web::scope("/api/v1/classes")
            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
            .wrap(middlewares::RequireJWT)
            .route("", web::post().to(create_class))
            .route("", web::get().to(list_classes))
            .route("/{id}", web::get().to(get_class))
            .route("/{id}", web::put().to(update_class))
            .route("/{id}/enroll", web::post().to(enroll_student)),
    );
}

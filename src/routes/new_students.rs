use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::new_students::requests::{NewStudentListParams, RegisterNewStudentRequest};
use crate::models::users::entities::UserRole;
use crate::services::NewStudentService;
use crate::utils::SafeIdI64;

static NEW_STUDENT_SERVICE: Lazy<NewStudentService> = Lazy::new(NewStudentService::new_lazy);

pub async fn register(
    req: HttpRequest,
    registration: web::Json<RegisterNewStudentRequest>,
) -> ActixResult<HttpResponse> {
    NEW_STUDENT_SERVICE
        .register(registration.into_inner(), &req)
        .await
}

pub async fn list_new_students(
    req: HttpRequest,
    query: web::Query<NewStudentListParams>,
) -> ActixResult<HttpResponse> {
    NEW_STUDENT_SERVICE
        .list_new_students(query.into_inner(), &req)
        .await
}

pub async fn get_new_student(
    req: HttpRequest,
    new_student_id: SafeIdI64,
) -> ActixResult<HttpResponse> {
    NEW_STUDENT_SERVICE
        .get_new_student(new_student_id.0, &req)
        .await
}

pub async fn approve(req: HttpRequest, new_student_id: SafeIdI64) -> ActixResult<HttpResponse> {
    NEW_STUDENT_SERVICE.approve(new_student_id.0, &req).await
}

pub async fn reject(req: HttpRequest, new_student_id: SafeIdI64) -> ActixResult<HttpResponse> {
    NEW_STUDENT_SERVICE.reject(new_student_id.0, &req).await
}

pub fn configure_new_student_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/new-students")
            // Registration is the one public write endpoint.
            .route("/register", web::post().to(register))
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .wrap(middlewares::RequireJWT)
                    .route("", web::get().to(list_new_students))
                    .route("/{id}", web::get().to(get_new_student))
                    .route("/{id}/approve", web::post().to(approve))
                    // DELETE on the approval resource withdraws it (reject).
                    .route("/{id}/approve", web::delete().to(reject)),
            ),
    );
}

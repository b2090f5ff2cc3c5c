use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::students::requests::{
    ChangeStudentStatusRequest, CreateStudentRequest, StudentListParams, UpdateStudentRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::StudentService;
use crate::utils::SafeIdI64;

static STUDENT_SERVICE: Lazy<StudentService> = Lazy::new(StudentService::new_lazy);

pub async fn list_students(
    req: HttpRequest,
    query: web::Query<StudentListParams>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.list_students(query.into_inner(), &req).await
}

pub async fn create_student(
    req: HttpRequest,
    student_data: web::Json<CreateStudentRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .create_student(student_data.into_inner(), &req)
        .await
}

pub async fn get_student(req: HttpRequest, student_id: SafeIdI64) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.get_student(student_id.0, &req).await
}

pub async fn update_student(
    req: HttpRequest,
    student_id: SafeIdI64,
    update_data: web::Json<UpdateStudentRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .update_student(student_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn change_student_status(
    req: HttpRequest,
    student_id: SafeIdI64,
    status_data: web::Json<ChangeStudentStatusRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .change_student_status(student_id.0, status_data.into_inner(), &req)
        .await
}

pub fn configure_student_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/students")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(
                        web::get().to(list_students).wrap(
                            middlewares::RequireRole::new_any(UserRole::finance_read_roles()),
                        ),
                    )
                    .route(
                        web::post()
                            .to(create_student)
                            .wrap(middlewares::RequireRole::new_any(UserRole::treasury_roles())),
                    ),
            )
            .service(
                web::resource("/{id}")
                    .route(
                        web::get().to(get_student).wrap(
                            middlewares::RequireRole::new_any(UserRole::finance_read_roles()),
                        ),
                    )
                    .route(
                        web::put()
                            .to(update_student)
                            .wrap(middlewares::RequireRole::new_any(UserRole::treasury_roles())),
                    ),
            )
            .service(
                web::resource("/{id}/status").route(
                    web::post()
                        .to(change_student_status)
                        .wrap(middlewares::RequireRole::new_any(UserRole::treasury_roles())),
                ),
            ),
    );
}

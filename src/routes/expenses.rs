use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::expenses::requests::{
    CreateExpenseRequest, ExpenseListParams, UpdateExpenseRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::ExpenseService;
use crate::utils::SafeIdI64;

static EXPENSE_SERVICE: Lazy<ExpenseService> = Lazy::new(ExpenseService::new_lazy);

pub async fn create_expense(
    req: HttpRequest,
    expense_data: web::Json<CreateExpenseRequest>,
) -> ActixResult<HttpResponse> {
    EXPENSE_SERVICE
        .create_expense(expense_data.into_inner(), &req)
        .await
}

pub async fn list_expenses(
    req: HttpRequest,
    query: web::Query<ExpenseListParams>,
) -> ActixResult<HttpResponse> {
    EXPENSE_SERVICE.list_expenses(query.into_inner(), &req).await
}

pub async fn get_expense(req: HttpRequest, expense_id: SafeIdI64) -> ActixResult<HttpResponse> {
    EXPENSE_SERVICE.get_expense(expense_id.0, &req).await
}

pub async fn update_expense(
    req: HttpRequest,
    expense_id: SafeIdI64,
    update_data: web::Json<UpdateExpenseRequest>,
) -> ActixResult<HttpResponse> {
    EXPENSE_SERVICE
        .update_expense(expense_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_expense(req: HttpRequest, expense_id: SafeIdI64) -> ActixResult<HttpResponse> {
    EXPENSE_SERVICE.delete_expense(expense_id.0, &req).await
}

pub fn configure_expense_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/expenses")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::treasury_roles()))
                    .route("", web::get().to(list_expenses))
                    .route("", web::post().to(create_expense))
                    .route("/{id}", web::get().to(get_expense))
                    .route("/{id}", web::put().to(update_expense))
                    .route("/{id}", web::delete().to(delete_expense)),
            ),
    );
}

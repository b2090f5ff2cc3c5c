use std::sync::Arc;

use crate::models::{
    academic::{
        entities::{AcademicYear, ActiveEnrollment, Enrollment, SchoolClass},
        requests::{
            ClassListQuery, CreateAcademicYearRequest, CreateClassRequest, EnrollStudentRequest,
            UpdateClassRequest,
        },
        responses::ClassListResponse,
    },
    billings::{
        entities::Billing,
        requests::{BillingListQuery, GenerateBillingsRequest},
        responses::{BillingDetailResponse, BillingListResponse, GenerateBillingsResponse},
    },
    expenses::{
        entities::Expense,
        requests::{CreateExpenseRequest, ExpenseListQuery, UpdateExpenseRequest},
        responses::ExpenseListResponse,
    },
    new_students::{
        entities::NewStudent,
        requests::{NewStudentListQuery, RegisterNewStudentRequest},
        responses::{ApprovalResponse, NewStudentListResponse},
    },
    payments::{
        entities::Payment,
        requests::{CreatePaymentRequest, InitiatePaymentRequest, PaymentListQuery},
        responses::{PaymentListResponse, PaymentResponse},
    },
    reports::{
        requests::ReportPeriodParams,
        responses::{BillingSummaryResponse, FinancialSummaryResponse, MonthlyReportResponse},
    },
    students::{
        entities::{Student, StudentStatus},
        requests::{CreateStudentRequest, StudentListQuery, UpdateStudentRequest},
        responses::StudentListResponse,
    },
    users::{
        entities::User,
        requests::{CreateUserRequest, UpdateUserRequest, UserListQuery},
        responses::UserListResponse,
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    // User management. `CreateUserRequest.password` already carries the
    // argon2 hash when it reaches the storage layer.
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse>;
    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>>;
    async fn delete_user(&self, id: i64) -> Result<bool>;
    async fn update_last_login(&self, id: i64) -> Result<bool>;
    async fn count_users(&self) -> Result<u64>;

    // Student records. No hard delete; lifecycle is status-based.
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student>;
    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>>;
    async fn get_student_by_nisn(&self, nisn: &str) -> Result<Option<Student>>;
    async fn list_students_with_pagination(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse>;
    async fn update_student(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>>;
    async fn change_student_status(
        &self,
        id: i64,
        status: StudentStatus,
    ) -> Result<Option<Student>>;

    // Prospective student applications. Register and approve run in one
    // transaction each.
    async fn register_new_student(
        &self,
        registration: RegisterNewStudentRequest,
    ) -> Result<NewStudent>;
    async fn get_new_student_by_id(&self, id: i64) -> Result<Option<NewStudent>>;
    async fn list_new_students_with_pagination(
        &self,
        query: NewStudentListQuery,
    ) -> Result<NewStudentListResponse>;
    async fn approve_new_student(
        &self,
        id: i64,
        student_password_hash: String,
    ) -> Result<ApprovalResponse>;
    async fn reject_new_student(&self, id: i64) -> Result<NewStudent>;

    // Academic master data.
    async fn create_academic_year(&self, year: CreateAcademicYearRequest) -> Result<AcademicYear>;
    async fn list_academic_years(&self) -> Result<Vec<AcademicYear>>;
    async fn get_academic_year_by_id(&self, id: i64) -> Result<Option<AcademicYear>>;
    async fn set_active_academic_year(&self, id: i64) -> Result<Option<AcademicYear>>;
    async fn create_class(&self, class: CreateClassRequest) -> Result<SchoolClass>;
    async fn get_class_by_id(&self, id: i64) -> Result<Option<SchoolClass>>;
    async fn update_class(
        &self,
        id: i64,
        update: UpdateClassRequest,
    ) -> Result<Option<SchoolClass>>;
    async fn list_classes_with_pagination(
        &self,
        query: ClassListQuery,
    ) -> Result<ClassListResponse>;
    async fn enroll_student(
        &self,
        class_id: i64,
        enrollment: EnrollStudentRequest,
    ) -> Result<Enrollment>;
    async fn list_active_enrollments(
        &self,
        academic_year_id: i64,
        class_ids: Option<Vec<i64>>,
    ) -> Result<Vec<ActiveEnrollment>>;

    // Billings.
    async fn generate_billings(
        &self,
        request: GenerateBillingsRequest,
        default_amount: i64,
        due_date_ts: i64,
    ) -> Result<GenerateBillingsResponse>;
    async fn get_billing_by_id(&self, id: i64) -> Result<Option<Billing>>;
    async fn get_billing_detail(&self, id: i64) -> Result<Option<BillingDetailResponse>>;
    async fn list_billings_with_pagination(
        &self,
        query: BillingListQuery,
    ) -> Result<BillingListResponse>;
    async fn cancel_billing(&self, id: i64) -> Result<Billing>;
    async fn waive_billing(&self, id: i64) -> Result<Billing>;

    // Payments. Apply/verify mutate the billing in the same transaction.
    async fn record_manual_payment(
        &self,
        request: CreatePaymentRequest,
        reference_number: String,
        verified_by: i64,
    ) -> Result<PaymentResponse>;
    async fn initiate_payment(
        &self,
        request: InitiatePaymentRequest,
        reference_number: String,
    ) -> Result<PaymentResponse>;
    async fn verify_payment(
        &self,
        id: i64,
        approve: bool,
        verified_by: i64,
        notes: Option<String>,
    ) -> Result<PaymentResponse>;
    async fn get_payment_by_id(&self, id: i64) -> Result<Option<Payment>>;
    async fn list_payments_with_pagination(
        &self,
        query: PaymentListQuery,
    ) -> Result<PaymentListResponse>;

    // Expenses. Dates arrive as unix seconds, parsed by the service.
    async fn create_expense(
        &self,
        expense: CreateExpenseRequest,
        expense_date_ts: i64,
        recorded_by: i64,
    ) -> Result<Expense>;
    async fn get_expense_by_id(&self, id: i64) -> Result<Option<Expense>>;
    async fn update_expense(
        &self,
        id: i64,
        update: UpdateExpenseRequest,
        expense_date_ts: Option<i64>,
    ) -> Result<Option<Expense>>;
    async fn delete_expense(&self, id: i64) -> Result<bool>;
    async fn list_expenses_with_pagination(
        &self,
        query: ExpenseListQuery,
    ) -> Result<ExpenseListResponse>;

    // Reports, computed by SQL aggregation.
    async fn financial_summary(
        &self,
        period: ReportPeriodParams,
    ) -> Result<FinancialSummaryResponse>;
    async fn billing_summary(&self, period: ReportPeriodParams) -> Result<BillingSummaryResponse>;
    async fn monthly_report(&self, year: i32) -> Result<MonthlyReportResponse>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}

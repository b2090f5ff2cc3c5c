//! SeaORM storage implementation.
//!
//! Unified database layer supporting SQLite, PostgreSQL and MySQL.

mod academic;
mod billings;
mod expenses;
mod new_students;
mod payments;
mod reports;
mod students;
mod users;

use crate::config::AppConfig;
use crate::errors::{Result, TsmartError};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        Migrator::up(&db, None)
            .await
            .map_err(|e| TsmartError::database_operation(format!("Database migration failed: {e}")))?;

        info!("SeaORM storage initialized, database: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite-specific connection (WAL + pragma tuning).
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| TsmartError::database_config(format!("SQLite URL parse failed: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| TsmartError::database_connection(format!("SQLite connect failed: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// Generic connection (PostgreSQL, MySQL).
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| TsmartError::database_connection(format!("Cannot connect to database: {e}")))
    }

    /// Infers the database backend from the URL and normalizes it.
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(TsmartError::database_config(format!(
                "Cannot infer database backend from URL: {url}. Supported: sqlite://, postgres://, mysql://, or a .db/.sqlite file path"
            )))
        }
    }
}

// Storage trait implementation
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
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // Users
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.get_user_by_username_impl(username).await
    }

    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse> {
        self.list_users_with_pagination_impl(query).await
    }

    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>> {
        self.update_user_impl(id, update).await
    }

    async fn delete_user(&self, id: i64) -> Result<bool> {
        self.delete_user_impl(id).await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    // Students
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student> {
        self.create_student_impl(student).await
    }

    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>> {
        self.get_student_by_id_impl(id).await
    }

    async fn get_student_by_nisn(&self, nisn: &str) -> Result<Option<Student>> {
        self.get_student_by_nisn_impl(nisn).await
    }

    async fn list_students_with_pagination(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse> {
        self.list_students_with_pagination_impl(query).await
    }

    async fn update_student(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        self.update_student_impl(id, update).await
    }

    async fn change_student_status(
        &self,
        id: i64,
        status: StudentStatus,
    ) -> Result<Option<Student>> {
        self.change_student_status_impl(id, status).await
    }

    // New student applications
    async fn register_new_student(
        &self,
        registration: RegisterNewStudentRequest,
    ) -> Result<NewStudent> {
        self.register_new_student_impl(registration).await
    }

    async fn get_new_student_by_id(&self, id: i64) -> Result<Option<NewStudent>> {
        self.get_new_student_by_id_impl(id).await
    }

    async fn list_new_students_with_pagination(
        &self,
        query: NewStudentListQuery,
    ) -> Result<NewStudentListResponse> {
        self.list_new_students_with_pagination_impl(query).await
    }

    async fn approve_new_student(
        &self,
        id: i64,
        student_password_hash: String,
    ) -> Result<ApprovalResponse> {
        self.approve_new_student_impl(id, student_password_hash)
            .await
    }

    async fn reject_new_student(&self, id: i64) -> Result<NewStudent> {
        self.reject_new_student_impl(id).await
    }

    // Academic master data
    async fn create_academic_year(&self, year: CreateAcademicYearRequest) -> Result<AcademicYear> {
        self.create_academic_year_impl(year).await
    }

    async fn list_academic_years(&self) -> Result<Vec<AcademicYear>> {
        self.list_academic_years_impl().await
    }

    async fn get_academic_year_by_id(&self, id: i64) -> Result<Option<AcademicYear>> {
        self.get_academic_year_by_id_impl(id).await
    }

    async fn set_active_academic_year(&self, id: i64) -> Result<Option<AcademicYear>> {
        self.set_active_academic_year_impl(id).await
    }

    async fn create_class(&self, class: CreateClassRequest) -> Result<SchoolClass> {
        self.create_class_impl(class).await
    }

    async fn get_class_by_id(&self, id: i64) -> Result<Option<SchoolClass>> {
        self.get_class_by_id_impl(id).await
    }

    async fn update_class(
        &self,
        id: i64,
        update: UpdateClassRequest,
    ) -> Result<Option<SchoolClass>> {
        self.update_class_impl(id, update).await
    }

    async fn list_classes_with_pagination(
        &self,
        query: ClassListQuery,
    ) -> Result<ClassListResponse> {
        self.list_classes_with_pagination_impl(query).await
    }

    async fn enroll_student(
        &self,
        class_id: i64,
        enrollment: EnrollStudentRequest,
    ) -> Result<Enrollment> {
        self.enroll_student_impl(class_id, enrollment).await
    }

    async fn list_active_enrollments(
        &self,
        academic_year_id: i64,
        class_ids: Option<Vec<i64>>,
    ) -> Result<Vec<ActiveEnrollment>> {
        self.list_active_enrollments_impl(academic_year_id, class_ids)
            .await
    }

    // Billings
    async fn generate_billings(
        &self,
        request: GenerateBillingsRequest,
        default_amount: i64,
        due_date_ts: i64,
    ) -> Result<GenerateBillingsResponse> {
        self.generate_billings_impl(request, default_amount, due_date_ts)
            .await
    }

    async fn get_billing_by_id(&self, id: i64) -> Result<Option<Billing>> {
        self.get_billing_by_id_impl(id).await
    }

    async fn get_billing_detail(&self, id: i64) -> Result<Option<BillingDetailResponse>> {
        self.get_billing_detail_impl(id).await
    }

    async fn list_billings_with_pagination(
        &self,
        query: BillingListQuery,
    ) -> Result<BillingListResponse> {
        self.list_billings_with_pagination_impl(query).await
    }

    async fn cancel_billing(&self, id: i64) -> Result<Billing> {
        self.cancel_billing_impl(id).await
    }

    async fn waive_billing(&self, id: i64) -> Result<Billing> {
        self.waive_billing_impl(id).await
    }

    // Payments
    async fn record_manual_payment(
        &self,
        request: CreatePaymentRequest,
        reference_number: String,
        verified_by: i64,
    ) -> Result<PaymentResponse> {
        self.record_manual_payment_impl(request, reference_number, verified_by)
            .await
    }

    async fn initiate_payment(
        &self,
        request: InitiatePaymentRequest,
        reference_number: String,
    ) -> Result<PaymentResponse> {
        self.initiate_payment_impl(request, reference_number).await
    }

    async fn verify_payment(
        &self,
        id: i64,
        approve: bool,
        verified_by: i64,
        notes: Option<String>,
    ) -> Result<PaymentResponse> {
        self.verify_payment_impl(id, approve, verified_by, notes)
            .await
    }

    async fn get_payment_by_id(&self, id: i64) -> Result<Option<Payment>> {
        self.get_payment_by_id_impl(id).await
    }

    async fn list_payments_with_pagination(
        &self,
        query: PaymentListQuery,
    ) -> Result<PaymentListResponse> {
        self.list_payments_with_pagination_impl(query).await
    }

    // Expenses
    async fn create_expense(
        &self,
        expense: CreateExpenseRequest,
        expense_date_ts: i64,
        recorded_by: i64,
    ) -> Result<Expense> {
        self.create_expense_impl(expense, expense_date_ts, recorded_by)
            .await
    }

    async fn get_expense_by_id(&self, id: i64) -> Result<Option<Expense>> {
        self.get_expense_by_id_impl(id).await
    }

    async fn update_expense(
        &self,
        id: i64,
        update: UpdateExpenseRequest,
        expense_date_ts: Option<i64>,
    ) -> Result<Option<Expense>> {
        self.update_expense_impl(id, update, expense_date_ts).await
    }

    async fn delete_expense(&self, id: i64) -> Result<bool> {
        self.delete_expense_impl(id).await
    }

    async fn list_expenses_with_pagination(
        &self,
        query: ExpenseListQuery,
    ) -> Result<ExpenseListResponse> {
        self.list_expenses_with_pagination_impl(query).await
    }

    // Reports
    async fn financial_summary(
        &self,
        period: ReportPeriodParams,
    ) -> Result<FinancialSummaryResponse> {
        self.financial_summary_impl(period).await
    }

    async fn billing_summary(&self, period: ReportPeriodParams) -> Result<BillingSummaryResponse> {
        self.billing_summary_impl(period).await
    }

    async fn monthly_report(&self, year: i32) -> Result<MonthlyReportResponse> {
        self.monthly_report_impl(year).await
    }
}

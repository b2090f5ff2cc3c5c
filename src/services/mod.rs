pub mod academic;
pub mod auth;
pub mod billings;
pub mod expenses;
pub mod new_students;
pub mod payments;
pub mod reports;
pub mod students;
pub mod users;

pub use academic::AcademicService;
pub use auth::AuthService;
pub use billings::BillingService;
pub use expenses::ExpenseService;
pub use new_students::NewStudentService;
pub use payments::PaymentService;
pub use reports::ReportService;
pub use students::StudentService;
pub use users::UserService;

pub mod academic;
pub mod auth;
pub mod billings;
pub mod expenses;
pub mod new_students;
pub mod payments;
pub mod reports;
pub mod students;
pub mod users;

pub use academic::configure_academic_routes;
pub use auth::configure_auth_routes;
pub use billings::configure_billing_routes;
pub use expenses::configure_expense_routes;
pub use new_students::configure_new_student_routes;
pub use payments::configure_payment_routes;
pub use reports::configure_report_routes;
pub use students::configure_student_routes;
pub use users::configure_user_routes;

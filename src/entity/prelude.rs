//! Entity re-exports with disambiguated names.

pub use super::academic_years::{
    ActiveModel as AcademicYearActiveModel, Entity as AcademicYears, Model as AcademicYearModel,
};
pub use super::billings::{
    ActiveModel as BillingActiveModel, Entity as Billings, Model as BillingModel,
};
pub use super::expenses::{
    ActiveModel as ExpenseActiveModel, Entity as Expenses, Model as ExpenseModel,
};
pub use super::new_students::{
    ActiveModel as NewStudentActiveModel, Entity as NewStudents, Model as NewStudentModel,
};
pub use super::payments::{
    ActiveModel as PaymentActiveModel, Entity as Payments, Model as PaymentModel,
};
pub use super::school_classes::{
    ActiveModel as SchoolClassActiveModel, Entity as SchoolClasses, Model as SchoolClassModel,
};
pub use super::student_classes::{
    ActiveModel as StudentClassActiveModel, Entity as StudentClasses, Model as StudentClassModel,
};
pub use super::students::{
    ActiveModel as StudentActiveModel, Entity as Students, Model as StudentModel,
};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};

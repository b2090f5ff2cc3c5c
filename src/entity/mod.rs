//! SeaORM entity definitions.
//!
//! These entities mirror the database tables and stay separate from the
//! business models in `models`. The storage layer runs CRUD against them and
//! converts rows into business entities.

pub mod prelude;

pub mod academic_years;
pub mod billings;
pub mod expenses;
pub mod new_students;
pub mod payments;
pub mod school_classes;
pub mod student_classes;
pub mod students;
pub mod users;

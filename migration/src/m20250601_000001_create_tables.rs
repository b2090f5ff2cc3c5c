use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Users table
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Username)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Users::Role).string().not_null())
                    .col(ColumnDef::new(Users::Status).string().not_null())
                    .col(ColumnDef::new(Users::DisplayName).string().null())
                    .col(ColumnDef::new(Users::Phone).string().null())
                    .col(ColumnDef::new(Users::StudentId).big_integer().null())
                    .col(ColumnDef::new(Users::LastLogin).big_integer().null())
                    .col(ColumnDef::new(Users::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Users::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // Students table
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Students::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Students::Nisn)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Students::FullName).string().not_null())
                    .col(ColumnDef::new(Students::Gender).string().null())
                    .col(ColumnDef::new(Students::Address).text().null())
                    .col(ColumnDef::new(Students::Phone).string().null())
                    .col(ColumnDef::new(Students::GuardianName).string().null())
                    .col(ColumnDef::new(Students::Status).string().not_null())
                    .col(ColumnDef::new(Students::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Students::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // Prospective student applications
        manager
            .create_table(
                Table::create()
                    .table(NewStudents::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(NewStudents::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(NewStudents::Nisn).string().not_null())
                    .col(ColumnDef::new(NewStudents::FullName).string().not_null())
                    .col(ColumnDef::new(NewStudents::BirthPlace).string().null())
                    .col(ColumnDef::new(NewStudents::BirthDate).string().null())
                    .col(ColumnDef::new(NewStudents::Address).text().null())
                    .col(ColumnDef::new(NewStudents::Phone).string().null())
                    .col(ColumnDef::new(NewStudents::GuardianName).string().null())
                    .col(
                        ColumnDef::new(NewStudents::RegistrationPaid)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(NewStudents::ApprovalStatus)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(NewStudents::UserId).big_integer().not_null())
                    .col(ColumnDef::new(NewStudents::StudentId).big_integer().null())
                    .col(
                        ColumnDef::new(NewStudents::ProcessedAt)
                            .big_integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(NewStudents::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(NewStudents::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(NewStudents::Table, NewStudents::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Academic years
        manager
            .create_table(
                Table::create()
                    .table(AcademicYears::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AcademicYears::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AcademicYears::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(AcademicYears::IsActive)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(AcademicYears::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AcademicYears::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // School classes (SPP amount per class lives here)
        manager
            .create_table(
                Table::create()
                    .table(SchoolClasses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SchoolClasses::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SchoolClasses::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(SchoolClasses::Level).string().null())
                    .col(
                        ColumnDef::new(SchoolClasses::SppAmount)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SchoolClasses::HomeroomTeacher)
                            .string()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(SchoolClasses::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SchoolClasses::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Student-class enrollments per academic year
        manager
            .create_table(
                Table::create()
                    .table(StudentClasses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StudentClasses::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(StudentClasses::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentClasses::ClassId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentClasses::AcademicYearId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(StudentClasses::Status).string().not_null())
                    .col(
                        ColumnDef::new(StudentClasses::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(StudentClasses::Table, StudentClasses::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(StudentClasses::Table, StudentClasses::ClassId)
                            .to(SchoolClasses::Table, SchoolClasses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(StudentClasses::Table, StudentClasses::AcademicYearId)
                            .to(AcademicYears::Table, AcademicYears::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_student_classes_unique")
                    .table(StudentClasses::Table)
                    .col(StudentClasses::StudentId)
                    .col(StudentClasses::ClassId)
                    .col(StudentClasses::AcademicYearId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Billings: one obligation per student per period/type
        manager
            .create_table(
                Table::create()
                    .table(Billings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Billings::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Billings::BillNumber)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Billings::StudentId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Billings::AcademicYearId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Billings::BillingType).string().not_null())
                    .col(ColumnDef::new(Billings::Month).integer().not_null())
                    .col(ColumnDef::new(Billings::Year).integer().not_null())
                    .col(
                        ColumnDef::new(Billings::TotalAmount)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Billings::PaidAmount)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Billings::Status).string().not_null())
                    .col(ColumnDef::new(Billings::DueDate).big_integer().not_null())
                    .col(ColumnDef::new(Billings::Description).text().null())
                    .col(ColumnDef::new(Billings::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Billings::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Billings::Table, Billings::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Billings::Table, Billings::AcademicYearId)
                            .to(AcademicYears::Table, AcademicYears::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_billings_unique_period")
                    .table(Billings::Table)
                    .col(Billings::StudentId)
                    .col(Billings::BillingType)
                    .col(Billings::Month)
                    .col(Billings::Year)
                    .col(Billings::AcademicYearId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_billings_status")
                    .table(Billings::Table)
                    .col(Billings::Status)
                    .to_owned(),
            )
            .await?;

        // Payments: one attempt against a single billing
        manager
            .create_table(
                Table::create()
                    .table(Payments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Payments::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Payments::ReferenceNumber)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Payments::BillingId).big_integer().not_null())
                    .col(ColumnDef::new(Payments::Amount).big_integer().not_null())
                    .col(
                        ColumnDef::new(Payments::AdminFee)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Payments::TotalPaid).big_integer().not_null())
                    .col(ColumnDef::new(Payments::Method).string().not_null())
                    .col(ColumnDef::new(Payments::Status).string().not_null())
                    .col(ColumnDef::new(Payments::PaidAt).big_integer().null())
                    .col(ColumnDef::new(Payments::VerifiedBy).big_integer().null())
                    .col(ColumnDef::new(Payments::Notes).text().null())
                    .col(ColumnDef::new(Payments::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Payments::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Payments::Table, Payments::BillingId)
                            .to(Billings::Table, Billings::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_payments_billing")
                    .table(Payments::Table)
                    .col(Payments::BillingId)
                    .to_owned(),
            )
            .await?;

        // Expenses
        manager
            .create_table(
                Table::create()
                    .table(Expenses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Expenses::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Expenses::Title).string().not_null())
                    .col(ColumnDef::new(Expenses::Category).string().not_null())
                    .col(ColumnDef::new(Expenses::Amount).big_integer().not_null())
                    .col(
                        ColumnDef::new(Expenses::ExpenseDate)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Expenses::Description).text().null())
                    .col(
                        ColumnDef::new(Expenses::RecordedBy)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Expenses::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Expenses::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Expenses::Table, Expenses::RecordedBy)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Expenses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Payments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Billings::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(StudentClasses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SchoolClasses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AcademicYears::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(NewStudents::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    Username,
    PasswordHash,
    Role,
    Status,
    DisplayName,
    Phone,
    StudentId,
    LastLogin,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Students {
    #[sea_orm(iden = "students")]
    Table,
    Id,
    Nisn,
    FullName,
    Gender,
    Address,
    Phone,
    GuardianName,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum NewStudents {
    #[sea_orm(iden = "new_students")]
    Table,
    Id,
    Nisn,
    FullName,
    BirthPlace,
    BirthDate,
    Address,
    Phone,
    GuardianName,
    RegistrationPaid,
    ApprovalStatus,
    UserId,
    StudentId,
    ProcessedAt,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum AcademicYears {
    #[sea_orm(iden = "academic_years")]
    Table,
    Id,
    Name,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum SchoolClasses {
    #[sea_orm(iden = "school_classes")]
    Table,
    Id,
    Name,
    Level,
    SppAmount,
    HomeroomTeacher,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum StudentClasses {
    #[sea_orm(iden = "student_classes")]
    Table,
    Id,
    StudentId,
    ClassId,
    AcademicYearId,
    Status,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Billings {
    #[sea_orm(iden = "billings")]
    Table,
    Id,
    BillNumber,
    StudentId,
    AcademicYearId,
    BillingType,
    Month,
    Year,
    TotalAmount,
    PaidAmount,
    Status,
    DueDate,
    Description,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Payments {
    #[sea_orm(iden = "payments")]
    Table,
    Id,
    ReferenceNumber,
    BillingId,
    Amount,
    AdminFee,
    TotalPaid,
    Method,
    Status,
    PaidAt,
    VerifiedBy,
    Notes,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Expenses {
    #[sea_orm(iden = "expenses")]
    Table,
    Id,
    Title,
    Category,
    Amount,
    ExpenseDate,
    Description,
    RecordedBy,
    CreatedAt,
    UpdatedAt,
}

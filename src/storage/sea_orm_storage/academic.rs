use super::SeaOrmStorage;
use crate::entity::prelude::{
    AcademicYearActiveModel, AcademicYears, SchoolClassActiveModel, SchoolClasses,
    StudentClassActiveModel, StudentClasses, Students,
};
use crate::entity::{academic_years, school_classes, student_classes, students};
use crate::errors::{Result, TsmartError};
use crate::models::{
    PaginationInfo,
    academic::{
        entities::{AcademicYear, ActiveEnrollment, Enrollment, EnrollmentStatus, SchoolClass},
        requests::{
            ClassListQuery, CreateAcademicYearRequest, CreateClassRequest, EnrollStudentRequest,
            UpdateClassRequest,
        },
        responses::ClassListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, FromQueryResult, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Set, TransactionTrait,
};

#[derive(Debug, FromQueryResult)]
struct ActiveEnrollmentRow {
    student_id: i64,
    student_name: String,
    nisn: String,
    class_id: i64,
    class_name: String,
    spp_amount: i64,
}

impl SeaOrmStorage {
    pub async fn create_academic_year_impl(
        &self,
        req: CreateAcademicYearRequest,
    ) -> Result<AcademicYear> {
        let now = chrono::Utc::now().timestamp();

        let existing = AcademicYears::find()
            .filter(academic_years::Column::Name.eq(req.name.as_str()))
            .one(&self.db)
            .await
            .map_err(|e| {
                TsmartError::database_operation(format!("Failed to query academic year: {e}"))
            })?;
        if existing.is_some() {
            return Err(TsmartError::conflict(format!(
                "Academic year {} already exists",
                req.name
            )));
        }

        let model = AcademicYearActiveModel {
            name: Set(req.name),
            is_active: Set(req.is_active),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(|e| {
            TsmartError::database_operation(format!("Failed to create academic year: {e}"))
        })?;

        if result.is_active {
            // Enforce the single-active invariant for years created active.
            self.set_active_academic_year_impl(result.id).await?;
        }

        Ok(result.into_academic_year())
    }

    pub async fn list_academic_years_impl(&self) -> Result<Vec<AcademicYear>> {
        let years = AcademicYears::find()
            .order_by_desc(academic_years::Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| {
                TsmartError::database_operation(format!("Failed to list academic years: {e}"))
            })?;

        Ok(years.into_iter().map(|m| m.into_academic_year()).collect())
    }

    pub async fn get_academic_year_by_id_impl(&self, id: i64) -> Result<Option<AcademicYear>> {
        let result = AcademicYears::find_by_id(id).one(&self.db).await.map_err(|e| {
            TsmartError::database_operation(format!("Failed to query academic year: {e}"))
        })?;

        Ok(result.map(|m| m.into_academic_year()))
    }

    /// Activates one year and deactivates all others in a single transaction.
    pub async fn set_active_academic_year_impl(&self, id: i64) -> Result<Option<AcademicYear>> {
        let now = chrono::Utc::now().timestamp();

        let txn = self.db.begin().await.map_err(|e| {
            TsmartError::database_operation(format!("Failed to open transaction: {e}"))
        })?;

        let existing = AcademicYears::find_by_id(id).one(&txn).await.map_err(|e| {
            TsmartError::database_operation(format!("Failed to query academic year: {e}"))
        })?;
        if existing.is_none() {
            return Ok(None);
        }

        AcademicYears::update_many()
            .col_expr(
                academic_years::Column::IsActive,
                sea_orm::sea_query::Expr::value(false),
            )
            .col_expr(
                academic_years::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(now),
            )
            .filter(academic_years::Column::Id.ne(id))
            .exec(&txn)
            .await
            .map_err(|e| {
                TsmartError::database_operation(format!("Failed to deactivate academic years: {e}"))
            })?;

        let activated = AcademicYearActiveModel {
            id: Set(id),
            is_active: Set(true),
            updated_at: Set(now),
            ..Default::default()
        }
        .update(&txn)
        .await
        .map_err(|e| {
            TsmartError::database_operation(format!("Failed to activate academic year: {e}"))
        })?;

        txn.commit().await.map_err(|e| {
            TsmartError::database_operation(format!("Failed to commit activation: {e}"))
        })?;

        Ok(Some(activated.into_academic_year()))
    }

    pub async fn create_class_impl(&self, req: CreateClassRequest) -> Result<SchoolClass> {
        let now = chrono::Utc::now().timestamp();

        let existing = SchoolClasses::find()
            .filter(school_classes::Column::Name.eq(req.name.as_str()))
            .one(&self.db)
            .await
            .map_err(|e| TsmartError::database_operation(format!("Failed to query class: {e}")))?;
        if existing.is_some() {
            return Err(TsmartError::conflict(format!(
                "Class {} already exists",
                req.name
            )));
        }

        let model = SchoolClassActiveModel {
            name: Set(req.name),
            level: Set(req.level),
            spp_amount: Set(req.spp_amount),
            homeroom_teacher: Set(req.homeroom_teacher),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| TsmartError::database_operation(format!("Failed to create class: {e}")))?;

        Ok(result.into_school_class())
    }

    pub async fn get_class_by_id_impl(&self, id: i64) -> Result<Option<SchoolClass>> {
        let result = SchoolClasses::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| TsmartError::database_operation(format!("Failed to query class: {e}")))?;

        Ok(result.map(|m| m.into_school_class()))
    }

    pub async fn update_class_impl(
        &self,
        id: i64,
        update: UpdateClassRequest,
    ) -> Result<Option<SchoolClass>> {
        let existing = self.get_class_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = SchoolClassActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }

        if let Some(level) = update.level {
            model.level = Set(Some(level));
        }

        if let Some(spp_amount) = update.spp_amount {
            model.spp_amount = Set(spp_amount);
        }

        if let Some(homeroom_teacher) = update.homeroom_teacher {
            model.homeroom_teacher = Set(Some(homeroom_teacher));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| TsmartError::database_operation(format!("Failed to update class: {e}")))?;

        self.get_class_by_id_impl(id).await
    }

    pub async fn list_classes_with_pagination_impl(
        &self,
        query: ClassListQuery,
    ) -> Result<ClassListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = SchoolClasses::find();

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(school_classes::Column::Name.contains(&escaped));
        }

        select = select.order_by_asc(school_classes::Column::Name);

        let paginator = select.paginate(&self.db, size);
        let total = paginator.num_items().await.map_err(|e| {
            TsmartError::database_operation(format!("Failed to count classes: {e}"))
        })?;

        let pages = paginator.num_pages().await.map_err(|e| {
            TsmartError::database_operation(format!("Failed to count class pages: {e}"))
        })?;

        let classes = paginator.fetch_page(page - 1).await.map_err(|e| {
            TsmartError::database_operation(format!("Failed to list classes: {e}"))
        })?;

        Ok(ClassListResponse {
            items: classes.into_iter().map(|m| m.into_school_class()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    pub async fn enroll_student_impl(
        &self,
        class_id: i64,
        req: EnrollStudentRequest,
    ) -> Result<Enrollment> {
        let now = chrono::Utc::now().timestamp();

        let student = Students::find_by_id(req.student_id)
            .one(&self.db)
            .await
            .map_err(|e| TsmartError::database_operation(format!("Failed to query student: {e}")))?;
        if student.is_none() {
            return Err(TsmartError::not_found(format!(
                "Student {} not found",
                req.student_id
            )));
        }

        let class = SchoolClasses::find_by_id(class_id)
            .one(&self.db)
            .await
            .map_err(|e| TsmartError::database_operation(format!("Failed to query class: {e}")))?;
        if class.is_none() {
            return Err(TsmartError::not_found(format!("Class {class_id} not found")));
        }

        let existing = StudentClasses::find()
            .filter(student_classes::Column::StudentId.eq(req.student_id))
            .filter(student_classes::Column::ClassId.eq(class_id))
            .filter(student_classes::Column::AcademicYearId.eq(req.academic_year_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                TsmartError::database_operation(format!("Failed to query enrollment: {e}"))
            })?;
        if existing.is_some() {
            return Err(TsmartError::conflict(format!(
                "Student {} already enrolled in class {} for this academic year",
                req.student_id, class_id
            )));
        }

        let model = StudentClassActiveModel {
            student_id: Set(req.student_id),
            class_id: Set(class_id),
            academic_year_id: Set(req.academic_year_id),
            status: Set(EnrollmentStatus::Active.to_string()),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(|e| {
            TsmartError::database_operation(format!("Failed to enroll student: {e}"))
        })?;

        Ok(result.into_enrollment())
    }

    /// Active enrollments joined with student and class, scoped to one
    /// academic year and optionally a set of classes. Feeds billing
    /// generation.
    pub async fn list_active_enrollments_impl(
        &self,
        academic_year_id: i64,
        class_ids: Option<Vec<i64>>,
    ) -> Result<Vec<ActiveEnrollment>> {
        let mut select = StudentClasses::find()
            .join(
                sea_orm::JoinType::InnerJoin,
                student_classes::Relation::Student.def(),
            )
            .join(
                sea_orm::JoinType::InnerJoin,
                student_classes::Relation::SchoolClass.def(),
            )
            .filter(student_classes::Column::AcademicYearId.eq(academic_year_id))
            .filter(student_classes::Column::Status.eq(EnrollmentStatus::Active.to_string()))
            .select_only()
            .column(student_classes::Column::StudentId)
            .column_as(students::Column::FullName, "student_name")
            .column(students::Column::Nisn)
            .column(student_classes::Column::ClassId)
            .column_as(school_classes::Column::Name, "class_name")
            .column(school_classes::Column::SppAmount);

        if let Some(class_ids) = class_ids
            && !class_ids.is_empty()
        {
            select = select.filter(student_classes::Column::ClassId.is_in(class_ids));
        }

        let rows = select
            .into_model::<ActiveEnrollmentRow>()
            .all(&self.db)
            .await
            .map_err(|e| {
                TsmartError::database_operation(format!("Failed to list enrollments: {e}"))
            })?;

        Ok(rows
            .into_iter()
            .map(|r| ActiveEnrollment {
                student_id: r.student_id,
                student_name: r.student_name,
                nisn: r.nisn,
                class_id: r.class_id,
                class_name: r.class_name,
                spp_amount: r.spp_amount,
            })
            .collect())
    }
}

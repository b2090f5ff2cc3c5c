use super::SeaOrmStorage;
use crate::entity::student_classes;
use crate::entity::students::{ActiveModel, Column, Entity as Students};
use crate::errors::{Result, TsmartError};
use crate::models::{
    PaginationInfo,
    students::{
        entities::{Student, StudentStatus},
        requests::{CreateStudentRequest, StudentListQuery, UpdateStudentRequest},
        responses::StudentListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::sea_query::Query;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

impl SeaOrmStorage {
    pub async fn create_student_impl(&self, req: CreateStudentRequest) -> Result<Student> {
        let now = chrono::Utc::now().timestamp();

        // Duplicate NISN is a conflict, not a bare database error.
        let existing = self.get_student_by_nisn_impl(&req.nisn).await?;
        if existing.is_some() {
            return Err(TsmartError::conflict(format!(
                "Student with NISN {} already exists",
                req.nisn
            )));
        }

        let model = ActiveModel {
            nisn: Set(req.nisn),
            full_name: Set(req.full_name),
            gender: Set(req.gender),
            address: Set(req.address),
            phone: Set(req.phone),
            guardian_name: Set(req.guardian_name),
            status: Set(StudentStatus::Active.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(|e| {
            TsmartError::database_operation(format!("Failed to create student: {e}"))
        })?;

        Ok(result.into_student())
    }

    pub async fn get_student_by_id_impl(&self, id: i64) -> Result<Option<Student>> {
        let result = Students::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| TsmartError::database_operation(format!("Failed to query student: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    pub async fn get_student_by_nisn_impl(&self, nisn: &str) -> Result<Option<Student>> {
        let result = Students::find()
            .filter(Column::Nisn.eq(nisn))
            .one(&self.db)
            .await
            .map_err(|e| TsmartError::database_operation(format!("Failed to query student: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    pub async fn list_students_with_pagination_impl(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Students::find();

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::FullName.contains(&escaped))
                    .add(Column::Nisn.contains(&escaped)),
            );
        }

        if let Some(ref status) = query.status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }

        // Class filter goes through the enrollment table.
        if let Some(class_id) = query.class_id {
            select = select.filter(
                Column::Id.in_subquery(
                    Query::select()
                        .column(student_classes::Column::StudentId)
                        .from(student_classes::Entity)
                        .and_where(student_classes::Column::ClassId.eq(class_id))
                        .to_owned(),
                ),
            );
        }

        select = select.order_by_asc(Column::FullName);

        let paginator = select.paginate(&self.db, size);
        let total = paginator.num_items().await.map_err(|e| {
            TsmartError::database_operation(format!("Failed to count students: {e}"))
        })?;

        let pages = paginator.num_pages().await.map_err(|e| {
            TsmartError::database_operation(format!("Failed to count student pages: {e}"))
        })?;

        let students = paginator.fetch_page(page - 1).await.map_err(|e| {
            TsmartError::database_operation(format!("Failed to list students: {e}"))
        })?;

        Ok(StudentListResponse {
            items: students.into_iter().map(|m| m.into_student()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    pub async fn update_student_impl(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        let existing = self.get_student_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(full_name) = update.full_name {
            model.full_name = Set(full_name);
        }

        if let Some(gender) = update.gender {
            model.gender = Set(Some(gender));
        }

        if let Some(address) = update.address {
            model.address = Set(Some(address));
        }

        if let Some(phone) = update.phone {
            model.phone = Set(Some(phone));
        }

        if let Some(guardian_name) = update.guardian_name {
            model.guardian_name = Set(Some(guardian_name));
        }

        model.update(&self.db).await.map_err(|e| {
            TsmartError::database_operation(format!("Failed to update student: {e}"))
        })?;

        self.get_student_by_id_impl(id).await
    }

    pub async fn change_student_status_impl(
        &self,
        id: i64,
        status: StudentStatus,
    ) -> Result<Option<Student>> {
        let existing = self.get_student_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            id: Set(id),
            status: Set(status.to_string()),
            updated_at: Set(now),
            ..Default::default()
        };

        model.update(&self.db).await.map_err(|e| {
            TsmartError::database_operation(format!("Failed to change student status: {e}"))
        })?;

        self.get_student_by_id_impl(id).await
    }
}

use super::SeaOrmStorage;
use crate::entity::new_students::{
    ActiveModel as NewStudentActiveModel, Column, Entity as NewStudents,
};
use crate::entity::prelude::{StudentActiveModel, UserActiveModel, Users};
use crate::entity::{students, users};
use crate::errors::{Result, TsmartError};
use crate::models::{
    PaginationInfo,
    new_students::{
        entities::{ApprovalStatus, NewStudent},
        requests::{NewStudentListQuery, RegisterNewStudentRequest},
        responses::{ApprovalResponse, NewStudentListResponse},
    },
    students::entities::StudentStatus,
    users::entities::{UserRole, UserStatus},
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// Creates the NEW_STUDENT login and the application in one transaction.
    /// `req.password` must already be hashed.
    pub async fn register_new_student_impl(
        &self,
        req: RegisterNewStudentRequest,
    ) -> Result<NewStudent> {
        let now = chrono::Utc::now().timestamp();

        let existing_user = Users::find()
            .filter(users::Column::Username.eq(req.username.as_str()))
            .one(&self.db)
            .await
            .map_err(|e| TsmartError::database_operation(format!("Failed to query user: {e}")))?;
        if existing_user.is_some() {
            return Err(TsmartError::conflict(format!(
                "Username {} already taken",
                req.username
            )));
        }

        let existing_student = students::Entity::find()
            .filter(students::Column::Nisn.eq(req.nisn.as_str()))
            .one(&self.db)
            .await
            .map_err(|e| TsmartError::database_operation(format!("Failed to query student: {e}")))?;
        if existing_student.is_some() {
            return Err(TsmartError::conflict(format!(
                "NISN {} is already registered as a student",
                req.nisn
            )));
        }

        let txn = self.db.begin().await.map_err(|e| {
            TsmartError::database_operation(format!("Failed to open transaction: {e}"))
        })?;

        let user = UserActiveModel {
            username: Set(req.username),
            password_hash: Set(req.password),
            role: Set(UserRole::NewStudent.to_string()),
            status: Set(UserStatus::Active.to_string()),
            display_name: Set(Some(req.full_name.clone())),
            phone: Set(req.phone.clone()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| {
            TsmartError::database_operation(format!("Failed to create registration login: {e}"))
        })?;

        let application = NewStudentActiveModel {
            nisn: Set(req.nisn),
            full_name: Set(req.full_name),
            birth_place: Set(req.birth_place),
            birth_date: Set(req.birth_date),
            address: Set(req.address),
            phone: Set(req.phone),
            guardian_name: Set(req.guardian_name),
            registration_paid: Set(false),
            approval_status: Set(ApprovalStatus::Pending.to_string()),
            user_id: Set(user.id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| {
            TsmartError::database_operation(format!("Failed to create application: {e}"))
        })?;

        txn.commit().await.map_err(|e| {
            TsmartError::database_operation(format!("Failed to commit registration: {e}"))
        })?;

        Ok(application.into_new_student())
    }

    pub async fn get_new_student_by_id_impl(&self, id: i64) -> Result<Option<NewStudent>> {
        let result = NewStudents::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| {
                TsmartError::database_operation(format!("Failed to query application: {e}"))
            })?;

        Ok(result.map(|m| m.into_new_student()))
    }

    pub async fn list_new_students_with_pagination_impl(
        &self,
        query: NewStudentListQuery,
    ) -> Result<NewStudentListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = NewStudents::find();

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

        if let Some(ref status) = query.approval_status {
            select = select.filter(Column::ApprovalStatus.eq(status.to_string()));
        }

        select = select.order_by_desc(Column::CreatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator.num_items().await.map_err(|e| {
            TsmartError::database_operation(format!("Failed to count applications: {e}"))
        })?;

        let pages = paginator.num_pages().await.map_err(|e| {
            TsmartError::database_operation(format!("Failed to count application pages: {e}"))
        })?;

        let items = paginator.fetch_page(page - 1).await.map_err(|e| {
            TsmartError::database_operation(format!("Failed to list applications: {e}"))
        })?;

        Ok(NewStudentListResponse {
            items: items.into_iter().map(|m| m.into_new_student()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// Approval transaction: creates exactly one Student (active) and one
    /// student login (username = NISN), deactivates the registration login
    /// and stamps the application. Refused without writing any row when the
    /// application is already processed or the NISN exists as a student.
    pub async fn approve_new_student_impl(
        &self,
        id: i64,
        student_password_hash: String,
    ) -> Result<ApprovalResponse> {
        let now = chrono::Utc::now().timestamp();

        let txn = self.db.begin().await.map_err(|e| {
            TsmartError::database_operation(format!("Failed to open transaction: {e}"))
        })?;

        let application = NewStudents::find_by_id(id)
            .one(&txn)
            .await
            .map_err(|e| {
                TsmartError::database_operation(format!("Failed to query application: {e}"))
            })?
            .ok_or_else(|| TsmartError::not_found(format!("Application {id} not found")))?;

        let status = application
            .approval_status
            .parse::<ApprovalStatus>()
            .unwrap_or(ApprovalStatus::Pending);
        if status.is_processed() {
            return Err(TsmartError::invalid_transition(format!(
                "Application {id} already {status}"
            )));
        }

        let nisn_taken = students::Entity::find()
            .filter(students::Column::Nisn.eq(application.nisn.as_str()))
            .one(&txn)
            .await
            .map_err(|e| TsmartError::database_operation(format!("Failed to query student: {e}")))?;
        if nisn_taken.is_some() {
            return Err(TsmartError::conflict(format!(
                "NISN {} already belongs to a student",
                application.nisn
            )));
        }

        let student = StudentActiveModel {
            nisn: Set(application.nisn.clone()),
            full_name: Set(application.full_name.clone()),
            address: Set(application.address.clone()),
            phone: Set(application.phone.clone()),
            guardian_name: Set(application.guardian_name.clone()),
            status: Set(StudentStatus::Active.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| TsmartError::database_operation(format!("Failed to create student: {e}")))?;

        // Default student credentials: username and password are the NISN.
        let student_username = application.nisn.clone();
        UserActiveModel {
            username: Set(student_username.clone()),
            password_hash: Set(student_password_hash),
            role: Set(UserRole::Student.to_string()),
            status: Set(UserStatus::Active.to_string()),
            display_name: Set(Some(application.full_name.clone())),
            phone: Set(application.phone.clone()),
            student_id: Set(Some(student.id)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| {
            TsmartError::database_operation(format!("Failed to create student login: {e}"))
        })?;

        UserActiveModel {
            id: Set(application.user_id),
            status: Set(UserStatus::Inactive.to_string()),
            updated_at: Set(now),
            ..Default::default()
        }
        .update(&txn)
        .await
        .map_err(|e| {
            TsmartError::database_operation(format!(
                "Failed to deactivate registration login: {e}"
            ))
        })?;

        let approved = NewStudentActiveModel {
            id: Set(application.id),
            approval_status: Set(ApprovalStatus::Approved.to_string()),
            student_id: Set(Some(student.id)),
            processed_at: Set(Some(now)),
            updated_at: Set(now),
            ..Default::default()
        }
        .update(&txn)
        .await
        .map_err(|e| {
            TsmartError::database_operation(format!("Failed to update application: {e}"))
        })?;

        txn.commit().await.map_err(|e| {
            TsmartError::database_operation(format!("Failed to commit approval: {e}"))
        })?;

        Ok(ApprovalResponse {
            new_student: approved.into_new_student(),
            student: student.into_student(),
            student_username,
        })
    }

    pub async fn reject_new_student_impl(&self, id: i64) -> Result<NewStudent> {
        let now = chrono::Utc::now().timestamp();

        let application = NewStudents::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| {
                TsmartError::database_operation(format!("Failed to query application: {e}"))
            })?
            .ok_or_else(|| TsmartError::not_found(format!("Application {id} not found")))?;

        let status = application
            .approval_status
            .parse::<ApprovalStatus>()
            .unwrap_or(ApprovalStatus::Pending);
        if status.is_processed() {
            return Err(TsmartError::invalid_transition(format!(
                "Application {id} already {status}"
            )));
        }

        let rejected = NewStudentActiveModel {
            id: Set(application.id),
            approval_status: Set(ApprovalStatus::Rejected.to_string()),
            processed_at: Set(Some(now)),
            updated_at: Set(now),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .map_err(|e| {
            TsmartError::database_operation(format!("Failed to reject application: {e}"))
        })?;

        Ok(rejected.into_new_student())
    }
}

pub mod approve;
pub mod get;
pub mod list;
pub mod register;
pub mod reject;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::new_students::requests::{NewStudentListParams, RegisterNewStudentRequest};
use crate::storage::Storage;

pub struct NewStudentService {
    storage: Option<Arc<dyn Storage>>,
}

impl NewStudentService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    pub async fn register(
        &self,
        registration: RegisterNewStudentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        register::register_new_student(self, registration, request).await
    }

    pub async fn get_new_student(
        &self,
        new_student_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_new_student(self, new_student_id, request).await
    }

    pub async fn list_new_students(
        &self,
        query: NewStudentListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_new_students(self, query, request).await
    }

    pub async fn approve(
        &self,
        new_student_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        approve::approve_new_student(self, new_student_id, request).await
    }

    pub async fn reject(
        &self,
        new_student_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        reject::reject_new_student(self, new_student_id, request).await
    }
}

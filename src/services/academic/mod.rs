pub mod classes;
pub mod enroll;
pub mod years;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::academic::requests::{
    ClassListParams, CreateAcademicYearRequest, CreateClassRequest, EnrollStudentRequest,
    UpdateClassRequest,
};
use crate::storage::Storage;

pub struct AcademicService {
    storage: Option<Arc<dyn Storage>>,
}

impl AcademicService {
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

    pub async fn create_academic_year(
        &self,
        year_data: CreateAcademicYearRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        years::create_academic_year(self, year_data, request).await
    }

    pub async fn list_academic_years(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        years::list_academic_years(self, request).await
    }

    pub async fn activate_academic_year(
        &self,
        year_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        years::activate_academic_year(self, year_id, request).await
    }

    pub async fn create_class(
        &self,
        class_data: CreateClassRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        classes::create_class(self, class_data, request).await
    }

    pub async fn get_class(
        &self,
        class_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        classes::get_class(self, class_id, request).await
    }

    pub async fn update_class(
        &self,
        class_id: i64,
        update_data: UpdateClassRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        classes::update_class(self, class_id, update_data, request).await
    }

    pub async fn list_classes(
        &self,
        query: ClassListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        classes::list_classes(self, query, request).await
    }

    pub async fn enroll_student(
        &self,
        class_id: i64,
        enrollment: EnrollStudentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        enroll::enroll_student(self, class_id, enrollment, request).await
    }
}

pub mod cancel;
pub mod detail;
pub mod generate;
pub mod list;
pub mod waive;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::config::AppConfig;
use crate::models::billings::requests::{BillingListParams, GenerateBillingsRequest};
use crate::storage::Storage;

pub struct BillingService {
    storage: Option<Arc<dyn Storage>>,
}

impl BillingService {
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

    pub(crate) fn get_config(&self) -> &'static AppConfig {
        AppConfig::get()
    }

    pub async fn generate_billings(
        &self,
        generate_data: GenerateBillingsRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        generate::generate_billings(self, generate_data, request).await
    }

    pub async fn list_billings(
        &self,
        query: BillingListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_billings(self, query, request).await
    }

    pub async fn get_billing_detail(
        &self,
        billing_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        detail::get_billing_detail(self, billing_id, request).await
    }

    pub async fn cancel_billing(
        &self,
        billing_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        cancel::cancel_billing(self, billing_id, request).await
    }

    pub async fn waive_billing(
        &self,
        billing_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        waive::waive_billing(self, billing_id, request).await
    }
}

pub mod create;
pub mod get;
pub mod initiate;
pub mod list;
pub mod verify;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::{Datelike, Utc};
use std::sync::Arc;

use crate::models::payments::requests::{
    CreatePaymentRequest, InitiatePaymentRequest, PaymentListParams, VerifyPaymentRequest,
};
use crate::storage::Storage;

pub struct PaymentService {
    storage: Option<Arc<dyn Storage>>,
}

/// `PAY/{year}/{8 hex chars}` from a fresh UUID. Uniqueness is enforced by
/// the column index.
pub(crate) fn generate_reference_number() -> String {
    let token = uuid::Uuid::new_v4().simple().to_string();
    format!("PAY/{}/{}", Utc::now().year(), &token[..8].to_uppercase())
}

impl PaymentService {
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

    pub async fn record_payment(
        &self,
        payment_data: CreatePaymentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::record_payment(self, payment_data, request).await
    }

    pub async fn initiate_payment(
        &self,
        payment_data: InitiatePaymentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        initiate::initiate_payment(self, payment_data, request).await
    }

    pub async fn verify_payment(
        &self,
        payment_id: i64,
        verify_data: VerifyPaymentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        verify::verify_payment(self, payment_id, verify_data, request).await
    }

    pub async fn get_payment(
        &self,
        payment_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_payment(self, payment_id, request).await
    }

    pub async fn list_payments(
        &self,
        query: PaymentListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_payments(self, query, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_number_shape() {
        let reference = generate_reference_number();
        let parts: Vec<&str> = reference.split('/').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "PAY");
        assert_eq!(parts[2].len(), 8);
        assert!(parts[2].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_reference_numbers_differ() {
        assert_ne!(generate_reference_number(), generate_reference_number());
    }
}

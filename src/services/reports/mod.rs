pub mod summary;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::reports::requests::{MonthlyReportParams, ReportPeriodParams};
use crate::storage::Storage;

pub struct ReportService {
    storage: Option<Arc<dyn Storage>>,
}

impl ReportService {
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

    pub async fn financial_summary(
        &self,
        period: ReportPeriodParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        summary::financial_summary(self, period, request).await
    }

    pub async fn billing_summary(
        &self,
        period: ReportPeriodParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        summary::billing_summary(self, period, request).await
    }

    pub async fn monthly_report(
        &self,
        params: MonthlyReportParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        summary::monthly_report(self, params, request).await
    }
}

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ReportPeriodParams {
    pub month: Option<u32>,
    pub year: Option<i32>,
    pub academic_year_id: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MonthlyReportParams {
    pub year: i32,
}

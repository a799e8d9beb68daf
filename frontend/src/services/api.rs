use gloo::net::http::Request;
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::{
    endpoints, normalize_list, AttendanceRecord, Endpoint, FeeQuery, FeeRecord, FeeSummary,
    FetchError, ListPage, NoSummary, SalaryRecord, SalarySummary, ScheduleRecord,
};

use crate::services::config::AppConfig;

/// API client for the portal backend's list endpoints
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with the configured base URL
    pub fn new() -> Self {
        Self::with_base_url(AppConfig::from_env().api_base_url)
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    /// Salary history of the signed-in tutor, with earned/pending totals
    pub async fn get_tutor_salaries(
        &self,
    ) -> Result<ListPage<SalaryRecord, SalarySummary>, FetchError> {
        self.fetch_list(endpoints::tutor_salaries()).await
    }

    /// Attendance marks for one student
    pub async fn get_student_attendance(
        &self,
        student_id: &str,
    ) -> Result<ListPage<AttendanceRecord, NoSummary>, FetchError> {
        let student_id = student_id.trim();
        if student_id.is_empty() {
            return Err(FetchError::MissingIdentity);
        }
        let segment = String::from(js_sys::encode_uri_component(student_id));
        self.fetch_list(endpoints::student_attendance(&segment)).await
    }

    /// Fees of the signed-in student, with total/paid/pending figures
    pub async fn get_student_fees(
        &self,
        query: FeeQuery,
    ) -> Result<ListPage<FeeRecord, FeeSummary>, FetchError> {
        self.fetch_list(endpoints::student_fees(query)).await
    }

    /// Upcoming classes of the signed-in student
    pub async fn get_student_classes(
        &self,
    ) -> Result<ListPage<ScheduleRecord, NoSummary>, FetchError> {
        self.fetch_list(endpoints::student_classes()).await
    }

    async fn fetch_list<R, S>(&self, endpoint: Endpoint) -> Result<ListPage<R, S>, FetchError>
    where
        R: DeserializeOwned,
        S: DeserializeOwned,
    {
        let url = endpoint.url(&self.base_url);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(FetchError::Status { status, message });
        }

        let body = response
            .json::<Value>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))?;

        normalize_list(body, endpoint.shape)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

//! The four list endpoints and where each keeps its records.

use serde::{Deserialize, Serialize};

use crate::envelope::ListShape;

/// A list endpoint relative to the API base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub path: String,
    pub query: Vec<(&'static str, String)>,
    pub shape: ListShape,
}

impl Endpoint {
    /// Full URL. Query values are expected to be URL-safe already.
    pub fn url(&self, base_url: &str) -> String {
        let mut url = format!("{}{}", base_url.trim_end_matches('/'), self.path);
        for (i, (key, value)) in self.query.iter().enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.push_str(key);
            url.push('=');
            url.push_str(value);
        }
        url
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Options for the fee list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeQuery {
    /// Order by due date
    pub sort: SortOrder,
}

/// `{ success, data, summary }` with the rows under `data`
pub fn tutor_salaries() -> Endpoint {
    Endpoint {
        path: "/api/salaries/tutor".to_string(),
        query: Vec::new(),
        shape: ListShape::Field("data"),
    }
}

/// `{ success, data: { attendance } }`. `student_id` must already be
/// encoded as a path segment.
pub fn student_attendance(student_id: &str) -> Endpoint {
    Endpoint {
        path: format!("/api/attendance/student/{}", student_id),
        query: Vec::new(),
        shape: ListShape::Field("attendance"),
    }
}

/// `{ success, data, summary }` with the rows under `data`
pub fn student_fees(query: FeeQuery) -> Endpoint {
    Endpoint {
        path: "/api/fees/student".to_string(),
        query: vec![("sort", query.sort.as_str().to_string())],
        shape: ListShape::Field("data"),
    }
}

/// A bare array of classes, no envelope
pub fn student_classes() -> Endpoint {
    Endpoint {
        path: "/api/classes/student".to_string(),
        query: Vec::new(),
        shape: ListShape::Bare,
    }
}

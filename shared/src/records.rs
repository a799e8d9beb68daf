//! Per-domain rows and summaries as the portal API sends them.
//!
//! Every field is optional. The backend is inconsistent about which keys it
//! includes and whether amounts and ids arrive as numbers or strings, so the
//! views must be able to render whatever subset shows up.

use serde::{Deserialize, Serialize};

/// A row that can be keyed for stable list rendering.
pub trait ListRecord {
    /// Identity used only to keep rendered rows stable. `None` when the
    /// backend sent nothing usable; the renderer falls back to the row index.
    fn key(&self) -> Option<String>;
}

/// One month of a tutor's pay.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalaryRecord {
    #[serde(default, deserialize_with = "lenient::id")]
    pub id: Option<String>,
    /// Pay period, `YYYY-MM` or `YYYY-MM-DD`
    #[serde(default, alias = "month", deserialize_with = "lenient::text")]
    pub salary_month: Option<String>,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub base_amount: Option<f64>,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub allowances: Option<f64>,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub deductions: Option<f64>,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub net_salary: Option<f64>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub status: Option<String>,
    #[serde(default, alias = "payment_date", deserialize_with = "lenient::text")]
    pub paid_date: Option<String>,
}

/// A student's attendance mark for one class session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    #[serde(default, deserialize_with = "lenient::id")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub attendance_date: Option<String>,
    #[serde(default, deserialize_with = "lenient::object")]
    pub class: Option<ClassRef>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub remarks: Option<String>,
}

/// The class an attendance mark belongs to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassRef {
    #[serde(default, deserialize_with = "lenient::id")]
    pub id: Option<String>,
    #[serde(default, alias = "class_name", deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub subject: Option<String>,
}

/// A fee charged to a student.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeeRecord {
    #[serde(default, deserialize_with = "lenient::id")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::id")]
    pub fee_id: Option<String>,
    #[serde(default, alias = "fee_type", deserialize_with = "lenient::text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub amount: Option<f64>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub due_date: Option<String>,
    /// `null` until the fee is settled
    #[serde(default, deserialize_with = "lenient::text")]
    pub paid_date: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub status: Option<String>,
}

/// One scheduled class session for a student.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRecord {
    #[serde(default, deserialize_with = "lenient::id")]
    pub id: Option<String>,
    #[serde(default, alias = "class_name", deserialize_with = "lenient::text")]
    pub subject: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub schedule_date: Option<String>,
    /// `HH:MM[:SS]`
    #[serde(default, deserialize_with = "lenient::text")]
    pub start_time: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub end_time: Option<String>,
    #[serde(default, deserialize_with = "lenient::object")]
    pub tutor: Option<TutorRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TutorRef {
    #[serde(default, deserialize_with = "lenient::id")]
    pub id: Option<String>,
    #[serde(default, alias = "full_name", deserialize_with = "lenient::text")]
    pub name: Option<String>,
}

/// Aggregates that accompany the salary history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalarySummary {
    #[serde(default, deserialize_with = "lenient::amount")]
    pub total_earned: Option<f64>,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub pending_amount: Option<f64>,
}

/// Aggregates that accompany the fee list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeeSummary {
    #[serde(default, deserialize_with = "lenient::amount")]
    pub total_fees: Option<f64>,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub paid: Option<f64>,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub pending: Option<f64>,
}

/// Summary type for lists that never carry aggregates. Any object decodes
/// into it; specs using it declare no summary fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NoSummary {}

impl ListRecord for SalaryRecord {
    fn key(&self) -> Option<String> {
        self.id.clone()
    }
}

impl ListRecord for AttendanceRecord {
    fn key(&self) -> Option<String> {
        self.id.clone()
    }
}

impl ListRecord for FeeRecord {
    fn key(&self) -> Option<String> {
        self.fee_id.clone().or_else(|| self.id.clone())
    }
}

impl ListRecord for ScheduleRecord {
    fn key(&self) -> Option<String> {
        self.id.clone()
    }
}

/// Deserializers that accept the loose typing the backend produces.
pub(crate) mod lenient {
    use serde::de::DeserializeOwned;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    /// Strings as sent; numbers and booleans in their JSON spelling.
    pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<Value>::deserialize(deserializer)? {
            Some(Value::String(s)) => Some(s),
            Some(Value::Number(n)) => Some(n.to_string()),
            Some(Value::Bool(b)) => Some(b.to_string()),
            _ => None,
        })
    }

    /// A nested object, or nothing when the backend sent anything else.
    pub fn object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        Ok(match Option::<Value>::deserialize(deserializer)? {
            Some(value @ Value::Object(_)) => serde_json::from_value(value).ok(),
            _ => None,
        })
    }

    /// Numbers, numeric strings (`"15,000.50"`) or nothing.
    pub fn amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<Value>::deserialize(deserializer)? {
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => s.trim().replace(',', "").parse::<f64>().ok(),
            _ => None,
        }
        .filter(|n| n.is_finite()))
    }

    /// Integer or string ids, normalized to strings.
    pub fn id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<Value>::deserialize(deserializer)? {
            Some(Value::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_salary_record_accepts_numeric_strings() {
        let record: SalaryRecord = serde_json::from_value(json!({
            "id": 42,
            "salary_month": "2025-05",
            "base_amount": "12,000.00",
            "allowances": 1500,
            "deductions": null,
            "net_salary": "13500",
            "status": "paid"
        }))
        .unwrap();

        assert_eq!(record.id.as_deref(), Some("42"));
        assert_eq!(record.base_amount, Some(12000.0));
        assert_eq!(record.allowances, Some(1500.0));
        assert_eq!(record.deductions, None);
        assert_eq!(record.net_salary, Some(13500.0));
        assert_eq!(record.paid_date, None);
    }

    #[test]
    fn test_unparseable_amount_is_absent() {
        let record: FeeRecord = serde_json::from_value(json!({ "amount": "n/a" })).unwrap();
        assert_eq!(record.amount, None);
    }

    #[test]
    fn test_attendance_without_class() {
        let record: AttendanceRecord = serde_json::from_value(json!({
            "id": "att-1",
            "attendance_date": "2025-03-04",
            "status": "present"
        }))
        .unwrap();
        assert!(record.class.is_none());

        let with_null: AttendanceRecord =
            serde_json::from_value(json!({ "id": "att-2", "class": null })).unwrap();
        assert!(with_null.class.is_none());
    }

    #[test]
    fn test_class_name_alias() {
        let class: ClassRef =
            serde_json::from_value(json!({ "class_name": "Grade 9 Physics" })).unwrap();
        assert_eq!(class.name.as_deref(), Some("Grade 9 Physics"));
    }

    #[test]
    fn test_fee_key_prefers_fee_id() {
        let fee = FeeRecord {
            id: Some("7".to_string()),
            fee_id: Some("FEE-2025-007".to_string()),
            ..FeeRecord::default()
        };
        assert_eq!(fee.key().as_deref(), Some("FEE-2025-007"));

        let fee = FeeRecord {
            id: Some("7".to_string()),
            ..FeeRecord::default()
        };
        assert_eq!(fee.key().as_deref(), Some("7"));
        assert_eq!(FeeRecord::default().key(), None);
    }

    #[test]
    fn test_mistyped_fields_degrade_to_blank() {
        let record: ScheduleRecord = serde_json::from_value(json!({
            "id": 9,
            "subject": "Chemistry",
            "schedule_date": 20251002,
            "tutor": "Bilal"
        }))
        .unwrap();
        assert_eq!(record.tutor, None);
        assert_eq!(record.schedule_date.as_deref(), Some("20251002"));

        let record: AttendanceRecord = serde_json::from_value(json!({
            "class": "Grade 9",
            "status": 1,
            "remarks": ["late bus"]
        }))
        .unwrap();
        assert_eq!(record.class, None);
        assert_eq!(record.status.as_deref(), Some("1"));
        assert_eq!(record.remarks, None);
    }

    #[test]
    fn test_class_with_unusable_id_keeps_name() {
        let record: AttendanceRecord =
            serde_json::from_value(json!({ "class": { "name": "Grade 9", "id": [1] } })).unwrap();
        assert_eq!(record.class.map(|c| c.name), Some(Some("Grade 9".to_string())));
    }

    #[test]
    fn test_blank_id_is_absent() {
        let record: ScheduleRecord = serde_json::from_value(json!({ "id": "  " })).unwrap();
        assert_eq!(record.id, None);
    }

    #[test]
    fn test_no_summary_accepts_any_object() {
        let summary: NoSummary = serde_json::from_value(json!({ "total": 3 })).unwrap();
        assert_eq!(summary, NoSummary {});
    }
}

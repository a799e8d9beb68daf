use serde::{Deserialize, Serialize};

/// Pill colour for a status value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusTone {
    Green,
    Yellow,
    Red,
    Gray,
}

impl StatusTone {
    pub fn css_class(self) -> &'static str {
        match self {
            StatusTone::Green => "status-pill green",
            StatusTone::Yellow => "status-pill yellow",
            StatusTone::Red => "status-pill red",
            StatusTone::Gray => "status-pill gray",
        }
    }
}

/// Which fixed status vocabulary a column uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusDomain {
    Salary,
    Attendance,
    Fee,
}

impl StatusDomain {
    /// Case-insensitive; unknown or missing values are gray.
    pub fn tone(self, status: Option<&str>) -> StatusTone {
        let Some(status) = status.map(|s| s.trim().to_ascii_lowercase()) else {
            return StatusTone::Gray;
        };
        match (self, status.as_str()) {
            (StatusDomain::Salary, "paid") => StatusTone::Green,
            (StatusDomain::Salary, "pending" | "processing") => StatusTone::Yellow,
            (StatusDomain::Salary, "cancelled" | "failed") => StatusTone::Red,

            (StatusDomain::Attendance, "present") => StatusTone::Green,
            (StatusDomain::Attendance, "late" | "excused") => StatusTone::Yellow,
            (StatusDomain::Attendance, "absent") => StatusTone::Red,

            (StatusDomain::Fee, "paid") => StatusTone::Green,
            (StatusDomain::Fee, "pending" | "partial") => StatusTone::Yellow,
            (StatusDomain::Fee, "overdue") => StatusTone::Red,

            _ => StatusTone::Gray,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fee_tones() {
        assert_eq!(StatusDomain::Fee.tone(Some("paid")), StatusTone::Green);
        assert_eq!(StatusDomain::Fee.tone(Some("overdue")), StatusTone::Red);
        assert_eq!(StatusDomain::Fee.tone(Some("pending")), StatusTone::Yellow);
        assert_eq!(StatusDomain::Fee.tone(Some("waived")), StatusTone::Gray);
    }

    #[test]
    fn test_attendance_tones() {
        assert_eq!(StatusDomain::Attendance.tone(Some("present")), StatusTone::Green);
        assert_eq!(StatusDomain::Attendance.tone(Some("late")), StatusTone::Yellow);
        assert_eq!(StatusDomain::Attendance.tone(Some("absent")), StatusTone::Red);
    }

    #[test]
    fn test_salary_tones() {
        assert_eq!(StatusDomain::Salary.tone(Some("paid")), StatusTone::Green);
        assert_eq!(StatusDomain::Salary.tone(Some("processing")), StatusTone::Yellow);
        assert_eq!(StatusDomain::Salary.tone(Some("present")), StatusTone::Gray);
    }

    #[test]
    fn test_case_and_whitespace_insensitive() {
        assert_eq!(StatusDomain::Fee.tone(Some(" PAID ")), StatusTone::Green);
        assert_eq!(StatusDomain::Attendance.tone(Some("Absent")), StatusTone::Red);
    }

    #[test]
    fn test_missing_status_is_gray() {
        assert_eq!(StatusDomain::Fee.tone(None), StatusTone::Gray);
        assert_eq!(StatusDomain::Salary.tone(Some("")), StatusTone::Gray);
    }

    #[test]
    fn test_css_class() {
        assert_eq!(StatusTone::Green.css_class(), "status-pill green");
        assert_eq!(StatusTone::Gray.css_class(), "status-pill gray");
    }
}

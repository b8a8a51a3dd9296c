use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use utoipa::ToSchema;

/// One row of the `Attendance` table.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Attendance {
    #[schema(example = 1)]
    pub id: u64, // 👈 matches BIGINT UNSIGNED
    #[sqlx(rename = "employeeName")]
    #[schema(example = "Jane Doe")]
    pub employee_name: String,
    #[serde(rename = "employeeID")]
    #[sqlx(rename = "employeeID")]
    #[schema(example = "EMP-101")]
    pub employee_id: String,
    #[schema(example = "2026-01-05", format = "date", value_type = String)]
    pub date: NaiveDate,
    #[schema(example = "Present")]
    pub status: String,
}

/// The two values a stored status may take. Parsing is case-sensitive,
/// so "present" and "Late" are both rejected.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn row_serializes_with_table_column_names() {
        let row = Attendance {
            id: 3,
            employee_name: "Jane Doe".to_string(),
            employee_id: "EMP-101".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            status: "Present".to_string(),
        };

        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 3,
                "employeeName": "Jane Doe",
                "employeeID": "EMP-101",
                "date": "2024-01-02",
                "status": "Present"
            })
        );
    }

    #[test]
    fn status_parse_is_case_sensitive() {
        assert_eq!(
            AttendanceStatus::from_str("Present"),
            Ok(AttendanceStatus::Present)
        );
        assert_eq!(
            AttendanceStatus::from_str("Absent"),
            Ok(AttendanceStatus::Absent)
        );
        assert!(AttendanceStatus::from_str("present").is_err());
        assert!(AttendanceStatus::from_str("Late").is_err());
    }
}

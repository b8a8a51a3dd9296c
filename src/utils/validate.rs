use serde_json::Value;
use std::str::FromStr;

use crate::model::attendance::AttendanceStatus;

/// ===============================
/// Validation outcomes
/// ===============================
///
/// Every rejection a handler can produce before touching the store.
/// Store failures are matched at the call site instead.
#[derive(Debug, PartialEq, Eq)]
pub enum ValidationError {
    MissingFields,
    InvalidStatus,
    InvalidId,
}

impl ValidationError {
    /// Response body in the shape the frontend already consumes.
    pub fn payload(&self) -> Value {
        match self {
            ValidationError::MissingFields => serde_json::json!({
                "error": "All fields required"
            }),
            ValidationError::InvalidStatus => serde_json::json!({
                "error": "Invalid status value"
            }),
            ValidationError::InvalidId => serde_json::json!({
                "success": false,
                "message": "Invalid ID"
            }),
        }
    }
}

/// ===============================
/// Validated insert record
/// ===============================
///
/// Field values pass through unmodified; the store performs any
/// remaining coercion (the date column is DATE, status VARCHAR).
#[derive(Debug, PartialEq, Eq)]
pub struct NewAttendance {
    pub employee_name: String,
    pub employee_id: String,
    pub date: String,
    pub status: String,
}

// Absent, null, "", 0 and false all count as missing.
fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Number(n)) => n.as_f64().map_or(true, |f| f != 0.0),
        Some(Value::Bool(b)) => *b,
        Some(_) => true,
    }
}

// Strings keep their exact form, numbers their textual form. employeeID
// arrives either way from the frontend and the column is VARCHAR.
fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// ===============================
/// Create-record validation
/// ===============================
pub fn validate_new_attendance(payload: &Value) -> Result<NewAttendance, ValidationError> {
    const REQUIRED: [&str; 4] = ["employeeName", "employeeID", "date", "status"];

    if REQUIRED.iter().any(|field| !is_truthy(payload.get(*field))) {
        return Err(ValidationError::MissingFields);
    }

    let field_text = |field: &str| {
        payload
            .get(field)
            .and_then(as_text)
            .ok_or(ValidationError::MissingFields)
    };

    let employee_name = field_text("employeeName")?;
    let employee_id = field_text("employeeID")?;
    let date = field_text("date")?;

    let status = payload
        .get("status")
        .and_then(as_text)
        .ok_or(ValidationError::InvalidStatus)?;
    AttendanceStatus::from_str(&status).map_err(|_| ValidationError::InvalidStatus)?;

    Ok(NewAttendance {
        employee_name,
        employee_id,
        date,
        status,
    })
}

/// ===============================
/// Delete-id validation
/// ===============================
///
/// The id arrives as a raw path segment. Any well-formed signed integer
/// is forwarded to the store, zero and negatives included.
pub fn parse_record_id(raw: &str) -> Result<i64, ValidationError> {
    raw.parse::<i64>().map_err(|_| ValidationError::InvalidId)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_payload() -> Value {
        json!({
            "employeeName": "Jane Doe",
            "employeeID": "EMP-101",
            "date": "2026-01-05",
            "status": "Present"
        })
    }

    #[test]
    fn accepts_valid_payload_unmodified() {
        let record = validate_new_attendance(&valid_payload()).unwrap();
        assert_eq!(
            record,
            NewAttendance {
                employee_name: "Jane Doe".to_string(),
                employee_id: "EMP-101".to_string(),
                date: "2026-01-05".to_string(),
                status: "Present".to_string(),
            }
        );
    }

    #[test]
    fn accepts_absent_status() {
        let mut payload = valid_payload();
        payload["status"] = json!("Absent");
        assert_eq!(
            validate_new_attendance(&payload).unwrap().status,
            "Absent"
        );
    }

    #[test]
    fn preserves_numeric_employee_id_textually() {
        let mut payload = valid_payload();
        payload["employeeID"] = json!(101);
        let record = validate_new_attendance(&payload).unwrap();
        assert_eq!(record.employee_id, "101");
    }

    #[test]
    fn rejects_each_missing_field() {
        for field in ["employeeName", "employeeID", "date", "status"] {
            let mut payload = valid_payload();
            payload.as_object_mut().unwrap().remove(field);
            assert_eq!(
                validate_new_attendance(&payload),
                Err(ValidationError::MissingFields),
                "field {field} should be required"
            );
        }
    }

    #[test]
    fn rejects_falsy_field_values() {
        for falsy in [json!(""), json!(null), json!(0), json!(false)] {
            let mut payload = valid_payload();
            payload["employeeName"] = falsy.clone();
            assert_eq!(
                validate_new_attendance(&payload),
                Err(ValidationError::MissingFields),
                "value {falsy} should count as missing"
            );
        }
    }

    #[test]
    fn rejects_status_outside_enumeration() {
        let mut payload = valid_payload();
        payload["status"] = json!("Late");
        assert_eq!(
            validate_new_attendance(&payload),
            Err(ValidationError::InvalidStatus)
        );
    }

    #[test]
    fn rejects_wrong_case_status() {
        let mut payload = valid_payload();
        payload["status"] = json!("present");
        assert_eq!(
            validate_new_attendance(&payload),
            Err(ValidationError::InvalidStatus)
        );
    }

    #[test]
    fn parses_well_formed_ids() {
        assert_eq!(parse_record_id("42"), Ok(42));
        assert_eq!(parse_record_id("0"), Ok(0));
        assert_eq!(parse_record_id("-3"), Ok(-3));
    }

    #[test]
    fn rejects_malformed_ids() {
        for raw in ["abc", "", "12.5", "1e3", "4 2"] {
            assert_eq!(
                parse_record_id(raw),
                Err(ValidationError::InvalidId),
                "id {raw:?} should be rejected"
            );
        }
    }
}

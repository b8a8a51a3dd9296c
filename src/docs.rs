use crate::model::attendance::{Attendance, AttendanceStatus};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Attendance API",
        version = "1.0.0",
        description = r#"
## Employee Attendance Backend

Record-keeping API for daily employee attendance.

### 🔹 Endpoints
- **Health**
  - Liveness probe covering the database connection
- **Attendance**
  - List all records, newest date first
  - Add a record (`status` must be `Present` or `Absent`)
  - Delete a record by id

### 📦 Response Format
JSON-based RESTful responses.

---
Built with **Rust**, **Actix Web**, **SQLx**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::health::health_check,
        crate::api::attendance::list_attendance,
        crate::api::attendance::create_attendance,
        crate::api::attendance::delete_attendance,
    ),
    components(
        schemas(
            Attendance,
            AttendanceStatus
        )
    ),
    tags(
        (name = "Health", description = "Liveness probe APIs"),
        (name = "Attendance", description = "Attendance record APIs"),
    )
)]
pub struct ApiDoc;

use crate::model::attendance::Attendance;
use crate::utils::validate::{parse_record_id, validate_new_attendance};
use actix_web::{HttpResponse, Responder, web};
use serde_json::{Value, json};
use sqlx::MySqlPool;
use tracing::{debug, error};

/// List attendance records, newest date first
#[utoipa::path(
    get,
    path = "/api/attendance",
    responses(
        (status = 200, description = "Every stored record, ordered by date then id descending", body = [Attendance]),
        (status = 500, description = "Database error", body = Object, example = json!({
            "error": "Failed to fetch attendance"
        }))
    ),
    tag = "Attendance"
)]
pub async fn list_attendance(pool: web::Data<MySqlPool>) -> impl Responder {
    debug!("Fetching attendance records");

    let result = sqlx::query_as::<_, Attendance>(
        "SELECT id, employeeName, employeeID, date, status \
         FROM Attendance ORDER BY date DESC, id DESC",
    )
    .fetch_all(pool.get_ref())
    .await;

    match result {
        Ok(records) => {
            debug!(count = records.len(), "Fetched attendance records");
            HttpResponse::Ok().json(records)
        }

        Err(e) => {
            error!(error = %e, "Failed to fetch attendance");
            HttpResponse::InternalServerError().json(json!({
                "error": "Failed to fetch attendance"
            }))
        }
    }
}

/// Add a new attendance record
#[utoipa::path(
    post,
    path = "/api/attendance",
    request_body(content = Object, description = "New attendance record", example = json!({
        "employeeName": "Jane Doe",
        "employeeID": "EMP-101",
        "date": "2026-01-05",
        "status": "Present"
    })),
    responses(
        (status = 201, description = "Record created", body = Object, example = json!({
            "message": "Attendance added",
            "id": 7
        })),
        (status = 400, description = "Missing fields or invalid status", body = Object, example = json!({
            "error": "All fields required"
        })),
        (status = 500, description = "Database error", body = Object, example = json!({
            "error": "Insert failed"
        }))
    ),
    tag = "Attendance"
)]
pub async fn create_attendance(
    pool: web::Data<MySqlPool>,
    payload: web::Json<Value>,
) -> impl Responder {
    // Validation never touches the pool; a rejected payload costs no connection.
    let record = match validate_new_attendance(&payload) {
        Ok(record) => record,
        Err(e) => return HttpResponse::BadRequest().json(e.payload()),
    };

    let result = sqlx::query(
        "INSERT INTO Attendance (employeeName, employeeID, date, status) \
         VALUES (?, ?, ?, ?)",
    )
    .bind(&record.employee_name)
    .bind(&record.employee_id)
    .bind(&record.date)
    .bind(&record.status)
    .execute(pool.get_ref())
    .await;

    match result {
        Ok(res) => HttpResponse::Created().json(json!({
            "message": "Attendance added",
            "id": res.last_insert_id()
        })),

        Err(e) => {
            error!(error = %e, "Failed to insert attendance record");
            HttpResponse::InternalServerError().json(json!({
                "error": "Insert failed"
            }))
        }
    }
}

/// Delete an attendance record by id
#[utoipa::path(
    delete,
    path = "/api/attendance/{id}",
    params(
        ("id", Path, description = "Attendance record id")
    ),
    responses(
        (status = 200, description = "Record deleted", body = Object, example = json!({
            "success": true,
            "message": "Record 7 deleted",
            "deletedId": 7
        })),
        (status = 400, description = "Id is not an integer", body = Object, example = json!({
            "success": false,
            "message": "Invalid ID"
        })),
        (status = 404, description = "No record with that id", body = Object, example = json!({
            "success": false,
            "message": "Record not found"
        })),
        (status = 500, description = "Database error", body = Object, example = json!({
            "success": false,
            "message": "Database delete error"
        }))
    ),
    tag = "Attendance"
)]
pub async fn delete_attendance(
    pool: web::Data<MySqlPool>,
    path: web::Path<String>,
) -> impl Responder {
    // Path<String> rather than Path<i64>: malformed ids must produce our
    // own 400 payload, not the extractor's.
    let raw = path.into_inner();
    let record_id = match parse_record_id(&raw) {
        Ok(id) => id,
        Err(e) => return HttpResponse::BadRequest().json(e.payload()),
    };

    let result = sqlx::query("DELETE FROM Attendance WHERE id = ?")
        .bind(record_id)
        .execute(pool.get_ref())
        .await;

    match result {
        Ok(res) => {
            if res.rows_affected() == 0 {
                return HttpResponse::NotFound().json(json!({
                    "success": false,
                    "message": "Record not found"
                }));
            }

            debug!(record_id, "Deleted attendance record");
            HttpResponse::Ok().json(json!({
                "success": true,
                "message": format!("Record {} deleted", record_id),
                "deletedId": record_id
            }))
        }

        Err(e) => {
            error!(error = %e, record_id, "Failed to delete attendance record");
            HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": "Database delete error"
            }))
        }
    }
}

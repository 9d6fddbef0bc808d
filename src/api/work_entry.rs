use crate::model::work_entry::EntryView;
use crate::service::TimesheetService;
use actix_web::{HttpResponse, Responder, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::{IntoParams, ToSchema};

#[derive(Deserialize, Serialize, ToSchema)]
pub struct ClockIn {
    #[schema(example = "1001")]
    pub employee_id: String,
}

#[derive(Deserialize, Serialize, ToSchema)]
pub struct CustomEntry {
    #[schema(example = "1001")]
    pub employee_id: String,
    #[schema(example = "2024-03-15", format = "date")]
    pub date: String,
    #[schema(example = "09:00:00")]
    pub time_in: String,
    /// Omitted, `null` or `""` records an open entry
    #[serde(default)]
    #[schema(example = "17:00:00", nullable = true)]
    pub time_out: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EntryQuery {
    /// Only list entries of this employee
    pub employee_id: Option<String>,
}

/// Clock-in endpoint
#[utoipa::path(
    post,
    path = "/clock-in",
    request_body = ClockIn,
    responses(
        (status = 201, description = "Clocked in successfully", body = Object, example = json!({
            "message": "Clocked in successfully!",
            "entry_id": 12
        })),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "error": "Employee not found"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Timesheet"
)]
pub async fn clock_in(
    timesheet: web::Data<TimesheetService>,
    payload: web::Json<ClockIn>,
) -> actix_web::Result<impl Responder> {
    let entry_id = timesheet.clock_in(&payload.employee_id).await?;

    Ok(HttpResponse::Created().json(json!({
        "message": "Clocked in successfully!",
        "entry_id": entry_id
    })))
}

/// Clock-out endpoint
#[utoipa::path(
    post,
    path = "/clock-out/{entry_id}",
    params(
        ("entry_id", Path, description = "Work entry ID")
    ),
    responses(
        (status = 200, description = "Clocked out successfully", body = Object, example = json!({
            "message": "Clocked out successfully!"
        })),
        (status = 404, description = "Entry not found", body = Object, example = json!({
            "error": "Entry not found"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Timesheet"
)]
pub async fn clock_out(
    timesheet: web::Data<TimesheetService>,
    path: web::Path<i64>,
) -> actix_web::Result<impl Responder> {
    let entry_id = path.into_inner();

    timesheet.clock_out(entry_id).await?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Clocked out successfully!"
    })))
}

#[utoipa::path(
    get,
    path = "/entries",
    params(EntryQuery),
    responses(
        (status = 200, description = "Work entries with employee names", body = [EntryView])
    ),
    tag = "Timesheet"
)]
pub async fn list_entries(
    timesheet: web::Data<TimesheetService>,
    query: web::Query<EntryQuery>,
) -> actix_web::Result<impl Responder> {
    let entries = timesheet.list_entries(query.employee_id.as_deref()).await?;
    Ok(HttpResponse::Ok().json(entries))
}

/// Record a manual entry
#[utoipa::path(
    post,
    path = "/entries",
    request_body = CustomEntry,
    responses(
        (status = 201, description = "Entry created", body = EntryView),
        (status = 400, description = "Malformed date or time", body = Object, example = json!({
            "error": "Invalid date `15-03-2024`, expected YYYY-MM-DD"
        })),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "error": "Employee not found"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Timesheet"
)]
pub async fn add_custom_entry(
    timesheet: web::Data<TimesheetService>,
    payload: web::Json<CustomEntry>,
) -> actix_web::Result<impl Responder> {
    let entry = timesheet
        .add_custom_entry(
            &payload.employee_id,
            &payload.date,
            &payload.time_in,
            payload.time_out.as_deref(),
        )
        .await?;

    Ok(HttpResponse::Created().json(entry))
}

#[utoipa::path(
    delete,
    path = "/delete-entry/{entry_id}",
    params(
        ("entry_id", Path, description = "Work entry ID")
    ),
    responses(
        (status = 200, description = "Entry deleted", body = Object, example = json!({
            "message": "Entry deleted successfully!"
        })),
        (status = 404, description = "Entry not found", body = Object, example = json!({
            "error": "Entry not found"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Timesheet"
)]
pub async fn delete_entry(
    timesheet: web::Data<TimesheetService>,
    path: web::Path<i64>,
) -> actix_web::Result<impl Responder> {
    let entry_id = path.into_inner();

    timesheet.delete_entry(entry_id).await?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Entry deleted successfully!"
    })))
}

/// Export all entries as CSV
#[utoipa::path(
    get,
    path = "/export",
    responses(
        (status = 200, description = "CSV export", content_type = "text/csv", body = String)
    ),
    tag = "Timesheet"
)]
pub async fn export_csv(timesheet: web::Data<TimesheetService>) -> actix_web::Result<impl Responder> {
    let csv = timesheet.export_csv().await?;

    Ok(HttpResponse::Ok().content_type("text/csv").body(csv))
}

#[cfg(test)]
mod tests {
    use crate::test_support::{test_app, test_services};
    use actix_web::http::{StatusCode, header};
    use actix_web::test::{TestRequest, call_service, init_service, read_body, read_body_json};
    use serde_json::{Value, json};

    #[actix_web::test]
    async fn clock_in_then_out() {
        let services = test_services().await;
        services.directory.add_employee("1001", "Jane Doe").await.expect("add");
        let app = init_service(test_app(&services)).await;

        let req = TestRequest::post()
            .uri("/clock-in")
            .set_json(json!({ "employee_id": "1001" }))
            .to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = read_body_json(resp).await;
        let entry_id = body["entry_id"].as_i64().expect("entry id");

        services.clock.advance_seconds(3600);
        let req = TestRequest::post()
            .uri(&format!("/clock-out/{entry_id}"))
            .to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = TestRequest::get().uri("/entries").to_request();
        let body: Value = read_body_json(call_service(&app, req).await).await;
        assert_eq!(
            body,
            json!([{
                "id": entry_id,
                "employee_id": "1001",
                "employee_name": "Jane Doe",
                "date": "2024-03-15",
                "day_of_week": "Friday",
                "time_in": "10:30:45",
                "time_out": "11:30:45"
            }])
        );
    }

    #[actix_web::test]
    async fn clock_actions_on_unknown_ids_are_404() {
        let services = test_services().await;
        let app = init_service(test_app(&services)).await;

        let req = TestRequest::post()
            .uri("/clock-in")
            .set_json(json!({ "employee_id": "ghost" }))
            .to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = read_body_json(resp).await;
        assert_eq!(body["error"], "Employee not found");

        for req in [
            TestRequest::post().uri("/clock-out/99").to_request(),
            TestRequest::delete().uri("/delete-entry/99").to_request(),
        ] {
            let resp = call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::NOT_FOUND);
            let body: Value = read_body_json(resp).await;
            assert_eq!(body["error"], "Entry not found");
        }
    }

    #[actix_web::test]
    async fn custom_entry_is_echoed_back() {
        let services = test_services().await;
        services.directory.add_employee("1001", "Jane Doe").await.expect("add");
        let app = init_service(test_app(&services)).await;

        let req = TestRequest::post()
            .uri("/entries")
            .set_json(json!({
                "employee_id": "1001",
                "date": "2024-03-15",
                "time_in": "08:00:00",
                "time_out": null
            }))
            .to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = read_body_json(resp).await;
        assert_eq!(body["date"], "2024-03-15");
        assert_eq!(body["day_of_week"], "Friday");
        assert_eq!(body["time_in"], "08:00:00");
        assert_eq!(body["time_out"], Value::Null);
        assert!(body["id"].is_i64());
    }

    #[actix_web::test]
    async fn malformed_custom_entry_is_400() {
        let services = test_services().await;
        services.directory.add_employee("1001", "Jane Doe").await.expect("add");
        let app = init_service(test_app(&services)).await;

        let req = TestRequest::post()
            .uri("/entries")
            .set_json(json!({
                "employee_id": "1001",
                "date": "15-03-2024",
                "time_in": "08:00:00"
            }))
            .to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = read_body_json(resp).await;
        assert!(body["error"].as_str().expect("message").contains("15-03-2024"));
    }

    #[actix_web::test]
    async fn entries_can_be_filtered_by_employee() {
        let services = test_services().await;
        services.directory.add_employee("1", "Ann").await.expect("add");
        services.directory.add_employee("2", "Bob").await.expect("add");
        services.timesheet.clock_in("1").await.expect("clock in");
        let bobs = services.timesheet.clock_in("2").await.expect("clock in");
        let app = init_service(test_app(&services)).await;

        let req = TestRequest::get().uri("/entries?employee_id=2").to_request();
        let body: Value = read_body_json(call_service(&app, req).await).await;
        let entries = body.as_array().expect("array");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["id"], bobs);
    }

    #[actix_web::test]
    async fn non_numeric_entry_id_is_404() {
        let services = test_services().await;
        let app = init_service(test_app(&services)).await;

        let req = TestRequest::delete().uri("/delete-entry/abc").to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn export_serves_csv() {
        let services = test_services().await;
        services.directory.add_employee("1001", "Jane Doe").await.expect("add");
        let id = services.timesheet.clock_in("1001").await.expect("clock in");
        let app = init_service(test_app(&services)).await;

        let req = TestRequest::get().uri("/export").to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let content_type = resp
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .expect("content type")
            .to_string();
        assert!(content_type.starts_with("text/csv"));

        let body = read_body(resp).await;
        assert_eq!(
            std::str::from_utf8(&body).expect("utf8"),
            format!(
                "id,employee_id,employee_name,date,day_of_week,time_in,time_out\n\
                 {id},1001,Jane Doe,2024-03-15,Friday,10:30:45,\n"
            )
        );
    }
}

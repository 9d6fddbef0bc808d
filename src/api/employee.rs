use crate::model::employee::{Employee, EmployeeSummary};
use crate::service::DirectoryService;
use actix_web::{HttpResponse, Responder, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

#[derive(Deserialize, Serialize, ToSchema)]
pub struct AddEmployee {
    #[schema(example = "1001", value_type = String)]
    pub id: String,
    #[schema(example = "Jane Doe", value_type = String)]
    pub name: String,
}

/// Add Employee
#[utoipa::path(
    post,
    path = "/add-employee",
    request_body = AddEmployee,
    responses(
        (status = 201, description = "Employee created", body = Object, example = json!({
            "message": "Employee added successfully!",
            "employee_id": "1001"
        })),
        (status = 400, description = "Duplicate or blank id", body = Object, example = json!({
            "error": "Employee ID already exists"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn add_employee(
    directory: web::Data<DirectoryService>,
    payload: web::Json<AddEmployee>,
) -> actix_web::Result<impl Responder> {
    let employee_id = directory.add_employee(&payload.id, &payload.name).await?;

    Ok(HttpResponse::Created().json(json!({
        "message": "Employee added successfully!",
        "employee_id": employee_id
    })))
}

/// Delete Employee and all of its work entries
#[utoipa::path(
    delete,
    path = "/delete-employee/{employee_id}",
    params(
        ("employee_id", Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted", body = Object, example = json!({
            "message": "Employee deleted successfully!"
        })),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "error": "Employee not found"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn delete_employee(
    directory: web::Data<DirectoryService>,
    path: web::Path<String>,
) -> actix_web::Result<impl Responder> {
    let employee_id = path.into_inner();

    directory.delete_employee(&employee_id).await?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Employee deleted successfully!"
    })))
}

/// Get Employee by ID
#[utoipa::path(
    get,
    path = "/get-employee/{employee_id}",
    params(
        ("employee_id", Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee found", body = Employee),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "error": "Employee not found"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn get_employee(
    directory: web::Data<DirectoryService>,
    path: web::Path<String>,
) -> actix_web::Result<impl Responder> {
    let employee_id = path.into_inner();

    let employee: Employee = directory.get_employee(&employee_id).await?;
    Ok(HttpResponse::Ok().json(employee))
}

#[utoipa::path(
    get,
    path = "/get-employees",
    responses(
        (status = 200, description = "All employees with their entry ids", body = [EmployeeSummary])
    ),
    tag = "Employee"
)]
pub async fn list_employees(
    directory: web::Data<DirectoryService>,
) -> actix_web::Result<impl Responder> {
    let employees = directory.list_employees().await?;
    Ok(HttpResponse::Ok().json(employees))
}

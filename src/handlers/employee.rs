use actix_web::{web, HttpResponse};
use crate::db::EmployeeStore;
use crate::errors::AppError;
use crate::models::employee::{EmployeeUpdate, NewEmployee};
use crate::utils::validation::{validate_employee_id, validate_payload};

pub async fn get_employees(
    store: web::Data<EmployeeStore>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(store.list().await))
}

pub async fn create_employee(
    store: web::Data<EmployeeStore>,
    new_employee: web::Json<NewEmployee>,
) -> Result<HttpResponse, AppError> {
    validate_payload(&*new_employee)?;

    let employee = store.create(new_employee.into_inner()).await?;

    Ok(HttpResponse::Ok().json(employee))
}

/// Serves both PATCH and PUT; a PUT body is merged the same way.
pub async fn update_employee(
    store: web::Data<EmployeeStore>,
    employee_id: web::Path<String>,
    updates: web::Json<EmployeeUpdate>,
) -> Result<HttpResponse, AppError> {
    let employee_id = employee_id.into_inner();
    validate_employee_id(&employee_id)?;
    validate_payload(&*updates)?;

    let employee = store.update(&employee_id, updates.into_inner()).await?;

    Ok(HttpResponse::Ok().json(employee))
}

pub async fn delete_employee(
    store: web::Data<EmployeeStore>,
    employee_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let employee_id = employee_id.into_inner();
    validate_employee_id(&employee_id)?;

    let remaining = store.remove(&employee_id).await?;

    Ok(HttpResponse::Ok().json(remaining))
}

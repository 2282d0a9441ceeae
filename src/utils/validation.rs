use crate::errors::AppError;
use validator::{Validate, ValidationErrors};

/// Length of a hyphenated v4 UUID, the only id shape the store hands out.
pub const EMPLOYEE_ID_LEN: usize = 36;

pub fn validate_payload<T: Validate>(payload: &T) -> Result<(), AppError> {
    payload.validate().map_err(map_validation_error)
}

pub fn validate_employee_id(id: &str) -> Result<(), AppError> {
    if id.chars().count() != EMPLOYEE_ID_LEN {
        return Err(AppError::BadRequest(format!(
            "Invalid employee id: must be {} characters",
            EMPLOYEE_ID_LEN
        )));
    }
    Ok(())
}

fn map_validation_error(err: ValidationErrors) -> AppError {
    let mut details = err
        .field_errors()
        .iter()
        .map(|(field, errs)| {
            let errors = errs
                .iter()
                .map(|e| format!("{}: {}", e.code, e.message.as_deref().unwrap_or("")))
                .collect::<Vec<_>>()
                .join(", ");
            format!("{}: [{}]", field, errors)
        })
        .collect::<Vec<_>>();
    details.sort();
    AppError::BadRequest(format!("Validation failed: {}", details.join("; ")))
}

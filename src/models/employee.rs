use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub full_name: String,
    #[serde(rename = "DOB", alias = "dob")]
    pub dob: String,
    pub role: String,
}

/// Payload for creating an employee. The server assigns the id.
#[derive(Serialize, Deserialize, Validate, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewEmployee {
    #[validate(length(min = 1))]
    pub full_name: String,
    #[serde(rename = "DOB", alias = "dob")]
    #[validate(length(min = 1))]
    pub dob: String,
    #[validate(length(min = 1))]
    pub role: String,
}

/// Partial payload for PATCH/PUT. Absent fields keep their stored value.
#[derive(Serialize, Deserialize, Validate, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EmployeeUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    pub full_name: Option<String>,
    #[serde(rename = "DOB", alias = "dob", default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    pub dob: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    pub role: Option<String>,
}

impl Employee {
    pub fn from_new(id: String, new_employee: NewEmployee) -> Self {
        Employee {
            id,
            full_name: new_employee.full_name,
            dob: new_employee.dob,
            role: new_employee.role,
        }
    }

    /// Shallow merge: every field present in `updates` overwrites the stored one.
    pub fn merge(self, updates: EmployeeUpdate) -> Self {
        Employee {
            id: self.id,
            full_name: updates.full_name.unwrap_or(self.full_name),
            dob: updates.dob.unwrap_or(self.dob),
            role: updates.role.unwrap_or(self.role),
        }
    }
}

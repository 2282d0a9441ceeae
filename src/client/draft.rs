//! Per-row staging area for a record being created or edited.
//!
//! A draft is changed only through [`apply_edit`], a reducer that merges one
//! [`FieldEdit`] at a time. The id of a draft seeded from an existing employee
//! cannot be changed for the lifetime of the draft.

use super::field::{is_valid, Field};
use crate::models::employee::{Employee, EmployeeUpdate, NewEmployee};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftRecord {
    id: Option<String>,
    full_name: Option<String>,
    dob: Option<String>,
    role: Option<String>,
}

/// A single field change. Edits never carry an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldEdit {
    pub field: Field,
    pub value: String,
}

impl FieldEdit {
    pub fn new(field: Field, value: impl Into<String>) -> Self {
        FieldEdit {
            field,
            value: value.into(),
        }
    }
}

impl DraftRecord {
    /// Empty strings for every field and no id.
    pub fn for_create() -> Self {
        DraftRecord {
            id: None,
            full_name: Some(String::new()),
            dob: Some(String::new()),
            role: Some(String::new()),
        }
    }

    pub fn for_edit(employee: &Employee) -> Self {
        DraftRecord {
            id: Some(employee.id.clone()),
            full_name: Some(employee.full_name.clone()),
            dob: Some(employee.dob.clone()),
            role: Some(employee.role.clone()),
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::FullName => self.full_name.as_deref(),
            Field::Dob => self.dob.as_deref(),
            Field::Role => self.role.as_deref(),
        }
    }

    /// True when `field` holds a non-empty value.
    pub fn has(&self, field: Field) -> bool {
        self.get(field).is_some_and(|value| !value.is_empty())
    }

    pub fn has_required_fields(&self) -> bool {
        Field::ALL.iter().all(|&field| self.has(field))
    }

    /// Fields whose current value would fail form validation.
    pub fn invalid_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|&field| !is_valid(field, self.get(field).unwrap_or_default()))
            .collect()
    }

    /// Form-level check: every field is present and well-formed.
    pub fn is_form_valid(&self) -> bool {
        self.invalid_fields().is_empty()
    }

    /// Create payload, available once all three fields are filled in.
    pub fn to_new_employee(&self) -> Option<NewEmployee> {
        if !self.has_required_fields() {
            return None;
        }
        Some(NewEmployee {
            full_name: self.full_name.clone()?,
            dob: self.dob.clone()?,
            role: self.role.clone()?,
        })
    }

    /// Update payload carrying every field the draft holds.
    pub fn to_update(&self) -> EmployeeUpdate {
        EmployeeUpdate {
            full_name: self.full_name.clone(),
            dob: self.dob.clone(),
            role: self.role.clone(),
        }
    }
}

/// Merges `edit` into `draft`; every other field is carried over unchanged.
pub fn apply_edit(draft: DraftRecord, edit: FieldEdit) -> DraftRecord {
    let FieldEdit { field, value } = edit;
    match field {
        Field::FullName => DraftRecord {
            full_name: Some(value),
            ..draft
        },
        Field::Dob => DraftRecord {
            dob: Some(value),
            ..draft
        },
        Field::Role => DraftRecord {
            role: Some(value),
            ..draft
        },
    }
}

pub fn fold_edits(initial: DraftRecord, edits: impl IntoIterator<Item = FieldEdit>) -> DraftRecord {
    edits.into_iter().fold(initial, apply_edit)
}

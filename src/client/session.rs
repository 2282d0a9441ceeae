//! Request orchestration for the roster table.
//!
//! [`RosterSession`] owns the canonical collection, the edit-mode tracker and
//! every open draft. Each network operation follows the same shape: send the
//! request, and only once the server has answered successfully hand the result
//! to the collection and leave edit mode. A failed request is reported through
//! the [`ErrorReporter`] and leaves every piece of local state as it was, so
//! the user can retry by hand.
//!
//! Rows do not coordinate with each other: any number may be edited and
//! submitted independently.

use super::api::EmployeeApi;
use super::draft::{apply_edit, DraftRecord, FieldEdit};
use super::edit_mode::{EditModeTracker, RowMode};
use super::error::{ClientError, ClientResult};
use super::field::Field;
use super::gate::can_submit;
use super::reconciler::EmployeeCollection;
use super::report::ErrorReporter;
use crate::models::employee::Employee;
use log::{error, info};
use std::collections::HashMap;

pub struct RosterSession<A, R> {
    api: A,
    reporter: R,
    employees: EmployeeCollection,
    modes: EditModeTracker,
    drafts: HashMap<String, DraftRecord>,
    create_draft: Option<DraftRecord>,
}

impl<A: EmployeeApi, R: ErrorReporter> RosterSession<A, R> {
    pub fn new(api: A, reporter: R) -> Self {
        RosterSession {
            api,
            reporter,
            employees: EmployeeCollection::new(),
            modes: EditModeTracker::new(),
            drafts: HashMap::new(),
            create_draft: None,
        }
    }

    pub fn employees(&self) -> &EmployeeCollection {
        &self.employees
    }

    pub fn edit_modes(&self) -> &EditModeTracker {
        &self.modes
    }

    pub fn row_mode(&self, id: &str) -> RowMode {
        self.modes.mode(id)
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// Initial full listing.
    pub async fn load(&mut self) -> ClientResult<()> {
        match self.api.list().await {
            Ok(employees) => {
                info!("Loaded {} employees", employees.len());
                self.employees.on_list_loaded(employees);
                Ok(())
            }
            Err(err) => Err(self.fail(
                format!("Error in GET request fetching all employees: {}", err),
                err,
            )),
        }
    }

    // ----- add form -----

    /// Opens the add form with an empty draft. Returns false if it was already open.
    pub fn open_add_form(&mut self) -> bool {
        if !self.modes.show_add_form() {
            return false;
        }
        self.create_draft = Some(DraftRecord::for_create());
        true
    }

    pub fn cancel_add_form(&mut self) {
        self.modes.hide_add_form();
        self.create_draft = None;
    }

    pub fn create_draft(&self) -> Option<&DraftRecord> {
        self.create_draft.as_ref()
    }

    pub fn edit_create_field(&mut self, edit: FieldEdit) -> ClientResult<&DraftRecord> {
        let draft = self.create_draft.take().ok_or(ClientError::AddFormHidden)?;
        Ok(&*self.create_draft.insert(apply_edit(draft, edit)))
    }

    pub fn can_submit_create(&self) -> bool {
        self.create_draft
            .as_ref()
            .is_some_and(|draft| can_submit(draft, None))
    }

    /// Sends the add form. On success the server's record is appended and the
    /// form closes; on failure the form stays open with its draft.
    pub async fn submit_create(&mut self) -> ClientResult<Employee> {
        let draft = self.create_draft.as_ref().ok_or(ClientError::AddFormHidden)?;
        if !can_submit(draft, None) {
            return Err(ClientError::SubmitDisabled);
        }
        check_form(draft)?;
        let payload = draft.to_new_employee().ok_or(ClientError::SubmitDisabled)?;

        match self.api.create(&payload).await {
            Ok(employee) => {
                info!("Employee {} created", employee.id);
                self.employees.on_create_succeeded(employee.clone());
                self.cancel_add_form();
                Ok(employee)
            }
            Err(err) => Err(self.fail(
                format!(
                    "Error in POST request to create new employee {}: {}",
                    payload.full_name, err
                ),
                err,
            )),
        }
    }

    // ----- row edits -----

    /// Puts a listed row into edit mode, seeding its draft from the record.
    /// A row already in edit mode keeps its current draft.
    pub fn begin_edit(&mut self, id: &str) -> ClientResult<&DraftRecord> {
        let employee = self
            .employees
            .get(id)
            .ok_or_else(|| ClientError::UnknownEmployee(id.to_string()))?;
        let draft = DraftRecord::for_edit(employee);

        self.modes.begin_edit(id);
        Ok(&*self.drafts.entry(id.to_string()).or_insert(draft))
    }

    pub fn edit_field(&mut self, id: &str, edit: FieldEdit) -> ClientResult<&DraftRecord> {
        let slot = self
            .drafts
            .get_mut(id)
            .ok_or_else(|| ClientError::NotEditing(id.to_string()))?;
        *slot = apply_edit(std::mem::take(slot), edit);
        Ok(&*slot)
    }

    pub fn draft(&self, id: &str) -> Option<&DraftRecord> {
        self.drafts.get(id)
    }

    pub fn can_submit_edit(&self, id: &str) -> bool {
        match (self.drafts.get(id), self.employees.get(id)) {
            (Some(draft), Some(original)) => can_submit(draft, Some(original)),
            _ => false,
        }
    }

    /// Discards the row's draft. Returns false if the row was not being edited.
    pub fn cancel_edit(&mut self, id: &str) -> bool {
        self.drafts.remove(id);
        self.modes.cancel_edit(id)
    }

    pub async fn submit_edit(&mut self, id: &str) -> ClientResult<Employee> {
        let draft = self
            .drafts
            .get(id)
            .cloned()
            .ok_or_else(|| ClientError::NotEditing(id.to_string()))?;
        let original = self
            .employees
            .get(id)
            .ok_or_else(|| ClientError::UnknownEmployee(id.to_string()))?;

        if !can_submit(&draft, Some(original)) {
            return Err(ClientError::SubmitDisabled);
        }
        check_form(&draft)?;

        self.send_update(&draft).await
    }

    async fn send_update(&mut self, draft: &DraftRecord) -> ClientResult<Employee> {
        let Some(id) = draft.id().map(str::to_string) else {
            error!("Refusing to submit an edit draft without an employee id");
            return Err(ClientError::MissingId);
        };

        match self.api.update(&id, &draft.to_update()).await {
            Ok(employee) => {
                info!("Employee {} updated", employee.id);
                self.employees.on_update_succeeded(employee.clone());
                self.modes.finish_edit(&id);
                self.drafts.remove(&id);
                Ok(employee)
            }
            Err(err) => Err(self.fail(
                format!(
                    "Error in PATCH request to update employee {}: {}",
                    draft.get(Field::FullName).unwrap_or_default(),
                    err
                ),
                err,
            )),
        }
    }

    // ----- deletion -----

    /// Deletes a row; the server's list of remaining employees becomes canonical.
    pub async fn delete(&mut self, id: &str) -> ClientResult<()> {
        match self.api.delete(id).await {
            Ok(remaining) => {
                info!("Employee {} deleted, {} remaining", id, remaining.len());
                self.employees.on_delete_succeeded(remaining);
                let employees = &self.employees;
                self.modes.retain(|id| employees.get(id).is_some());
                self.drafts.retain(|id, _| employees.get(id).is_some());
                Ok(())
            }
            Err(err) => {
                let name = self
                    .employees
                    .get(id)
                    .map(|employee| employee.full_name.as_str())
                    .unwrap_or(id);
                let message = format!("Error in DELETE request to delete employee {}: {}", name, err);
                Err(self.fail(message, err))
            }
        }
    }

    fn fail(&self, message: String, err: ClientError) -> ClientError {
        self.reporter.report(&message);
        err
    }
}

fn check_form(draft: &DraftRecord) -> ClientResult<()> {
    let invalid = draft.invalid_fields();
    if invalid.is_empty() {
        return Ok(());
    }
    let names: Vec<&str> = invalid.iter().map(|field| field.name()).collect();
    Err(ClientError::InvalidForm(names.join(", ")))
}

//! Plain-text rendering of the roster table.
//!
//! Each row is rendered behind [`render_guarded`], so a defect while drawing
//! one row replaces only that row with an error notice.

use super::api::EmployeeApi;
use super::draft::DraftRecord;
use super::edit_mode::RowMode;
use super::field::Field;
use super::report::ErrorReporter;
use super::session::RosterSession;
use crate::models::employee::Employee;
use log::error;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

pub const HEADER: &str = "Full Name | DOB | Role";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowView<'a> {
    Display(&'a Employee),
    Form(FormView<'a>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView<'a> {
    pub draft: &'a DraftRecord,
    pub invalid_fields: Vec<Field>,
    pub submit_enabled: bool,
}

impl<'a> FormView<'a> {
    fn new(draft: &'a DraftRecord, submit_enabled: bool) -> Self {
        FormView {
            draft,
            invalid_fields: draft.invalid_fields(),
            submit_enabled,
        }
    }
}

/// The add form, when it is open.
pub fn add_form<A: EmployeeApi, R: ErrorReporter>(session: &RosterSession<A, R>) -> Option<FormView<'_>> {
    session
        .create_draft()
        .map(|draft| FormView::new(draft, session.can_submit_create()))
}

/// One entry per listed employee, in display order.
pub fn rows<A: EmployeeApi, R: ErrorReporter>(session: &RosterSession<A, R>) -> Vec<RowView<'_>> {
    session
        .employees()
        .iter()
        .map(|employee| match (session.row_mode(&employee.id), session.draft(&employee.id)) {
            (RowMode::Editing, Some(draft)) => {
                RowView::Form(FormView::new(draft, session.can_submit_edit(&employee.id)))
            }
            _ => RowView::Display(employee),
        })
        .collect()
}

pub fn render_row(row: &RowView<'_>) -> String {
    match row {
        RowView::Display(employee) => {
            format!("{} | {} | {}", employee.full_name, employee.dob, employee.role)
        }
        RowView::Form(form) => render_form(form),
    }
}

fn render_form(form: &FormView<'_>) -> String {
    let inputs: Vec<String> = Field::ALL
        .iter()
        .map(|&field| {
            let marker = if form.invalid_fields.contains(&field) { "!" } else { "" };
            format!("[{}{}]", form.draft.get(field).unwrap_or_default(), marker)
        })
        .collect();
    let submit = if form.submit_enabled { "submit" } else { "submit (disabled)" };
    format!("{} {} cancel", inputs.join(" "), submit)
}

pub fn render_table<A: EmployeeApi, R: ErrorReporter>(session: &RosterSession<A, R>) -> Vec<String> {
    render_table_with(session, render_row)
}

/// Renders the header, the add form if open, and every row through `render_row`.
pub fn render_table_with<A, R, F>(session: &RosterSession<A, R>, render_row: F) -> Vec<String>
where
    A: EmployeeApi,
    R: ErrorReporter,
    F: Fn(&RowView<'_>) -> String,
{
    let mut lines = vec![HEADER.to_string()];
    if let Some(form) = add_form(session) {
        lines.push(render_guarded(|| render_form(&form)));
    }
    for row in rows(session) {
        lines.push(render_guarded(|| render_row(&row)));
    }
    lines
}

/// Runs `render`, substituting an error notice if it panics.
pub fn render_guarded<F: FnOnce() -> String>(render: F) -> String {
    match panic::catch_unwind(AssertUnwindSafe(render)) {
        Ok(line) => line,
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            error!("Row failed to render: {}", message);
            format!("The following error has occurred: {}", message)
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown error".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::api::EmployeeApi;
    use crate::client::draft::FieldEdit;
    use crate::client::error::ClientResult;
    use crate::client::report::LogReporter;
    use crate::models::employee::{EmployeeUpdate, NewEmployee};
    use async_trait::async_trait;

    struct StaticApi(Vec<Employee>);

    #[async_trait]
    impl EmployeeApi for StaticApi {
        async fn list(&self) -> ClientResult<Vec<Employee>> {
            Ok(self.0.clone())
        }

        async fn create(&self, employee: &NewEmployee) -> ClientResult<Employee> {
            Ok(Employee::from_new("new".to_string(), employee.clone()))
        }

        async fn update(&self, id: &str, fields: &EmployeeUpdate) -> ClientResult<Employee> {
            let employee = self.0.iter().find(|e| e.id == id).cloned().unwrap();
            Ok(employee.merge(fields.clone()))
        }

        async fn delete(&self, id: &str) -> ClientResult<Vec<Employee>> {
            Ok(self.0.iter().filter(|e| e.id != id).cloned().collect())
        }
    }

    fn employee(id: &str, name: &str) -> Employee {
        Employee {
            id: id.to_string(),
            full_name: name.to_string(),
            dob: "01/01/2001".to_string(),
            role: "dev".to_string(),
        }
    }

    async fn session() -> RosterSession<StaticApi, LogReporter> {
        let api = StaticApi(vec![employee("a", "Ann"), employee("b", "Bob"), employee("c", "Cat")]);
        let mut session = RosterSession::new(api, LogReporter);
        session.load().await.unwrap();
        session
    }

    #[actix_web::test]
    async fn no_forms_are_shown_initially() {
        let session = session().await;
        assert!(add_form(&session).is_none());
        assert!(rows(&session)
            .iter()
            .all(|row| matches!(row, RowView::Display(_))));
        assert_eq!(
            render_table(&session),
            vec![
                HEADER,
                "Ann | 01/01/2001 | dev",
                "Bob | 01/01/2001 | dev",
                "Cat | 01/01/2001 | dev",
            ]
        );
    }

    #[actix_web::test]
    async fn edited_row_renders_as_form() {
        let mut session = session().await;
        session.begin_edit("b").unwrap();
        session.edit_field("b", FieldEdit::new(Field::Dob, "01/01/01")).unwrap();

        let rows = rows(&session);
        assert!(matches!(rows[0], RowView::Display(_)));
        match &rows[1] {
            RowView::Form(form) => {
                assert_eq!(form.invalid_fields, vec![Field::Dob]);
                assert!(form.submit_enabled);
            }
            other => panic!("expected a form, got {:?}", other),
        }
        assert_eq!(
            render_row(&rows[1]),
            "[Bob] [01/01/01!] [dev] submit cancel"
        );
    }

    #[actix_web::test]
    async fn add_form_renders_below_the_header() {
        let mut session = session().await;
        session.open_add_form();

        let lines = render_table(&session);
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[1], "[!] [!] [!] submit (disabled) cancel");
    }

    #[actix_web::test]
    async fn failing_row_is_replaced_by_a_notice() {
        let session = session().await;

        let lines = render_table_with(&session, |row| match row {
            RowView::Display(employee) if employee.id == "b" => panic!("bad row"),
            other => render_row(other),
        });

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], "Ann | 01/01/2001 | dev");
        assert_eq!(lines[2], "The following error has occurred: bad row");
        assert_eq!(lines[3], "Cat | 01/01/2001 | dev");
    }
}

use super::draft::DraftRecord;
use super::field::Field;
use crate::models::employee::Employee;

/// Whether the submit control is enabled for `draft`.
///
/// Only presence is checked here. The DOB pattern is enforced separately by
/// [`DraftRecord::is_form_valid`] at submission time.
pub fn can_submit(draft: &DraftRecord, original: Option<&Employee>) -> bool {
    let complete = draft.has_required_fields();
    let has_id = draft.id().is_some_and(|id| !id.is_empty());

    match original {
        None => complete,
        Some(original) => complete && has_id && differs_from(draft, original),
    }
}

fn differs_from(draft: &DraftRecord, original: &Employee) -> bool {
    draft.get(Field::FullName) != Some(original.full_name.as_str())
        || draft.get(Field::Dob) != Some(original.dob.as_str())
        || draft.get(Field::Role) != Some(original.role.as_str())
}

use log::debug;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowMode {
    Viewing,
    Editing,
}

/// Which rows render as forms.
///
/// Rows are tracked independently by employee id, so any number of them may
/// be edited at once. The add form has no id yet and is tracked as a single
/// flag: while it is visible the add trigger is disabled.
#[derive(Debug, Default, Clone)]
pub struct EditModeTracker {
    editing: HashSet<String>,
    add_form_visible: bool,
}

impl EditModeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self, id: &str) -> RowMode {
        if self.editing.contains(id) {
            RowMode::Editing
        } else {
            RowMode::Viewing
        }
    }

    pub fn is_editing(&self, id: &str) -> bool {
        self.editing.contains(id)
    }

    /// Returns false when the row was already being edited.
    pub fn begin_edit(&mut self, id: &str) -> bool {
        let entered = self.editing.insert(id.to_string());
        if entered {
            debug!("Row {} entered edit mode", id);
        }
        entered
    }

    /// Leaves edit mode after a confirmed update.
    pub fn finish_edit(&mut self, id: &str) -> bool {
        let left = self.editing.remove(id);
        if left {
            debug!("Row {} saved, leaving edit mode", id);
        }
        left
    }

    pub fn cancel_edit(&mut self, id: &str) -> bool {
        let left = self.editing.remove(id);
        if left {
            debug!("Row {} edit canceled", id);
        }
        left
    }

    /// Drops edit mode for every row `keep` rejects.
    pub fn retain(&mut self, keep: impl Fn(&str) -> bool) {
        self.editing.retain(|id| {
            let kept = keep(id.as_str());
            if !kept {
                debug!("Row {} is gone, leaving edit mode", id);
            }
            kept
        });
    }

    pub fn editing_count(&self) -> usize {
        self.editing.len()
    }

    /// Returns false when the add form was already open.
    pub fn show_add_form(&mut self) -> bool {
        if self.add_form_visible {
            return false;
        }
        debug!("Add form opened");
        self.add_form_visible = true;
        true
    }

    pub fn hide_add_form(&mut self) {
        if self.add_form_visible {
            debug!("Add form closed");
        }
        self.add_form_visible = false;
    }

    pub fn is_add_form_visible(&self) -> bool {
        self.add_form_visible
    }

    pub fn add_trigger_enabled(&self) -> bool {
        !self.add_form_visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_start_in_viewing_mode() {
        let tracker = EditModeTracker::new();
        assert_eq!(tracker.mode("a"), RowMode::Viewing);
        assert_eq!(tracker.editing_count(), 0);
    }

    #[test]
    fn rows_are_edited_independently() {
        let mut tracker = EditModeTracker::new();
        assert!(tracker.begin_edit("b"));
        assert_eq!(tracker.mode("a"), RowMode::Viewing);
        assert_eq!(tracker.mode("b"), RowMode::Editing);
        assert_eq!(tracker.mode("c"), RowMode::Viewing);

        assert!(tracker.begin_edit("c"));
        assert!(tracker.cancel_edit("b"));
        assert_eq!(tracker.mode("b"), RowMode::Viewing);
        assert_eq!(tracker.mode("c"), RowMode::Editing);
    }

    #[test]
    fn entering_edit_twice_is_idempotent() {
        let mut tracker = EditModeTracker::new();
        assert!(tracker.begin_edit("a"));
        assert!(!tracker.begin_edit("a"));
        assert_eq!(tracker.editing_count(), 1);
        assert!(tracker.finish_edit("a"));
        assert!(!tracker.finish_edit("a"));
    }

    #[test]
    fn retain_drops_rows_that_are_gone() {
        let mut tracker = EditModeTracker::new();
        tracker.begin_edit("a");
        tracker.begin_edit("b");
        tracker.retain(|id| id != "a");
        assert_eq!(tracker.mode("a"), RowMode::Viewing);
        assert_eq!(tracker.mode("b"), RowMode::Editing);
        assert_eq!(tracker.editing_count(), 1);
    }

    #[test]
    fn add_form_disables_its_trigger() {
        let mut tracker = EditModeTracker::new();
        assert!(tracker.add_trigger_enabled());
        assert!(tracker.show_add_form());
        assert!(!tracker.add_trigger_enabled());
        assert!(!tracker.show_add_form());

        tracker.begin_edit("a");
        tracker.hide_add_form();
        assert!(tracker.add_trigger_enabled());
        assert!(tracker.is_editing("a"));
    }
}

//! Roster client: the row editing state machine and the calls that drive it.
//!
//! Leaves first: [`field`] validates single values, [`draft`] buffers edits,
//! [`gate`] decides whether a draft may be submitted, [`edit_mode`] tracks
//! which rows show forms, [`reconciler`] applies server results to the
//! canonical list, and [`session`] ties them to an [`EmployeeApi`].

pub mod api;
pub mod config;
pub mod draft;
pub mod edit_mode;
pub mod error;
pub mod field;
pub mod gate;
pub mod reconciler;
pub mod report;
pub mod session;
pub mod view;

pub use api::{EmployeeApi, HttpEmployeeApi};
pub use config::ClientConfig;
pub use draft::{apply_edit, fold_edits, DraftRecord, FieldEdit};
pub use edit_mode::{EditModeTracker, RowMode};
pub use error::{ClientError, ClientResult};
pub use field::{is_valid, is_valid_dob, Field};
pub use gate::can_submit;
pub use reconciler::EmployeeCollection;
pub use report::{CollectingReporter, ErrorReporter, LogReporter};
pub use session::RosterSession;

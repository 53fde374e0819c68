//! The logbook document model and its mutation API.
//!
//! - [`LogbookDocument`] and its fixed sections
//! - [`ActivitySession`], identified by [`SessionId`]
//! - [`FieldPath`] / [`SessionField`] to address individual fields
//! - [`DocumentStore`] and the pure mutation functions

mod model;
mod path;
mod session;
mod store;

pub use model::{HealthHabits, LogbookDocument, PracticeRelationship, SemesterReviews, TestsSummary};
pub use path::{FieldPath, HealthField, PracticeField, ReviewField, TestsField};
pub use session::{ActivitySession, SessionField, SessionId, SessionIdMinter};
pub use store::{
    add_session, load_or_default, remove_session, set_field, update_session, DocumentStore,
    ResetConfirmation,
};

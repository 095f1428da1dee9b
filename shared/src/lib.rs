//! Platform-neutral core of the devotional admin dashboard.
//!
//! Everything here is plain state: the frontend runs the network calls and
//! feeds results back in. That keeps the paging, sequencing, and draft rules
//! testable without a browser.

pub mod collection;
pub mod columns;
pub mod editor;
/// API and validation error types.
pub mod error;
/// Date parsing and display helpers.
pub mod format;
/// Wire model of devotional records and list responses.
pub mod model;
/// Toast messages.
pub mod notice;
/// Page-window arithmetic for the pager.
pub mod pagination;

pub use collection::{CollectionController, CollectionQuery, FetchOutcome, FetchRequest};
pub use editor::{
    Draft, DraftField, EditorMode, EditorState, RecordEditor, SubmitOutcome, SubmitPlan,
    SubmitTarget,
};
pub use error::{ApiError, ValidationError};
pub use model::{
    Category, CategoryTab, Devotional, DevotionalPayload, ListResponse, PageSlice, Status,
};
pub use notice::{Notice, Severity};

//! Create/edit draft of a single devotional.
//!
//! Like the collection controller this type does no I/O: `begin_submit`
//! hands out a [`SubmitPlan`] and the caller reports the API result back via
//! `finish_submit`. The pending image type is generic so the browser `File`
//! never leaks into this crate.

use crate::{
    error::{ApiError, ValidationError},
    model::{Category, Devotional, DevotionalPayload, Status},
    notice::Notice,
};

/// Editable fields of a devotional.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Draft {
    /// Target category.
    pub category: Category,
    /// Title, the only required field.
    pub title: String,
    /// Publication date.
    pub date: String,
    /// Commentary.
    pub commentary: String,
    /// Prayer.
    pub prayer: String,
    /// Further study.
    pub further_study: String,
    /// Word of the day.
    pub word_of_day: String,
    /// Scripture of the day.
    pub scripture_of_day: String,
    /// Bible-in-one-year plan.
    pub bible_in_one_year: String,
    /// Announcements.
    pub announcements: String,
    /// Questions of the day.
    pub question_of_day: Vec<String>,
    /// Image reference typed by the user or copied from the record.
    pub image_url: String,
}

impl Draft {
    /// Copies every editable field of `record`.
    pub fn from_record(record: &Devotional) -> Self {
        Self {
            category: record.category,
            title: record.title.clone(),
            date: record.date.clone(),
            commentary: record.commentary.clone(),
            prayer: record.prayer.clone(),
            further_study: record.further_study.clone(),
            word_of_day: record.word_of_day.clone(),
            scripture_of_day: record.scripture_of_day.clone(),
            bible_in_one_year: record.bible_in_one_year.clone(),
            announcements: record.announcements.clone(),
            question_of_day: record.question_of_day.clone(),
            image_url: record.image_url.clone(),
        }
    }
}

/// Single-line or multi-line text field of a [`Draft`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    /// [`Draft::title`].
    Title,
    /// [`Draft::date`].
    Date,
    /// [`Draft::commentary`].
    Commentary,
    /// [`Draft::prayer`].
    Prayer,
    /// [`Draft::further_study`].
    FurtherStudy,
    /// [`Draft::word_of_day`].
    WordOfDay,
    /// [`Draft::scripture_of_day`].
    ScriptureOfDay,
    /// [`Draft::bible_in_one_year`].
    BibleInOneYear,
    /// [`Draft::announcements`].
    Announcements,
    /// [`Draft::image_url`].
    ImageUrl,
}

impl DraftField {
    /// Current value of this field.
    pub fn get(self, draft: &Draft) -> &str {
        match self {
            DraftField::Title => &draft.title,
            DraftField::Date => &draft.date,
            DraftField::Commentary => &draft.commentary,
            DraftField::Prayer => &draft.prayer,
            DraftField::FurtherStudy => &draft.further_study,
            DraftField::WordOfDay => &draft.word_of_day,
            DraftField::ScriptureOfDay => &draft.scripture_of_day,
            DraftField::BibleInOneYear => &draft.bible_in_one_year,
            DraftField::Announcements => &draft.announcements,
            DraftField::ImageUrl => &draft.image_url,
        }
    }

    fn slot(self, draft: &mut Draft) -> &mut String {
        match self {
            DraftField::Title => &mut draft.title,
            DraftField::Date => &mut draft.date,
            DraftField::Commentary => &mut draft.commentary,
            DraftField::Prayer => &mut draft.prayer,
            DraftField::FurtherStudy => &mut draft.further_study,
            DraftField::WordOfDay => &mut draft.word_of_day,
            DraftField::ScriptureOfDay => &mut draft.scripture_of_day,
            DraftField::BibleInOneYear => &mut draft.bible_in_one_year,
            DraftField::Announcements => &mut draft.announcements,
            DraftField::ImageUrl => &mut draft.image_url,
        }
    }
}

/// Whether the editor creates a new record or edits an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMode {
    /// New record.
    Create,
    /// Existing record.
    Edit {
        /// Identifier of the record being edited.
        id: String,
    },
}

/// Lifecycle of the editor.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditorState {
    /// No draft.
    #[default]
    Closed,
    /// Draft being edited.
    Open(EditorMode),
    /// Draft sent, waiting for the API.
    Submitting(EditorMode),
}

/// API call a submission maps to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitTarget {
    /// Create in `category`.
    Create {
        /// Category path segment.
        category: Category,
    },
    /// Update record `id` under `category`.
    Update {
        /// Identifier of the original record.
        id: String,
        /// Category taken from the edited draft.
        category: Category,
    },
}

impl SubmitTarget {
    fn verb(&self) -> &'static str {
        match self {
            SubmitTarget::Create { .. } => "add",
            SubmitTarget::Update { .. } => "update",
        }
    }

    fn past_tense(&self) -> &'static str {
        match self {
            SubmitTarget::Create { .. } => "added",
            SubmitTarget::Update { .. } => "updated",
        }
    }
}

/// Everything the caller needs to run one submission.
#[derive(Debug, Clone)]
pub struct SubmitPlan<B> {
    /// Token to hand back to [`RecordEditor::finish_submit`].
    pub token: u64,
    /// Create or update.
    pub target: SubmitTarget,
    /// Snapshot of the draft at submit time.
    pub draft: Draft,
    /// Local image to upload before the API call.
    pub pending_image: Option<B>,
}

impl<B> SubmitPlan<B> {
    /// Outgoing body. `uploaded_image` replaces the draft's image reference
    /// when a local image was uploaded. Status is always
    /// [`Status::Pending`].
    pub fn payload(&self, uploaded_image: Option<String>) -> DevotionalPayload {
        let draft = &self.draft;
        DevotionalPayload {
            category: draft.category,
            title: draft.title.trim().to_string(),
            date: draft.date.trim().to_string(),
            commentary: draft.commentary.clone(),
            prayer: draft.prayer.clone(),
            further_study: draft.further_study.clone(),
            word_of_day: draft.word_of_day.clone(),
            scripture_of_day: draft.scripture_of_day.clone(),
            bible_in_one_year: draft.bible_in_one_year.clone(),
            announcements: draft.announcements.clone(),
            question_of_day: draft.question_of_day.clone(),
            image_url: uploaded_image.unwrap_or_else(|| draft.image_url.trim().to_string()),
            status: Status::Pending,
        }
    }
}

/// Result of [`RecordEditor::finish_submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    /// Message for the toast surface.
    pub notice: Notice,
    /// Whether the collection should re-request its current page.
    pub refresh: bool,
}

/// Draft owner for the create/edit modal.
#[derive(Debug, Clone)]
pub struct RecordEditor<B> {
    state: EditorState,
    draft: Draft,
    pending_image: Option<B>,
    preview: Option<String>,
    preview_token: u64,
    submit_token: u64,
}

impl<B> Default for RecordEditor<B> {
    fn default() -> Self {
        Self {
            state: EditorState::Closed,
            draft: Draft::default(),
            pending_image: None,
            preview: None,
            preview_token: 0,
            submit_token: 0,
        }
    }
}

impl<B: Clone> RecordEditor<B> {
    /// Closed editor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lifecycle state.
    pub fn state(&self) -> &EditorState {
        &self.state
    }

    /// True unless closed.
    pub fn is_open(&self) -> bool {
        !matches!(self.state, EditorState::Closed)
    }

    /// True while a submission is outstanding.
    pub fn is_submitting(&self) -> bool {
        matches!(self.state, EditorState::Submitting(_))
    }

    /// Mode of the open editor.
    pub fn mode(&self) -> Option<&EditorMode> {
        match &self.state {
            EditorState::Closed => None,
            EditorState::Open(mode) | EditorState::Submitting(mode) => Some(mode),
        }
    }

    /// Current draft.
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Image reference to show in the preview area.
    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    /// Locally selected image waiting to be uploaded.
    pub fn pending_image(&self) -> Option<&B> {
        self.pending_image.as_ref()
    }

    /// Opens a blank draft in the baseline category.
    pub fn open_for_create(&mut self) {
        self.reset();
        self.state = EditorState::Open(EditorMode::Create);
    }

    /// Opens a draft copied from `record`.
    pub fn open_for_edit(&mut self, record: &Devotional) {
        self.reset();
        self.draft = Draft::from_record(record);
        self.preview = non_blank(&record.image_url);
        self.state = EditorState::Open(EditorMode::Edit {
            id: record.id.clone(),
        });
    }

    /// Closes the editor and discards the draft. A submission still in flight
    /// will not reopen it.
    pub fn cancel(&mut self) {
        self.reset();
        self.state = EditorState::Closed;
    }

    /// Sets one text field.
    pub fn update_field(&mut self, field: DraftField, value: &str) {
        *field.slot(&mut self.draft) = value.to_string();
        if field == DraftField::ImageUrl && self.pending_image.is_none() {
            self.preview = non_blank(value);
        }
    }

    /// Sets the target category.
    pub fn set_category(&mut self, category: Category) {
        self.draft.category = category;
    }

    /// Appends a trimmed question. Blank text is ignored.
    pub fn add_question(&mut self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        self.draft.question_of_day.push(text.to_string());
        true
    }

    /// Removes the question at `index`. Out-of-range indexes are ignored.
    pub fn remove_question(&mut self, index: usize) -> bool {
        if index >= self.draft.question_of_day.len() {
            return false;
        }
        self.draft.question_of_day.remove(index);
        true
    }

    /// Stores `image` as the pending upload and returns the token the preview
    /// must be delivered with.
    pub fn select_local_image(&mut self, image: B) -> Result<u64, ValidationError> {
        if !self.is_open() {
            return Err(ValidationError::EditorClosed);
        }
        self.pending_image = Some(image);
        self.preview_token += 1;
        Ok(self.preview_token)
    }

    /// Delivers the preview for the image selected with `token`. Previews of
    /// superseded selections are dropped.
    pub fn set_preview(&mut self, token: u64, preview: String) -> bool {
        if token != self.preview_token || self.pending_image.is_none() {
            return false;
        }
        self.preview = Some(preview);
        true
    }

    /// Drops the pending image and falls back to the typed image reference.
    pub fn clear_local_image(&mut self) {
        self.pending_image = None;
        self.preview_token += 1;
        self.preview = non_blank(&self.draft.image_url);
    }

    /// Validates the draft and moves to `Submitting`.
    pub fn begin_submit(&mut self) -> Result<SubmitPlan<B>, ValidationError> {
        let mode = match &self.state {
            EditorState::Open(mode) => mode.clone(),
            EditorState::Submitting(_) => return Err(ValidationError::SubmitInFlight),
            EditorState::Closed => return Err(ValidationError::EditorClosed),
        };
        if self.draft.title.trim().is_empty() {
            return Err(ValidationError::MissingTitle);
        }

        let target = match &mode {
            EditorMode::Create => SubmitTarget::Create {
                category: self.draft.category,
            },
            EditorMode::Edit {
                id,
            } => SubmitTarget::Update {
                id: id.clone(),
                category: self.draft.category,
            },
        };
        self.submit_token += 1;
        self.state = EditorState::Submitting(mode);
        tracing::debug!(token = self.submit_token, ?target, "submitting devotional");

        Ok(SubmitPlan {
            token: self.submit_token,
            target,
            draft: self.draft.clone(),
            pending_image: self.pending_image.clone(),
        })
    }

    /// Applies the API result of `plan`.
    pub fn finish_submit(
        &mut self,
        plan: &SubmitPlan<B>,
        result: Result<(), ApiError>,
    ) -> SubmitOutcome {
        let current = plan.token == self.submit_token && self.is_submitting();

        match result {
            Ok(()) => {
                if current {
                    self.cancel();
                }
                SubmitOutcome {
                    notice: Notice::success(format!(
                        "Devotional {} successfully",
                        plan.target.past_tense()
                    )),
                    refresh: true,
                }
            },
            Err(err) => {
                tracing::warn!(token = plan.token, error = %err, "devotional submission failed");
                if current {
                    if let EditorState::Submitting(mode) = &self.state {
                        self.state = EditorState::Open(mode.clone());
                    }
                }
                let message = match err {
                    ApiError::Upload(_) => format!(
                        "Failed to upload image; devotional not {}",
                        plan.target.past_tense()
                    ),
                    _ => format!("Failed to {} devotional", plan.target.verb()),
                };
                SubmitOutcome {
                    notice: Notice::error(message),
                    refresh: false,
                }
            },
        }
    }

    fn reset(&mut self) {
        self.draft = Draft::default();
        self.pending_image = None;
        self.preview = None;
        self.preview_token += 1;
    }
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    type Editor = RecordEditor<&'static str>;

    fn existing() -> Devotional {
        serde_json::from_str(
            r#"{
                "_id": "abc123",
                "devotional": "dailypower",
                "title": "Morning Light",
                "commentary": "Body",
                "question_of_day": ["Who?", "What?"],
                "imageUrl": "https://cdn.example/light.jpg",
                "status": "approved"
            }"#,
        )
        .expect("decode record")
    }

    #[test]
    fn create_opens_blank_draft_in_baseline_category() {
        let mut editor = Editor::new();
        editor.open_for_edit(&existing());
        editor.open_for_create();

        assert_eq!(editor.state(), &EditorState::Open(EditorMode::Create));
        assert_eq!(editor.draft(), &Draft::default());
        assert_eq!(editor.draft().category, Category::DailyGuide);
        assert!(editor.preview().is_none());
        assert!(editor.pending_image().is_none());
    }

    #[test]
    fn edit_copies_record_and_seeds_preview() {
        let mut editor = Editor::new();
        editor.open_for_edit(&existing());

        assert_eq!(
            editor.state(),
            &EditorState::Open(EditorMode::Edit {
                id: "abc123".to_string()
            })
        );
        assert_eq!(editor.draft().title, "Morning Light");
        assert_eq!(editor.draft().question_of_day, vec!["Who?", "What?"]);
        assert_eq!(editor.preview(), Some("https://cdn.example/light.jpg"));
    }

    #[test]
    fn blank_questions_are_ignored() {
        let mut editor = Editor::new();
        editor.open_for_create();

        assert!(!editor.add_question(""));
        assert!(!editor.add_question("   "));
        assert!(editor.draft().question_of_day.is_empty());

        assert!(editor.add_question("Why?"));
        assert_eq!(editor.draft().question_of_day, vec!["Why?"]);
    }

    #[test]
    fn remove_question_respects_bounds_and_order() {
        let mut editor = Editor::new();
        editor.open_for_create();
        for q in ["one", "two", "three"] {
            editor.add_question(q);
        }

        assert!(!editor.remove_question(3));
        assert_eq!(editor.draft().question_of_day.len(), 3);

        assert!(editor.remove_question(1));
        assert_eq!(editor.draft().question_of_day, vec!["one", "three"]);
    }

    #[test]
    fn create_submit_forces_pending_status() {
        let mut editor = Editor::new();
        editor.open_for_create();
        editor.update_field(DraftField::Title, "Fresh Start");
        editor.set_category(Category::DailyMilk);

        let plan = editor.begin_submit().expect("valid draft");
        let payload = plan.payload(None);

        assert_eq!(
            plan.target,
            SubmitTarget::Create {
                category: Category::DailyMilk
            }
        );
        assert_eq!(payload.status, Status::Pending);
        assert_eq!(payload.title, "Fresh Start");
        assert!(editor.is_submitting());
    }

    #[test]
    fn edit_submit_targets_original_id_and_draft_category() {
        let mut editor = Editor::new();
        editor.open_for_edit(&existing());
        editor.set_category(Category::DailyGuide);

        let plan = editor.begin_submit().expect("valid draft");

        assert_eq!(
            plan.target,
            SubmitTarget::Update {
                id: "abc123".to_string(),
                category: Category::DailyGuide,
            }
        );
        assert_eq!(plan.payload(None).status, Status::Pending);
    }

    #[test]
    fn missing_title_blocks_submit() {
        let mut editor = Editor::new();
        editor.open_for_create();
        editor.update_field(DraftField::Title, "  ");

        assert_eq!(editor.begin_submit().map(|_| ()), Err(ValidationError::MissingTitle));
        assert_eq!(editor.state(), &EditorState::Open(EditorMode::Create));
    }

    #[test]
    fn failure_reopens_editor_with_draft_intact() {
        let mut editor = Editor::new();
        editor.open_for_edit(&existing());
        let plan = editor.begin_submit().expect("valid draft");
        assert_eq!(editor.begin_submit().map(|_| ()), Err(ValidationError::SubmitInFlight));

        let outcome = editor.finish_submit(&plan, Err(ApiError::Http(500)));

        assert_eq!(outcome.notice, Notice::error("Failed to update devotional"));
        assert!(!outcome.refresh);
        assert!(matches!(editor.state(), EditorState::Open(EditorMode::Edit { .. })));
        assert_eq!(editor.draft().title, "Morning Light");

        let retry = editor.begin_submit().expect("retry allowed");
        let outcome = editor.finish_submit(&retry, Ok(()));
        assert_eq!(outcome.notice, Notice::success("Devotional updated successfully"));
        assert!(outcome.refresh);
        assert_eq!(editor.state(), &EditorState::Closed);
    }

    #[test]
    fn late_result_after_cancel_does_not_reopen() {
        let mut editor = Editor::new();
        editor.open_for_create();
        editor.update_field(DraftField::Title, "Gone");
        let plan = editor.begin_submit().expect("valid draft");
        editor.cancel();

        let failed = editor.finish_submit(&plan, Err(ApiError::Network("reset".into())));
        assert_eq!(failed.notice, Notice::error("Failed to add devotional"));
        assert_eq!(editor.state(), &EditorState::Closed);

        let succeeded = editor.finish_submit(&plan, Ok(()));
        assert!(succeeded.refresh);
        assert_eq!(editor.state(), &EditorState::Closed);
    }

    #[test]
    fn local_image_preview_and_upload_reference() {
        let mut editor = Editor::new();
        editor.open_for_create();
        editor.update_field(DraftField::Title, "Pictured");
        editor.update_field(DraftField::ImageUrl, "https://cdn.example/typed.png");
        assert_eq!(editor.preview(), Some("https://cdn.example/typed.png"));

        let first = editor.select_local_image("first.png").expect("open");
        let second = editor.select_local_image("second.png").expect("open");
        assert!(!editor.set_preview(first, "data:first".to_string()));
        assert!(editor.set_preview(second, "data:second".to_string()));
        assert_eq!(editor.preview(), Some("data:second"));

        let plan = editor.begin_submit().expect("valid draft");
        assert_eq!(plan.pending_image, Some("second.png"));
        let payload = plan.payload(Some("https://cdn.example/uploaded.png".to_string()));
        assert_eq!(payload.image_url, "https://cdn.example/uploaded.png");
    }

    #[test]
    fn clearing_local_image_restores_typed_reference() {
        let mut editor = Editor::new();
        editor.open_for_edit(&existing());
        let token = editor.select_local_image("local.png").expect("open");
        editor.set_preview(token, "data:local".to_string());

        editor.clear_local_image();

        assert!(editor.pending_image().is_none());
        assert_eq!(editor.preview(), Some("https://cdn.example/light.jpg"));
        assert!(!editor.set_preview(token, "data:late".to_string()));
    }

    #[test]
    fn upload_failure_names_the_operation() {
        let mut editor = Editor::new();
        editor.open_for_create();
        editor.update_field(DraftField::Title, "With image");
        editor.select_local_image("big.png").expect("open");
        let plan = editor.begin_submit().expect("valid draft");

        let outcome = editor.finish_submit(&plan, Err(ApiError::Upload("413".into())));

        assert_eq!(
            outcome.notice,
            Notice::error("Failed to upload image; devotional not added")
        );
        assert_eq!(editor.state(), &EditorState::Open(EditorMode::Create));
        assert_eq!(editor.pending_image(), Some(&"big.png"));
    }

    #[test]
    fn upload_failure_during_edit_names_update() {
        let mut editor = Editor::new();
        editor.open_for_edit(&existing());
        editor.select_local_image("new.png").expect("open");
        let plan = editor.begin_submit().expect("valid draft");

        let outcome = editor.finish_submit(&plan, Err(ApiError::Upload("timeout".into())));

        assert_eq!(
            outcome.notice,
            Notice::error("Failed to upload image; devotional not updated")
        );
        assert!(!outcome.refresh);
    }

    #[test]
    fn closed_editor_rejects_image_and_submit() {
        let mut editor = Editor::new();

        assert_eq!(editor.select_local_image("x.png"), Err(ValidationError::EditorClosed));
        assert_eq!(editor.begin_submit().map(|_| ()), Err(ValidationError::EditorClosed));
    }
}

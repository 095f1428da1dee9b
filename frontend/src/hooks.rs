use std::{cell::RefCell, rc::Rc};

use devotional_shared::{
    ApiError, Category, CategoryTab, CollectionController, CollectionQuery, Devotional, Draft,
    DraftField, EditorMode, FetchOutcome, FetchRequest, Notice, RecordEditor, SubmitPlan,
    SubmitTarget,
};
use gloo_timers::callback::Timeout;
use web_sys::File;
use yew::prelude::*;

use crate::{
    api,
    config::{PAGE_SIZE, PAGE_WINDOW, SEARCH_DEBOUNCE_MS},
    utils::{log_error, read_as_data_url},
};

/// User intents the collection view reacts to.
pub enum CollectionCommand {
    SetCategory(CategoryTab),
    SetSearch(String),
    GoToPage(i64),
    JumpToPage(String),
    Refresh,
}

/// Render-ready copy of the controller state.
#[derive(Clone, PartialEq)]
pub struct CollectionSnapshot {
    pub query: CollectionQuery,
    pub records: Vec<Devotional>,
    pub total_pages: usize,
    pub total_items: usize,
    pub window: Vec<usize>,
    pub loading: bool,
}

#[derive(Clone)]
pub struct CollectionHandle {
    controller: Rc<RefCell<CollectionController>>,
    pub dispatch: Callback<CollectionCommand>,
}

impl CollectionHandle {
    pub fn snapshot(&self) -> CollectionSnapshot {
        let controller = self.controller.borrow();
        CollectionSnapshot {
            query: controller.query().clone(),
            records: controller.records().to_vec(),
            total_pages: controller.total_pages(),
            total_items: controller.total_items(),
            window: controller.page_window().collect(),
            loading: controller.is_loading(),
        }
    }
}

fn run_fetch(
    controller: Rc<RefCell<CollectionController>>,
    redraw: UseForceUpdateHandle,
    notify: Callback<Notice>,
    request: FetchRequest,
) {
    redraw.force_update();
    wasm_bindgen_futures::spawn_local(async move {
        let result = api::fetch_devotionals(&request).await;
        if let Err(err) = &result {
            log_error("Error fetching devotionals", err);
        }

        // Bind first so the RefCell borrow ends before any callback runs.
        let outcome = controller.borrow_mut().complete(request.seq, result);
        match outcome {
            FetchOutcome::Applied => {},
            FetchOutcome::Reissue(next) => {
                run_fetch(controller.clone(), redraw.clone(), notify.clone(), next);
            },
            FetchOutcome::Stale => return,
            FetchOutcome::Failed(notice) => notify.emit(notice),
        }
        redraw.force_update();
    });
}

/// Owns the list state of one dashboard and runs its fetches.
///
/// The initial page is requested on mount. Every later fetch is triggered
/// through [`CollectionHandle::dispatch`].
#[hook]
pub fn use_devotional_collection(notify: Callback<Notice>) -> CollectionHandle {
    let controller = use_mut_ref(|| CollectionController::new(PAGE_SIZE, PAGE_WINDOW));
    let redraw = use_force_update();

    let dispatch = {
        let controller = controller.clone();
        let redraw = redraw.clone();
        let notify = notify.clone();
        Callback::from(move |command: CollectionCommand| {
            let request = {
                let mut controller = controller.borrow_mut();
                match command {
                    CollectionCommand::SetCategory(tab) => Ok(controller.set_category(tab)),
                    CollectionCommand::SetSearch(text) => Ok(controller.set_search(&text)),
                    CollectionCommand::GoToPage(page) => controller.go_to_page(page),
                    CollectionCommand::JumpToPage(input) => controller.jump_to_page(&input),
                    CollectionCommand::Refresh => Ok(controller.refresh()),
                }
            };
            match request {
                Ok(request) => {
                    run_fetch(controller.clone(), redraw.clone(), notify.clone(), request)
                },
                Err(err) => notify.emit(Notice::error(err.to_string())),
            }
        })
    };

    {
        let dispatch = dispatch.clone();
        use_effect_with((), move |_| {
            dispatch.emit(CollectionCommand::Refresh);
            || ()
        });
    }

    CollectionHandle {
        controller,
        dispatch,
    }
}

/// Search box state: the text updates on every keystroke, the search is sent
/// once typing pauses.
#[hook]
pub fn use_debounced_search(dispatch: Callback<CollectionCommand>) -> (String, Callback<String>) {
    let text = use_state(String::new);
    let pending = use_mut_ref(|| None::<Timeout>);

    let on_input = {
        let text = text.clone();
        Callback::from(move |value: String| {
            text.set(value.clone());
            let dispatch = dispatch.clone();
            // Dropping the previous timeout cancels it.
            *pending.borrow_mut() = Some(Timeout::new(SEARCH_DEBOUNCE_MS, move || {
                dispatch.emit(CollectionCommand::SetSearch(value));
            }));
        })
    };

    ((*text).clone(), on_input)
}

pub enum EditorCommand {
    OpenCreate,
    OpenEdit(Devotional),
    Cancel,
    UpdateField(DraftField, String),
    SetCategory(Category),
    AddQuestion(String),
    RemoveQuestion(usize),
    SelectImage(File),
    ClearImage,
    Submit,
}

#[derive(Clone, PartialEq)]
pub struct EditorSnapshot {
    pub mode: Option<EditorMode>,
    pub submitting: bool,
    pub draft: Draft,
    pub preview: Option<String>,
    pub pending_image_name: Option<String>,
}

#[derive(Clone)]
pub struct EditorHandle {
    editor: Rc<RefCell<RecordEditor<File>>>,
    pub dispatch: Callback<EditorCommand>,
}

impl EditorHandle {
    pub fn snapshot(&self) -> EditorSnapshot {
        let editor = self.editor.borrow();
        EditorSnapshot {
            mode: editor.mode().cloned(),
            submitting: editor.is_submitting(),
            draft: editor.draft().clone(),
            preview: editor.preview().map(str::to_string),
            pending_image_name: editor.pending_image().map(File::name),
        }
    }
}

async fn run_submit(plan: &SubmitPlan<File>) -> Result<(), ApiError> {
    let uploaded = match plan.pending_image.as_ref() {
        Some(file) => Some(api::upload_image(file).await?),
        None => None,
    };
    let payload = plan.payload(uploaded);
    match &plan.target {
        SubmitTarget::Create {
            ..
        } => api::create_devotional(&payload).await,
        SubmitTarget::Update {
            id,
            category,
        } => api::update_devotional(*category, id, &payload).await,
    }
}

/// Owns the create/edit draft. `on_saved` fires after every successful
/// submission so the list can refresh.
#[hook]
pub fn use_record_editor(on_saved: Callback<()>, notify: Callback<Notice>) -> EditorHandle {
    let editor = use_mut_ref(RecordEditor::<File>::new);
    let redraw = use_force_update();

    let dispatch = {
        let editor = editor.clone();
        Callback::from(move |command: EditorCommand| {
            match command {
                EditorCommand::OpenCreate => editor.borrow_mut().open_for_create(),
                EditorCommand::OpenEdit(record) => editor.borrow_mut().open_for_edit(&record),
                EditorCommand::Cancel => editor.borrow_mut().cancel(),
                EditorCommand::UpdateField(field, value) => {
                    editor.borrow_mut().update_field(field, &value)
                },
                EditorCommand::SetCategory(category) => editor.borrow_mut().set_category(category),
                EditorCommand::AddQuestion(text) => {
                    editor.borrow_mut().add_question(&text);
                },
                EditorCommand::RemoveQuestion(index) => {
                    editor.borrow_mut().remove_question(index);
                },
                EditorCommand::ClearImage => editor.borrow_mut().clear_local_image(),
                EditorCommand::SelectImage(file) => {
                    let token = editor.borrow_mut().select_local_image(file.clone());
                    match token {
                        Ok(token) => {
                            let editor = editor.clone();
                            let redraw = redraw.clone();
                            wasm_bindgen_futures::spawn_local(async move {
                                match read_as_data_url(&file).await {
                                    Ok(url) => {
                                        let applied = editor.borrow_mut().set_preview(token, url);
                                        if applied {
                                            redraw.force_update();
                                        }
                                    },
                                    Err(err) => {
                                        log_error("Error reading image", format!("{:?}", err))
                                    },
                                }
                            });
                        },
                        Err(err) => notify.emit(Notice::error(err.to_string())),
                    }
                },
                EditorCommand::Submit => {
                    let plan = editor.borrow_mut().begin_submit();
                    match plan {
                        Ok(plan) => {
                            let editor = editor.clone();
                            let redraw = redraw.clone();
                            let notify = notify.clone();
                            let on_saved = on_saved.clone();
                            wasm_bindgen_futures::spawn_local(async move {
                                let result = run_submit(&plan).await;
                                if let Err(err) = &result {
                                    log_error("Error submitting devotional", err);
                                }
                                let outcome = editor.borrow_mut().finish_submit(&plan, result);
                                notify.emit(outcome.notice);
                                if outcome.refresh {
                                    on_saved.emit(());
                                }
                                redraw.force_update();
                            });
                        },
                        Err(err) => notify.emit(Notice::error(err.to_string())),
                    }
                },
            }
            redraw.force_update();
        })
    };

    EditorHandle {
        editor,
        dispatch,
    }
}

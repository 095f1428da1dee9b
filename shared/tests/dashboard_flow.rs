//! End-to-end rounds of the dashboard core: list, edit, refresh, and racing
//! tab switches, answered by an in-memory stand-in for the remote API.

use devotional_shared::{
    ApiError, CategoryTab, CollectionController, DraftField, FetchOutcome, FetchRequest,
    ListResponse, Notice, PageSlice, RecordEditor, Status, SubmitTarget,
};

/// Minimal stand-in for the remote API: answers list requests from a fixed
/// set of JSON pages.
fn respond(request: &FetchRequest) -> Result<PageSlice, ApiError> {
    let category = request.category.map_or("dailyguide", |c| c.slug());
    let body = serde_json::json!({
        "status": true,
        "data": [{
            "_id": format!("{category}-{}", request.page),
            "devotional": category,
            "title": format!("{category} page {}", request.page),
            "question_of_day": ["Q1"],
            "status": "approved",
        }],
        "currentPage": request.page,
        "totalPages": 12,
        "totalItems": 120,
    });
    let response: ListResponse =
        serde_json::from_value(body).map_err(|e| ApiError::Parse(e.to_string()))?;
    response.into_slice()
}

#[test]
fn list_edit_and_refresh_round() {
    let mut collection = CollectionController::default();
    let mut editor = RecordEditor::<String>::new();

    let request = collection.refresh();
    assert_eq!(collection.complete(request.seq, respond(&request)), FetchOutcome::Applied);
    assert_eq!(collection.total_pages(), 12);

    let request = collection.set_category(CategoryTab::Power);
    assert_eq!(request.page, 1);
    collection.complete(request.seq, respond(&request));

    let request = collection.go_to_page(6).expect("page 6 exists");
    collection.complete(request.seq, respond(&request));
    assert_eq!(collection.page_window(), 4..=8);

    let record = collection.records()[0].clone();
    assert_eq!(record.id, "dailypower-6");
    editor.open_for_edit(&record);
    editor.update_field(DraftField::Title, "Edited title");
    editor.add_question("Q2");

    let plan = editor.begin_submit().expect("valid draft");
    match &plan.target {
        SubmitTarget::Update {
            id,
            ..
        } => assert_eq!(id, "dailypower-6"),
        other => panic!("expected update, got {other:?}"),
    }
    let payload = plan.payload(None);
    assert_eq!(payload.status, Status::Pending);
    assert_eq!(payload.question_of_day, vec!["Q1", "Q2"]);

    let outcome = editor.finish_submit(&plan, Ok(()));
    assert!(outcome.refresh);
    assert!(!editor.is_open());

    let request = collection.refresh();
    assert_eq!(request.page, 6);
    assert_eq!(request.category, Some(devotional_shared::Category::DailyPower));

    let failed = collection.complete(request.seq, Err(ApiError::Http(503)));
    assert_eq!(failed, FetchOutcome::Failed(Notice::error("Failed to load devotionals")));
    assert_eq!(collection.records()[0].id, "dailypower-6");
}

#[test]
fn rapid_tab_switches_keep_only_the_last_answer() {
    let mut collection = CollectionController::default();

    let milk = collection.set_category(CategoryTab::Milk);
    let power = collection.set_category(CategoryTab::Power);
    let all = collection.set_category(CategoryTab::All);

    assert_eq!(collection.complete(power.seq, respond(&power)), FetchOutcome::Stale);
    assert_eq!(collection.complete(all.seq, respond(&all)), FetchOutcome::Applied);
    assert_eq!(collection.complete(milk.seq, respond(&milk)), FetchOutcome::Stale);

    assert_eq!(collection.records()[0].id, "dailyguide-1");
    assert!(!collection.is_loading());
}

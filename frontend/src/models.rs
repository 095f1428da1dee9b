// Mock 数据
//
// Only compiled with the `mock` feature: an in-memory stand-in for the
// remote devotional API so the dashboard can be previewed without a server.

use std::cell::RefCell;

use devotional_shared::{
    pagination::total_pages_for, ApiError, Category, Devotional, DevotionalPayload, FetchRequest,
    PageSlice,
};
use gloo_timers::future::TimeoutFuture;
use web_sys::File;

// =============== Mock 数据 ===============

thread_local! {
    static STORE: RefCell<MockStore> = RefCell::new(MockStore::seeded());
}

struct MockStore {
    records: Vec<Devotional>,
    next_id: u32,
}

impl MockStore {
    fn seeded() -> Self {
        let titles = [
            "Walking in the Light",
            "The Bread of Life",
            "Strength for Today",
            "Living Water",
            "A Quiet Heart",
            "Faith Over Fear",
            "Seeds of Kindness",
            "The Good Shepherd",
        ];
        let scriptures = ["John 8:12", "John 6:35", "Isaiah 40:31", "John 4:14", "Psalm 46:10"];
        let statuses = ["approved", "pending", "rejected", "approved"];

        let mut records = Vec::new();
        for i in 1..=36_u32 {
            let category = Category::ALL[(i as usize) % Category::ALL.len()];
            let title = titles[(i as usize) % titles.len()];
            let day = 1 + (i % 28);
            let month = 1 + (i % 12);
            let value = serde_json::json!({
                "_id": format!("mock-{i:03}"),
                "devotional": category.slug(),
                "title": format!("{title} ({i})"),
                "date": format!("2024-{month:02}-{day:02}"),
                "commentary": format!("Reflection {i} on {title}."),
                "prayer": "Lord, guide my steps today.",
                "further_study": "Psalm 23; Romans 8",
                "word_of_day": "Grace",
                "scripture_of_day": scriptures[(i as usize) % scriptures.len()],
                "bible_in_one_year": format!("Genesis {i}-{}", i + 1),
                "question_of_day": ["What stood out to you?"],
                "imageUrl": "",
                "status": statuses[(i as usize) % statuses.len()],
                "createdAt": format!("2024-{month:02}-{day:02}T08:00:00.000Z"),
                "updatedAt": format!("2024-{month:02}-{day:02}T08:00:00.000Z"),
            });
            if let Ok(record) = serde_json::from_value::<Devotional>(value) {
                records.push(record);
            }
        }

        Self {
            records,
            next_id: 37,
        }
    }
}

fn now_iso() -> String {
    String::from(js_sys::Date::new_0().to_iso_string())
}

fn apply_payload(record: &mut Devotional, payload: &DevotionalPayload) {
    record.category = payload.category;
    record.title = payload.title.clone();
    record.date = payload.date.clone();
    record.commentary = payload.commentary.clone();
    record.prayer = payload.prayer.clone();
    record.further_study = payload.further_study.clone();
    record.word_of_day = payload.word_of_day.clone();
    record.scripture_of_day = payload.scripture_of_day.clone();
    record.bible_in_one_year = payload.bible_in_one_year.clone();
    record.announcements = payload.announcements.clone();
    record.question_of_day = payload.question_of_day.clone();
    record.image_url = payload.image_url.clone();
    record.status = payload.status;
    record.updated_at = now_iso();
}

/// 分页 + 分类端点 + 标题/经文搜索
pub fn mock_list(request: &FetchRequest) -> PageSlice {
    STORE.with(|store| {
        let store = store.borrow();
        // Same routing as the real API: unfiltered lists hit dailyguide.
        let category = request.endpoint_category();
        let needle = request.search.as_deref().map(str::to_lowercase);
        let matching: Vec<&Devotional> = store
            .records
            .iter()
            .filter(|record| record.category == category)
            .filter(|record| match needle.as_deref() {
                Some(needle) => {
                    record.title.to_lowercase().contains(needle)
                        || record.scripture_of_day.to_lowercase().contains(needle)
                },
                None => true,
            })
            .collect();

        let total_items = matching.len();
        let start = request.page.saturating_sub(1) * request.page_size;
        PageSlice {
            records: matching
                .into_iter()
                .skip(start)
                .take(request.page_size)
                .cloned()
                .collect(),
            total_items,
            total_pages: total_pages_for(total_items, request.page_size),
        }
    })
}

pub fn mock_create(payload: &DevotionalPayload) {
    STORE.with(|store| {
        let mut store = store.borrow_mut();
        let id = format!("mock-{:03}", store.next_id);
        store.next_id += 1;
        let Ok(mut record) = serde_json::from_value::<Devotional>(serde_json::json!({ "_id": id }))
        else {
            return;
        };
        apply_payload(&mut record, payload);
        record.created_at = record.updated_at.clone();
        store.records.insert(0, record);
    });
}

pub fn mock_update(id: &str, payload: &DevotionalPayload) -> Result<(), ApiError> {
    STORE.with(|store| {
        let mut store = store.borrow_mut();
        let record = store
            .records
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or(ApiError::Http(404))?;
        apply_payload(record, payload);
        Ok(())
    })
}

pub fn mock_delete(id: &str) -> Result<(), ApiError> {
    STORE.with(|store| {
        let mut store = store.borrow_mut();
        let before = store.records.len();
        store.records.retain(|record| record.id != id);
        if store.records.len() == before {
            Err(ApiError::Http(404))
        } else {
            Ok(())
        }
    })
}

/// Local object URL after a short artificial delay; only valid for this tab.
pub async fn mock_upload(file: &File) -> Result<String, ApiError> {
    TimeoutFuture::new(600).await;
    web_sys::Url::create_object_url_with_blob(file)
        .map_err(|e| ApiError::Upload(format!("{:?}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(category: Option<Category>) -> FetchRequest {
        FetchRequest {
            seq: 1,
            category,
            page: 1,
            page_size: 100,
            search: None,
        }
    }

    #[test]
    fn unfiltered_list_matches_daily_guide_endpoint() {
        let all = mock_list(&request(None));
        let guide = mock_list(&request(Some(Category::DailyGuide)));

        assert!(!all.records.is_empty());
        assert!(all
            .records
            .iter()
            .all(|record| record.category == Category::DailyGuide));
        assert_eq!(all, guide);
    }
}

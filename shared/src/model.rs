use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Content category a devotional belongs to. The wire value doubles as the
/// path segment of the remote API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    /// Daily guide, the baseline category.
    #[default]
    #[serde(rename = "dailyguide")]
    DailyGuide,
    /// Daily power.
    #[serde(rename = "dailypower")]
    DailyPower,
    /// Daily milk.
    #[serde(rename = "dailymilk")]
    DailyMilk,
}

impl Category {
    /// Every category, in tab order.
    pub const ALL: [Category; 3] =
        [Category::DailyGuide, Category::DailyPower, Category::DailyMilk];

    /// Wire/path value, e.g. `dailyguide`.
    pub fn slug(self) -> &'static str {
        match self {
            Category::DailyGuide => "dailyguide",
            Category::DailyPower => "dailypower",
            Category::DailyMilk => "dailymilk",
        }
    }

    /// Human readable name.
    pub fn label(self) -> &'static str {
        match self {
            Category::DailyGuide => "Daily Guide",
            Category::DailyPower => "Daily Power",
            Category::DailyMilk => "Daily Milk",
        }
    }

    /// Inverse of [`Category::slug`].
    pub fn from_slug(slug: &str) -> Option<Self> {
        Category::ALL
            .into_iter()
            .find(|category| category.slug().eq_ignore_ascii_case(slug.trim()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Category filter of the collection view.
///
/// The first tab is unfiltered; the API serves it from the baseline category
/// endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryTab {
    /// No category filter.
    #[default]
    All,
    /// Only daily power items.
    Power,
    /// Only daily milk items.
    Milk,
}

impl CategoryTab {
    /// Tabs in display order.
    pub const TABS: [CategoryTab; 3] = [CategoryTab::All, CategoryTab::Power, CategoryTab::Milk];

    /// Category filter carried by list requests, `None` when unfiltered.
    pub fn filter(self) -> Option<Category> {
        match self {
            CategoryTab::All => None,
            CategoryTab::Power => Some(Category::DailyPower),
            CategoryTab::Milk => Some(Category::DailyMilk),
        }
    }

    /// Tab caption.
    pub fn label(self) -> &'static str {
        match self {
            CategoryTab::All => Category::DailyGuide.label(),
            CategoryTab::Power => Category::DailyPower.label(),
            CategoryTab::Milk => Category::DailyMilk.label(),
        }
    }
}

/// Moderation state of a devotional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Awaiting review. Every submission from this dashboard lands here.
    #[default]
    Pending,
    /// Published.
    Approved,
    /// Refused by a reviewer.
    Rejected,
    /// Any value this client does not know about.
    #[serde(other)]
    Unknown,
}

impl Status {
    /// Capitalized caption for badges.
    pub fn label(self) -> &'static str {
        match self {
            Status::Pending => "Pending",
            Status::Approved => "Approved",
            Status::Rejected => "Rejected",
            Status::Unknown => "Unknown",
        }
    }

    /// Wire value.
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Pending => "pending",
            Status::Approved => "approved",
            Status::Rejected => "rejected",
            Status::Unknown => "unknown",
        }
    }
}

/// A devotional record as served by the remote API.
///
/// Decoding is lenient: a record with `null` fields or an unknown category
/// still renders instead of failing the whole page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Devotional {
    /// Opaque identifier assigned by the API.
    #[serde(rename = "_id")]
    pub id: String,
    /// Category, sent as `devotional` on the wire. Unknown values fall back
    /// to [`Category::DailyGuide`].
    #[serde(rename = "devotional", default, deserialize_with = "lenient_category")]
    pub category: Category,
    /// Title.
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Publication date as sent by the API.
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,
    /// Main commentary body.
    #[serde(default, deserialize_with = "null_as_default")]
    pub commentary: String,
    /// Prayer text.
    #[serde(default, deserialize_with = "null_as_default")]
    pub prayer: String,
    /// Further study references.
    #[serde(default, deserialize_with = "null_as_default")]
    pub further_study: String,
    /// Word of the day.
    #[serde(default, deserialize_with = "null_as_default")]
    pub word_of_day: String,
    /// Scripture reference of the day.
    #[serde(default, deserialize_with = "null_as_default")]
    pub scripture_of_day: String,
    /// Bible-in-one-year reading plan.
    #[serde(default, deserialize_with = "null_as_default")]
    pub bible_in_one_year: String,
    /// Free-form announcements.
    #[serde(default, deserialize_with = "null_as_default")]
    pub announcements: String,
    /// Questions of the day, in order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub question_of_day: Vec<String>,
    /// Image reference.
    #[serde(rename = "imageUrl", default, deserialize_with = "null_as_default")]
    pub image_url: String,
    /// Moderation state.
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: Status,
    /// Whether the item is suspended.
    #[serde(rename = "isSuspended", default, deserialize_with = "null_as_default")]
    pub is_suspended: bool,
    /// Whether the item is soft-deleted.
    #[serde(rename = "isDeleted", default, deserialize_with = "null_as_default")]
    pub is_deleted: bool,
    /// Soft-delete timestamp.
    #[serde(rename = "deletedAt", default)]
    pub deleted_at: Option<String>,
    /// Creation timestamp.
    #[serde(rename = "createdAt", default, deserialize_with = "null_as_default")]
    pub created_at: String,
    /// Last update timestamp.
    #[serde(rename = "updatedAt", default, deserialize_with = "null_as_default")]
    pub updated_at: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_category<'de, D>(deserializer: D) -> Result<Category, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(Category::from_slug).unwrap_or_default())
}

/// Body of create and update calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DevotionalPayload {
    /// Target category.
    #[serde(rename = "devotional")]
    pub category: Category,
    /// Title.
    pub title: String,
    /// Publication date, omitted when blank.
    #[serde(default, skip_serializing_if = "String::is_empty")]
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
    #[serde(default)]
    pub announcements: String,
    /// Questions of the day.
    pub question_of_day: Vec<String>,
    /// Image reference.
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    /// Moderation state.
    pub status: Status,
}

/// Raw list response of the remote API.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse {
    /// Logical success flag.
    pub status: bool,
    /// Records of the requested page.
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<Devotional>,
    /// Page the server actually served.
    #[serde(default, deserialize_with = "null_as_default")]
    pub current_page: usize,
    /// Total page count.
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_pages: usize,
    /// Total item count.
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_items: usize,
    /// Optional server message.
    #[serde(default)]
    pub message: Option<String>,
}

impl ListResponse {
    /// Checks the logical success flag and normalizes the totals.
    pub fn into_slice(self) -> Result<PageSlice, ApiError> {
        if !self.status {
            return Err(ApiError::Rejected(
                self.message
                    .unwrap_or_else(|| "API response status is false".to_string()),
            ));
        }
        Ok(PageSlice {
            records: self.data,
            total_items: self.total_items,
            total_pages: self.total_pages.max(1),
        })
    }
}

/// One fetched page plus pagination metadata.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageSlice {
    /// Records in server order.
    pub records: Vec<Devotional>,
    /// Total item count across all pages.
    pub total_items: usize,
    /// Total page count, at least 1.
    pub total_pages: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_api_record_with_missing_and_null_fields() {
        let raw = r#"{
            "_id": "65f1",
            "devotional": "dailypower",
            "title": "Grace",
            "question_of_day": null,
            "imageUrl": "https://cdn.example/grace.jpg",
            "status": "archived",
            "isSuspended": false,
            "createdAt": "2024-03-01T08:00:00.000Z"
        }"#;

        let record: Devotional = serde_json::from_str(raw).expect("decode record");

        assert_eq!(record.id, "65f1");
        assert_eq!(record.category, Category::DailyPower);
        assert!(record.question_of_day.is_empty());
        assert_eq!(record.status, Status::Unknown);
        assert_eq!(record.image_url, "https://cdn.example/grace.jpg");
        assert!(record.prayer.is_empty());
    }

    #[test]
    fn list_response_with_false_status_is_rejected() {
        let raw = r#"{"status": false, "data": []}"#;
        let response: ListResponse = serde_json::from_str(raw).expect("decode response");

        assert!(matches!(response.into_slice(), Err(ApiError::Rejected(_))));
    }

    #[test]
    fn zero_total_pages_normalizes_to_one() {
        let raw = r#"{"status": true, "data": [], "currentPage": 1, "totalPages": 0, "totalItems": 0}"#;
        let response: ListResponse = serde_json::from_str(raw).expect("decode response");
        let slice = response.into_slice().expect("slice");

        assert_eq!(slice.total_pages, 1);
        assert_eq!(slice.total_items, 0);
    }

    #[test]
    fn payload_uses_api_field_names() {
        let payload = DevotionalPayload {
            category: Category::DailyMilk,
            title: "Bread".to_string(),
            date: String::new(),
            commentary: String::new(),
            prayer: String::new(),
            further_study: String::new(),
            word_of_day: String::new(),
            scripture_of_day: "John 6:35".to_string(),
            bible_in_one_year: String::new(),
            announcements: String::new(),
            question_of_day: vec!["Why?".to_string()],
            image_url: "x.png".to_string(),
            status: Status::Pending,
        };

        let value = serde_json::to_value(&payload).expect("encode payload");

        assert_eq!(value["devotional"], "dailymilk");
        assert_eq!(value["imageUrl"], "x.png");
        assert_eq!(value["status"], "pending");
        assert!(value.get("date").is_none());
    }

    #[test]
    fn category_slugs_parse_back() {
        for category in Category::ALL {
            assert_eq!(Category::from_slug(category.slug()), Some(category));
        }
        assert_eq!(Category::from_slug("weekly"), None);
        assert_eq!(CategoryTab::All.filter(), None);
    }

    #[test]
    fn null_string_fields_decode_as_empty() {
        let raw = r#"{
            "status": true,
            "data": [{
                "_id": "65f2",
                "devotional": "dailyguide",
                "title": null,
                "date": null,
                "imageUrl": null,
                "commentary": null,
                "status": null,
                "isDeleted": null,
                "createdAt": null
            }],
            "totalPages": null,
            "totalItems": 1
        }"#;

        let response: ListResponse = serde_json::from_str(raw).expect("decode response");
        let slice = response.into_slice().expect("slice");

        assert_eq!(slice.records.len(), 1);
        let record = &slice.records[0];
        assert!(record.title.is_empty());
        assert!(record.date.is_empty());
        assert!(record.image_url.is_empty());
        assert_eq!(record.status, Status::Pending);
        assert!(!record.is_deleted);
        assert_eq!(slice.total_pages, 1);
    }

    #[test]
    fn unknown_or_null_category_falls_back_to_daily_guide() {
        let unknown: Devotional =
            serde_json::from_str(r#"{"_id": "a", "devotional": "weeklyword"}"#).expect("decode");
        let null: Devotional =
            serde_json::from_str(r#"{"_id": "b", "devotional": null}"#).expect("decode");
        let upper: Devotional =
            serde_json::from_str(r#"{"_id": "c", "devotional": "DailyMilk"}"#).expect("decode");

        assert_eq!(unknown.category, Category::DailyGuide);
        assert_eq!(null.category, Category::DailyGuide);
        assert_eq!(upper.category, Category::DailyMilk);
    }

    #[test]
    fn unexpected_extra_fields_are_ignored() {
        let raw = r#"{
            "_id": "65f3",
            "title": "Hope",
            "posted_by": {"_id": "u1", "name": "Admin"},
            "__v": 0
        }"#;

        let record: Devotional = serde_json::from_str(raw).expect("decode record");

        assert_eq!(record.title, "Hope");
    }
}

//! JSON shapes exchanged with the REST backend and their conversions.

use crate::domain::entities::{
    NewSubscriber, Newsletter, NewsletterDraft, NewsletterStatus, NewsletterType, Page, Subscriber,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Identifier as sent by the backend: `_id` strings or numeric `id`s.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Text(String),
    Number(i64),
}

impl RecordId {
    fn into_string(self) -> String {
        match self {
            RecordId::Text(id) => id,
            RecordId::Number(id) => id.to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct PaginationMeta {
    #[serde(default)]
    pub pages: Option<u32>,
    #[serde(default)]
    pub total: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct ListEnvelope<R> {
    #[serde(default = "Vec::new")]
    pub data: Vec<R>,
    #[serde(default)]
    pub pagination: Option<PaginationMeta>,
    #[serde(default)]
    pub total: Option<u64>,
}

/// List answer: the usual envelope, or a bare array from older endpoints.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ListBody<R> {
    Envelope(ListEnvelope<R>),
    Bare(Vec<R>),
}

impl<R> ListBody<R> {
    pub fn into_page<T>(self, limit: u32) -> Page<T>
    where
        T: From<R>,
    {
        match self {
            ListBody::Envelope(envelope) => {
                let meta = envelope.pagination.unwrap_or_default();
                let total = envelope.total.or(meta.total);
                let items = envelope.data.into_iter().map(T::from).collect();
                Page::new(items, meta.pages, total, limit)
            }
            ListBody::Bare(records) => {
                let items: Vec<T> = records.into_iter().map(T::from).collect();
                let total = Some(items.len() as u64);
                Page::new(items, Some(1), total, limit)
            }
        }
    }
}

/// Single-record answer (`GET /{resource}/{id}`).
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RecordBody<R> {
    Envelope { data: R },
    Bare(R),
}

impl<R> RecordBody<R> {
    pub fn into_record(self) -> R {
        match self {
            RecordBody::Envelope { data } => data,
            RecordBody::Bare(record) => record,
        }
    }
}

/// Create/update answer. Both fields are optional on the wire.
#[derive(Debug, Deserialize)]
pub struct SaveEnvelope<R> {
    #[serde(default = "Option::default")]
    pub data: Option<R>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<R> Default for SaveEnvelope<R> {
    fn default() -> Self {
        Self {
            data: None,
            message: None,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterRecord {
    #[serde(rename = "_id", default)]
    pub mongo_id: Option<RecordId>,
    #[serde(default)]
    pub id: Option<RecordId>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub sub_title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub featured_image: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub author: Option<Value>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub views: Option<u64>,
}

impl From<NewsletterRecord> for Newsletter {
    fn from(record: NewsletterRecord) -> Self {
        Newsletter {
            id: pick_id(record.mongo_id, record.id),
            title: record.title,
            subtitle: non_empty(record.sub_title),
            content: record.content,
            kind: record
                .kind
                .as_deref()
                .map(NewsletterType::parse)
                .unwrap_or_default(),
            featured_image: non_empty(record.featured_image),
            status: record
                .status
                .as_deref()
                .map(NewsletterStatus::parse)
                .unwrap_or_default(),
            author: record.author.as_ref().and_then(author_reference),
            created_at: parse_timestamp(record.created_at.as_deref()),
            updated_at: parse_timestamp(record.updated_at.as_deref()),
            views: record.views.unwrap_or(0),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterPayload<'a> {
    pub title: &'a str,
    pub sub_title: &'a str,
    pub content: &'a str,
    #[serde(rename = "type")]
    pub kind: &'a str,
    pub status: &'a str,
    pub featured_image: &'a str,
}

impl<'a> From<&'a NewsletterDraft> for NewsletterPayload<'a> {
    fn from(draft: &'a NewsletterDraft) -> Self {
        Self {
            title: &draft.title,
            sub_title: &draft.subtitle,
            content: &draft.content,
            kind: draft.kind.as_str(),
            status: draft.status.as_str(),
            featured_image: &draft.featured_image,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriberRecord {
    #[serde(rename = "_id", default)]
    pub mongo_id: Option<RecordId>,
    #[serde(default)]
    pub id: Option<RecordId>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, alias = "subscribedAt")]
    pub created_at: Option<String>,
}

impl From<SubscriberRecord> for Subscriber {
    fn from(record: SubscriberRecord) -> Self {
        let (first_name, last_name) = match (record.first_name, record.last_name, record.name) {
            (None, None, Some(name)) => {
                let split = NewSubscriber::from_full_name(&name, "", true);
                (split.first_name, split.last_name)
            }
            (first, last, _) => (first.unwrap_or_default(), last.unwrap_or_default()),
        };

        let is_active = record.is_active.unwrap_or_else(|| {
            record
                .status
                .as_deref()
                .is_none_or(|status| status.eq_ignore_ascii_case("active"))
        });

        Subscriber {
            id: pick_id(record.mongo_id, record.id),
            email: record.email,
            first_name,
            last_name,
            is_active,
            subscribed_at: parse_timestamp(record.created_at.as_deref()),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriberPayload<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub is_active: bool,
}

impl<'a> From<&'a NewSubscriber> for SubscriberPayload<'a> {
    fn from(subscriber: &'a NewSubscriber) -> Self {
        Self {
            first_name: &subscriber.first_name,
            last_name: &subscriber.last_name,
            email: &subscriber.email,
            is_active: subscriber.is_active,
        }
    }
}

fn pick_id(mongo_id: Option<RecordId>, id: Option<RecordId>) -> String {
    mongo_id
        .or(id)
        .map(RecordId::into_string)
        .unwrap_or_default()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Author may be embedded as an object or referenced by id.
fn author_reference(author: &Value) -> Option<String> {
    match author {
        Value::String(reference) => Some(reference.clone()),
        Value::Object(fields) => ["name", "email", "_id", "id"]
            .iter()
            .find_map(|key| fields.get(*key).and_then(Value::as_str))
            .map(str::to_string),
        _ => None,
    }
}

/// Accepts RFC 3339 timestamps and plain `YYYY-MM-DD` dates.
pub fn parse_timestamp(value: Option<&str>) -> Option<DateTime<Utc>> {
    let value = value?.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone};
    use serde_json::json;

    #[test]
    fn test_newsletter_list_envelope() {
        let body = json!({
            "data": [{
                "_id": "665f1c",
                "title": "Spring issue",
                "subTitle": "Fresh news",
                "type": "press",
                "featuredImage": "https://img.example.com/spring.png",
                "status": "published",
                "author": { "_id": "a1", "name": "Barton" },
                "createdAt": "2024-03-01T10:00:00.000Z",
                "views": 12
            }],
            "pagination": { "page": 1, "pages": 4 },
            "total": 37
        });

        let parsed: ListBody<NewsletterRecord> = serde_json::from_value(body).unwrap();
        let page: Page<Newsletter> = parsed.into_page(10);

        assert_eq!(page.total_pages, 4);
        assert_eq!(page.total, Some(37));
        let newsletter = &page.items[0];
        assert_eq!(newsletter.id, "665f1c");
        assert_eq!(newsletter.subtitle.as_deref(), Some("Fresh news"));
        assert_eq!(newsletter.kind, NewsletterType::Press);
        assert_eq!(newsletter.status, NewsletterStatus::Published);
        assert_eq!(newsletter.author.as_deref(), Some("Barton"));
        assert_eq!(newsletter.views, 12);
        assert_eq!(
            newsletter.created_at,
            Some(Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_list_without_pagination_derives_pages() {
        let body = json!({ "data": [{ "id": 7, "title": "One" }], "total": 25 });
        let parsed: ListBody<NewsletterRecord> = serde_json::from_value(body).unwrap();
        let page: Page<Newsletter> = parsed.into_page(10);

        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items[0].id, "7");
    }

    #[test]
    fn test_bare_array_is_a_single_page() {
        let body = json!([{ "_id": "a", "title": "A" }, { "_id": "b", "title": "B" }]);
        let parsed: ListBody<NewsletterRecord> = serde_json::from_value(body).unwrap();
        let page: Page<Newsletter> = parsed.into_page(10);

        assert_eq!(page.items.len(), 2);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.total, Some(2));
    }

    #[test]
    fn test_sparse_newsletter_defaults() {
        let record: NewsletterRecord =
            serde_json::from_value(json!({ "_id": "x", "title": "T", "subTitle": "", "createdAt": "garbage" }))
                .unwrap();
        let newsletter = Newsletter::from(record);

        assert!(newsletter.subtitle.is_none());
        assert_eq!(newsletter.status, NewsletterStatus::Draft);
        assert_eq!(newsletter.kind, NewsletterType::General);
        assert!(newsletter.created_at.is_none());
        assert_eq!(newsletter.views, 0);
    }

    #[test]
    fn test_record_body_accepts_envelope_and_bare() {
        let wrapped: RecordBody<NewsletterRecord> =
            serde_json::from_value(json!({ "data": { "_id": "w", "title": "Wrapped" } })).unwrap();
        assert_eq!(Newsletter::from(wrapped.into_record()).title, "Wrapped");

        let bare: RecordBody<NewsletterRecord> =
            serde_json::from_value(json!({ "_id": "b", "title": "Bare" })).unwrap();
        assert_eq!(Newsletter::from(bare.into_record()).id, "b");
    }

    #[test]
    fn test_newsletter_payload_uses_backend_field_names() {
        let draft = NewsletterDraft {
            title: "T".to_string(),
            subtitle: "S".to_string(),
            content: "C".to_string(),
            kind: NewsletterType::NewsLetter,
            status: NewsletterStatus::Scheduled,
            featured_image: "https://img/x.png".to_string(),
        };

        let value = serde_json::to_value(NewsletterPayload::from(&draft)).unwrap();

        assert_eq!(
            value,
            json!({
                "title": "T",
                "subTitle": "S",
                "content": "C",
                "type": "news letter",
                "status": "scheduled",
                "featuredImage": "https://img/x.png"
            })
        );
    }

    #[test]
    fn test_subscriber_record_variants() {
        let named: SubscriberRecord = serde_json::from_value(json!({
            "_id": "s1",
            "email": "sarah@example.com",
            "firstName": "Sarah",
            "lastName": "Johnson",
            "createdAt": "2023-12-01"
        }))
        .unwrap();
        let subscriber = Subscriber::from(named);
        assert_eq!(subscriber.full_name(), "Sarah Johnson");
        assert!(subscriber.is_active);
        assert_eq!(subscriber.subscribed_at.map(|d| d.day()), Some(1));

        let single: SubscriberRecord = serde_json::from_value(json!({
            "id": 9,
            "email": "lisa@example.com",
            "name": "Lisa Park",
            "status": "inactive"
        }))
        .unwrap();
        let subscriber = Subscriber::from(single);
        assert_eq!(subscriber.id, "9");
        assert_eq!(subscriber.first_name, "Lisa");
        assert_eq!(subscriber.last_name, "Park");
        assert!(!subscriber.is_active);
    }

    #[test]
    fn test_save_envelope_message_only() {
        let saved: SaveEnvelope<NewsletterRecord> =
            serde_json::from_value(json!({ "message": "Newsletter updated" })).unwrap();
        assert!(saved.data.is_none());
        assert_eq!(saved.message.as_deref(), Some("Newsletter updated"));
    }
}

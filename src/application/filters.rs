//! Filters applied to the rows of a loaded page.
//!
//! Every filter field is independent: text search, status, type and period
//! each narrow the rows on their own, so they can be applied in any order and
//! re-applied without changing the result.

use crate::application::list_view::Filterable;
use crate::domain::entities::{Newsletter, Subscriber};
use chrono::{DateTime, Duration, Utc};

/// Normalises a select value: empty or `all` means "no restriction".
pub fn selection(value: Option<&str>) -> Option<String> {
    let value = value?.trim();
    if value.is_empty() || value.eq_ignore_ascii_case("all") {
        None
    } else {
        Some(value.to_lowercase())
    }
}

/// Case-insensitive substring match against any of the given fields.
///
/// An empty needle matches everything.
pub fn matches_text<'a>(fields: impl IntoIterator<Item = &'a str>, needle: &str) -> bool {
    let needle = needle.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    fields
        .into_iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Creation-date window for the newsletters table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Period {
    #[default]
    All,
    Week,
    Month,
    Quarter,
}

impl Period {
    pub const OPTIONS: [(Period, &'static str); 4] = [
        (Period::All, "All Time"),
        (Period::Week, "This Week"),
        (Period::Month, "This Month"),
        (Period::Quarter, "This Quarter"),
    ];

    pub fn parse(value: Option<&str>) -> Self {
        match selection(value).as_deref() {
            Some("week") => Self::Week,
            Some("month") => Self::Month,
            Some("quarter") => Self::Quarter,
            _ => Self::All,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Week => "week",
            Self::Month => "month",
            Self::Quarter => "quarter",
        }
    }

    fn window(&self) -> Option<Duration> {
        match self {
            Self::All => None,
            Self::Week => Some(Duration::days(7)),
            Self::Month => Some(Duration::days(30)),
            Self::Quarter => Some(Duration::days(90)),
        }
    }

    /// Records without a timestamp only match [`Period::All`].
    pub fn contains(&self, timestamp: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
        match (self.window(), timestamp) {
            (None, _) => true,
            (Some(window), Some(at)) => at >= now - window && at <= now,
            (Some(_), None) => false,
        }
    }
}

/// Filter fields of the newsletters table.
#[derive(Debug, Clone)]
pub struct NewsletterFilter {
    pub search: String,
    pub status: Option<String>,
    pub kind: Option<String>,
    pub period: Period,
    /// Reference time for [`Period`], captured once per request.
    pub now: DateTime<Utc>,
}

impl NewsletterFilter {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            search: String::new(),
            status: None,
            kind: None,
            period: Period::All,
            now,
        }
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_status(mut self, status: Option<&str>) -> Self {
        self.status = selection(status);
        self
    }

    pub fn with_kind(mut self, kind: Option<&str>) -> Self {
        self.kind = selection(kind);
        self
    }

    pub fn with_period(mut self, period: Period) -> Self {
        self.period = period;
        self
    }
}

impl Filterable for Newsletter {
    type Filter = NewsletterFilter;

    fn matches(&self, filter: &NewsletterFilter) -> bool {
        let fields = std::iter::once(self.title.as_str()).chain(self.subtitle.as_deref());

        matches_text(fields, &filter.search)
            && filter
                .status
                .as_deref()
                .is_none_or(|status| self.status.as_str() == status)
            && filter
                .kind
                .as_deref()
                .is_none_or(|kind| self.kind.as_str().eq_ignore_ascii_case(kind))
            && filter.period.contains(self.created_at, filter.now)
    }
}

/// Filter fields of the subscribers table.
#[derive(Debug, Clone, Default)]
pub struct SubscriberFilter {
    pub search: String,
    /// `Some(true)` keeps active subscribers, `Some(false)` inactive ones.
    pub active: Option<bool>,
}

impl SubscriberFilter {
    pub fn new(search: impl Into<String>, status: Option<&str>) -> Self {
        let active = match selection(status).as_deref() {
            Some("active") => Some(true),
            Some("inactive") => Some(false),
            _ => None,
        };

        Self {
            search: search.into(),
            active,
        }
    }
}

impl Filterable for Subscriber {
    type Filter = SubscriberFilter;

    fn matches(&self, filter: &SubscriberFilter) -> bool {
        let name = self.full_name();
        matches_text([name.as_str(), self.email.as_str()], &filter.search)
            && filter.active.is_none_or(|active| self.is_active == active)
    }
}

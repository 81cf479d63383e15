//! Query parameters of the list pages and their table fragments.

use crate::application::filters::{NewsletterFilter, Period, SubscriberFilter, selection};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};

/// Filters of the newsletters list, carried in the query string.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewsletterQuery {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub period: Option<String>,
}

impl NewsletterQuery {
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(1).max(1)
    }

    pub fn filter(&self, now: DateTime<Utc>) -> NewsletterFilter {
        NewsletterFilter::new(now)
            .with_search(self.search.trim())
            .with_status(self.status.as_deref())
            .with_kind(self.kind.as_deref())
            .with_period(Period::parse(self.period.as_deref()))
    }

    /// Query string of the list state this request came from.
    pub fn current(&self) -> String {
        self.query_string(self.page())
    }

    /// Query string for `page`, keeping every active filter.
    pub fn query_string(&self, page: u32) -> String {
        let mut query = url::form_urlencoded::Serializer::new(String::new());
        query.append_pair("page", &page.to_string());
        if !self.search.trim().is_empty() {
            query.append_pair("search", self.search.trim());
        }
        if let Some(status) = selection(self.status.as_deref()) {
            query.append_pair("status", &status);
        }
        if let Some(kind) = selection(self.kind.as_deref()) {
            query.append_pair("type", &kind);
        }
        let period = Period::parse(self.period.as_deref());
        if period != Period::All {
            query.append_pair("period", period.as_str());
        }
        query.finish()
    }
}

/// Filters of the subscribers list, carried in the query string.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubscriberQuery {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub status: Option<String>,
}

impl SubscriberQuery {
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(1).max(1)
    }

    pub fn filter(&self) -> SubscriberFilter {
        SubscriberFilter::new(self.search.trim(), self.status.as_deref())
    }

    pub fn query_string(&self, page: u32) -> String {
        let mut query = url::form_urlencoded::Serializer::new(String::new());
        query.append_pair("page", &page.to_string());
        if !self.search.trim().is_empty() {
            query.append_pair("search", self.search.trim());
        }
        if let Some(status) = selection(self.status.as_deref()) {
            query.append_pair("status", &status);
        }
        query.finish()
    }
}

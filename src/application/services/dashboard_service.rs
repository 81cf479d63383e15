//! Dashboard summary: counts and recent records of both resources.

use crate::domain::entities::{Newsletter, Page, Subscriber};
use crate::domain::repositories::{NewsletterRepository, SubscriberRepository};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::warn;

/// Number of records shown in each "recent" preview.
pub const RECENT_LIMIT: usize = 5;

#[derive(Debug, Clone, Default)]
pub struct DashboardSummary {
    pub total_subscribers: u64,
    pub total_newsletters: u64,
    pub recent_subscribers: Vec<Subscriber>,
    pub recent_newsletters: Vec<Newsletter>,
}

pub struct DashboardService<S: SubscriberRepository, N: NewsletterRepository> {
    subscribers: Arc<S>,
    newsletters: Arc<N>,
    sample_size: u32,
}

impl<S: SubscriberRepository, N: NewsletterRepository> DashboardService<S, N> {
    /// `sample_size` is the page size requested from each resource.
    pub fn new(subscribers: Arc<S>, newsletters: Arc<N>, sample_size: u32) -> Self {
        Self {
            subscribers,
            newsletters,
            sample_size: sample_size.max(1),
        }
    }

    /// Fetches the first page of both resources concurrently.
    ///
    /// Never fails: a side whose fetch fails is logged and reported as empty.
    pub async fn summary(&self) -> DashboardSummary {
        let (subscribers, newsletters) = tokio::join!(
            self.subscribers.list(1, self.sample_size),
            self.newsletters.list(1, self.sample_size),
        );

        let subscribers = subscribers.unwrap_or_else(|err| {
            warn!(error = %err, "Failed to load subscribers for dashboard");
            Page::empty()
        });
        let newsletters = newsletters.unwrap_or_else(|err| {
            warn!(error = %err, "Failed to load newsletters for dashboard");
            Page::empty()
        });

        DashboardSummary {
            total_subscribers: subscribers.total_count(),
            total_newsletters: newsletters.total_count(),
            recent_subscribers: most_recent(subscribers.items, |s| s.subscribed_at),
            recent_newsletters: most_recent(newsletters.items, |n| n.created_at),
        }
    }
}

/// Newest first, undated records after dated ones in their original order.
fn most_recent<T>(mut items: Vec<T>, created: impl Fn(&T) -> Option<DateTime<Utc>>) -> Vec<T> {
    items.sort_by(|a, b| created(b).cmp(&created(a)));
    items.truncate(RECENT_LIMIT);
    items
}

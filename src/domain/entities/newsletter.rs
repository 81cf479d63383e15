//! Newsletter entity and its enumerated attributes.

use chrono::{DateTime, Utc};
use std::fmt;

/// Publication state of a newsletter.
///
/// Any value the backend sends outside the known set is kept as
/// [`NewsletterStatus::Unknown`] so a single odd record never breaks a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NewsletterStatus {
    #[default]
    Draft,
    Scheduled,
    Sent,
    Published,
    Unknown,
}

impl NewsletterStatus {
    /// Statuses an editor may pick in a form, in display order.
    pub const SELECTABLE: [NewsletterStatus; 4] = [
        NewsletterStatus::Draft,
        NewsletterStatus::Sent,
        NewsletterStatus::Scheduled,
        NewsletterStatus::Published,
    ];

    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "draft" => Self::Draft,
            "scheduled" => Self::Scheduled,
            "sent" => Self::Sent,
            "published" => Self::Published,
            _ => Self::Unknown,
        }
    }

    /// Wire value sent to and compared against the backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Scheduled => "scheduled",
            Self::Sent => "sent",
            Self::Published => "published",
            Self::Unknown => "unknown",
        }
    }

    /// Human-readable option label for forms.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Scheduled => "Scheduled",
            Self::Sent => "Sent",
            Self::Published => "Published",
            Self::Unknown => "Unknown",
        }
    }

    /// Text of the status badge shown in tables.
    ///
    /// Published newsletters are presented as sent.
    pub fn badge(&self) -> &'static str {
        match self {
            Self::Sent | Self::Published => "Sent",
            Self::Draft => "Draft",
            Self::Scheduled => "Scheduled",
            Self::Unknown => "Unknown",
        }
    }

    /// CSS modifier for the status badge.
    pub fn badge_class(&self) -> &'static str {
        match self {
            Self::Sent | Self::Published => "badge-success",
            Self::Draft => "badge-warning",
            Self::Scheduled => "badge-primary",
            Self::Unknown => "badge-secondary",
        }
    }
}

impl fmt::Display for NewsletterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category of a newsletter.
///
/// Unrecognised backend values are preserved verbatim in [`NewsletterType::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NewsletterType {
    Photos,
    Press,
    Videos,
    #[default]
    General,
    NewsLetter,
    Other(String),
}

impl NewsletterType {
    /// Types an editor may pick in a form, in display order.
    pub const SELECTABLE: [NewsletterType; 5] = [
        NewsletterType::Photos,
        NewsletterType::Press,
        NewsletterType::Videos,
        NewsletterType::General,
        NewsletterType::NewsLetter,
    ];

    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "photos" => Self::Photos,
            "press" => Self::Press,
            "videos" => Self::Videos,
            "general" => Self::General,
            "news letter" => Self::NewsLetter,
            _ => Self::Other(value.trim().to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Photos => "photos",
            Self::Press => "press",
            Self::Videos => "videos",
            Self::General => "general",
            Self::NewsLetter => "news letter",
            Self::Other(value) => value,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Photos => "Photos",
            Self::Press => "Press",
            Self::Videos => "Videos",
            Self::General => "General",
            Self::NewsLetter => "News Letter",
            Self::Other(value) => value,
        }
    }
}

impl fmt::Display for NewsletterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A newsletter as held by the backend.
#[derive(Debug, Clone)]
pub struct Newsletter {
    pub id: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub content: Option<String>,
    pub kind: NewsletterType,
    pub featured_image: Option<String>,
    pub status: NewsletterStatus,
    pub author: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub views: u64,
}

impl Newsletter {
    /// Creates a newsletter with only the required attributes set.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            subtitle: None,
            content: None,
            kind: NewsletterType::default(),
            featured_image: None,
            status: NewsletterStatus::default(),
            author: None,
            created_at: None,
            updated_at: None,
            views: 0,
        }
    }
}

/// Payload for creating or updating a newsletter.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewsletterDraft {
    pub title: String,
    pub subtitle: String,
    pub content: String,
    pub kind: NewsletterType,
    pub status: NewsletterStatus,
    pub featured_image: String,
}

impl From<&Newsletter> for NewsletterDraft {
    fn from(newsletter: &Newsletter) -> Self {
        Self {
            title: newsletter.title.clone(),
            subtitle: newsletter.subtitle.clone().unwrap_or_default(),
            content: newsletter.content.clone().unwrap_or_default(),
            kind: newsletter.kind.clone(),
            status: newsletter.status,
            featured_image: newsletter.featured_image.clone().unwrap_or_default(),
        }
    }
}

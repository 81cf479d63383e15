//! Form models for the create/edit dialogs.

use crate::domain::entities::{
    NewSubscriber, Newsletter, NewsletterDraft, NewsletterStatus, NewsletterType,
};
use serde::{Deserialize, Deserializer};
use validator::{Validate, ValidationError};

fn non_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Strips pasted whitespace before any validation runs.
fn trimmed<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    String::deserialize(deserializer).map(|value| value.trim().to_string())
}

/// Fields of the newsletter create/edit dialog, as typed by the user.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct NewsletterForm {
    #[validate(custom(function = "non_blank"))]
    pub title: String,
    pub subtitle: String,
    #[validate(custom(function = "non_blank"))]
    pub content: String,
    pub kind: String,
    pub status: String,
    /// URL of the current image, kept when no new file is chosen.
    pub featured_image: String,
}

impl Default for NewsletterForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            subtitle: String::new(),
            content: String::new(),
            kind: NewsletterType::General.as_str().to_string(),
            status: NewsletterStatus::Draft.as_str().to_string(),
            featured_image: String::new(),
        }
    }
}

impl From<&Newsletter> for NewsletterForm {
    fn from(newsletter: &Newsletter) -> Self {
        let draft = NewsletterDraft::from(newsletter);
        Self {
            title: draft.title,
            subtitle: draft.subtitle,
            content: draft.content,
            kind: draft.kind.as_str().to_string(),
            status: draft.status.as_str().to_string(),
            featured_image: draft.featured_image,
        }
    }
}

impl NewsletterForm {
    pub fn to_draft(&self) -> NewsletterDraft {
        NewsletterDraft {
            title: self.title.trim().to_string(),
            subtitle: self.subtitle.trim().to_string(),
            content: self.content.clone(),
            kind: NewsletterType::parse(&self.kind),
            status: NewsletterStatus::parse(&self.status),
            featured_image: self.featured_image.trim().to_string(),
        }
    }
}

/// Fields of the "add user" dialog.
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
pub struct SubscriberForm {
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(custom(function = "non_blank"))]
    pub name: String,
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(email)]
    pub email: String,
    #[serde(default = "default_subscriber_status")]
    pub status: String,
}

fn default_subscriber_status() -> String {
    "active".to_string()
}

impl Default for SubscriberForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            status: default_subscriber_status(),
        }
    }
}

impl SubscriberForm {
    pub fn is_active(&self) -> bool {
        !self.status.trim().eq_ignore_ascii_case("inactive")
    }

    pub fn to_new_subscriber(&self) -> NewSubscriber {
        NewSubscriber::from_full_name(&self.name, &self.email, self.is_active())
    }
}

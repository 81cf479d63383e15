//! Subscriber entity.

use chrono::{DateTime, Utc};

/// A newsletter subscriber.
///
/// Subscribers sign up through the public site; the dashboard only reads them,
/// apart from the manual "add user" form.
#[derive(Debug, Clone)]
pub struct Subscriber {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub is_active: bool,
    pub subscribed_at: Option<DateTime<Utc>>,
}

impl Subscriber {
    pub fn new(
        id: impl Into<String>,
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            is_active: true,
            subscribed_at: None,
        }
    }

    /// First and last name joined by a space, trimmed when either is missing.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// Up to two uppercase initials for the avatar placeholder.
    ///
    /// Falls back to the first letter of the email when no name is known.
    pub fn initials(&self) -> String {
        let from_name: String = [&self.first_name, &self.last_name]
            .iter()
            .filter_map(|part| part.chars().next())
            .collect();

        let initials = if from_name.is_empty() {
            self.email.chars().take(1).collect()
        } else {
            from_name
        };

        initials.to_uppercase()
    }
}

/// Input data for manually adding a subscriber.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSubscriber {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub is_active: bool,
}

impl NewSubscriber {
    /// Builds a subscriber from a single "full name" field.
    ///
    /// The first whitespace-separated word becomes the first name, the rest
    /// the last name.
    pub fn from_full_name(name: &str, email: impl Into<String>, is_active: bool) -> Self {
        let name = name.trim();
        let (first_name, last_name) = match name.split_once(char::is_whitespace) {
            Some((first, rest)) => (first.to_string(), rest.trim().to_string()),
            None => (name.to_string(), String::new()),
        };

        Self {
            first_name,
            last_name,
            email: email.into(),
            is_active,
        }
    }
}

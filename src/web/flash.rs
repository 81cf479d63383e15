//! One-shot notifications carried across a redirect in the `flash` cookie.
//!
//! A handler that redirects after a mutation pushes a [`Notification`]; the
//! next page rendered takes it out of the jar and removes the cookie, so it
//! shows exactly once.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

pub const FLASH_COOKIE: &str = "flash";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Error,
}

impl Level {
    fn as_str(&self) -> &'static str {
        match self {
            Level::Success => "success",
            Level::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: Level,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            level: Level::Success,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            level: Level::Error,
            title: title.into(),
            description: description.into(),
        }
    }

    /// CSS class of the notification banner.
    pub fn css_class(&self) -> &'static str {
        match self.level {
            Level::Success => "notice notice-success",
            Level::Error => "notice notice-error",
        }
    }

    fn encode(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .append_pair("level", self.level.as_str())
            .append_pair("title", &self.title)
            .append_pair("description", &self.description)
            .finish()
    }

    fn decode(value: &str) -> Option<Self> {
        let mut level = None;
        let mut title = None;
        let mut description = String::new();

        for (key, value) in url::form_urlencoded::parse(value.as_bytes()) {
            match key.as_ref() {
                "level" => {
                    level = match value.as_ref() {
                        "success" => Some(Level::Success),
                        "error" => Some(Level::Error),
                        _ => None,
                    }
                }
                "title" => title = Some(value.into_owned()),
                "description" => description = value.into_owned(),
                _ => {}
            }
        }

        Some(Self {
            level: level?,
            title: title?,
            description,
        })
    }
}

fn flash_cookie(value: String) -> Cookie<'static> {
    Cookie::build((FLASH_COOKIE, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

/// Stores `notification` for the next rendered page.
pub fn push(jar: CookieJar, notification: Notification) -> CookieJar {
    jar.add(flash_cookie(notification.encode()))
}

/// Takes the pending notification, if any, and clears the cookie.
///
/// A malformed cookie is dropped silently.
pub fn take(jar: CookieJar) -> (CookieJar, Option<Notification>) {
    let Some(value) = jar.get(FLASH_COOKIE).map(|c| c.value().to_string()) else {
        return (jar, None);
    };

    let jar = jar.remove(Cookie::build(FLASH_COOKIE).path("/"));
    (jar, Notification::decode(&value))
}

//! Side navigation and the page shell shared by every template.

use crate::web::flash::Notification;

/// Destinations of the side navigation, in display order.
pub const NAV_ITEMS: [(&str, &str); 3] = [
    ("Dashboard", "/"),
    ("Subscribers", "/subscribers"),
    ("Newsletters", "/newsletters"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
    pub active: bool,
}

/// `/` is active only on an exact match, every other item on a path prefix.
pub fn is_active(href: &str, current_path: &str) -> bool {
    if href == "/" {
        return current_path == "/";
    }
    current_path == href
        || current_path
            .strip_prefix(href)
            .is_some_and(|rest| rest.starts_with('/'))
}

pub fn nav_items(current_path: &str) -> Vec<NavItem> {
    NAV_ITEMS
        .iter()
        .map(|&(label, href)| NavItem {
            label,
            href,
            active: is_active(href, current_path),
        })
        .collect()
}

/// Layout data consumed by `base.html`.
#[derive(Debug, Clone)]
pub struct Shell {
    pub nav: Vec<NavItem>,
    pub notification: Option<Notification>,
}

impl Shell {
    pub fn new(current_path: &str, notification: Option<Notification>) -> Self {
        Self {
            nav: nav_items(current_path),
            notification,
        }
    }
}

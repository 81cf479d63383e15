//! Display-ready rows and controls for the templates.

use crate::application::filters::Period;
use crate::application::list_view::PageState;
use crate::domain::entities::{Newsletter, NewsletterStatus, NewsletterType, Subscriber};
use chrono::{DateTime, Utc};

/// `Mar 05, 2024`, or `-` when the backend sent no date.
pub fn format_date(value: Option<DateTime<Utc>>) -> String {
    value
        .map(|at| at.format("%b %d, %Y").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Groups thousands with commas: `1250` becomes `1,250`.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    out
}

#[derive(Debug, Clone)]
pub struct NewsletterRow {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub kind: String,
    pub badge: &'static str,
    pub badge_class: &'static str,
    pub author: String,
    pub created: String,
    pub views: u64,
    pub image: Option<String>,
    pub edit_href: String,
    pub delete_href: String,
}

/// `/newsletters/{id}` with the id percent-encoded as one path segment.
pub fn newsletter_path(id: &str) -> String {
    format!("/newsletters/{}", urlencoding::encode(id))
}

impl NewsletterRow {
    /// Points the row's edit and delete actions back at the list state
    /// described by `list_query`, so a mutation returns to the same page and
    /// filters.
    pub fn returning_to(mut self, list_query: &str) -> Self {
        if !list_query.is_empty() {
            self.edit_href = format!("{}?{list_query}", self.edit_href);
            self.delete_href = format!("{}&{list_query}", self.delete_href);
        }
        self
    }
}

impl From<&Newsletter> for NewsletterRow {
    fn from(newsletter: &Newsletter) -> Self {
        let path = newsletter_path(&newsletter.id);
        let title_param =
            url::form_urlencoded::byte_serialize(newsletter.title.as_bytes()).collect::<String>();

        Self {
            edit_href: format!("{path}/edit"),
            delete_href: format!("{path}/delete?title={title_param}"),
            id: newsletter.id.clone(),
            title: newsletter.title.clone(),
            subtitle: newsletter.subtitle.clone().unwrap_or_default(),
            kind: newsletter.kind.label().to_string(),
            badge: newsletter.status.badge(),
            badge_class: newsletter.status.badge_class(),
            author: newsletter.author.clone().unwrap_or_default(),
            created: format_date(newsletter.created_at),
            views: newsletter.views,
            image: newsletter.featured_image.clone().filter(|url| !url.is_empty()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SubscriberRow {
    pub initials: String,
    pub name: String,
    pub email: String,
    pub status: &'static str,
    pub status_class: &'static str,
    pub subscribed: String,
}

impl From<&Subscriber> for SubscriberRow {
    fn from(subscriber: &Subscriber) -> Self {
        let (status, status_class) = if subscriber.is_active {
            ("Active", "badge-success")
        } else {
            ("Inactive", "badge-secondary")
        };

        Self {
            initials: subscriber.initials(),
            name: subscriber.full_name(),
            email: subscriber.email.clone(),
            status,
            status_class,
            subscribed: format_date(subscriber.subscribed_at),
        }
    }
}

/// `Previous` / `Page X of Y` / `Next` controls. A missing href renders the
/// button disabled.
#[derive(Debug, Clone)]
pub struct Pager {
    pub page: u32,
    pub total_pages: u32,
    pub previous_href: Option<String>,
    pub next_href: Option<String>,
}

impl Pager {
    /// `href` maps a page number to the link of that page.
    pub fn new(state: PageState, href: impl Fn(u32) -> String) -> Self {
        Self {
            page: state.page(),
            total_pages: state.total_pages(),
            previous_href: state.previous_page().map(&href),
            next_href: state.next_page().map(&href),
        }
    }
}

/// One `<option>` of a select box.
#[derive(Debug, Clone)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

impl SelectOption {
    fn new(value: &str, label: &str, current: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
            selected: value.eq_ignore_ascii_case(current),
        }
    }
}

fn with_all(all_label: &str, current: &str, rest: Vec<SelectOption>) -> Vec<SelectOption> {
    let current = if current.is_empty() { "all" } else { current };
    let mut options = vec![SelectOption::new("all", all_label, current)];
    options.extend(rest.into_iter().map(|mut option| {
        option.selected = option.value.eq_ignore_ascii_case(current);
        option
    }));
    options
}

pub fn status_options(current: &str) -> Vec<SelectOption> {
    NewsletterStatus::SELECTABLE
        .iter()
        .map(|status| SelectOption::new(status.as_str(), status.label(), current))
        .collect()
}

pub fn type_options(current: &str) -> Vec<SelectOption> {
    let mut options: Vec<_> = NewsletterType::SELECTABLE
        .iter()
        .map(|kind| SelectOption::new(kind.as_str(), kind.label(), current))
        .collect();

    // An edited record may carry a type outside the selectable set.
    let known = current.is_empty() || options.iter().any(|o| o.selected);
    if !known {
        options.push(SelectOption::new(current, current, current));
    }
    options
}

pub fn status_filter_options(current: &str) -> Vec<SelectOption> {
    with_all("All Status", current, status_options(""))
}

pub fn type_filter_options(current: &str) -> Vec<SelectOption> {
    with_all("All Types", current, type_options(""))
}

pub fn period_filter_options(current: Period) -> Vec<SelectOption> {
    Period::OPTIONS
        .iter()
        .map(|(period, label)| SelectOption::new(period.as_str(), label, current.as_str()))
        .collect()
}

pub fn subscriber_status_options(current: &str) -> Vec<SelectOption> {
    vec![
        SelectOption::new("active", "Active", current),
        SelectOption::new("inactive", "Inactive", current),
    ]
}

pub fn subscriber_filter_options(current: &str) -> Vec<SelectOption> {
    with_all("All Status", current, subscriber_status_options(""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_date() {
        let at = Utc.with_ymd_and_hms(2024, 3, 5, 10, 0, 0).unwrap();
        assert_eq!(format_date(Some(at)), "Mar 05, 2024");
        assert_eq!(format_date(None), "-");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1250), "1,250");
        assert_eq!(format_count(1_000_000), "1,000,000");
    }

    #[test]
    fn test_pager_disables_edges() {
        let pager = Pager::new(PageState::new(1, 1), |p| format!("?page={p}"));
        assert!(pager.previous_href.is_none());
        assert!(pager.next_href.is_none());

        let pager = Pager::new(PageState::new(2, 3), |p| format!("?page={p}"));
        assert_eq!(pager.previous_href.as_deref(), Some("?page=1"));
        assert_eq!(pager.next_href.as_deref(), Some("?page=3"));
    }

    #[test]
    fn test_row_links_are_encoded() {
        let newsletter = Newsletter::new("a b/1", "Q&A");
        let row = NewsletterRow::from(&newsletter);
        assert_eq!(row.edit_href, "/newsletters/a%20b%2F1/edit");
        assert_eq!(row.delete_href, "/newsletters/a%20b%2F1/delete?title=Q%26A");
    }

    #[test]
    fn test_row_links_keep_list_state() {
        let newsletter = Newsletter::new("n1", "Spring Gala");
        let row = NewsletterRow::from(&newsletter).returning_to("page=3&status=draft");
        assert_eq!(row.edit_href, "/newsletters/n1/edit?page=3&status=draft");
        assert_eq!(
            row.delete_href,
            "/newsletters/n1/delete?title=Spring+Gala&page=3&status=draft"
        );

        let row = NewsletterRow::from(&newsletter).returning_to("");
        assert_eq!(row.edit_href, "/newsletters/n1/edit");
    }

    #[test]
    fn test_filter_options_default_to_all() {
        let options = status_filter_options("");
        assert_eq!(options[0].value, "all");
        assert!(options[0].selected);
        assert_eq!(options.iter().filter(|o| o.selected).count(), 1);

        let options = type_filter_options("press");
        assert!(!options[0].selected);
        assert!(options.iter().any(|o| o.value == "press" && o.selected));
    }

    #[test]
    fn test_unknown_type_is_kept_as_option() {
        let options = type_options("Podcast");
        let last = options.last().unwrap();
        assert_eq!(last.value, "Podcast");
        assert!(last.selected);
    }
}

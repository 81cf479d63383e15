//! HTML template rendering handlers for the web dashboard.

mod dashboard;
mod login;
mod newsletters;
mod not_found;
mod subscribers;

pub use dashboard::dashboard_handler;
pub use login::{login_handler, login_submit_handler, logout_handler};
pub use newsletters::{
    confirm_delete_handler, create_newsletter_handler, delete_newsletter_handler,
    edit_newsletter_handler, new_newsletter_handler, newsletters_handler,
    newsletters_table_handler, update_newsletter_handler,
};
pub use not_found::not_found_handler;
pub use subscribers::{
    create_subscriber_handler, new_subscriber_handler, subscribers_handler,
    subscribers_table_handler,
};

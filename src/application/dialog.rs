//! State machine behind every create/edit form.
//!
//! ```text
//! Closed -> Open(empty | prefilled) -> Submitting -> Closed
//!                                                 \-> Open + error
//! ```
//!
//! A form POST enters at `Open` with the submitted fields, moves to
//! `Submitting` and runs the action exactly once. Success closes the dialog,
//! which drops the form; failure reopens it with the user's edits intact.

use crate::error::AppError;
use std::future::Future;

/// How the form of an open dialog was first populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormOrigin {
    Empty,
    Prefilled,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DialogState<F> {
    Closed,
    Open {
        form: F,
        origin: FormOrigin,
        error: Option<String>,
    },
    Submitting {
        form: F,
        origin: FormOrigin,
    },
}

impl<F: Default> DialogState<F> {
    /// Opens the dialog with a default form.
    pub fn open_empty() -> Self {
        Self::Open {
            form: F::default(),
            origin: FormOrigin::Empty,
            error: None,
        }
    }
}

impl<F> DialogState<F> {
    /// Opens the dialog with a form built from an existing record.
    pub fn open_prefilled(form: F) -> Self {
        Self::Open {
            form,
            origin: FormOrigin::Prefilled,
            error: None,
        }
    }

    /// Re-enters an open dialog with fields the user submitted.
    pub fn reopen(form: F, origin: FormOrigin) -> Self {
        Self::Open {
            form,
            origin,
            error: None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, Self::Closed)
    }

    pub fn form(&self) -> Option<&F> {
        match self {
            Self::Open { form, .. } | Self::Submitting { form, .. } => Some(form),
            Self::Closed => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Open { error, .. } => error.as_deref(),
            _ => None,
        }
    }

    /// Moves an open dialog to `Submitting`. Any other state is unchanged.
    pub fn submit(self) -> Self {
        match self {
            Self::Open { form, origin, .. } => Self::Submitting { form, origin },
            other => other,
        }
    }

    /// Closes the dialog and discards the form.
    pub fn close(self) -> Self {
        Self::Closed
    }
}

impl<F: Clone> DialogState<F> {
    /// Runs `action` once for a submitting dialog and resolves the outcome.
    ///
    /// Returns the next state together with the action's value on success.
    /// A dialog that is not submitting is returned unchanged and `action` is
    /// never called.
    pub async fn run<T, Fut>(self, action: impl FnOnce(F) -> Fut) -> (Self, Option<T>)
    where
        Fut: Future<Output = Result<T, AppError>>,
    {
        let Self::Submitting { form, origin } = self else {
            return (self, None);
        };

        match action(form.clone()).await {
            Ok(value) => (Self::Closed, Some(value)),
            Err(err) => (
                Self::Open {
                    form,
                    origin,
                    error: Some(err.user_message()),
                },
                None,
            ),
        }
    }
}

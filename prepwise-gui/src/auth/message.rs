use crate::services::identity::IdentityError;

use super::schema::{Field, Mode};

/// Navigation target issued by the auth surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    SignIn,
    SignUp,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::SignIn => "/sign-in",
            Route::SignUp => "/sign-up",
        }
    }

    pub fn mode(&self) -> Mode {
        match self {
            Route::SignIn => Mode::SignIn,
            Route::SignUp => Mode::SignUp,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub enum Message {
    View(ViewMessage),
    /// Result of the submission capability, tagged with the attempt it
    /// belongs to.
    Submitted(u64, Result<(), IdentityError>),
    // The following variants are emitted by the panel and handled by the
    // embedding GUI, never by the panel itself.
    Notify(NoticeKind, String),
    Navigate(Route),
    SessionOpened(String),
}

#[derive(Debug, Clone)]
pub enum ViewMessage {
    FieldEdited(Field, String),
    Submit,
    GoTo(Route),
}

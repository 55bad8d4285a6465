//! Application Context
//!
//! Navigation and notice signals provided via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Which screen fills the main area
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Login,
    Register,
    Dashboard,
    Projects,
    /// Detail view for the project with this id
    Project(i64),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Transient feedback banner. The id tells the auto-dismiss timer
/// whether its notice is still the one on screen.
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    pub id: u32,
}

/// How long a notice stays up before it clears itself
const NOTICE_MILLIS: u32 = 4_000;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current screen - read
    pub screen: ReadSignal<Screen>,
    /// Current screen - write
    set_screen: WriteSignal<Screen>,
    /// Screen to return to after login - read
    pub pending_screen: ReadSignal<Option<Screen>>,
    /// Screen to return to after login - write
    set_pending_screen: WriteSignal<Option<Screen>>,
    /// Notice currently shown - read
    pub notice: ReadSignal<Option<Notice>>,
    /// Notice currently shown - write
    set_notice: WriteSignal<Option<Notice>>,
}

impl AppContext {
    pub fn new(
        screen: (ReadSignal<Screen>, WriteSignal<Screen>),
        pending_screen: (ReadSignal<Option<Screen>>, WriteSignal<Option<Screen>>),
        notice: (ReadSignal<Option<Notice>>, WriteSignal<Option<Notice>>),
    ) -> Self {
        Self {
            screen: screen.0,
            set_screen: screen.1,
            pending_screen: pending_screen.0,
            set_pending_screen: pending_screen.1,
            notice: notice.0,
            set_notice: notice.1,
        }
    }

    /// Switch to a screen
    pub fn goto(&self, screen: Screen) {
        self.set_screen.set(screen);
    }

    /// Remember where an unauthenticated visitor wanted to go, then
    /// send them to the login screen
    pub fn defer_until_login(&self, wants: Screen) {
        self.set_pending_screen.set(Some(wants));
        self.set_screen.set(Screen::Login);
    }

    /// Continue to the deferred screen, or the dashboard if there is none
    pub fn resume_after_login(&self) {
        let next = self
            .pending_screen
            .get_untracked()
            .unwrap_or(Screen::Dashboard);
        self.set_pending_screen.set(None);
        self.set_screen.set(next);
    }

    pub fn success(&self, text: impl Into<String>) {
        self.publish(NoticeKind::Success, text.into());
    }

    pub fn error(&self, text: impl Into<String>) {
        self.publish(NoticeKind::Error, text.into());
    }

    pub fn dismiss_notice(&self) {
        self.set_notice.set(None);
    }

    /// Show a notice and schedule its removal. A newer notice takes the
    /// slot over, and the older timer leaves it alone when it fires.
    fn publish(&self, kind: NoticeKind, text: String) {
        let id = self
            .notice
            .get_untracked()
            .map(|n| n.id.wrapping_add(1))
            .unwrap_or(1);
        self.set_notice.set(Some(Notice { kind, text, id }));

        let ctx = *self;
        spawn_local(async move {
            TimeoutFuture::new(NOTICE_MILLIS).await;
            let still_current = ctx
                .notice
                .get_untracked()
                .map(|n| n.id == id)
                .unwrap_or(false);
            if still_current {
                ctx.set_notice.set(None);
            }
        });
    }
}

//! Application Context
//!
//! Shared signals provided via Leptos Context API: the list reload trigger
//! and the notification banner.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

impl NoticeKind {
    pub fn css_class(self) -> &'static str {
        match self {
            NoticeKind::Success => "notice notice-success",
            NoticeKind::Error => "notice notice-error",
            NoticeKind::Info => "notice notice-info",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
    /// Increments per notice so stale timers leave newer ones alone
    pub generation: u64,
}

/// Whether a timer started for `generation` may still clear the banner
pub fn is_current(shown: Option<&Notice>, generation: u64) -> bool {
    shown.is_some_and(|n| n.generation == generation)
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Bumped after a mutation so lists refetch - read
    pub reload_trigger: ReadSignal<u32>,
    set_reload_trigger: WriteSignal<u32>,
    /// Banner content - read
    pub notice: ReadSignal<Option<Notice>>,
    set_notice: WriteSignal<Option<Notice>>,
    notice_seq: StoredValue<u64>,
    notice_timeout_ms: u32,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        notice: (ReadSignal<Option<Notice>>, WriteSignal<Option<Notice>>),
        notice_timeout_ms: u32,
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            notice: notice.0,
            set_notice: notice.1,
            notice_seq: StoredValue::new(0),
            notice_timeout_ms,
        }
    }

    /// Refetch anything keyed on `reload_trigger`
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn success(&self, text: impl Into<String>) {
        self.notify(NoticeKind::Success, text.into());
    }

    pub fn error(&self, text: impl Into<String>) {
        self.notify(NoticeKind::Error, text.into());
    }

    pub fn info(&self, text: impl Into<String>) {
        self.notify(NoticeKind::Info, text.into());
    }

    pub fn dismiss(&self) {
        self.set_notice.set(None);
    }

    fn notify(&self, kind: NoticeKind, text: String) {
        match kind {
            NoticeKind::Error => log::warn!("[NOTICE] {}", text),
            _ => log::info!("[NOTICE] {}", text),
        }

        self.notice_seq.update_value(|n| *n += 1);
        let generation = self.notice_seq.get_value();
        self.set_notice.set(Some(Notice { text, kind, generation }));

        let notice = self.notice;
        let set_notice = self.set_notice;
        let delay = self.notice_timeout_ms;
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            let current = notice.try_get_untracked().flatten();
            if is_current(current.as_ref(), generation) {
                set_notice.set(None);
            }
        });
    }
}

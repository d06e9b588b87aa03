/// Transient notices (toasts) raised by the review panel.
use leptos::*;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeVariant {
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub variant: NoticeVariant,
}

impl Notice {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(title, description, NoticeVariant::Default)
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(title, description, NoticeVariant::Destructive)
    }

    fn new(title: impl Into<String>, description: impl Into<String>, variant: NoticeVariant) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            variant,
        }
    }
}

/// Handle to the notice queue, shared through the Leptos context.
#[derive(Debug, Clone, Copy)]
pub struct Notices {
    queue: RwSignal<Vec<Notice>>,
}

impl Notices {
    pub fn new() -> Self {
        Self {
            queue: create_rw_signal(Vec::new()),
        }
    }

    /// Shows `notice` and schedules its removal.
    pub fn push(&self, notice: Notice) {
        #[cfg(target_arch = "wasm32")]
        let id = notice.id;
        if self.queue.try_update(|queue| queue.push(notice)).is_none() {
            return;
        }
        // Browser timers only; server renders and native tests keep the notice.
        #[cfg(target_arch = "wasm32")]
        {
            use crate::config::NOTICE_LIFETIME;
            use gloo_timers::callback::Timeout;

            let notices = *self;
            Timeout::new(NOTICE_LIFETIME.as_millis() as u32, move || notices.dismiss(id)).forget();
        }
    }

    pub fn dismiss(&self, id: Uuid) {
        let _ = self.queue.try_update(|queue| queue.retain(|n| n.id != id));
    }

    pub fn current(&self) -> Vec<Notice> {
        self.queue.get()
    }
}

impl Default for Notices {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns the notice queue from context, creating one if no ancestor provided it.
pub fn use_notices() -> Notices {
    use_context::<Notices>().unwrap_or_else(|| {
        let notices = Notices::new();
        provide_context(notices);
        notices
    })
}

#[component]
pub fn NoticeBoard() -> impl IntoView {
    let notices = use_notices();

    view! {
        <div class="notice-board" aria-live="polite">
            {move || notices.current().into_iter().map(|notice| {
                let id = notice.id;
                let class = match notice.variant {
                    NoticeVariant::Default => "notice",
                    NoticeVariant::Destructive => "notice notice--destructive",
                };
                view! {
                    <div class=class role="status" on:click=move |_| notices.dismiss(id)>
                        <strong class="notice__title">{ notice.title }</strong>
                        <p class="notice__description">{ notice.description }</p>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

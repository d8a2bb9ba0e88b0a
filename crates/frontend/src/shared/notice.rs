use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// How long a notice stays on screen
const AUTO_CLOSE_MS: u32 = 3_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

impl NoticeLevel {
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Info => "notice notice--info",
            Self::Warning => "notice notice--warning",
            Self::Error => "notice notice--error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct NoticeEntry {
    id: u64,
    level: NoticeLevel,
    message: String,
}

/// Transient toast notices shown in the top-right corner.
///
/// Provide once at the app root, read with `use_context::<NoticeService>()`.
#[derive(Clone, Copy)]
pub struct NoticeService {
    entries: RwSignal<Vec<NoticeEntry>>,
    next_id: RwSignal<u64>,
}

impl NoticeService {
    pub fn new() -> Self {
        Self {
            entries: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    pub fn push(&self, level: NoticeLevel, message: impl Into<String>) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        self.entries.update(|e| {
            e.push(NoticeEntry {
                id,
                level,
                message: message.into(),
            })
        });

        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(AUTO_CLOSE_MS).await;
            svc.dismiss(id);
        });
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(NoticeLevel::Info, message);
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.push(NoticeLevel::Warning, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(NoticeLevel::Error, message);
    }

    pub fn dismiss(&self, id: u64) {
        self.entries.update(|e| e.retain(|n| n.id != id));
    }
}

impl Default for NoticeService {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders active notices. Must be mounted exactly once.
#[component]
pub fn NoticeHost() -> impl IntoView {
    let svc = use_context::<NoticeService>()
        .expect("NoticeService not provided in context (provide it in app root)");

    view! {
        <div class="notice-host">
            <For
                each=move || svc.entries.get()
                key=|entry| entry.id
                children=move |entry: NoticeEntry| {
                    let id = entry.id;
                    view! {
                        <div class={entry.level.css_class()} on:click=move |_| svc.dismiss(id)>
                            {entry.message}
                        </div>
                    }
                }
            />
        </div>
    }
}

use dioxus::prelude::*;

use ride_client::notify::{Notice, NoticeLevel, Notifier};

/// How long a toast stays on screen.
#[allow(dead_code)] // used in WASM builds
const TOAST_TTL_MS: u32 = 4_000;

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

/// Handle to the toast stack. Cheap to copy into event handlers and tasks.
#[derive(Clone, Copy)]
pub struct Toaster {
    toasts: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            toasts: Signal::new(Vec::new()),
            next_id: Signal::new(0),
        }
    }

    pub fn dismiss(&self, id: u64) {
        let mut toasts = self.toasts;
        toasts.write().retain(|t| t.id != id);
    }
}

impl Notifier for Toaster {
    fn notify(&self, notice: Notice) {
        let mut next_id = self.next_id;
        let mut toasts = self.toasts;
        let id = {
            let mut n = next_id.write();
            *n += 1;
            *n
        };
        match notice.level {
            NoticeLevel::Success => tracing::info!("{}", notice.text),
            NoticeLevel::Error => tracing::warn!("{}", notice.text),
        }
        toasts.write().push(Toast { id, notice });
    }
}

pub fn use_toaster() -> Toaster {
    use_context::<Toaster>()
}

/// Renders the current toasts, newest last.
#[component]
pub fn ToastHost() -> Element {
    let toaster = use_toaster();
    let toasts = toaster.toasts.read().clone();

    rsx! {
        div { class: "toast-stack",
            for toast in toasts {
                ToastItem { key: "{toast.id}", toast: toast.clone() }
            }
        }
    }
}

#[component]
fn ToastItem(toast: Toast) -> Element {
    let toaster = use_toaster();
    let id = toast.id;

    // Auto-dismiss; the task dies with this item if it is closed first.
    use_effect(move || {
        spawn(async move {
            #[cfg(target_family = "wasm")]
            {
                gloo_timers::future::TimeoutFuture::new(TOAST_TTL_MS).await;
                toaster.dismiss(id);
            }
        });
    });

    let class = match toast.notice.level {
        NoticeLevel::Success => "toast toast-success",
        NoticeLevel::Error => "toast toast-error",
    };

    rsx! {
        div { class: "{class}",
            onclick: move |_| toaster.dismiss(id),
            "{toast.notice.text}"
        }
    }
}

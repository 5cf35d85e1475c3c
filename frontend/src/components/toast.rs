use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl Toast {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Default,
        }
    }

    pub fn destructive(mut self) -> Self {
        self.variant = ToastVariant::Destructive;
        self
    }

    pub fn check_form() -> Self {
        Self::new(
            "Please check your form",
            "Some required fields are missing or invalid.",
        )
    }

    pub fn message_sent() -> Self {
        Self::new(
            "Message sent!",
            "Thanks for reaching out. We'll get back to you within 24 hours.",
        )
    }

    pub fn inquiry_sent(package_name: &str) -> Self {
        Self::new(
            "Inquiry sent!",
            format!("We'll be in touch shortly about the {}.", package_name),
        )
    }

    pub fn send_failed() -> Self {
        Self::new(
            "Something went wrong",
            "Please try again or contact us directly via WhatsApp or phone.",
        )
        .destructive()
    }
}

pub enum ToastAction {
    Push(Toast),
    Dismiss(u32),
}

/// Visible toasts, newest first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    next_id: u32,
    toasts: Vec<(u32, Toast)>,
}

impl ToastQueue {
    pub fn push(&mut self, toast: Toast) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.toasts.insert(0, (id, toast));
        self.toasts.truncate(config::TOAST_LIMIT);
        id
    }

    pub fn dismiss(&mut self, id: u32) {
        self.toasts.retain(|(toast_id, _)| *toast_id != id);
    }

    pub fn visible(&self) -> &[(u32, Toast)] {
        &self.toasts
    }
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut queue = (*self).clone();
        match action {
            ToastAction::Push(toast) => {
                queue.push(toast);
            }
            ToastAction::Dismiss(id) => queue.dismiss(id),
        }
        Rc::new(queue)
    }
}

pub type ToastContext = UseReducerHandle<ToastQueue>;

/// Callback that queues a toast. Outside a provider it only logs.
#[hook]
pub fn use_toast() -> Callback<Toast> {
    let queue = use_context::<ToastContext>();
    Callback::from(move |toast: Toast| match &queue {
        Some(queue) => queue.dispatch(ToastAction::Push(toast)),
        None => log::warn!("Toast without provider: {}", toast.title),
    })
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let queue = use_reducer(ToastQueue::default);

    html! {
        <ContextProvider<ToastContext> context={queue.clone()}>
            { for props.children.iter() }
            <Toaster />
        </ContextProvider<ToastContext>>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    id: u32,
    toast: Toast,
    on_dismiss: Callback<u32>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |id| {
                let id = *id;
                let timeout = Timeout::new(config::TOAST_DURATION_MS, move || on_dismiss.emit(id));
                // Dropping the timeout cancels it if the toast is closed first
                move || drop(timeout)
            },
            props.id,
        );
    }

    let close = {
        let on_dismiss = props.on_dismiss.clone();
        let id = props.id;
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    let class = match props.toast.variant {
        ToastVariant::Default => "toast",
        ToastVariant::Destructive => "toast destructive",
    };

    html! {
        <div class={class} role="status">
            <div class="toast-body">
                <div class="toast-title">{&props.toast.title}</div>
                <div class="toast-description">{&props.toast.description}</div>
            </div>
            <button class="toast-close" aria-label="Close" onclick={close}>{"✕"}</button>
        </div>
    }
}

#[function_component(Toaster)]
fn toaster() -> Html {
    let queue = use_context::<ToastContext>();
    let Some(queue) = queue else {
        return html! {};
    };

    let on_dismiss = {
        let queue = queue.clone();
        Callback::from(move |id: u32| queue.dispatch(ToastAction::Dismiss(id)))
    };

    html! {
        <div class="toast-viewport">
            <style>
                {r#"
                .toast-viewport {
                    position: fixed;
                    bottom: 1.5rem;
                    right: 1.5rem;
                    z-index: 100;
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                    max-width: 380px;
                    width: calc(100% - 3rem);
                }
                .toast {
                    display: flex;
                    align-items: flex-start;
                    gap: 1rem;
                    padding: 1rem 1.25rem;
                    background: #ffffff;
                    color: #111827;
                    border: 1px solid #e5e7eb;
                    border-radius: 12px;
                    box-shadow: 0 12px 32px rgba(17, 24, 39, 0.15);
                    animation: toastIn 0.3s ease-out;
                }
                .toast.destructive {
                    background: #dc2626;
                    border-color: #b91c1c;
                    color: #ffffff;
                }
                .toast-body { flex: 1; }
                .toast-title { font-weight: 600; margin-bottom: 0.25rem; }
                .toast-description { font-size: 0.9rem; opacity: 0.9; }
                .toast-close {
                    background: none;
                    border: none;
                    color: inherit;
                    cursor: pointer;
                    opacity: 0.6;
                }
                .toast-close:hover { opacity: 1; }
                @keyframes toastIn {
                    from { transform: translateY(100%); opacity: 0; }
                    to { transform: translateY(0); opacity: 1; }
                }
                "#}
            </style>
            { for queue.visible().iter().map(|(id, toast)| html! {
                <ToastItem key={*id} id={*id} toast={toast.clone()} on_dismiss={on_dismiss.clone()} />
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_toast_replaces_older_ones() {
        let mut queue = ToastQueue::default();
        let first = queue.push(Toast::check_form());
        let second = queue.push(Toast::message_sent());

        assert_ne!(first, second);
        assert_eq!(queue.visible().len(), config::TOAST_LIMIT);
        assert_eq!(queue.visible()[0], (second, Toast::message_sent()));
    }

    #[test]
    fn dismiss_removes_only_the_matching_toast() {
        let mut queue = ToastQueue::default();
        let id = queue.push(Toast::send_failed());
        queue.dismiss(id + 7);
        assert_eq!(queue.visible().len(), 1);
        queue.dismiss(id);
        assert!(queue.visible().is_empty());
    }

    #[test]
    fn reducer_applies_actions() {
        let queue = Rc::new(ToastQueue::default());
        let queue = queue.reduce(ToastAction::Push(Toast::check_form()));
        let id = queue.visible()[0].0;
        let queue = queue.reduce(ToastAction::Dismiss(id));
        assert!(queue.visible().is_empty());
    }

    #[test]
    fn failure_toast_is_destructive() {
        assert_eq!(Toast::send_failed().variant, ToastVariant::Destructive);
        assert_eq!(Toast::message_sent().variant, ToastVariant::Default);
        assert_eq!(Toast::check_form().variant, ToastVariant::Default);
    }
}

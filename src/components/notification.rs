use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::{TOAST_DURATION_MS, TOAST_LIMIT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub kind: ToastKind,
    pub title: String,
    pub description: String,
    pub duration_ms: u32,
}

impl Toast {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            title: title.into(),
            description: description.into(),
            duration_ms: TOAST_DURATION_MS,
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            ..Self::success(title, description)
        }
    }
}

pub enum ToastAction {
    Push(u32, Toast),
    Dismiss(u32),
}

/// Visible toasts, newest first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToastQueue {
    pub toasts: Vec<(u32, Toast)>,
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut toasts = self.toasts.clone();
        match action {
            ToastAction::Push(id, toast) => {
                toasts.insert(0, (id, toast));
                toasts.truncate(TOAST_LIMIT);
            }
            ToastAction::Dismiss(id) => {
                let before = toasts.len();
                toasts.retain(|(toast_id, _)| *toast_id != id);
                if toasts.len() == before {
                    return self;
                }
            }
        }
        Rc::new(Self { toasts })
    }
}

/// Handed out through context; emitting shows a toast.
pub type Notifier = Callback<Toast>;

#[hook]
pub fn use_notifier() -> Notifier {
    use_context::<Notifier>().unwrap_or_else(|| {
        Callback::from(|toast: Toast| log::warn!("No toast provider for '{}'", toast.title))
    })
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let queue = use_reducer(ToastQueue::default);
    let next_id = use_mut_ref(|| 0u32);

    let notifier = {
        let dispatcher = queue.dispatcher();
        let notifier = use_memo(
            move |_| {
                Callback::from(move |toast: Toast| {
                    let id = {
                        let mut next = next_id.borrow_mut();
                        *next = next.wrapping_add(1);
                        *next
                    };
                    let duration = toast.duration_ms;
                    dispatcher.dispatch(ToastAction::Push(id, toast));

                    let dispatcher = dispatcher.clone();
                    Timeout::new(duration, move || {
                        dispatcher.dispatch(ToastAction::Dismiss(id));
                    })
                    .forget();
                })
            },
            (),
        );
        (*notifier).clone()
    };

    html! {
        <ContextProvider<Notifier> context={notifier}>
            { props.children.clone() }
            <div class="toast-viewport">
                { for queue.toasts.iter().map(|(id, toast)| {
                    let id = *id;
                    let dismiss = {
                        let dispatcher = queue.dispatcher();
                        Callback::from(move |_: MouseEvent| dispatcher.dispatch(ToastAction::Dismiss(id)))
                    };
                    let kind_class = match toast.kind {
                        ToastKind::Success => "toast-success",
                        ToastKind::Error => "toast-destructive",
                    };
                    html! {
                        <div key={id} class={classes!("toast", kind_class)} role="status">
                            <div class="toast-body">
                                <div class="toast-title">{ &toast.title }</div>
                                <div class="toast-description">{ &toast.description }</div>
                            </div>
                            <button class="toast-close" onclick={dismiss} aria-label="Close">{ "✕" }</button>
                        </div>
                    }
                }) }
            </div>
        </ContextProvider<Notifier>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push(queue: Rc<ToastQueue>, id: u32) -> Rc<ToastQueue> {
        queue.reduce(ToastAction::Push(id, Toast::success("t", "d")))
    }

    #[test]
    fn newest_toast_comes_first() {
        let queue = push(push(Rc::new(ToastQueue::default()), 1), 2);
        let ids: Vec<u32> = queue.toasts.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn queue_is_capped() {
        let mut queue = Rc::new(ToastQueue::default());
        for id in 0..(TOAST_LIMIT as u32 + 2) {
            queue = push(queue, id);
        }
        assert_eq!(queue.toasts.len(), TOAST_LIMIT);
        assert_eq!(queue.toasts[0].0, TOAST_LIMIT as u32 + 1);
    }

    #[test]
    fn dismiss_removes_only_that_toast() {
        let queue = push(push(Rc::new(ToastQueue::default()), 1), 2);
        let queue = queue.reduce(ToastAction::Dismiss(1));
        assert_eq!(queue.toasts.len(), 1);
        assert_eq!(queue.toasts[0].0, 2);
    }

    #[test]
    fn dismissing_unknown_id_keeps_the_same_state() {
        let queue = push(Rc::new(ToastQueue::default()), 1);
        let after = Rc::clone(&queue).reduce(ToastAction::Dismiss(42));
        assert!(Rc::ptr_eq(&queue, &after));
    }

    #[test]
    fn error_toast_shares_the_default_duration() {
        let toast = Toast::error("Submission Failed", "try again");
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.duration_ms, TOAST_DURATION_MS);
    }
}

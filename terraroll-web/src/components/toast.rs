use std::rc::Rc;
use std::sync::atomic::{AtomicU32, Ordering};

use yew::prelude::*;

/// How long an error toast stays up before it dismisses itself.
pub const TOAST_TIMEOUT_MS: i32 = 5_000;

static TOAST_IDS: AtomicU32 = AtomicU32::new(1);

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ToastItem {
    pub id: u32,
    pub message: AttrValue,
}

impl ToastItem {
    #[must_use]
    pub fn new(message: impl Into<AttrValue>) -> Self {
        Self {
            id: TOAST_IDS.fetch_add(1, Ordering::Relaxed),
            message: message.into(),
        }
    }
}

/// Toasts currently on screen, oldest first.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct ToastList {
    pub items: Vec<ToastItem>,
}

pub enum ToastAction {
    Push(ToastItem),
    Dismiss(u32),
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut items = self.items.clone();
        match action {
            ToastAction::Push(item) => items.push(item),
            ToastAction::Dismiss(id) => {
                let before = items.len();
                items.retain(|item| item.id != id);
                if items.len() == before {
                    return self;
                }
            }
        }
        Rc::new(Self { items })
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct ToastProps {
    pub toasts: Vec<ToastItem>,
    #[prop_or_default]
    pub on_dismiss: Option<Callback<u32>>,
}

#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    html! {
        <div class="toast toast-end toast-top" role="alert" aria-live="assertive">
            { for props.toasts.iter().map(|toast| {
                let dismiss_btn = props.on_dismiss.as_ref().map(|cb| {
                    let id = toast.id;
                    let cb = cb.clone();
                    let on_click = Callback::from(move |_| cb.emit(id));
                    html! { <button class="btn btn-ghost btn-xs" aria-label="Закрыть" onclick={on_click}>{"✕"}</button> }
                }).unwrap_or_default();
                html! {
                    <div class="error-message alert alert-error flex items-center gap-2" key={toast.id}>
                        { toast.message.clone() }
                        { dismiss_btn }
                    </div>
                }
            }) }
        </div>
    }
}

use std::rc::Rc;

use devotional_shared::{Notice, Severity};
use yew::prelude::*;
use yew_hooks::prelude::use_timeout;

use crate::config::TOAST_DISMISS_MS;

/// Visible notices, oldest first.
#[derive(Default, PartialEq)]
pub struct ToastStack {
    next_id: u64,
    pub items: Vec<(u64, Notice)>,
}

pub enum ToastAction {
    Push(Notice),
    Dismiss(u64),
}

impl Reducible for ToastStack {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut items = self.items.clone();
        let mut next_id = self.next_id;
        match action {
            ToastAction::Push(notice) => {
                items.push((next_id, notice));
                next_id += 1;
            },
            ToastAction::Dismiss(id) => items.retain(|(item_id, _)| *item_id != id),
        }
        Rc::new(ToastStack {
            next_id,
            items,
        })
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub notice: Notice,
    pub on_close: Callback<()>,
}

#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    {
        let on_close = props.on_close.clone();
        let _timeout = use_timeout(move || on_close.emit(()), TOAST_DISMISS_MS);
    }
    let dismiss = props.on_close.reform(|_: MouseEvent| ());

    let (icon, tone) = match props.notice.severity {
        Severity::Success => ("✓", classes!("bg-emerald-600", "text-white")),
        Severity::Error => ("⚠️", classes!("bg-red-600", "text-white")),
    };

    html! {
        <div
            class={classes!(
                "flex",
                "items-start",
                "gap-3",
                "rounded-xl",
                "px-4",
                "py-3",
                "text-sm",
                "shadow-xl",
                "w-full",
                "max-w-sm",
                tone
            )}
            role={if props.notice.is_error() { "alert" } else { "status" }}
        >
            <span aria-hidden="true">{ icon }</span>
            <p class="flex-1">{ props.notice.message.clone() }</p>
            <button
                type="button"
                class={classes!("inline-flex", "h-6", "w-6", "items-center", "justify-center", "rounded-full", "hover:bg-white/20")}
                aria-label="Dismiss notification"
                onclick={dismiss}
            >
                {"×"}
            </button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastHostProps {
    pub stack: UseReducerHandle<ToastStack>,
}

#[function_component(ToastHost)]
pub fn toast_host(props: &ToastHostProps) -> Html {
    html! {
        <div class={classes!("fixed", "top-4", "right-4", "z-50", "flex", "flex-col", "gap-2")} aria-live="polite">
            { for props.stack.items.iter().map(|(id, notice)| {
                let id = *id;
                let on_close = {
                    let stack = props.stack.clone();
                    Callback::from(move |_| stack.dispatch(ToastAction::Dismiss(id)))
                };
                html! { <Toast key={id} notice={notice.clone()} on_close={on_close} /> }
            }) }
        </div>
    }
}

use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    /// Page buttons to draw, already clamped by the controller.
    pub window: Vec<usize>,
    pub on_page_change: Callback<i64>,
    /// Raw "go to page" text; validation happens in the controller.
    pub on_jump: Callback<String>,
}

#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    let jump_text = use_state(String::new);

    let current_page = props.current_page;
    let total_pages = props.total_pages.max(1);
    let prev_disabled = current_page <= 1;
    let next_disabled = current_page >= total_pages;

    let prev_onclick = {
        let on_page_change = props.on_page_change.clone();
        Callback::from(move |_| on_page_change.emit(current_page as i64 - 1))
    };

    let next_onclick = {
        let on_page_change = props.on_page_change.clone();
        Callback::from(move |_| on_page_change.emit(current_page as i64 + 1))
    };

    let on_jump_input = {
        let jump_text = jump_text.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                jump_text.set(target.value());
            }
        })
    };

    let on_jump_submit = {
        let jump_text = jump_text.clone();
        let on_jump = props.on_jump.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            on_jump.emit((*jump_text).clone());
            jump_text.set(String::new());
        })
    };

    let base_btn_classes = classes!(
        "inline-flex",
        "items-center",
        "justify-center",
        "min-w-[2.5rem]",
        "h-9",
        "px-3",
        "rounded-lg",
        "border",
        "border-[var(--border)]",
        "bg-[var(--surface)]",
        "text-[var(--text)]",
        "text-sm",
        "font-semibold",
        "shadow-sm",
        "transition-all",
        "duration-200",
        "hover:border-[var(--primary)]",
        "hover:text-[var(--primary)]",
        "disabled:opacity-50",
        "disabled:cursor-not-allowed"
    );

    html! {
        <div class={classes!("flex", "flex-col", "gap-4", "sm:flex-row", "sm:items-center", "sm:justify-between")}>
            <div class={classes!("flex", "flex-wrap", "items-center", "gap-4")}>
                <span class={classes!("text-sm", "text-[var(--muted)]")}>
                    { format!("Page {} of {} ({} items)", current_page, total_pages, props.total_items) }
                </span>
                <form class={classes!("flex", "items-center", "gap-2")} onsubmit={on_jump_submit}>
                    <input
                        type="text"
                        inputmode="numeric"
                        placeholder="Go to page"
                        value={(*jump_text).clone()}
                        oninput={on_jump_input}
                        class={classes!("w-28", "rounded-lg", "border", "border-[var(--border)]", "px-3", "py-1.5", "text-sm")}
                    />
                    <button type="submit" class={base_btn_classes.clone()}>{ "Go" }</button>
                </form>
            </div>
            <nav class="flex flex-wrap items-center gap-2" aria-label="Pagination">
                <button
                    type="button"
                    class={base_btn_classes.clone()}
                    disabled={prev_disabled}
                    onclick={prev_onclick}
                    aria-label="Previous page"
                >
                    {"<"}
                </button>
                { for props.window.iter().copied().map(|page| {
                    let active = page == current_page;
                    let page_classes = classes!(
                        base_btn_classes.clone(),
                        if active {
                            "bg-[var(--primary)] text-white border-transparent cursor-default"
                        } else {
                            ""
                        }
                    );
                    let onclick = {
                        let on_page_change = props.on_page_change.clone();
                        Callback::from(move |_| on_page_change.emit(page as i64))
                    };

                    html! {
                        <button
                            key={format!("page-{page}")}
                            type="button"
                            class={page_classes}
                            aria-label={format!("Go to page {page}")}
                            aria-current={if active { Some(AttrValue::from("page")) } else { None }}
                            disabled={active}
                            onclick={onclick}
                        >
                            { page }
                        </button>
                    }
                }) }
                <button
                    type="button"
                    class={base_btn_classes.clone()}
                    disabled={next_disabled}
                    onclick={next_onclick}
                    aria-label="Next page"
                >
                    {">"}
                </button>
            </nav>
        </div>
    }
}

use devotional_shared::{CategoryTab, Devotional, Notice};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::{
    api,
    components::{
        devotional_table::DevotionalTable,
        editor_modal::EditorModal,
        loading_spinner::LoadingSpinner,
        pagination::Pagination,
        toast::{ToastAction, ToastHost, ToastStack},
    },
    hooks::{
        use_debounced_search, use_devotional_collection, use_record_editor, CollectionCommand,
        EditorCommand,
    },
    utils::{confirm, log_error},
};

#[function_component(DevotionalsPage)]
pub fn devotionals_page() -> Html {
    let toasts = use_reducer(ToastStack::default);
    let notify = {
        let toasts = toasts.clone();
        Callback::from(move |notice: Notice| toasts.dispatch(ToastAction::Push(notice)))
    };

    let collection = use_devotional_collection(notify.clone());
    let refresh = collection.dispatch.reform(|_: ()| CollectionCommand::Refresh);
    let editor = use_record_editor(refresh.clone(), notify.clone());
    let (search_text, on_search) = use_debounced_search(collection.dispatch.clone());

    let list = collection.snapshot();
    let draft = editor.snapshot();

    let on_search_input = Callback::from(move |event: InputEvent| {
        if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
            on_search.emit(target.value());
        }
    });

    let on_add = editor.dispatch.reform(|_: MouseEvent| EditorCommand::OpenCreate);
    let on_edit = editor.dispatch.reform(EditorCommand::OpenEdit);
    let on_refresh = refresh.reform(|_: MouseEvent| ());

    let on_delete = {
        let notify = notify.clone();
        let refresh = refresh.clone();
        Callback::from(move |record: Devotional| {
            if !confirm("Are you sure you want to delete this devotional?") {
                return;
            }
            let notify = notify.clone();
            let refresh = refresh.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api::delete_devotional(record.category, &record.id).await {
                    Ok(()) => {
                        notify.emit(Notice::success("Devotional deleted successfully"));
                        refresh.emit(());
                    },
                    Err(err) => {
                        log_error("Error deleting devotional", &err);
                        notify.emit(Notice::error("Failed to delete devotional"));
                    },
                }
            });
        })
    };

    let on_page_change = collection.dispatch.reform(CollectionCommand::GoToPage);
    let on_jump = collection.dispatch.reform(CollectionCommand::JumpToPage);

    let tabs = html! {
        <div class={classes!("flex", "gap-2")} role="tablist">
            { for CategoryTab::TABS.into_iter().map(|tab| {
                let active = list.query.tab == tab;
                let onclick = collection
                    .dispatch
                    .reform(move |_: MouseEvent| CollectionCommand::SetCategory(tab));
                html! {
                    <button
                        type="button"
                        role="tab"
                        aria-selected={active.to_string()}
                        class={classes!(
                            "rounded-lg",
                            "px-4",
                            "py-2",
                            "text-sm",
                            "font-semibold",
                            if active {
                                "bg-[var(--primary)] text-white"
                            } else {
                                "bg-[var(--surface-alt)] text-[var(--text)]"
                            }
                        )}
                        onclick={onclick}
                    >
                        { tab.label() }
                    </button>
                }
            }) }
        </div>
    };

    html! {
        <main class={classes!("mx-auto", "max-w-6xl", "px-4", "py-8", "space-y-6")}>
            <ToastHost stack={toasts.clone()} />
            <div class={classes!("flex", "flex-wrap", "items-center", "justify-between", "gap-4")}>
                <div>
                    <h1 class={classes!("text-2xl", "font-bold")}>{ "Devotionals" }</h1>
                    <p class={classes!("text-sm", "text-[var(--muted)]")}>
                        { format!("{} devotionals", list.total_items) }
                    </p>
                </div>
                <button
                    type="button"
                    class={classes!("rounded-lg", "bg-[var(--primary)]", "px-4", "py-2", "text-sm", "font-semibold", "text-white")}
                    onclick={on_add}
                >
                    { "+ Add Devotional" }
                </button>
            </div>

            <section class={classes!("rounded-xl", "border", "border-[var(--border)]", "bg-[var(--surface)]", "p-4", "space-y-4")}>
                <div class={classes!("flex", "flex-wrap", "items-center", "justify-between", "gap-4")}>
                    { tabs }
                    <div class={classes!("flex", "items-center", "gap-2")}>
                        <input
                            type="search"
                            placeholder="Search devotionals..."
                            value={search_text}
                            oninput={on_search_input}
                            class={classes!("w-64", "rounded-lg", "border", "border-[var(--border)]", "px-3", "py-2", "text-sm")}
                        />
                        <button
                            type="button"
                            class={classes!("rounded-lg", "border", "border-[var(--border)]", "px-3", "py-2", "text-sm")}
                            disabled={list.loading}
                            onclick={on_refresh}
                        >
                            { "Refresh" }
                        </button>
                    </div>
                </div>

                if list.loading {
                    <div class={classes!("flex", "justify-center")}>
                        <LoadingSpinner />
                    </div>
                } else {
                    <DevotionalTable records={list.records.clone()} on_edit={on_edit} on_delete={on_delete} />
                }

                <Pagination
                    current_page={list.query.page}
                    total_pages={list.total_pages}
                    total_items={list.total_items}
                    window={list.window.clone()}
                    on_page_change={on_page_change}
                    on_jump={on_jump}
                />
            </section>

            <EditorModal editor={draft} dispatch={editor.dispatch.clone()} />
        </main>
    }
}

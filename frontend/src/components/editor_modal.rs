use devotional_shared::{format::date_input_value, Category, DraftField, EditorMode};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::{
    components::loading_spinner::{LoadingSpinner, SpinnerSize},
    hooks::{EditorCommand, EditorSnapshot},
};

#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
enum Section {
    #[default]
    Basic,
    Content,
    Additional,
}

impl Section {
    const ALL: [Section; 3] = [Section::Basic, Section::Content, Section::Additional];

    fn label(self) -> &'static str {
        match self {
            Section::Basic => "Basic Info",
            Section::Content => "Content",
            Section::Additional => "Additional",
        }
    }
}

fn on_text_input(dispatch: &Callback<EditorCommand>, field: DraftField) -> Callback<InputEvent> {
    let dispatch = dispatch.clone();
    Callback::from(move |event: InputEvent| {
        if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
            dispatch.emit(EditorCommand::UpdateField(field, target.value()));
        }
    })
}

fn on_textarea_input(
    dispatch: &Callback<EditorCommand>,
    field: DraftField,
) -> Callback<InputEvent> {
    let dispatch = dispatch.clone();
    Callback::from(move |event: InputEvent| {
        if let Some(target) = event.target_dyn_into::<HtmlTextAreaElement>() {
            dispatch.emit(EditorCommand::UpdateField(field, target.value()));
        }
    })
}

fn label_classes() -> Classes {
    classes!("block", "text-sm", "font-medium", "mb-1")
}

fn input_classes() -> Classes {
    classes!(
        "w-full",
        "rounded-lg",
        "border",
        "border-[var(--border)]",
        "bg-[var(--surface)]",
        "px-3",
        "py-2",
        "text-sm"
    )
}

#[derive(Properties, PartialEq)]
pub struct EditorModalProps {
    pub editor: EditorSnapshot,
    pub dispatch: Callback<EditorCommand>,
}

#[function_component(EditorModal)]
pub fn editor_modal(props: &EditorModalProps) -> Html {
    let section = use_state(Section::default);
    let new_question = use_state(String::new);

    // Every open starts on the first section with an empty question box.
    {
        let section = section.clone();
        let new_question = new_question.clone();
        use_effect_with(props.editor.mode.clone(), move |_| {
            section.set(Section::default());
            new_question.set(String::new());
        });
    }

    let Some(mode) = props.editor.mode.as_ref() else {
        return Html::default();
    };
    let draft = &props.editor.draft;
    let submitting = props.editor.submitting;
    let dispatch = &props.dispatch;

    let title = match mode {
        EditorMode::Create => "Create New Devotional",
        EditorMode::Edit {
            ..
        } => "Edit Devotional",
    };

    let on_close = dispatch.reform(|_: MouseEvent| EditorCommand::Cancel);
    let on_submit = dispatch.reform(|event: SubmitEvent| {
        event.prevent_default();
        EditorCommand::Submit
    });

    let on_category_change = {
        let dispatch = dispatch.clone();
        Callback::from(move |event: Event| {
            if let Some(target) = event.target_dyn_into::<HtmlSelectElement>() {
                if let Some(category) = Category::from_slug(&target.value()) {
                    dispatch.emit(EditorCommand::SetCategory(category));
                }
            }
        })
    };

    let on_file_change = {
        let dispatch = dispatch.clone();
        Callback::from(move |event: Event| {
            let Some(input) = event.target_dyn_into::<HtmlInputElement>() else {
                return;
            };
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                dispatch.emit(EditorCommand::SelectImage(file));
            }
            // Allow re-selecting the same file.
            input.set_value("");
        })
    };

    let on_question_input = {
        let new_question = new_question.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                new_question.set(target.value());
            }
        })
    };

    let add_question = {
        let new_question = new_question.clone();
        let dispatch = dispatch.clone();
        Callback::from(move |_: ()| {
            dispatch.emit(EditorCommand::AddQuestion((*new_question).clone()));
            new_question.set(String::new());
        })
    };

    let on_question_keydown = {
        let add_question = add_question.clone();
        Callback::from(move |event: KeyboardEvent| {
            if event.key() == "Enter" {
                event.prevent_default();
                add_question.emit(());
            }
        })
    };

    let section_tabs = html! {
        <div class={classes!("flex", "gap-2", "border-b", "border-[var(--border)]", "mb-4")} role="tablist">
            { for Section::ALL.into_iter().map(|item| {
                let active = *section == item;
                let onclick = {
                    let section = section.clone();
                    Callback::from(move |_| section.set(item))
                };
                html! {
                    <button
                        type="button"
                        role="tab"
                        aria-selected={active.to_string()}
                        class={classes!(
                            "px-3",
                            "py-2",
                            "text-sm",
                            "-mb-px",
                            "border-b-2",
                            if active { "border-[var(--primary)] text-[var(--primary)]" } else { "border-transparent" }
                        )}
                        onclick={onclick}
                    >
                        { item.label() }
                    </button>
                }
            }) }
        </div>
    };

    let basic = html! {
        <div class={classes!("grid", "gap-4", "md:grid-cols-2")}>
            <div>
                <label class={label_classes()}>{ "Devotional Type" }</label>
                <select class={input_classes()} onchange={on_category_change}>
                    { for Category::ALL.into_iter().map(|category| html! {
                        <option value={category.slug()} selected={draft.category == category}>
                            { category.label() }
                        </option>
                    }) }
                </select>
            </div>
            <div>
                <label class={label_classes()}>{ "Title" }</label>
                <input
                    type="text"
                    required=true
                    placeholder="Enter devotional title"
                    class={input_classes()}
                    value={draft.title.clone()}
                    oninput={on_text_input(dispatch, DraftField::Title)}
                />
            </div>
            <div>
                <label class={label_classes()}>{ "Date" }</label>
                <input
                    type="date"
                    class={input_classes()}
                    value={date_input_value(&draft.date)}
                    oninput={on_text_input(dispatch, DraftField::Date)}
                />
            </div>
            <div>
                <label class={label_classes()}>{ "Scripture of the Day" }</label>
                <input
                    type="text"
                    placeholder="Enter scripture reference (e.g., John 3:16)"
                    class={input_classes()}
                    value={draft.scripture_of_day.clone()}
                    oninput={on_text_input(dispatch, DraftField::ScriptureOfDay)}
                />
            </div>
            <div>
                <label class={label_classes()}>{ "Word of the Day" }</label>
                <input
                    type="text"
                    placeholder="Enter word of the day"
                    class={input_classes()}
                    value={draft.word_of_day.clone()}
                    oninput={on_text_input(dispatch, DraftField::WordOfDay)}
                />
            </div>
            <div>
                <label class={label_classes()}>{ "Bible in One Year" }</label>
                <input
                    type="text"
                    placeholder="Enter Bible reading plan"
                    class={input_classes()}
                    value={draft.bible_in_one_year.clone()}
                    oninput={on_text_input(dispatch, DraftField::BibleInOneYear)}
                />
            </div>
            <div class="md:col-span-2">
                <label class={label_classes()}>{ "Featured Image" }</label>
                <label class={classes!(
                    "flex",
                    "h-48",
                    "cursor-pointer",
                    "items-center",
                    "justify-center",
                    "overflow-hidden",
                    "rounded-lg",
                    "border-2",
                    "border-dashed",
                    "border-[var(--border)]",
                    "hover:border-[var(--primary)]"
                )}>
                    if let Some(preview) = props.editor.preview.clone() {
                        <img src={preview} alt="Preview" class="h-full w-full object-cover" />
                    } else {
                        <div class="text-center text-sm text-[var(--muted)]">
                            <p>{ "Click to upload image" }</p>
                            <p class="text-xs">{ "Supported formats: JPG, PNG" }</p>
                        </div>
                    }
                    <input type="file" accept="image/*" class="hidden" onchange={on_file_change} />
                </label>
                if let Some(name) = props.editor.pending_image_name.clone() {
                    <div class={classes!("mt-2", "flex", "items-center", "justify-between", "text-sm")}>
                        <span class="truncate">{ name }</span>
                        <button
                            type="button"
                            class="text-red-600 hover:underline"
                            onclick={dispatch.reform(|_: MouseEvent| EditorCommand::ClearImage)}
                        >
                            { "Remove" }
                        </button>
                    </div>
                } else {
                    <div class="mt-2">
                        <label class={label_classes()}>{ "Or enter image URL" }</label>
                        <input
                            type="url"
                            placeholder="https://example.com/image.jpg"
                            class={input_classes()}
                            value={draft.image_url.clone()}
                            oninput={on_text_input(dispatch, DraftField::ImageUrl)}
                        />
                    </div>
                }
            </div>
        </div>
    };

    let content = html! {
        <div class={classes!("space-y-4")}>
            <div>
                <label class={label_classes()}>{ "Commentary" }</label>
                <textarea
                    rows="6"
                    placeholder="Enter devotional commentary"
                    class={input_classes()}
                    value={draft.commentary.clone()}
                    oninput={on_textarea_input(dispatch, DraftField::Commentary)}
                />
            </div>
            <div>
                <label class={label_classes()}>{ "Further Study" }</label>
                <textarea
                    rows="3"
                    placeholder="Enter further study references"
                    class={input_classes()}
                    value={draft.further_study.clone()}
                    oninput={on_textarea_input(dispatch, DraftField::FurtherStudy)}
                />
            </div>
            <div>
                <label class={label_classes()}>{ "Prayer" }</label>
                <textarea
                    rows="3"
                    placeholder="Enter prayer text"
                    class={input_classes()}
                    value={draft.prayer.clone()}
                    oninput={on_textarea_input(dispatch, DraftField::Prayer)}
                />
            </div>
        </div>
    };

    let additional = html! {
        <div class={classes!("space-y-4")}>
            <div>
                <label class={label_classes()}>{ "Questions of the Day" }</label>
                <div class={classes!("flex", "gap-2")}>
                    <input
                        type="text"
                        placeholder="Add a question"
                        class={input_classes()}
                        value={(*new_question).clone()}
                        oninput={on_question_input}
                        onkeydown={on_question_keydown}
                    />
                    <button
                        type="button"
                        class={classes!("rounded-lg", "border", "border-[var(--border)]", "px-3", "text-sm")}
                        onclick={add_question.reform(|_: MouseEvent| ())}
                    >
                        { "Add" }
                    </button>
                </div>
                <ul class={classes!("mt-3", "space-y-2")}>
                    { for draft.question_of_day.iter().enumerate().map(|(index, question)| html! {
                        <li key={format!("{index}-{question}")} class={classes!("flex", "items-start", "justify-between", "gap-2", "rounded-lg", "bg-[var(--surface-alt)]", "px-3", "py-2", "text-sm")}>
                            <span>{ question.clone() }</span>
                            <button
                                type="button"
                                class="text-[var(--muted)] hover:text-red-600"
                                aria-label="Remove question"
                                onclick={dispatch.reform(move |_: MouseEvent| EditorCommand::RemoveQuestion(index))}
                            >
                                {"×"}
                            </button>
                        </li>
                    }) }
                </ul>
            </div>
            <div>
                <label class={label_classes()}>{ "Announcements" }</label>
                <textarea
                    rows="3"
                    placeholder="Enter announcements"
                    class={input_classes()}
                    value={draft.announcements.clone()}
                    oninput={on_textarea_input(dispatch, DraftField::Announcements)}
                />
            </div>
        </div>
    };

    html! {
        <div class={classes!("fixed", "inset-0", "z-40", "flex", "items-center", "justify-center", "bg-black/40", "p-4")}>
            <form
                class={classes!("w-full", "max-w-3xl", "max-h-[90vh]", "overflow-y-auto", "rounded-xl", "bg-[var(--surface)]", "p-6", "shadow-2xl")}
                onsubmit={on_submit}
            >
                <div class={classes!("mb-4", "flex", "items-center", "justify-between")}>
                    <h2 class={classes!("text-lg", "font-semibold")}>{ title }</h2>
                    <button type="button" aria-label="Close" class="text-xl" onclick={on_close.clone()}>{"×"}</button>
                </div>
                { section_tabs }
                {
                    match *section {
                        Section::Basic => basic,
                        Section::Content => content,
                        Section::Additional => additional,
                    }
                }
                <div class={classes!("mt-6", "flex", "justify-end", "gap-3")}>
                    <button
                        type="button"
                        class={classes!("rounded-lg", "border", "border-[var(--border)]", "px-4", "py-2", "text-sm")}
                        onclick={on_close}
                    >
                        { "Cancel" }
                    </button>
                    <button
                        type="submit"
                        disabled={submitting}
                        class={classes!("inline-flex", "items-center", "gap-2", "rounded-lg", "bg-[var(--primary)]", "px-4", "py-2", "text-sm", "text-white", "disabled:opacity-60")}
                    >
                        if submitting {
                            <LoadingSpinner size={SpinnerSize::Small} label="Saving" />
                            { "Saving..." }
                        } else {
                            { match mode { EditorMode::Create => "Create Devotional", EditorMode::Edit { .. } => "Update Devotional" } }
                        }
                    </button>
                </div>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reopened_modal_starts_on_basic_section() {
        assert_eq!(Section::default(), Section::Basic);
        assert_eq!(Section::ALL[0], Section::default());
    }
}

use std::collections::HashSet;

use devotional_shared::{
    columns::{
        badge_variant, sort_records, Align, BadgeVariant, CellRenderer, ColumnDescriptor,
        SortDirection, SortState, DEVOTIONAL_COLUMNS,
    },
    format::format_date,
    Devotional, Status,
};
use yew::prelude::*;

fn badge_class(status: Status) -> Classes {
    let base = classes!(
        "inline-flex",
        "items-center",
        "rounded-full",
        "px-2",
        "py-0.5",
        "text-xs",
        "font-semibold"
    );
    match badge_variant(status) {
        BadgeVariant::Success => classes!(base, "bg-emerald-500/15", "text-emerald-700"),
        BadgeVariant::Warning => classes!(base, "bg-amber-500/15", "text-amber-700"),
        BadgeVariant::Destructive => classes!(base, "bg-red-500/15", "text-red-700"),
        BadgeVariant::Neutral => classes!(base, "bg-[var(--surface-alt)]", "text-[var(--muted)]"),
    }
}

fn align_class(align: Align) -> &'static str {
    match align {
        Align::Left => "text-left",
        Align::Right => "text-right",
    }
}

#[derive(Properties, PartialEq)]
pub struct DevotionalTableProps {
    pub records: Vec<Devotional>,
    pub on_edit: Callback<Devotional>,
    pub on_delete: Callback<Devotional>,
}

#[function_component(DevotionalTable)]
pub fn devotional_table(props: &DevotionalTableProps) -> Html {
    let sort = use_state(|| None::<SortState>);
    let selected = use_state(HashSet::<String>::new);

    // Selection is per page.
    {
        let selected = selected.clone();
        use_effect_with(props.records.clone(), move |_| {
            selected.set(HashSet::new());
        });
    }

    if props.records.is_empty() {
        return html! {
            <div class={classes!("py-16", "text-center", "text-[var(--muted)]")}>
                <p class="font-semibold">{ "No devotionals found" }</p>
                <p class="text-sm">{ "Try another tab or search term." }</p>
            </div>
        };
    }

    let mut rows = props.records.clone();
    if let Some(state) = *sort {
        sort_records(&mut rows, state);
    }

    let all_selected = rows.iter().all(|record| selected.contains(&record.id));
    let toggle_all = {
        let selected = selected.clone();
        let ids: Vec<String> = rows.iter().map(|record| record.id.clone()).collect();
        Callback::from(move |_: Event| {
            if all_selected {
                selected.set(HashSet::new());
            } else {
                selected.set(ids.iter().cloned().collect());
            }
        })
    };

    let header = |column: &ColumnDescriptor| -> Html {
        let th_class = classes!(
            "px-3",
            "py-2",
            "text-xs",
            "uppercase",
            "tracking-wide",
            align_class(column.align)
        );
        match column.renderer {
            CellRenderer::Checkbox => html! {
                <th class={th_class}>
                    <input
                        type="checkbox"
                        aria-label="Select all"
                        checked={all_selected}
                        onchange={toggle_all.clone()}
                    />
                </th>
            },
            _ if column.sortable => {
                let field = column.field;
                let indicator = match *sort {
                    Some(state) if state.field == field => match state.direction {
                        SortDirection::Ascending => " ▲",
                        SortDirection::Descending => " ▼",
                    },
                    _ => "",
                };
                let onclick = {
                    let sort = sort.clone();
                    Callback::from(move |_| sort.set(Some(SortState::toggle(*sort, field))))
                };
                html! {
                    <th class={th_class}>
                        <button type="button" class="font-semibold hover:text-[var(--primary)]" onclick={onclick}>
                            { column.label }{ indicator }
                        </button>
                    </th>
                }
            },
            _ => html! { <th class={th_class}>{ column.label }</th> },
        }
    };

    let cell = |column: &ColumnDescriptor, record: &Devotional| -> Html {
        let td_class = classes!("px-3", "py-2", "align-top", align_class(column.align));
        match column.renderer {
            CellRenderer::Checkbox => {
                let id = record.id.clone();
                let checked = selected.contains(&id);
                let onchange = {
                    let selected = selected.clone();
                    Callback::from(move |_: Event| {
                        let mut next = (*selected).clone();
                        if !next.remove(&id) {
                            next.insert(id.clone());
                        }
                        selected.set(next);
                    })
                };
                html! {
                    <td class={td_class}>
                        <input type="checkbox" aria-label="Select row" checked={checked} onchange={onchange} />
                    </td>
                }
            },
            CellRenderer::Text => html! {
                <td class={td_class}>{ column.field.text(record).to_string() }</td>
            },
            CellRenderer::Date => html! {
                <td class={classes!(td_class, "whitespace-nowrap")}>{ format_date(column.field.text(record)) }</td>
            },
            CellRenderer::StatusBadge => html! {
                <td class={td_class}>
                    <span class={badge_class(record.status)}>{ record.status.label() }</span>
                </td>
            },
            CellRenderer::Actions => {
                let on_edit = {
                    let on_edit = props.on_edit.clone();
                    let record = record.clone();
                    Callback::from(move |_| on_edit.emit(record.clone()))
                };
                let on_delete = {
                    let on_delete = props.on_delete.clone();
                    let record = record.clone();
                    Callback::from(move |_| on_delete.emit(record.clone()))
                };
                html! {
                    <td class={classes!(td_class, "whitespace-nowrap", "space-x-2")}>
                        <button type="button" class="text-sm text-[var(--primary)] hover:underline" onclick={on_edit}>
                            { "Edit" }
                        </button>
                        <button type="button" class="text-sm text-red-600 hover:underline" onclick={on_delete}>
                            { "Delete" }
                        </button>
                    </td>
                }
            },
        }
    };

    html! {
        <div class={classes!("overflow-x-auto")}>
            <table class={classes!("w-full", "text-sm")}>
                <thead class={classes!("border-b", "border-[var(--border)]", "text-[var(--muted)]")}>
                    <tr>
                        { for DEVOTIONAL_COLUMNS.iter().map(header) }
                    </tr>
                </thead>
                <tbody>
                    { for rows.iter().map(|record| html! {
                        <tr key={record.id.clone()} class={classes!("border-b", "border-[var(--border)]", "hover:bg-[var(--surface-alt)]")}>
                            { for DEVOTIONAL_COLUMNS.iter().map(|column| cell(column, record)) }
                        </tr>
                    }) }
                </tbody>
            </table>
        </div>
    }
}

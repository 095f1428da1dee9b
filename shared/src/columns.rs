//! Declarative column set of the devotional table.
//!
//! The table component walks [`DEVOTIONAL_COLUMNS`] and picks a cell renderer
//! per [`CellRenderer`]; nothing here knows how cells are drawn.

use std::cmp::Ordering;

use crate::{
    format::parse_timestamp,
    model::{Devotional, Status},
};

/// Record attribute a column reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Row selection checkbox, reads nothing.
    Select,
    /// [`Devotional::title`].
    Title,
    /// [`Devotional::date`].
    Date,
    /// [`Devotional::further_study`].
    FurtherStudy,
    /// [`Devotional::status`].
    Status,
    /// [`Devotional::created_at`].
    CreatedAt,
    /// Row actions, reads nothing.
    Actions,
}

impl Field {
    /// Raw text value of this field.
    pub fn text(self, record: &Devotional) -> &str {
        match self {
            Field::Title => &record.title,
            Field::Date => &record.date,
            Field::FurtherStudy => &record.further_study,
            Field::Status => record.status.as_str(),
            Field::CreatedAt => &record.created_at,
            Field::Select | Field::Actions => "",
        }
    }
}

/// How a cell is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellRenderer {
    /// Selection checkbox.
    Checkbox,
    /// Plain text.
    Text,
    /// Short date.
    Date,
    /// Status badge.
    StatusBadge,
    /// Edit/delete buttons.
    Actions,
}

/// Column alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Align {
    /// Left aligned.
    Left,
    /// Right aligned.
    Right,
}

/// One table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDescriptor {
    /// Attribute read.
    pub field: Field,
    /// Header caption; empty for the select and actions columns.
    pub label: &'static str,
    /// Whether clicking the header sorts the page.
    pub sortable: bool,
    /// Cell renderer.
    pub renderer: CellRenderer,
    /// Cell alignment.
    pub align: Align,
}

/// Columns of the devotional table, in display order.
pub const DEVOTIONAL_COLUMNS: &[ColumnDescriptor] = &[
    ColumnDescriptor {
        field: Field::Select,
        label: "",
        sortable: false,
        renderer: CellRenderer::Checkbox,
        align: Align::Left,
    },
    ColumnDescriptor {
        field: Field::Title,
        label: "Title",
        sortable: true,
        renderer: CellRenderer::Text,
        align: Align::Left,
    },
    ColumnDescriptor {
        field: Field::Date,
        label: "Date",
        sortable: true,
        renderer: CellRenderer::Date,
        align: Align::Left,
    },
    ColumnDescriptor {
        field: Field::FurtherStudy,
        label: "Further Study",
        sortable: false,
        renderer: CellRenderer::Text,
        align: Align::Left,
    },
    ColumnDescriptor {
        field: Field::Status,
        label: "Status",
        sortable: true,
        renderer: CellRenderer::StatusBadge,
        align: Align::Left,
    },
    ColumnDescriptor {
        field: Field::CreatedAt,
        label: "Created At",
        sortable: true,
        renderer: CellRenderer::Date,
        align: Align::Left,
    },
    ColumnDescriptor {
        field: Field::Actions,
        label: "",
        sortable: false,
        renderer: CellRenderer::Actions,
        align: Align::Right,
    },
];

/// Visual variant of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BadgeVariant {
    /// Approved.
    Success,
    /// Pending.
    Warning,
    /// Rejected.
    Destructive,
    /// Anything else.
    Neutral,
}

/// Badge variant for `status`.
pub fn badge_variant(status: Status) -> BadgeVariant {
    match status {
        Status::Approved => BadgeVariant::Success,
        Status::Pending => BadgeVariant::Warning,
        Status::Rejected => BadgeVariant::Destructive,
        Status::Unknown => BadgeVariant::Neutral,
    }
}

/// Sort direction of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    /// Smallest first.
    Ascending,
    /// Largest first.
    Descending,
}

/// Active sort of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    /// Sorted column.
    pub field: Field,
    /// Direction.
    pub direction: SortDirection,
}

impl SortState {
    /// Next state after clicking the header of `field`: a new column starts
    /// ascending, the same column flips.
    pub fn toggle(current: Option<SortState>, field: Field) -> SortState {
        match current {
            Some(state) if state.field == field => SortState {
                field,
                direction: match state.direction {
                    SortDirection::Ascending => SortDirection::Descending,
                    SortDirection::Descending => SortDirection::Ascending,
                },
            },
            _ => SortState {
                field,
                direction: SortDirection::Ascending,
            },
        }
    }
}

/// Sorts one page of records in place. The sort is stable.
pub fn sort_records(records: &mut [Devotional], sort: SortState) {
    records.sort_by(|a, b| {
        let ordering = compare(a, b, sort.field);
        match sort.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

fn compare(a: &Devotional, b: &Devotional, field: Field) -> Ordering {
    match field {
        Field::Date | Field::CreatedAt => {
            let (left, right) = (field.text(a), field.text(b));
            match (parse_timestamp(left), parse_timestamp(right)) {
                (Some(x), Some(y)) => x.cmp(&y),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => left.cmp(right),
            }
        },
        _ => field
            .text(a)
            .to_lowercase()
            .cmp(&field.text(b).to_lowercase()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(title: &str, date: &str, status: &str) -> Devotional {
        serde_json::from_value(serde_json::json!({
            "_id": title,
            "title": title,
            "date": date,
            "status": status,
        }))
        .expect("decode row")
    }

    fn titles(records: &[Devotional]) -> Vec<&str> {
        records.iter().map(|r| r.title.as_str()).collect()
    }

    #[test]
    fn column_set_matches_table_layout() {
        let fields: Vec<Field> = DEVOTIONAL_COLUMNS.iter().map(|c| c.field).collect();
        assert_eq!(
            fields,
            vec![
                Field::Select,
                Field::Title,
                Field::Date,
                Field::FurtherStudy,
                Field::Status,
                Field::CreatedAt,
                Field::Actions,
            ]
        );
        let sortable: Vec<&str> = DEVOTIONAL_COLUMNS
            .iter()
            .filter(|c| c.sortable)
            .map(|c| c.label)
            .collect();
        assert_eq!(sortable, vec!["Title", "Date", "Status", "Created At"]);
    }

    #[test]
    fn badge_variants_follow_status() {
        assert_eq!(badge_variant(Status::Approved), BadgeVariant::Success);
        assert_eq!(badge_variant(Status::Pending), BadgeVariant::Warning);
        assert_eq!(badge_variant(Status::Rejected), BadgeVariant::Destructive);
        assert_eq!(badge_variant(Status::Unknown), BadgeVariant::Neutral);
    }

    #[test]
    fn dates_sort_chronologically_not_lexically() {
        let mut rows = vec![
            row("b", "2024-11-02", "pending"),
            row("a", "2024-02-10T00:00:00Z", "approved"),
            row("c", "not a date", "approved"),
        ];
        sort_records(&mut rows, SortState {
            field: Field::Date,
            direction: SortDirection::Ascending,
        });
        assert_eq!(titles(&rows), vec!["a", "b", "c"]);
    }

    #[test]
    fn header_click_toggles_direction() {
        let first = SortState::toggle(None, Field::Title);
        assert_eq!(first.direction, SortDirection::Ascending);

        let second = SortState::toggle(Some(first), Field::Title);
        assert_eq!(second.direction, SortDirection::Descending);

        let other = SortState::toggle(Some(second), Field::Status);
        assert_eq!(other.field, Field::Status);
        assert_eq!(other.direction, SortDirection::Ascending);

        let mut rows = vec![row("alpha", "", "x"), row("Beta", "", "x"), row("gamma", "", "x")];
        sort_records(&mut rows, second);
        assert_eq!(titles(&rows), vec!["gamma", "Beta", "alpha"]);
    }
}

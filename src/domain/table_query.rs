//! Filtering, sorting and pagination for the metrics table.
//!
//! Pure functions over the literal metric records; the UI only keeps a
//! [`TableQuery`] between frames.

use std::cmp::Ordering;
use unhdash::MetricRecord;

/// Sortable columns of the metrics table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricColumn {
    Id,
    Label,
    Value,
}

impl MetricColumn {
    pub const ALL: [MetricColumn; 3] = [MetricColumn::Id, MetricColumn::Label, MetricColumn::Value];

    pub fn title(self) -> &'static str {
        match self {
            MetricColumn::Id => "ID",
            MetricColumn::Label => "Metric",
            MetricColumn::Value => "Value",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Ascending => "⏶",
            SortDirection::Descending => "⏷",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortSpec {
    pub column: MetricColumn,
    pub direction: SortDirection,
}

/// One page of the table after filtering and sorting.
#[derive(Debug)]
pub struct TablePage<'a> {
    pub rows: Vec<&'a MetricRecord>,
    /// Zero-based index of this page (clamped into range)
    pub page: usize,
    /// At least 1, even when nothing matches
    pub page_count: usize,
    pub total_matches: usize,
}

/// User-controlled view over the metrics table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableQuery {
    filter: String,
    sort: Option<SortSpec>,
    page: usize,
    page_size: usize,
}

impl TableQuery {
    pub fn new(page_size: usize) -> Self {
        Self {
            filter: String::new(),
            sort: None,
            page: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn sort(&self) -> Option<SortSpec> {
        self.sort
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Replaces the filter text and jumps back to the first page.
    pub fn set_filter(&mut self, filter: String) {
        if filter != self.filter {
            self.filter = filter;
            self.page = 0;
        }
    }

    /// Clicking a header sorts ascending; clicking it again flips direction.
    pub fn toggle_sort(&mut self, column: MetricColumn) {
        self.sort = Some(match self.sort {
            Some(spec) if spec.column == column => SortSpec {
                column,
                direction: spec.direction.toggled(),
            },
            _ => SortSpec {
                column,
                direction: SortDirection::Ascending,
            },
        });
    }

    pub fn next_page(&mut self, page_count: usize) {
        if self.page + 1 < page_count {
            self.page += 1;
        }
    }

    pub fn previous_page(&mut self) {
        self.page = self.page.saturating_sub(1);
    }

    /// Applies filter, sort and pagination to `records`.
    pub fn apply<'a>(&self, records: &'a [MetricRecord]) -> TablePage<'a> {
        let needle = self.filter.trim().to_lowercase();
        let mut rows: Vec<&MetricRecord> = records
            .iter()
            .filter(|r| needle.is_empty() || r.label.to_lowercase().contains(&needle))
            .collect();

        if let Some(spec) = self.sort {
            rows.sort_by(|a, b| {
                let ordering = compare(a, b, spec.column);
                match spec.direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            });
        }

        let total_matches = rows.len();
        let page_count = total_matches.div_ceil(self.page_size).max(1);
        let page = self.page.min(page_count - 1);

        let rows = rows
            .into_iter()
            .skip(page * self.page_size)
            .take(self.page_size)
            .collect();

        TablePage {
            rows,
            page,
            page_count,
            total_matches,
        }
    }
}

fn compare(a: &MetricRecord, b: &MetricRecord, column: MetricColumn) -> Ordering {
    match column {
        MetricColumn::Id => a.id.cmp(&b.id),
        MetricColumn::Label => a.label.cmp(b.label),
        MetricColumn::Value => a.value.total_cmp(&b.value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query_shows_all_five() {
        let query = TableQuery::new(5);
        let page = query.apply(unhdash::data::metrics());
        assert_eq!(page.rows.len(), 5);
        assert_eq!(page.page_count, 1);
        assert_eq!(page.rows[0].label, "Revenue");
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let mut query = TableQuery::new(5);
        query.set_filter("SATIS".to_string());
        let page = query.apply(unhdash::data::metrics());
        assert_eq!(page.total_matches, 1);
        assert_eq!(page.rows[0].value, 92.0);
    }

    #[test]
    fn test_sort_toggle() {
        let mut query = TableQuery::new(5);
        query.toggle_sort(MetricColumn::Value);
        let values: Vec<f64> = query.apply(unhdash::data::metrics()).rows.iter().map(|r| r.value).collect();
        assert_eq!(values, vec![5.2, 15.0, 22.4, 92.0, 324.2]);

        query.toggle_sort(MetricColumn::Value);
        let first = query.apply(unhdash::data::metrics()).rows[0].label;
        assert_eq!(first, "Revenue");
    }

    #[test]
    fn test_pagination_clamps() {
        let mut query = TableQuery::new(2);
        let records = unhdash::data::metrics();
        assert_eq!(query.apply(records).page_count, 3);

        query.next_page(3);
        query.next_page(3);
        query.next_page(3);
        let page = query.apply(records);
        assert_eq!(page.page, 2);
        assert_eq!(page.rows.len(), 1);

        query.set_filter("profit".to_string());
        let page = query.apply(records);
        assert_eq!(page.page, 0);
        assert_eq!(page.rows[0].label, "Profit");
    }

    #[test]
    fn test_no_matches_still_one_page() {
        let mut query = TableQuery::new(5);
        query.set_filter("zzz".to_string());
        let page = query.apply(unhdash::data::metrics());
        assert!(page.rows.is_empty());
        assert_eq!(page.page_count, 1);
    }
}

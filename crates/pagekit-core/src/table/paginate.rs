//! Page boundaries and navigation links.

use crate::types::pagination::{PageLink, Pagination, RowWindow};
use crate::types::query::{QueryParams, UrlTemplate};

use super::builder::TableBuilder;

impl TableBuilder {
    /// Compute the row window and link set for a request.
    ///
    /// A missing or invalid page number resolves to 1 and a missing or
    /// invalid page size to the configured default. The page number is not
    /// clamped to the page count: a page past the end produces a row window
    /// with no data behind it.
    pub fn compute_pagination(
        &self,
        total_rows: u64,
        query: &QueryParams,
        original_url: &str,
    ) -> Pagination {
        let names = &self.query_names;
        let current_page = parse_positive(query.get(&names.page)).unwrap_or(1);
        let rows_per_page =
            parse_positive(query.get(&names.num_per_page)).unwrap_or(self.default_rows_per_page);

        let total_pages = total_rows.div_ceil(rows_per_page);
        let row_window = RowWindow::for_page(current_page, rows_per_page);

        let template = UrlTemplate::from_original_url(
            original_url,
            &names.page,
            current_page,
            &names.num_per_page,
            rows_per_page,
        );

        let mut pagination = Pagination {
            current_page,
            rows_per_page,
            total_rows,
            total_pages,
            rows_per_page_options: self.rows_per_page_options.clone(),
            row_window,
            current_page_url: template.with_page(current_page),
            first_page_url: None,
            prev_page_url: None,
            next_page_url: None,
            last_page_url: None,
            page_links_before: Vec::new(),
            page_links_after: Vec::new(),
            ellipsis_before: false,
            ellipsis_after: false,
        };

        if total_pages <= 1 {
            return pagination;
        }

        if current_page > 1 {
            pagination.first_page_url = Some(template.with_page(1));
            pagination.prev_page_url = Some(template.with_page(current_page - 1));
        }
        if current_page < total_pages {
            pagination.last_page_url = Some(template.with_page(total_pages));
            pagination.next_page_url = Some(template.with_page(current_page + 1));
        }

        let (before, after) =
            surrounding_pages(current_page, total_pages, self.num_surrounding_page_links);

        pagination.ellipsis_before = before.first().is_some_and(|&first| first > 2);
        pagination.ellipsis_after = after.last().is_some_and(|&last| last < total_pages - 1);

        let link = |page_index: u64| PageLink {
            page_index,
            url: template.with_page(page_index),
        };
        pagination.page_links_before = before.into_iter().map(link).collect();
        pagination.page_links_after = after.into_iter().map(link).collect();

        pagination
    }
}

/// Parse a strictly positive integer; anything else is treated as absent.
fn parse_positive(value: Option<&String>) -> Option<u64> {
    value
        .and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|&n| n > 0)
}

/// Page numbers to link around `current`, as `(before, after)`.
///
/// The budget is shared: each round emits at most one page on each side,
/// the before side first, and a side that runs out of pages leaves the rest
/// of the budget to the other. Page 1 and the last page are never included
/// since they have their own links. `before` is returned lowest first,
/// `after` nearest first.
fn surrounding_pages(current: u64, total_pages: u64, budget: u64) -> (Vec<u64>, Vec<u64>) {
    let mut before = Vec::new();
    let mut after = Vec::new();

    let mut prev = current.saturating_sub(1).min(total_pages.saturating_sub(1));
    let mut next = current.saturating_add(1);
    let mut remaining = budget;

    while remaining > 0 {
        let mut emitted = false;

        if prev >= 2 {
            before.push(prev);
            prev -= 1;
            remaining -= 1;
            emitted = true;
        }

        if remaining > 0 && next < total_pages {
            after.push(next);
            next += 1;
            remaining -= 1;
            emitted = true;
        }

        if !emitted {
            break;
        }
    }

    before.reverse();
    (before, after)
}

//! Client-side data-table engine shared by the product and order views.
//!
//! A render runs one direction: raw collection → filter → sort → paginate,
//! after which the controller formats the page into display rows.

pub mod filter;
pub mod pagination;
pub mod sort;

use serde::Serialize;

pub use filter::{
    OrderFilter, ProductFilter, RecordFilter, SearchTerm, StatusFilter, StockLevel,
    DEFAULT_LOW_STOCK_THRESHOLD,
};
pub use pagination::{
    page_window, paginate, Page, PageLink, PageRequest, PageWindow, PaginationMeta,
    DEFAULT_PAGE_SIZE,
};
pub use sort::{sort_records, OrderSortField, ProductSortField, Sort, SortDirection, SortKey};

/// A record the free-text search box can match against.
pub trait Searchable {
    /// Fields searched by the table's search box, in display order.
    fn search_fields(&self) -> Vec<&str>;
}

/// A record with a status column.
pub trait HasStatus {
    type Status: Copy + PartialEq;

    fn status(&self) -> Self::Status;
}

/// Filter, optionally sort, then paginate `records`.
pub fn select<'a, R, Flt, F>(
    records: &'a [R],
    filter: &Flt,
    sort: Option<&Sort<F>>,
    page: PageRequest,
) -> Page<&'a R>
where
    Flt: RecordFilter<R>,
    F: SortKey<R>,
{
    let mut matching = filter.apply(records);
    if let Some(sort) = sort {
        sort_records(&mut matching, sort);
    }
    paginate(&matching, page)
}

/// Number of records currently in `status`.
pub fn count_with_status<R: HasStatus>(records: &[R], status: R::Status) -> usize {
    records.iter().filter(|r| r.status() == status).count()
}

/// A rendered table: formatted rows for the current page plus navigation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableView<Row> {
    pub rows: Vec<Row>,
    pub pagination: PaginationMeta,
    pub window: PageWindow,
    /// Localized "no results" message when the page is empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<String>,
    /// Version of the collection this view was rendered from.
    pub version: u64,
}

impl<Row> TableView<Row> {
    pub fn from_page(page: Page<Row>, empty_message: Option<String>, version: u64) -> Self {
        let window = page.window();
        let empty_message = if page.items.is_empty() {
            empty_message
        } else {
            None
        };

        Self {
            rows: page.items,
            pagination: page.meta,
            window,
            empty_message,
            version,
        }
    }
}

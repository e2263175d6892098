use serde::{Deserialize, Serialize};

/// Rows per page used by the product and order views
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Maximum number of indicators (page links and ellipses) in the page bar
pub const MAX_PAGE_LINKS: usize = 5;

/// Pagination parameters for a table render.
///
/// `page` is signed so that malformed requests (0, negative) can be clamped
/// instead of rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct PageRequest {
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_per_page")]
    pub per_page: usize,
}

fn default_page() -> i64 {
    1
}

fn default_per_page() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: default_page(),
            per_page: default_per_page(),
        }
    }
}

impl PageRequest {
    pub fn new(page: i64, per_page: usize) -> Self {
        Self { page, per_page }
    }
}

/// Pagination metadata for a rendered page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub page: usize,
    pub per_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

/// One page of a list plus the metadata needed to navigate it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    #[serde(flatten)]
    pub meta: PaginationMeta,
}

impl<T> Page<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            meta: self.meta,
        }
    }

    pub fn window(&self) -> PageWindow {
        page_window(self.meta.page, self.meta.total_pages)
    }
}

/// Number of pages needed for `count` items. An empty list still has one
/// (empty) page.
pub fn total_pages(count: usize, per_page: usize) -> usize {
    let per_page = per_page.max(1);
    count.div_ceil(per_page).max(1)
}

/// Clamps a requested page number into `1..=total_pages`.
pub fn clamp_page(requested: i64, total_pages: usize) -> usize {
    let last = total_pages.max(1);
    if requested < 1 {
        1
    } else {
        usize::try_from(requested).map_or(last, |page| page.min(last))
    }
}

/// Slices `items` into the requested page.
pub fn paginate<T: Clone>(items: &[T], request: PageRequest) -> Page<T> {
    let per_page = request.per_page.max(1);
    let total_pages = total_pages(items.len(), per_page);
    let page = clamp_page(request.page, total_pages);

    let start = ((page - 1) * per_page).min(items.len());
    let end = (page * per_page).min(items.len());

    Page {
        items: items[start..end].to_vec(),
        meta: PaginationMeta {
            page,
            per_page,
            total_items: items.len(),
            total_pages,
        },
    }
}

/// An indicator in the page bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PageLink {
    Page { number: usize, active: bool },
    Ellipsis,
}

impl PageLink {
    fn page(number: usize, current: usize) -> Self {
        PageLink::Page {
            number,
            active: number == current,
        }
    }
}

/// Page bar state: numbered links, ellipses and previous/next targets
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageWindow {
    pub links: Vec<PageLink>,
    pub previous: usize,
    pub next: usize,
    pub has_previous: bool,
    pub has_next: bool,
    /// The bar is hidden when everything fits on one page.
    pub visible: bool,
}

/// Computes the page bar for `current` out of `total` pages.
///
/// Up to five pages are listed in full. Past that the bar shows
/// `1 2 3 4 …` near the start, `… t-3 t-2 t-1 t` near the end and
/// `1 … c c+1 …` in between.
pub fn page_window(current: usize, total: usize) -> PageWindow {
    let total = total.max(1);
    let current = current.clamp(1, total);

    let links = if total <= MAX_PAGE_LINKS {
        (1..=total).map(|n| PageLink::page(n, current)).collect()
    } else if current <= 3 {
        let mut links: Vec<_> = (1..=4).map(|n| PageLink::page(n, current)).collect();
        links.push(PageLink::Ellipsis);
        links
    } else if current >= total - 2 {
        let mut links = vec![PageLink::Ellipsis];
        links.extend((total - 3..=total).map(|n| PageLink::page(n, current)));
        links
    } else {
        vec![
            PageLink::page(1, current),
            PageLink::Ellipsis,
            PageLink::page(current, current),
            PageLink::page(current + 1, current),
            PageLink::Ellipsis,
        ]
    };

    PageWindow {
        links,
        previous: current.saturating_sub(1).max(1),
        next: (current + 1).min(total),
        has_previous: current > 1,
        has_next: current < total,
        visible: total > 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn ceil_division_for_total_pages() {
        assert_eq!(total_pages(6, 5), 2);
        assert_eq!(total_pages(10, 5), 2);
        assert_eq!(total_pages(11, 5), 3);
    }

    #[test]
    fn empty_list_has_one_empty_page() {
        let page = paginate::<u8>(&[], PageRequest::new(3, 5));
        assert_eq!(page.meta.total_pages, 1);
        assert_eq!(page.meta.page, 1);
        assert!(page.items.is_empty());
    }

    #[rstest]
    #[case(-4, 1)]
    #[case(0, 1)]
    #[case(2, 2)]
    #[case(9, 3)]
    #[case(i64::MAX, 3)]
    fn requested_page_is_clamped(#[case] requested: i64, #[case] expected: usize) {
        assert_eq!(clamp_page(requested, 3), expected);
    }

    #[test]
    fn zero_page_size_is_treated_as_one() {
        let page = paginate(&[1, 2, 3], PageRequest::new(2, 0));
        assert_eq!(page.items, vec![2]);
        assert_eq!(page.meta.total_pages, 3);
    }

    #[test]
    fn last_page_holds_the_remainder() {
        let items: Vec<u32> = (1..=12).collect();
        let page = paginate(&items, PageRequest::new(3, 5));
        assert_eq!(page.items, vec![11, 12]);
    }

    fn render(window: &PageWindow) -> String {
        window
            .links
            .iter()
            .map(|link| match link {
                PageLink::Page { number, active: true } => format!("[{}]", number),
                PageLink::Page { number, .. } => number.to_string(),
                PageLink::Ellipsis => "…".to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[rstest]
    #[case(1, 1, "[1]")]
    #[case(2, 3, "1 [2] 3")]
    #[case(5, 5, "1 2 3 4 [5]")]
    #[case(1, 10, "[1] 2 3 4 …")]
    #[case(3, 10, "1 2 [3] 4 …")]
    #[case(4, 10, "1 … [4] 5 …")]
    #[case(7, 10, "1 … [7] 8 …")]
    #[case(8, 10, "… 7 [8] 9 10")]
    #[case(10, 10, "… 7 8 9 [10]")]
    #[case(4, 6, "… 3 [4] 5 6")]
    fn window_matches_page_bar(#[case] current: usize, #[case] total: usize, #[case] bar: &str) {
        assert_eq!(render(&page_window(current, total)), bar);
    }

    #[test]
    fn window_never_exceeds_five_indicators() {
        for total in 1..40 {
            for current in 1..=total {
                assert!(page_window(current, total).links.len() <= MAX_PAGE_LINKS);
            }
        }
    }

    #[test]
    fn previous_and_next_stay_in_range() {
        let first = page_window(1, 4);
        assert_eq!((first.previous, first.next), (1, 2));
        assert!(!first.has_previous);

        let last = page_window(4, 4);
        assert_eq!((last.previous, last.next), (3, 4));
        assert!(!last.has_next);
    }

    #[test]
    fn single_page_hides_the_bar() {
        assert!(!page_window(1, 1).visible);
        assert!(page_window(1, 2).visible);
    }
}

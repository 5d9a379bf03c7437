//! Page strip for the client list.

use serde::Serialize;

/// How many page links the strip shows at each end and around the current
/// page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageWindow {
    pub edge: usize,
    pub around: usize,
}

impl Default for PageWindow {
    fn default() -> Self {
        Self { edge: 2, around: 2 }
    }
}

/// Page numbers to link, `None` standing for a run of hidden pages.
///
/// `current` must already lie in `1..=total_pages`.
fn page_strip(total_pages: usize, current: usize, window: PageWindow) -> Vec<Option<usize>> {
    let spans = [
        (1, window.edge.min(total_pages)),
        (
            current.saturating_sub(window.around).max(1),
            current.saturating_add(window.around).min(total_pages),
        ),
        (
            total_pages.saturating_sub(window.edge).saturating_add(1),
            total_pages,
        ),
    ];

    let mut strip = Vec::new();
    let mut shown_up_to = 0;
    for (start, end) in spans {
        if end <= shown_up_to {
            continue;
        }
        let start = start.max(shown_up_to + 1);
        if start > end {
            continue;
        }
        if start > shown_up_to + 1 {
            strip.push(None);
        }
        strip.extend((start..=end).map(Some));
        shown_up_to = end;
    }
    strip
}

/// Number of pages needed for `total` items, zero if `per_page` is zero.
pub fn total_pages(total: usize, per_page: usize) -> usize {
    if per_page == 0 {
        0
    } else {
        total.div_ceil(per_page)
    }
}

/// One page of items plus the strip of page links to render around it.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: Vec<Option<usize>>,
    pub page: usize,
}

impl<T> Paginated<T> {
    /// Page numbers are 1-based. The requested page is clamped to the
    /// existing range, so page 0 reads as the first page and anything past
    /// the end as the last.
    pub fn new(
        items: Vec<T>,
        current_page: usize,
        total_pages: usize,
        window: PageWindow,
    ) -> Self {
        let page = current_page.clamp(1, total_pages.max(1));
        Self {
            items,
            pages: page_strip(total_pages, page, window),
            page,
        }
    }
}

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Windows longer than this collapse into first/last plus ellipses.
const MAX_FULL_WINDOW: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
}

/// An entry of the page navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PageMarker {
    Page(usize),
    Ellipsis(Ellipsis),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ellipsis {
    #[serde(rename = "...")]
    Gap,
}

impl PageMarker {
    pub const ELLIPSIS: PageMarker = PageMarker::Ellipsis(Ellipsis::Gap);
}

/// Slice one 1-indexed page out of `items`. Page 0 is read as page 1.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    let page = page.max(1);
    let start = (page - 1).saturating_mul(page_size);
    let end = start.saturating_add(page_size).min(items.len());

    let page_items = if start < items.len() {
        items[start..end].to_vec()
    } else {
        Vec::new()
    };

    Page {
        items: page_items,
        total: items.len(),
        page,
        page_size,
    }
}

pub fn total_pages(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// Compact navigation window around `current`.
pub fn page_numbers(current: usize, total: usize) -> Vec<PageMarker> {
    if total <= MAX_FULL_WINDOW {
        return (1..=total).map(PageMarker::Page).collect();
    }

    let mut pages = Vec::with_capacity(7);
    if current <= 3 {
        pages.extend((1..=4).map(PageMarker::Page));
        pages.push(PageMarker::ELLIPSIS);
        pages.push(PageMarker::Page(total));
    } else if current >= total - 2 {
        pages.push(PageMarker::Page(1));
        pages.push(PageMarker::ELLIPSIS);
        pages.extend((total - 3..=total).map(PageMarker::Page));
    } else {
        pages.push(PageMarker::Page(1));
        pages.push(PageMarker::ELLIPSIS);
        pages.extend((current - 1..=current + 1).map(PageMarker::Page));
        pages.push(PageMarker::ELLIPSIS);
        pages.push(PageMarker::Page(total));
    }
    pages
}

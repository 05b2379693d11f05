// Sliding-window page numbering and page slicing over a filtered list

/// Number of pages needed for `count` items. Zero items need zero pages.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1))
}

/// Page numbers to show as buttons, at most `max_visible` of them.
///
/// The window is centred on `current` and slides flush against either end
/// instead of shrinking. For even widths the extra page goes after `current`.
pub fn visible_pages(total: usize, current: usize, max_visible: usize) -> Vec<usize> {
    let max_visible = max_visible.max(1);
    if total <= max_visible {
        return (1..=total).collect();
    }

    let current = current.clamp(1, total);
    let mut start = current.saturating_sub((max_visible - 1) / 2).max(1);
    let mut end = start + max_visible - 1;
    if end > total {
        end = total;
        start = (end + 1).saturating_sub(max_visible).max(1);
    }
    (start..=end).collect()
}

/// The records of 1-based `page`. Pages past the end are empty.
pub fn slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let page_size = page_size.max(1);
    let start = page.saturating_sub(1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// What a page-button row needs: the buttons, and whether to show an ellipsis on either side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    pub pages: Vec<usize>,
    pub current: usize,
    pub total: usize,
    pub leading_ellipsis: bool,
    pub trailing_ellipsis: bool,
}

impl PageWindow {
    pub fn new(total: usize, current: usize, max_visible: usize) -> Self {
        let pages = visible_pages(total, current, max_visible);
        let leading_ellipsis = pages.first().is_some_and(|first| *first > 1);
        let trailing_ellipsis = pages.last().is_some_and(|last| *last < total);
        Self {
            pages,
            current,
            total,
            leading_ellipsis,
            trailing_ellipsis,
        }
    }

    pub fn has_previous(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self) -> bool {
        self.current < self.total
    }
}

/// Per-view pagination state.
///
/// Keeps `1 <= current_page <= max(1, total_pages)` as long as every change
/// to the filtered count goes through [`PageState::clamp`] or [`PageState::reset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    page_size: usize,
    current_page: usize,
    max_visible_buttons: usize,
}

impl PageState {
    pub fn new(page_size: usize, max_visible_buttons: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            current_page: 1,
            max_visible_buttons: max_visible_buttons.max(1),
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn max_visible_buttons(&self) -> usize {
        self.max_visible_buttons
    }

    pub fn total_pages(&self, filtered_count: usize) -> usize {
        total_pages(filtered_count, self.page_size)
    }

    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    pub fn clamp(&mut self, filtered_count: usize) {
        let last = self.total_pages(filtered_count).max(1);
        self.current_page = self.current_page.clamp(1, last);
    }

    /// Move to `page`, clamped into range. Returns the page actually selected.
    pub fn go_to(&mut self, page: usize, filtered_count: usize) -> usize {
        self.current_page = page;
        self.clamp(filtered_count);
        self.current_page
    }

    pub fn window(&self, filtered_count: usize) -> PageWindow {
        PageWindow::new(
            self.total_pages(filtered_count),
            self.current_page,
            self.max_visible_buttons,
        )
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        slice(items, self.current_page, self.page_size)
    }
}

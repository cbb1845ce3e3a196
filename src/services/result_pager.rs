//! Result Pager for the search page.
//!
//! Pure page arithmetic over a full result set: slicing one page, counting
//! pages, and computing the contiguous run of page numbers shown in the
//! pagination control.

/// Fixed number of results per page.
pub const PAGE_SIZE: usize = 10;

/// Number of page buttons shown in the pagination control.
pub const PAGE_WINDOW: usize = 5;

/// Returns the sub-slice for a 1-based `page`.
///
/// Performs no bounds correction: a page outside `[1, total_pages]`
/// (including page 0) yields an empty slice. Callers are expected to clamp
/// the page before calling.
pub fn paginate<T>(results: &[T], page: usize, page_size: usize) -> &[T] {
    let start = match page.checked_sub(1).and_then(|p| p.checked_mul(page_size)) {
        Some(start) if start < results.len() => start,
        _ => return &[],
    };
    let end = usize::min(results.len(), start.saturating_add(page_size));
    &results[start..end]
}

/// Number of pages needed for `len` results, at least 1 so the pagination
/// control always has something to render.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 || len == 0 {
        return 1;
    }
    (len + page_size - 1) / page_size
}

/// The contiguous ascending run of page numbers to display.
///
/// Centered on `current` when possible, clamped so the run never starts
/// below 1 nor extends past `total`, and shortened (not shifted out of
/// range) when `total < window`. The run always holds exactly
/// `min(total, window)` entries.
pub fn visible_page_window(current: usize, total: usize, window: usize) -> Vec<usize> {
    if window == 0 || total == 0 {
        return Vec::new();
    }
    let current = current.clamp(1, total);
    let half = (window - 1) / 2;
    let mut start = usize::max(1, current.saturating_sub(half));
    let end = usize::min(total, start + window - 1);
    // Pull the start back down to fill the window when the end was clamped
    if end + 1 - start < window {
        start = usize::max(1, end.saturating_sub(window - 1));
    }
    (start..=end).collect()
}

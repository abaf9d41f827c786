//! Compact page strip used by the pagination controls.

/// One element of the rendered page strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLabel {
    Page(u32),
    /// Gap between non-adjacent page numbers.
    Ellipsis,
}

/// Page labels for `total_pages` pages with the window centered on
/// `current_page` (1-based). Up to five pages every page is listed; beyond
/// that the strip keeps the first page, a one-page window around the current
/// page and the last page, with ellipses marking the gaps.
///
/// `current_page` outside `1..=total_pages` is not validated; the window
/// degenerates toward the nearest edge.
pub fn page_labels(current_page: u32, total_pages: u32) -> Vec<PageLabel> {
    if total_pages <= 5 {
        return (1..=total_pages).map(PageLabel::Page).collect();
    }

    let start = 2.max(current_page.saturating_sub(1));
    let end = (total_pages - 1).min(current_page.saturating_add(1));

    let mut labels = vec![PageLabel::Page(1)];
    if start > 2 {
        labels.push(PageLabel::Ellipsis);
    }
    for page in start..=end {
        labels.push(PageLabel::Page(page));
    }
    if end < total_pages - 1 {
        labels.push(PageLabel::Ellipsis);
    }
    labels.push(PageLabel::Page(total_pages));
    labels
}

#[cfg(test)]
mod tests {
    use super::PageLabel::{Ellipsis, Page};
    use super::*;

    #[test]
    fn test_no_pages_no_labels() {
        assert_eq!(page_labels(1, 0), vec![]);
    }

    #[test]
    fn test_five_or_fewer_lists_every_page() {
        assert_eq!(page_labels(1, 3), vec![Page(1), Page(2), Page(3)]);
        for current in 1..=5 {
            assert_eq!(
                page_labels(current, 5),
                vec![Page(1), Page(2), Page(3), Page(4), Page(5)],
                "current page {current} must not change the strip"
            );
        }
    }

    #[test]
    fn test_window_centered_in_the_middle() {
        assert_eq!(
            page_labels(5, 10),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn test_window_clamped_at_the_start() {
        // start = max(2, 0) = 2, end = min(9, 2) = 2: no leading ellipsis
        assert_eq!(page_labels(1, 10), vec![Page(1), Page(2), Ellipsis, Page(10)]);
    }

    #[test]
    fn test_window_clamped_at_the_end() {
        assert_eq!(
            page_labels(10, 10),
            vec![Page(1), Ellipsis, Page(9), Page(10)]
        );
    }

    #[test]
    fn test_first_and_last_always_present() {
        for total in 6..=30 {
            for current in 1..=total {
                let labels = page_labels(current, total);
                assert_eq!(labels.first(), Some(&Page(1)));
                assert_eq!(labels.last(), Some(&Page(total)));
            }
        }
    }

    #[test]
    fn test_ellipsis_exactly_at_gaps() {
        for total in 6..=30 {
            for current in 1..=total {
                let labels = page_labels(current, total);
                let start = 2.max(current.saturating_sub(1));
                let end = (total - 1).min(current + 1);
                assert_eq!(
                    labels.get(1) == Some(&Ellipsis),
                    start > 2,
                    "leading ellipsis mismatch at ({current}, {total})"
                );
                assert_eq!(
                    labels[labels.len() - 2] == Ellipsis,
                    end < total - 1,
                    "trailing ellipsis mismatch at ({current}, {total})"
                );
            }
        }
    }
}

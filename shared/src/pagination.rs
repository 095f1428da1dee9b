use std::ops::RangeInclusive;

/// Number of page buttons the pager shows.
pub const DEFAULT_WINDOW: usize = 5;

/// Pages shown by the pager: a window of at most `window` pages centered on
/// `current`, shifted at the edges so it stays full whenever
/// `total_pages >= window`.
///
/// `current` is clamped into `[1, total_pages]` and `total_pages` is treated as
/// at least 1.
pub fn page_window(current: usize, total_pages: usize, window: usize) -> RangeInclusive<usize> {
    let total = total_pages.max(1);
    let window = window.max(1);
    let current = current.clamp(1, total);

    let mut start = current.saturating_sub(window / 2).max(1);
    let end = total.min(start + window - 1);
    if end - start + 1 < window {
        start = (end + 1).saturating_sub(window).max(1);
    }
    start..=end
}

/// Page count for `total_items` split into pages of `page_size`, at least 1.
pub fn total_pages_for(total_items: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    total_items.div_ceil(page_size).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_matches_documented_examples() {
        assert_eq!(page_window(1, 20, 5), 1..=5);
        assert_eq!(page_window(10, 20, 5), 8..=12);
        assert_eq!(page_window(19, 20, 5), 16..=20);
        assert_eq!(page_window(20, 20, 5), 16..=20);
        assert_eq!(page_window(2, 20, 5), 1..=5);
    }

    #[test]
    fn window_shrinks_to_total_when_fewer_pages() {
        assert_eq!(page_window(1, 1, 5), 1..=1);
        assert_eq!(page_window(3, 3, 5), 1..=3);
        assert_eq!(page_window(2, 4, 5), 1..=4);
    }

    #[test]
    fn window_invariants_hold_for_every_page() {
        let w = DEFAULT_WINDOW;
        for total in 1..=40 {
            for p in 1..=total {
                let range = page_window(p, total, w);
                let (start, end) = (*range.start(), *range.end());
                assert_eq!(end - start + 1, w.min(total), "p={p} T={total}");
                assert!(start >= 1);
                assert!(end <= total);
                assert!(start <= p && p <= end, "p={p} T={total}");
            }
        }
    }

    #[test]
    fn window_stays_centered_away_from_edges() {
        for p in 3..=18 {
            let range = page_window(p, 20, 5);
            assert_eq!(*range.start(), p - 2);
            assert_eq!(*range.end(), p + 2);
        }
    }

    #[test]
    fn out_of_range_current_is_clamped() {
        assert_eq!(page_window(0, 20, 5), 1..=5);
        assert_eq!(page_window(99, 20, 5), 16..=20);
        assert_eq!(page_window(1, 0, 5), 1..=1);
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages_for(0, 10), 1);
        assert_eq!(total_pages_for(10, 10), 1);
        assert_eq!(total_pages_for(11, 10), 2);
        assert_eq!(total_pages_for(5, 0), 5);
    }
}

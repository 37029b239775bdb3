use serde::{Deserialize, Serialize};

pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// Page numbers to render as links: both edges plus a window around the
/// current page, with `None` marking a gap.
fn page_window(
    total_pages: usize,
    current_page: usize,
    left_edge: usize,
    left_current: usize,
    right_current: usize,
    right_edge: usize,
) -> Vec<Option<usize>> {
    if total_pages == 0 {
        return vec![];
    }

    let current_page = current_page.clamp(1, total_pages);
    let mut pages = Vec::new();

    let left_end = left_edge.saturating_add(1).min(total_pages + 1);
    pages.extend((1..left_end).map(Some));

    let window_start = left_end.max(current_page.saturating_sub(left_current));
    let window_end = current_page
        .saturating_add(right_current)
        .saturating_add(1)
        .min(total_pages + 1);
    if window_start > left_end {
        pages.push(None);
    }
    pages.extend((window_start..window_end).map(Some));

    let right_start = window_end.max(total_pages.saturating_sub(right_edge) + 1);
    if right_start > window_end {
        pages.push(None);
    }
    pages.extend((right_start..=total_pages).map(Some));

    pages
}

/// A bounded slice of results plus its position within the full filtered set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub data: Vec<T>,
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub total_pages: usize,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

impl<T> Page<T> {
    pub fn new(data: Vec<T>, total: usize, page: usize, limit: usize) -> Self {
        let total_pages = total.div_ceil(limit.max(1));

        Self {
            data,
            total,
            page,
            limit,
            total_pages,
            has_next_page: page < total_pages,
            has_previous_page: page > 1,
        }
    }

    /// Page links for templates, `None` is an ellipsis.
    pub fn links(&self) -> Vec<Option<usize>> {
        page_window(self.total_pages, self.page, 2, 2, 4, 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_of_five_items() {
        let page = Page::new(vec!["v0", "v1"], 5, 1, 2);

        assert_eq!(page.total_pages, 3);
        assert!(page.has_next_page);
        assert!(!page.has_previous_page);
    }

    #[test]
    fn last_and_out_of_range_pages() {
        let last = Page::new(vec!["v4"], 5, 3, 2);
        assert!(!last.has_next_page);
        assert!(last.has_previous_page);

        let beyond = Page::<&str>::new(vec![], 5, 9, 2);
        assert_eq!(beyond.total, 5);
        assert!(!beyond.has_next_page);
        assert!(beyond.has_previous_page);
    }

    #[test]
    fn empty_result_has_no_pages() {
        let page = Page::<&str>::new(vec![], 0, 1, 10);

        assert_eq!(page.total_pages, 0);
        assert!(!page.has_next_page);
        assert!(page.links().is_empty());
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_value(Page::new(vec![1], 1, 1, 10)).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "data": [1],
                "total": 1,
                "page": 1,
                "limit": 10,
                "totalPages": 1,
                "hasNextPage": false,
                "hasPreviousPage": false
            })
        );
    }

    #[test]
    fn links_collapse_distant_pages() {
        assert_eq!(
            page_window(20, 10, 2, 2, 4, 2),
            vec![
                Some(1),
                Some(2),
                None,
                Some(8),
                Some(9),
                Some(10),
                Some(11),
                Some(12),
                Some(13),
                Some(14),
                None,
                Some(19),
                Some(20),
            ]
        );
    }

    #[test]
    fn links_for_a_page_past_the_end_keep_both_edges() {
        assert_eq!(
            page_window(20, 100, 2, 2, 4, 2),
            vec![Some(1), Some(2), None, Some(18), Some(19), Some(20)]
        );
    }

    #[test]
    fn links_for_the_largest_page_number_do_not_overflow() {
        let page = Page::<&str>::new(vec![], 5, usize::MAX, 2);

        assert_eq!(page.links(), vec![Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn links_without_gaps_for_few_pages() {
        assert_eq!(
            page_window(4, 1, 2, 2, 4, 2),
            vec![Some(1), Some(2), Some(3), Some(4)]
        );
    }
}

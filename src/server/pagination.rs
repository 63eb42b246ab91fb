pub const QUESTIONS_PER_PAGE: usize = 10;

/// Returns the 1-based `page` of `items`. Pages before the first or past the end are empty.
pub fn paginate<T>(items: Vec<T>, page: i64) -> Vec<T> {
    if page < 1 {
        return Vec::new();
    }
    let start = usize::try_from(page - 1)
        .ok()
        .and_then(|p| p.checked_mul(QUESTIONS_PER_PAGE))
        .unwrap_or(usize::MAX);
    items
        .into_iter()
        .skip(start)
        .take(QUESTIONS_PER_PAGE)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_is_capped() {
        let items: Vec<i32> = (1..=25).collect();
        assert_eq!(paginate(items, 1), (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn last_page_is_partial() {
        let items: Vec<i32> = (1..=25).collect();
        assert_eq!(paginate(items, 3), vec![21, 22, 23, 24, 25]);
    }

    #[test]
    fn out_of_range_pages_are_empty() {
        let items: Vec<i32> = (1..=25).collect();
        assert!(paginate(items.clone(), 4).is_empty());
        assert!(paginate(items.clone(), 0).is_empty());
        assert!(paginate(items.clone(), -3).is_empty());
        assert!(paginate(items, i64::MAX).is_empty());
    }
}

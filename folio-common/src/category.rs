/// Sentinel category label meaning "no partition".
pub const ALL_CATEGORIES: &str = "All";

/// Anything that belongs to exactly one category label.
pub trait Categorized {
    fn category(&self) -> &str;
}

/// Filter items by the selected category, preserving source order.
///
/// `"All"` yields every item. A label that matches nothing yields an empty
/// list; that is a valid selection, not an error.
pub fn filter_by_category<'a, T: Categorized>(items: &'a [T], selected: &str) -> Vec<&'a T> {
    if selected == ALL_CATEGORIES {
        return items.iter().collect();
    }
    items
        .iter()
        .filter(|item| item.category() == selected)
        .collect()
}

/// Number of items a selection would show.
pub fn count_in_category<T: Categorized>(items: &[T], selected: &str) -> usize {
    if selected == ALL_CATEGORIES {
        return items.len();
    }
    items
        .iter()
        .filter(|item| item.category() == selected)
        .count()
}

/// Item count per option, aligned with `options`, for filter badges.
pub fn category_counts<T: Categorized>(items: &[T], options: &[String]) -> Vec<usize> {
    options
        .iter()
        .map(|option| count_in_category(items, option))
        .collect()
}

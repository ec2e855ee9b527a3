//! Ordering of title lists for display.

use shelf_models::BookTitle;

/// Three-way partitioning quicksort.
///
/// Partitions around the middle element into strictly-less, equal and
/// strictly-greater groups, sorts the outer two recursively and concatenates.
/// Each group keeps the relative order of its input, so the sort is stable.
/// Average O(n log n); O(n²) when pivots keep landing at an extreme.
///
/// Recursion depth is bounded by the number of distinct elements, which is
/// fine for the few hundred titles a shelf holds.
pub fn quick_sort<T: Ord + Clone>(items: &[T]) -> Vec<T> {
    if items.len() <= 1 {
        return items.to_vec();
    }
    let pivot = &items[items.len() / 2];
    let mut less = Vec::new();
    let mut equal = Vec::new();
    let mut greater = Vec::new();
    for item in items {
        match item.cmp(pivot) {
            std::cmp::Ordering::Less => less.push(item.clone()),
            std::cmp::Ordering::Equal => equal.push(item.clone()),
            std::cmp::Ordering::Greater => greater.push(item.clone()),
        }
    }
    let mut sorted = quick_sort(&less);
    sorted.extend(equal);
    sorted.extend(quick_sort(&greater));
    sorted
}

/// Titles in ascending lexicographic order of their normalized names.
pub fn sorted_view(titles: &[BookTitle]) -> Vec<BookTitle> {
    quick_sort(titles)
}

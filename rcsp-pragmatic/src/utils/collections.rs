#[cfg(test)]
#[path = "../../tests/unit/utils/collections_test.rs"]
mod collections_test;

use rustc_hash::FxHashSet;

/// Combines error results.
pub fn combine_error_results<T: Clone>(results: &[Result<(), T>]) -> Result<(), Vec<T>> {
    let errors = results.iter().cloned().flat_map(|result| result.err().into_iter()).collect::<Vec<T>>();

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Returns sorted duplicates or `None` if there are no duplicates.
pub fn get_duplicates<'a>(items: impl Iterator<Item = &'a String>) -> Option<Vec<String>> {
    let mut ids = FxHashSet::default();
    let duplicates = items.filter(|&id| !ids.insert(id)).cloned().collect::<FxHashSet<_>>();

    if duplicates.is_empty() {
        None
    } else {
        let mut duplicates = duplicates.into_iter().collect::<Vec<_>>();
        duplicates.sort();
        Some(duplicates)
    }
}

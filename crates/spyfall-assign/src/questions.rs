//! Helper-question selection.

use rand::Rng;

/// Picks `k` distinct questions uniformly at random and returns them in
/// pick order, each prefixed with its 1-based number (`"1. …"`).
///
/// Stateless: every call draws a fresh subset. Indices are drawn
/// retry-until-unique, which stays cheap for the intended use (three
/// picks from a 35-entry catalog).
///
/// # Panics
///
/// Panics if `k` exceeds the catalog size; that is a programming error,
/// not a runtime condition.
pub fn pick_questions<S: AsRef<str>>(
    catalog: &[S],
    k: usize,
    rng: &mut impl Rng,
) -> Vec<String> {
    assert!(
        k <= catalog.len(),
        "cannot pick {k} questions from a catalog of {}",
        catalog.len()
    );

    let mut used: Vec<usize> = Vec::with_capacity(k);
    let mut picked = Vec::with_capacity(k);

    for number in 1..=k {
        let mut index = rng.random_range(0..catalog.len());
        while used.contains(&index) {
            index = rng.random_range(0..catalog.len());
        }
        used.push(index);
        picked.push(format!("{number}. {}", catalog[index].as_ref()));
    }

    picked
}

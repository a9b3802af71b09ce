use rand::Rng;
use shelfcheck_core::MediaItem;

/// Uniformly sample up to `k` elements from `items` in one pass (Algorithm R).
///
/// After `i >= k` elements every element seen so far is held with
/// probability `k / i`. Order within the result is not meaningful.
pub fn pick_k<T, R: Rng>(items: impl IntoIterator<Item = T>, k: usize, rng: &mut R) -> Vec<T> {
    let mut held = Vec::new();
    if k == 0 {
        return held;
    }

    for (i, item) in items.into_iter().enumerate() {
        if held.len() < k {
            held.push(item);
            continue;
        }
        // Keep the (i+1)-th element with probability k/(i+1).
        let slot = rng.random_range(0..=i);
        if slot < k {
            held[slot] = item;
        }
    }
    held
}

/// Sample `k` items already in their domain's desired format.
pub fn highlights<'a, I: MediaItem, R: Rng>(items: &'a [I], k: usize, rng: &mut R) -> Vec<&'a I> {
    pick_k(items.iter().filter(|item| item.is_in_desired_format()), k, rng)
}

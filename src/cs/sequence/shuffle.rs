use rand::rngs::ThreadRng;
use rand::Rng;

/// Returns a lazy random permutation of `items` (Fisher-Yates, one draw per yielded element).
///
/// The input slice is left untouched; the iterator shuffles a vector of references.
pub fn shuffle<T, R: Rng>(items: &[T], rng: R) -> Shuffle<'_, T, R> {
    Shuffle {
        remaining: items.iter().collect(),
        rng,
    }
}

/// [`shuffle`] driven by the thread-local generator.
pub fn shuffle_thread_rng<T>(items: &[T]) -> Shuffle<'_, T, ThreadRng> {
    shuffle(items, rand::thread_rng())
}

#[derive(Debug)]
pub struct Shuffle<'a, T, R> {
    remaining: Vec<&'a T>,
    rng: R,
}

impl<'a, T, R: Rng> Iterator for Shuffle<'a, T, R> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining.is_empty() {
            return None;
        }
        let pick = self.rng.gen_range(0..self.remaining.len());
        // The last unpicked element takes the vacated slot.
        Some(self.remaining.swap_remove(pick))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining.len(), Some(self.remaining.len()))
    }
}

impl<T, R: Rng> ExactSizeIterator for Shuffle<'_, T, R> {}

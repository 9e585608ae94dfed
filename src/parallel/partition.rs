use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

/// How a work list is divided between workers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PartitionStrategy {
    /// Every chunk takes `ceil(len / workers)` items until the list runs out.
    /// Front-loaded: trailing chunks may be short or empty.
    #[default]
    Contiguous,
    /// Chunk sizes differ by at most one item.
    Balanced,
}

impl std::fmt::Display for PartitionStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PartitionStrategy::Contiguous => write!(f, "contiguous"),
            PartitionStrategy::Balanced => write!(f, "balanced"),
        }
    }
}

/// Split `items` into exactly `workers` contiguous slices
///
/// The slices concatenate back to `items` in order, so every item lands in
/// exactly one chunk. Chunks are borrowed views; nothing is copied.
///
/// # Examples
/// ```rust
/// use std::num::NonZeroUsize;
/// use wordhunt::parallel::{partition, PartitionStrategy};
///
/// let files = [1, 2, 3, 4, 5];
/// let workers = NonZeroUsize::new(4).unwrap();
///
/// let chunks = partition(&files, workers, PartitionStrategy::Contiguous);
/// assert_eq!(chunks, vec![&[1, 2][..], &[3, 4], &[5], &[]]);
///
/// let chunks = partition(&files, workers, PartitionStrategy::Balanced);
/// assert_eq!(chunks, vec![&[1, 2][..], &[3], &[4], &[5]]);
/// ```
pub fn partition<T>(items: &[T], workers: NonZeroUsize, strategy: PartitionStrategy) -> Vec<&[T]> {
    let workers = workers.get();
    let len = items.len();
    let mut chunks = Vec::with_capacity(workers);
    let mut start = 0;

    for index in 0..workers {
        let size = match strategy {
            PartitionStrategy::Contiguous => len.div_ceil(workers),
            PartitionStrategy::Balanced => len / workers + usize::from(index < len % workers),
        };
        let end = std::cmp::min(start + size, len);
        chunks.push(&items[start..end]);
        start = end;
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn workers(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn test_contiguous_front_loads_chunks() {
        let items: Vec<usize> = (0..10).collect();
        let chunks = partition(&items, workers(4), PartitionStrategy::Contiguous);
        let sizes: Vec<usize> = chunks.iter().map(|c| c.len()).collect();
        assert_eq!(sizes, vec![3, 3, 3, 1]);
    }

    #[test]
    fn test_contiguous_leaves_trailing_chunks_empty() {
        // ceil(5 / 4) = 2, so the fourth worker gets nothing
        let items = ["a", "b", "c", "d", "e"];
        let chunks = partition(&items, workers(4), PartitionStrategy::Contiguous);
        assert_eq!(chunks.len(), 4);
        assert!(chunks[3].is_empty());
    }

    #[test]
    fn test_balanced_spreads_remainder() {
        let items: Vec<usize> = (0..10).collect();
        let chunks = partition(&items, workers(4), PartitionStrategy::Balanced);
        let sizes: Vec<usize> = chunks.iter().map(|c| c.len()).collect();
        assert_eq!(sizes, vec![3, 3, 2, 2]);
    }

    #[test]
    fn test_single_worker_gets_everything() {
        let items = [1, 2, 3];
        for strategy in [PartitionStrategy::Contiguous, PartitionStrategy::Balanced] {
            let chunks = partition(&items, workers(1), strategy);
            assert_eq!(chunks, vec![&items[..]]);
        }
    }

    #[test]
    fn test_more_workers_than_items() {
        let items = [7];
        let chunks = partition(&items, workers(3), PartitionStrategy::Contiguous);
        assert_eq!(chunks, vec![&[7][..], &[], &[]]);
    }

    #[test]
    fn test_empty_input() {
        let items: [u8; 0] = [];
        let chunks = partition(&items, workers(2), PartitionStrategy::Balanced);
        assert_eq!(chunks.len(), 2);
        assert!(chunks.iter().all(|c| c.is_empty()));
    }

    #[test]
    fn test_strategy_parses_from_config_name() {
        #[derive(Deserialize)]
        struct Holder {
            partition: PartitionStrategy,
        }
        let holder: Holder = toml::from_str("partition = \"balanced\"").unwrap();
        assert_eq!(holder.partition, PartitionStrategy::Balanced);
        assert_eq!(PartitionStrategy::Contiguous.to_string(), "contiguous");
    }

    fn any_strategy() -> impl Strategy<Value = PartitionStrategy> {
        prop_oneof![
            Just(PartitionStrategy::Contiguous),
            Just(PartitionStrategy::Balanced)
        ]
    }

    proptest! {
        #[test]
        fn chunks_concatenate_to_input(
            items in proptest::collection::vec(any::<u16>(), 0..64),
            n in 1usize..80,
            strategy in any_strategy(),
        ) {
            let chunks = partition(&items, workers(n), strategy);
            prop_assert_eq!(chunks.len(), n);
            let joined: Vec<u16> = chunks.concat();
            prop_assert_eq!(joined, items);
        }

        #[test]
        fn balanced_sizes_differ_by_at_most_one(
            len in 0usize..200,
            n in 1usize..40,
        ) {
            let items: Vec<usize> = (0..len).collect();
            let chunks = partition(&items, workers(n), PartitionStrategy::Balanced);
            let min = chunks.iter().map(|c| c.len()).min().unwrap();
            let max = chunks.iter().map(|c| c.len()).max().unwrap();
            prop_assert!(max - min <= 1);
        }

        #[test]
        fn contiguous_chunks_never_exceed_ceiling(
            len in 0usize..200,
            n in 1usize..40,
        ) {
            let items: Vec<usize> = (0..len).collect();
            let ceiling = len.div_ceil(n);
            let chunks = partition(&items, workers(n), PartitionStrategy::Contiguous);
            prop_assert!(chunks.iter().all(|c| c.len() <= ceiling));
        }
    }
}

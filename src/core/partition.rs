//! Contiguous index-range partitioning for parallel upload
//!
//! Splits the document sequence into one contiguous, equal-sized chunk per
//! worker. Chunk size is the integer quotient `len / workers`, so a tail of
//! `len % workers` documents falls outside every worker's window. That tail
//! is intentionally not uploaded; it is counted here and reported by the
//! dispatcher so the truncation is visible rather than silent.

/// A contiguous half-open index range `[start, start + len)` owned by one worker
///
/// Partitions are disjoint by construction; workers never share an index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partition {
    /// Worker number, 0-based (used for labeling progress and reports)
    pub worker: usize,

    /// First index of the range
    pub start: usize,

    /// Number of documents in the range
    pub len: usize,
}

impl Partition {
    /// One past the last index of the range
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

/// The full partitioning of a document sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionPlan {
    /// Per-worker partitions, ordered by worker number
    pub partitions: Vec<Partition>,

    /// Chunk size shared by every partition
    pub chunk_size: usize,

    /// Number of trailing documents outside every partition (never uploaded)
    pub truncated: usize,
}

/// Partition `len` documents across `workers` parallel workers
///
/// Each worker `k` receives the range `[k * C, (k + 1) * C)` where
/// `C = len / workers`. The `len % workers` trailing documents are excluded
/// and reported via [`PartitionPlan::truncated`].
///
/// # Degenerate inputs
///
/// - `len == 0` produces an empty plan.
/// - `len < workers` (chunk size would be zero) falls back to one
///   single-document partition per row, with nothing truncated.
///
/// # Panics
///
/// Panics if `workers` is zero; the configuration layer guarantees a
/// positive worker count.
pub fn partition_sequence(len: usize, workers: usize) -> PartitionPlan {
    assert!(workers > 0, "worker count must be positive");

    if len == 0 {
        return PartitionPlan {
            partitions: Vec::new(),
            chunk_size: 0,
            truncated: 0,
        };
    }

    let chunk_size = len / workers;

    // Fewer documents than workers: one document per worker, no tail.
    if chunk_size == 0 {
        let partitions = (0..len)
            .map(|k| Partition {
                worker: k,
                start: k,
                len: 1,
            })
            .collect();
        return PartitionPlan {
            partitions,
            chunk_size: 1,
            truncated: 0,
        };
    }

    let partitions = (0..workers)
        .map(|k| Partition {
            worker: k,
            start: k * chunk_size,
            len: chunk_size,
        })
        .collect();

    PartitionPlan {
        partitions,
        chunk_size,
        truncated: len - workers * chunk_size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::even_split(100, 4, 25, 0)]
    #[case::tail_dropped(10, 3, 3, 1)]
    #[case::fewer_than_workers(29, 30, 1, 0)] // degenerate fallback, nothing truncated
    #[case::single_worker(7, 1, 7, 0)]
    #[case::production_defaults(1_000_000, 30, 33_333, 10)]
    fn test_chunk_size_and_truncation(
        #[case] len: usize,
        #[case] workers: usize,
        #[case] expected_chunk: usize,
        #[case] expected_truncated: usize,
    ) {
        let plan = partition_sequence(len, workers);
        assert_eq!(plan.chunk_size, expected_chunk);
        assert_eq!(plan.truncated, expected_truncated);
    }

    #[rstest]
    #[case(100, 4)]
    #[case(10, 3)]
    #[case(1, 1)]
    #[case(97, 10)]
    fn test_partitions_are_contiguous_and_disjoint(#[case] len: usize, #[case] workers: usize) {
        let plan = partition_sequence(len, workers);

        let mut next_start = 0;
        for (k, partition) in plan.partitions.iter().enumerate() {
            assert_eq!(partition.worker, k);
            assert_eq!(partition.start, next_start);
            assert_eq!(partition.len, plan.chunk_size);
            next_start = partition.end();
        }

        // Covered indices plus the truncated tail account for every document.
        assert_eq!(next_start + plan.truncated, len);
    }

    #[test]
    fn test_attempted_count_is_workers_times_floor() {
        // 10 documents over 3 workers: 3 * (10 / 3) = 9 attempted, 1 dropped.
        let plan = partition_sequence(10, 3);
        let covered: usize = plan.partitions.iter().map(|p| p.len).sum();
        assert_eq!(covered, 9);
        assert_eq!(plan.truncated, 1);
    }

    #[test]
    fn test_empty_sequence_yields_no_partitions() {
        let plan = partition_sequence(0, 30);
        assert!(plan.partitions.is_empty());
        assert_eq!(plan.truncated, 0);
    }

    #[test]
    fn test_fewer_documents_than_workers_falls_back_to_singletons() {
        let plan = partition_sequence(4, 30);
        assert_eq!(plan.partitions.len(), 4);
        for (k, partition) in plan.partitions.iter().enumerate() {
            assert_eq!(*partition, Partition { worker: k, start: k, len: 1 });
        }
        assert_eq!(plan.truncated, 0);
    }

    #[test]
    #[should_panic(expected = "worker count must be positive")]
    fn test_zero_workers_panics() {
        partition_sequence(10, 0);
    }
}

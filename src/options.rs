/// Number of sources up to which `Selection::Auto` keeps the linear scan.
pub const DEFAULT_HEAP_THRESHOLD: usize = 8;

/// How the composite finds the smallest buffered head on each step.
///
/// Trade-off: per-step cost vs constant overhead.
///   - Linear: O(N) compare per step, no extra structure. Wins for small N.
///   - Heap: O(log N) per step, pays for a binary heap. Wins for wide merges.
///
/// Both report the same elements and the same error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// Scan every buffered head.
    Linear,
    /// Keep buffered heads in a min-heap keyed by (head, slot index).
    Heap,
    /// Linear up to the heap threshold, heap above it.
    #[default]
    Auto,
}

/// Tuning knobs for a [`CompositeIterator`](crate::CompositeIterator).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeOptions {
    pub selection: Selection,
    pub heap_threshold: usize,
}

impl Default for MergeOptions {
    fn default() -> Self {
        MergeOptions {
            selection: Selection::Auto,
            heap_threshold: DEFAULT_HEAP_THRESHOLD,
        }
    }
}

impl MergeOptions {
    /// Set the selection strategy.
    pub fn selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    /// Set the source count above which `Selection::Auto` switches to a heap.
    pub fn heap_threshold(mut self, threshold: usize) -> Self {
        self.heap_threshold = threshold;
        self
    }

    /// Resolve `Auto` against the actual number of sources.
    pub(crate) fn use_heap(&self, num_sources: usize) -> bool {
        match self.selection {
            Selection::Linear => false,
            Selection::Heap => true,
            Selection::Auto => num_sources > self.heap_threshold,
        }
    }
}

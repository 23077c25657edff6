// stats.rs: Structural and usage statistics.
//
// The structural half is collected by walking the tree; the usage half is
// a set of relaxed counters the trie bumps as it runs, so shared readers
// can record lookups without synchronization.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::node::Node;

/// Mutation- and lookup-side counters.
#[derive(Debug, Default)]
pub(crate) struct UseStats {
    /// Longest-prefix lookups performed.
    pub gets: AtomicU64,
    /// Chopped-index probes taken after a miss on the exact descent path.
    pub backtracks: AtomicU64,
    /// Rebalance passes aborted by slot-budget exhaustion.
    pub resize_skipped: AtomicU64,
}

/// A point-in-time summary of the trie's shape and activity.
///
/// `pointers` counts every child slot held by internal nodes, occupied or
/// not; together with `null_pointers` and the depth figures it is the
/// footprint a resize-heuristic change shows up in.
#[derive(Debug, Clone, PartialEq)]
pub struct TrieStats {
    /// Stored routes (prefix/length pairs).
    pub routes: usize,
    /// Leaf nodes.
    pub leaves: usize,
    /// Internal nodes.
    pub internal_nodes: usize,
    /// Total child slots across all internal nodes.
    pub pointers: usize,
    /// Unoccupied child slots.
    pub null_pointers: usize,
    /// Internal nodes above the deepest leaf.
    pub max_depth: usize,
    /// Mean number of internal nodes above a leaf.
    pub avg_depth: f64,
    /// `(bits, count)` histogram of internal node sizes, ascending.
    pub node_sizes: Vec<(u8, usize)>,
    /// Longest-prefix lookups performed so far.
    pub gets: u64,
    /// Chopped-index probes performed so far.
    pub backtracks: u64,
    /// Rebalance passes aborted on the slot budget so far.
    pub resize_skipped: u64,
}

impl TrieStats {
    pub(crate) fn collect<V>(root: Option<&Node<V>>, use_stats: &UseStats) -> TrieStats {
        let mut stats = TrieStats {
            routes: 0,
            leaves: 0,
            internal_nodes: 0,
            pointers: 0,
            null_pointers: 0,
            max_depth: 0,
            avg_depth: 0.0,
            node_sizes: Vec::new(),
            gets: use_stats.gets.load(Ordering::Relaxed),
            backtracks: use_stats.backtracks.load(Ordering::Relaxed),
            resize_skipped: use_stats.resize_skipped.load(Ordering::Relaxed),
        };
        let mut size_histogram = [0usize; 33];
        let mut depth_total = 0usize;
        if let Some(node) = root {
            walk(node, 0, &mut stats, &mut size_histogram, &mut depth_total);
        }
        if stats.leaves > 0 {
            stats.avg_depth = depth_total as f64 / stats.leaves as f64;
        }
        stats.node_sizes = size_histogram
            .iter()
            .enumerate()
            .filter(|(_, &count)| count > 0)
            .map(|(bits, &count)| (bits as u8, count))
            .collect();
        stats
    }
}

fn walk<V>(
    node: &Node<V>,
    depth: usize,
    stats: &mut TrieStats,
    size_histogram: &mut [usize; 33],
    depth_total: &mut usize,
) {
    match node {
        Node::Leaf(leaf) => {
            stats.leaves += 1;
            stats.routes += leaf.entries.len();
            stats.max_depth = stats.max_depth.max(depth);
            *depth_total += depth;
        }
        Node::Internal(tn) => {
            stats.internal_nodes += 1;
            stats.pointers += tn.child_count();
            stats.null_pointers += tn.empty_children;
            size_histogram[tn.bits as usize] += 1;
            for child in tn.children.iter().flatten() {
                walk(child, depth + 1, stats, size_histogram, depth_total);
            }
        }
    }
}

impl fmt::Display for TrieStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Routes:         {}", self.routes)?;
        writeln!(f, "Aver depth:     {:.2}", self.avg_depth)?;
        writeln!(f, "Max depth:      {}", self.max_depth)?;
        writeln!(f, "Leaves:         {}", self.leaves)?;
        writeln!(f, "Internal nodes: {}", self.internal_nodes)?;
        if !self.node_sizes.is_empty() {
            write!(f, " ")?;
            for (bits, count) in &self.node_sizes {
                write!(f, " {bits}: {count}")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "Pointers:       {}", self.pointers)?;
        writeln!(f, "Null ptrs:      {}", self.null_pointers)?;
        writeln!(f, "Lookups:        {}", self.gets)?;
        writeln!(f, "Backtracks:     {}", self.backtracks)?;
        write!(f, "Skipped resizes: {}", self.resize_skipped)
    }
}

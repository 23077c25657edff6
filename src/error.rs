use thiserror::Error;

/// Errors reported by trie mutations.
///
/// Lookups and removals never fail; only operations that must allocate
/// child-slot arrays can, and only when a slot budget is configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TrieError {
    /// A structural transformation needed more child slots than the
    /// configured budget allows. The trie is left in its last consistent
    /// state.
    #[error("child slot budget exhausted: {requested} slots requested, {available} available")]
    SlotsExhausted { requested: usize, available: usize },

    /// A prefix length beyond the 32-bit IPv4 key space was supplied.
    #[error("prefix length {0} exceeds the 32-bit key space")]
    PrefixTooLong(u8),
}

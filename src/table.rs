use crate::config::TrieConfig;
use crate::error::TrieError;
use crate::stats::TrieStats;
use crate::trie::LpcTrie;

use ipnet::Ipv4Net;
use std::net::Ipv4Addr;

/// An IPv4 routing table: `Ipv4Net` prefixes mapped to arbitrary route
/// data, answered by longest-prefix match.
///
/// Networks are canonicalized on the way in, so `192.168.1.42/24` and
/// `192.168.1.0/24` name the same route.
#[derive(Debug)]
pub struct RouteTable<V> {
    trie: LpcTrie<V>,
}

impl<V> RouteTable<V> {
    pub fn new() -> Self {
        RouteTable {
            trie: LpcTrie::new(),
        }
    }

    pub fn with_config(config: TrieConfig) -> Self {
        RouteTable {
            trie: LpcTrie::with_config(config),
        }
    }

    pub fn config(&self) -> &TrieConfig {
        self.trie.config()
    }

    /// Number of stored routes.
    pub fn len(&self) -> usize {
        self.trie.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    /// Insert a route, returning the previous value for the same prefix.
    pub fn insert(&mut self, network: Ipv4Net, value: V) -> Result<Option<V>, TrieError> {
        let canonical = network.trunc();
        self.trie
            .insert(u32::from(canonical.addr()), canonical.prefix_len(), value)
    }

    /// Remove a route, returning its value.
    pub fn remove(&mut self, network: Ipv4Net) -> Option<V> {
        let canonical = network.trunc();
        self.trie
            .remove(u32::from(canonical.addr()), canonical.prefix_len())
    }

    /// The most specific route covering `addr`, if any.
    pub fn lookup(&self, addr: Ipv4Addr) -> Option<(Ipv4Net, &V)> {
        self.trie
            .lookup(u32::from(addr))
            .map(|(key, plen, value)| (Ipv4Net::new(Ipv4Addr::from(key), plen).unwrap(), value))
    }

    /// The value stored for exactly this network, if any.
    pub fn exact(&self, network: Ipv4Net) -> Option<&V> {
        let canonical = network.trunc();
        self.trie
            .exact_match(u32::from(canonical.addr()), canonical.prefix_len())
    }

    /// Iterate over all routes, ascending by network address.
    pub fn iter(&self) -> impl Iterator<Item = (Ipv4Net, &V)> {
        self.trie
            .iter()
            .map(|(key, plen, value)| (Ipv4Net::new(Ipv4Addr::from(key), plen).unwrap(), value))
    }

    /// All stored networks.
    pub fn networks(&self) -> Vec<Ipv4Net> {
        self.iter().map(|(network, _)| network).collect()
    }

    /// Snapshot the trie's structural and usage statistics.
    pub fn stats(&self) -> TrieStats {
        self.trie.stats()
    }
}

impl<V> Default for RouteTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

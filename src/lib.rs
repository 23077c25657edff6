//! # fibtrie
//!
//! An IPv4 longest-prefix-match routing table built on a level- and
//! path-compressed trie.
//!
//! Internal nodes hold power-of-two child arrays that adapt to the route
//! set: a well-filled node is doubled to cut lookup depth, a sparse one is
//! collapsed to half size to bound memory, both driven by a pair of
//! fill-ratio predicates evaluated after every mutation under a fixed work
//! quota. The thresholds are explicit configuration ([`TrieConfig`]), so
//! the same route set can be shaped wide-and-flat or narrow-and-deep.
//!
//! ## Example
//!
//! ```rust
//! use fibtrie::RouteTable;
//!
//! let mut table: RouteTable<u32> = RouteTable::new();
//! table.insert("10.0.0.0/8".parse().unwrap(), 1).unwrap();
//! table.insert("10.1.0.0/16".parse().unwrap(), 2).unwrap();
//!
//! let (network, value) = table.lookup("10.1.2.3".parse().unwrap()).unwrap();
//! assert_eq!(network.to_string(), "10.1.0.0/16");
//! assert_eq!(*value, 2);
//! ```

pub mod config;
pub mod error;
mod node;
mod resize;
pub mod stats;
pub mod table;
pub mod trie;
mod utils;


pub use config::TrieConfig;
pub use error::TrieError;
pub use stats::TrieStats;
pub use table::RouteTable;
pub use trie::LpcTrie;

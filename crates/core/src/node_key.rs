//! Node identity within a multi-stage flow dataset
//!
//! A flow dataset (for example the data behind a Sankey diagram) arranges
//! nodes into ordered stages. The same identifier may appear in several
//! stages, so a node is addressed by the pair `(stage, node)`.
//!
//! ## Contract
//!
//! - The identifier is always present; `try_new` rejects `None`
//! - Two keys are equal iff their stages and identifiers are equal
//! - Equal keys hash identically, both through `Hash` and `hash_code()`
//! - Keys are immutable once built
//!
//! Keys do not implement `Ord`. Datasets that need a stable
//! enumeration order sort by the identifier, which is required to be `Ord`.

use crate::error::{Error, Result};
use crate::hash::{mix, stable_hash};
use crate::traits::NodeIdentifier;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;

const HASH_SEED: i32 = 3;
const HASH_PRIME: i32 = 53;

/// Key identifying a node in a flow dataset
///
/// # Example
///
/// ```
/// use flowkey_core::NodeKey;
/// use std::collections::HashMap;
///
/// let mut totals = HashMap::new();
/// totals.insert(NodeKey::new(0, "A"), 5.0);
///
/// assert_eq!(totals.get(&NodeKey::new(0, "A")), Some(&5.0));
/// assert_eq!(totals.get(&NodeKey::new(1, "A")), None);
/// assert_eq!(NodeKey::new(2, "X").to_string(), "[NodeKey: 2, X]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeKey<K> {
    stage: i32,
    node: K,
}

impl<K: NodeIdentifier> NodeKey<K> {
    /// Create a key for `node` in `stage`
    ///
    /// Any stage is accepted, including negative ones.
    pub fn new(stage: i32, node: K) -> Self {
        NodeKey { stage, node }
    }

    /// Create a key from an identifier that may be absent
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` for parameter `node` if it is `None`.
    pub fn try_new(stage: i32, node: Option<K>) -> Result<Self> {
        match node {
            Some(node) => Ok(Self::new(stage, node)),
            None => {
                tracing::debug!(stage, param = "node", "rejected node key");
                Err(Error::null_not_permitted("node"))
            }
        }
    }
}

impl<K> NodeKey<K> {
    /// Stage index of the node
    #[inline]
    pub fn stage(&self) -> i32 {
        self.stage
    }

    /// Identifier of the node
    #[inline]
    pub fn node(&self) -> &K {
        &self.node
    }

    /// Consume the key and return the identifier
    pub fn into_node(self) -> K {
        self.node
    }

    /// Consume the key and return `(stage, node)`
    pub fn into_parts(self) -> (i32, K) {
        (self.stage, self.node)
    }

    /// A key for the same node placed in another stage
    pub fn with_stage(&self, stage: i32) -> Self
    where
        K: NodeIdentifier + Clone,
    {
        NodeKey::new(stage, self.node.clone())
    }

    /// 32-bit hash that stays fixed for the life of the program
    ///
    /// Computed as `(3 * 53 + stage) * 53 + stable_hash(node)` with
    /// wrapping arithmetic.
    pub fn hash_code(&self) -> i32
    where
        K: Hash,
    {
        let h = mix(HASH_SEED, HASH_PRIME, self.stage);
        mix(h, HASH_PRIME, stable_hash(&self.node))
    }
}

impl<K: NodeIdentifier> From<(i32, K)> for NodeKey<K> {
    fn from((stage, node): (i32, K)) -> Self {
        NodeKey::new(stage, node)
    }
}

impl<K: fmt::Display> fmt::Display for NodeKey<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[NodeKey: {}, {}]", self.stage, self.node)
    }
}

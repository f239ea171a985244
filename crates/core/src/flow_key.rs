//! Flow identity between adjacent stages
//!
//! A flow connects a source node in stage `s` to a destination node in stage
//! `s + 1`. Datasets index flow weights by `FlowKey` the way they index node
//! properties by [`NodeKey`].

use crate::error::{Error, Result};
use crate::hash::{mix, stable_hash};
use crate::node_key::NodeKey;
use crate::traits::NodeIdentifier;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;

const HASH_SEED: i32 = 7;
const HASH_PRIME: i32 = 89;

/// Key identifying a flow from one stage to the next
///
/// # Example
///
/// ```
/// use flowkey_core::{FlowKey, NodeKey};
///
/// let flow = FlowKey::new(0, "Coal", "Electricity");
/// assert_eq!(flow.source_key(), NodeKey::new(0, "Coal"));
/// assert_eq!(flow.destination_key(), NodeKey::new(1, "Electricity"));
/// assert_eq!(flow.to_string(), "[FlowKey: 0, Coal -> Electricity]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FlowKey<K> {
    stage: i32,
    source: K,
    destination: K,
}

impl<K: NodeIdentifier> FlowKey<K> {
    /// Create a key for the flow `source -> destination` leaving `stage`
    pub fn new(stage: i32, source: K, destination: K) -> Self {
        FlowKey {
            stage,
            source,
            destination,
        }
    }

    /// Create a key from endpoints that may be absent
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` naming the first missing endpoint,
    /// `source` before `destination`.
    pub fn try_new(stage: i32, source: Option<K>, destination: Option<K>) -> Result<Self> {
        let source = source.ok_or_else(|| {
            tracing::debug!(stage, param = "source", "rejected flow key");
            Error::null_not_permitted("source")
        })?;
        let destination = destination.ok_or_else(|| {
            tracing::debug!(stage, param = "destination", "rejected flow key");
            Error::null_not_permitted("destination")
        })?;
        Ok(Self::new(stage, source, destination))
    }
}

impl<K> FlowKey<K> {
    /// Stage of the source node
    #[inline]
    pub fn stage(&self) -> i32 {
        self.stage
    }

    /// Identifier of the source node
    #[inline]
    pub fn source(&self) -> &K {
        &self.source
    }

    /// Identifier of the destination node
    #[inline]
    pub fn destination(&self) -> &K {
        &self.destination
    }

    /// Key of the source node, in `stage`
    pub fn source_key(&self) -> NodeKey<K>
    where
        K: NodeIdentifier + Clone,
    {
        NodeKey::new(self.stage, self.source.clone())
    }

    /// Key of the destination node, in `stage + 1`
    pub fn destination_key(&self) -> NodeKey<K>
    where
        K: NodeIdentifier + Clone,
    {
        NodeKey::new(self.stage.wrapping_add(1), self.destination.clone())
    }

    /// 32-bit hash that stays fixed for the life of the program
    pub fn hash_code(&self) -> i32
    where
        K: Hash,
    {
        let h = mix(HASH_SEED, HASH_PRIME, self.stage);
        let h = mix(h, HASH_PRIME, stable_hash(&self.source));
        mix(h, HASH_PRIME, stable_hash(&self.destination))
    }
}

impl<K: fmt::Display> fmt::Display for FlowKey<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[FlowKey: {}, {} -> {}]",
            self.stage, self.source, self.destination
        )
    }
}

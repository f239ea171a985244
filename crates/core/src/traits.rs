//! Capability bounds for node identifiers

use std::hash::Hash;

/// Capabilities required of a node identifier
///
/// Keys only use equality and hashing, but identifiers must also be totally
/// ordered so datasets can enumerate nodes in a deterministic order.
/// A key's `Display` text additionally requires `K: Display`.
///
/// Implemented automatically for every type with these bounds:
///
/// ```
/// use flowkey_core::NodeIdentifier;
///
/// fn accepts<K: NodeIdentifier>(_: K) {}
/// accepts("A");
/// accepts(String::from("A"));
/// accepts(7u32);
/// accepts((1u32, 2u32));
/// ```
///
/// Identifiers must not change while they are part of a key. A `K` with
/// interior mutability that alters its hash or equality after insertion into
/// a map makes the entry unreachable.
pub trait NodeIdentifier: Ord + Hash {}

impl<T: Ord + Hash + ?Sized> NodeIdentifier for T {}

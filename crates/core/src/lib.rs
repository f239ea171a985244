//! Core types for flowkey
//!
//! This crate defines the identity types shared by multi-stage flow datasets:
//! - NodeKey: a node addressed by stage index and identifier
//! - FlowKey: a flow from a node in one stage to a node in the next
//! - NodeIdentifier: capability bound on identifier types
//! - hash: deterministic 32-bit hash codes
//! - Error: error type for key construction

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod flow_key;
pub mod hash;
pub mod node_key;
pub mod traits;

pub use error::{Error, Result};
pub use flow_key::FlowKey;
pub use node_key::NodeKey;
pub use traits::NodeIdentifier;

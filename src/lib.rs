//! flowkey - identity keys for multi-stage flow datasets
//!
//! Flow datasets (the data behind Sankey diagrams) group nodes into ordered
//! stages and connect nodes in adjacent stages with weighted flows. This crate
//! provides the keys those datasets index by.
//!
//! # Quick Start
//!
//! ```
//! use flowkey::{FlowKey, NodeKey};
//! use std::collections::HashMap;
//!
//! let mut weights = HashMap::new();
//! weights.insert(FlowKey::new(0, "Coal", "Electricity"), 12.5);
//!
//! let flow = FlowKey::new(0, "Coal", "Electricity");
//! assert_eq!(weights[&flow], 12.5);
//! assert_eq!(flow.destination_key(), NodeKey::new(1, "Electricity"));
//! ```
//!
//! Construction from optional input fails instead of producing a partial key:
//!
//! ```
//! use flowkey::{Error, NodeKey};
//!
//! let err = NodeKey::<String>::try_new(0, None).unwrap_err();
//! assert!(matches!(err, Error::InvalidArgument { param: "node", .. }));
//! ```

// Re-export the public API from flowkey-core
pub use flowkey_core::*;

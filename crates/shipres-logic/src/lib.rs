//! Vessel resource aggregation for the ShipRes scripting API.
//!
//! Scripts ask a vessel for its resources and get back one aggregate per
//! resource kind, summed across every part that stores it. Each aggregate is
//! a script-visible structure whose attributes ("suffixes") are read by name.
//! Everything here is plain data in, plain data out: no engine, no physics.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`aggregate`] | Per-kind resource totals and the batch grouping pass |
//! | [`definition`] | Resource kinds (name, density) and the stock library |
//! | [`error`] | Error type for suffix dispatch and snapshot loading |
//! | [`part`] | Parts, their resource entries, and the script-facing part wrapper |
//! | [`shared`] | Context handle threaded into part wrappers |
//! | [`suffix`] | Script values and name-addressable read-only suffixes |
//! | [`vessel`] | Vessel parts collection and JSON snapshots |

pub mod aggregate;
pub mod definition;
pub mod error;
pub mod part;
pub mod shared;
pub mod suffix;
pub mod vessel;

pub use aggregate::{from_vessel, parts_to_list, prospect_resources, AggregateResource};
pub use definition::{ResourceDefinition, ResourceLibrary};
pub use error::{ShipResError, ShipResResult};
pub use part::{Part, PartId, PartResource, PartValue};
pub use shared::SharedContext;
pub use suffix::{Structure, Suffix, Value};
pub use vessel::Vessel;

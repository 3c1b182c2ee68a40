//! Vessels and vessel snapshots.
//!
//! A snapshot is the JSON a host dumps of a vessel's parts and their
//! resource entries. Entries may leave `density` out; it is then resolved
//! from a [`ResourceLibrary`].
//!
//! ```
//! use shipres_logic::Vessel;
//!
//! let json = r#"{
//!     "name": "Kerbal X",
//!     "parts": [
//!         { "uid": 1, "name": "fuelTank", "title": "FL-T400",
//!           "resources": [ { "name": "LiquidFuel", "amount": 10, "max_amount": 50 } ] },
//!         { "uid": 2, "name": "strut" }
//!     ]
//! }"#;
//! let vessel = Vessel::from_json(json).unwrap();
//! assert_eq!(vessel.parts.len(), 2);
//! assert_eq!(vessel.resources()[0].density(), 0.005);
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::aggregate::{from_vessel, AggregateResource};
use crate::definition::{ResourceDefinition, ResourceLibrary};
use crate::error::ShipResResult;
use crate::part::{Part, PartId, PartResource, PartValue};
use crate::shared::SharedContext;
use crate::suffix::{Structure, Suffix, Value};

/// A named collection of parts.
#[derive(Debug, Clone, PartialEq)]
pub struct Vessel {
    pub name: String,
    pub parts: Vec<Part>,
}

impl Vessel {
    pub fn new(name: impl Into<String>, parts: Vec<Part>) -> Self {
        Self {
            name: name.into(),
            parts,
        }
    }

    /// Parse a snapshot, resolving missing densities from the stock library.
    pub fn from_json(json: &str) -> ShipResResult<Self> {
        Self::from_json_with(json, &ResourceLibrary::default())
    }

    pub fn from_json_with(json: &str, library: &ResourceLibrary) -> ShipResResult<Self> {
        let snapshot: VesselSnapshot = serde_json::from_str(json)?;
        Ok(snapshot.into_vessel(library))
    }

    /// Read and parse a snapshot file.
    pub fn load(path: impl AsRef<Path>, library: &ResourceLibrary) -> ShipResResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let vessel = Self::from_json_with(&json, library)?;
        log::info!(
            "Loaded vessel '{}' ({} parts) from {}",
            vessel.name,
            vessel.parts.len(),
            path.display()
        );
        Ok(vessel)
    }

    /// A fresh context naming this vessel.
    pub fn shared_context(&self) -> SharedContext {
        SharedContext::new(self.name.clone())
    }

    /// Resource aggregates across every part, in first-seen order.
    pub fn resources(&self) -> Vec<AggregateResource> {
        from_vessel(self, &self.shared_context())
    }
}

static VESSEL_SUFFIXES: &[Suffix<Vessel>] = &[
    Suffix {
        name: "NAME",
        description: "The name of the vessel",
        get: |v| Value::String(v.name.clone()),
    },
    Suffix {
        name: "PARTS",
        description: "Every part on the vessel",
        get: |v| {
            let shared = v.shared_context();
            Value::List(
                v.parts
                    .iter()
                    .map(|p| Value::Part(PartValue::new(p, shared.clone())))
                    .collect(),
            )
        },
    },
    Suffix {
        name: "RESOURCES",
        description: "Aggregate resources from every part on the vessel",
        get: |v| Value::List(v.resources().into_iter().map(Value::Resource).collect()),
    },
];

impl Structure for Vessel {
    const TYPE_NAME: &'static str = "Vessel";

    fn suffixes() -> &'static [Suffix<Self>] {
        VESSEL_SUFFIXES
    }
}

// ── Snapshot format ─────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct VesselSnapshot {
    name: String,
    #[serde(default)]
    parts: Vec<PartSnapshot>,
}

#[derive(Debug, Deserialize)]
struct PartSnapshot {
    uid: PartId,
    name: String,
    /// Falls back to `name`.
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    resources: Vec<ResourceSnapshot>,
}

#[derive(Debug, Deserialize)]
struct ResourceSnapshot {
    name: String,
    amount: f64,
    max_amount: f64,
    #[serde(default)]
    density: Option<f64>,
}

impl VesselSnapshot {
    fn into_vessel(self, library: &ResourceLibrary) -> Vessel {
        let parts = self
            .parts
            .into_iter()
            .map(|p| p.into_part(library))
            .collect();
        Vessel::new(self.name, parts)
    }
}

impl PartSnapshot {
    fn into_part(self, library: &ResourceLibrary) -> Part {
        let resources = self
            .resources
            .into_iter()
            .map(|r| {
                let definition = match r.density {
                    Some(density) => ResourceDefinition::new(r.name, density),
                    None => library.resolve(&r.name),
                };
                PartResource::new(definition, r.amount, r.max_amount)
            })
            .collect();
        Part {
            uid: self.uid,
            title: self.title.unwrap_or_else(|| self.name.clone()),
            name: self.name,
            resources,
        }
    }
}

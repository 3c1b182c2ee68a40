//! Resource totals across a set of parts.
//!
//! An [`AggregateResource`] is the summed view of one resource kind: how much
//! is stored, how much fits, and which parts hold it. [`prospect_resources`]
//! builds one per kind from a parts collection in a single pass.
//!
//! Grouping keys on the kind name. The first entry seen for a kind supplies
//! the aggregate's name and density; later entries only add to the totals.
//! Aggregates come back in the order their kind was first seen.
//!
//! ```
//! use shipres_logic::{prospect_resources, Part, ResourceDefinition, SharedContext};
//!
//! let fuel = ResourceDefinition::new("LiquidFuel", 0.005);
//! let parts = vec![
//!     Part::new(1, "tankA", "Tank A").with_resource(fuel.clone(), 10.0, 50.0),
//!     Part::new(2, "tankB", "Tank B").with_resource(fuel, 5.0, 50.0),
//! ];
//! let found = prospect_resources(&parts, &SharedContext::new("Kerbal X"));
//! assert_eq!(found["LiquidFuel"].to_string(), "SHIPRESOURCE(LiquidFuel,15,100)");
//! ```

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use crate::definition::ResourceDefinition;
use crate::part::{Part, PartResource, PartValue};
use crate::shared::SharedContext;
use crate::suffix::{Structure, Suffix, Value};
use crate::vessel::Vessel;

/// One resource kind summed across parts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateResource {
    name: String,
    density: f64,
    amount: f64,
    capacity: f64,
    parts: Vec<PartValue>,
    #[serde(skip)]
    shared: SharedContext,
}

impl AggregateResource {
    /// Empty aggregate for the given kind. `shared` is only used to build
    /// the part wrappers added later.
    pub fn new(definition: ResourceDefinition, shared: SharedContext) -> Self {
        Self {
            name: definition.name,
            density: definition.density,
            amount: 0.0,
            capacity: 0.0,
            parts: Vec::new(),
            shared,
        }
    }

    /// Add one part's entry to the totals and record the part.
    pub fn add_resource(&mut self, part: &Part, resource: &PartResource) {
        self.amount += resource.amount;
        self.capacity += resource.max_amount;
        self.parts.push(PartValue::new(part, self.shared.clone()));
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn density(&self) -> f64 {
        self.density
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    pub fn parts(&self) -> &[PartValue] {
        &self.parts
    }
}

impl fmt::Display for AggregateResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SHIPRESOURCE({},{},{})",
            self.name, self.amount, self.capacity
        )
    }
}

static AGGREGATE_SUFFIXES: &[Suffix<AggregateResource>] = &[
    Suffix {
        name: "NAME",
        description: "The name of the resource (eg LiquidFuel, ElectricCharge)",
        get: |r| Value::String(r.name.clone()),
    },
    Suffix {
        name: "DENSITY",
        description: "The density of the resource",
        get: |r| Value::Scalar(r.density),
    },
    Suffix {
        name: "AMOUNT",
        description: "The resources currently available",
        get: |r| Value::Scalar(r.amount),
    },
    Suffix {
        name: "CAPACITY",
        description: "The total storage capacity currently available",
        get: |r| Value::Scalar(r.capacity),
    },
    Suffix {
        name: "PARTS",
        description: "The containers for this resource",
        get: |r| Value::List(r.parts.iter().cloned().map(Value::Part).collect()),
    },
];

impl Structure for AggregateResource {
    const TYPE_NAME: &'static str = "ShipResource";

    fn suffixes() -> &'static [Suffix<Self>] {
        AGGREGATE_SUFFIXES
    }
}

/// Group every resource entry of `parts` by kind name.
///
/// Parts are scanned in the order given and each part's entries in their
/// stored order. Parts without resources contribute nothing.
pub fn prospect_resources<'a, I>(
    parts: I,
    shared: &SharedContext,
) -> IndexMap<String, AggregateResource>
where
    I: IntoIterator<Item = &'a Part>,
{
    let mut resources: IndexMap<String, AggregateResource> = IndexMap::new();
    for part in parts {
        for resource in &part.resources {
            let aggregate = resources
                .entry(resource.resource_name().to_string())
                .or_insert_with(|| {
                    AggregateResource::new(resource.definition.clone(), shared.clone())
                });
            if aggregate.density != resource.definition.density {
                // First definition wins; record the disagreement only.
                log::debug!(
                    "Part {} carries {} with density {} (aggregate keeps {})",
                    part.uid,
                    aggregate.name,
                    resource.definition.density,
                    aggregate.density
                );
            }
            aggregate.add_resource(part, resource);
        }
    }
    resources
}

/// Aggregates of `parts` as script values, for generic listing suffixes.
pub fn parts_to_list<'a, I>(parts: I, shared: &SharedContext) -> Vec<Value>
where
    I: IntoIterator<Item = &'a Part>,
{
    prospect_resources(parts, shared)
        .into_values()
        .map(Value::Resource)
        .collect()
}

/// Aggregates of every part on `vessel`, in first-seen order.
pub fn from_vessel(vessel: &Vessel, shared: &SharedContext) -> Vec<AggregateResource> {
    let resources: Vec<_> = prospect_resources(&vessel.parts, shared).into_values().collect();
    log::debug!(
        "Vessel '{}': {} parts, {} resource kinds",
        vessel.name,
        vessel.parts.len(),
        resources.len()
    );
    resources
}

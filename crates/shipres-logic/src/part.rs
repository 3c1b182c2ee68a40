//! Parts, their resource entries, and the script-facing part wrapper.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::definition::ResourceDefinition;
use crate::shared::SharedContext;
use crate::suffix::{Structure, Suffix, Value};

/// Unique id of a part within a vessel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartId(pub u64);

impl fmt::Display for PartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One resource stored in one part.
#[derive(Debug, Clone, PartialEq)]
pub struct PartResource {
    pub definition: ResourceDefinition,
    /// Units currently stored.
    pub amount: f64,
    /// Units the part can hold.
    pub max_amount: f64,
}

impl PartResource {
    pub fn new(definition: ResourceDefinition, amount: f64, max_amount: f64) -> Self {
        Self {
            definition,
            amount,
            max_amount,
        }
    }

    /// Kind name, the grouping key for aggregation.
    pub fn resource_name(&self) -> &str {
        &self.definition.name
    }
}

/// A simulated vessel component.
#[derive(Debug, Clone, PartialEq)]
pub struct Part {
    pub uid: PartId,
    /// Internal part name (e.g. "fuelTank").
    pub name: String,
    /// Display title (e.g. "FL-T400 Fuel Tank").
    pub title: String,
    pub resources: Vec<PartResource>,
}

impl Part {
    pub fn new(uid: u64, name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            uid: PartId(uid),
            name: name.into(),
            title: title.into(),
            resources: Vec::new(),
        }
    }

    /// Builder-style helper for attaching a resource entry.
    pub fn with_resource(
        mut self,
        definition: ResourceDefinition,
        amount: f64,
        max_amount: f64,
    ) -> Self {
        self.resources.push(PartResource::new(definition, amount, max_amount));
        self
    }
}

/// Script-facing view of a part.
///
/// Holds a copy of the identifying fields rather than a borrow, so aggregates
/// built from it outlive the parts collection they were scanned from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartValue {
    pub uid: PartId,
    pub name: String,
    pub title: String,
    #[serde(skip)]
    shared: SharedContext,
}

impl PartValue {
    pub fn new(part: &Part, shared: SharedContext) -> Self {
        Self {
            uid: part.uid,
            name: part.name.clone(),
            title: part.title.clone(),
            shared,
        }
    }

    pub fn shared(&self) -> &SharedContext {
        &self.shared
    }
}

impl fmt::Display for PartValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PART({},uid={})", self.name, self.uid)
    }
}

static PART_SUFFIXES: &[Suffix<PartValue>] = &[
    Suffix {
        name: "NAME",
        description: "The internal name of the part",
        get: |p| Value::String(p.name.clone()),
    },
    Suffix {
        name: "TITLE",
        description: "The display title of the part",
        get: |p| Value::String(p.title.clone()),
    },
    Suffix {
        name: "UID",
        description: "Unique id of the part within its vessel",
        get: |p| Value::String(p.uid.to_string()),
    },
];

impl Structure for PartValue {
    const TYPE_NAME: &'static str = "Part";

    fn suffixes() -> &'static [Suffix<Self>] {
        PART_SUFFIXES
    }
}

//! Resource kinds and the stock resource library.
//!
//! A [`ResourceDefinition`] is the per-kind constant data every part entry of
//! that kind shares. The [`ResourceLibrary`] resolves kinds by name when a
//! snapshot does not spell the density out.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Name and density of one resource kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceDefinition {
    pub name: String,
    /// Mass per unit, in tons.
    pub density: f64,
}

impl ResourceDefinition {
    pub fn new(name: impl Into<String>, density: f64) -> Self {
        Self {
            name: name.into(),
            density,
        }
    }
}

/// Stock resource densities (tons per unit).
mod stock {
    pub const LIQUID_FUEL: f64 = 0.005;
    pub const OXIDIZER: f64 = 0.005;
    pub const SOLID_FUEL: f64 = 0.0075;
    pub const MONO_PROPELLANT: f64 = 0.004;
    pub const XENON_GAS: f64 = 0.0001;
    /// Massless.
    pub const ELECTRIC_CHARGE: f64 = 0.0;
    pub const INTAKE_AIR: f64 = 0.005;
    pub const ORE: f64 = 0.01;
    pub const ABLATOR: f64 = 0.001;
}

/// Lookup table of known resource kinds, keyed by name.
#[derive(Debug, Clone)]
pub struct ResourceLibrary {
    definitions: IndexMap<String, ResourceDefinition>,
}

impl Default for ResourceLibrary {
    fn default() -> Self {
        let mut library = Self::empty();
        for (name, density) in [
            ("LiquidFuel", stock::LIQUID_FUEL),
            ("Oxidizer", stock::OXIDIZER),
            ("SolidFuel", stock::SOLID_FUEL),
            ("MonoPropellant", stock::MONO_PROPELLANT),
            ("XenonGas", stock::XENON_GAS),
            ("ElectricCharge", stock::ELECTRIC_CHARGE),
            ("IntakeAir", stock::INTAKE_AIR),
            ("Ore", stock::ORE),
            ("Ablator", stock::ABLATOR),
        ] {
            library.register(ResourceDefinition::new(name, density));
        }
        library
    }
}

impl ResourceLibrary {
    /// A library with no kinds registered.
    pub fn empty() -> Self {
        Self {
            definitions: IndexMap::new(),
        }
    }

    /// Add or replace a kind. Returns the definition it replaced, if any.
    pub fn register(&mut self, definition: ResourceDefinition) -> Option<ResourceDefinition> {
        self.definitions.insert(definition.name.clone(), definition)
    }

    pub fn get(&self, name: &str) -> Option<&ResourceDefinition> {
        self.definitions.get(name)
    }

    /// Resolve a kind by name, falling back to a massless definition for
    /// kinds the library has never heard of.
    pub fn resolve(&self, name: &str) -> ResourceDefinition {
        match self.get(name) {
            Some(def) => def.clone(),
            None => {
                log::warn!("Unknown resource kind '{}', assuming zero density", name);
                ResourceDefinition::new(name, 0.0)
            }
        }
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResourceDefinition> {
        self.definitions.values()
    }
}

//! Script values and name-addressable suffixes.
//!
//! A script reads `SHIPRESOURCE:AMOUNT` by name, so every script-visible type
//! publishes a fixed table of [`Suffix`] entries: a name, a one-line help
//! string, and a getter over the instance. The table is a `static` per type
//! and never changes at runtime. Lookup ignores ASCII case, the same way the
//! scripting language treats identifiers.
//!
//! ```
//! use shipres_logic::{AggregateResource, ResourceDefinition, SharedContext, Structure};
//!
//! let res = AggregateResource::new(
//!     ResourceDefinition::new("LiquidFuel", 0.005),
//!     SharedContext::new("Kerbal X"),
//! );
//! assert_eq!(res.get_suffix("name").unwrap().to_string(), "LiquidFuel");
//! assert!(!res.has_suffix("MASS"));
//! ```

use std::fmt;

use serde::Serialize;

use crate::aggregate::AggregateResource;
use crate::error::{ShipResError, ShipResResult};
use crate::part::PartValue;

/// A value handed back to the scripting runtime.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    String(String),
    Scalar(f64),
    List(Vec<Value>),
    Part(PartValue),
    Resource(AggregateResource),
}

impl Value {
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Value::Scalar(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => f.write_str(s),
            Value::Scalar(v) => write!(f, "{}", v),
            Value::List(items) => {
                f.write_str("LIST(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str(")")
            }
            Value::Part(part) => write!(f, "{}", part),
            Value::Resource(res) => write!(f, "{}", res),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Scalar(v)
    }
}

/// One read-only suffix of a script-visible type.
pub struct Suffix<T> {
    pub name: &'static str,
    pub description: &'static str,
    pub get: fn(&T) -> Value,
}

impl<T> fmt::Debug for Suffix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Suffix")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish()
    }
}

/// A type scripts can read suffixes from.
pub trait Structure: Sized + 'static {
    /// Name shown in error messages.
    const TYPE_NAME: &'static str;

    fn suffixes() -> &'static [Suffix<Self>];

    fn find_suffix(name: &str) -> Option<&'static Suffix<Self>> {
        Self::suffixes()
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name))
    }

    fn get_suffix(&self, name: &str) -> ShipResResult<Value> {
        let suffix = Self::find_suffix(name).ok_or_else(|| ShipResError::UnknownSuffix {
            structure: Self::TYPE_NAME,
            suffix: name.to_string(),
        })?;
        Ok((suffix.get)(self))
    }

    /// Every suffix here is read only, so this always fails; the error says
    /// whether the name exists at all.
    fn set_suffix(&mut self, name: &str, _value: Value) -> ShipResResult<()> {
        match Self::find_suffix(name) {
            Some(suffix) => Err(ShipResError::ReadOnlySuffix {
                structure: Self::TYPE_NAME,
                suffix: suffix.name.to_string(),
            }),
            None => Err(ShipResError::UnknownSuffix {
                structure: Self::TYPE_NAME,
                suffix: name.to_string(),
            }),
        }
    }

    fn has_suffix(&self, name: &str) -> bool {
        Self::find_suffix(name).is_some()
    }

    fn suffix_names(&self) -> Vec<&'static str> {
        Self::suffixes().iter().map(|s| s.name).collect()
    }
}

//! Context handle passed through to part wrappers.
//!
//! The aggregation never looks inside it; it only clones it into every
//! [`PartValue`](crate::part::PartValue) it builds, so a script holding a part
//! can still tell which vessel the part came from.

use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
pub struct SharedContext {
    inner: Rc<ContextInner>,
}

#[derive(Debug, PartialEq)]
struct ContextInner {
    vessel_name: String,
}

impl SharedContext {
    pub fn new(vessel_name: impl Into<String>) -> Self {
        Self {
            inner: Rc::new(ContextInner {
                vessel_name: vessel_name.into(),
            }),
        }
    }

    pub fn vessel_name(&self) -> &str {
        &self.inner.vessel_name
    }

    /// Whether two handles point at the same context.
    pub fn same_as(&self, other: &SharedContext) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

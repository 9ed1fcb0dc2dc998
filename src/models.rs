//! Data models for recipes and quantified resources

use std::fmt;

/// A resource name paired with a quantity, as a demand or a yield.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantifiedResource {
    pub name: String,
    pub quantity: u64,
}

impl QuantifiedResource {
    pub fn new(name: impl Into<String>, quantity: u64) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }
}

impl fmt::Display for QuantifiedResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.quantity, self.name)
    }
}

/// A production rule: consume the ingredients, yield one output batch.
///
/// Ingredient order is part of the contract. Demands are resolved in the
/// declared order, and an ingredient listed earlier gets first claim on any
/// recycled surplus.
#[derive(Debug, Clone)]
pub struct Recipe {
    pub ingredients: Vec<QuantifiedResource>,
    pub output: QuantifiedResource,
}

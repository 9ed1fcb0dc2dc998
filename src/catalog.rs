//! Recipe catalog: lookup from output resource to producing recipe

use std::collections::HashMap;

use crate::ChainError;
use crate::models::Recipe;

/// Immutable mapping from an output resource name to the recipe producing it.
///
/// Built once from parsed recipe data and read-only thereafter. At most one
/// recipe may produce a given resource.
#[derive(Debug, Clone)]
pub struct RecipeCatalog {
    by_output: HashMap<String, Recipe>,
}

impl RecipeCatalog {
    /// Build a catalog from an ordered sequence of recipes.
    ///
    /// Fails with [`ChainError::DuplicateOutput`] if two recipes share an
    /// output resource name. Duplicates are a validation error, never
    /// silently overwritten.
    pub fn new(recipes: Vec<Recipe>) -> Result<Self, ChainError> {
        let mut by_output = HashMap::with_capacity(recipes.len());
        for recipe in recipes {
            let name = recipe.output.name.clone();
            if by_output.insert(name.clone(), recipe).is_some() {
                return Err(ChainError::DuplicateOutput(name));
            }
        }
        Ok(Self { by_output })
    }

    /// Look up the recipe that produces `name`.
    pub fn lookup(&self, name: &str) -> Result<&Recipe, ChainError> {
        self.by_output
            .get(name)
            .ok_or_else(|| ChainError::UnknownResource(name.to_string()))
    }

    /// Whether any recipe produces `name`. False for the raw material.
    pub fn has_recipe(&self, name: &str) -> bool {
        self.by_output.contains_key(name)
    }

    /// All producible resource names, sorted.
    pub fn producible_resources(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.by_output.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

//! # ore-calculator
//!
//! A command-line tool and library for costing production chains built from
//! integer-ratio conversion recipes.
//!
//! A recipe catalog describes how each resource is produced from other
//! resources, bottoming out at a single raw material with no recipe of its
//! own. The calculator answers two questions about such a catalog:
//!
//! - the minimum raw material needed to produce one batch of a target
//!   resource, and
//! - the maximum amount of the target producible from a fixed raw-material
//!   budget, with overproduction recycled into later batches.
//!
//! ## Modules
//!
//! - [`models`] - Recipes and quantified resources
//! - [`catalog`] - Lookup from output resource to producing recipe
//! - [`ledger`] - Surplus tracking for recycled overproduction
//! - [`calculator`] - Demand resolution and budget maximization
//! - [`parse`] - Recipe text parsing

pub mod calculator;
pub mod catalog;
pub mod ledger;
pub mod models;
pub mod parse;

pub use calculator::{
    SolveSummary, batch_cost, format_recipe_tree, maximum_production, minimum_raw_material,
    resolve_demand, solve,
};
pub use catalog::RecipeCatalog;
pub use ledger::RecyclingLedger;
pub use models::{QuantifiedResource, Recipe};

/// Errors raised while building or resolving a recipe catalog.
#[derive(Debug, thiserror::Error)]
pub enum ChainError {
    /// Demand resolution reached a resource no recipe produces.
    #[error("no recipe produces '{0}'")]
    UnknownResource(String),

    /// Two recipes in the input claim the same output resource.
    #[error("more than one recipe produces '{0}'")]
    DuplicateOutput(String),
}

pub type Result<T> = std::result::Result<T, ChainError>;

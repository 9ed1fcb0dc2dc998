//! Demand resolution and budget maximization logic

use std::fmt;

use crate::ChainError;
use crate::catalog::RecipeCatalog;
use crate::ledger::RecyclingLedger;

/// Raw material required to satisfy a single demand.
///
/// Withdraws what it can from the ledger first, then expands the producing
/// recipe, banking overproduction as surplus before descending into the
/// ingredients. Each ingredient is resolved fully, one at a time, in the
/// recipe's declared order against the shared ledger; sibling demands are
/// never aggregated, so an earlier ingredient gets first claim on surplus.
pub fn resolve_demand(
    catalog: &RecipeCatalog,
    ledger: &mut RecyclingLedger,
    raw_material: &str,
    name: &str,
    quantity: u64,
) -> Result<u64, ChainError> {
    let needed = quantity - ledger.withdraw(name, quantity);

    // A fully recycled (or empty) demand costs nothing and must not expand
    // its recipe.
    if needed == 0 {
        return Ok(0);
    }
    if name == raw_material {
        return Ok(needed);
    }

    let recipe = catalog.lookup(name)?;
    let batches = needed.div_ceil(recipe.output.quantity);

    // Bank the overproduction before descending, so demands resolved later
    // in the same run can reclaim it.
    let waste = batches * recipe.output.quantity - needed;
    ledger.deposit(name, waste);

    let mut total = 0;
    for ingredient in &recipe.ingredients {
        total += resolve_demand(
            catalog,
            ledger,
            raw_material,
            &ingredient.name,
            ingredient.quantity * batches,
        )?;
    }
    Ok(total)
}

/// Raw material required to produce `batches` batches of the target recipe.
///
/// Scales the target's ingredient list by `batches` and resolves each
/// ingredient in declared order. The target itself never passes through the
/// ledger; only its ingredients and their descendants do.
pub fn batch_cost(
    catalog: &RecipeCatalog,
    ledger: &mut RecyclingLedger,
    raw_material: &str,
    target: &str,
    batches: u64,
) -> Result<u64, ChainError> {
    let recipe = catalog.lookup(target)?;

    let mut total = 0;
    for ingredient in &recipe.ingredients {
        total += resolve_demand(
            catalog,
            ledger,
            raw_material,
            &ingredient.name,
            ingredient.quantity * batches,
        )?;
    }
    Ok(total)
}

/// Minimum raw material to produce one batch of the target, starting from an
/// empty ledger.
pub fn minimum_raw_material(
    catalog: &RecipeCatalog,
    raw_material: &str,
    target: &str,
) -> Result<u64, ChainError> {
    let mut ledger = RecyclingLedger::new();
    batch_cost(catalog, &mut ledger, raw_material, target, 1)
}

/// Largest number of target batches producible from `budget` units of raw
/// material.
///
/// Decimal back-off search: the first guess is the whole budget, an
/// over-budget attempt shrinks by a factor of ten (never below one) and is
/// retried, and an accepted attempt is committed against the remaining
/// budget. The ledger carries across committed attempts, so surplus earned
/// while producing earlier batches reduces the cost of later ones. The
/// back-off is not a general optimum-finder; it never claims more output
/// than the budget covers.
pub fn maximum_production(
    catalog: &RecipeCatalog,
    raw_material: &str,
    target: &str,
    budget: u64,
) -> Result<u64, ChainError> {
    let mut ledger = RecyclingLedger::new();
    let mut remaining = budget;
    let mut produced = 0;
    let mut attempt = budget;

    while remaining > 0 {
        // A rejected oversized attempt is rolled back, so it must not leave
        // partial recycling state behind. An attempt of one either fits or
        // ends the search, and needs no snapshot.
        let before = (attempt > 1).then(|| ledger.snapshot());

        let cost = batch_cost(catalog, &mut ledger, raw_material, target, attempt)?;

        if cost > remaining {
            match before {
                Some(snapshot) => {
                    ledger = snapshot;
                    attempt = (attempt / 10).max(1);
                    continue;
                }
                None => break,
            }
        }

        remaining -= cost;
        produced += attempt;
        attempt = remaining;
    }

    Ok(produced)
}

/// Both headline results for one catalog.
#[derive(Debug)]
pub struct SolveSummary {
    pub raw_material: String,
    pub target: String,
    pub minimum_cost: u64,
    pub budget: u64,
    pub maximum_output: u64,
}

/// Compute the minimum cost of one target batch and the maximum output for
/// the given budget.
pub fn solve(
    catalog: &RecipeCatalog,
    raw_material: &str,
    target: &str,
    budget: u64,
) -> Result<SolveSummary, ChainError> {
    Ok(SolveSummary {
        raw_material: raw_material.to_string(),
        target: target.to_string(),
        minimum_cost: minimum_raw_material(catalog, raw_material, target)?,
        budget,
        maximum_output: maximum_production(catalog, raw_material, target, budget)?,
    })
}

impl fmt::Display for SolveSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Production Summary ===")?;
        writeln!(f, "Target: {} (raw material: {})", self.target, self.raw_material)?;
        writeln!(f)?;
        writeln!(
            f,
            "Minimum {} for 1 batch of {}: {}",
            self.raw_material, self.target, self.minimum_cost
        )?;
        writeln!(
            f,
            "A budget of {} {} produces: {} {}",
            self.budget, self.raw_material, self.maximum_output, self.target
        )?;
        Ok(())
    }
}

/// Render the dependency tree below `target` as an indented listing.
///
/// Shared intermediates appear once per point of use; resources with no
/// producing recipe are marked as raw inputs.
pub fn format_recipe_tree(
    catalog: &RecipeCatalog,
    target: &str,
    indent: usize,
) -> Result<String, ChainError> {
    let mut output = String::new();
    let prefix = "  ".repeat(indent);

    let recipe = catalog.lookup(target)?;
    output.push_str(&format!(
        "{}batch of {} from:\n",
        prefix, recipe.output
    ));

    for ingredient in &recipe.ingredients {
        if catalog.has_recipe(&ingredient.name) {
            output.push_str(&format!("{}  needs {}\n", prefix, ingredient));
            output.push_str(&format_recipe_tree(catalog, &ingredient.name, indent + 2)?);
        } else {
            output.push_str(&format!("{}  needs {} (raw input)\n", prefix, ingredient));
        }
    }

    Ok(output)
}

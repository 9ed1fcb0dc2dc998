//! Recipe text parsing
//!
//! Reads recipe listings of the form `7 A, 1 E => 1 FUEL`: one recipe per
//! non-empty line, comma-separated ingredient terms on the left of `=>`, the
//! output batch on the right, each term a quantity followed by a resource
//! name.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use regex::Regex;

use crate::models::{QuantifiedResource, Recipe};

/// Parse a whole recipe listing.
///
/// Blank lines are skipped. Ingredient order within each recipe is preserved
/// exactly as declared; it is part of the resolution contract.
pub fn parse_recipes(input: &str) -> Result<Vec<Recipe>> {
    let term_re = Regex::new(r"^(\d+)\s+(\w+)$")?;

    let mut recipes = Vec::new();
    for (line_no, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        recipes.push(
            parse_recipe_line(&term_re, line)
                .with_context(|| format!("line {}: '{}'", line_no + 1, line))?,
        );
    }
    Ok(recipes)
}

fn parse_recipe_line(term_re: &Regex, line: &str) -> Result<Recipe> {
    let Some((ingredients, output)) = line.split_once("=>") else {
        bail!("missing '=>' separator");
    };

    let ingredients = ingredients
        .split(',')
        .map(|term| parse_term(term_re, term))
        .collect::<Result<Vec<_>>>()?;

    Ok(Recipe {
        ingredients,
        output: parse_term(term_re, output)?,
    })
}

fn parse_term(term_re: &Regex, term: &str) -> Result<QuantifiedResource> {
    let term = term.trim();
    let caps = term_re
        .captures(term)
        .with_context(|| format!("expected '<quantity> <name>', got '{}'", term))?;

    let quantity: u64 = caps[1]
        .parse()
        .with_context(|| format!("quantity out of range in '{}'", term))?;
    if quantity == 0 {
        bail!("quantity must be positive in '{}'", term);
    }

    Ok(QuantifiedResource::new(&caps[2], quantity))
}

/// Read and parse a recipe file.
pub fn load_recipe_file(path: &Path) -> Result<Vec<Recipe>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse_recipes(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

//! Taxonomy registry — categories, subcategories and their base weights.
//!
//! The built-in registry is immutable and shared process-wide via `Taxonomy::builtin()`.
//! Callers wanting different weights or rules build their own `Taxonomy` and
//! hand it to the scorer.

pub mod rules;

use std::sync::{Arc, LazyLock};

use serde::Serialize;

use crate::models::profile::Category;
use rules::{builtin_rules, categorize_with, CategoryRule};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubcategoryDef {
    pub name: String,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryDef {
    pub category: Category,
    pub weight: f64,
    pub subcategories: Vec<SubcategoryDef>,
}

impl CategoryDef {
    pub fn new(category: Category, weight: f64, subcategories: &[(&str, f64)]) -> Self {
        Self {
            category,
            weight,
            subcategories: subcategories
                .iter()
                .map(|(name, weight)| SubcategoryDef {
                    name: name.to_string(),
                    weight: *weight,
                })
                .collect(),
        }
    }

    /// Weight of a subcategory; 1.0 when the subcategory is not listed.
    pub fn subcategory_weight(&self, name: &str) -> f64 {
        self.subcategories
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.weight)
            .unwrap_or(1.0)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Taxonomy {
    categories: Vec<CategoryDef>,
    rules: Vec<CategoryRule>,
}

static BUILTIN: LazyLock<Arc<Taxonomy>> = LazyLock::new(|| {
    Arc::new(Taxonomy::new(
        builtin_categories(),
        builtin_rules().expect("valid regex"),
    ))
});

fn builtin_categories() -> Vec<CategoryDef> {
    vec![
        CategoryDef::new(
            Category::Technical,
            1.0,
            &[
                ("programming", 1.0),
                ("frameworks", 0.9),
                ("databases", 0.9),
                ("cloud", 0.95),
                ("devops", 0.9),
                ("tools", 0.8),
            ],
        ),
        CategoryDef::new(
            Category::Soft,
            0.7,
            &[
                ("communication", 0.8),
                ("leadership", 0.9),
                ("teamwork", 0.8),
                ("problem_solving", 0.85),
            ],
        ),
        CategoryDef::new(
            Category::Domain,
            0.85,
            &[
                ("finance", 0.9),
                ("healthcare", 0.9),
                ("ecommerce", 0.8),
                ("education", 0.8),
            ],
        ),
        CategoryDef::new(
            Category::Certification,
            0.9,
            &[
                ("cloud", 1.0),
                ("security", 1.0),
                ("project_management", 0.85),
                ("data", 0.9),
            ],
        ),
    ]
}

impl Taxonomy {
    pub fn new(categories: Vec<CategoryDef>, rules: Vec<CategoryRule>) -> Self {
        Self { categories, rules }
    }

    /// The shared built-in registry.
    pub fn builtin() -> &'static Taxonomy {
        &BUILTIN
    }

    /// Shared handle to the built-in registry, for owners that need `'static` data.
    pub fn shared() -> Arc<Taxonomy> {
        Arc::clone(&BUILTIN)
    }

    /// Categories in registry order.
    pub fn categories(&self) -> &[CategoryDef] {
        &self.categories
    }

    pub fn category(&self, category: &Category) -> Option<&CategoryDef> {
        self.categories.iter().find(|c| &c.category == category)
    }

    /// Base weight of a category; 1.0 for categories the registry does not know.
    pub fn category_weight(&self, category: &Category) -> f64 {
        self.category(category).map(|c| c.weight).unwrap_or(1.0)
    }

    pub fn subcategory_weight(&self, category: &Category, subcategory: &str) -> f64 {
        self.category(category)
            .map(|c| c.subcategory_weight(subcategory))
            .unwrap_or(1.0)
    }

    /// Infers a category from an attribute name. Defaults to `Technical`.
    pub fn categorize(&self, name: &str) -> Category {
        categorize_with(&self.rules, name)
    }
}

// ABOUTME: Randomized, constrained food selection from filtered category partitions
// ABOUTME: Partitions holds per-category candidates; draw helpers pick without replacement
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitarva

use rand::seq::SliceRandom;
use rand::Rng;
use vitarva_core::models::{FoodCategory, FoodItem};

/// Filtered candidates grouped by meal role
#[derive(Debug, Default)]
pub struct Partitions<'a> {
    /// Grain candidates
    pub grains: Vec<&'a FoodItem>,
    /// Protein candidates: legumes first, then dairy and nut sources
    pub proteins: Vec<&'a FoodItem>,
    /// Vegetable candidates
    pub vegetables: Vec<&'a FoodItem>,
    /// Spice candidates
    pub spices: Vec<&'a FoodItem>,
    /// Fruit candidates
    pub fruits: Vec<&'a FoodItem>,
}

impl<'a> Partitions<'a> {
    /// Group filtered items by category
    #[must_use]
    pub fn from_filtered(items: &[&'a FoodItem]) -> Self {
        let mut partitions = Self::default();
        for &item in items {
            match item.category {
                FoodCategory::Grains => partitions.grains.push(item),
                FoodCategory::Proteins | FoodCategory::Dairy | FoodCategory::Nuts => {
                    partitions.proteins.push(item);
                }
                FoodCategory::Vegetables => partitions.vegetables.push(item),
                FoodCategory::Spices => partitions.spices.push(item),
                FoodCategory::Fruits => partitions.fruits.push(item),
            }
        }
        partitions
    }

    /// Whether nothing survived filtering
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.grains.is_empty()
            && self.proteins.is_empty()
            && self.vegetables.is_empty()
            && self.spices.is_empty()
            && self.fruits.is_empty()
    }
}

/// Draw one item uniformly, `None` for an empty pool
#[must_use]
pub fn pick_one<'a, R: Rng + ?Sized>(pool: &[&'a FoodItem], rng: &mut R) -> Option<&'a FoodItem> {
    pool.choose(rng).copied()
}

/// Draw up to `count` distinct items
#[must_use]
pub fn pick_n<'a, R: Rng + ?Sized>(
    pool: &[&'a FoodItem],
    count: usize,
    rng: &mut R,
) -> Vec<&'a FoodItem> {
    pool.choose_multiple(rng, count).copied().collect()
}

/// Draw between `min` and `max` distinct items; fewer if the pool is smaller
#[must_use]
pub fn pick_between<'a, R: Rng + ?Sized>(
    pool: &[&'a FoodItem],
    (min, max): (usize, usize),
    rng: &mut R,
) -> Vec<&'a FoodItem> {
    if pool.is_empty() {
        return Vec::new();
    }
    let count = rng.gen_range(min..=max);
    pick_n(pool, count, rng)
}

/// Names of the drawn items
#[must_use]
pub fn names(items: &[&FoodItem]) -> Vec<String> {
    items.iter().map(|f| f.name.clone()).collect()
}

/// Spice names for a slot: drawn spices topped up from `recommended` to `target`
#[must_use]
pub fn spice_names(drawn: &[&FoodItem], recommended: &[&'static str], target: usize) -> Vec<String> {
    let mut spices = names(drawn);
    for spice in recommended {
        if spices.len() >= target {
            break;
        }
        if !spices.iter().any(|s| s.eq_ignore_ascii_case(spice)) {
            spices.push((*spice).to_owned());
        }
    }
    spices
}

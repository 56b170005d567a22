//! Conversion of raw recipe-source meals into the canonical [`Recipe`].
//!
//! Everything here is a pure function of the input payload: no I/O, no shared
//! state. The same meal always normalizes to the same recipe.

pub mod mealdb;

use crate::models::recipe::{ Difficulty, Ingredient, RawMeal, Recipe };
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

/// Upper bound on the numbered `strIngredientN` / `strMeasureN` slots.
pub const MAX_INGREDIENT_SLOTS: usize = 20;

const DEFAULT_TIME_MINUTES: u32 = 30;
const MIN_TIME_MINUTES: u32 = 15;
const MAX_TIME_MINUTES: u32 = 60;

static STEP_BOUNDARY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\.\s+|\n\n").expect("step boundary regex is valid")
});

/// Normalizes one meal. Returns `None` only when there is no meal at all.
pub fn normalize_meal(meal: Option<&RawMeal>) -> Option<Recipe> {
    let meal = meal?;

    let ingredients = extract_ingredients(meal);
    let instructions = text_field(meal, "strInstructions");
    let steps = instructions.map(split_steps).unwrap_or_default();

    let time_minutes = estimate_time_minutes(steps.len());
    let difficulty = estimate_difficulty(ingredients.len(), steps.len());

    Some(Recipe {
        id: id_field(meal, "idMeal"),
        name: owned_field(meal, "strMeal"),
        image: owned_field(meal, "strMealThumb"),
        category: owned_field(meal, "strCategory"),
        area: owned_field(meal, "strArea"),
        instructions: instructions.unwrap_or_default().to_string(),
        steps,
        ingredients,
        time_minutes,
        difficulty,
        short_info: String::new(),
    })
}

/// Collects `{name, measure}` pairs from slots 1..=20 in slot order,
/// skipping slots whose ingredient is missing or blank.
pub fn extract_ingredients(meal: &RawMeal) -> Vec<Ingredient> {
    (1..=MAX_INGREDIENT_SLOTS)
        .filter_map(|i| {
            let name = text_field(meal, &format!("strIngredient{}", i))?.trim();
            if name.is_empty() {
                return None;
            }
            let measure = text_field(meal, &format!("strMeasure{}", i))
                .map(str::trim)
                .unwrap_or_default();
            Some(Ingredient::new(name, measure))
        })
        .collect()
}

/// Splits free-text instructions into sentences or paragraphs, each trimmed,
/// non-empty and ending in a period.
pub fn split_steps(instructions: &str) -> Vec<String> {
    STEP_BOUNDARY.split(instructions)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            if s.ends_with('.') { s.to_string() } else { format!("{}.", s) }
        })
        .collect()
}

/// Rough cooking time shown in the UI: five minutes per step plus ten,
/// clamped to 15..=60. Recipes without steps get 30.
pub fn estimate_time_minutes(step_count: usize) -> u32 {
    if step_count == 0 {
        return DEFAULT_TIME_MINUTES;
    }
    let steps = u32::try_from(step_count).unwrap_or(u32::MAX);
    steps.saturating_mul(5).saturating_add(10).clamp(MIN_TIME_MINUTES, MAX_TIME_MINUTES)
}

pub fn estimate_difficulty(ingredient_count: usize, step_count: usize) -> Difficulty {
    if ingredient_count > 12 || step_count > 8 {
        Difficulty::Hard
    } else if ingredient_count > 8 || step_count > 5 {
        Difficulty::Medium
    } else {
        Difficulty::Easy
    }
}

fn text_field<'a>(meal: &'a RawMeal, key: &str) -> Option<&'a str> {
    meal.get(key).and_then(Value::as_str)
}

fn owned_field(meal: &RawMeal, key: &str) -> String {
    text_field(meal, key).unwrap_or_default().to_string()
}

// Some mirrors of the source API send ids as numbers.
fn id_field(meal: &RawMeal, key: &str) -> String {
    match meal.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

use serde::{ Serialize, Deserialize };
use serde_json::{ Map, Value };

/// A meal as delivered by the recipe source: a flat JSON object with
/// `strMeal`, `strInstructions`, `strIngredient1..N`, `strMeasure1..N`, etc.
/// Kept untyped because the shape is not under our control.
pub type RawMeal = Map<String, Value>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    #[serde(default)]
    pub measure: String,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, measure: impl Into<String>) -> Self {
        Self { name: name.into(), measure: measure.into() }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub image: String,
    pub category: String,
    pub area: String,
    pub instructions: String,
    pub steps: Vec<String>,
    pub ingredients: Vec<Ingredient>,
    pub time_minutes: u32,
    pub difficulty: Difficulty,
    /// Filled in by the summary generator on request; empty after normalization.
    pub short_info: String,
}

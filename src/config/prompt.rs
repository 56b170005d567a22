//! Fixed prompt and fallback texts for the CoCo persona.
//!
//! Templates use `{placeholder}` markers. Each marker is filled once, in a
//! single left-to-right pass, so braces inside caller-supplied values are
//! copied verbatim.

use crate::models::recipe::Ingredient;

pub const DEFAULT_USER_NAME: &str = "friend";

const SYSTEM_PREAMBLE_TEMPLATE: &str =
    "You are CoCo, a friendly and encouraging cooking companion AI. You help {user_name} find recipes, \
answer cooking questions, and provide encouragement. Keep responses concise and friendly. \
End with a cooking tip or encouragement when appropriate.";

const RECIPE_SUMMARY_TEMPLATE: &str =
    "You are a friendly cooking companion AI named CoCo. Generate a short, engaging 2-3 sentence summary of this recipe:
Name: {recipe_name}
Category: {category}
Area: {area}
Ingredients: {ingredient_list}
First steps: {step_preview}

Keep it friendly, encouraging, and concise. Mention something interesting about the recipe or cuisine.";

const SUMMARY_FALLBACK_TEMPLATE: &str =
    "A delicious {category} recipe from {area}. This dish features {featured}. \
Perfect for trying something new in the kitchen!";

const HELP_FALLBACK_TEMPLATE: &str =
    "Hi {user_name}! I'm CoCo, your cooking companion. I can help you find recipes, \
answer cooking questions, or just chat about food. What would you like to know?";

const GENERIC_FALLBACK_TEMPLATE: &str =
    "That sounds interesting! Keep exploring great recipes and let me know how I can help, {user_name}!";

/// Number of leading steps quoted in the summary prompt.
const STEP_PREVIEW_LEN: usize = 2;
/// Number of ingredients named in the summary fallback.
const FEATURED_INGREDIENTS: usize = 2;

fn fill(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };
        let key = &after[..close];
        match values.iter().find(|(name, _)| *name == key) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[open..open + close + 2]),
        }
        rest = &after[close + 1..];
    }
    out.push_str(rest);
    out
}

pub fn system_preamble(user_name: &str) -> String {
    fill(SYSTEM_PREAMBLE_TEMPLATE, &[("user_name", user_name)])
}

pub fn recipe_summary_prompt(
    recipe_name: &str,
    category: &str,
    area: &str,
    ingredients: &[Ingredient],
    steps: &[String]
) -> String {
    let ingredient_list = ingredients
        .iter()
        .map(|ing| format!("{} ({})", ing.name, ing.measure))
        .collect::<Vec<_>>()
        .join(", ");
    let step_preview = steps
        .iter()
        .take(STEP_PREVIEW_LEN)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ");

    fill(
        RECIPE_SUMMARY_TEMPLATE,
        &[
            ("recipe_name", recipe_name),
            ("category", category),
            ("area", area),
            ("ingredient_list", ingredient_list.as_str()),
            ("step_preview", step_preview.as_str()),
        ]
    )
}

pub fn summary_fallback(category: &str, area: &str, ingredients: &[Ingredient]) -> String {
    let featured = ingredients
        .iter()
        .take(FEATURED_INGREDIENTS)
        .map(|ing| ing.name.to_lowercase())
        .collect::<Vec<_>>()
        .join(" and ");

    let category = category.to_lowercase();
    fill(
        SUMMARY_FALLBACK_TEMPLATE,
        &[
            ("category", category.as_str()),
            ("area", area),
            ("featured", featured.as_str()),
        ]
    )
}

pub fn help_fallback(user_name: &str) -> String {
    fill(HELP_FALLBACK_TEMPLATE, &[("user_name", user_name)])
}

pub fn generic_fallback(user_name: &str) -> String {
    fill(GENERIC_FALLBACK_TEMPLATE, &[("user_name", user_name)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preamble_names_the_user() {
        let text = system_preamble("Sam");
        assert!(text.starts_with("You are CoCo"));
        assert!(text.contains("help Sam find recipes"));
        assert!(text.contains("concise and friendly"));
        assert!(text.contains("cooking tip or encouragement"));
    }

    #[test]
    fn summary_prompt_lists_ingredients_and_two_steps() {
        let prompt = recipe_summary_prompt(
            "Garlic Prawns",
            "Seafood",
            "Spanish",
            &[Ingredient::new("Prawns", "500g"), Ingredient::new("Garlic", "")],
            &["Peel the prawns.".into(), "Heat the oil.".into(), "Fry.".into()]
        );
        assert!(prompt.contains("Name: Garlic Prawns\n"));
        assert!(prompt.contains("Ingredients: Prawns (500g), Garlic ()\n"));
        assert!(prompt.contains("First steps: Peel the prawns. Heat the oil.\n"));
        assert!(!prompt.contains("Fry."));
    }

    #[test]
    fn summary_fallback_lowercases_category_and_ingredients() {
        let text = summary_fallback(
            "Seafood",
            "Italian",
            &[Ingredient::new("Shrimp", ""), Ingredient::new("Garlic", ""), Ingredient::new("Basil", "")]
        );
        assert_eq!(
            text,
            "A delicious seafood recipe from Italian. This dish features shrimp and garlic. \
Perfect for trying something new in the kitchen!"
        );
    }

    #[test]
    fn summary_fallback_with_one_ingredient() {
        let text = summary_fallback("Dessert", "French", &[Ingredient::new("Cream", "1 cup")]);
        assert!(text.contains("This dish features cream."));
    }

    #[test]
    fn placeholders_in_values_are_copied_verbatim() {
        let prompt = recipe_summary_prompt(
            "Pie {area}",
            "Dessert",
            "British",
            &[Ingredient::new("Apples {category}", "3")],
            &["Bake {step_preview}.".into()]
        );
        assert!(prompt.contains("Name: Pie {area}\n"));
        assert!(prompt.contains("Area: British\n"));
        assert!(prompt.contains("Ingredients: Apples {category} (3)\n"));
        assert!(prompt.contains("First steps: Bake {step_preview}.\n"));

        let text = summary_fallback("Seafood {area}", "Italian {featured}", &[Ingredient::new("Shrimp", "")]);
        assert_eq!(
            text,
            "A delicious seafood {area} recipe from Italian {featured}. This dish features shrimp. \
Perfect for trying something new in the kitchen!"
        );
        assert_eq!(help_fallback("{user_name}").matches("{user_name}").count(), 1);
    }

    #[test]
    fn unknown_and_unclosed_markers_pass_through() {
        assert_eq!(fill("a {x} b {", &[("y", "1")]), "a {x} b {");
        assert_eq!(fill("{y}{y}", &[("y", "1")]), "11");
    }
}

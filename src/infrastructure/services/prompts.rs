//! Prompt templates for the SmartChef generation endpoints

use crate::domain::Prompt;

const RECIPE_SYSTEM: &str = "You are a professional chef who suggests delicious and easy recipes.";

const DIET_SYSTEM: &str = "You are a certified nutritionist and professional chef. Write approachable, human-sounding diet plans with complete healthy recipes using the provided ingredients. Include tasteful emojis and readable line breaks. Be concise yet specific with actual cooking instructions.";

/// Prompt for a single creative recipe
pub fn recipe_prompt(ingredients: &str) -> Prompt {
    Prompt::new(
        RECIPE_SYSTEM,
        format!(
            "Create a creative and tasty recipe using these ingredients: {}. Include preparation steps and serving ideas.",
            ingredients
        ),
    )
}

/// Prompt for a one-day diet plan with five meals
pub fn diet_plan_prompt(ingredients: &str, temperature: f32) -> Prompt {
    let user = format!(
        "Given these ingredients: {ingredients}.\n\n\
         Create a one-day healthy diet plan (breakfast, lunch, dinner, and 2 snacks) with complete recipes for each meal. For each meal, provide:\n\
         1. Meal title\n\
         2. List of ingredients (prioritize using the provided ingredients: {ingredients})\n\
         3. Step-by-step preparation instructions\n\
         4. Approximate calories\n\
         5. Nutritional benefits\n\n\
         Make sure each recipe is healthy, balanced, and actually uses the provided ingredients. Keep it concise and friendly, with emojis and clear line breaks."
    );

    Prompt::new(DIET_SYSTEM, user).with_temperature(temperature)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_prompt() {
        let prompt = recipe_prompt("eggs, spinach");
        assert!(prompt.system.starts_with("You are a professional chef"));
        assert!(prompt.user.contains("these ingredients: eggs, spinach."));
        assert!(prompt.temperature.is_none());
    }

    #[test]
    fn test_diet_plan_prompt_mentions_ingredients_twice() {
        let prompt = diet_plan_prompt("oats, banana", 0.7);
        assert_eq!(prompt.user.matches("oats, banana").count(), 2);
        assert!(prompt.user.contains("\n1. Meal title\n"));
        assert!(prompt.user.contains("2 snacks"));
        assert_eq!(prompt.temperature, Some(0.7));
    }
}

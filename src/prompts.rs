//! The three prompt builders, one per feature. Pure functions over a profile
//! snapshot; the model receives exactly these strings.

use crate::sessions::profile::Profile;

fn profile_context(profile: &Profile) -> String {
    format!(
        "age {}, weight {} kg, height {} cm, goal: {}, activity level: {}",
        profile.age, profile.weight_kg, profile.height_cm, profile.goal, profile.activity
    )
}

pub fn meal_plan_prompt(profile: &Profile) -> String {
    format!(
        "Create a high-quality 7-day meal plan.\n\
         User Profile: {}.\n\
         \n\
         Please provide:\n\
         - Daily calorie targets\n\
         - Macronutrient breakdown (P/C/F)\n\
         - Specific meals for Breakfast, Lunch, Dinner, and Snacks\n\
         - A consolidated grocery list\n\
         - Quick prep tips for the week\n",
        profile_context(profile)
    )
}

pub fn food_analysis_prompt() -> &'static str {
    "Analyze this food image. Provide estimated calories, macros, a health rating (1-10), and portion advice."
}

/// Prepends the profile so every turn is personalized on its own. Prior
/// turns are deliberately not sent: the model sees only the profile and the
/// latest message, so it has no conversational memory across turns.
pub fn chat_prompt(profile: &Profile, user_message: &str) -> String {
    format!(
        "User Profile: {}.\nUser Question: {}",
        profile_context(profile),
        user_message
    )
}

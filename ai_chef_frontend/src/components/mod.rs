mod recent_recipes;
mod recipe_requester;

pub use recent_recipes::RecentRecipesList;
pub use recipe_requester::RecipeRequester;

pub mod get_recipe;
pub mod random_menu;
pub mod search_recipes;

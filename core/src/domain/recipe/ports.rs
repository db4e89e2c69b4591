use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{
        entities::{CoursedRecipe, Recipe, RecipeSummary},
        value_objects::{FilterKind, GetRecipeInput, SearchRecipesInput},
    },
};

/// Outbound port to the recipe database provider.
#[cfg_attr(test, mockall::automock)]
pub trait RecipeDatabasePort: Send + Sync {
    /// Full-record search by recipe name.
    fn search_by_name(
        &self,
        name: String,
    ) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;

    /// Summary-record filter by main ingredient, area or category.
    fn filter(
        &self,
        kind: FilterKind,
        term: String,
    ) -> impl Future<Output = Result<Vec<RecipeSummary>, CoreError>> + Send;

    fn lookup_by_id(
        &self,
        recipe_id: String,
    ) -> impl Future<Output = Result<Option<Recipe>, CoreError>> + Send;

    fn random(&self) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    /// Category names, used as a cheap readiness probe.
    fn list_categories(&self) -> impl Future<Output = Result<Vec<String>, CoreError>> + Send;
}

/// Service trait for recipe search and retrieval.
#[cfg_attr(test, mockall::automock)]
pub trait RecipeService: Send + Sync {
    fn search_recipes(
        &self,
        input: SearchRecipesInput,
    ) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;

    fn get_recipe(
        &self,
        input: GetRecipeInput,
    ) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    fn random_menu(&self) -> impl Future<Output = Result<Vec<CoursedRecipe>, CoreError>> + Send;
}

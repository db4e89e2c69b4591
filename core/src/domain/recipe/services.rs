use futures::future::try_join_all;
use tracing::{debug, warn};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    nutrition::ports::NutritionProviderPort,
    recipe::{
        entities::{CoursedRecipe, MealCourse, Recipe, RecipeSummary},
        ports::{RecipeDatabasePort, RecipeService},
        value_objects::{FilterKind, GetRecipeInput, SearchKind, SearchRecipesInput},
    },
};

impl<R, N> Service<R, N>
where
    R: RecipeDatabasePort,
    N: NutritionProviderPort,
{
    /// Filter endpoints return summary records without category, area,
    /// instructions or ingredients. Complete each summary with a name
    /// lookup, all lookups in one concurrent batch. Summaries whose
    /// lookup comes back empty are dropped.
    async fn complete_summaries(
        &self,
        summaries: Vec<RecipeSummary>,
    ) -> Result<Vec<Recipe>, CoreError> {
        let lookups = summaries
            .iter()
            .map(|summary| self.recipe_db.search_by_name(summary.name.clone()));
        let resolved = try_join_all(lookups).await?;

        let mut recipes = Vec::with_capacity(summaries.len());
        for (summary, mut matches) in summaries.iter().zip(resolved) {
            if matches.is_empty() {
                warn!(name = %summary.name, "dropping filter result without a full record");
                continue;
            }
            recipes.push(matches.remove(0));
        }
        Ok(recipes)
    }
}

impl<R, N> RecipeService for Service<R, N>
where
    R: RecipeDatabasePort,
    N: NutritionProviderPort,
{
    async fn search_recipes(&self, input: SearchRecipesInput) -> Result<Vec<Recipe>, CoreError> {
        let query = input.query.trim();
        if query.is_empty() {
            return Err(CoreError::InvalidInput(
                "search query must not be empty".to_string(),
            ));
        }

        debug!(kind = ?input.kind, query, "searching recipes");

        match input.kind {
            SearchKind::Name => self.recipe_db.search_by_name(query.to_string()).await,
            SearchKind::Ingredient => {
                let summaries = self
                    .recipe_db
                    .filter(FilterKind::Ingredient, query.to_string())
                    .await?;
                self.complete_summaries(summaries).await
            }
            SearchKind::Area => {
                let summaries = self
                    .recipe_db
                    .filter(FilterKind::Area, query.to_string())
                    .await?;
                self.complete_summaries(summaries).await
            }
            SearchKind::Category => {
                let summaries = self
                    .recipe_db
                    .filter(FilterKind::Category, query.to_string())
                    .await?;
                self.complete_summaries(summaries).await
            }
        }
    }

    async fn get_recipe(&self, input: GetRecipeInput) -> Result<Recipe, CoreError> {
        let recipe_id = input.recipe_id.trim();
        if recipe_id.is_empty() {
            return Err(CoreError::InvalidInput(
                "recipe id must not be empty".to_string(),
            ));
        }

        self.recipe_db
            .lookup_by_id(recipe_id.to_string())
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn random_menu(&self) -> Result<Vec<CoursedRecipe>, CoreError> {
        let draws = MealCourse::MENU.iter().map(|_| self.recipe_db.random());
        let recipes = try_join_all(draws).await?;

        Ok(MealCourse::MENU
            .into_iter()
            .zip(recipes)
            .map(|(course, recipe)| CoursedRecipe { course, recipe })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::domain::{
        nutrition::ports::MockNutritionProviderPort, recipe::ports::MockRecipeDatabasePort,
    };

    fn recipe(name: &str) -> Recipe {
        Recipe {
            id: Some("52772".to_string()),
            name: name.to_string(),
            thumbnail: Some("http://img/thumb.jpg".to_string()),
            category: Some("Pasta".to_string()),
            area: Some("Italian".to_string()),
            instructions: Some("Boil water. Cook pasta.".to_string()),
            ingredients: vec![],
            source_url: None,
            video_url: None,
        }
    }

    fn summary(name: &str) -> RecipeSummary {
        RecipeSummary {
            id: None,
            name: name.to_string(),
            thumbnail: Some("http://img/thumb.jpg".to_string()),
        }
    }

    fn service(
        recipe_db: MockRecipeDatabasePort,
    ) -> Service<MockRecipeDatabasePort, MockNutritionProviderPort> {
        Service::new(recipe_db, MockNutritionProviderPort::new())
    }

    #[tokio::test]
    async fn name_search_returns_full_records() {
        let mut recipe_db = MockRecipeDatabasePort::new();
        recipe_db
            .expect_search_by_name()
            .with(eq("pasta".to_string()))
            .times(1)
            .returning(|_| Box::pin(std::future::ready(Ok(vec![recipe("Test Pasta")]))));

        let result = service(recipe_db)
            .search_recipes(SearchRecipesInput {
                kind: SearchKind::Name,
                query: "pasta".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Test Pasta");
    }

    #[tokio::test]
    async fn search_trims_query_before_dispatch() {
        let mut recipe_db = MockRecipeDatabasePort::new();
        recipe_db
            .expect_search_by_name()
            .with(eq("pasta".to_string()))
            .times(1)
            .returning(|_| Box::pin(std::future::ready(Ok(vec![]))));

        let result = service(recipe_db)
            .search_recipes(SearchRecipesInput {
                kind: SearchKind::Name,
                query: "  pasta  ".to_string(),
            })
            .await
            .unwrap();

        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn blank_query_is_rejected() {
        let err = service(MockRecipeDatabasePort::new())
            .search_recipes(SearchRecipesInput {
                kind: SearchKind::Name,
                query: "   ".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn ingredient_search_completes_each_summary() {
        let mut recipe_db = MockRecipeDatabasePort::new();
        recipe_db
            .expect_filter()
            .with(eq(FilterKind::Ingredient), eq("chicken".to_string()))
            .times(1)
            .returning(|_, _| {
                Box::pin(std::future::ready(Ok(vec![
                    summary("Test Curry"),
                    summary("Chicken Soup"),
                ])))
            });
        recipe_db
            .expect_search_by_name()
            .with(eq("Test Curry".to_string()))
            .times(1)
            .returning(|_| Box::pin(std::future::ready(Ok(vec![recipe("Test Curry")]))));
        recipe_db
            .expect_search_by_name()
            .with(eq("Chicken Soup".to_string()))
            .times(1)
            .returning(|_| Box::pin(std::future::ready(Ok(vec![recipe("Chicken Soup")]))));

        let result = service(recipe_db)
            .search_recipes(SearchRecipesInput {
                kind: SearchKind::Ingredient,
                query: "chicken".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].name, "Test Curry");
        assert_eq!(result[1].name, "Chicken Soup");
    }

    #[tokio::test]
    async fn summaries_without_a_full_record_are_dropped() {
        let mut recipe_db = MockRecipeDatabasePort::new();
        recipe_db
            .expect_filter()
            .with(eq(FilterKind::Area), eq("Canadian".to_string()))
            .times(1)
            .returning(|_, _| {
                Box::pin(std::future::ready(Ok(vec![
                    summary("Poutine"),
                    summary("Ghost Dish"),
                ])))
            });
        recipe_db
            .expect_search_by_name()
            .with(eq("Poutine".to_string()))
            .times(1)
            .returning(|_| Box::pin(std::future::ready(Ok(vec![recipe("Poutine")]))));
        recipe_db
            .expect_search_by_name()
            .with(eq("Ghost Dish".to_string()))
            .times(1)
            .returning(|_| Box::pin(std::future::ready(Ok(vec![]))));

        let result = service(recipe_db)
            .search_recipes(SearchRecipesInput {
                kind: SearchKind::Area,
                query: "Canadian".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Poutine");
    }

    #[tokio::test]
    async fn get_recipe_maps_missing_record_to_not_found() {
        let mut recipe_db = MockRecipeDatabasePort::new();
        recipe_db
            .expect_lookup_by_id()
            .with(eq("99999".to_string()))
            .times(1)
            .returning(|_| Box::pin(std::future::ready(Ok(None))));

        let err = service(recipe_db)
            .get_recipe(GetRecipeInput {
                recipe_id: "99999".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::NotFound));
    }

    #[tokio::test]
    async fn random_menu_labels_three_draws_in_course_order() {
        let mut recipe_db = MockRecipeDatabasePort::new();
        recipe_db
            .expect_random()
            .times(3)
            .returning(|| Box::pin(std::future::ready(Ok(recipe("Surprise")))));

        let menu = service(recipe_db).random_menu().await.unwrap();

        assert_eq!(menu.len(), 3);
        assert_eq!(menu[0].course, MealCourse::Breakfast);
        assert_eq!(menu[1].course, MealCourse::Lunch);
        assert_eq!(menu[2].course, MealCourse::Dinner);
    }

    #[tokio::test]
    async fn random_menu_fails_when_any_draw_fails() {
        let mut recipe_db = MockRecipeDatabasePort::new();
        recipe_db.expect_random().returning(|| {
            Box::pin(std::future::ready(Err(CoreError::ExternalServiceError(
                "recipe database error: 500".to_string(),
            ))))
        });

        let err = service(recipe_db).random_menu().await.unwrap_err();

        assert!(matches!(err, CoreError::ExternalServiceError(_)));
    }
}

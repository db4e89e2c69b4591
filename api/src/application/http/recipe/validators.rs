use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use mealdex_core::domain::recipe::value_objects::SearchKind;

/// Search axis accepted by the search route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SearchBy {
    Name,
    Ingredient,
    Area,
    Category,
}

impl From<SearchBy> for SearchKind {
    fn from(by: SearchBy) -> Self {
        match by {
            SearchBy::Name => SearchKind::Name,
            SearchBy::Ingredient => SearchKind::Ingredient,
            SearchBy::Area => SearchKind::Area,
            SearchBy::Category => SearchKind::Category,
        }
    }
}

#[derive(Debug, Deserialize, Validate, IntoParams)]
pub struct SearchRecipesQuery {
    pub by: SearchBy,

    #[validate(length(min = 1, max = 100, message = "query must be 1-100 characters"))]
    pub q: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_by_deserializes_lowercase() {
        let by: SearchBy = serde_json::from_str(r#""ingredient""#).unwrap();
        assert_eq!(by, SearchBy::Ingredient);
    }

    #[test]
    fn unknown_search_axis_is_rejected() {
        assert!(serde_json::from_str::<SearchBy>(r#""cuisine""#).is_err());
    }

    #[test]
    fn overlong_query_fails_validation() {
        let query = SearchRecipesQuery {
            by: SearchBy::Name,
            q: "x".repeat(101),
        };
        assert!(query.validate().is_err());
    }

    #[test]
    fn empty_query_fails_validation() {
        let query = SearchRecipesQuery {
            by: SearchBy::Name,
            q: String::new(),
        };
        assert!(query.validate().is_err());
    }
}

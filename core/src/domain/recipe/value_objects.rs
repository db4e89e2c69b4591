#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    Name,
    Ingredient,
    Area,
    Category,
}

/// Filter axes supported by the provider's `filter.php` endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    Ingredient,
    Area,
    Category,
}

#[derive(Debug, Clone)]
pub struct SearchRecipesInput {
    pub kind: SearchKind,
    pub query: String,
}

#[derive(Debug, Clone)]
pub struct GetRecipeInput {
    pub recipe_id: String,
}

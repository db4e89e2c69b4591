use bytes::Bytes;

use crate::domain::recipe::entities::RecipeIngredient;

/// Uploads past this size are rejected before any upstream call.
pub const MAX_SCAN_IMAGE_BYTES: usize = 200 * 1024;

pub const ACCEPTED_IMAGE_TYPES: [&str; 3] = ["image/jpeg", "image/png", "image/webp"];

#[derive(Debug, Clone)]
pub struct RecipeNutritionInput {
    pub ingredients: Vec<RecipeIngredient>,
}

#[derive(Debug, Clone)]
pub struct ScanImageInput {
    pub image: Bytes,
    pub content_type: String,
}

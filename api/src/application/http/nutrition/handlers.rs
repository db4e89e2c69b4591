pub mod recipe_nutrition;
pub mod scan_image;

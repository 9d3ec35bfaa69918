use mandala_core::error::FieldError;
use mandala_db::db::enums::Category;
use serde::Deserialize;
use validator::Validate;

use super::scope::CatalogScope;
use crate::validation::{check_price, trim};

/// Create payload. Required fields are `Option` so that a missing key shows
/// up as a field error instead of a body parse failure.
#[derive(Debug, Default, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewContentInput {
    #[validate(
        required(message = "Title is required"),
        length(min = 1, message = "Title is required")
    )]
    pub title: Option<String>,
    #[validate(
        required(message = "Slug is required"),
        length(min = 1, message = "Slug is required")
    )]
    pub slug: Option<String>,
    #[validate(
        required(message = "Description is required"),
        length(min = 1, message = "Description is required")
    )]
    pub description: Option<String>,
    #[validate(
        required(message = "Content is required"),
        length(min = 1, message = "Content is required")
    )]
    pub content: Option<String>,
    #[validate(
        required(message = "Image is required"),
        length(min = 1, message = "Image is required")
    )]
    pub image: Option<String>,
    pub category: Option<String>,
    pub features: Option<Vec<String>>,
    pub price: Option<f64>,
}

/// Update payload; every field optional, supplied ones obey the create rules.
#[derive(Debug, Default, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContentPatch {
    #[validate(length(min = 1, message = "Title cannot be empty"))]
    pub title: Option<String>,
    #[validate(length(min = 1, message = "Slug cannot be empty"))]
    pub slug: Option<String>,
    #[validate(length(min = 1, message = "Description cannot be empty"))]
    pub description: Option<String>,
    #[validate(length(min = 1, message = "Content cannot be empty"))]
    pub content: Option<String>,
    #[validate(length(min = 1, message = "Image cannot be empty"))]
    pub image: Option<String>,
    pub category: Option<String>,
    pub features: Option<Vec<String>>,
    pub price: Option<f64>,
    pub is_active: Option<bool>,
}

impl NewContentInput {
    pub(crate) fn normalized(mut self) -> Self {
        trim(&mut self.title);
        trim(&mut self.slug);
        trim(&mut self.description);
        trim(&mut self.content);
        trim(&mut self.image);
        trim(&mut self.category);
        self
    }
}

impl ContentPatch {
    pub(crate) fn normalized(mut self) -> Self {
        trim(&mut self.title);
        trim(&mut self.slug);
        trim(&mut self.description);
        trim(&mut self.content);
        trim(&mut self.image);
        trim(&mut self.category);
        self
    }
}

/// ## Summary
/// Picks the category a create through `scope` stores.
///
/// Fixed scopes ignore `requested`; the others parse it and require it to fall
/// inside the scope. Problems are pushed onto `errors`.
pub(crate) fn category_for_create(
    scope: CatalogScope,
    requested: Option<&str>,
    errors: &mut Vec<FieldError>,
) -> Option<Category> {
    if let Some(fixed) = scope.fixed_category() {
        return Some(fixed);
    }

    match requested {
        None | Some("") => {
            let default = scope.default_category();
            if default.is_none() {
                errors.push(FieldError::new("category", "Category is required"));
            }
            default
        }
        Some(raw) => parse_in_scope(scope, raw, errors),
    }
}

/// ## Summary
/// Picks the category an update through `scope` writes, if any.
pub(crate) fn category_for_update(
    scope: CatalogScope,
    requested: Option<&str>,
    errors: &mut Vec<FieldError>,
) -> Option<Category> {
    if let Some(fixed) = scope.fixed_category() {
        return Some(fixed);
    }

    requested.and_then(|raw| parse_in_scope(scope, raw, errors))
}

fn parse_in_scope(
    scope: CatalogScope,
    raw: &str,
    errors: &mut Vec<FieldError>,
) -> Option<Category> {
    match raw.parse::<Category>() {
        Ok(category) if scope.contains(category) => Some(category),
        Ok(_) => {
            errors.push(FieldError::new(
                "category",
                format!("Category is not allowed for {}", scope.noun().to_lowercase()),
            ));
            None
        }
        Err(_) => {
            errors.push(FieldError::new("category", "Invalid category"));
            None
        }
    }
}

pub(crate) fn extra_checks(price: Option<f64>) -> Vec<FieldError> {
    let mut errors = Vec::new();
    check_price(price, &mut errors);
    errors
}

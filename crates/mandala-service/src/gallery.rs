use chrono::Utc;
use mandala_core::error::FieldError;
use mandala_db::db::enums::GalleryCategory;
use mandala_db::model::gallery::{GalleryItem, GalleryItemChanges, NewGalleryItem};
use mandala_db::store::GalleryStore;
use serde::Deserialize;
use validator::Validate;

use crate::error::{ServiceError, ServiceResult};
use crate::validation::{parse_id, trim, validate_with};

#[derive(Debug, Default, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GalleryInput {
    #[validate(
        required(message = "Image is required"),
        length(min = 1, message = "Image is required")
    )]
    pub image: Option<String>,
    pub caption: Option<String>,
    pub category: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Default, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GalleryPatch {
    #[validate(length(min = 1, message = "Image cannot be empty"))]
    pub image: Option<String>,
    pub caption: Option<String>,
    pub category: Option<String>,
    pub is_active: Option<bool>,
}

fn not_found() -> ServiceError {
    ServiceError::NotFound("Gallery item not found".to_string())
}

fn parse_category(
    raw: Option<&str>,
    errors: &mut Vec<FieldError>,
) -> Option<GalleryCategory> {
    let raw = raw.filter(|r| !r.is_empty())?;
    raw.parse::<GalleryCategory>().map_or_else(
        |_err| {
            errors.push(FieldError::new("category", "Invalid gallery category"));
            None
        },
        Some,
    )
}

/// ## Summary
/// Lists active gallery items, newest first, optionally for one category.
///
/// ## Errors
/// Returns [`ServiceError::Validation`] for an unknown category filter.
pub async fn list<S>(store: &S, category: Option<&str>) -> ServiceResult<Vec<GalleryItem>>
where
    S: GalleryStore + ?Sized,
{
    let mut errors = Vec::new();
    let category = parse_category(category, &mut errors);
    if !errors.is_empty() {
        return Err(ServiceError::Validation(errors));
    }

    Ok(store.list_active_gallery(category).await?)
}

/// ## Errors
/// Returns [`ServiceError::NotFound`] for unknown, inactive or malformed ids.
pub async fn get<S>(store: &S, raw_id: &str) -> ServiceResult<GalleryItem>
where
    S: GalleryStore + ?Sized,
{
    let id = parse_id(raw_id, not_found)?;
    store.find_active_gallery_by_id(id).await?.ok_or_else(not_found)
}

/// ## Summary
/// Adds an image to the gallery. Category defaults to `events`.
///
/// ## Errors
/// Returns [`ServiceError::Validation`] when the image is missing or the
/// category is unknown.
#[tracing::instrument(skip(store, input))]
pub async fn create<S>(store: &S, mut input: GalleryInput) -> ServiceResult<GalleryItem>
where
    S: GalleryStore + ?Sized,
{
    trim(&mut input.image);
    trim(&mut input.caption);
    trim(&mut input.category);

    let mut extra = Vec::new();
    let category = parse_category(input.category.as_deref(), &mut extra).unwrap_or_default();
    validate_with(&input, extra)?;

    let now = Utc::now();
    let item = store
        .insert_gallery(NewGalleryItem {
            id: uuid::Uuid::now_v7(),
            image: input.image.unwrap_or_default(),
            caption: input.caption.unwrap_or_default(),
            category,
            is_active: input.is_active.unwrap_or(true),
            created_at: now,
            updated_at: now,
        })
        .await?;

    tracing::info!(id = %item.id, category = %item.category, "Gallery item created");
    Ok(item)
}

/// ## Errors
/// Returns [`ServiceError::NotFound`] for unknown ids and
/// [`ServiceError::Validation`] for malformed fields.
#[tracing::instrument(skip(store, patch))]
pub async fn update<S>(store: &S, raw_id: &str, mut patch: GalleryPatch) -> ServiceResult<GalleryItem>
where
    S: GalleryStore + ?Sized,
{
    let id = parse_id(raw_id, not_found)?;
    trim(&mut patch.image);
    trim(&mut patch.caption);
    trim(&mut patch.category);

    let mut extra = Vec::new();
    let category = parse_category(patch.category.as_deref(), &mut extra);
    validate_with(&patch, extra)?;

    store
        .update_gallery(
            id,
            GalleryItemChanges {
                image: patch.image,
                caption: patch.caption,
                category,
                is_active: patch.is_active,
                updated_at: Utc::now(),
            },
        )
        .await?
        .ok_or_else(not_found)
}

/// ## Errors
/// Returns [`ServiceError::NotFound`] for unknown or malformed ids.
#[tracing::instrument(skip(store))]
pub async fn delete<S>(store: &S, raw_id: &str) -> ServiceResult<()>
where
    S: GalleryStore + ?Sized,
{
    let id = parse_id(raw_id, not_found)?;
    if store.delete_gallery(id).await? {
        Ok(())
    } else {
        Err(not_found())
    }
}

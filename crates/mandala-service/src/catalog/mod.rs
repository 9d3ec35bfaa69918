//! Catalog operations over the shared content table.
//!
//! Every operation takes a [`CatalogScope`]; the scope narrows queries and pins
//! or constrains the category on writes. Ids whose category falls outside the
//! scope are reported as missing, so an awards route can never touch a news item.

pub mod input;
pub mod scope;

use std::collections::BTreeMap;

use chrono::Utc;
use mandala_db::db::enums::Category;
use mandala_db::model::content::{ContentItem, ContentItemChanges, NewContentItem};
use mandala_db::store::ContentStore;

pub use input::{ContentPatch, NewContentInput};
pub use scope::CatalogScope;

use crate::error::{ServiceError, ServiceResult};
use crate::validation::{parse_id, validate_with};
use mandala_core::error::FieldError;

/// Active items keyed by category. Only categories with at least one item appear.
pub type CategoryGroups = BTreeMap<Category, Vec<ContentItem>>;

/// ## Summary
/// Partitions `items` by category in one pass, keeping their relative order.
#[must_use]
pub fn group_by_category(items: Vec<ContentItem>) -> CategoryGroups {
    items.into_iter().fold(BTreeMap::new(), |mut groups, item| {
        groups.entry(item.category).or_insert_with(Vec::new).push(item);
        groups
    })
}

/// ## Summary
/// Lists active items in `scope`, newest first.
///
/// ## Errors
/// Returns an error if the store query fails.
#[tracing::instrument(skip(store))]
pub async fn list<S>(store: &S, scope: CatalogScope) -> ServiceResult<Vec<ContentItem>>
where
    S: ContentStore + ?Sized,
{
    Ok(store.list_active_content(scope.categories()).await?)
}

/// ## Summary
/// Lists every active item grouped by category.
///
/// ## Errors
/// Returns an error if the store query fails.
#[tracing::instrument(skip(store))]
pub async fn list_grouped<S>(store: &S) -> ServiceResult<CategoryGroups>
where
    S: ContentStore + ?Sized,
{
    let items = store.list_active_content(None).await?;
    Ok(group_by_category(items))
}

/// ## Summary
/// Lists active items whose category equals `raw`.
///
/// ## Errors
/// Returns [`ServiceError::Validation`] when `raw` is not a known category.
#[tracing::instrument(skip(store))]
pub async fn list_by_category<S>(store: &S, raw: &str) -> ServiceResult<Vec<ContentItem>>
where
    S: ContentStore + ?Sized,
{
    let category = raw.parse::<Category>().map_err(|_err| {
        ServiceError::Validation(vec![FieldError::new("category", "Invalid category")])
    })?;

    Ok(store.list_active_content(Some(&[category])).await?)
}

/// ## Summary
/// Finds the active item with `slug` inside `scope`.
///
/// ## Errors
/// Returns the scope's not-found error when nothing matches.
#[tracing::instrument(skip(store))]
pub async fn get_by_slug<S>(store: &S, scope: CatalogScope, slug: &str) -> ServiceResult<ContentItem>
where
    S: ContentStore + ?Sized,
{
    store
        .find_active_content_by_slug(slug, scope.categories())
        .await?
        .ok_or_else(|| scope.not_found())
}

/// ## Summary
/// Finds an active item by id, provided its category is in `scope`.
///
/// ## Errors
/// Returns the scope's not-found error for unknown, inactive, malformed or
/// out-of-scope ids.
#[tracing::instrument(skip(store))]
pub async fn get_by_id<S>(store: &S, scope: CatalogScope, raw_id: &str) -> ServiceResult<ContentItem>
where
    S: ContentStore + ?Sized,
{
    let id = parse_id(raw_id, || scope.not_found())?;
    let item = find_in_scope(store, scope, id).await?;

    if item.is_active {
        Ok(item)
    } else {
        Err(scope.not_found())
    }
}

async fn find_in_scope<S>(store: &S, scope: CatalogScope, id: uuid::Uuid) -> ServiceResult<ContentItem>
where
    S: ContentStore + ?Sized,
{
    store
        .find_content_by_id(id)
        .await?
        .filter(|item| scope.contains(item.category))
        .ok_or_else(|| scope.not_found())
}

/// ## Summary
/// Validates `input` and stores a new item in `scope`.
///
/// ## Side Effects
/// Inserts one content row. New items are always active; only an update can
/// hide them.
///
/// ## Errors
/// Returns [`ServiceError::Validation`] for missing or malformed fields and
/// [`ServiceError::Duplicate`] when the slug is already used by any item.
#[tracing::instrument(skip(store, input))]
pub async fn create<S>(
    store: &S,
    scope: CatalogScope,
    input: NewContentInput,
) -> ServiceResult<ContentItem>
where
    S: ContentStore + ?Sized,
{
    let input = input.normalized();

    let mut extra = input::extra_checks(input.price);
    let category = input::category_for_create(scope, input.category.as_deref(), &mut extra);
    validate_with(&input, extra)?;

    let Some(category) = category else {
        return Err(ServiceError::Validation(vec![FieldError::new(
            "category",
            "Category is required",
        )]));
    };

    let now = Utc::now();
    let item = store
        .insert_content(NewContentItem {
            id: uuid::Uuid::now_v7(),
            title: input.title.unwrap_or_default(),
            slug: input.slug.unwrap_or_default(),
            description: input.description.unwrap_or_default(),
            content: input.content.unwrap_or_default(),
            image: input.image.unwrap_or_default(),
            category,
            features: input.features.unwrap_or_default(),
            price: input.price.unwrap_or(0.0),
            is_active: true,
            created_at: now,
            updated_at: now,
        })
        .await?;

    tracing::info!(id = %item.id, slug = %item.slug, category = %item.category, "Content item created");

    Ok(item)
}

/// ## Summary
/// Overwrites the supplied fields of an item in `scope`.
///
/// Awards and news updates always rewrite the category to their own, so an
/// item cannot be moved out of those families through them.
///
/// ## Errors
/// Returns the scope's not-found error for unknown or out-of-scope ids,
/// [`ServiceError::Validation`] for malformed fields and
/// [`ServiceError::Duplicate`] when a new slug is taken.
#[tracing::instrument(skip(store, patch))]
pub async fn update<S>(
    store: &S,
    scope: CatalogScope,
    raw_id: &str,
    patch: ContentPatch,
) -> ServiceResult<ContentItem>
where
    S: ContentStore + ?Sized,
{
    let id = parse_id(raw_id, || scope.not_found())?;
    let patch = patch.normalized();

    let mut extra = input::extra_checks(patch.price);
    let category = input::category_for_update(scope, patch.category.as_deref(), &mut extra);
    validate_with(&patch, extra)?;

    find_in_scope(store, scope, id).await?;

    let changes = ContentItemChanges {
        title: patch.title,
        slug: patch.slug,
        description: patch.description,
        content: patch.content,
        image: patch.image,
        category,
        features: patch.features,
        price: patch.price,
        is_active: patch.is_active,
        updated_at: Utc::now(),
    };

    let item = store
        .update_content(id, changes)
        .await?
        .ok_or_else(|| scope.not_found())?;

    tracing::info!(id = %item.id, "Content item updated");

    Ok(item)
}

/// ## Summary
/// Permanently removes an item in `scope`.
///
/// ## Errors
/// Returns the scope's not-found error for unknown or out-of-scope ids.
#[tracing::instrument(skip(store))]
pub async fn delete<S>(store: &S, scope: CatalogScope, raw_id: &str) -> ServiceResult<()>
where
    S: ContentStore + ?Sized,
{
    let id = parse_id(raw_id, || scope.not_found())?;
    find_in_scope(store, scope, id).await?;

    if !store.delete_content(id).await? {
        return Err(scope.not_found());
    }

    tracing::info!(%id, "Content item deleted");

    Ok(())
}

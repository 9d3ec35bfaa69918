use chrono::{DateTime, Utc};
use diesel::{pg::Pg, prelude::*};
use serde::{Deserialize, Serialize};

use crate::db::{enums::Category, schema};

/// A catalog entry. Services, awards, news and workshops are all rows of this
/// one table, told apart by `category`.
///
/// `content` is admin-authored markup that the site renders verbatim; it is
/// stored as given.
#[derive(
    Debug, Clone, PartialEq, Queryable, Selectable, Identifiable, Serialize, Deserialize,
)]
#[diesel(table_name = schema::content_item)]
#[diesel(check_for_backend(Pg))]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    pub id: uuid::Uuid,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub content: String,
    pub image: String,
    pub category: Category,
    pub features: Vec<String>,
    pub price: f64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert struct for creating new catalog entries
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = schema::content_item)]
pub struct NewContentItem {
    pub id: uuid::Uuid,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub content: String,
    pub image: String,
    pub category: Category,
    pub features: Vec<String>,
    pub price: f64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update; `None` leaves the column untouched.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = schema::content_item)]
pub struct ContentItemChanges {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
    pub category: Option<Category>,
    pub features: Option<Vec<String>>,
    pub price: Option<f64>,
    pub is_active: Option<bool>,
    pub updated_at: DateTime<Utc>,
}

impl ContentItemChanges {
    /// ## Summary
    /// Applies the supplied fields to `item` in place.
    pub fn apply(self, item: &mut ContentItem) {
        if let Some(title) = self.title {
            item.title = title;
        }
        if let Some(slug) = self.slug {
            item.slug = slug;
        }
        if let Some(description) = self.description {
            item.description = description;
        }
        if let Some(content) = self.content {
            item.content = content;
        }
        if let Some(image) = self.image {
            item.image = image;
        }
        if let Some(category) = self.category {
            item.category = category;
        }
        if let Some(features) = self.features {
            item.features = features;
        }
        if let Some(price) = self.price {
            item.price = price;
        }
        if let Some(is_active) = self.is_active {
            item.is_active = is_active;
        }
        item.updated_at = self.updated_at;
    }
}

impl From<NewContentItem> for ContentItem {
    fn from(new: NewContentItem) -> Self {
        Self {
            id: new.id,
            title: new.title,
            slug: new.slug,
            description: new.description,
            content: new.content,
            image: new.image,
            category: new.category,
            features: new.features,
            price: new.price,
            is_active: new.is_active,
            created_at: new.created_at,
            updated_at: new.updated_at,
        }
    }
}

use chrono::{DateTime, Utc};
use diesel::{pg::Pg, prelude::*};
use serde::{Deserialize, Serialize};

use crate::db::{enums::GalleryCategory, schema};

#[derive(
    Debug, Clone, PartialEq, Eq, Queryable, Selectable, Identifiable, Serialize, Deserialize,
)]
#[diesel(table_name = schema::gallery_item)]
#[diesel(check_for_backend(Pg))]
#[serde(rename_all = "camelCase")]
pub struct GalleryItem {
    pub id: uuid::Uuid,
    pub image: String,
    pub caption: String,
    pub category: GalleryCategory,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = schema::gallery_item)]
pub struct NewGalleryItem {
    pub id: uuid::Uuid,
    pub image: String,
    pub caption: String,
    pub category: GalleryCategory,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = schema::gallery_item)]
pub struct GalleryItemChanges {
    pub image: Option<String>,
    pub caption: Option<String>,
    pub category: Option<GalleryCategory>,
    pub is_active: Option<bool>,
    pub updated_at: DateTime<Utc>,
}

impl GalleryItemChanges {
    pub fn apply(self, item: &mut GalleryItem) {
        if let Some(image) = self.image {
            item.image = image;
        }
        if let Some(caption) = self.caption {
            item.caption = caption;
        }
        if let Some(category) = self.category {
            item.category = category;
        }
        if let Some(is_active) = self.is_active {
            item.is_active = is_active;
        }
        item.updated_at = self.updated_at;
    }
}

impl From<NewGalleryItem> for GalleryItem {
    fn from(new: NewGalleryItem) -> Self {
        Self {
            id: new.id,
            image: new.image,
            caption: new.caption,
            category: new.category,
            is_active: new.is_active,
            created_at: new.created_at,
            updated_at: new.updated_at,
        }
    }
}

//! Storage traits the service layer talks to.
//!
//! [`pg::PgStore`] is the production backend; [`memory::MemoryStore`] keeps
//! everything in process for development and tests. Both enforce the same
//! uniqueness rules and return lists newest first.

pub mod memory;
pub mod pg;

use std::sync::Arc;

use async_trait::async_trait;

use crate::db::enums::{Category, GalleryCategory};
use crate::error::DbResult;
use crate::model::{
    admin::{Admin, NewAdmin},
    confirmation::{Confirmation, NewConfirmation},
    contact::{ContactMessage, NewContactMessage},
    content::{ContentItem, ContentItemChanges, NewContentItem},
    gallery::{GalleryItem, GalleryItemChanges, NewGalleryItem},
};

/// Catalog entries. `categories = None` means every category.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Active items within `categories`, newest first.
    async fn list_active_content(
        &self,
        categories: Option<&[Category]>,
    ) -> DbResult<Vec<ContentItem>>;

    async fn find_active_content_by_slug(
        &self,
        slug: &str,
        categories: Option<&[Category]>,
    ) -> DbResult<Option<ContentItem>>;

    /// Looks up by id regardless of `is_active`.
    async fn find_content_by_id(&self, id: uuid::Uuid) -> DbResult<Option<ContentItem>>;

    /// ## Errors
    /// [`crate::error::DbError::UniqueViolation`] with `"slug"` when the slug is taken.
    async fn insert_content(&self, item: NewContentItem) -> DbResult<ContentItem>;

    /// Returns `None` when no row has `id`.
    async fn update_content(
        &self,
        id: uuid::Uuid,
        changes: ContentItemChanges,
    ) -> DbResult<Option<ContentItem>>;

    /// Returns whether a row was removed.
    async fn delete_content(&self, id: uuid::Uuid) -> DbResult<bool>;
}

#[async_trait]
pub trait ContactStore: Send + Sync {
    async fn insert_contact(&self, message: NewContactMessage) -> DbResult<ContactMessage>;
    async fn list_contacts(&self) -> DbResult<Vec<ContactMessage>>;
    async fn mark_contact_read(&self, id: uuid::Uuid) -> DbResult<Option<ContactMessage>>;
    async fn delete_contact(&self, id: uuid::Uuid) -> DbResult<bool>;
}

#[async_trait]
pub trait ConfirmationStore: Send + Sync {
    async fn insert_confirmation(&self, confirmation: NewConfirmation) -> DbResult<Confirmation>;
    async fn list_confirmations(&self) -> DbResult<Vec<Confirmation>>;
    async fn find_confirmation_by_id(&self, id: uuid::Uuid) -> DbResult<Option<Confirmation>>;
    async fn delete_confirmation(&self, id: uuid::Uuid) -> DbResult<bool>;
}

#[async_trait]
pub trait GalleryStore: Send + Sync {
    async fn list_active_gallery(
        &self,
        category: Option<GalleryCategory>,
    ) -> DbResult<Vec<GalleryItem>>;
    async fn find_active_gallery_by_id(&self, id: uuid::Uuid) -> DbResult<Option<GalleryItem>>;
    async fn insert_gallery(&self, item: NewGalleryItem) -> DbResult<GalleryItem>;
    async fn update_gallery(
        &self,
        id: uuid::Uuid,
        changes: GalleryItemChanges,
    ) -> DbResult<Option<GalleryItem>>;
    async fn delete_gallery(&self, id: uuid::Uuid) -> DbResult<bool>;
}

#[async_trait]
pub trait AdminStore: Send + Sync {
    async fn find_admin_by_email(&self, email: &str) -> DbResult<Option<Admin>>;

    /// ## Errors
    /// [`crate::error::DbError::UniqueViolation`] with `"email"` when the email is taken.
    async fn insert_admin(&self, admin: NewAdmin) -> DbResult<Admin>;
}

/// Everything the HTTP layer needs from persistence.
pub trait Store: ContentStore + ContactStore + ConfirmationStore + GalleryStore + AdminStore {}

impl<T> Store for T where
    T: ContentStore + ContactStore + ConfirmationStore + GalleryStore + AdminStore
{
}

pub type SharedStore = Arc<dyn Store>;

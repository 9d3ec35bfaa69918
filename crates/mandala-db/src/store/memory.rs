use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use super::{AdminStore, ConfirmationStore, ContactStore, ContentStore, GalleryStore};
use crate::db::enums::{Category, GalleryCategory};
use crate::error::{DbError, DbResult};
use crate::model::{
    admin::{Admin, NewAdmin},
    confirmation::{Confirmation, NewConfirmation},
    contact::{ContactMessage, NewContactMessage},
    content::{ContentItem, ContentItemChanges, NewContentItem},
    gallery::{GalleryItem, GalleryItemChanges, NewGalleryItem},
};

/// In-process backend. Rows are kept in insertion order.
#[derive(Default)]
pub struct MemoryStore {
    state: RwLock<MemoryState>,
}

#[derive(Default)]
struct MemoryState {
    content: Vec<ContentItem>,
    contacts: Vec<ContactMessage>,
    confirmations: Vec<Confirmation>,
    gallery: Vec<GalleryItem>,
    admins: Vec<Admin>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Newest `created_at` first; equal timestamps keep the later insert first.
fn newest_first<'a, T, I>(rows: I, created_at: fn(&T) -> DateTime<Utc>) -> Vec<T>
where
    T: Clone + 'a,
    I: DoubleEndedIterator<Item = &'a T>,
{
    let mut out: Vec<T> = rows.rev().cloned().collect();
    out.sort_by_key(|row| std::cmp::Reverse(created_at(row)));
    out
}

fn in_scope(category: Category, categories: Option<&[Category]>) -> bool {
    categories.is_none_or(|allowed| allowed.contains(&category))
}

fn remove_by<T>(rows: &mut Vec<T>, matches: impl Fn(&T) -> bool) -> bool {
    let before = rows.len();
    rows.retain(|row| !matches(row));
    rows.len() < before
}

#[async_trait]
impl ContentStore for MemoryStore {
    async fn list_active_content(
        &self,
        categories: Option<&[Category]>,
    ) -> DbResult<Vec<ContentItem>> {
        let state = self.state.read().await;
        Ok(newest_first(
            state
                .content
                .iter()
                .filter(|item| item.is_active && in_scope(item.category, categories)),
            |item| item.created_at,
        ))
    }

    async fn find_active_content_by_slug(
        &self,
        slug: &str,
        categories: Option<&[Category]>,
    ) -> DbResult<Option<ContentItem>> {
        let state = self.state.read().await;
        Ok(state
            .content
            .iter()
            .find(|item| {
                item.slug == slug && item.is_active && in_scope(item.category, categories)
            })
            .cloned())
    }

    async fn find_content_by_id(&self, id: uuid::Uuid) -> DbResult<Option<ContentItem>> {
        let state = self.state.read().await;
        Ok(state.content.iter().find(|item| item.id == id).cloned())
    }

    async fn insert_content(&self, item: NewContentItem) -> DbResult<ContentItem> {
        let mut state = self.state.write().await;
        if state.content.iter().any(|existing| existing.slug == item.slug) {
            return Err(DbError::UniqueViolation("slug"));
        }

        let item = ContentItem::from(item);
        state.content.push(item.clone());
        Ok(item)
    }

    async fn update_content(
        &self,
        id: uuid::Uuid,
        changes: ContentItemChanges,
    ) -> DbResult<Option<ContentItem>> {
        let mut state = self.state.write().await;

        if let Some(slug) = &changes.slug
            && state
                .content
                .iter()
                .any(|existing| existing.id != id && &existing.slug == slug)
        {
            return Err(DbError::UniqueViolation("slug"));
        }

        let Some(item) = state.content.iter_mut().find(|item| item.id == id) else {
            return Ok(None);
        };
        changes.apply(item);
        Ok(Some(item.clone()))
    }

    async fn delete_content(&self, id: uuid::Uuid) -> DbResult<bool> {
        let mut state = self.state.write().await;
        Ok(remove_by(&mut state.content, |item| item.id == id))
    }
}

#[async_trait]
impl ContactStore for MemoryStore {
    async fn insert_contact(&self, message: NewContactMessage) -> DbResult<ContactMessage> {
        let mut state = self.state.write().await;
        let message = ContactMessage::from(message);
        state.contacts.push(message.clone());
        Ok(message)
    }

    async fn list_contacts(&self) -> DbResult<Vec<ContactMessage>> {
        let state = self.state.read().await;
        Ok(newest_first(state.contacts.iter(), |m| m.created_at))
    }

    async fn mark_contact_read(&self, id: uuid::Uuid) -> DbResult<Option<ContactMessage>> {
        let mut state = self.state.write().await;
        Ok(state
            .contacts
            .iter_mut()
            .find(|m| m.id == id)
            .map(|m| {
                m.is_read = true;
                m.updated_at = Utc::now();
                m.clone()
            }))
    }

    async fn delete_contact(&self, id: uuid::Uuid) -> DbResult<bool> {
        let mut state = self.state.write().await;
        Ok(remove_by(&mut state.contacts, |m| m.id == id))
    }
}

#[async_trait]
impl ConfirmationStore for MemoryStore {
    async fn insert_confirmation(&self, confirmation: NewConfirmation) -> DbResult<Confirmation> {
        let mut state = self.state.write().await;
        let confirmation = Confirmation::from(confirmation);
        state.confirmations.push(confirmation.clone());
        Ok(confirmation)
    }

    async fn list_confirmations(&self) -> DbResult<Vec<Confirmation>> {
        let state = self.state.read().await;
        Ok(newest_first(state.confirmations.iter(), |c| c.created_at))
    }

    async fn find_confirmation_by_id(&self, id: uuid::Uuid) -> DbResult<Option<Confirmation>> {
        let state = self.state.read().await;
        Ok(state.confirmations.iter().find(|c| c.id == id).cloned())
    }

    async fn delete_confirmation(&self, id: uuid::Uuid) -> DbResult<bool> {
        let mut state = self.state.write().await;
        Ok(remove_by(&mut state.confirmations, |c| c.id == id))
    }
}

#[async_trait]
impl GalleryStore for MemoryStore {
    async fn list_active_gallery(
        &self,
        category: Option<GalleryCategory>,
    ) -> DbResult<Vec<GalleryItem>> {
        let state = self.state.read().await;
        Ok(newest_first(
            state
                .gallery
                .iter()
                .filter(|g| g.is_active && category.is_none_or(|c| c == g.category)),
            |g| g.created_at,
        ))
    }

    async fn find_active_gallery_by_id(&self, id: uuid::Uuid) -> DbResult<Option<GalleryItem>> {
        let state = self.state.read().await;
        Ok(state
            .gallery
            .iter()
            .find(|g| g.id == id && g.is_active)
            .cloned())
    }

    async fn insert_gallery(&self, item: NewGalleryItem) -> DbResult<GalleryItem> {
        let mut state = self.state.write().await;
        let item = GalleryItem::from(item);
        state.gallery.push(item.clone());
        Ok(item)
    }

    async fn update_gallery(
        &self,
        id: uuid::Uuid,
        changes: GalleryItemChanges,
    ) -> DbResult<Option<GalleryItem>> {
        let mut state = self.state.write().await;
        Ok(state.gallery.iter_mut().find(|g| g.id == id).map(|g| {
            changes.apply(g);
            g.clone()
        }))
    }

    async fn delete_gallery(&self, id: uuid::Uuid) -> DbResult<bool> {
        let mut state = self.state.write().await;
        Ok(remove_by(&mut state.gallery, |g| g.id == id))
    }
}

#[async_trait]
impl AdminStore for MemoryStore {
    async fn find_admin_by_email(&self, email: &str) -> DbResult<Option<Admin>> {
        let state = self.state.read().await;
        Ok(state.admins.iter().find(|a| a.email == email).cloned())
    }

    async fn insert_admin(&self, admin: NewAdmin) -> DbResult<Admin> {
        let mut state = self.state.write().await;
        if state.admins.iter().any(|a| a.email == admin.email) {
            return Err(DbError::UniqueViolation("email"));
        }

        let admin = Admin::from(admin);
        state.admins.push(admin.clone());
        Ok(admin)
    }
}

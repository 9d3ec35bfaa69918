use async_trait::async_trait;
use diesel::{ExpressionMethods, OptionalExtension, QueryDsl, SelectableHelper};
use diesel_async::RunQueryDsl;

use super::{AdminStore, ConfirmationStore, ContactStore, ContentStore, GalleryStore};
use crate::db::{
    connection::DbPool,
    enums::{Category, GalleryCategory},
    schema,
};
use crate::error::{DbResult, unique_on};
use crate::model::{
    admin::{Admin, NewAdmin},
    confirmation::{Confirmation, NewConfirmation},
    contact::{ContactMessage, NewContactMessage},
    content::{ContentItem, ContentItemChanges, NewContentItem},
    gallery::{GalleryItem, GalleryItemChanges, NewGalleryItem},
};

/// `PostgreSQL` backend over a bb8 pool.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContentStore for PgStore {
    #[tracing::instrument(skip(self))]
    async fn list_active_content(
        &self,
        categories: Option<&[Category]>,
    ) -> DbResult<Vec<ContentItem>> {
        use schema::content_item::dsl;

        let mut conn = self.pool.get().await?;

        let mut query = dsl::content_item
            .filter(dsl::is_active.eq(true))
            .order((dsl::created_at.desc(), dsl::id.desc()))
            .select(ContentItem::as_select())
            .into_boxed();

        if let Some(categories) = categories {
            query = query.filter(dsl::category.eq_any(categories.to_vec()));
        }

        Ok(query.load::<ContentItem>(&mut conn).await?)
    }

    #[tracing::instrument(skip(self))]
    async fn find_active_content_by_slug(
        &self,
        slug: &str,
        categories: Option<&[Category]>,
    ) -> DbResult<Option<ContentItem>> {
        use schema::content_item::dsl;

        let mut conn = self.pool.get().await?;

        let mut query = dsl::content_item
            .filter(dsl::slug.eq(slug))
            .filter(dsl::is_active.eq(true))
            .select(ContentItem::as_select())
            .into_boxed();

        if let Some(categories) = categories {
            query = query.filter(dsl::category.eq_any(categories.to_vec()));
        }

        Ok(query.first::<ContentItem>(&mut conn).await.optional()?)
    }

    #[tracing::instrument(skip(self))]
    async fn find_content_by_id(&self, id: uuid::Uuid) -> DbResult<Option<ContentItem>> {
        let mut conn = self.pool.get().await?;

        Ok(schema::content_item::table
            .find(id)
            .select(ContentItem::as_select())
            .first::<ContentItem>(&mut conn)
            .await
            .optional()?)
    }

    #[tracing::instrument(skip(self, item), fields(slug = %item.slug))]
    async fn insert_content(&self, item: NewContentItem) -> DbResult<ContentItem> {
        let mut conn = self.pool.get().await?;

        diesel::insert_into(schema::content_item::table)
            .values(&item)
            .returning(ContentItem::as_returning())
            .get_result::<ContentItem>(&mut conn)
            .await
            .map_err(unique_on("slug"))
    }

    #[tracing::instrument(skip(self, changes))]
    async fn update_content(
        &self,
        id: uuid::Uuid,
        changes: ContentItemChanges,
    ) -> DbResult<Option<ContentItem>> {
        let mut conn = self.pool.get().await?;

        diesel::update(schema::content_item::table.find(id))
            .set(&changes)
            .returning(ContentItem::as_returning())
            .get_result::<ContentItem>(&mut conn)
            .await
            .optional()
            .map_err(unique_on("slug"))
    }

    #[tracing::instrument(skip(self))]
    async fn delete_content(&self, id: uuid::Uuid) -> DbResult<bool> {
        let mut conn = self.pool.get().await?;

        let removed = diesel::delete(schema::content_item::table.find(id))
            .execute(&mut conn)
            .await?;

        Ok(removed > 0)
    }
}

#[async_trait]
impl ContactStore for PgStore {
    #[tracing::instrument(skip(self, message))]
    async fn insert_contact(&self, message: NewContactMessage) -> DbResult<ContactMessage> {
        let mut conn = self.pool.get().await?;

        Ok(diesel::insert_into(schema::contact_message::table)
            .values(&message)
            .returning(ContactMessage::as_returning())
            .get_result::<ContactMessage>(&mut conn)
            .await?)
    }

    #[tracing::instrument(skip(self))]
    async fn list_contacts(&self) -> DbResult<Vec<ContactMessage>> {
        use schema::contact_message::dsl;

        let mut conn = self.pool.get().await?;

        Ok(dsl::contact_message
            .order((dsl::created_at.desc(), dsl::id.desc()))
            .select(ContactMessage::as_select())
            .load::<ContactMessage>(&mut conn)
            .await?)
    }

    #[tracing::instrument(skip(self))]
    async fn mark_contact_read(&self, id: uuid::Uuid) -> DbResult<Option<ContactMessage>> {
        use schema::contact_message::dsl;

        let mut conn = self.pool.get().await?;

        Ok(diesel::update(dsl::contact_message.find(id))
            .set((
                dsl::is_read.eq(true),
                dsl::updated_at.eq(chrono::Utc::now()),
            ))
            .returning(ContactMessage::as_returning())
            .get_result::<ContactMessage>(&mut conn)
            .await
            .optional()?)
    }

    #[tracing::instrument(skip(self))]
    async fn delete_contact(&self, id: uuid::Uuid) -> DbResult<bool> {
        let mut conn = self.pool.get().await?;

        let removed = diesel::delete(schema::contact_message::table.find(id))
            .execute(&mut conn)
            .await?;

        Ok(removed > 0)
    }
}

#[async_trait]
impl ConfirmationStore for PgStore {
    #[tracing::instrument(skip(self, confirmation))]
    async fn insert_confirmation(&self, confirmation: NewConfirmation) -> DbResult<Confirmation> {
        let mut conn = self.pool.get().await?;

        Ok(diesel::insert_into(schema::confirmation::table)
            .values(&confirmation)
            .returning(Confirmation::as_returning())
            .get_result::<Confirmation>(&mut conn)
            .await?)
    }

    #[tracing::instrument(skip(self))]
    async fn list_confirmations(&self) -> DbResult<Vec<Confirmation>> {
        use schema::confirmation::dsl;

        let mut conn = self.pool.get().await?;

        Ok(dsl::confirmation
            .order((dsl::created_at.desc(), dsl::id.desc()))
            .select(Confirmation::as_select())
            .load::<Confirmation>(&mut conn)
            .await?)
    }

    #[tracing::instrument(skip(self))]
    async fn find_confirmation_by_id(&self, id: uuid::Uuid) -> DbResult<Option<Confirmation>> {
        let mut conn = self.pool.get().await?;

        Ok(schema::confirmation::table
            .find(id)
            .select(Confirmation::as_select())
            .first::<Confirmation>(&mut conn)
            .await
            .optional()?)
    }

    #[tracing::instrument(skip(self))]
    async fn delete_confirmation(&self, id: uuid::Uuid) -> DbResult<bool> {
        let mut conn = self.pool.get().await?;

        let removed = diesel::delete(schema::confirmation::table.find(id))
            .execute(&mut conn)
            .await?;

        Ok(removed > 0)
    }
}

#[async_trait]
impl GalleryStore for PgStore {
    #[tracing::instrument(skip(self))]
    async fn list_active_gallery(
        &self,
        category: Option<GalleryCategory>,
    ) -> DbResult<Vec<GalleryItem>> {
        use schema::gallery_item::dsl;

        let mut conn = self.pool.get().await?;

        let mut query = dsl::gallery_item
            .filter(dsl::is_active.eq(true))
            .order((dsl::created_at.desc(), dsl::id.desc()))
            .select(GalleryItem::as_select())
            .into_boxed();

        if let Some(category) = category {
            query = query.filter(dsl::category.eq(category));
        }

        Ok(query.load::<GalleryItem>(&mut conn).await?)
    }

    #[tracing::instrument(skip(self))]
    async fn find_active_gallery_by_id(&self, id: uuid::Uuid) -> DbResult<Option<GalleryItem>> {
        use schema::gallery_item::dsl;

        let mut conn = self.pool.get().await?;

        Ok(dsl::gallery_item
            .find(id)
            .filter(dsl::is_active.eq(true))
            .select(GalleryItem::as_select())
            .first::<GalleryItem>(&mut conn)
            .await
            .optional()?)
    }

    #[tracing::instrument(skip(self, item))]
    async fn insert_gallery(&self, item: NewGalleryItem) -> DbResult<GalleryItem> {
        let mut conn = self.pool.get().await?;

        Ok(diesel::insert_into(schema::gallery_item::table)
            .values(&item)
            .returning(GalleryItem::as_returning())
            .get_result::<GalleryItem>(&mut conn)
            .await?)
    }

    #[tracing::instrument(skip(self, changes))]
    async fn update_gallery(
        &self,
        id: uuid::Uuid,
        changes: GalleryItemChanges,
    ) -> DbResult<Option<GalleryItem>> {
        let mut conn = self.pool.get().await?;

        Ok(diesel::update(schema::gallery_item::table.find(id))
            .set(&changes)
            .returning(GalleryItem::as_returning())
            .get_result::<GalleryItem>(&mut conn)
            .await
            .optional()?)
    }

    #[tracing::instrument(skip(self))]
    async fn delete_gallery(&self, id: uuid::Uuid) -> DbResult<bool> {
        let mut conn = self.pool.get().await?;

        let removed = diesel::delete(schema::gallery_item::table.find(id))
            .execute(&mut conn)
            .await?;

        Ok(removed > 0)
    }
}

#[async_trait]
impl AdminStore for PgStore {
    #[tracing::instrument(skip(self))]
    async fn find_admin_by_email(&self, email: &str) -> DbResult<Option<Admin>> {
        let mut conn = self.pool.get().await?;

        Ok(schema::admin::table
            .filter(schema::admin::email.eq(email))
            .select(Admin::as_select())
            .first::<Admin>(&mut conn)
            .await
            .optional()?)
    }

    #[tracing::instrument(skip(self, admin), fields(email = %admin.email))]
    async fn insert_admin(&self, admin: NewAdmin) -> DbResult<Admin> {
        let mut conn = self.pool.get().await?;

        diesel::insert_into(schema::admin::table)
            .values(&admin)
            .returning(Admin::as_returning())
            .get_result::<Admin>(&mut conn)
            .await
            .map_err(unique_on("email"))
    }
}

use chrono::{DateTime, Utc};
use diesel::{pg::Pg, prelude::*};

use crate::db::schema;

/// The single admin credential. `password_hash` is an Argon2 PHC string.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Identifiable)]
#[diesel(table_name = schema::admin)]
#[diesel(check_for_backend(Pg))]
pub struct Admin {
    pub id: uuid::Uuid,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = schema::admin)]
pub struct NewAdmin {
    pub id: uuid::Uuid,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<NewAdmin> for Admin {
    fn from(new: NewAdmin) -> Self {
        Self {
            id: new.id,
            email: new.email,
            password_hash: new.password_hash,
            created_at: new.created_at,
            updated_at: new.updated_at,
        }
    }
}

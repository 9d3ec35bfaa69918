use chrono::{DateTime, Utc};
use diesel::{pg::Pg, prelude::*};
use serde::{Deserialize, Serialize};

use crate::db::schema;

/// Terms acceptance submitted by a workshop or seminar participant.
/// Never updated once stored.
#[derive(
    Debug, Clone, PartialEq, Eq, Queryable, Selectable, Identifiable, Serialize, Deserialize,
)]
#[diesel(table_name = schema::confirmation)]
#[diesel(check_for_backend(Pg))]
#[serde(rename_all = "camelCase")]
pub struct Confirmation {
    pub id: uuid::Uuid,
    pub name: String,
    pub organization: String,
    pub position: String,
    pub email: String,
    pub phone: String,
    pub accepted_terms: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = schema::confirmation)]
pub struct NewConfirmation {
    pub id: uuid::Uuid,
    pub name: String,
    pub organization: String,
    pub position: String,
    pub email: String,
    pub phone: String,
    pub accepted_terms: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<NewConfirmation> for Confirmation {
    fn from(new: NewConfirmation) -> Self {
        Self {
            id: new.id,
            name: new.name,
            organization: new.organization,
            position: new.position,
            email: new.email,
            phone: new.phone,
            accepted_terms: new.accepted_terms,
            created_at: new.created_at,
            updated_at: new.updated_at,
        }
    }
}

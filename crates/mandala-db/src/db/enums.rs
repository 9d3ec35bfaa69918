//! Database enum types with Diesel serialization.
//!
//! Each enum mirrors a `CHECK (... IN (...))` constraint in the migrations and
//! implements `ToSql` and `FromSql` for conversion between Rust and `PostgreSQL` text.

use diesel::deserialize::{self, FromSql, FromSqlRow};
use diesel::expression::AsExpression;
use diesel::pg::{Pg, PgValue};
use diesel::serialize::{self, IsNull, Output, ToSql};
use diesel::sql_types::Text;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use std::str::FromStr;

/// Raised when text does not name a known enum variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unrecognized {kind}: {value}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

/// Content category.
///
/// One `content_item` table backs services, awards, news and workshops; this
/// tag decides which of those logical resources an item belongs to.
///
/// Maps to `content_item.category` CHECK constraint.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    AsExpression,
    FromSqlRow,
    Serialize,
    Deserialize,
)]
#[diesel(sql_type = Text)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Vastu,
    TypesOfVastu,
    Astrology,
    Numerology,
    Education,
    Awards,
    News,
    Workshop,
    Seminar,
}

impl Category {
    pub const ALL: [Self; 9] = [
        Self::Vastu,
        Self::TypesOfVastu,
        Self::Astrology,
        Self::Numerology,
        Self::Education,
        Self::Awards,
        Self::News,
        Self::Workshop,
        Self::Seminar,
    ];

    /// Returns the database string representation of this category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Vastu => "vastu",
            Self::TypesOfVastu => "types-of-vastu",
            Self::Astrology => "astrology",
            Self::Numerology => "numerology",
            Self::Education => "education",
            Self::Awards => "awards",
            Self::News => "news",
            Self::Workshop => "workshop",
            Self::Seminar => "seminar",
        }
    }
}

impl FromStr for Category {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownVariant {
                kind: "category",
                value: s.to_string(),
            })
    }
}

impl ToSql<Text, Pg> for Category {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        out.write_all(self.as_str().as_bytes())?;
        Ok(IsNull::No)
    }
}

impl FromSql<Text, Pg> for Category {
    fn from_sql(bytes: PgValue<'_>) -> deserialize::Result<Self> {
        let text = std::str::from_utf8(bytes.as_bytes())?;
        Ok(text.parse()?)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Gallery image category.
///
/// Maps to `gallery_item.category` CHECK constraint.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    AsExpression,
    FromSqlRow,
    Serialize,
    Deserialize,
)]
#[diesel(sql_type = Text)]
#[serde(rename_all = "lowercase")]
pub enum GalleryCategory {
    Workshop,
    Seminar,
    Consultation,
    Awards,
    #[default]
    Events,
}

impl GalleryCategory {
    pub const ALL: [Self; 5] = [
        Self::Workshop,
        Self::Seminar,
        Self::Consultation,
        Self::Awards,
        Self::Events,
    ];

    /// Returns the database string representation of this gallery category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Workshop => "workshop",
            Self::Seminar => "seminar",
            Self::Consultation => "consultation",
            Self::Awards => "awards",
            Self::Events => "events",
        }
    }
}

impl FromStr for GalleryCategory {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownVariant {
                kind: "gallery category",
                value: s.to_string(),
            })
    }
}

impl ToSql<Text, Pg> for GalleryCategory {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        out.write_all(self.as_str().as_bytes())?;
        Ok(IsNull::No)
    }
}

impl FromSql<Text, Pg> for GalleryCategory {
    fn from_sql(bytes: PgValue<'_>) -> deserialize::Result<Self> {
        let text = std::str::from_utf8(bytes.as_bytes())?;
        Ok(text.parse()?)
    }
}

impl fmt::Display for GalleryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

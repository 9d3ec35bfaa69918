use mandala_db::db::enums::Category;

use crate::error::ServiceError;

/// One of the four route families over the shared content table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogScope {
    /// Every category.
    Services,
    Awards,
    News,
    /// `workshop` and `seminar`.
    Workshops,
}

const AWARDS: &[Category] = &[Category::Awards];
const NEWS: &[Category] = &[Category::News];
const WORKSHOPS: &[Category] = &[Category::Workshop, Category::Seminar];

impl CatalogScope {
    /// Category filter for queries; `None` means unfiltered.
    #[must_use]
    pub const fn categories(self) -> Option<&'static [Category]> {
        match self {
            Self::Services => None,
            Self::Awards => Some(AWARDS),
            Self::News => Some(NEWS),
            Self::Workshops => Some(WORKSHOPS),
        }
    }

    /// Category stamped on every write through this scope, whatever the caller sent.
    #[must_use]
    pub const fn fixed_category(self) -> Option<Category> {
        match self {
            Self::Awards => Some(Category::Awards),
            Self::News => Some(Category::News),
            Self::Services | Self::Workshops => None,
        }
    }

    /// Category used on create when the caller leaves it out.
    #[must_use]
    pub const fn default_category(self) -> Option<Category> {
        match self {
            Self::Workshops => Some(Category::Workshop),
            other => other.fixed_category(),
        }
    }

    #[must_use]
    pub fn contains(self, category: Category) -> bool {
        self.categories()
            .is_none_or(|allowed| allowed.contains(&category))
    }

    /// Singular name used in client-facing messages.
    #[must_use]
    pub const fn noun(self) -> &'static str {
        match self {
            Self::Services => "Service",
            Self::Awards => "Award",
            Self::News => "News",
            Self::Workshops => "Workshop",
        }
    }

    #[must_use]
    pub fn not_found(self) -> ServiceError {
        ServiceError::NotFound(format!("{} not found", self.noun()))
    }

    #[must_use]
    pub fn deleted_message(self) -> String {
        format!("{} deleted successfully", self.noun())
    }
}

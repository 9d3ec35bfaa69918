/// Route component constants shared across crates
pub const API_ROUTE_COMPONENT: &str = "api";
pub const API_ROUTE_PREFIX: &str = const_str::concat!("/", API_ROUTE_COMPONENT);

pub const SERVICES_ROUTE_COMPONENT: &str = "services";
pub const SERVICES_ROUTE_PREFIX: &str =
    const_str::concat!(API_ROUTE_PREFIX, "/", SERVICES_ROUTE_COMPONENT);

pub const AWARDS_ROUTE_COMPONENT: &str = "awards";
pub const AWARDS_ROUTE_PREFIX: &str =
    const_str::concat!(API_ROUTE_PREFIX, "/", AWARDS_ROUTE_COMPONENT);

pub const NEWS_ROUTE_COMPONENT: &str = "news";
pub const NEWS_ROUTE_PREFIX: &str = const_str::concat!(API_ROUTE_PREFIX, "/", NEWS_ROUTE_COMPONENT);

pub const WORKSHOPS_ROUTE_COMPONENT: &str = "workshops";
pub const WORKSHOPS_ROUTE_PREFIX: &str =
    const_str::concat!(API_ROUTE_PREFIX, "/", WORKSHOPS_ROUTE_COMPONENT);

pub const GALLERY_ROUTE_COMPONENT: &str = "gallery";
pub const CONTACT_ROUTE_COMPONENT: &str = "contact";
pub const CONFIRMATIONS_ROUTE_COMPONENT: &str = "confirmations";
pub const AUTH_ROUTE_COMPONENT: &str = "auth";
pub const HEALTH_ROUTE_COMPONENT: &str = "health";

/// URL scheme that selects the in-process store instead of `PostgreSQL`.
pub const MEMORY_DATABASE_SCHEME: &str = "memory://";

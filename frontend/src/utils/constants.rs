//! Application constants

/// Default API origin; override at build time with STORYLAND_API_URL
pub const API_BASE: &str = "http://localhost:8000";

/// API origin for this deployment.
pub fn api_base() -> &'static str {
    option_env!("STORYLAND_API_URL").unwrap_or(API_BASE)
}

// Durable storage keys (localStorage)
pub const SESSION_STORAGE_KEY: &str = "storyland-auth";
pub const TOKEN_STORAGE_KEY: &str = "storyland-token";

/// Bearer token lifetime, matching the server-issued credential
pub const TOKEN_TTL_DAYS: f64 = 7.0;

/// Library page size
pub const STORIES_PAGE_SIZE: u32 = 12;

// Story catalogs shown in filters and the generation form
pub const THEMES: &[(&str, &str, &str)] = &[
    ("adventure", "Adventure", "🏔️"),
    ("fantasy", "Fantasy & Magic", "🧙"),
    ("animals", "Animals", "🐾"),
    ("friendship", "Friendship", "🤝"),
    ("nature", "Nature", "🌳"),
    ("space", "Space & Science", "🚀"),
    ("fairy-tales", "Fairy Tales", "👸"),
    ("bedtime", "Bedtime", "🌙"),
];

pub const AGE_GROUPS: &[(&str, &str, &str)] = &[
    ("3-5", "Ages 3-5", "Simple words, short stories"),
    ("6-8", "Ages 6-8", "Fun adventures, easy reading"),
    ("9-12", "Ages 9-12", "Complex plots, rich vocabulary"),
];

// Story generation form bounds
pub const MIN_PAGE_COUNT: u32 = 5;
pub const MAX_PAGE_COUNT: u32 = 20;
pub const DEFAULT_PAGE_COUNT: u32 = 10;

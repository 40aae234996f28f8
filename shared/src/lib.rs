//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the StoryLand web client and the
//! StoryLand REST API. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Authentication and user account DTOs
//!   - **[`dto::story`]**: Story catalog, rating, and generation DTOs
//!   - **[`dto::subscription`]**: Subscription and checkout DTOs
//! - **[`utils`]**: Shared display-formatting helpers
//!   - **[`utils::format_read_count`]**: Compact read-count display
//!   - **[`utils::capitalize`]**: Capitalize subscription tier names
//!
//! ## Wire Format
//!
//! All DTOs serialize to JSON using the default `serde` behavior:
//! - Field names use **snake_case** in Rust, which maps to **snake_case** in JSON by default
//! - Optional fields are omitted from JSON when `None` (using `#[serde(skip_serializing_if = "Option::is_none")]`)
//! - All structs implement both `Serialize` and `Deserialize` for bidirectional communication
//!
//! ## Usage in the Frontend
//!
//! ```rust
//! use shared::dto::story::GenerateStoryRequest;
//!
//! let request = GenerateStoryRequest {
//!     title: "The Magical Rainbow Dragon".to_string(),
//!     age_group: "6-8".to_string(),
//!     theme: "fantasy".to_string(),
//!     page_count: 10,
//! };
//!
//! let body = serde_json::to_string(&request).unwrap();
//! assert!(body.contains("\"age_group\":\"6-8\""));
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
// Note: Wildcard re-exports are used here since shared is a DTO library
// where all exports are meant to be public API
pub use dto::*;
pub use utils::*;

//! Domain layer containing entities and repository contracts.
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Storage and counter trait definitions
//!
//! The domain layer has no dependencies on infrastructure or HTTP. Business
//! logic lives in [`crate::application::services`].

pub mod entities;
pub mod repositories;

//! Link storage implementations.
//!
//! - [`InMemoryUrlRepository`] - Mutex-guarded map, lost on restart

pub mod memory_url_repository;

pub use memory_url_repository::InMemoryUrlRepository;

//! # Storage Layer
//!
//! This module defines the storage abstraction for blogz. The [`PostStore`] trait
//! lets the rest of the application work against any backend that can hand back
//! the whole post collection and take it back again.
//!
//! ## Implementations
//!
//! - [`fs::JsonFileStore`]: Production storage
//!   - All posts in one JSON array (`data.json` by default)
//!   - Every save replaces the file atomically (temp file + rename)
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Can simulate write failures
//!
//! ## Storage Format
//!
//! ```text
//! [
//!   { "id": 1, "author": "...", "title": "...", "content": "..." },
//!   { "id": 2, "author": "...", "title": "...", "content": "..." }
//! ]
//! ```
//!
//! Order in the file is the order posts are listed in.
//!
//! ## Whole-Collection Semantics
//!
//! There are no per-post operations at this level. Callers load everything,
//! change their copy, and save everything. Serializing those read-modify-write
//! cycles is the caller's job (see [`crate::api::BlogApi`]).

use crate::error::Result;
use crate::model::Post;

pub mod fs;
pub mod memory;

/// Abstract interface for post storage.
///
/// Methods take `&self` so one store can be shared between request handlers;
/// implementations use interior mutability where they need it.
pub trait PostStore: Send + Sync {
    /// Load every post, in stored order.
    fn load(&self) -> Result<Vec<Post>>;

    /// Replace the stored collection with `posts`.
    fn save(&self, posts: &[Post]) -> Result<()>;

    /// Whether the backing collection exists yet.
    fn is_initialized(&self) -> Result<bool>;
}

impl<S: PostStore + ?Sized> PostStore for Box<S> {
    fn load(&self) -> Result<Vec<Post>> {
        (**self).load()
    }

    fn save(&self, posts: &[Post]) -> Result<()> {
        (**self).save(posts)
    }

    fn is_initialized(&self) -> Result<bool> {
        (**self).is_initialized()
    }
}

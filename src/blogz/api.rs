//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for every blogz operation, whichever UI is driving it (the web
//! routes, the `init` subcommand, tests).
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns** the store
//! - **Serializes** mutations: create, update and delete each run their
//!   load-modify-save cycle under one write lock, so concurrent requests in
//!   this process cannot overwrite each other's changes
//! - **Dispatches** to the matching command function
//! - **Logs** what changed
//!
//! Reads (`list_posts`, `get_post`) do not take the lock; a save replaces the
//! data file atomically, so a reader sees either the old or the new collection.
//!
//! ## Generic Over PostStore
//!
//! `BlogApi<S: PostStore>` is generic over the storage backend:
//! - Production: `BlogApi<JsonFileStore>` (boxed as [`DynBlogApi`] for the web layer)
//! - Testing: `BlogApi<InMemoryStore>`

use crate::commands::{self, CmdMessage, CmdResult};
use crate::error::{BlogError, Result};
use crate::model::{Post, PostDraft};
use crate::store::PostStore;
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, info};

/// The API as shared by the web server: backend chosen at startup.
pub type DynBlogApi = BlogApi<Box<dyn PostStore>>;

/// The main API facade for blogz operations.
pub struct BlogApi<S: PostStore> {
    store: S,
    write_lock: Mutex<()>,
}

impl<S: PostStore> BlogApi<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn list_posts(&self) -> Result<CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn get_post(&self, id: u64) -> Result<Post> {
        commands::get::run(&self.store, id)
    }

    pub fn create_post(&self, draft: PostDraft) -> Result<CmdResult> {
        let _guard = self.lock()?;
        let result = commands::create::run(&self.store, draft)?;
        log_messages(&result.messages);
        Ok(result)
    }

    pub fn update_post(&self, id: u64, draft: PostDraft) -> Result<CmdResult> {
        let _guard = self.lock()?;
        let result = commands::update::run(&self.store, id, draft)?;
        log_messages(&result.messages);
        Ok(result)
    }

    pub fn delete_post(&self, id: u64) -> Result<CmdResult> {
        let _guard = self.lock()?;
        let result = commands::delete::run(&self.store, id)?;
        log_messages(&result.messages);
        Ok(result)
    }

    pub fn init(&self) -> Result<CmdResult> {
        let _guard = self.lock()?;
        commands::init::run(&self.store)
    }

    fn lock(&self) -> Result<MutexGuard<'_, ()>> {
        debug!("acquiring write lock");
        self.write_lock
            .lock()
            .map_err(|_| BlogError::Store("Write lock poisoned".to_string()))
    }
}

fn log_messages(messages: &[CmdMessage]) {
    for message in messages {
        info!(level = ?message.level, "{}", message.content);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn create_dispatches_and_returns_post() {
        let api = BlogApi::new(InMemoryStore::new());
        let result = api.create_post(PostDraft::new("A", "T", "C")).unwrap();
        assert_eq!(result.affected_posts[0].id, 1);
        assert_eq!(api.list_posts().unwrap().listed_posts.len(), 1);
    }

    #[test]
    fn get_missing_post_is_not_found() {
        let api = BlogApi::new(InMemoryStore::new());
        assert!(matches!(api.get_post(1), Err(BlogError::PostNotFound(1))));
    }

    #[test]
    fn update_and_delete_dispatch() {
        let api = BlogApi::new(StoreFixture::new().with_posts(2).store);
        api.update_post(1, PostDraft::new("x", "y", "z")).unwrap();
        assert_eq!(api.get_post(1).unwrap().title, "y");

        api.delete_post(1).unwrap();
        assert!(api.get_post(1).is_err());
        assert_eq!(api.list_posts().unwrap().listed_posts.len(), 1);
    }

    #[test]
    fn boxed_store_works_through_dyn_api() {
        let api: DynBlogApi = BlogApi::new(Box::new(InMemoryStore::new()));
        api.create_post(PostDraft::default()).unwrap();
        assert_eq!(api.list_posts().unwrap().listed_posts.len(), 1);
    }

    #[test]
    fn concurrent_creates_do_not_lose_posts() {
        let api = Arc::new(BlogApi::new(InMemoryStore::new()));
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let api = Arc::clone(&api);
                thread::spawn(move || {
                    for j in 0..10 {
                        api.create_post(PostDraft::new(
                            format!("t{}", i),
                            format!("post {}", j),
                            "",
                        ))
                        .unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let posts = api.list_posts().unwrap().listed_posts;
        assert_eq!(posts.len(), 80);
        let mut ids: Vec<_> = posts.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 80);
    }
}

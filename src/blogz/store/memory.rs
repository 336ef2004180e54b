use super::PostStore;
use crate::error::{BlogError, Result};
use crate::model::Post;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    posts: RwLock<Vec<Post>>,
    simulate_write_error: AtomicBool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self {
            posts: RwLock::new(posts),
            ..Default::default()
        }
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.store(simulate, Ordering::SeqCst);
    }
}

fn poisoned() -> BlogError {
    BlogError::Store("In-memory store lock poisoned".to_string())
}

impl PostStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Post>> {
        let posts = self.posts.read().map_err(|_| poisoned())?;
        Ok(posts.clone())
    }

    fn save(&self, new_posts: &[Post]) -> Result<()> {
        if self.simulate_write_error.load(Ordering::SeqCst) {
            return Err(BlogError::Store("Simulated write error".to_string()));
        }
        let mut posts = self.posts.write().map_err(|_| poisoned())?;
        *posts = new_posts.to_vec();
        Ok(())
    }

    fn is_initialized(&self) -> Result<bool> {
        Ok(true)
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::PostDraft;

    pub struct StoreFixture {
        pub store: InMemoryStore,
        next_id: u64,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                next_id: 1,
            }
        }

        pub fn with_posts(mut self, count: usize) -> Self {
            for i in 0..count {
                let draft = PostDraft::new(
                    format!("Author {}", i + 1),
                    format!("Test Post {}", i + 1),
                    format!("Content for post {}", i + 1),
                );
                self = self.push(draft);
            }
            self
        }

        pub fn with_post(self, author: &str, title: &str, content: &str) -> Self {
            self.push(PostDraft::new(author, title, content))
        }

        /// Adds a post with an explicit id, leaving gaps as given.
        pub fn with_post_id(mut self, id: u64, title: &str) -> Self {
            let mut posts = self.store.load().unwrap();
            posts.push(Post::new(id, PostDraft::new("Author", title, "")));
            self.store.save(&posts).unwrap();
            self.next_id = self.next_id.max(id + 1);
            self
        }

        fn push(mut self, draft: PostDraft) -> Self {
            let mut posts = self.store.load().unwrap();
            posts.push(Post::new(self.next_id, draft));
            self.store.save(&posts).unwrap();
            self.next_id += 1;
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PostDraft;

    #[test]
    fn starts_empty_and_initialized() {
        let store = InMemoryStore::new();
        assert!(store.is_initialized().unwrap());
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_replaces_collection() {
        let store = InMemoryStore::with_posts(vec![Post::new(1, PostDraft::default())]);
        let replacement = vec![Post::new(9, PostDraft::new("a", "b", "c"))];
        store.save(&replacement).unwrap();
        assert_eq!(store.load().unwrap(), replacement);
    }

    #[test]
    fn simulated_write_error_keeps_old_posts() {
        let original = vec![Post::new(1, PostDraft::new("a", "b", "c"))];
        let store = InMemoryStore::with_posts(original.clone());
        store.set_simulate_write_error(true);

        assert!(store.save(&[]).is_err());
        assert_eq!(store.load().unwrap(), original);
    }
}

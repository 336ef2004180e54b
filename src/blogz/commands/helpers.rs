use crate::error::{BlogError, Result};
use crate::model::Post;

/// Linear scan for the first post with the given id.
pub fn find_by_id(posts: &[Post], id: u64) -> Option<&Post> {
    posts.iter().find(|post| post.id == id)
}

/// Mutable variant of [`find_by_id`].
pub fn find_by_id_mut(posts: &mut [Post], id: u64) -> Option<&mut Post> {
    posts.iter_mut().find(|post| post.id == id)
}

/// Id for a new post: one past the largest id in use, or 1 for an empty collection.
///
/// Fails once the largest id is `u64::MAX`; wrapping around would hand out an id already in use.
pub fn next_id(posts: &[Post]) -> Result<u64> {
    match posts.iter().map(|post| post.id).max() {
        None => Ok(1),
        Some(max) => max
            .checked_add(1)
            .ok_or_else(|| BlogError::Store("post id space exhausted".to_string())),
    }
}

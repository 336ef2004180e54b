use crate::commands::helpers::find_by_id;
use crate::error::{BlogError, Result};
use crate::model::Post;
use crate::store::PostStore;

/// Looks up a single post, turning absence into [`BlogError::PostNotFound`].
pub fn run<S: PostStore + ?Sized>(store: &S, id: u64) -> Result<Post> {
    let posts = store.load()?;
    find_by_id(&posts, id)
        .cloned()
        .ok_or(BlogError::PostNotFound(id))
}

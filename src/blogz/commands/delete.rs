use crate::commands::{CmdMessage, CmdResult};
use crate::error::{BlogError, Result};
use crate::store::PostStore;

pub fn run<S: PostStore + ?Sized>(store: &S, id: u64) -> Result<CmdResult> {
    let mut posts = store.load()?;
    let position = posts
        .iter()
        .position(|post| post.id == id)
        .ok_or(BlogError::PostNotFound(id))?;
    let removed = posts.remove(position);
    store.save(&posts)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Post deleted ({}): {}",
        removed.id, removed.title
    )));
    Ok(result.with_affected_posts(vec![removed]))
}

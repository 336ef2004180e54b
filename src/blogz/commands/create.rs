use crate::commands::helpers::next_id;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Post, PostDraft};
use crate::store::PostStore;

pub fn run<S: PostStore + ?Sized>(store: &S, draft: PostDraft) -> Result<CmdResult> {
    let mut posts = store.load()?;
    let post = Post::new(next_id(&posts)?, draft);
    posts.push(post.clone());
    store.save(&posts)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Post created ({}): {}",
        post.id, post.title
    )));
    Ok(result.with_affected_posts(vec![post]))
}

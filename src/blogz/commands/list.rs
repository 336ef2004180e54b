use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::PostStore;

pub fn run<S: PostStore + ?Sized>(store: &S) -> Result<CmdResult> {
    let posts = store.load()?;
    Ok(CmdResult::default().with_listed_posts(posts))
}

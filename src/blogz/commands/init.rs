use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::PostStore;

/// Creates an empty collection unless one already exists. Existing posts are never touched.
pub fn run<S: PostStore + ?Sized>(store: &S) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if store.is_initialized()? {
        let count = store.load()?.len();
        result.add_message(CmdMessage::info(format!(
            "Store already initialized ({} posts)",
            count
        )));
        return Ok(result);
    }

    store.save(&[])?;
    result.add_message(CmdMessage::success("Initialized empty post store"));
    Ok(result)
}

use crate::commands::helpers::find_by_id_mut;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{BlogError, Result};
use crate::model::PostDraft;
use crate::store::PostStore;

pub fn run<S: PostStore + ?Sized>(store: &S, id: u64, draft: PostDraft) -> Result<CmdResult> {
    let mut posts = store.load()?;
    let post = find_by_id_mut(&mut posts, id).ok_or(BlogError::PostNotFound(id))?;
    post.apply(draft);
    let updated = post.clone();
    store.save(&posts)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Post updated ({}): {}",
        updated.id, updated.title
    )));
    Ok(result.with_affected_posts(vec![updated]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn overwrites_fields_of_target_only() {
        let fixture = StoreFixture::new().with_posts(3);
        let before = fixture.store.load().unwrap();

        run(&fixture.store, 2, PostDraft::new("New A", "New T", "New C")).unwrap();

        let after = fixture.store.load().unwrap();
        assert_eq!(after.len(), 3);
        assert_eq!(after[0], before[0]);
        assert_eq!(after[2], before[2]);
        assert_eq!(after[1].id, 2);
        assert_eq!(PostDraft::from(&after[1]), PostDraft::new("New A", "New T", "New C"));
    }

    #[test]
    fn keeps_position_in_collection() {
        let fixture = StoreFixture::new()
            .with_post_id(5, "five")
            .with_post_id(1, "one");
        run(&fixture.store, 5, PostDraft::new("a", "changed", "c")).unwrap();

        let titles: Vec<_> = fixture
            .store
            .load()
            .unwrap()
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(titles, vec!["changed", "one"]);
    }

    #[test]
    fn absent_id_is_not_found_and_writes_nothing() {
        let fixture = StoreFixture::new().with_posts(1);
        fixture.store.set_simulate_write_error(true);

        let err = run(&fixture.store, 99, PostDraft::default()).unwrap_err();
        assert!(matches!(err, BlogError::PostNotFound(99)));
    }
}

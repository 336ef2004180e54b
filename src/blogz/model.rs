use serde::{Deserialize, Serialize};

/// A blog post as persisted in the data file.
///
/// Field order and names are the on-disk format: `{"id", "author", "title", "content"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub author: String,
    pub title: String,
    pub content: String,
}

impl Post {
    pub fn new(id: u64, draft: PostDraft) -> Self {
        Self {
            id,
            author: draft.author,
            title: draft.title,
            content: draft.content,
        }
    }

    /// Overwrites the editable fields, keeping the id.
    pub fn apply(&mut self, draft: PostDraft) {
        self.author = draft.author;
        self.title = draft.title;
        self.content = draft.content;
    }
}

/// The user-editable part of a post, as submitted by a form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDraft {
    pub author: String,
    pub title: String,
    pub content: String,
}

impl PostDraft {
    pub fn new(
        author: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            author: author.into(),
            title: title.into(),
            content: content.into(),
        }
    }
}

impl From<&Post> for PostDraft {
    fn from(post: &Post) -> Self {
        Self {
            author: post.author.clone(),
            title: post.title.clone(),
            content: post.content.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_in_file_format() {
        let post = Post::new(3, PostDraft::new("Ann", "Hi", "Body"));
        let json = serde_json::to_string(&post).unwrap();
        assert_eq!(
            json,
            r#"{"id":3,"author":"Ann","title":"Hi","content":"Body"}"#
        );
    }

    #[test]
    fn apply_keeps_id() {
        let mut post = Post::new(7, PostDraft::new("a", "b", "c"));
        post.apply(PostDraft::new("x", "y", "z"));
        assert_eq!(post.id, 7);
        assert_eq!(PostDraft::from(&post), PostDraft::new("x", "y", "z"));
    }
}

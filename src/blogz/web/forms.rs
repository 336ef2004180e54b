use crate::model::PostDraft;
use rocket::FromForm;

/// Fields posted by the add and update forms. All three are required.
#[derive(Debug, FromForm)]
pub struct PostForm {
    pub author: String,
    pub title: String,
    pub content: String,
}

impl From<PostForm> for PostDraft {
    fn from(form: PostForm) -> Self {
        PostDraft::new(form.author, form.title, form.content)
    }
}

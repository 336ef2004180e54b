use crate::error::Result;
use crate::model::{Post, PostDraft};
use serde::Serialize;
use stencil::Renderer;

const BASE: &str = include_str!("templates/base.html");
const INDEX: &str = include_str!("templates/index.html");
const ADD: &str = include_str!("templates/add.html");
const UPDATE: &str = include_str!("templates/update.html");
const FIELDS: &str = include_str!("templates/fields.html");

#[derive(Serialize)]
struct IndexPage<'a> {
    posts: &'a [Post],
}

#[derive(Serialize)]
struct AddPage {
    post: PostDraft,
}

#[derive(Serialize)]
struct UpdatePage {
    id: u64,
    post: PostDraft,
}

/// The compiled page templates, shared by all requests.
pub struct Pages {
    renderer: Renderer,
}

impl Pages {
    pub fn new() -> Result<Self> {
        let renderer = Renderer::new()
            .with_template("base.html", BASE)?
            .with_template("fields.html", FIELDS)?
            .with_template("index.html", INDEX)?
            .with_template("add.html", ADD)?
            .with_template("update.html", UPDATE)?;
        Ok(Self { renderer })
    }

    pub fn index(&self, posts: &[Post]) -> Result<String> {
        Ok(self.renderer.render("index.html", &IndexPage { posts })?)
    }

    pub fn add(&self) -> Result<String> {
        let page = AddPage {
            post: PostDraft::default(),
        };
        Ok(self.renderer.render("add.html", &page)?)
    }

    pub fn update(&self, post: &Post) -> Result<String> {
        let page = UpdatePage {
            id: post.id,
            post: PostDraft::from(post),
        };
        Ok(self.renderer.render("update.html", &page)?)
    }
}

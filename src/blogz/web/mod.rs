//! # Web Layer
//!
//! HTTP front end over [`BlogApi`](crate::api::BlogApi), built on rocket.
//!
//! | Route | Method | Behavior |
//! |---|---|---|
//! | `/` | GET | list all posts |
//! | `/add` | GET | empty creation form |
//! | `/add` | POST | create from `author`, `title`, `content`; redirect to `/` |
//! | `/delete/<id>` | GET | delete; redirect to `/` |
//! | `/update/<id>` | GET | edit form pre-filled with the post |
//! | `/update/<id>` | POST | overwrite the post's fields; redirect to `/` |
//!
//! Unknown ids answer 404 `Post not found` on every route that takes one.
//! Storage failures answer 500 (see [`error::WebError`]).
//!
//! This module only translates between HTTP and the API: form decoding,
//! page rendering, status codes. No post logic lives here.

use crate::api::DynBlogApi;
use crate::config::BlogConfig;
use crate::error::Result;
use rocket::figment::Figment;
use rocket::{Build, Rocket};

pub mod error;
pub mod forms;
pub mod pages;
pub mod routes;

use pages::Pages;

/// Rocket settings for serving with `config`. Rocket's own logging is kept to
/// crashes; request-level logging goes through tracing.
pub fn server_figment(config: &BlogConfig) -> Figment {
    rocket::Config::figment()
        .merge(("address", config.address.as_str()))
        .merge(("port", config.port))
        .merge(("log_level", "critical"))
        .merge(("cli_colors", false))
}

/// Assembles the application: routes, compiled pages and the shared API.
pub fn build(api: DynBlogApi, figment: Figment) -> Result<Rocket<Build>> {
    let pages = Pages::new()?;
    Ok(rocket::custom(figment)
        .manage(api)
        .manage(pages)
        .mount("/", routes::routes()))
}

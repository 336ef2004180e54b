//! # Command Layer
//!
//! This module contains the **core business logic** of blogz. Each command lives in its
//! own submodule and implements plain Rust functions over a
//! [`PostStore`](crate::store::PostStore).
//!
//! ## Role and Responsibilities
//!
//! Commands are where the real work happens:
//! - Load the collection, change it, save it back
//! - Decide what "not found" means for each operation
//! - Return structured [`CmdResult`] with affected posts and messages
//! - Are completely UI-agnostic
//!
//! ## What Commands Do NOT Do
//!
//! - **HTTP**: No status codes, redirects, or HTML
//! - **Locking**: Mutating commands assume the caller serializes them
//!   (the API facade holds a write lock around each call)
//! - **Logging output**: Messages are returned, the UI decides where they go
//!
//! ## Testing Strategy
//!
//! Command tests use `InMemoryStore` and cover every branch, including the
//! not-found paths and failed saves.
//!
//! ## Command Modules
//!
//! - [`list`]: All posts in stored order
//! - [`get`]: A single post by id
//! - [`create`]: Append a new post with the next id
//! - [`update`]: Overwrite a post's fields in place
//! - [`delete`]: Remove a post
//! - [`init`]: Create an empty collection if none exists
//! - [`helpers`]: Lookup and id assignment

use crate::model::Post;
use serde::Serialize;

pub mod create;
pub mod delete;
pub mod get;
pub mod helpers;
pub mod init;
pub mod list;
pub mod update;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_posts: Vec<Post>,
    pub listed_posts: Vec<Post>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_posts(mut self, posts: Vec<Post>) -> Self {
        self.affected_posts = posts;
        self
    }

    pub fn with_listed_posts(mut self, posts: Vec<Post>) -> Self {
        self.listed_posts = posts;
        self
    }
}

//! # Blogz Architecture
//!
//! Blogz is a small blog server that keeps every post in one JSON file. The web
//! routes are a thin client of a storage-agnostic library; nothing below the web
//! layer knows about HTTP.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Web Layer (web/, served by main.rs)                        │
//! │  - Routes, form decoding, HTML pages                        │
//! │  - The ONLY place that knows about status codes             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Owns the store and the write lock                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - load, change, save                                       │
//! │  - Lookup by id, id assignment                              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - PostStore trait                                          │
//! │  - JsonFileStore (production), InMemoryStore (testing)      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No Cache
//!
//! The data file is the only source of truth. Every request loads the whole
//! collection; every mutation writes the whole collection back. Editing the
//! file by hand while the server runs is fine.
//!
//! ## Testing Strategy
//!
//! 1. **Commands**: unit tests over `InMemoryStore`, where most logic is covered.
//! 2. **Store**: file round trips and failure modes against a temp dir.
//! 3. **Web**: integration tests driving the routes with rocket's local client.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic per operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Post` and `PostDraft`
//! - [`config`]: Layered configuration
//! - [`web`]: Routes and pages
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
pub mod web;

//! # Stencil - Named HTML Templates
//!
//! A thin layer over [minijinja](https://docs.rs/minijinja) for server-rendered pages.
//!
//! ## The Problem
//!
//! Handlers that build HTML by string concatenation end up:
//! - Forgetting to escape user-supplied text
//! - Mixing page structure with request logic
//! - Recompiling the same markup on every request
//!
//! ## The Solution
//!
//! Stencil keeps the page structure in Jinja2 templates:
//! - **Templates** are registered once by name and compiled up front
//! - **Escaping** is always on: every `{{ value }}` is HTML-escaped
//! - **Filters** cover the few presentation helpers pages need (`excerpt`)
//!
//! ## Quick Example
//!
//! ```rust
//! use stencil::Renderer;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Page {
//!     title: String,
//! }
//!
//! let mut renderer = Renderer::new();
//! renderer.add_template("page.html", "<h1>{{ title }}</h1>").unwrap();
//!
//! let html = renderer.render("page.html", &Page { title: "<b>Hi</b>".into() }).unwrap();
//! assert_eq!(html, "<h1>&lt;b&gt;Hi&lt;&#x2f;b&gt;</h1>");
//! ```
//!
//! ## Template Inheritance
//!
//! Templates registered on the same [`Renderer`] can extend each other:
//!
//! ```jinja
//! {% extends "base.html" %}
//! {% block body %}
//!   {% for post in posts %}<p>{{ post.content | excerpt(80) }}</p>{% endfor %}
//! {% endblock %}
//! ```

use minijinja::{AutoEscape, Environment};
use serde::Serialize;
use unicode_width::UnicodeWidthChar;

pub use minijinja::Error;

/// Width used by `excerpt` when the template does not pass one.
pub const DEFAULT_EXCERPT_WIDTH: usize = 120;

/// Marker appended to truncated excerpts.
pub const ELLIPSIS: char = '…';

/// Renders a single template string with HTML escaping.
///
/// Handy for one-off fragments. Pages rendered on every request should be
/// registered on a [`Renderer`] instead so they are compiled once.
///
/// # Example
///
/// ```rust
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Data { name: String }
///
/// let out = stencil::render("Hello {{ name }}", &Data { name: "<you>".into() }).unwrap();
/// assert_eq!(out, "Hello &lt;you&gt;");
/// ```
pub fn render<T: Serialize>(template: &str, data: &T) -> Result<String, Error> {
    let mut env = html_environment();
    env.add_template_owned("_inline".to_string(), template.to_string())?;
    let tmpl = env.get_template("_inline")?;
    tmpl.render(data)
}

/// A renderer with pre-registered templates.
///
/// Templates are compiled when added and looked up by name at render time.
pub struct Renderer {
    env: Environment<'static>,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    /// Creates a renderer with no templates, HTML escaping and the stencil filters.
    pub fn new() -> Self {
        Self {
            env: html_environment(),
        }
    }

    /// Registers a named template.
    ///
    /// The template is compiled immediately; errors are returned if syntax is invalid.
    pub fn add_template(&mut self, name: &str, source: &str) -> Result<(), Error> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())
    }

    /// Builder-style variant of [`Renderer::add_template`].
    pub fn with_template(mut self, name: &str, source: &str) -> Result<Self, Error> {
        self.add_template(name, source)?;
        Ok(self)
    }

    /// Returns true if a template with the given name is registered.
    pub fn has_template(&self, name: &str) -> bool {
        self.env.get_template(name).is_ok()
    }

    /// Renders a registered template with the given data.
    ///
    /// # Errors
    ///
    /// Returns an error if the template name is not found or rendering fails.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, Error> {
        let tmpl = self.env.get_template(name)?;
        tmpl.render(data)
    }
}

fn html_environment() -> Environment<'static> {
    let mut env = Environment::new();
    env.set_auto_escape_callback(|_| AutoEscape::Html);
    env.add_filter("excerpt", excerpt_filter);
    env
}

fn excerpt_filter(value: &str, width: Option<usize>) -> String {
    excerpt(value, width.unwrap_or(DEFAULT_EXCERPT_WIDTH))
}

/// Flattens `text` to a single line and cuts it to at most `max_width` display columns.
///
/// Wide characters count for their terminal width, so CJK text is cut earlier
/// than ASCII. When the text is cut, the last column holds [`ELLIPSIS`].
pub fn excerpt(text: &str, max_width: usize) -> String {
    let flat: String = text
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    let total: usize = flat.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_width {
        return flat;
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in flat.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.truncate(result.trim_end().len());
    result.push(ELLIPSIS);
    result
}

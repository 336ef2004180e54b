use crate::error::BlogError;
use rocket::Responder;
use tracing::{debug, error};

pub const NOT_FOUND_BODY: &str = "Post not found";
pub const INTERNAL_ERROR_BODY: &str = "Internal server error";

/// What a failed request looks like on the wire.
///
/// Every not-found path answers 404 with a plain-text body; anything else is a
/// 500 whose cause goes to the log rather than the client.
#[derive(Debug, Responder)]
pub enum WebError {
    #[response(status = 404, content_type = "plain")]
    NotFound(String),

    #[response(status = 500, content_type = "plain")]
    Internal(String),
}

impl From<BlogError> for WebError {
    fn from(err: BlogError) -> Self {
        match err {
            BlogError::PostNotFound(id) => {
                debug!(id, "post not found");
                WebError::NotFound(NOT_FOUND_BODY.to_string())
            }
            other => {
                error!(error = %other, "request failed");
                WebError::Internal(INTERNAL_ERROR_BODY.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404_body() {
        let web: WebError = BlogError::PostNotFound(3).into();
        assert!(matches!(web, WebError::NotFound(ref body) if body == NOT_FOUND_BODY));
    }

    #[test]
    fn other_errors_hide_their_cause() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "data.json missing");
        let web: WebError = BlogError::Io(io).into();
        assert!(matches!(web, WebError::Internal(ref body) if body == INTERNAL_ERROR_BODY));
    }
}

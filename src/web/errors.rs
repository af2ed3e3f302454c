use crate::errors::InvalidError;
use warp::reject::Reject;

impl Reject for InvalidError {}

/// Rejection for requests that need a session but arrived without a
/// usable one (no cookie, unknown id, or no board dealt yet).
#[derive(Debug, Clone)]
pub struct MissingSessionError {
    pub msg: String,
}

impl MissingSessionError {
    pub fn new(msg: &str) -> Self {
        Self {
            msg: String::from(msg),
        }
    }
}

impl Reject for MissingSessionError {}

//! Identity of the submitting user

/// Who is submitting shortening requests
///
/// Passed into the request handler instead of being baked into it. There is
/// no authentication yet, so the identifier comes from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    user_id: String,
}

impl Session {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }
}

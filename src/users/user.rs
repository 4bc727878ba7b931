//! The user entity and the storage contract for it.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::UserResult;

/// An application user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Caller-supplied identifier, always positive once validated.
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    /// Favorite color; omitted from JSON when unset.
    #[serde(rename = "fav_color", default, skip_serializing_if = "Option::is_none")]
    pub favorite_color: Option<String>,
}

impl User {
    /// Create a user without a favorite color.
    pub fn new(id: i64, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            favorite_color: None,
        }
    }

    /// Set the favorite color. An empty string clears it.
    pub fn with_color(mut self, color: &str) -> Self {
        self.set_color(color);
        self
    }

    pub(crate) fn set_color(&mut self, color: &str) {
        self.favorite_color = if color.is_empty() {
            None
        } else {
            Some(color.to_string())
        };
    }
}

/// Storage for users, keyed by id.
///
/// Implementations hand out copies; the only way to change a stored record is
/// through [`Repository::store`].
pub trait Repository: Send + Sync {
    /// Insert the user, overwriting any record with the same id.
    fn store(&self, user: User) -> UserResult<()>;

    /// Fetch the user with the given id, or [`UserError::NotFound`].
    ///
    /// [`UserError::NotFound`]: crate::error::UserError::NotFound
    fn find(&self, id: i64) -> UserResult<User>;

    /// Fetch every stored user in no particular order.
    fn find_all(&self) -> UserResult<Vec<User>>;
}

impl<R: Repository + ?Sized> Repository for Arc<R> {
    fn store(&self, user: User) -> UserResult<()> {
        (**self).store(user)
    }

    fn find(&self, id: i64) -> UserResult<User> {
        (**self).find(id)
    }

    fn find_all(&self) -> UserResult<Vec<User>> {
        (**self).find_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_omitted_when_unset() {
        let user = User::new(1, "Bob", "Smith");
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 1, "first_name": "Bob", "last_name": "Smith"})
        );
    }

    #[test]
    fn test_color_serialized_as_fav_color() {
        let user = User::new(1, "Bob", "Uncle").with_color("Blue");
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["fav_color"], "Blue");
    }

    #[test]
    fn test_empty_color_clears() {
        let user = User::new(1, "Bob", "Uncle").with_color("Blue").with_color("");
        assert_eq!(user.favorite_color, None);
    }
}

//! Business rules for users.

use crate::error::{UserError, UserResult};
use crate::users::{Repository, User};

/// Operations offered to clients of the user domain.
///
/// Decorators in this module implement the same trait and delegate to an
/// inner `Service`, so any number of them can be stacked.
pub trait Service: Send + Sync {
    /// Create (or overwrite) a user and return its id.
    fn create_user(
        &self,
        id: i64,
        first_name: &str,
        last_name: &str,
        color: Option<&str>,
    ) -> UserResult<i64>;

    /// Read a single user.
    fn read_user(&self, id: i64) -> UserResult<User>;

    /// Change only the favorite color of an existing user.
    fn update_user_color(&self, id: i64, color: &str) -> UserResult<()>;

    /// All users, ordered by id.
    fn users(&self) -> UserResult<Vec<User>>;
}

/// The undecorated user service backed by a repository.
pub struct UserService<R> {
    repo: R,
}

impl<R: Repository> UserService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

fn validate_id(id: i64) -> UserResult<()> {
    if id <= 0 {
        return Err(UserError::InvalidArgument);
    }
    Ok(())
}

impl<R: Repository> Service for UserService<R> {
    fn create_user(
        &self,
        id: i64,
        first_name: &str,
        last_name: &str,
        color: Option<&str>,
    ) -> UserResult<i64> {
        validate_id(id)?;

        let mut user = User::new(id, first_name, last_name);
        if let Some(color) = color {
            user.set_color(color);
        }
        self.repo.store(user)?;
        Ok(id)
    }

    fn read_user(&self, id: i64) -> UserResult<User> {
        validate_id(id)?;
        self.repo.find(id)
    }

    fn update_user_color(&self, id: i64, color: &str) -> UserResult<()> {
        validate_id(id)?;

        let mut user = self.repo.find(id)?;
        user.set_color(color);
        self.repo.store(user)
    }

    fn users(&self) -> UserResult<Vec<User>> {
        let mut users = self.repo.find_all()?;
        users.sort_by_key(|u| u.id);
        Ok(users)
    }
}

impl<S: Service + ?Sized> Service for std::sync::Arc<S> {
    fn create_user(
        &self,
        id: i64,
        first_name: &str,
        last_name: &str,
        color: Option<&str>,
    ) -> UserResult<i64> {
        (**self).create_user(id, first_name, last_name, color)
    }

    fn read_user(&self, id: i64) -> UserResult<User> {
        (**self).read_user(id)
    }

    fn update_user_color(&self, id: i64, color: &str) -> UserResult<()> {
        (**self).update_user_color(id, color)
    }

    fn users(&self) -> UserResult<Vec<User>> {
        (**self).users()
    }
}

use std::sync::Arc;
use validator::Validate;

use crate::error::{UserError, UserResult};
use crate::models::{NewUser, Page, PageRequest, User};
use crate::repository::UserRepository;
use crate::validation::validate_candidate;

/// Service layer for user registration
///
/// Cloning shares the underlying repository.
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// One page of users in ascending id order
    pub async fn list_users(&self, request: PageRequest) -> UserResult<Page<User>> {
        request
            .validate()
            .map_err(|e| UserError::InvalidPage(e.to_string()))?;

        let total = self.repository.count().await?;
        let content = self.repository.list(request.offset(), request.size).await?;

        Ok(Page::new(content, &request, total))
    }

    pub async fn get_user(&self, id: i64) -> UserResult<User> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id))
    }

    /// Validate and persist a registration; the address, if any, is stored
    /// under the new user's id.
    pub async fn save_user(&self, candidate: NewUser) -> UserResult<User> {
        let validated = validate_candidate(&candidate)?;
        self.repository.create(validated).await
    }

    /// Deleting an unknown id is not an error.
    pub async fn delete_user(&self, id: i64) -> UserResult<()> {
        if !self.repository.delete(id).await? {
            tracing::debug!(user_id = %id, "Delete requested for unknown user");
        }
        Ok(())
    }
}

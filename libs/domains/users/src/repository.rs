use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{UserError, UserResult};
use crate::models::{Address, User};
use crate::validation::ValidatedUser;

/// Repository trait for User persistence.
///
/// Implementations list users in ascending id order.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a user and, if present, its address as one unit
    async fn create(&self, user: ValidatedUser) -> UserResult<User>;

    /// Get a user by ID
    async fn get_by_id(&self, id: i64) -> UserResult<Option<User>>;

    /// Users ordered by id, skipping `offset` and returning at most `limit`.
    ///
    /// Runs independently of [`count`](Self::count); a write landing between
    /// the two calls can make a page's totals disagree with its content.
    async fn list(&self, offset: u64, limit: u64) -> UserResult<Vec<User>>;

    /// Total number of users, read separately from [`list`](Self::list)
    async fn count(&self) -> UserResult<u64>;

    /// Delete a user and its address. Returns whether a row existed.
    async fn delete(&self, id: i64) -> UserResult<bool>;
}

#[derive(Debug, Default)]
struct Store {
    users: BTreeMap<i64, User>,
    last_user_id: i64,
    last_address_id: i64,
}

fn next_id(last: &mut i64) -> UserResult<i64> {
    *last = last
        .checked_add(1)
        .ok_or_else(|| UserError::Internal("id sequence exhausted".to_string()))?;
    Ok(*last)
}

/// In-memory implementation of UserRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: ValidatedUser) -> UserResult<User> {
        let mut store = self.store.write().await;

        let id = next_id(&mut store.last_user_id)?;
        let address = match user.address {
            Some(address) => Some(Address {
                id: next_id(&mut store.last_address_id)?,
                work_address: address.work_address,
                home_address: address.home_address,
                user_id: id,
            }),
            None => None,
        };

        let user = User {
            id,
            name: user.name,
            surname: user.surname,
            gender: user.gender,
            birthdate: user.birthdate,
            address,
        };
        store.users.insert(id, user.clone());

        tracing::info!(user_id = %id, "Created user");
        Ok(user)
    }

    async fn get_by_id(&self, id: i64) -> UserResult<Option<User>> {
        let store = self.store.read().await;
        Ok(store.users.get(&id).cloned())
    }

    async fn list(&self, offset: u64, limit: u64) -> UserResult<Vec<User>> {
        let store = self.store.read().await;
        let offset = usize::try_from(offset).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);

        Ok(store.users.values().skip(offset).take(limit).cloned().collect())
    }

    async fn count(&self) -> UserResult<u64> {
        let store = self.store.read().await;
        Ok(store.users.len() as u64)
    }

    async fn delete(&self, id: i64) -> UserResult<bool> {
        let mut store = self.store.write().await;

        if store.users.remove(&id).is_some() {
            tracing::info!(user_id = %id, "Deleted user");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewAddress, NewUser};
    use crate::validation::validate_candidate;
    use chrono::NaiveDate;

    fn candidate(name: &str) -> ValidatedUser {
        validate_candidate(&NewUser {
            name: Some(name.to_string()),
            surname: Some("Smith".to_string()),
            gender: Some("F".to_string()),
            birthdate: NaiveDate::from_ymd_opt(1990, 5, 17),
            address: None,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_create_and_get_user() {
        let repo = InMemoryUserRepository::new();

        let user = repo.create(candidate("Alice")).await.unwrap();
        assert_eq!(user.id, 1);

        let fetched = repo.get_by_id(user.id).await.unwrap();
        assert_eq!(fetched, Some(user));
    }

    #[tokio::test]
    async fn test_address_is_bound_to_new_user() {
        let repo = InMemoryUserRepository::new();
        repo.create(candidate("Alice")).await.unwrap();

        let mut with_address = candidate("Bob");
        with_address.address = Some(NewAddress {
            work_address: None,
            home_address: Some("2 Elm St".to_string()),
        });

        let user = repo.create(with_address).await.unwrap();
        let address = user.address.unwrap();
        assert_eq!(address.user_id, user.id);
        assert_eq!(address.id, 1);
        assert_eq!(address.home_address.as_deref(), Some("2 Elm St"));
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_id_and_paged() {
        let repo = InMemoryUserRepository::new();
        for name in ["Anna", "Bert", "Cleo", "Dave"] {
            repo.create(candidate(name)).await.unwrap();
        }

        let page: Vec<String> = repo
            .list(1, 2)
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.name)
            .collect();
        assert_eq!(page, vec!["Bert", "Cleo"]);
        assert_eq!(repo.count().await.unwrap(), 4);
        assert!(repo.list(10, 2).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_reports_whether_user_existed() {
        let repo = InMemoryUserRepository::new();
        let user = repo.create(candidate("Alice")).await.unwrap();

        assert!(repo.delete(user.id).await.unwrap());
        assert!(!repo.delete(user.id).await.unwrap());
        assert!(repo.get_by_id(user.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = InMemoryUserRepository::new();
        let first = repo.create(candidate("Alice")).await.unwrap();
        repo.delete(first.id).await.unwrap();

        let second = repo.create(candidate("Bob")).await.unwrap();
        assert!(second.id > first.id);
    }
}

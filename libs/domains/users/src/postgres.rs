use async_trait::async_trait;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, QuerySelect,
    TransactionTrait,
};

use crate::{
    entity::{self, address, user},
    error::UserResult,
    models::User,
    repository::UserRepository,
    validation::ValidatedUser,
};

/// PostgreSQL-backed repository.
///
/// Addresses live in their own table keyed by `user_id`; deleting a user
/// relies on `ON DELETE CASCADE` to remove the address.
#[derive(Clone)]
pub struct PgUserRepository {
    db: DatabaseConnection,
}

impl PgUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, input: ValidatedUser) -> UserResult<User> {
        let txn = self.db.begin().await?;

        let model = user::ActiveModel {
            name: Set(input.name),
            surname: Set(input.surname),
            gender: Set(input.gender),
            birth_date: Set(input.birthdate),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let address = match input.address {
            Some(new_address) => Some(
                address::ActiveModel {
                    work_address: Set(new_address.work_address),
                    home_address: Set(new_address.home_address),
                    user_id: Set(model.id),
                    ..Default::default()
                }
                .insert(&txn)
                .await?,
            ),
            None => None,
        };

        txn.commit().await?;

        tracing::info!(user_id = %model.id, "Created user");
        Ok(entity::into_user(model, address))
    }

    async fn get_by_id(&self, id: i64) -> UserResult<Option<User>> {
        let row = user::Entity::find_by_id(id)
            .find_also_related(address::Entity)
            .one(&self.db)
            .await?;

        Ok(row.map(|(model, address)| entity::into_user(model, address)))
    }

    async fn list(&self, offset: u64, limit: u64) -> UserResult<Vec<User>> {
        let rows = user::Entity::find()
            .find_also_related(address::Entity)
            .order_by_asc(user::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(model, address)| entity::into_user(model, address))
            .collect())
    }

    async fn count(&self) -> UserResult<u64> {
        Ok(user::Entity::find().count(&self.db).await?)
    }

    async fn delete(&self, id: i64) -> UserResult<bool> {
        let result = user::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected > 0 {
            tracing::info!(user_id = %id, "Deleted user");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

//! SeaORM entities for the `registered_users` and `addresses` tables.

use crate::models::{Address, User};

pub mod user {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "registered_users")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i64,
        #[sea_orm(column_type = "Text")]
        pub name: String,
        #[sea_orm(column_type = "Text")]
        pub surname: String,
        #[sea_orm(column_type = "Text")]
        pub gender: String,
        pub birth_date: Date,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(has_one = "super::address::Entity")]
        Address,
    }

    impl Related<super::address::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Address.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

pub mod address {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "addresses")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i64,
        #[sea_orm(column_type = "Text", nullable)]
        pub work_address: Option<String>,
        #[sea_orm(column_type = "Text", nullable)]
        pub home_address: Option<String>,
        #[sea_orm(unique)]
        pub user_id: i64,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::user::Entity",
            from = "Column::UserId",
            to = "super::user::Column::Id",
            on_delete = "Cascade"
        )]
        User,
    }

    impl Related<super::user::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::User.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

impl From<address::Model> for Address {
    fn from(model: address::Model) -> Self {
        Self {
            id: model.id,
            work_address: model.work_address,
            home_address: model.home_address,
            user_id: model.user_id,
        }
    }
}

/// Combine a user row with its (optional) address row.
pub fn into_user(model: user::Model, address: Option<address::Model>) -> User {
    User {
        id: model.id,
        name: model.name,
        surname: model.surname,
        gender: model.gender,
        birthdate: model.birth_date,
        address: address.map(Address::from),
    }
}

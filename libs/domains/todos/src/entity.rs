use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Sea-ORM entity for the todo table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "todo")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub is_completed: bool,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// Conversion from Sea-ORM Model to domain Todo
impl From<Model> for crate::models::Todo {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            description: model.description,
            is_completed: model.is_completed,
            created_at: model.created_at.into(),
        }
    }
}

impl From<Model> for crate::models::TodoSummary {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            description: model.description,
            created_at: model.created_at.into(),
        }
    }
}

// Conversion from domain CreateTodo to Sea-ORM ActiveModel
impl From<crate::models::CreateTodo> for ActiveModel {
    fn from(input: crate::models::CreateTodo) -> Self {
        ActiveModel {
            id: Default::default(),
            title: Set(input.title),
            description: Set(input.description),
            is_completed: Set(false),
            created_at: Set(chrono::Utc::now().into()),
        }
    }
}

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

use crate::{
    entity,
    error::TodoResult,
    models::{CreateTodo, Todo, TodoSummary},
    repository::TodoRepository,
};

/// PostgreSQL-backed repository for todos
pub struct PgTodoRepository {
    db: DatabaseConnection,
}

impl PgTodoRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TodoRepository for PgTodoRepository {
    async fn create(&self, input: CreateTodo) -> TodoResult<Todo> {
        let active_model: entity::ActiveModel = input.into();
        let model = active_model.insert(&self.db).await?;

        tracing::info!(todo_id = model.id, "Created todo");
        Ok(model.into())
    }

    async fn find_by_id(&self, id: i32) -> TodoResult<Option<Todo>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;

        Ok(model.map(|m| m.into()))
    }

    async fn find_recent_incomplete(&self, limit: u64) -> TodoResult<Vec<TodoSummary>> {
        let models = entity::Entity::find()
            .filter(entity::Column::IsCompleted.eq(false))
            .order_by_desc(entity::Column::CreatedAt)
            .order_by_desc(entity::Column::Id)
            .limit(limit)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    async fn complete(&self, id: i32) -> TodoResult<bool> {
        // Single conditional UPDATE: only an incomplete row can
        // transition, so concurrent calls cannot both win.
        let result = entity::Entity::update_many()
            .col_expr(entity::Column::IsCompleted, Expr::value(true))
            .filter(entity::Column::Id.eq(id))
            .filter(entity::Column::IsCompleted.eq(false))
            .exec(&self.db)
            .await?;

        if result.rows_affected > 0 {
            tracing::info!(todo_id = id, "Completed todo");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

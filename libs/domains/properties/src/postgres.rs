use async_trait::async_trait;
use sea_orm::sea_query::LikeExpr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Select,
};

use crate::{
    entity,
    error::{PropertyError, PropertyResult},
    models::{CreateProperty, Property},
    repository::PropertyRepository,
};

/// PostgreSQL-backed PropertyRepository
#[derive(Clone)]
pub struct PgPropertyRepository {
    db: DatabaseConnection,
}

impl PgPropertyRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn fetch(&self, query: Select<entity::Entity>) -> PropertyResult<Vec<Property>> {
        let models = query.order_by_asc(entity::Column::Id).all(&self.db).await?;

        Ok(models.into_iter().map(Into::into).collect())
    }
}

/// `%fragment%` with LIKE wildcards in the fragment matched literally
fn contains_pattern(fragment: &str) -> LikeExpr {
    let escaped = fragment
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    LikeExpr::new(format!("%{}%", escaped)).escape('\\')
}

#[async_trait]
impl PropertyRepository for PgPropertyRepository {
    async fn find_all(&self) -> PropertyResult<Vec<Property>> {
        self.fetch(entity::Entity::find()).await
    }

    async fn find_by_id(&self, id: i64) -> PropertyResult<Option<Property>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;

        Ok(model.map(Into::into))
    }

    async fn find_by_address_containing(&self, fragment: &str) -> PropertyResult<Vec<Property>> {
        self.fetch(
            entity::Entity::find().filter(entity::Column::Address.like(contains_pattern(fragment))),
        )
        .await
    }

    async fn find_by_price_between(&self, min: f64, max: f64) -> PropertyResult<Vec<Property>> {
        self.fetch(entity::Entity::find().filter(entity::Column::Price.between(min, max)))
            .await
    }

    async fn find_by_size_between(&self, min: i32, max: i32) -> PropertyResult<Vec<Property>> {
        self.fetch(entity::Entity::find().filter(entity::Column::Size.between(min, max)))
            .await
    }

    async fn insert(&self, input: CreateProperty) -> PropertyResult<Property> {
        let active_model: entity::ActiveModel = input.into();

        let model = active_model.insert(&self.db).await?;

        tracing::info!(property_id = model.id, "Created property");
        Ok(model.into())
    }

    async fn update(&self, property: Property) -> PropertyResult<Property> {
        let id = property.id;
        let active_model: entity::ActiveModel = property.into();

        let model = active_model.update(&self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated | DbErr::RecordNotFound(_) => PropertyError::NotFound(id),
            e => e.into(),
        })?;

        tracing::info!(property_id = id, "Updated property");
        Ok(model.into())
    }

    async fn delete(&self, id: i64) -> PropertyResult<bool> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected > 0 {
            tracing::info!(property_id = id, "Deleted property");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, QueryTrait};

    fn model(id: i64, address: &str, price: f64) -> entity::Model {
        entity::Model {
            id,
            address: address.to_string(),
            price,
            size: 1000,
            description: None,
        }
    }

    #[test]
    fn test_address_filter_uses_escaped_like() {
        let sql = entity::Entity::find()
            .filter(entity::Column::Address.like(contains_pattern("50%_off")))
            .build(DatabaseBackend::Postgres)
            .to_string();

        assert!(sql.contains("LIKE"));
        assert!(sql.contains("ESCAPE"));
    }

    #[tokio::test]
    async fn test_find_all_maps_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![
                model(1, "10 Main St", 100_000.0),
                model(2, "22 Oak Ave", 250_000.0),
            ]])
            .into_connection();

        let repo = PgPropertyRepository::new(db);
        let properties = repo.find_all().await.unwrap();

        assert_eq!(properties.len(), 2);
        assert_eq!(properties[0].id, 1);
        assert_eq!(properties[1].address, "22 Oak Ave");
    }

    #[tokio::test]
    async fn test_find_by_id_missing_is_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<entity::Model>::new()])
            .into_connection();

        let repo = PgPropertyRepository::new(db);
        assert!(repo.find_by_id(5).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_insert_returns_assigned_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(7, "1 Elm St", 100_000.0)]])
            .into_connection();

        let repo = PgPropertyRepository::new(db);
        let created = repo
            .insert(CreateProperty {
                address: "1 Elm St".to_string(),
                price: 100_000.0,
                size: 1000,
                description: None,
            })
            .await
            .unwrap();

        assert_eq!(created.id, 7);
    }

    #[tokio::test]
    async fn test_update_missing_row_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<entity::Model>::new()])
            .into_connection();

        let repo = PgPropertyRepository::new(db);
        let result = repo.update(model(3, "gone", 1.0).into()).await;

        assert!(matches!(result, Err(PropertyError::NotFound(3))));
    }

    #[tokio::test]
    async fn test_delete_reports_affected_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 0,
                },
            ])
            .into_connection();

        let repo = PgPropertyRepository::new(db);
        assert!(repo.delete(1).await.unwrap());
        assert!(!repo.delete(1).await.unwrap());
    }

    #[tokio::test]
    async fn test_database_errors_are_internal() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection reset".to_string())])
            .into_connection();

        let repo = PgPropertyRepository::new(db);
        let result = repo.find_all().await;

        assert!(matches!(result, Err(PropertyError::Internal(msg)) if msg.contains("connection reset")));
    }
}

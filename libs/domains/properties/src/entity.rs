use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use serde::{Deserialize, Serialize};

use crate::models::{CreateProperty, Property};

/// Sea-ORM Entity for the properties table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "properties")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub address: String,
    #[sea_orm(column_type = "Double")]
    pub price: f64,
    pub size: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Property {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            address: model.address,
            price: model.price,
            size: model.size,
            description: model.description,
        }
    }
}

// The database assigns the id
impl From<CreateProperty> for ActiveModel {
    fn from(input: CreateProperty) -> Self {
        ActiveModel {
            id: NotSet,
            address: Set(input.address),
            price: Set(input.price),
            size: Set(input.size),
            description: Set(input.description),
        }
    }
}

impl From<Property> for ActiveModel {
    fn from(property: Property) -> Self {
        ActiveModel {
            id: Unchanged(property.id),
            address: Set(property.address),
            price: Set(property.price),
            size: Set(property.size),
            description: Set(property.description),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_leaves_id_unset() {
        let active: ActiveModel = CreateProperty {
            address: "1 Elm St".to_string(),
            price: 100_000.0,
            size: 800,
            description: None,
        }
        .into();

        assert!(active.id.is_not_set());
        assert_eq!(active.address, Set("1 Elm St".to_string()));
        assert_eq!(active.description, Set(None));
    }

    #[test]
    fn test_update_keeps_primary_key() {
        let active: ActiveModel = Property {
            id: 42,
            address: "1 Elm St".to_string(),
            price: 1.0,
            size: 1,
            description: Some("note".to_string()),
        }
        .into();

        assert_eq!(active.id, Unchanged(42));
        assert_eq!(active.price, Set(1.0));
    }
}

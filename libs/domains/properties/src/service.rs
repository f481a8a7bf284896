use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{PropertyError, PropertyResult};
use crate::models::{CreateProperty, Property, PropertySearch, UpdateProperty};
use crate::repository::PropertyRepository;

/// Service layer for Property business logic
#[derive(Clone)]
pub struct PropertyService<R: PropertyRepository> {
    repository: Arc<R>,
}

impl<R: PropertyRepository> PropertyService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Every stored property, ordered by id
    pub async fn get_all_properties(&self) -> PropertyResult<Vec<Property>> {
        self.repository.find_all().await
    }

    /// Absence is not an error here; handlers decide what it means
    #[instrument(skip(self), fields(property_id = id))]
    pub async fn get_property_by_id(&self, id: i64) -> PropertyResult<Option<Property>> {
        self.repository.find_by_id(id).await
    }

    #[instrument(skip(self, input), fields(address = %input.address))]
    pub async fn create_property(&self, input: CreateProperty) -> PropertyResult<Property> {
        input
            .validate()
            .map_err(|e| PropertyError::Validation(e.to_string()))?;

        self.repository.insert(input).await
    }

    /// Overwrite every mutable field of an existing property
    #[instrument(skip(self, input), fields(property_id = id))]
    pub async fn update_property(
        &self,
        id: i64,
        input: UpdateProperty,
    ) -> PropertyResult<Property> {
        input
            .validate()
            .map_err(|e| PropertyError::Validation(e.to_string()))?;

        let mut property = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(PropertyError::NotFound(id))?;

        property.apply_update(input);
        self.repository.update(property).await
    }

    #[instrument(skip(self), fields(property_id = id))]
    pub async fn delete_property(&self, id: i64) -> PropertyResult<()> {
        if self.repository.find_by_id(id).await?.is_none() {
            return Err(PropertyError::NotFound(id));
        }

        if !self.repository.delete(id).await? {
            // Removed by a concurrent request after the lookup
            return Err(PropertyError::NotFound(id));
        }

        Ok(())
    }

    /// Address substring and inclusive price/size ranges, all optional
    ///
    /// The first criterion present (address, then price, then size) picks the
    /// repository query and the rest filter its result.
    #[instrument(skip(self, search))]
    pub async fn search_properties(&self, search: PropertySearch) -> PropertyResult<Vec<Property>> {
        search
            .validate()
            .map_err(|e| PropertyError::Validation(e.to_string()))?;

        let candidates = if let Some(fragment) = search.address.as_deref() {
            self.repository.find_by_address_containing(fragment).await?
        } else if search.has_price_bounds() {
            let (min, max) = search.price_range();
            self.repository.find_by_price_between(min, max).await?
        } else if search.has_size_bounds() {
            let (min, max) = search.size_range();
            self.repository.find_by_size_between(min, max).await?
        } else {
            self.repository.find_all().await?
        };

        Ok(candidates
            .into_iter()
            .filter(|p| search.matches(p))
            .collect())
    }
}

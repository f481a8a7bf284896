use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

fn validate_price(price: f64) -> Result<(), ValidationError> {
    if !price.is_finite() || price < 0.0 {
        return Err(ValidationError::new("price")
            .with_message("price must be a finite, non-negative number".into()));
    }
    Ok(())
}

/// A real-estate listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Property {
    /// Assigned by the store on creation, never changes
    pub id: i64,
    #[schema(example = "123 Main St")]
    pub address: String,
    #[schema(example = 250000.0)]
    pub price: f64,
    #[schema(example = 1200)]
    pub size: i32,
    #[schema(example = "Cozy house")]
    pub description: Option<String>,
}

impl Property {
    /// Overwrite every mutable field; a missing description clears it
    pub fn apply_update(&mut self, update: UpdateProperty) {
        self.address = update.address;
        self.price = update.price;
        self.size = update.size;
        self.description = update.description;
    }
}

/// Input for creating a property. A client-sent `id` is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProperty {
    #[validate(length(min = 1, max = 255))]
    #[schema(example = "123 Main St")]
    pub address: String,

    #[validate(custom(function = "validate_price"))]
    #[schema(example = 250000.0)]
    pub price: f64,

    #[validate(range(min = 0))]
    #[schema(example = 1200)]
    pub size: i32,

    #[schema(example = "Cozy house")]
    pub description: Option<String>,
}

/// Full replacement of a property's mutable fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProperty {
    #[validate(length(min = 1, max = 255))]
    pub address: String,

    #[validate(custom(function = "validate_price"))]
    pub price: f64,

    #[validate(range(min = 0))]
    pub size: i32,

    pub description: Option<String>,
}

impl From<Property> for UpdateProperty {
    fn from(p: Property) -> Self {
        Self {
            address: p.address,
            price: p.price,
            size: p.size,
            description: p.description,
        }
    }
}

fn validate_bounds(search: &PropertySearch) -> Result<(), ValidationError> {
    if [search.min_price, search.max_price]
        .into_iter()
        .flatten()
        .any(|bound| !bound.is_finite())
    {
        return Err(ValidationError::new("price_bound")
            .with_message("price bounds must be finite numbers".into()));
    }
    if let (Some(min), Some(max)) = (search.min_price, search.max_price) {
        if min > max {
            return Err(ValidationError::new("price_range")
                .with_message("min_price must not exceed max_price".into()));
        }
    }
    if let (Some(min), Some(max)) = (search.min_size, search.max_size) {
        if min > max {
            return Err(ValidationError::new("size_range")
                .with_message("min_size must not exceed max_size".into()));
        }
    }
    Ok(())
}

/// Search criteria; every field is optional and a missing bound is open-ended
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, IntoParams)]
#[validate(schema(function = "validate_bounds"))]
#[into_params(parameter_in = Query)]
pub struct PropertySearch {
    /// Case-sensitive substring of the address
    pub address: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_size: Option<i32>,
    pub max_size: Option<i32>,
}

impl PropertySearch {
    pub fn has_price_bounds(&self) -> bool {
        self.min_price.is_some() || self.max_price.is_some()
    }

    pub fn has_size_bounds(&self) -> bool {
        self.min_size.is_some() || self.max_size.is_some()
    }

    /// Inclusive price range with missing bounds opened up
    pub fn price_range(&self) -> (f64, f64) {
        (
            self.min_price.unwrap_or(f64::MIN),
            self.max_price.unwrap_or(f64::MAX),
        )
    }

    /// Inclusive size range with missing bounds opened up
    pub fn size_range(&self) -> (i32, i32) {
        (
            self.min_size.unwrap_or(i32::MIN),
            self.max_size.unwrap_or(i32::MAX),
        )
    }

    /// Whether `property` satisfies every criterion
    pub fn matches(&self, property: &Property) -> bool {
        let (min_price, max_price) = self.price_range();
        let (min_size, max_size) = self.size_range();

        self.address
            .as_deref()
            .is_none_or(|fragment| property.address.contains(fragment))
            && (min_price..=max_price).contains(&property.price)
            && (min_size..=max_size).contains(&property.size)
    }
}

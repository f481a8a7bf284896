//! Shared test utilities for the properties workspace
//!
//! - `TestDatabase`: PostgreSQL container with migrations applied (feature: "postgres")
//! - `TestDataBuilder`: deterministic property data derived from a test name
//! - `assertions`: assertion helpers with readable failure messages
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{TestDatabase, TestDataBuilder};
//!
//! #[tokio::test]
//! async fn my_postgres_test() {
//!     let db = TestDatabase::new().await;
//!     let builder = TestDataBuilder::from_test_name("my_postgres_test");
//!
//!     let address = builder.address("main");
//!     let price = builder.price();
//! }
//! ```

#[cfg(feature = "postgres")]
mod postgres;

#[cfg(feature = "postgres")]
pub use postgres::TestDatabase;

/// Deterministic test data
///
/// Values derive from a seed, so a test sees the same data on every run while
/// different tests get distinct addresses.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Seed from the test name; the recommended constructor
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_create_property");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Street address unique to this builder and `suffix`
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::new(7);
    /// assert_eq!(builder.address("main"), "7 Test Street main");
    /// ```
    pub fn address(&self, suffix: &str) -> String {
        format!("{} Test Street {}", self.seed % 100_000, suffix)
    }

    /// Price in whole currency units between 50 000 and 1 049 000
    pub fn price(&self) -> f64 {
        (50_000 + (self.seed % 1_000) * 1_000) as f64
    }

    /// Size in square units between 300 and 3 299
    pub fn size(&self) -> i32 {
        300 + (self.seed % 3_000) as i32
    }

    pub fn description(&self, suffix: &str) -> String {
        format!("Test listing {} ({})", suffix, self.seed)
    }
}

/// Test assertion helpers
pub mod assertions {
    /// Prices round-trip through `DOUBLE PRECISION`; compare with a tolerance
    pub fn assert_price_eq(actual: f64, expected: f64, context: &str) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "{}: expected price {}, got {}",
            context,
            expected,
            actual
        );
    }

    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }

    /// Assert that `ids` is strictly increasing
    pub fn assert_ascending(ids: &[i64], context: &str) {
        assert!(
            ids.windows(2).all(|w| w[0] < w[1]),
            "{}: ids not in ascending order: {:?}",
            context,
            ids
        );
    }
}

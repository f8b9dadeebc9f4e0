//! Shared test utilities for domain testing
//!
//! - `TestDatabase`: PostgreSQL container with the schema migrated (feature: "postgres")
//! - `TestDataBuilder`: deterministic test data generation (always available)
//!
//! # Usage
//!
//! ```ignore
//! use test_utils::{TestDatabase, TestDataBuilder};
//!
//! #[tokio::test]
//! #[ignore = "requires Docker"]
//! async fn my_postgres_test() {
//!     let db = TestDatabase::new().await;
//!     let builder = TestDataBuilder::from_test_name("my_test");
//!
//!     let name = builder.person_name(0);
//! }
//! ```

#[cfg(feature = "postgres")]
mod postgres;

#[cfg(feature = "postgres")]
pub use postgres::TestDatabase;

/// Builder for test data with deterministic randomization
///
/// This ensures tests are reproducible by using seeded data.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from test name (seed is the hash of the name)
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_register_user");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// A person name that passes registration rules: one capital letter
    /// followed by lowercase letters, unique per `index` within a builder.
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let name = TestDataBuilder::new(7).person_name(0);
    /// assert!(name.starts_with('T'));
    /// assert!(name[1..].chars().all(|c| c.is_ascii_lowercase()));
    /// ```
    pub fn person_name(&self, index: u32) -> String {
        let mut value = self.seed ^ (u64::from(index) << 40);
        let mut name = String::from("T");
        // Fixed-width prefix from the seed; the base-26 index suffix keeps names unique
        for _ in 0..8 {
            name.push(char::from(b'a' + (value % 26) as u8));
            value /= 26;
        }
        let mut index = index;
        loop {
            name.push(char::from(b'a' + (index % 26) as u8));
            index /= 26;
            if index == 0 {
                break;
            }
        }
        name
    }

    /// Free-text value for optional fields such as addresses
    pub fn text(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }
}

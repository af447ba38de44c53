//! Helpers for controlling embedded test cluster behaviour.
//!
//! Suites that need embedded PostgreSQL skip with a marker when the cluster
//! cannot start. Setting `REQUIRE_TEST_CLUSTER` turns that skip into a
//! failure so CI cannot silently lose coverage.

/// Returns true when `REQUIRE_TEST_CLUSTER` is set to "1", "true" or "yes"
/// (case-insensitive).
pub fn test_cluster_required() -> bool {
    std::env::var("REQUIRE_TEST_CLUSTER")
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

/// Handles embedded cluster setup failures consistently across suites.
///
/// Prints a skip marker and returns `None` unless the cluster is required, in
/// which case it panics with the reason.
pub fn handle_cluster_setup_failure<T>(reason: impl std::fmt::Display) -> Option<T> {
    if test_cluster_required() {
        panic!("Test cluster setup failed: {reason}. Unset REQUIRE_TEST_CLUSTER to skip.");
    }
    eprintln!("SKIP-TEST-CLUSTER: {reason}");
    None
}

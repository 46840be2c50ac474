pub const TEST_FILES_DIRECTORY: &str = "tests/test_files";

/// Tolerance used when comparing computed rates against expected values.
pub const RATE_TOLERANCE: f64 = 1e-9;

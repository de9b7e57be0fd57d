use std::env;
use std::path::PathBuf;

use dds::EngineLimits;

use crate::error::AppError;

/// Builds engine resource limits from environment variables.
///
/// Both limits default to zero, which leaves the engine's own defaults in
/// place. The limits are applied once, at startup, before the engine handle
/// is shared with request handlers.
pub fn engine_limits() -> Result<EngineLimits, AppError> {
    let max_memory_mb = limit_var("DDS_MAX_MEMORY_MB")?;
    let max_threads = limit_var("DDS_MAX_THREADS")?;
    Ok(EngineLimits {
        max_memory_mb,
        max_threads,
    })
}

/// Get the engine shared-library override from environment (defaults to the
/// engine's standard search locations)
pub fn library_path() -> Option<PathBuf> {
    env::var("DDS_LIBRARY_PATH").ok().map(PathBuf::from)
}

/// Get an integer limit from environment (defaults to 0) or return error
fn limit_var(name: &str) -> Result<i32, AppError> {
    match env::var(name) {
        Ok(raw) => raw.parse::<i32>().map_err(|_| {
            AppError::config(format!(
                "Environment variable '{name}' must be an integer, but got: '{raw}'"
            ))
        }),
        Err(_) => Ok(0),
    }
}

#[cfg(test)]
mod tests {
    use std::env;

    use serial_test::serial;

    use super::{engine_limits, library_path};

    fn clear_test_env() {
        env::remove_var("DDS_MAX_MEMORY_MB");
        env::remove_var("DDS_MAX_THREADS");
        env::remove_var("DDS_LIBRARY_PATH");
    }

    #[test]
    #[serial]
    fn test_engine_limits_default_to_zero() {
        clear_test_env();

        let limits = engine_limits().unwrap();
        assert_eq!(limits.max_memory_mb, 0);
        assert_eq!(limits.max_threads, 0);
    }

    #[test]
    #[serial]
    fn test_engine_limits_from_env() {
        clear_test_env();
        env::set_var("DDS_MAX_MEMORY_MB", "1024");
        env::set_var("DDS_MAX_THREADS", "4");

        let limits = engine_limits().unwrap();
        assert_eq!(limits.max_memory_mb, 1024);
        assert_eq!(limits.max_threads, 4);

        clear_test_env();
    }

    #[test]
    #[serial]
    fn test_engine_limits_reject_non_integer() {
        clear_test_env();
        env::set_var("DDS_MAX_THREADS", "many");

        let result = engine_limits();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("DDS_MAX_THREADS"));

        clear_test_env();
    }

    #[test]
    #[serial]
    fn test_library_path_override() {
        clear_test_env();
        assert!(library_path().is_none());

        env::set_var("DDS_LIBRARY_PATH", "/opt/dds/libdds.so.2");
        assert_eq!(
            library_path().unwrap().to_str().unwrap(),
            "/opt/dds/libdds.so.2"
        );

        clear_test_env();
    }
}

use anyhow::Result;
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize structured logging based on verbosity level.
///
/// Logs go to stderr so they never interleave with the menu on stdout.
pub fn init_logging(verbose: bool) -> Result<()> {
    let env_filter = if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("course_registration=debug,info"))
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("course_registration=error"))
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(true)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    if verbose {
        tracing::info!("Verbose logging enabled");
    }

    Ok(())
}

/// Log a successful load of the enrollment file
pub fn log_roster_loaded(path: &Path, count: usize) {
    tracing::info!(
        path = %path.display(),
        count = count,
        "Enrollments loaded"
    );
}

/// Log a successful save of the enrollment file
pub fn log_roster_saved(path: &Path, count: usize) {
    tracing::info!(
        path = %path.display(),
        count = count,
        "Enrollments saved"
    );
}

/// Log a persistence failure that was reported to the user
pub fn log_storage_failure(operation: &str, path: &Path, error: &dyn std::error::Error) {
    tracing::warn!(
        operation = operation,
        path = %path.display(),
        error = %error,
        "Enrollment file operation failed"
    );
}

pub fn log_registration(first_name: &str, last_name: &str, course_name: &str) {
    tracing::debug!(
        first_name = first_name,
        last_name = last_name,
        course_name = course_name,
        "Student registered"
    );
}

pub fn log_rejected_input(field: &str, value: &str) {
    tracing::debug!(field = field, value = value, "Input rejected");
}

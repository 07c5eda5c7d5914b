//! Host and runtime facts reported by the status endpoint.

/// Machine host name, or `"unknown"` if it cannot be read.
pub fn hostname() -> String {
    hostname::get()
        .map(|h| h.to_string_lossy().into_owned())
        .unwrap_or_else(|_| "unknown".to_string())
}

/// Version string of the running service build.
pub fn runtime_version() -> String {
    format!(
        "{} {} (rust, {}/{})",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS,
        std::env::consts::ARCH
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hostname_is_not_empty() {
        assert!(!hostname().is_empty());
    }

    #[test]
    fn runtime_version_names_the_package() {
        let version = runtime_version();
        assert!(version.starts_with("python-app "));
        assert!(version.contains(env!("CARGO_PKG_VERSION")));
    }
}

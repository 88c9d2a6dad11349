//! Backend location.

/// Port the backend listens on during local development.
pub const LOCAL_API_BASE: &str = "http://127.0.0.1:8000";

const LOCAL_HOSTS: [&str; 2] = ["localhost", "127.0.0.1"];

/// Resolve the base URL prepended to every `/api/...` path.
///
/// An explicit override wins. Pages served from a local host talk to the
/// development backend; anything else uses the page's own origin, which is
/// an empty base.
pub fn resolve_api_base(hostname: &str, override_base: Option<&str>) -> String {
    if let Some(base) = override_base.map(str::trim).filter(|base| !base.is_empty()) {
        return base.trim_end_matches('/').to_string();
    }
    if LOCAL_HOSTS.contains(&hostname) {
        LOCAL_API_BASE.to_string()
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_hosts_use_development_backend() {
        assert_eq!(resolve_api_base("localhost", None), LOCAL_API_BASE);
        assert_eq!(resolve_api_base("127.0.0.1", None), LOCAL_API_BASE);
    }

    #[test]
    fn test_other_hosts_use_same_origin() {
        assert_eq!(resolve_api_base("wallet.example.ru", None), "");
        assert_eq!(resolve_api_base("", None), "");
    }

    #[test]
    fn test_override_wins() {
        assert_eq!(
            resolve_api_base("localhost", Some("https://api.example.ru/")),
            "https://api.example.ru"
        );
        assert_eq!(resolve_api_base("localhost", Some("  ")), LOCAL_API_BASE);
    }
}

use super::*;
use model::Service;

#[test]
fn missing_overrides_use_local_ports() {
    let config = ClientConfig::from_overrides(None, None);
    assert_eq!(config.urls.base(Service::Auth), "http://localhost:8000");
    assert_eq!(config.urls.base(Service::Tasks), "http://localhost:8001");
}

#[test]
fn blank_override_falls_back() {
    let config = ClientConfig::from_overrides(Some("  "), Some("https://tasks.example.com/"));
    assert_eq!(config.urls.base(Service::Auth), "http://localhost:8000");
    assert_eq!(config.urls.base(Service::Tasks), "https://tasks.example.com");
}

use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.addr, SocketAddr::new(DEFAULT_BIND_ADDR, DEFAULT_PORT));
    assert_eq!(cfg.addr.to_string(), "0.0.0.0:3000");
}

#[test]
fn parses_port_and_bind_addr() {
    let cfg = ServerConfig::from_lookup(lookup(&[("PORT", "8080"), ("BIND_ADDR", "127.0.0.1")])).unwrap();
    assert_eq!(cfg.addr.to_string(), "127.0.0.1:8080");
}

#[test]
fn trims_whitespace() {
    let cfg = ServerConfig::from_lookup(lookup(&[("PORT", " 9000 ")])).unwrap();
    assert_eq!(cfg.addr.port(), 9000);
}

#[test]
fn accepts_ipv6_bind_addr() {
    let cfg = ServerConfig::from_lookup(lookup(&[("BIND_ADDR", "::1")])).unwrap();
    assert!(cfg.addr.is_ipv6());
}

#[test]
fn rejects_bad_port() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort(ref raw) if raw == "http"));
    assert_eq!(err.to_string(), "invalid PORT 'http'");

    assert!(matches!(
        ServerConfig::from_lookup(lookup(&[("PORT", "70000")])),
        Err(ConfigError::InvalidPort(_))
    ));
}

#[test]
fn rejects_bad_bind_addr() {
    assert!(matches!(
        ServerConfig::from_lookup(lookup(&[("BIND_ADDR", "localhost")])),
        Err(ConfigError::InvalidBindAddr(_))
    ));
}

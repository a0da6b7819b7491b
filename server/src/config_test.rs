use super::*;

#[test]
fn missing_port_uses_default() {
    assert_eq!(ServerConfig::from_port_var(None).unwrap().port, DEFAULT_PORT);
    assert_eq!(ServerConfig::from_port_var(Some("  ")).unwrap().port, DEFAULT_PORT);
}

#[test]
fn port_is_trimmed_and_parsed() {
    assert_eq!(ServerConfig::from_port_var(Some(" 8080 ")).unwrap().port, 8080);
}

#[test]
fn unparsable_port_is_an_error() {
    for raw in ["eighty", "-1", "70000"] {
        let err = ServerConfig::from_port_var(Some(raw)).unwrap_err();
        assert!(err.to_string().contains(raw), "{err}");
    }
}

#[test]
fn from_env_reads_port_variable() {
    // PORT is process-global; this is the only test that touches it.
    unsafe { std::env::set_var("PORT", "4100") };
    let config = ServerConfig::from_env();
    unsafe { std::env::remove_var("PORT") };
    assert_eq!(config.unwrap().port, 4100);
}

#[test]
fn bind_addr_listens_on_all_interfaces() {
    let config = ServerConfig { port: 3000 };
    assert_eq!(config.bind_addr(), "0.0.0.0:3000");
}

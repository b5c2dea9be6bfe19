use super::*;

#[test]
fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.store.db_path, "~/.witaj/witaj.db");
    assert_eq!(config.store.languages.len(), 2);
    assert_eq!(config.store.languages[0].welcome_message, "Hello");
    assert_eq!(config.store.languages[1].code, "pl");
}

#[test]
fn test_load_missing_file_uses_defaults() {
    let config = load("/nonexistent/witaj-config.toml").unwrap();
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.store.languages.len(), 2);
}

#[test]
fn test_parse_full_config() {
    let toml_str = r#"
        [server]
        host = "0.0.0.0"
        port = 9090

        [store]
        db_path = "test.db"

        [[store.languages]]
        id = 1
        welcome_message = "Hola"
        code = "es"
    "#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 9090);
    assert_eq!(config.store.db_path, "test.db");
    assert_eq!(config.store.languages.len(), 1);
    assert_eq!(config.store.languages[0].welcome_message, "Hola");
}

#[test]
fn test_partial_config_fills_defaults() {
    let toml_str = r#"
        [server]
        port = 3000
    "#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 3000);
    // Omitted [store] section keeps the default seed list.
    assert_eq!(config.store.languages.len(), 2);
}

#[test]
fn test_shellexpand_home() {
    std::env::set_var("HOME", "/home/tester");
    assert_eq!(shellexpand("~/data/witaj.db"), "/home/tester/data/witaj.db");
    assert_eq!(shellexpand("/absolute/path.db"), "/absolute/path.db");
}

use lineserve::config::{Config, DEFAULT_DOC_ROOT, DEFAULT_LISTEN_ADDR};
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| vars.get(key).cloned()
}

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("lineserve-{}-{}", name, std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_config_defaults() {
    let cfg = Config::from_lookup(lookup_from(&[])).unwrap();

    assert_eq!(cfg.server.listen_addr, DEFAULT_LISTEN_ADDR);
    assert_eq!(cfg.server.listen_addr, "localhost:8090");
    assert_eq!(cfg.doc_root, PathBuf::from(DEFAULT_DOC_ROOT));
    assert_eq!(cfg.read_timeout(), Duration::from_secs(5));
}

#[test]
fn test_config_custom_address_from_env() {
    let cfg = Config::from_lookup(lookup_from(&[("LISTEN", "0.0.0.0:3000")])).unwrap();
    assert_eq!(cfg.server.listen_addr, "0.0.0.0:3000");
}

#[test]
fn test_config_doc_root_from_env() {
    let cfg = Config::from_lookup(lookup_from(&[("DOC_ROOT", "/srv/www")])).unwrap();
    assert_eq!(cfg.doc_root, PathBuf::from("/srv/www"));
}

#[test]
fn test_config_from_yaml() {
    let cfg = Config::from_yaml_str(
        r#"
server:
  listen_addr: "127.0.0.1:9000"
  read_timeout_secs: 2
doc_root: "public"
"#,
    )
    .unwrap();

    assert_eq!(cfg.server.listen_addr, "127.0.0.1:9000");
    assert_eq!(cfg.read_timeout(), Duration::from_secs(2));
    assert_eq!(cfg.doc_root, PathBuf::from("public"));
}

#[test]
fn test_config_yaml_missing_keys_use_defaults() {
    let cfg = Config::from_yaml_str("doc_root: public\n").unwrap();

    assert_eq!(cfg.server.listen_addr, DEFAULT_LISTEN_ADDR);
    assert_eq!(cfg.server.read_timeout_secs, 5);
    assert_eq!(cfg.doc_root, PathBuf::from("public"));
}

#[test]
fn test_config_invalid_yaml_is_error() {
    assert!(Config::from_yaml_str("server: [not, a, map]\n").is_err());
}

#[test]
fn test_config_file_then_env_override() {
    let dir = scratch_dir("config-file");
    let path = dir.join("server.yaml");
    std::fs::write(
        &path,
        "server:\n  listen_addr: \"127.0.0.1:9000\"\ndoc_root: from-file\n",
    )
    .unwrap();

    let path_str = path.to_string_lossy().into_owned();
    let cfg = Config::from_lookup(lookup_from(&[
        ("SERVER_CONFIG", path_str.as_str()),
        ("LISTEN", "127.0.0.1:9100"),
    ]))
    .unwrap();

    assert_eq!(cfg.server.listen_addr, "127.0.0.1:9100");
    assert_eq!(cfg.doc_root, PathBuf::from("from-file"));
}

#[test]
fn test_config_missing_file_is_error() {
    let result = Config::from_lookup(lookup_from(&[(
        "SERVER_CONFIG",
        "/definitely/not/here/server.yaml",
    )]));
    assert!(result.is_err());
}

#[test]
fn test_config_clone() {
    let cfg1 = Config::default();
    let cfg2 = cfg1.clone();
    assert_eq!(cfg1.server.listen_addr, cfg2.server.listen_addr);
    assert_eq!(cfg1.doc_root, cfg2.doc_root);
}

#[test]
fn test_validate_accepts_existing_directory() {
    let cfg = Config {
        doc_root: scratch_dir("valid-root"),
        ..Config::default()
    };
    assert!(cfg.validate().is_ok());
}

#[test]
fn test_validate_rejects_missing_doc_root() {
    let cfg = Config {
        doc_root: PathBuf::from("/definitely/not/here"),
        ..Config::default()
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn test_validate_rejects_file_as_doc_root() {
    let file = scratch_dir("file-root").join("not-a-dir.txt");
    std::fs::write(&file, "hello").unwrap();

    let cfg = Config {
        doc_root: file,
        ..Config::default()
    };
    let err = cfg.validate().unwrap_err();
    assert!(err.to_string().contains("not a directory"));
}

#[test]
fn test_validate_rejects_zero_timeout() {
    let mut cfg = Config {
        doc_root: scratch_dir("zero-timeout"),
        ..Config::default()
    };
    cfg.server.read_timeout_secs = 0;
    assert!(cfg.validate().is_err());
}

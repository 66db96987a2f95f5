use prefix_router::{Config, RouterBuilder};

#[test]
fn config_default() {
    let config = Config::default();
    assert_eq!(config.separator, '/');
    assert!(config.quick_match);
    assert!(config.exclude_constants);
    assert_eq!(config.min_common_prefix, 1);
    assert!(!config.split_at_separator);
}

#[test]
fn config_exclude_constants_needs_quick_match() {
    let config = Config::default().quick_match(false).exclude_constants(true);
    let mut builder = RouterBuilder::with_config(config);
    builder.add("/about", 1).add("/{page}", 2);
    let router = builder.build().unwrap();
    assert_eq!(*router.route("/about").unwrap().0, 1);
    assert_eq!(*router.route("/home").unwrap().0, 2);
}

#[cfg(feature = "serde")]
#[test]
fn config_deserialize_partial() {
    let config: Config = serde_json::from_str(r#"{ "separator": ".", "quick_match": false }"#).unwrap();
    assert_eq!(config.separator, '.');
    assert!(!config.quick_match);
    assert_eq!(config.min_common_prefix, 1);

    let json = serde_json::to_string(&config).unwrap();
    let back: Config = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}

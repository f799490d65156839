//! Tests for severity level functionality.

use scopelog::Level;

#[test]
fn level_ordering() {
    assert!(Level::Debug < Level::Info);
    assert!(Level::Info < Level::Warn);
    assert!(Level::Warn < Level::Error);
    assert!(Level::Error < Level::Fatal);
}

#[test]
fn level_display() {
    assert_eq!(Level::Debug.to_string(), "debug");
    assert_eq!(Level::Info.to_string(), "info");
    assert_eq!(Level::Warn.to_string(), "warn");
    assert_eq!(Level::Error.to_string(), "error");
    assert_eq!(Level::Fatal.to_string(), "fatal");
}

#[test]
fn level_from_str() {
    assert_eq!("debug".parse::<Level>().unwrap(), Level::Debug);
    assert_eq!("INFO".parse::<Level>().unwrap(), Level::Info);
    assert_eq!("warning".parse::<Level>().unwrap(), Level::Warn);
    assert_eq!("err".parse::<Level>().unwrap(), Level::Error);
    assert_eq!("Fatal".parse::<Level>().unwrap(), Level::Fatal);
}

#[test]
fn level_from_str_invalid() {
    assert!("loud".parse::<Level>().is_err());
}

#[test]
fn level_default() {
    assert_eq!(Level::default(), Level::Info);
}

#[test]
fn level_deserializes_with_alias_handling() {
    #[derive(serde::Deserialize)]
    struct Holder {
        level: Level,
    }

    let holder: Holder = toml::from_str("level = \"warning\"").unwrap();
    assert_eq!(holder.level, Level::Warn);
    assert!(toml::from_str::<Holder>("level = \"loud\"").is_err());
}

#[test]
fn level_index_matches_order() {
    for (i, level) in Level::all().iter().enumerate() {
        assert_eq!(level.index(), i);
    }
}

use std::io::Write;

use hint_mini::config::DEFAULT_ALPHABET;
use hint_mini::{Alphabet, ConfigError, HintConfig, SelectionController};

#[test]
fn defaults() {
    let config = HintConfig::default();
    assert_eq!(config.alphabet, DEFAULT_ALPHABET);
    assert_eq!(config.alphabet.chars().count(), 16);
    assert_eq!(config.cancel_chord, '[');
    assert!(config.rotate_on_tab);
    assert!(config.commit_on_enter);
    assert!(config.validate().is_ok());
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let config = HintConfig::from_json_str(r#"{ "alphabet": "jkl" }"#).unwrap();
    assert_eq!(config.alphabet, "jkl");
    assert_eq!(config.cancel_chord, '[');
    assert_eq!(config.alphabet().unwrap().chars(), &['J', 'K', 'L']);
}

#[test]
fn alphabet_validation() {
    assert!(matches!(Alphabet::parse(""), Err(ConfigError::EmptyAlphabet)));
    assert!(matches!(
        Alphabet::parse("asA"),
        Err(ConfigError::DuplicateAlphabetChar('A'))
    ));
    assert!(matches!(
        Alphabet::parse("a s"),
        Err(ConfigError::InvalidAlphabetChar(' '))
    ));
}

#[test]
fn alphabet_membership_ignores_case() {
    let alphabet = Alphabet::parse("asdf").unwrap();
    assert!(alphabet.contains('a'));
    assert!(alphabet.contains('F'));
    assert!(!alphabet.contains('x'));
}

#[test]
fn invalid_json_is_reported() {
    let err = HintConfig::from_json_str("{ alphabet: ").unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn invalid_alphabet_in_json_is_rejected() {
    let err = HintConfig::from_json_str(r#"{ "alphabet": "aa" }"#).unwrap_err();
    assert!(matches!(err, ConfigError::DuplicateAlphabetChar('A')));
}

#[test]
fn load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "alphabet": "fjdk", "rotate_on_tab": false }}"#).unwrap();

    let config = HintConfig::load(file.path()).unwrap();
    assert_eq!(config.alphabet, "fjdk");
    assert!(!config.rotate_on_tab);
    assert!(config.commit_on_enter);
}

#[test]
fn load_missing_file_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hints.json");
    match HintConfig::load(&path) {
        Err(ConfigError::Io { path: p, .. }) => assert_eq!(p, path),
        other => panic!("expected I/O error, got {other:?}"),
    }
}

#[test]
fn controller_refuses_a_bad_alphabet() {
    let config = HintConfig {
        alphabet: String::new(),
        ..HintConfig::default()
    };
    assert!(matches!(
        SelectionController::new(config),
        Err(ConfigError::EmptyAlphabet)
    ));
}

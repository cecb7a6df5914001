//! Config files on disk.

use std::io::Write;

use qimen_base::{BoardStyle, Branch, DunType, Stem, compute_board_with};
use qimen_config::{ConfigError, QimenConfig};
use tempfile::NamedTempFile;

fn write_config(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file
}

#[test]
fn from_file_reads_all_sections() {
    let file = write_config(
        r#"
[board]
style = "flying"
dun = "yin"
method = 9

[deities]
flying_variant = "ten"
"#,
    );
    let config = QimenConfig::from_file(file.path()).unwrap();
    assert_eq!(config.board.style, BoardStyle::Flying);
    assert_eq!(config.board.dun, DunType::Yin);
    assert_eq!(config.board.method, 9);

    let req = config.board.request(Stem::Bing, Branch::Zi).unwrap();
    let table = config.deity_table().unwrap();
    let board = compute_board_with(&req, &table);
    assert_eq!(board.meta.method, 9);
    assert_eq!(board.layers.deities.len(), 9);
}

#[test]
fn load_from_path() {
    let file = write_config("[board]\nmethod = 4\n");
    let config = QimenConfig::load_from(Some(file.path())).unwrap();
    assert_eq!(config.board.method, 4);
}

#[test]
fn missing_file_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    let err = QimenConfig::from_file(&path).unwrap_err();
    match err {
        ConfigError::Read { path: p, .. } => assert_eq!(p, path),
        other => panic!("expected read error, got {other:?}"),
    }
}

#[test]
fn malformed_file_is_parse_error() {
    let file = write_config("[board\nmethod = ");
    let err = QimenConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

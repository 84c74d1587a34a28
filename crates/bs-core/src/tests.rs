use crate::*;
use crate::config::{DEFAULT_CUT_OFF_LENGTH, DEFAULT_MIN_WORDS_LENGTH};
use crate::library::{load_document, resolve_source};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use tempfile::TempDir;

// ========== Config ==========

#[test]
fn test_config_defaults() {
    let config = SamplerConfig::default();
    assert_eq!(config.cut_off_length, DEFAULT_CUT_OFF_LENGTH);
    assert_eq!(config.min_words_length, DEFAULT_MIN_WORDS_LENGTH);
    assert_eq!(config.scan_advance, ScanAdvance::Terminal);
    assert!(config.seed.is_none());
}

#[test]
fn test_normalized_raises_cut_off() {
    let config = SamplerConfig::new(2, 6).normalized().unwrap();
    assert_eq!(config.cut_off_length, 6);
    assert_eq!(config.min_words_length, 6);
}

#[test]
fn test_normalized_keeps_valid_values() {
    let config = SamplerConfig::new(10, 3).normalized().unwrap();
    assert_eq!(config.cut_off_length, 10);
    assert_eq!(config.min_words_length, 3);
}

#[test]
fn test_normalized_rejects_zero_min_words() {
    let err = SamplerConfig::new(5, 0).normalized().unwrap_err();
    assert!(matches!(err, SamplerError::InvalidConfig(_)));
    assert!(err.to_string().contains("minimum word count of 1"));
}

#[test]
fn test_config_partial_json() {
    let json = r#"{"sampler": {"cut_off_length": 8, "scan_advance": "quotation"}}"#;
    let config: BookSamplerConfig = serde_json::from_str(json).unwrap();
    assert_eq!(config.sampler.cut_off_length, 8);
    assert_eq!(config.sampler.min_words_length, DEFAULT_MIN_WORDS_LENGTH);
    assert_eq!(config.sampler.scan_advance, ScanAdvance::Quotation);
    assert!(config.library.samples_dir.is_none());
}

#[test]
fn test_config_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sampler.json");
    fs::write(&path, r#"{"sampler": {"seed": 7}, "library": {"samples_dir": "/tmp/books"}}"#).unwrap();
    let config = BookSamplerConfig::from_json_file(&path).unwrap();
    assert_eq!(config.sampler.seed, Some(7));
    assert_eq!(config.library.samples_dir.as_deref(), Some(std::path::Path::new("/tmp/books")));
}

#[test]
fn test_config_from_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = BookSamplerConfig::from_json_file(dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, SamplerError::NotFound(_)));
}

#[test]
fn test_config_from_malformed_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, "{ not json").unwrap();
    let err = BookSamplerConfig::from_json_file(&path).unwrap_err();
    assert!(matches!(err, SamplerError::Serialization(_)));
}

// ========== SampleKind ==========

#[test]
fn test_sample_kind_display() {
    assert_eq!(SampleKind::Paragraph.to_string(), "paragraph");
    assert_eq!(SampleKind::Sentence.to_string(), "sentence");
    assert_eq!(SampleKind::Fragment.to_string(), "fragment");
}

#[test]
fn test_sample_kind_default_is_fragment() {
    assert_eq!(SampleKind::default(), SampleKind::Fragment);
}

#[test]
fn test_empty_selection_message() {
    let err = SamplerError::EmptySelection(SampleKind::Sentence);
    assert_eq!(err.to_string(), "No sentence available to sample");
}

// ========== Library ==========

#[test]
fn test_resolve_prefers_samples_dir() {
    let library = TempDir::new().unwrap();
    fs::write(library.path().join("moby.txt"), "Call me Ishmael.").unwrap();
    let mut rng = StdRng::seed_from_u64(1);
    let path = resolve_source("moby.txt".as_ref(), Some(library.path()), &mut rng).unwrap();
    assert_eq!(path, library.path().join("moby.txt"));
}

#[test]
fn test_resolve_falls_back_to_plain_path() {
    let library = TempDir::new().unwrap();
    let other = TempDir::new().unwrap();
    let book = other.path().join("book.txt");
    fs::write(&book, "Text.").unwrap();
    let mut rng = StdRng::seed_from_u64(1);
    let path = resolve_source(&book, Some(library.path()), &mut rng).unwrap();
    assert_eq!(path, book);
}

#[test]
fn test_resolve_missing() {
    let library = TempDir::new().unwrap();
    let mut rng = StdRng::seed_from_u64(1);
    let err = resolve_source("missing.txt".as_ref(), Some(library.path()), &mut rng).unwrap_err();
    assert!(matches!(err, SamplerError::NotFound(_)));
}

#[test]
fn test_resolve_directory_picks_a_file() {
    let library = TempDir::new().unwrap();
    let shelf = library.path().join("classics");
    fs::create_dir(&shelf).unwrap();
    fs::create_dir(shelf.join("nested")).unwrap();
    for name in ["a.txt", "b.txt", "c.txt"] {
        fs::write(shelf.join(name), "Some text.").unwrap();
    }
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..20 {
        let path = resolve_source("classics".as_ref(), Some(library.path()), &mut rng).unwrap();
        assert!(path.is_file());
        assert_eq!(path.parent().unwrap(), shelf);
    }
}

#[test]
fn test_resolve_directory_is_seeded() {
    let library = TempDir::new().unwrap();
    for name in ["a.txt", "b.txt", "c.txt", "d.txt"] {
        fs::write(library.path().join(name), "Some text.").unwrap();
    }
    let pick = |seed| {
        let mut rng = StdRng::seed_from_u64(seed);
        resolve_source(library.path(), None, &mut rng).unwrap()
    };
    assert_eq!(pick(9), pick(9));
}

#[test]
fn test_resolve_empty_directory() {
    let library = TempDir::new().unwrap();
    fs::create_dir(library.path().join("empty")).unwrap();
    let mut rng = StdRng::seed_from_u64(1);
    let err = resolve_source("empty".as_ref(), Some(library.path()), &mut rng).unwrap_err();
    assert!(matches!(err, SamplerError::EmptyDirectory(_)));
}

#[test]
fn test_load_document() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("book.txt");
    fs::write(&path, "Line one.\nLine two.").unwrap();
    assert_eq!(load_document(&path).unwrap(), "Line one.\nLine two.");
    assert!(matches!(
        load_document(&dir.path().join("gone.txt")),
        Err(SamplerError::NotFound(_))
    ));
}

#[test]
fn test_load_document_directory_is_io_error() {
    let dir = TempDir::new().unwrap();
    assert!(matches!(load_document(dir.path()), Err(SamplerError::Io(_))));
}

//! Tests for the catalog loader

extern crate std;

use crate::catalog::errors::CarveError;
use crate::catalog::loader::CatalogLoader;

use super::test_utils::{test_logger, write_definitions_file};

#[test]
fn test_load_well_formed_definitions() {
    let path = write_definitions_file("well-formed.txt",
        "PNG:89504E470D0A1A0A\nGIF:474946383961\nZIP:504B0304\n");
    let logger = test_logger("well-formed");
    let loader = CatalogLoader::new(&logger);

    let catalog = loader.load(&path.display().to_string()).unwrap();
    std::assert_eq!(catalog.len(), 3);

    let record = catalog.get(0).unwrap();
    std::assert_eq!(record.file_type, "PNG");
    std::assert_eq!(record.magic, vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]);

    let record = catalog.get(2).unwrap();
    std::assert_eq!(record.file_type, "ZIP");
    std::assert_eq!(record.magic, vec![0x50, 0x4B, 0x03, 0x04]);
}

#[test]
fn test_catalog_preserves_insertion_order() {
    let path = write_definitions_file("ordering.txt",
        "ZZZ:01\nAAA:02\nMMM:03\n");
    let logger = test_logger("ordering");
    let loader = CatalogLoader::new(&logger);

    let catalog = loader.load(&path.display().to_string()).unwrap();
    let labels: Vec<&str> = catalog.iter().map(|r| r.file_type.as_str()).collect();
    std::assert_eq!(labels, vec!["ZZZ", "AAA", "MMM"]);
}

#[test]
fn test_line_without_colon_is_format_error() {
    let path = write_definitions_file("no-colon.txt", "BAD_LINE_NO_COLON\n");
    let logger = test_logger("no-colon");
    let loader = CatalogLoader::new(&logger);

    let result = loader.load(&path.display().to_string());
    match result {
        Err(CarveError::FormatError(line)) => std::assert_eq!(line, "BAD_LINE_NO_COLON"),
        other => std::panic!("expected FormatError, got {:?}", other),
    }
}

#[test]
fn test_line_with_two_colons_is_format_error() {
    let path = write_definitions_file("two-colons.txt", "PNG:89504E47:0D0A\n");
    let logger = test_logger("two-colons");
    let loader = CatalogLoader::new(&logger);

    let result = loader.load(&path.display().to_string());
    match result {
        Err(CarveError::FormatError(line)) => std::assert_eq!(line, "PNG:89504E47:0D0A"),
        other => std::panic!("expected FormatError, got {:?}", other),
    }
}

#[test]
fn test_blank_line_is_format_error() {
    let path = write_definitions_file("blank-line.txt", "PNG:89504E47\n\nGIF:474946\n");
    let logger = test_logger("blank-line");
    let loader = CatalogLoader::new(&logger);

    let result = loader.load(&path.display().to_string());
    std::assert!(matches!(result, Err(CarveError::FormatError(_))));
}

#[test]
fn test_odd_hex_digit_count_is_decode_error() {
    let path = write_definitions_file("odd-hex.txt", "PNG:89504E4\n");
    let logger = test_logger("odd-hex");
    let loader = CatalogLoader::new(&logger);

    let result = loader.load(&path.display().to_string());
    std::assert!(matches!(result, Err(CarveError::DecodeError(_))));
}

#[test]
fn test_invalid_hex_digits_is_decode_error() {
    let path = write_definitions_file("bad-hex.txt", "PNG:89XY4E47\n");
    let logger = test_logger("bad-hex");
    let loader = CatalogLoader::new(&logger);

    let result = loader.load(&path.display().to_string());
    std::assert!(matches!(result, Err(CarveError::DecodeError(_))));
}

#[test]
fn test_multibyte_hex_is_decode_error() {
    // Non-ASCII signature bytes must fail the load, not panic mid-parse
    let path = write_definitions_file("multibyte-hex.txt", "TXT:a\u{e9}0\n");
    let logger = test_logger("multibyte-hex");
    let loader = CatalogLoader::new(&logger);

    let result = loader.load(&path.display().to_string());
    std::assert!(matches!(result, Err(CarveError::DecodeError(_))));
}

#[test]
fn test_empty_definitions_file_yields_empty_catalog() {
    let path = write_definitions_file("empty.txt", "");
    let logger = test_logger("empty");
    let loader = CatalogLoader::new(&logger);

    let catalog = loader.load(&path.display().to_string()).unwrap();
    std::assert!(catalog.is_empty());
}

#[test]
fn test_missing_definitions_file_is_io_error() {
    let logger = test_logger("missing");
    let loader = CatalogLoader::new(&logger);

    let result = loader.load("definitely-not-here.txt");
    std::assert!(matches!(result, Err(CarveError::IoError(_))));
}

#[test]
fn test_image_labels_bind_reencode_strategy() {
    let path = write_definitions_file("strategies.txt",
        "PNG:89504E47\nGIF:474946\nELF:7F454C46\n");
    let logger = test_logger("strategies");
    let loader = CatalogLoader::new(&logger);

    let catalog = loader.load(&path.display().to_string()).unwrap();

    std::assert_eq!(catalog.get(0).unwrap().strategy.name(), "image re-encode");
    std::assert_eq!(catalog.get(0).unwrap().strategy.extension(), "png");
    std::assert_eq!(catalog.get(1).unwrap().strategy.name(), "image re-encode");
    std::assert_eq!(catalog.get(1).unwrap().strategy.extension(), "gif");

    // Unrecognized labels fall back to a raw copy named after the label
    std::assert_eq!(catalog.get(2).unwrap().strategy.name(), "raw copy");
    std::assert_eq!(catalog.get(2).unwrap().strategy.extension(), "elf");
}

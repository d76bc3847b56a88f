//! Batch and concurrent parsing.

use flexcon::{ErrorCode, parse, parse_all};

use crate::helpers::source_fixtures::{FORM, MIXED_BATCH, NAVIGATION, TABLE};

#[test]
fn test_parse_all_matches_sequential_parse() {
    let batch = parse_all(MIXED_BATCH.as_slice());
    assert_eq!(batch.len(), MIXED_BATCH.len());
    for (expression, result) in MIXED_BATCH.iter().zip(&batch) {
        assert_eq!(result, &parse(expression), "Result for {:?}", expression);
    }
}

#[test]
fn test_parse_all_error_codes() {
    let batch = parse_all(MIXED_BATCH.as_slice());
    for (i, result) in batch.iter().enumerate() {
        match i % 4 {
            0 | 1 => assert!(result.is_ok(), "Entry {} should parse", i),
            2 => assert_eq!(result.as_ref().unwrap_err().code(), ErrorCode::E0101),
            _ => assert_eq!(result.as_ref().unwrap_err().code(), ErrorCode::E0306),
        }
    }
}

#[test]
fn test_parse_all_empty() {
    let empty: [&str; 0] = [];
    assert!(parse_all(&empty).is_empty());
}

#[test]
fn test_parse_from_many_threads() {
    let fixtures = [NAVIGATION, FORM, TABLE];
    let expected: Vec<_> = fixtures.iter().map(|f| parse(f).unwrap()).collect();

    std::thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| {
                for (fixture, expected) in fixtures.iter().zip(&expected) {
                    assert_eq!(&parse(fixture).unwrap(), expected);
                }
            });
        }
    });
}

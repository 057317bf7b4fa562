use candlestick_chart::domain::errors::{AppError, InfrastructureError, ValidationError};
use candlestick_chart::infrastructure::dto::parse_candle_series;

#[test]
fn rows_with_and_without_volume() {
    let series = parse_candle_series(
        r#"[
            [1700000000000, 10, 14, 8, 12],
            [1700000060000, 12, 13, 9, 10, 5.5]
        ]"#,
    )
    .unwrap();

    assert_eq!(series.len(), 2);
    let first = series.get(0).unwrap();
    assert_eq!(first.timestamp.value(), 1_700_000_000_000);
    assert_eq!(first.ohlcv.volume.value(), 0.0);
    assert_eq!(series.latest().unwrap().ohlcv.volume.value(), 5.5);
}

#[test]
fn quoted_numbers_are_accepted() {
    let series = parse_candle_series(r#"[[1, "10.5", "11", "10", "10.75", "3"]]"#).unwrap();
    assert_eq!(series.get(0).unwrap().ohlcv.close.value(), 10.75);
}

#[test]
fn empty_array_is_an_empty_series() {
    assert!(parse_candle_series("[]").unwrap().is_empty());
}

#[test]
fn broken_record_names_its_index() {
    let err = parse_candle_series("[[1, 10, 14, 8, 12], [2, 10, 9, 11, 10]]").unwrap_err();
    assert!(matches!(
        err,
        AppError::Validation(ValidationError::InvalidRecord { index: 1, .. })
    ));
}

#[test]
fn non_numeric_field_is_rejected() {
    let err = parse_candle_series(r#"[[1, "ten", 14, 8, 12]]"#).unwrap_err();
    assert!(matches!(err, AppError::Validation(ValidationError::InvalidRecord { index: 0, .. })));
}

#[test]
fn records_must_be_in_time_order() {
    let err = parse_candle_series("[[5, 10, 14, 8, 12], [4, 10, 14, 8, 12]]").unwrap_err();
    assert_eq!(err, AppError::Validation(ValidationError::OutOfOrder { index: 1 }));
}

#[test]
fn wrong_shape_is_a_parse_error() {
    for body in [r#"{"candles": []}"#, "[[1, 2, 3]]", "not json"] {
        let err = parse_candle_series(body).unwrap_err();
        assert!(
            matches!(err, AppError::Infrastructure(InfrastructureError::Parse(_))),
            "{body}: {err}"
        );
    }
}

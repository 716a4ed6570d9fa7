use sentiment_panel_wasm::domain::errors::PanelError;
use sentiment_panel_wasm::domain::sentiment::Prediction;

#[test]
fn sentiment_as_string() {
    let p = Prediction::decode(r#"{"sentiment":"0.2","pred":[0.1,0.2,0.3]}"#).unwrap();
    assert_eq!(p.sentiment, 0.2);
    assert_eq!(p.pred, vec![0.1, 0.2, 0.3]);
}

#[test]
fn sentiment_as_number_with_extra_fields() {
    let p = Prediction::decode(r#"{"sentiment":-0.05,"pred":[],"comment":"gg"}"#).unwrap();
    assert_eq!(p.sentiment, -0.05);
    assert!(p.pred.is_empty());
}

#[test]
fn padded_numeric_string() {
    let p = Prediction::decode(r#"{"sentiment":" 0.1 ","pred":[1]}"#).unwrap();
    assert_eq!(p.sentiment, 0.1);
    assert_eq!(p.pred, vec![1.0]);
}

#[test]
fn malformed_inputs_are_typed_errors() {
    for raw in [
        "",
        "not json",
        r#"{"pred":[0.1]}"#,
        r#"{"sentiment":"0.1"}"#,
        r#"{"sentiment":"high","pred":[]}"#,
        r#"{"sentiment":0.1,"pred":"0.2"}"#,
        r#"{"sentiment":0.1,"pred":[null]}"#,
        r#""0.1""#,
    ] {
        let err = Prediction::decode(raw).unwrap_err();
        assert!(matches!(err, PanelError::MalformedPayload(_)), "{raw:?} gave {err:?}");
    }
}

#![cfg(target_arch = "wasm32")]

use sentiment_panel_wasm::config::ElementIds;
use sentiment_panel_wasm::infrastructure::DomPanel;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn prediction_element_receives_raw_payload() {
    let document = web_sys::window().unwrap().document().unwrap();
    let element = document.create_element("div").unwrap();
    element.set_id("prediction");
    document.body().unwrap().append_child(&element).unwrap();

    let panel = DomPanel::new(ElementIds::default());
    panel.set_prediction_html(r#"{"sentiment":"0.2","pred":[0.1]}"#).unwrap();

    assert_eq!(element.inner_html(), r#"{"sentiment":"0.2","pred":[0.1]}"#);
}

#[wasm_bindgen_test]
fn missing_prediction_element_is_not_an_error() {
    let panel = DomPanel::new(ElementIds {
        prediction: "no-such-element".to_string(),
        ..ElementIds::default()
    });
    assert!(panel.set_prediction_html("<b>x</b>").is_ok());
}

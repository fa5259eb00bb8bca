//! Console output with a fixed prefix so site messages are easy to filter.

use wasm_bindgen::JsValue;

const PREFIX: &str = "[RedLife]";

fn line(msg: &str) -> JsValue {
    JsValue::from_str(&format!("{PREFIX} {msg}"))
}

pub fn info(msg: &str) {
    web_sys::console::log_1(&line(msg));
}

pub fn warn(msg: &str) {
    web_sys::console::warn_1(&line(msg));
}

pub fn error(msg: &str) {
    web_sys::console::error_1(&line(msg));
}

//! Browser console logging.
//!
//! Messages are tagged with the scope that produced them, e.g.
//! `[neuro:begin] level 1 grid 4x4`. Off-wasm every call is a no-op so the
//! native test suite stays quiet.

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, scope: &str, msg: &str) {
    use wasm_bindgen::JsValue;
    let line = JsValue::from_str(&format!("[neuro:{scope}] {msg}"));
    match level {
        Level::Debug => web_sys::console::debug_1(&line),
        Level::Info => web_sys::console::info_1(&line),
        Level::Warn => web_sys::console::warn_1(&line),
        Level::Error => web_sys::console::error_1(&line),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, _scope: &str, _msg: &str) {}

#[derive(Clone, Copy)]
enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

pub fn debug(scope: &str, msg: &str) {
    if cfg!(debug_assertions) {
        emit(Level::Debug, scope, msg);
    }
}

pub fn info(scope: &str, msg: &str) {
    emit(Level::Info, scope, msg);
}

pub fn warn(scope: &str, msg: &str) {
    emit(Level::Warn, scope, msg);
}

pub fn error(scope: &str, msg: &str) {
    emit(Level::Error, scope, msg);
}

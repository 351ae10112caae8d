// Browser tests for the localStorage high score store.
// Run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use neuro_reactive::HighScoreStore;
use neuro_reactive::web::LocalStorageStore;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn raw_storage() -> web_sys::Storage {
    web_sys::window().unwrap().local_storage().unwrap().unwrap()
}

#[wasm_bindgen_test]
fn saved_score_reads_back() {
    let store = LocalStorageStore::new("nr-test-high");
    store.save(321).unwrap();
    assert_eq!(store.load(), 321);
    assert_eq!(raw_storage().get_item("nr-test-high").unwrap().as_deref(), Some("321"));
}

#[wasm_bindgen_test]
fn missing_or_corrupt_entry_reads_zero() {
    let storage = raw_storage();
    storage.remove_item("nr-test-missing").unwrap();
    assert_eq!(LocalStorageStore::new("nr-test-missing").load(), 0);

    storage.set_item("nr-test-corrupt", "not-a-number").unwrap();
    assert_eq!(LocalStorageStore::new("nr-test-corrupt").load(), 0);
}

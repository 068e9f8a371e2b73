use crate::common::fake_compiler::{translation, FakeCompiler};
use crate::common::harness::AppTestHarness;
use crossterm::event::{KeyCode, KeyModifiers};
use std::sync::Arc;
use voltpad::catalog::{CONDITIONAL, HELLO, LOOP};

fn started() -> (AppTestHarness, Arc<FakeCompiler>) {
    let service = Arc::new(FakeCompiler::immediate(translation("int main() {}")));
    let mut harness = AppTestHarness::new(100, 30, service.clone()).unwrap();
    harness.start("hello").unwrap();
    (harness, service)
}

#[test]
fn test_alt_digit_loads_and_compiles() {
    let (mut harness, service) = started();

    harness
        .send_key(KeyCode::Char('3'), KeyModifiers::ALT)
        .unwrap();
    harness.wait_for_idle().unwrap();

    harness.assert_buffer_content(LOOP);
    assert_eq!(harness.app().current_example(), Some("loop"));
    assert_eq!(service.requests(), vec![HELLO.to_string(), LOOP.to_string()]);
    harness.assert_screen_contains("while(i < 5) {");
}

#[test]
fn test_f2_cycles_examples() {
    let (mut harness, _service) = started();

    harness.send_key(KeyCode::F(2), KeyModifiers::NONE).unwrap();
    assert_eq!(harness.app().current_example(), Some("loop"));

    harness.send_key(KeyCode::F(2), KeyModifiers::NONE).unwrap();
    assert_eq!(harness.app().current_example(), Some("conditional"));
    harness.assert_buffer_content(CONDITIONAL);

    harness.wait_for_idle().unwrap();
}

#[test]
fn test_loading_example_discards_edits() {
    let (mut harness, _service) = started();
    harness.type_text("\nint extra = 1;").unwrap();

    harness
        .send_key(KeyCode::Char('2'), KeyModifiers::ALT)
        .unwrap();
    harness.wait_for_idle().unwrap();

    harness.assert_buffer_content(HELLO);
}

#[test]
fn test_unused_digit_changes_nothing() {
    let (mut harness, service) = started();

    harness
        .send_key(KeyCode::Char('9'), KeyModifiers::ALT)
        .unwrap();
    harness.wait_for_idle().unwrap();

    harness.assert_buffer_content(HELLO);
    assert_eq!(service.requests().len(), 1);
}

#[test]
fn test_unknown_startup_example_leaves_editor_empty() {
    let service = Arc::new(FakeCompiler::immediate(translation("int main() {}")));
    let mut harness = AppTestHarness::new(100, 24, service.clone()).unwrap();

    harness.start("fibonacci").unwrap();

    harness.assert_buffer_content("");
    assert!(service.requests().is_empty());
    assert_eq!(harness.app().current_example(), None);
}

#[test]
fn test_clicking_example_loads_it() {
    let (mut harness, service) = started();
    let entry = harness
        .app()
        .layout()
        .examples
        .entries
        .iter()
        .find(|entry| entry.name == "conditional")
        .cloned()
        .unwrap();

    harness.click(entry.area.x + 1, entry.area.y).unwrap();
    harness.wait_for_idle().unwrap();

    harness.assert_buffer_content(CONDITIONAL);
    assert_eq!(service.requests().len(), 2);
}

use crate::common::fake_compiler::{translation, FakeCompiler};
use crate::common::harness::AppTestHarness;
use crossterm::event::{KeyCode, KeyModifiers};
use std::sync::Arc;

fn harness() -> (AppTestHarness, Arc<FakeCompiler>) {
    let service = Arc::new(FakeCompiler::immediate(translation("int main() {}")));
    let harness = AppTestHarness::new(100, 24, service.clone()).unwrap();
    (harness, service)
}

#[test]
fn test_typing_edits_buffer() {
    let (mut harness, service) = harness();

    harness.type_text("int x = 1;\nprint(x);").unwrap();

    harness.assert_buffer_content("int x = 1;\nprint(x);");
    harness.assert_screen_contains("print(x);");
    assert!(service.requests().is_empty());
}

#[test]
fn test_tab_inserts_four_spaces_at_caret() {
    let (mut harness, _service) = harness();
    harness.type_text("abcdefghij").unwrap();
    for _ in 0..5 {
        harness.send_key(KeyCode::Left, KeyModifiers::NONE).unwrap();
    }

    harness.send_key(KeyCode::Tab, KeyModifiers::NONE).unwrap();

    harness.assert_buffer_content("abcde    fghij");
    assert_eq!(harness.app().caret(), 9);
}

#[test]
fn test_tab_replaces_selection() {
    let (mut harness, _service) = harness();
    harness.type_text("if(x) {}").unwrap();
    harness.send_key(KeyCode::Home, KeyModifiers::NONE).unwrap();
    harness.send_key(KeyCode::Right, KeyModifiers::SHIFT).unwrap();
    harness.send_key(KeyCode::Right, KeyModifiers::SHIFT).unwrap();

    harness.send_key(KeyCode::Tab, KeyModifiers::NONE).unwrap();

    harness.assert_buffer_content("    (x) {}");
    assert_eq!(harness.app().caret(), 4);
}

#[test]
fn test_ctrl_enter_compiles_once_without_newline() {
    let (mut harness, service) = harness();
    harness.type_text("print(1);").unwrap();

    harness
        .send_key(KeyCode::Enter, KeyModifiers::CONTROL)
        .unwrap();
    harness.wait_for_idle().unwrap();

    harness.assert_buffer_content("print(1);");
    assert_eq!(service.requests(), vec!["print(1);".to_string()]);
    harness.assert_screen_contains("int main() {}");
}

#[test]
fn test_super_enter_compiles() {
    let (mut harness, service) = harness();
    harness.type_text("x").unwrap();

    harness.send_key(KeyCode::Enter, KeyModifiers::SUPER).unwrap();
    harness.wait_for_idle().unwrap();

    harness.assert_buffer_content("x");
    assert_eq!(service.requests().len(), 1);
}

#[test]
fn test_plain_enter_inserts_newline() {
    let (mut harness, service) = harness();
    harness.type_text("a").unwrap();

    harness.send_key(KeyCode::Enter, KeyModifiers::NONE).unwrap();

    harness.assert_buffer_content("a\n");
    assert!(service.requests().is_empty());
}

#[test]
fn test_ctrl_q_quits() {
    let (mut harness, _service) = harness();
    assert!(!harness.app().should_quit());

    harness
        .send_key(KeyCode::Char('q'), KeyModifiers::CONTROL)
        .unwrap();

    assert!(harness.app().should_quit());
    harness.assert_buffer_content("");
}

/// Terminals speaking the kitty protocol report shifted characters with SHIFT held
#[test]
fn test_shifted_characters_insert_shifted_text() {
    let (mut harness, service) = harness();

    harness.send_key(KeyCode::Char('p'), KeyModifiers::NONE).unwrap();
    harness.send_key(KeyCode::Char('('), KeyModifiers::SHIFT).unwrap();
    harness.send_key(KeyCode::Char('A'), KeyModifiers::SHIFT).unwrap();
    harness.send_key(KeyCode::Char('"'), KeyModifiers::SHIFT).unwrap();
    harness.send_key(KeyCode::Char(')'), KeyModifiers::SHIFT).unwrap();

    harness.assert_buffer_content("p(A\")");
    assert_eq!(harness.app().caret(), 5);
    assert!(service.requests().is_empty());
}

#[test]
fn test_shift_tab_indents_like_tab() {
    let (mut harness, service) = harness();
    harness.type_text("ab").unwrap();
    harness.send_key(KeyCode::Left, KeyModifiers::NONE).unwrap();

    harness.send_key(KeyCode::BackTab, KeyModifiers::SHIFT).unwrap();

    harness.assert_buffer_content("a    b");
    assert_eq!(harness.app().caret(), 5);
    assert!(service.requests().is_empty());
}

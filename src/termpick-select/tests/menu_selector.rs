use termpick_core::Error;
use termpick_input::{KeyCode, ScriptedKeys};
use termpick_select::{MENU_CAPACITY, MenuSelector};
use termpick_terminal::MemoryBackend;

const ACTIONS: [&str; 3] = ["Start", "Options", "Quit"];

fn pick(options: &[&str], mut keys: ScriptedKeys) -> (Result<usize, Error>, MemoryBackend) {
    let mut screen = MemoryBackend::new(40, 16);
    let result = MenuSelector::new("Main menu", options).run(&mut screen, &mut keys);
    (result, screen)
}

#[test]
fn digit_then_enter_returns_zero_based_index() {
    let (result, _) = pick(&ACTIONS, ScriptedKeys::typed("2").then(KeyCode::Enter));
    assert_eq!(result.unwrap(), 1);
}

#[test]
fn enter_without_pick_is_ignored() {
    let keys = ScriptedKeys::new()
        .then(KeyCode::Enter)
        .then_type("3")
        .then(KeyCode::Enter);
    let (result, _) = pick(&ACTIONS, keys);
    assert_eq!(result.unwrap(), 2);
}

#[test]
fn out_of_range_digits_keep_previous_pick() {
    let keys = ScriptedKeys::typed("1049x").then(KeyCode::Enter);
    let (result, _) = pick(&ACTIONS, keys);
    assert_eq!(result.unwrap(), 0);
}

#[test]
fn too_many_options_fail_fast() {
    let options: Vec<String> = (0..=MENU_CAPACITY).map(|n| format!("item {n}")).collect();
    let mut screen = MemoryBackend::new(40, 16);
    let mut keys = ScriptedKeys::typed("1").then(KeyCode::Enter);

    let result = MenuSelector::new("Too many", &options).run(&mut screen, &mut keys);

    assert!(matches!(
        result,
        Err(Error::TooManyOptions { count: 10, max: 9 })
    ));
    assert_eq!(keys.remaining(), 2);
}

#[test]
fn empty_menu_is_an_error() {
    let (result, _) = pick(&[], ScriptedKeys::new());
    assert!(matches!(result, Err(Error::NoOptions)));
}

#[test]
fn menu_hides_cursor_and_restores_it() {
    let (result, screen) = pick(&ACTIONS, ScriptedKeys::typed("1"));
    assert!(result.is_err());
    assert!(screen.is_cursor_visible());
    assert!(!screen.is_raw_mode());
    assert!(screen.lines().iter().all(String::is_empty));
}

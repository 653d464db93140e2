use crate::counter::{decrease, increase, toggle_switch, CounterAction};
use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyCommand {
    Dispatch(CounterAction),
    Quit,
    Ignore,
}

/// Map a key press to a command. Holds no state.
pub fn command_for_key(key: KeyEvent, increase_step: i64) -> KeyCommand {
    if key.kind != KeyEventKind::Press {
        return KeyCommand::Ignore;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => KeyCommand::Quit,
            _ => KeyCommand::Ignore,
        };
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => KeyCommand::Quit,
        KeyCode::Char('t') | KeyCode::Char(' ') | KeyCode::Enter => {
            KeyCommand::Dispatch(toggle_switch())
        }
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Up => {
            KeyCommand::Dispatch(increase(increase_step))
        }
        KeyCode::Char('-') | KeyCode::Down => KeyCommand::Dispatch(decrease()),
        _ => KeyCommand::Ignore,
    }
}

pub fn handle_key(app: &mut App, key: KeyEvent) {
    match command_for_key(key, app.increase_step()) {
        KeyCommand::Dispatch(action) => app.dispatch(action),
        KeyCommand::Quit => app.request_quit(),
        KeyCommand::Ignore => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::{counter_store, CounterState};
    use crossterm::event::KeyEventState;
    use std::sync::Arc;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn toggle_keys() {
        for code in [KeyCode::Char('t'), KeyCode::Char(' '), KeyCode::Enter] {
            assert_eq!(
                command_for_key(press(code), 1),
                KeyCommand::Dispatch(toggle_switch())
            );
        }
    }

    #[test]
    fn increase_uses_configured_step() {
        assert_eq!(
            command_for_key(press(KeyCode::Char('+')), 5),
            KeyCommand::Dispatch(increase(5))
        );
        assert_eq!(
            command_for_key(press(KeyCode::Up), 2),
            KeyCommand::Dispatch(increase(2))
        );
    }

    #[test]
    fn decrease_keys() {
        assert_eq!(
            command_for_key(press(KeyCode::Char('-')), 1),
            KeyCommand::Dispatch(decrease())
        );
        assert_eq!(
            command_for_key(press(KeyCode::Down), 1),
            KeyCommand::Dispatch(decrease())
        );
    }

    #[test]
    fn quit_keys() {
        assert_eq!(command_for_key(press(KeyCode::Char('q')), 1), KeyCommand::Quit);
        assert_eq!(command_for_key(press(KeyCode::Esc), 1), KeyCommand::Quit);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(command_for_key(ctrl_c, 1), KeyCommand::Quit);
    }

    #[test]
    fn release_events_are_ignored() {
        let release = KeyEvent::new_with_kind_and_state(
            KeyCode::Char('t'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert_eq!(command_for_key(release, 1), KeyCommand::Ignore);
    }

    #[test]
    fn ctrl_t_is_not_a_toggle() {
        let ctrl_t = KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL);
        assert_eq!(command_for_key(ctrl_t, 1), KeyCommand::Ignore);
    }

    #[test]
    fn handle_key_dispatches_to_store() {
        let store = Arc::new(counter_store(None).unwrap());
        let mut app = App::new(Arc::clone(&store), 3);

        handle_key(&mut app, press(KeyCode::Char('t')));
        handle_key(&mut app, press(KeyCode::Char('+')));
        handle_key(&mut app, press(KeyCode::Char('-')));

        assert_eq!(*store.get_state(), CounterState::new(true, 2));
        assert!(!app.should_quit());

        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(app.should_quit());
    }
}

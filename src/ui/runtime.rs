use crate::config::Config;
use crate::counter::CounterStore;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;

/// Run the interactive screen until the user quits.
pub fn run(store: Arc<CounterStore>, config: &Config) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = config.defaults.tick_rate();
    let mut app = App::new(store, config.defaults.increase_step);
    let events = EventHandler::new(tick_rate);
    tracing::info!(state = ?app.state(), "Terminal UI started");

    loop {
        if app.take_redraw() {
            terminal.draw(|frame| draw(frame, &app))?;
        }
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Resize) => app.request_redraw(),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    tracing::info!(state = ?app.state(), "Terminal UI stopped");
    drop(events);
    drop(app);
    drop(guard);
    Ok(())
}

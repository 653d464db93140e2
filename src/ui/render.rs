use crate::counter::CounterState;
use crate::ui::app::App;
use crate::ui::{footer, header};
use crate::ui::layout::{body_panels, centered_rect, layout_regions};
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, TOGGLE_OFF, TOGGLE_ON};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let state = app.state();

    frame.render_widget(header::widget(), header);
    frame.render_widget(Clear, body);
    draw_body(frame, body, &state);
    frame.render_widget(footer::widget(app.last_error()), footer);
}

fn draw_body(frame: &mut Frame<'_>, body: Rect, state: &CounterState) {
    if body.height == 0 {
        return;
    }
    let (switch_panel, counter_panel) = body_panels(body);

    // "active" class on the switch: filled and coloured when on.
    let (label, color) = if state.toggle {
        ("ON", TOGGLE_ON)
    } else {
        ("OFF", TOGGLE_OFF)
    };
    let mut switch_style = Style::default().fg(color).add_modifier(Modifier::BOLD);
    if state.toggle {
        switch_style = switch_style.add_modifier(Modifier::REVERSED);
    }
    let switch = Paragraph::new(Line::from(label))
        .alignment(Alignment::Center)
        .style(switch_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Switch ")
                .border_style(Style::default().fg(color)),
        );
    frame.render_widget(switch, centered_rect(60, 60, switch_panel));

    let counter = Paragraph::new(Line::from(state.counter.to_string()))
        .alignment(Alignment::Center)
        .style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Counter ")
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        );
    frame.render_widget(counter, centered_rect(60, 60, counter_panel));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::{counter_store, increase, CounterStore};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::sync::Arc;

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 15)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn app_with(initial: CounterState) -> (App, Arc<CounterStore>) {
        let store = Arc::new(counter_store(Some(initial)).unwrap());
        (App::new(Arc::clone(&store), 1), store)
    }

    #[test]
    fn renders_off_switch_and_counter() {
        let (app, _) = app_with(CounterState::new(false, 42));
        let screen = render(&app);
        assert!(screen.contains("OFF"));
        assert!(screen.contains("42"));
        assert!(screen.contains("Quit"));
    }

    #[test]
    fn renders_committed_state_after_dispatch() {
        let (app, store) = app_with(CounterState::new(true, 0));
        store.dispatch(increase(7)).unwrap();
        let screen = render(&app);
        assert!(screen.contains("ON"));
        assert!(screen.contains('7'));
    }

    #[test]
    fn renders_last_error_in_footer() {
        let (mut app, _) = app_with(CounterState::new(false, i64::MAX));
        app.dispatch(increase(1));
        let screen = render(&app);
        assert!(screen.contains("Error"));
    }
}

//! Text and JSON projections of a [`GameView`].
//!
//! Rendering is stateless: the same view and config always produce the
//! same output.

use crate::config::DisplayConfig;
use rewind_tictactoe::{GameView, HistoryItem, Position, Square};
use tracing::instrument;

/// Renders a view in the configured format.
///
/// # Errors
///
/// Fails only if JSON serialization fails.
#[instrument(skip_all)]
pub fn render(view: &GameView, config: &DisplayConfig) -> Result<String, serde_json::Error> {
    if *config.json() {
        render_json(view)
    } else {
        Ok(render_text(view, config))
    }
}

/// Renders a view as a single line of JSON.
#[instrument(skip_all)]
pub fn render_json(view: &GameView) -> Result<String, serde_json::Error> {
    serde_json::to_string(view)
}

/// Renders the board, status line, and history listing as text.
///
/// Winning squares are bracketed, e.g. `[X]`.
#[instrument(skip_all)]
pub fn render_text(view: &GameView, config: &DisplayConfig) -> String {
    let mut out = String::new();

    for row in 0..3 {
        let cells: Vec<String> = (0..3)
            .filter_map(|col| Position::from_index(row * 3 + col))
            .map(|pos| cell(view, pos))
            .collect();
        out.push_str(&cells.join("|"));
        out.push('\n');
        if row < 2 {
            out.push_str("---+---+---\n");
        }
    }

    out.push('\n');
    out.push_str(&view.status().to_string());
    out.push('\n');

    out.push_str(&format!("History ({}):\n", view.order()));
    for item in view.history() {
        out.push_str(&history_line(item, *config.show_coordinates()));
        out.push('\n');
    }
    out
}

fn cell(view: &GameView, pos: Position) -> String {
    let mark = match view.board().get(pos) {
        Square::Empty => ".".to_string(),
        Square::Occupied(player) => player.to_string(),
    };
    if view.is_highlighted(pos) {
        format!("[{}]", mark)
    } else {
        format!(" {} ", mark)
    }
}

fn history_line(item: &HistoryItem, show_coordinates: bool) -> String {
    let marker = if *item.current() { ">" } else { " " };
    let mut line = format!("{} #{} {}", marker, item.step(), item.label());
    if show_coordinates && let Some(origin) = item.origin() {
        let (row, col) = origin.coordinates();
        line.push_str(&format!(" (row {}, col {})", row, col));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use rewind_tictactoe::{GameEngine, Step};

    fn won_engine() -> GameEngine {
        GameEngine::replay(
            [0, 4, 1, 3, 2]
                .into_iter()
                .filter_map(Position::from_index),
        )
    }

    #[test]
    fn test_text_brackets_winning_line() {
        let text = render_text(&won_engine().view(), &DisplayConfig::default());
        let first_row = text.lines().next().unwrap();
        assert_eq!(first_row, "[X]|[X]|[X]");
        assert!(text.contains(" O | O | . "));
        assert!(text.contains("Winner: X"));
    }

    #[test]
    fn test_text_history_marks_cursor_and_coordinates() {
        let mut engine = won_engine();
        engine.seek(Step::new(2)).unwrap();
        let text = render_text(&engine.view(), &DisplayConfig::default());

        assert!(text.contains("Next player: X"));
        assert!(text.contains("> #2 Go to move #2 (row 1, col 1)"));
        assert!(text.contains("  #0 Go to move start\n"));
        assert!(text.contains("History (forward):"));
    }

    #[test]
    fn test_reversed_order_lists_newest_first() {
        let mut engine = won_engine();
        engine.toggle_order();
        let text = render_text(&engine.view(), &DisplayConfig::default());
        let history: Vec<&str> = text
            .lines()
            .skip_while(|line| !line.starts_with("History"))
            .skip(1)
            .collect();
        assert!(history[0].contains("#5"));
        assert!(history[5].contains("#0"));
    }

    #[test]
    fn test_json_format() {
        let config = DisplayConfig::default().with_overrides(false, true);
        let json = render(&won_engine().view(), &config).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["cursor"], 5);
        assert_eq!(value["highlighted"].as_array().unwrap().len(), 3);
    }
}

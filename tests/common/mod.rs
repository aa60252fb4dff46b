//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use user_roster::config::UiConfig;
use user_roster::fetch::{FailureSource, UserService};
use user_roster::ui::app::App;
use user_roster::ui::render::draw;
use user_roster::ui::users::{ScreenController, SettledReceiver};

pub const DELAY: Duration = Duration::from_secs(3);
pub const FAILING_DELAY: Duration = Duration::from_secs(2);

pub fn make_service(failure: impl FailureSource + 'static) -> Arc<UserService> {
    Arc::new(UserService::new(DELAY, FAILING_DELAY, failure))
}

/// Build an `App` whose fetches use `failure`. Must be called inside a
/// tokio runtime because starting a fetch spawns a task.
pub fn make_app(failure: impl FailureSource + 'static) -> (App, SettledReceiver) {
    let (controller, rx) = ScreenController::with_channel(make_service(failure));
    let ui = UiConfig {
        tick_ms: 250,
        toast_ticks: 3,
    };
    (App::new(controller, &ui), rx)
}

/// Feed the next settlement into the app.
pub async fn settle_next(app: &mut App, rx: &mut SettledReceiver) {
    let settled = rx.recv().await.expect("settlement channel closed");
    app.on_settled(settled);
}

/// Draw the app on an in-memory terminal and return the screen as text.
pub fn render_to_string(app: &App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("test terminal");
    terminal.draw(|frame| draw(frame, app)).expect("draw");
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

/// Create a temporary config file with `content`.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

use crate::config::Config;
use crate::error::AppError;
use crate::fetch::UserService;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::users::ScreenController;
use std::sync::Arc;

/// Runs the users screen until the user quits.
///
/// Must be awaited on a tokio runtime; fetch tasks are spawned onto it.
pub async fn run(config: &Config) -> Result<(), AppError> {
    let service = Arc::new(UserService::from_config(&config.fetch));
    let (controller, settled_rx) = ScreenController::with_channel(service);
    let mut app = App::new(controller, &config.ui);
    let mut events = EventHandler::new(config.ui.tick_rate(), settled_rx);

    let (mut terminal, guard) = setup_terminal()?;
    app.start();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next().await {
            AppEvent::Key(key) => handle_key(&mut app, key),
            AppEvent::Tick => app.on_tick(),
            AppEvent::Resize(cols, rows) => {
                tracing::trace!(cols, rows, "Terminal resized");
            }
            AppEvent::Settled(settled) => app.on_settled(settled),
            AppEvent::InputClosed => break,
        }
    }

    drop(guard);
    tracing::info!("User roster closed");
    Ok(())
}

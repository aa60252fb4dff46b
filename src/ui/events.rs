use crossterm::event::{Event, EventStream, KeyEvent};
use futures::StreamExt;
use std::time::Duration;
use tokio::time::{interval, Interval, MissedTickBehavior};

use crate::fetch::FetchSettled;
use crate::ui::users::SettledReceiver;

pub enum AppEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    Tick,
    /// A fetch operation finished, current or not.
    Settled(FetchSettled),
    /// Terminal input ended or failed; the loop should stop.
    InputClosed,
}

/// Multiplexes terminal input, fetch settlements and the tick timer.
///
/// Everything is awaited on the calling task, so the UI loop processes one
/// event at a time on a single thread.
pub struct EventHandler {
    input: EventStream,
    settled_rx: SettledReceiver,
    ticker: Interval,
}

impl EventHandler {
    pub fn new(tick_rate: Duration, settled_rx: SettledReceiver) -> Self {
        let mut ticker = interval(tick_rate);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        Self {
            input: EventStream::new(),
            settled_rx,
            ticker,
        }
    }

    pub async fn next(&mut self) -> AppEvent {
        loop {
            tokio::select! {
                Some(settled) = self.settled_rx.recv() => {
                    return AppEvent::Settled(settled);
                }
                input = self.input.next() => {
                    match input {
                        Some(Ok(Event::Key(key))) => return AppEvent::Key(key),
                        Some(Ok(Event::Resize(cols, rows))) => return AppEvent::Resize(cols, rows),
                        Some(Ok(_)) => {}
                        Some(Err(err)) => {
                            tracing::error!(error = %err, "Terminal input error");
                            return AppEvent::InputClosed;
                        }
                        None => return AppEvent::InputClosed,
                    }
                }
                _ = self.ticker.tick() => {
                    return AppEvent::Tick;
                }
            }
        }
    }
}

//! Terminal front end for the chat
//!
//! Network calls run in spawned tasks and report back through the same
//! channel as terminal input, so the screen keeps rendering while a request
//! is in flight.

pub mod render;

use crate::chat::{BackendError, ChatBox, GameBackend, Key, KeyPress, PendingTurn};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use render::ChatView;
use std::io::{self, Stderr};
use std::sync::Arc;
use tokio::sync::mpsc;

pub type Tui = Terminal<CrosstermBackend<Stderr>>;

#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize,
    /// Time to show onboarding message `n`
    Onboarding(usize),
    Theme(Result<String, BackendError>),
    Answer(PendingTurn, Result<String, BackendError>),
}

pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<AppEvent>,
    tx: mpsc::UnboundedSender<AppEvent>,
}

impl EventHandler {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        let tx_events = tx.clone();
        tokio::spawn(async move {
            let mut reader = event::EventStream::new();
            while let Some(evt) = reader.next().await {
                let app_event = match evt {
                    // Only handle key press events, not release
                    Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                        Some(AppEvent::Key(key))
                    }
                    Ok(Event::Resize(_, _)) => Some(AppEvent::Resize),
                    Ok(_) => None,
                    Err(e) => {
                        tracing::error!(error = %e, "Terminal event stream failed");
                        break;
                    }
                };

                if let Some(event) = app_event {
                    if tx_events.send(event).is_err() {
                        break;
                    }
                }
            }
        });

        Self { rx, tx }
    }

    pub fn sender(&self) -> mpsc::UnboundedSender<AppEvent> {
        self.tx.clone()
    }

    pub async fn next(&mut self) -> Option<AppEvent> {
        self.rx.recv().await
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

pub fn init() -> io::Result<Tui> {
    enable_raw_mode()?;
    execute!(io::stderr(), EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(io::stderr()))
}

pub fn restore() -> io::Result<()> {
    execute!(io::stderr(), LeaveAlternateScreen)?;
    disable_raw_mode()
}

/// Install panic hook to restore terminal on panic
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore();
        original_hook(panic_info);
    }));
}

/// Terminals deliver committed IME text as plain characters, so nothing here
/// is ever composing.
pub fn key_press(key: &KeyEvent) -> KeyPress {
    let mapped = match key.code {
        KeyCode::Enter => Key::Enter,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => Key::Char(c),
        _ => Key::Other,
    };
    KeyPress::new(mapped)
}

pub fn is_quit(key: &KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Paced onboarding followed by the theme fetch
pub fn spawn_initialization(chat: &ChatBox, tx: mpsc::UnboundedSender<AppEvent>) {
    let backend = chat.backend();
    let pacing = chat.pacing().clone();
    let count = chat.onboarding_len();

    tokio::spawn(async move {
        for index in 0..count {
            tokio::time::sleep(pacing.delay_before(index)).await;
            if tx.send(AppEvent::Onboarding(index)).is_err() {
                return;
            }
        }
        let result = backend.fetch_theme().await;
        let _ = tx.send(AppEvent::Theme(result));
    });
}

pub fn spawn_classification(
    backend: Arc<dyn GameBackend>,
    pending: PendingTurn,
    tx: mpsc::UnboundedSender<AppEvent>,
) {
    tokio::spawn(async move {
        let result = backend.classify(&pending.theme, &pending.question).await;
        let _ = tx.send(AppEvent::Answer(pending, result));
    });
}

/// Apply one event to the chat. Returns `false` when the user asked to quit.
pub fn handle_event(
    chat: &mut ChatBox,
    view: &mut ChatView,
    event: AppEvent,
    tx: &mpsc::UnboundedSender<AppEvent>,
) -> bool {
    match event {
        AppEvent::Key(key) => {
            if is_quit(&key) {
                return false;
            }
            match key.code {
                KeyCode::Up => view.scroll_up(),
                KeyCode::Down => view.scroll_down(),
                _ => {
                    if let Some(pending) = chat.handle_key(key_press(&key)) {
                        spawn_classification(chat.backend(), pending, tx.clone());
                    }
                }
            }
        }
        AppEvent::Resize => {}
        AppEvent::Onboarding(index) => chat.push_onboarding(index),
        AppEvent::Theme(result) => {
            chat.apply_theme(result);
        }
        AppEvent::Answer(pending, result) => {
            chat.complete_submit(pending, result);
        }
    }
    true
}

pub async fn run(terminal: &mut Tui, chat: &mut ChatBox) -> io::Result<()> {
    let mut events = EventHandler::new();
    let tx = events.sender();
    let mut view = ChatView::default();

    spawn_initialization(chat, tx.clone());

    loop {
        if chat.take_scroll_request() {
            view.scroll_to_bottom(chat.state().messages().len());
        }
        terminal.draw(|frame| render::draw(frame, chat, &mut view))?;

        let Some(event) = events.next().await else {
            break;
        };
        if !handle_event(chat, &mut view, event, &tx) {
            break;
        }
    }
    Ok(())
}

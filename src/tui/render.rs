//! Chat screen rendering

use crate::chat::ChatBox;
use crate::game::{ChatMessage, Sender};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Position},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use std::borrow::Cow;
use unicode_width::UnicodeWidthStr;

const PLACEHOLDER: &str = "それは食べ物ですか？";

/// Scroll position of the message list
#[derive(Debug, Default)]
pub struct ChatView {
    list_state: ListState,
}

impl ChatView {
    pub fn scroll_to_bottom(&mut self, message_count: usize) {
        self.list_state.select(message_count.checked_sub(1));
    }

    pub fn scroll_up(&mut self) {
        self.list_state.select_previous();
    }

    pub fn scroll_down(&mut self) {
        self.list_state.select_next();
    }

    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }
}

pub fn draw(frame: &mut Frame, chat: &ChatBox, view: &mut ChatView) {
    let [messages_area, input_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(3)]).areas(frame.area());

    let state = chat.state();
    let text_width = usize::from(messages_area.width.saturating_sub(2));
    let items: Vec<ListItem> = state
        .messages()
        .iter()
        .map(|message| message_item(message, text_width))
        .collect();

    let title = format!(
        " Rokinator  質問 {}/{} ",
        state.user_turn(),
        chat.script().max_turns
    );
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .title_style(Style::default().add_modifier(Modifier::BOLD)),
    );
    frame.render_stateful_widget(list, messages_area, &mut view.list_state);

    let enabled = chat.input_enabled() && state.is_active();
    let status = if state.is_finished() {
        " ゲーム終了 (Esc で終了) "
    } else if chat.is_awaiting_response() {
        " 考え中... "
    } else if !state.is_active() {
        " 準備中... "
    } else {
        " 質問を入力 (Enter で送信) "
    };

    let (content, style) = if chat.input().is_empty() {
        (
            Line::from(Span::raw(PLACEHOLDER)),
            Style::default().fg(Color::DarkGray),
        )
    } else if enabled {
        (Line::raw(chat.input()), Style::default())
    } else {
        (
            Line::raw(chat.input()),
            Style::default().fg(Color::DarkGray),
        )
    };
    let border_style = if enabled {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let input = Paragraph::new(content).style(style).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(status),
    );
    frame.render_widget(input, input_area);

    if enabled {
        let offset = u16::try_from(chat.input().width()).unwrap_or(u16::MAX);
        let max_x = input_area.right().saturating_sub(2);
        let x = input_area.x.saturating_add(1).saturating_add(offset).min(max_x);
        frame.set_cursor_position(Position::new(x, input_area.y + 1));
    }
}

fn message_item(message: &ChatMessage, width: usize) -> ListItem<'static> {
    let (style, alignment) = match message.sender {
        Sender::Ai => (Style::default().fg(Color::Cyan), Alignment::Left),
        Sender::User => (Style::default().fg(Color::White), Alignment::Right),
    };
    let mut lines: Vec<Line<'static>> = wrap(&message.text, width)
        .into_iter()
        .map(|line| Line::styled(line, style).alignment(alignment))
        .collect();
    lines.push(Line::raw(""));
    ListItem::new(Text::from(lines))
}

/// Break `text` into lines of at most `width` terminal cells
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }
    textwrap::wrap(text, width)
        .into_iter()
        .map(Cow::into_owned)
        .collect()
}

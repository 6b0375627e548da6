//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, InputMessage};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event), // 键盘事件
        Event::Resize(_, _) => AppMessage::Noop,               // 终端窗口大小改变，自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent) -> AppMessage {
    // 重要：只处理 Press 事件，忽略 Release 和 Repeat
    // 避免 Windows 终端上按键重复问题的发生
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 全局快捷键
    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if DefaultKeymap::SUBMIT.matches(&key) {
        return AppMessage::Submit;
    }

    if DefaultKeymap::TOGGLE_DOMAIN.matches(&key) || DefaultKeymap::TOGGLE_DOMAIN_ALT.matches(&key)
    {
        return AppMessage::ToggleDomainSection;
    }

    if DefaultKeymap::TOGGLE_CONTACT.matches(&key)
        || DefaultKeymap::TOGGLE_CONTACT_ALT.matches(&key)
    {
        return AppMessage::ToggleContactSection;
    }

    handle_input_keys(key)
}

/// 处理输入框的按键
fn handle_input_keys(key: KeyEvent) -> AppMessage {
    let msg = match key.code {
        // 字符输入（允许 Shift 输入大写与符号）
        KeyCode::Char(c)
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
        {
            InputMessage::Char(c)
        }
        KeyCode::Backspace => InputMessage::Backspace,
        KeyCode::Delete => InputMessage::Delete,
        KeyCode::Left => InputMessage::CursorLeft,
        KeyCode::Right => InputMessage::CursorRight,
        KeyCode::Home => InputMessage::CursorHome,
        KeyCode::End => InputMessage::CursorEnd,
        _ => return AppMessage::Noop,
    };

    AppMessage::Input(msg)
}

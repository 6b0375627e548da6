//! 通知组件
//!
//! 在右上角自上而下堆叠，最新的在最上面。
//! 固定的成功/失败文案按当前语言显示，其余消息原样显示。

use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use whois_lookup_core::{Notification, NotificationKind, FAILURE_MESSAGE, SUCCESS_MESSAGE};

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::colors;

const TOAST_WIDTH: u16 = 44;
const TOAST_HEIGHT: u16 = 3;

/// 渲染所有通知
pub fn render(app: &App, frame: &mut Frame) {
    if app.toasts.is_empty() {
        return;
    }

    let area = frame.area();
    let c = colors();
    let texts = t();
    let width = TOAST_WIDTH.min(area.width);
    let x = area.right().saturating_sub(width);
    // 标题栏下方开始
    let mut y = area.y.saturating_add(1);

    for toast in app.toasts.iter() {
        if y.saturating_add(TOAST_HEIGHT) > area.bottom() {
            break;
        }

        let (icon, color) = match toast.kind() {
            NotificationKind::Success => ("✓", c.success),
            NotificationKind::Failure => ("✗", c.error),
        };
        let message =
            display_message(&toast.notification, texts.toast.success, texts.toast.failure);

        let toast_area = Rect::new(x, y, width, TOAST_HEIGHT);
        frame.render_widget(Clear, toast_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color));
        let paragraph = Paragraph::new(Line::styled(
            format!(" {icon} {message}"),
            Style::default().fg(color),
        ))
        .block(block);
        frame.render_widget(paragraph, toast_area);

        y = y.saturating_add(TOAST_HEIGHT);
    }
}

/// 已知文案替换为译文
fn display_message<'a>(
    notification: &'a Notification,
    success: &'a str,
    failure: &'a str,
) -> &'a str {
    match notification.message.as_str() {
        SUCCESS_MESSAGE => success,
        FAILURE_MESSAGE => failure,
        other => other,
    }
}

//! 域名输入框组件

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染输入框
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let query = app.lookup.query();

    let border_style = if app.show_required_hint {
        Style::default().fg(c.error)
    } else {
        Style::default().fg(c.border_focused)
    };

    let mut block = Block::default()
        .title(format!(" {} ", texts.form.title))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(border_style);

    // 空输入提交时，在下边框显示必填提示
    if app.show_required_hint {
        block = block.title_bottom(Line::styled(
            format!(" {} ", texts.form.required),
            Style::default().fg(c.error),
        ));
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let line = if query.is_empty() {
        Line::styled(texts.form.placeholder, Style::default().fg(Color::DarkGray))
    } else {
        Line::styled(query, Style::default().fg(c.fg))
    };
    frame.render_widget(Paragraph::new(line), inner);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    // 光标位置按显示宽度计算（中文等宽字符占两列）
    let before_cursor: String = query.chars().take(app.lookup.cursor()).collect();
    let offset = u16::try_from(before_cursor.width()).unwrap_or(u16::MAX);
    let x = inner
        .x
        .saturating_add(offset)
        .min(inner.right().saturating_sub(1));
    frame.set_cursor_position((x, inner.y));
}

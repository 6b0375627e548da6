//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints();

    // 构建状态栏内容
    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 查询进行中
    if app.is_loading() {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(
            t().status_bar.looking_up,
            Style::default().fg(colors().warning),
        ));
    }

    let content = Line::from(spans);
    let paragraph = Paragraph::new(content).style(Styles::statusbar());

    frame.render_widget(paragraph, area);
}

/// 生成快捷键提示
fn get_hints() -> Vec<(&'static str, &'static str)> {
    let hints = &t().hints;
    vec![
        (hints.keys.enter, hints.actions.lookup),
        (hints.keys.toggle_domain, hints.actions.toggle_domain),
        (hints.keys.toggle_contact, hints.actions.toggle_contact),
        (hints.keys.esc, hints.actions.quit),
    ]
}

//! 主布局渲染

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::App;

use super::components;
use super::theme::colors;

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // 四层布局：标题栏 + 输入框 + 结果区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Length(3), // 输入框
            Constraint::Min(1),    // 结果区
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    let title_area = main_layout[0];
    let input_area = main_layout[1];
    let record_area = main_layout[2];
    let status_area = main_layout[3];

    // 渲染标题栏
    render_title_bar(frame, title_area);

    // 渲染输入框
    components::input::render(app, frame, input_area);

    // 渲染结果表格
    components::record::render(app, frame, record_area);

    // 渲染状态栏
    components::statusbar::render(app, frame, status_area);

    // 渲染通知（在最上层）
    components::toast::render(app, frame);
}

/// 渲染标题栏
fn render_title_bar(frame: &mut Frame, area: Rect) {
    let c = colors();
    let title = Paragraph::new(format!(
        " {} v{}",
        t().common.app_name,
        env!("CARGO_PKG_VERSION")
    ))
    .style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(title, area);
}

//! 结果表格组件
//!
//! 两张表纵向排列。表格按“列名 | 值”逐行展开，列顺序与网页表格一致。

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};
use unicode_width::UnicodeWidthStr;
use whois_lookup_core::{render as render_record, ContactRow, DomainRow, RecordView};

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 一个分区的显示内容
struct Section<'a> {
    title: &'a str,
    toggle_key: &'a str,
    headers: &'a [&'a str],
    /// `None` 表示已隐藏
    cells: Option<&'a [&'a str]>,
    placeholder: &'a str,
}

impl Section<'_> {
    fn height(&self) -> u16 {
        let rows = self.cells.map_or(1, |cells| cells.len());
        u16::try_from(rows).unwrap_or(u16::MAX).saturating_add(2)
    }
}

/// 渲染结果区域
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    match render_record(app.lookup.record(), app.visibility) {
        RecordView::Empty => render_empty(frame, area),
        RecordView::Record { domain, contact } => {
            let texts = t();
            let domain_cells = domain.table().map(DomainRow::cells);
            let contact_cells = contact.table().map(ContactRow::cells);

            let domain_section = Section {
                title: texts.record.domain_title,
                toggle_key: texts.hints.keys.toggle_domain,
                headers: &texts.record.domain_headers,
                cells: domain_cells.as_ref().map(|cells| cells.as_slice()),
                placeholder: texts.record.domain_hidden,
            };
            let contact_section = Section {
                title: texts.record.contact_title,
                toggle_key: texts.hints.keys.toggle_contact,
                headers: &texts.record.contact_headers,
                cells: contact_cells.as_ref().map(|cells| cells.as_slice()),
                placeholder: texts.record.contact_hidden,
            };

            let chunks = Layout::vertical([
                Constraint::Length(domain_section.height()),
                Constraint::Length(contact_section.height()),
                Constraint::Min(0),
            ])
            .split(area);

            render_section(frame, chunks[0], &domain_section);
            render_section(frame, chunks[1], &contact_section);
        }
    }
}

/// 渲染空状态
fn render_empty(frame: &mut Frame, area: Rect) {
    let c = colors();
    let content = vec![
        Line::from(""),
        Line::styled(format!("  {}", t().record.empty), Style::default().fg(c.muted)),
    ];

    frame.render_widget(Paragraph::new(content), area);
}

/// 渲染单个分区：表格或隐藏占位
fn render_section(frame: &mut Frame, area: Rect, section: &Section) {
    let c = colors();

    let block = Block::default()
        .title(format!(" {} ", section.title))
        .title_style(Styles::title())
        .title_top(
            Line::styled(format!(" {} ", section.toggle_key), Styles::hint_key()).right_aligned(),
        )
        .borders(Borders::ALL);

    let Some(cells) = section.cells else {
        let block = block.border_style(Style::default().fg(c.border));
        let placeholder = Paragraph::new(Line::styled(
            format!(" {}", section.placeholder),
            Style::default().fg(c.muted),
        ))
        .block(block);
        frame.render_widget(placeholder, area);
        return;
    };

    let block = block.border_style(Style::default().fg(c.border_focused));
    let label_width = section
        .headers
        .iter()
        .map(|header| header.width())
        .max()
        .unwrap_or(0);

    let rows = section.headers.iter().zip(cells).map(|(header, value)| {
        Row::new(vec![
            Cell::from(*header).style(Styles::table_header()),
            Cell::from(*value).style(Style::default().fg(c.fg)),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(u16::try_from(label_width).unwrap_or(u16::MAX)),
            Constraint::Min(1),
        ],
    )
    .column_spacing(2)
    .block(block);

    frame.render_widget(table, area);
}

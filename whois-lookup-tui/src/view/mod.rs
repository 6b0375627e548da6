//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! View 层只读取 Model，不做任何修改。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;             // 主布局（标题栏 / 输入框 / 结果区 / 状态栏）
//!         pub mod theme;          // 深色 / 浅色主题
//!         mod components;         // 组件
//!             input.rs            // 域名输入框（含占位符、光标、必填提示）
//!             record.rs           // 域名信息表与联系人信息表，或各自的隐藏占位
//!             toast.rs            // 右上角通知
//!             statusbar.rs        // 快捷键提示与“查询中”指示
//!
//!
//!     结果区内容由 whois-lookup-core 的 render() 决定：
//!
//!         render(app.lookup.record(), app.visibility)
//!             → RecordView::Empty                     只显示输入框
//!             → RecordView::Record { domain, contact }
//!                 · SectionView::Table(row)           绘制表格
//!                 · SectionView::Hidden               绘制 "... Table Hidden" 占位
//!
//!     View 层只负责把这些字符串摆到终端上。
//!

mod components;
mod layout;
pub mod theme;

pub use layout::render;

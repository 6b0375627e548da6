//! WHOIS lookup client
//!
//! 提供单次 WHOIS 查询的完整流程：向查询端点发起请求、解析返回的记录、
//! 管理输入与当前记录，并把记录渲染成两张可折叠的表格。
//! 不依赖任何 UI 框架，前端只需实现 [`Notifier`] 并绘制 [`RecordView`]。

mod config;
mod controller;
mod error;
pub mod format;
mod notifier;
pub mod render;
mod source;
mod types;

pub use config::{LookupConfig, DEFAULT_ENDPOINT, DEFAULT_QUERY_PARAM};
pub use controller::LookupController;
pub use error::{LookupError, LookupResult};
pub use notifier::{
    Notification, NotificationKind, Notifier, RecordingNotifier, FAILURE_MESSAGE, SUCCESS_MESSAGE,
};
pub use render::{render, ContactRow, DomainRow, RecordView, SectionView, VisibilityFlags};
pub use source::{parse_lookup_body, HttpWhoisClient, WhoisSource};
pub use types::{Contact, NameServers, RegistryData, WhoisEnvelope, WhoisRecord};

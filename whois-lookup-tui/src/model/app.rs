//! 应用主状态结构

use whois_lookup_core::{LookupController, VisibilityFlags};

use super::ToastState;

/// 应用主状态
#[derive(Debug, Default)]
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 查询输入与最近一次成功的记录
    pub lookup: LookupController,

    /// 两张结果表的显示 / 隐藏
    pub visibility: VisibilityFlags,

    /// 当前显示的通知
    pub toasts: ToastState,

    /// 尚未返回的查询数
    pub pending: usize,

    /// 空输入提交时显示必填提示
    pub show_required_hint: bool,
}

impl App {
    /// 创建新的应用实例
    pub fn new() -> Self {
        Self::default()
    }

    /// 是否有查询正在进行
    pub fn is_loading(&self) -> bool {
        self.pending > 0
    }
}

//! 应用主消息枚举

use crate::backend::LookupOutcome;

use super::InputMessage;

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 输入框编辑
    Input(InputMessage),

    /// 提交查询
    Submit,

    /// 查询任务完成
    LookupFinished(LookupOutcome),

    /// 显示 / 隐藏域名信息表
    ToggleDomainSection,

    /// 显示 / 隐藏联系人信息表
    ToggleContactSection,

    /// 定时触发（清理过期通知）
    Tick,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}

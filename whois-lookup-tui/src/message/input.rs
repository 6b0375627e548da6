//! 输入框子消息

/// 输入框编辑消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMessage {
    /// 在光标处插入字符
    Char(char),
    /// 删除光标前的字符
    Backspace,
    /// 删除光标处的字符
    Delete,
    /// 光标左移
    CursorLeft,
    /// 光标右移
    CursorRight,
    /// 光标移到行首
    CursorHome,
    /// 光标移到行尾
    CursorEnd,
}

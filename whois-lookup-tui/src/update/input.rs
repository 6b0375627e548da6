//! 输入框更新

use crate::message::InputMessage;
use crate::model::App;

/// 处理输入框编辑消息
pub fn update(app: &mut App, msg: InputMessage) {
    let lookup = &mut app.lookup;
    match msg {
        InputMessage::Char(c) => lookup.push_char(c),
        InputMessage::Backspace => lookup.pop_char(),
        InputMessage::Delete => lookup.delete_char(),
        InputMessage::CursorLeft => lookup.move_cursor_left(),
        InputMessage::CursorRight => lookup.move_cursor_right(),
        InputMessage::CursorHome => lookup.move_cursor_home(),
        InputMessage::CursorEnd => lookup.move_cursor_end(),
    }

    // 一旦开始编辑，必填提示即消失
    app.show_required_hint = false;
}

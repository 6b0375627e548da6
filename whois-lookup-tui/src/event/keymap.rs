//! 快捷键配置

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn alt(code: KeyCode) -> Self {
        Self::new(KeyModifiers::ALT, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::key(KeyCode::Esc);
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));

    // 表单
    pub const SUBMIT: KeyBinding = KeyBinding::key(KeyCode::Enter);

    // 表格显示切换
    pub const TOGGLE_DOMAIN: KeyBinding = KeyBinding::key(KeyCode::F(2));
    pub const TOGGLE_DOMAIN_ALT: KeyBinding = KeyBinding::alt(KeyCode::Char('d'));
    pub const TOGGLE_CONTACT: KeyBinding = KeyBinding::key(KeyCode::F(3));
    pub const TOGGLE_CONTACT_ALT: KeyBinding = KeyBinding::alt(KeyCode::Char('c'));
}

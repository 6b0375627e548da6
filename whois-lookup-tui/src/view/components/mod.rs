//! UI 组件

pub mod input;
pub mod record;
pub mod statusbar;
pub mod toast;

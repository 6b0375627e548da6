//!
//! src/util/mod.rs
//! Util 层：终端工具
//!
//!
//! 有模块结构：
//!     src/util/mod.rs
//!         mod terminal;       // 终端初始化和恢复
//!
//!         pub use terminal::{init_terminal, restore_terminal, Term};
//!
//!
//!     初始化终端（init_terminal）：
//!         1. enable_raw_mode()            关闭行缓冲与回显，按键立即生效
//!         2. EnterAlternateScreen         切换到备用屏幕，退出后恢复原有内容
//!         3. Terminal::new(backend)       创建终端对象
//!
//!     恢复终端（restore_terminal）：
//!         1. disable_raw_mode()
//!         2. LeaveAlternateScreen
//!         3. show_cursor()
//!
//!         注意：无论程序是正常退出还是发生错误，都必须调用此函数！
//!               否则终端会保持在原始模式，用户输入不会正常显示。
//!
//!     另外，init_terminal 会安装 panic hook：
//!         panic 时先恢复终端，再交给默认 hook 打印信息。
//!

mod terminal;

pub use terminal::{init_terminal, restore_terminal, Term};

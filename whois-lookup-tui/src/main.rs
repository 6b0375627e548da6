//! WHOIS Lookup TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 配置与查询派发 (`backend/`)
//!
//!
//! main.rs
//! WHOIS Lookup TUI 的程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     init_logger()           // env_logger，默认关闭（RUST_LOG 可开启）
//!     load_config()           // 读取可选配置文件，设置主题与语言
//!     Runtime::new()          // 创建 tokio 运行时，查询任务在其上运行
//!     init_terminal()         // 初始化终端
//!     app::run()              // 运行 app.rs 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!
//! }
//!
//!
//! 日志默认关闭，因为终端处于备用屏幕时写 stderr 会弄乱界面。
//! 调试时可以：
//!     RUST_LOG=debug whois-lookup-tui 2> whois.log

mod app;
mod backend;
mod event;
mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::sync::Arc;

use anyhow::Result;
use whois_lookup_core::HttpWhoisClient;

use backend::{AppConfig, ConfigService, LocalConfigService, LookupService};
use util::{init_terminal, restore_terminal};

fn main() -> Result<(), anyhow::Error> {
    // 1. 初始化日志
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();

    // 2. 加载配置，设置主题与语言
    let config = load_config();
    view::theme::set_theme(config.theme);
    i18n::set_language(config.language());

    // 3. 创建运行时与查询服务
    let runtime = tokio::runtime::Runtime::new()?;
    let client = HttpWhoisClient::new(config.lookup)?;
    let mut lookups = LookupService::new(runtime.handle().clone(), Arc::new(client));

    // 4. 初始化终端
    let mut terminal = init_terminal()?;

    // 5. 创建应用实例并运行主循环
    let mut app = model::App::new();
    let result = app::run(&mut terminal, &mut app, &mut lookups);

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    // 7. 返回结果
    result
}

/// 读取配置；读取失败时使用默认配置
fn load_config() -> AppConfig {
    let service = LocalConfigService::new();
    match service.load() {
        Ok(config) => {
            log::info!("已加载配置: {}", service.path().display());
            config
        }
        Err(e) => {
            log::warn!("读取配置失败，使用默认配置: {e:#}");
            AppConfig::default()
        }
    }
}

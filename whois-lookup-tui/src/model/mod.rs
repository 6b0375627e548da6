//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                               │
//！│                                                                            │
//！│  ┌────────────────────────────── UI 层 ───────────────────────────────┐   │
//！│  │                                                                     │   │
//！│  │   ┌─────────┐          ┌───────────┐          ┌──────────┐         │   │
//！│  │   │  Event  │ ───────▶ │  Message  │ ───────▶ │  Update  │         │   │
//！│  │   │   层    │   翻译    │    层     │   消费    │    层    │         │   │
//！│  │   └─────────┘          │           │          └────┬─────┘         │   │
//！│  │        ▲               │ AppMessage│               │ 修改          │   │
//！│  │        │               │ InputMsg  │               ▼               │   │
//！│  │   ┌─────────┐          │           │          ┌──────────┐         │   │
//！│  │   │  View   │          │           │   ┌───── │  Model   │         │   │
//！│  │   │   层    │          └───────────┘   │      │    层    │         │   │
//！│  │   └────┬────┘ ◀──────── 读取 ──────────┘      └────┬─────┘         │   │
//！│  │        │                                           │               │   │
//！│  └────────│───────────────────────────────────────────│───────────────┘   │
//！│           │                                           │ 派生查询任务      │
//！│           ▼                                           ▼                   │
//！│      ┌─────────┐                                ┌──────────┐              │
//！│      │  终端   │                                │ Backend  │              │
//！│      │ (Util)  │                                │    层    │              │
//！│      └─────────┘                                └────┬─────┘              │
//！│                                                      │                    │
//！│                                                      ▼                    │
//！│                                           ┌───────────────────┐           │
//！│                                           │ whois-lookup-core │           │
//！│                                           └───────────────────┘           │
//！└─────────────────────────────────────────────────────────────────────────────┘


//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 这一层只包含纯数据结构，不包含任何业务逻辑。
//! 所有状态变更都通过 Update 层来触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod toast;          // 通知栈
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/model/app.rs 中定义：
//!
//!         pub struct App {
//!             pub should_quit: bool,                  // 退出标志
//!             pub lookup: LookupController,           // 输入文本、光标、最近一次成功的记录
//!             pub visibility: VisibilityFlags,        // 两张表各自是否隐藏
//!             pub toasts: ToastState,                 // 正在显示的通知
//!             pub pending: usize,                     // 尚未返回的查询数
//!             pub show_required_hint: bool,           // 空输入提交时的必填提示
//!         }
//!
//!     LookupController 与 VisibilityFlags 来自 whois-lookup-core，
//!     TUI 只负责把按键与通道结果喂给它们。
//!
//!     使用：
//!         - 在 main.rs 中创建：let mut app = model::App::new();
//!         - 在 update/mod.rs 中修改：app.visibility.toggle_registry();
//!         - 在 view/mod.rs 中读取：pub fn render(app: &App, ...)
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、通知栈（ToastState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/model/toast.rs 中定义：
//!
//!         ToastState 实现了 whois-lookup-core 的 Notifier trait，
//!         因此可以直接作为 LookupController::complete 的通知接收方：
//!
//!             app.lookup.complete(outcome, &mut app.toasts);
//!
//!         每条通知记录显示时刻：
//!             - 成功：显示 2 秒
//!             - 失败：显示 4 秒
//!         新通知放在最前，主循环每轮发送 AppMessage::Tick 清理过期通知。
//!

mod app;
mod toast;

pub use app::App;
pub use toast::ToastState;

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
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event → Update 之间的桥梁
//! 所有的用户操作和状态变更都通过 Message 来表达。
//! 相当于将形形色色的 Events 翻译成 Update 能够看懂的 Messages
//! Update 层根据 Message 来更新 Model。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;
//!         mod input;
//!
//!         pub use app::AppMessage;
//!         pub use input::InputMessage;
//!
//!
//!     在 app::AppMessage 中进行主消息的枚举：
//!         #[derive(Debug, Clone)]
//!
//!         pub enum AppMessage {
//!             Quit,                               // 退出应用
//!             Input(InputMessage),                // 输入框编辑子消息
//!             Submit,                             // 提交查询
//!             LookupFinished(LookupOutcome),      // 查询任务完成（来自 Backend 通道，而非按键）
//!             ToggleDomainSection,                // 切换域名信息表
//!             ToggleContactSection,               // 切换联系人信息表
//!             Tick,                               // 每轮主循环一次，清理过期通知
//!             Noop,                               // 无操作，用于代替 Option::None
//!         }
//!
//!
//!     在 src/event/handler.rs 中，有：
//!         pub fn handle_event(event: Event) -> AppMessage {
//!             ...                              ↑↑↑↑↑↑↑↑↑↑
//!             ...                              返回一个 AppMessage 类型
//!         }
//!
//!     而 LookupFinished 与 Tick 由主循环（src/app.rs）直接构造。
//!
//!
//! 最后，Message 将被传入 Update 层进行处理。
//!     → 去往 src/update/mod.rs 吧
//!

mod app;
mod input;

pub use app::AppMessage;
pub use input::InputMessage;

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
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod input;              // 输入框子消息处理
//!
//!         pub fn update(app: &mut App, msg: AppMessage, lookups: &LookupService) {...}
//!
//!
//!     提交与完成：
//!
//!         AppMessage::Submit
//!             → app.lookup.begin_submit()
//!                 · Err(EmptyInput)   只显示必填提示，不发请求、不发通知
//!                 · Ok(domain)        pending += 1，lookups.dispatch(domain)
//!
//!         AppMessage::LookupFinished(outcome)
//!             → pending -= 1
//!             → app.lookup.complete(outcome, &mut app.toasts)
//!                 · 成功：替换记录，一条成功通知
//!                 · 失败：保留原记录，一条失败通知
//!
//!     切换表格只翻转 VisibilityFlags，不触发任何请求。
//!
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//! 下一轮循环时，View 层会读取更新后的 Model 来重新渲染。
//!

mod input;

use std::time::Instant;

use crate::backend::LookupService;
use crate::message::AppMessage;
use crate::model::App;

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage, lookups: &LookupService) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::Input(input_msg) => {
            input::update(app, input_msg);
        }

        AppMessage::Submit => match app.lookup.begin_submit() {
            Ok(domain) => {
                app.show_required_hint = false;
                app.pending += 1;
                lookups.dispatch(domain);
            }
            Err(e) => {
                log::debug!("[update] 提交被拦截: {e}");
                app.show_required_hint = e.is_input_error();
            }
        },

        AppMessage::LookupFinished(outcome) => {
            app.pending = app.pending.saturating_sub(1);
            app.lookup.complete(outcome, &mut app.toasts);
        }

        AppMessage::ToggleDomainSection => {
            app.visibility.toggle_registry();
        }

        AppMessage::ToggleContactSection => {
            app.visibility.toggle_contact();
        }

        AppMessage::Tick => {
            app.toasts.prune(Instant::now());
        }

        AppMessage::Noop => {}
    }
}

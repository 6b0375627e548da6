//!
//! app.rs
//! 应用主循环
//!
//!
//!
//! 在应用启动时，创建终端并初始化为以下状态：
//!
//! App {
//!
//!     should_quit: bool = false,                      // 决定应用是否应该退出
//!     lookup: LookupController::default(),            // 空输入，尚无记录
//!     visibility: VisibilityFlags::default(),         // 两张表均显示
//!     toasts: ToastState::default(),                  // 无通知
//!     pending: 0,                                     // 无进行中的查询
//!     show_required_hint: false,
//!
//! }
//!
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）
//! 应用的主循环中有：
//! loop {
//!
//!     while let Some(outcome) = lookups.try_recv() {  // 取出已完成的查询结果
//!         update::update(&mut app, LookupFinished(outcome), lookups)
//!     }
//!     update::update(&mut app, Tick, lookups)         // 清理过期通知
//!     terminal.draw(|f| view::render(&app, f))        // 渲染 UI
//!     if app.should_quit { break }                    // 检查 APP 是否应该退出
//!     if let Some(event) = poll_event() {             // 轮询获取输入，在此等待 100ms
//!         let msg = handle_event(event);                  // 接收原始事件并分发消息
//!         update::update(&mut app, msg, lookups)          // 更新终端状态
//!     }
//! }

use std::time::Duration;

use anyhow::Result;

use crate::backend::LookupService;
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 事件轮询间隔
const TICK_RATE: Duration = Duration::from_millis(100);

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App, lookups: &mut LookupService) -> Result<()> {
    loop {
        // 1. 应用已完成的查询结果
        while let Some(outcome) = lookups.try_recv() {
            update::update(app, AppMessage::LookupFinished(outcome), lookups);
        }

        // 2. 清理过期通知
        update::update(app, AppMessage::Tick, lookups);

        // 3. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 4. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 5. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(TICK_RATE)? {
            // 6. 处理事件，获取消息
            let msg = event::handle_event(event);

            // 7. 更新状态
            update::update(app, msg, lookups);
        }
    }

    Ok(())
}

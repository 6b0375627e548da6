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
//!
//! src/backend/mod.rs
//! Backend 层：业务服务
//!
//! Backend 层与 UI 完全解耦，负责配置加载与查询派发。
//! 真正的 WHOIS 请求由 whois-lookup-core 完成。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod config_service;     // 配置服务（只读 JSON 文件）
//!         mod lookup_service;     // 查询服务（tokio 任务 + 通道）
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、配置服务（LocalConfigService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/backend/config_service.rs 中定义：
//!
//!         存储位置：<config dir>/whois-lookup/config.json
//!
//!         {
//!             "theme": "dark",                                // 或 "light"
//!             "language": "en-US",                            // 或 "zh-CN"
//!             "endpoint": "http://localhost:5001/api/whois",
//!             "queryParam": "domainName",
//!             "timeoutSecs": 10                               // 可省略，省略时不设超时
//!         }
//!
//!         所有字段均可省略。文件不存在时使用默认配置；
//!         格式错误时记录 warn 日志并使用默认配置。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、查询服务（LookupService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/backend/lookup_service.rs 中定义：
//!
//!         持有 tokio 运行时句柄、Arc<dyn WhoisSource> 以及一对无界通道。
//!
//!         主要方法：
//!             - dispatch(domain)      派生一个查询任务，立即返回
//!             - try_recv()            取出一个已完成的结果（不阻塞）
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、数据流
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     用户按下 Enter
//!         ↓
//!     Update 层处理 AppMessage::Submit，调用 LookupService::dispatch
//!         ↓
//!     tokio 任务调用 HttpWhoisClient::lookup（GET {endpoint}?domainName=...）
//!         ↓
//!     结果写入通道
//!         ↓
//!     主循环 try_recv 取出结果，作为 AppMessage::LookupFinished 交给 Update 层
//!         ↓
//!     LookupController::complete 更新记录并发出一条通知
//!         ↓
//!     View 层重新渲染
//!

mod config_service;
mod lookup_service;

pub use config_service::{AppConfig, ConfigService, LocalConfigService};
pub use lookup_service::{LookupOutcome, LookupService};

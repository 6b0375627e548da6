//! 查询服务
//!
//! 每次提交在 tokio 运行时上派生一个查询任务，结果经无界通道送回，
//! 由主循环在下一轮取出。不取消、不去重：后完成的结果覆盖先完成的。

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use whois_lookup_core::{LookupResult, WhoisRecord, WhoisSource};

/// 一次查询的结果
pub type LookupOutcome = LookupResult<WhoisRecord>;

/// 查询服务
pub struct LookupService {
    runtime: Handle,
    source: Arc<dyn WhoisSource>,
    tx: UnboundedSender<LookupOutcome>,
    rx: UnboundedReceiver<LookupOutcome>,
}

impl LookupService {
    pub fn new(runtime: Handle, source: Arc<dyn WhoisSource>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            runtime,
            source,
            tx,
            rx,
        }
    }

    /// 派生一次查询
    pub fn dispatch(&self, domain: String) {
        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();

        self.runtime.spawn(async move {
            log::debug!("[lookup] 开始查询: {domain}");
            let outcome = source.lookup(&domain).await;
            // 接收端随服务一起释放，此时丢弃结果即可
            let _ = tx.send(outcome);
        });
    }

    /// 取出一个已完成的结果（不阻塞）
    pub fn try_recv(&mut self) -> Option<LookupOutcome> {
        self.rx.try_recv().ok()
    }

    /// 等待下一个结果
    #[cfg(test)]
    pub async fn recv(&mut self) -> Option<LookupOutcome> {
        self.rx.recv().await
    }
}

//! 診断レポート
//!
//! 取得失敗などの「呼び出し側には見せないが記録はしたい」エラーの送り先。
//! 外部のクラッシュレポートSDKはこのトレイトを実装して差し込む。

use parking_lot::Mutex;
use std::error::Error;

pub trait DiagnosticsReporter: Send + Sync {
    /// `context` はどこで起きたか（例: "transformation_client"）
    fn notify_error(&self, context: &str, error: &(dyn Error + 'static));
}

/// tracing にエラーログとして出すだけのレポーター
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl DiagnosticsReporter for TracingReporter {
    fn notify_error(&self, context: &str, error: &(dyn Error + 'static)) {
        tracing::error!(context, "{}", format_error_chain(error));
    }
}

/// レポートをメモリに溜める（組み込み・テスト用）
#[derive(Debug, Default)]
pub struct MemoryReporter {
    reports: Mutex<Vec<Report>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub context: String,
    pub message: String,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> Vec<Report> {
        self.reports.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.reports.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.lock().is_empty()
    }
}

impl DiagnosticsReporter for MemoryReporter {
    fn notify_error(&self, context: &str, error: &(dyn Error + 'static)) {
        self.reports.lock().push(Report {
            context: context.to_string(),
            message: format_error_chain(error),
        });
    }
}

/// "outer: inner: root" 形式
pub fn format_error_chain(error: &(dyn Error + 'static)) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let cause_message = cause.to_string();
        if !message.contains(&cause_message) {
            message.push_str(": ");
            message.push_str(&cause_message);
        }
        source = cause.source();
    }
    message
}

use client::{Notice, NoticeKind, Notifier};

/// Terminal stand-in for the mobile toast: one `[ok]`/`[error]` line on
/// stderr per gateway call, so command output on stdout stays clean.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&self, notice: Notice) {
        let tag = match notice.kind {
            NoticeKind::Success => "ok",
            NoticeKind::Error => "error",
        };
        eprintln!("[{tag}] {}: {}", notice.title, notice.message);
    }
}

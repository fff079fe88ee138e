//! In-memory tracing capture for asserting on emitted log events

use std::io::Write;
use std::sync::{Arc, Mutex};
use tracing::subscriber::DefaultGuard;

#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Collects formatted events from the current thread while the guard is alive.
///
/// `#[tokio::test]` runs on a current-thread runtime, so events from awaited
/// futures land on the same thread as the guard.
pub struct LogCapture {
    buf: SharedBuf,
    _guard: DefaultGuard,
}

impl LogCapture {
    pub fn start() -> Self {
        let buf = SharedBuf::default();
        let writer = buf.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .without_time()
            .with_writer(move || writer.clone())
            .finish();
        let guard = tracing::subscriber::set_default(subscriber);

        Self { buf, _guard: guard }
    }

    pub fn lines(&self) -> Vec<String> {
        let bytes = self.buf.0.lock().unwrap().clone();
        String::from_utf8_lossy(&bytes)
            .lines()
            .map(String::from)
            .collect()
    }

    /// Lines at `level` ("ERROR", "WARN", ...) whose text contains `needle`
    pub fn matching(&self, level: &str, needle: &str) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter(|line| line.trim_start().starts_with(level) && line.contains(needle))
            .collect()
    }

    pub fn count_at(&self, level: &str) -> usize {
        self.lines()
            .iter()
            .filter(|line| line.trim_start().starts_with(level))
            .count()
    }
}

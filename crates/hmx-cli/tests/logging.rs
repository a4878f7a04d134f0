//! Logging initialization against a captured writer.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

use hmx_cli::logging::{LogConfig, LogFormat, init_logging_with_writer};

#[derive(Clone, Default)]
struct CaptureWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

struct CaptureGuard {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl Write for CaptureGuard {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer
            .lock()
            .map_err(|_| io::Error::other("capture lock poisoned"))?
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CaptureWriter {
    type Writer = CaptureGuard;

    fn make_writer(&'a self) -> Self::Writer {
        CaptureGuard {
            buffer: Arc::clone(&self.buffer),
        }
    }
}

#[test]
fn compact_logging_reaches_the_writer() {
    let writer = CaptureWriter::default();
    let config = LogConfig {
        level: Level::INFO,
        format: LogFormat::Compact,
        with_ansi: false,
        ..LogConfig::default()
    };
    init_logging_with_writer(&config, writer.clone());

    tracing::info!("table view derived");
    tracing::debug!("should be filtered out");

    let output = String::from_utf8(writer.buffer.lock().unwrap().clone()).unwrap();
    assert!(output.contains("table view derived"));
    assert!(!output.contains("should be filtered out"));
}

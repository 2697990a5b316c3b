/// Tracing setup for hosts
///
/// Native hosts log to stdout; browser hosts log to the devtools console.
/// Both honour `RUST_LOG`-style filters and default to `info`.
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install the global subscriber
///
/// Safe to call more than once; a host that already installed its own
/// subscriber keeps it.
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub fn init() {
    let console_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(false);

    let _ = tracing_subscriber::registry()
        .with(filter())
        .with(console_layer)
        .try_init();
}

/// Install the global subscriber
///
/// Safe to call more than once; a host that already installed its own
/// subscriber keeps it.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub fn init() {
    // No clock on wasm32-unknown-unknown, so no timestamps
    let console_layer = fmt::layer()
        .with_writer(console::ConsoleWriter::default)
        .with_ansi(false)
        .with_target(false)
        .without_time();

    let _ = tracing_subscriber::registry()
        .with(filter())
        .with(console_layer)
        .try_init();
}

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod console {
    use std::io;

    /// Buffers one formatted event and hands it to `console.log` on drop
    #[derive(Default)]
    pub struct ConsoleWriter {
        buf: Vec<u8>,
    }

    impl io::Write for ConsoleWriter {
        fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
            self.buf.extend_from_slice(bytes);
            Ok(bytes.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Drop for ConsoleWriter {
        fn drop(&mut self) {
            let line = String::from_utf8_lossy(&self.buf);
            let line = line.trim_end();
            if !line.is_empty() {
                web_sys::console::log_1(&line.into());
            }
        }
    }
}

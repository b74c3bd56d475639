//! Tests for tracing subscriber setup

#[cfg(test)]
mod tests {
    use invnorm::io::configuration::{DEFAULT_LOG_FILTER, QUIET_LOG_FILTER};
    use invnorm::io::logging::{DiagnosticWriter, default_filter, init, subscriber};
    use invnorm::io::progress::SamplingProgress;
    use invnorm::sampling::harness::run;
    use invnorm::sampling::sampler::ReplaySampler;
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::EnvFilter;

    #[derive(Clone, Default)]
    struct CapturedOutput(Arc<Mutex<Vec<u8>>>);

    impl CapturedOutput {
        fn text(&self) -> String {
            let Ok(bytes) = self.0.lock() else {
                unreachable!("no writer panics while holding the buffer");
            };
            String::from_utf8_lossy(&bytes).into_owned()
        }
    }

    impl Write for CapturedOutput {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            let Ok(mut bytes) = self.0.lock() else {
                return Err(io::Error::other("capture buffer poisoned"));
            };
            bytes.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture(filter: &str, body: impl FnOnce()) -> String {
        let output = CapturedOutput::default();
        let writer = output.clone();
        tracing::subscriber::with_default(
            subscriber(EnvFilter::new(filter), move || writer.clone()),
            body,
        );
        output.text()
    }

    // Tests quiet mode hides informational diagnostics
    // Verified by ignoring the quiet flag
    #[test]
    fn test_default_filter() {
        assert_eq!(default_filter(false), DEFAULT_LOG_FILTER);
        assert_eq!(default_filter(true), QUIET_LOG_FILTER);
    }

    // Tests discard diagnostics are plain text when written to a non-terminal
    // Verified by enabling ANSI styling on the formatter
    #[test]
    fn test_diagnostics_are_plain_text() {
        let output = capture(DEFAULT_LOG_FILTER, || {
            let sampler = ReplaySampler::new(vec![-0.1, 0.0, 0.5, 1.0, 1e-300, 2.0, f64::NAN]);
            assert!(run(sampler, 7, 16).is_ok());
        });

        assert!(!output.contains('\x1b'), "styled output: {output:?}");
        assert_eq!(output.lines().count(), 6);
        assert!(
            output
                .lines()
                .any(|line| line.starts_with("Hit outside of sample size: -29 quantile=-37."))
        );
        assert!(
            output
                .lines()
                .all(|line| line.starts_with("Hit outside of sample size: "))
        );
    }

    // Tests the quiet filter drops discard diagnostics
    // Verified by installing the default filter in quiet mode
    #[test]
    fn test_quiet_filter_hides_diagnostics() {
        let output = capture(QUIET_LOG_FILTER, || {
            assert!(run(ReplaySampler::new(vec![-0.1]), 3, 16).is_ok());
        });

        assert!(output.is_empty(), "unexpected output: {output:?}");
    }

    // Tests the diagnostic writer reaches stdout with a hidden bar attached
    // Verified by returning an error while the bar is suspended
    #[test]
    fn test_diagnostic_writer_writes_through() {
        let progress = SamplingProgress::hidden(10);
        let mut writer = DiagnosticWriter::new(progress.clone());

        assert!(writer.write_all(b"").is_ok());
        assert!(writer.flush().is_ok());
        assert_eq!(progress.position(), 0);
    }

    // Tests the global subscriber is installed at most once
    // Verified by panicking on a second installation
    #[test]
    fn test_init_is_idempotent() {
        let progress = SamplingProgress::hidden(0);
        let _ = init(true, &progress);
        assert!(!init(false, &progress));

        tracing::info!("Hit outside of sample size: 17");
    }
}

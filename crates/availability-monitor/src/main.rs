//! Availability monitor binary

use availability_monitor::{AvailabilityMonitor, Cli, LogFormat, shutdown};
use clap::Parser;
use std::io::Write;
use std::process::ExitCode;
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Usage errors exit 1; --help and --version exit 0.
            e.print().ok();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match cli.log_format {
        LogFormat::Text => common::logging::init(),
        LogFormat::Json => common::logging::init_json(),
    }

    match run(cli).await {
        Ok(_) => {
            stop_notice(std::io::stdout());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Tell the operator the loop ended. A closed stdout is not worth failing over.
fn stop_notice(mut out: impl Write) {
    writeln!(out, "\nMonitoring stopped by user.").ok();
}

async fn run(cli: Cli) -> common::Result<u64> {
    let monitor = AvailabilityMonitor::from_config_file(&cli.config, cli.report_format.into())?;
    tracing::info!("Availability monitor starting");

    let cancel = CancellationToken::new();
    tokio::spawn(shutdown::cancel_on_signal(cancel.clone()));

    monitor.run(std::io::stdout(), cancel).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    struct ClosedStdout;

    impl Write for ClosedStdout {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdout closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_stop_notice() {
        let mut out = Vec::new();
        stop_notice(&mut out);
        assert_eq!(out, b"\nMonitoring stopped by user.\n");
    }

    #[test]
    fn test_stop_notice_tolerates_closed_stdout() {
        stop_notice(ClosedStdout);
    }
}

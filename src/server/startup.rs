use std::net::{Ipv4Addr, SocketAddr};

use tokio::net::TcpListener;
use tracing_subscriber::{fmt::MakeWriter, util::SubscriberInitExt, EnvFilter};

use crate::server::{
    config::ConfigSource,
    error::{config::ConfigError, AppError},
    router,
};

const LOG_FILTER_VAR: &str = "RUST_LOG";
const DEFAULT_LOG_FILTER: &str = "info";

/// Installs the global tracing subscriber, writing to stderr.
///
/// `source` must already include values loaded from `.env`.
pub fn init_tracing(source: &impl ConfigSource) {
    log_subscriber(log_filter(source), std::io::stderr).init();
}

/// Reads the log filter from `RUST_LOG`, defaulting to `info` when unset or
/// unparsable.
pub fn log_filter(source: &impl ConfigSource) -> EnvFilter {
    source
        .get(LOG_FILTER_VAR)
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn log_subscriber<W>(filter: EnvFilter, writer: W) -> impl tracing::Subscriber + Send + Sync
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .finish()
}

/// Logs a configuration failure before the process exits.
///
/// For missing values every required variable is listed with its status so the
/// operator can see all of them at once.
pub fn report_config_error(err: &ConfigError) {
    match err {
        ConfigError::Missing { fields } => {
            tracing::error!("One or more environment variables are missing:");
            for field in fields {
                tracing::error!("{}", field);
            }
        }
        err => tracing::error!("{}", err),
    }
}

/// Binds the liveness listener on all interfaces.
///
/// Failure to bind is fatal since the process could not answer health checks.
pub async fn bind_liveness(port: u16) -> Result<TcpListener, AppError> {
    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("HTTP server listening on {}", listener.local_addr()?);

    Ok(listener)
}

/// Serves the liveness router until the process ends.
pub async fn serve_liveness(listener: TcpListener) -> Result<(), AppError> {
    axum::serve(listener, router::router()).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::{
        collections::HashMap,
        io,
        sync::{Arc, Mutex},
    };

    use test_utils::fixture::config::{env_map, valid_env};

    use super::*;
    use crate::server::config::Config;

    /// Log sink capturing formatted output in memory.
    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl LogBuffer {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for LogBuffer {
        type Writer = LogBuffer;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn capture(source: &impl ConfigSource, log: impl FnOnce()) -> String {
        let buffer = LogBuffer::default();
        let subscriber = log_subscriber(log_filter(source), buffer.clone());
        tracing::subscriber::with_default(subscriber, log);
        buffer.contents()
    }

    /// Tests that `RUST_LOG` from the configuration source sets the filter.
    ///
    /// Expected: debug lines written when RUST_LOG=debug
    #[test]
    fn log_filter_reads_rust_log_from_source() {
        let output = capture(&env_map(&[("RUST_LOG", "debug")]), || {
            tracing::debug!("Loaded commands");
        });

        assert!(output.contains("Loaded commands"));
    }

    /// Tests the default filter.
    ///
    /// Expected: info lines written, debug lines dropped
    #[test]
    fn log_filter_defaults_to_info() {
        let output = capture(&valid_env(), || {
            tracing::debug!("hidden detail");
            tracing::info!("visible line");
        });

        assert!(output.contains("visible line"));
        assert!(!output.contains("hidden detail"));
    }

    /// Tests the diagnostics logged for missing configuration.
    ///
    /// Expected: one status line per required variable
    #[test]
    fn reports_status_of_every_required_variable() {
        let mut env = valid_env();
        env.remove("CLIENT_ID");
        let err = Config::from_source(&env).err().unwrap();

        let output = capture(&HashMap::<String, String>::new(), || {
            report_config_error(&err)
        });

        assert!(output.contains("One or more environment variables are missing:"));
        assert!(output.contains("DISCORD_TOKEN: present"));
        assert!(output.contains("CLIENT_ID: missing"));
        assert!(output.contains("GUILD_ID: present"));
    }

    /// Tests binding a port that is already in use.
    ///
    /// Expected: Err(AppError::IoErr)
    #[tokio::test]
    async fn bind_fails_when_port_in_use() {
        let first = bind_liveness(0).await.unwrap();
        let port = first.local_addr().unwrap().port();

        let second = bind_liveness(port).await;

        assert!(matches!(second, Err(AppError::IoErr(_))));
    }

    /// Tests serving the liveness router over a real socket.
    ///
    /// Expected: raw HTTP response with status 200 and the running message
    #[tokio::test]
    async fn serves_liveness_over_tcp() {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = bind_liveness(0).await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(serve_liveness(listener));

        let mut stream = tokio::net::TcpStream::connect(addr).await.unwrap();
        stream
            .write_all(b"POST /anything HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\nContent-Length: 0\r\n\r\n")
            .await
            .unwrap();

        let mut response = String::new();
        stream.read_to_string(&mut response).await.unwrap();

        assert!(response.starts_with("HTTP/1.1 200 OK"));
        assert!(response.to_lowercase().contains("content-type: text/plain"));
        assert!(response.ends_with("Bot is running!\n"));
    }
}

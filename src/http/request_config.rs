use std::time::Duration;

/// Per-request settings handed to the HTTP client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpRequestConfig {
    connect_timeout: Duration,
    read_timeout: Duration,
    verify_ssl_cert: bool,
}

impl HttpRequestConfig {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(15_000);

    pub const DEFAULT: HttpRequestConfig = HttpRequestConfig {
        connect_timeout: Self::DEFAULT_TIMEOUT,
        read_timeout: Self::DEFAULT_TIMEOUT,
        verify_ssl_cert: true,
    };

    /// Settings with the given timeouts and certificate verification enabled.
    pub const fn new(connect_timeout: Duration, read_timeout: Duration) -> Self {
        Self::with_ssl_verification(connect_timeout, read_timeout, true)
    }

    /// `verify_ssl_cert: false` disables certificate verification for TLS
    /// connections.
    pub const fn with_ssl_verification(
        connect_timeout: Duration,
        read_timeout: Duration,
        verify_ssl_cert: bool,
    ) -> Self {
        Self {
            connect_timeout,
            read_timeout,
            verify_ssl_cert,
        }
    }

    pub fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    pub fn read_timeout(&self) -> Duration {
        self.read_timeout
    }

    pub fn verify_ssl_cert(&self) -> bool {
        self.verify_ssl_cert
    }
}

impl Default for HttpRequestConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

//! # Network Printer Transport
//!
//! Raw TCP transport for network thermal printers. Nearly every
//! Ethernet/WiFi receipt printer accepts ESC/POS bytes on port 9100
//! with no framing or handshake: connect, write, close.
//!
//! Opening and sending are deliberately separate failure modes:
//! a refused connection means the printer is off or unreachable
//! (nothing printed), while a failed send means the job may be
//! partially on paper. Physical printing is not transactional — there
//! is no rollback, only an honest error upstream.

use std::io::Write;
use std::net::{Shutdown, TcpStream, ToSocketAddrs};
use std::time::Duration;

use tracing::{info, instrument, warn};

use crate::error::ComandaError;

/// Timeout for establishing the connection
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Timeout for individual socket writes
const WRITE_TIMEOUT: Duration = Duration::from_secs(5);

/// Timeout for the online probe (kept short: it runs on a request path)
const PROBE_TIMEOUT: Duration = Duration::from_millis(500);

/// An open connection to a network printer.
///
/// ## Example
///
/// ```no_run
/// use comanda::transport::NetworkTransport;
///
/// let mut transport = NetworkTransport::open("192.168.1.100", 9100)?;
/// transport.send(&[0x1B, 0x40])?;
/// transport.close();
/// # Ok::<(), comanda::error::ComandaError>(())
/// ```
pub struct NetworkTransport {
    stream: TcpStream,
}

impl NetworkTransport {
    /// Open a connection to the printer.
    ///
    /// ## Errors
    ///
    /// Returns [`ComandaError::Connection`] when the address does not
    /// resolve or the printer does not accept the connection within the
    /// timeout.
    #[instrument]
    pub fn open(host: &str, port: u16) -> Result<Self, ComandaError> {
        let addr = resolve(host, port)?;

        let stream = TcpStream::connect_timeout(&addr, CONNECT_TIMEOUT)
            .map_err(|e| ComandaError::Connection(format!("{}: {}", addr, e)))?;
        stream
            .set_write_timeout(Some(WRITE_TIMEOUT))
            .map_err(|e| ComandaError::Connection(format!("{}: {}", addr, e)))?;

        info!(%addr, "printer connection open");
        Ok(Self { stream })
    }

    /// Send compiled directive bytes.
    ///
    /// ## Errors
    ///
    /// Returns [`ComandaError::Transmission`] on a mid-stream failure.
    /// The printer may have produced partial output by then.
    #[instrument(skip(self, data), fields(data_len = data.len()))]
    pub fn send(&mut self, data: &[u8]) -> Result<(), ComandaError> {
        self.stream
            .write_all(data)
            .map_err(|e| ComandaError::Transmission(format!("write failed: {}", e)))?;
        self.stream
            .flush()
            .map_err(|e| ComandaError::Transmission(format!("flush failed: {}", e)))?;
        info!("print job sent");
        Ok(())
    }

    /// Close the connection. Shutdown errors are ignored: the job is
    /// already on the wire by the time this runs.
    pub fn close(self) {
        let _ = self.stream.shutdown(Shutdown::Both);
    }

    /// Check whether the printer accepts connections, without sending
    /// anything.
    #[instrument]
    pub fn probe(host: &str, port: u16) -> bool {
        let Ok(addr) = resolve(host, port) else {
            warn!("printer address does not resolve");
            return false;
        };
        match TcpStream::connect_timeout(&addr, PROBE_TIMEOUT) {
            Ok(stream) => {
                let _ = stream.shutdown(Shutdown::Both);
                info!(%addr, "printer online");
                true
            }
            Err(e) => {
                warn!(%addr, error = %e, "printer offline");
                false
            }
        }
    }
}

fn resolve(host: &str, port: u16) -> Result<std::net::SocketAddr, ComandaError> {
    (host, port)
        .to_socket_addrs()
        .map_err(|e| ComandaError::Connection(format!("{}:{}: {}", host, port, e)))?
        .next()
        .ok_or_else(|| ComandaError::Connection(format!("{}:{}: no address", host, port)))
}

//! Sink setup from explicit connection configuration
//!
//! Everything a transport needs to find the robot travels in
//! [`ConnectionConfig`]; nothing lives in module state. The BLE
//! characteristic writer is an external collaborator that implements
//! [`PacketSink`] behind the same [`open_sink`] call; the built-in sink
//! traces frames as hex without touching a radio, which is also the
//! dry-run mode.

use anyhow::Result;
use async_trait::async_trait;
use ble_kamigami_protocol::{ADVERTISED_NAME, WRITE_CHARACTERISTIC_UUID};
use kamigami_link::{LinkError, LinkResult, PacketSink};
use tracing::{debug, info};

use crate::output::format_frame_hex;

/// How to reach the robot. Passed explicitly into [`open_sink`].
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Robot MAC address; `None` means scan for [`ADVERTISED_NAME`].
    pub address: Option<String>,
    /// Scan timeout in seconds when no address is given.
    pub scan_secs: f64,
}

impl ConnectionConfig {
    pub fn new(address: Option<String>, scan_secs: f64) -> Self {
        Self { address, scan_secs }
    }

    fn target(&self) -> String {
        match &self.address {
            Some(addr) => addr.clone(),
            None => format!("first `{}` found within {:.1}s", ADVERTISED_NAME, self.scan_secs),
        }
    }
}

/// Sink that logs frames instead of writing a BLE characteristic.
pub struct TraceSink {
    target: String,
    connected: bool,
}

#[async_trait]
impl PacketSink for TraceSink {
    async fn send(&mut self, frame: &[u8]) -> LinkResult<usize> {
        if !self.connected {
            return Err(LinkError::Disconnected);
        }
        info!(
            target_device = %self.target,
            characteristic = WRITE_CHARACTERISTIC_UUID,
            frame = %format_frame_hex(frame),
            "frame written"
        );
        Ok(frame.len())
    }

    fn is_connected(&self) -> bool {
        self.connected
    }

    fn close(&mut self) -> LinkResult<()> {
        self.connected = false;
        Ok(())
    }
}

/// Opens the packet sink for the configured robot.
///
/// # Errors
///
/// Propagates any transport connect failure; the trace sink itself cannot
/// fail to open.
pub async fn open_sink(config: &ConnectionConfig) -> Result<Box<dyn PacketSink>> {
    let target = config.target();
    debug!(%target, "opening packet sink");
    Ok(Box::new(TraceSink {
        target,
        connected: true,
    }))
}

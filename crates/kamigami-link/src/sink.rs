//! Packet sink trait for frame delivery
//!
//! Encoding never touches the radio. A finished frame is handed to a
//! [`PacketSink`], normally backed by the robot's BLE write characteristic;
//! tests use the in-memory mock below.

use crate::{LinkError, LinkResult};
use async_trait::async_trait;

#[async_trait]
pub trait PacketSink: Send + Sync {
    /// Delivers one complete frame, returning the number of bytes accepted.
    async fn send(&mut self, frame: &[u8]) -> LinkResult<usize>;

    fn is_connected(&self) -> bool;

    fn close(&mut self) -> LinkResult<()>;
}

pub mod mock {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Sink that records every frame it is given, in order.
    pub struct MockSink {
        write_history: Arc<Mutex<Vec<Vec<u8>>>>,
        connected: Arc<Mutex<bool>>,
    }

    impl MockSink {
        pub fn new() -> Self {
            Self {
                write_history: Arc::new(Mutex::new(Vec::new())),
                connected: Arc::new(Mutex::new(true)),
            }
        }

        pub fn get_write_history(&self) -> Vec<Vec<u8>> {
            let history = self.write_history.lock().unwrap_or_else(|e| e.into_inner());
            history.clone()
        }

        pub fn disconnect(&self) {
            let mut connected = self.connected.lock().unwrap_or_else(|e| e.into_inner());
            *connected = false;
        }

        pub fn reconnect(&self) {
            let mut connected = self.connected.lock().unwrap_or_else(|e| e.into_inner());
            *connected = true;
        }
    }

    impl Default for MockSink {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl PacketSink for MockSink {
        async fn send(&mut self, frame: &[u8]) -> LinkResult<usize> {
            let connected = *self.connected.lock().unwrap_or_else(|e| e.into_inner());
            if !connected {
                return Err(LinkError::Disconnected);
            }

            let mut history = self.write_history.lock().unwrap_or_else(|e| e.into_inner());
            history.push(frame.to_vec());
            Ok(frame.len())
        }

        fn is_connected(&self) -> bool {
            *self.connected.lock().unwrap_or_else(|e| e.into_inner())
        }

        fn close(&mut self) -> LinkResult<()> {
            self.disconnect();
            Ok(())
        }
    }
}

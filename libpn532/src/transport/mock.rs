// libpn532-rs/libpn532/src/transport/mock.rs
//! In-memory transport for tests.

use std::collections::VecDeque;
use std::time::Duration;

use crate::constants::{ACK_FRAME, PREAMBLE};
use crate::protocol::Frame;
use crate::transport::traits::Transport;
use crate::Result;

/// Mock transport for unit tests. It records every write and serves queued
/// device bytes as one continuous stream, the way a serial port would.
#[derive(Debug, Default)]
pub struct MockTransport {
    /// Every send call, in order
    pub sent: Vec<Vec<u8>>,
    /// Device bytes not yet read
    pub incoming: VecDeque<u8>,
    /// Every receive call as (requested length, timeout)
    pub reads: Vec<(usize, Duration)>,
    /// Number of reset_input calls
    pub input_resets: usize,
    /// Number of flush calls
    pub flushes: usize,
}

impl MockTransport {
    /// Empty mock with nothing queued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue raw device bytes.
    pub fn push_bytes(&mut self, bytes: &[u8]) {
        self.incoming.extend(bytes.iter().copied());
    }

    /// Queue an ACK frame.
    pub fn push_ack(&mut self) {
        self.push_bytes(&ACK_FRAME);
    }

    /// Queue a well-formed controller reply frame carrying `body`.
    pub fn push_response(&mut self, body: &[u8]) {
        let frame = Frame::encode_response(body).unwrap_or_default();
        self.push_bytes(&frame);
    }

    /// Queue an ACK followed by a reply frame, the normal answer to one
    /// command.
    pub fn push_exchange(&mut self, body: &[u8]) {
        self.push_ack();
        self.push_response(body);
    }

    /// Take the oldest recorded write.
    pub fn pop_sent(&mut self) -> Option<Vec<u8>> {
        self.sent.pop()
    }

    /// Host frames written so far, decoded. ACKs and wake-up bytes are
    /// skipped; a leading long preamble is ignored.
    pub fn sent_frames(&self) -> Vec<Frame> {
        self.sent
            .iter()
            .filter_map(|w| {
                let start = w.windows(PREAMBLE.len()).position(|s| s == PREAMBLE)?;
                Frame::decode(&w[start..]).ok()
            })
            .collect()
    }

    /// Number of frames sent with command code `code`.
    pub fn command_count(&self, code: u8) -> usize {
        self.sent_frames()
            .iter()
            .filter(|f| f.body.first() == Some(&code))
            .count()
    }

    /// Device bytes still queued.
    pub fn remaining(&self) -> usize {
        self.incoming.len()
    }
}

impl Transport for MockTransport {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        self.sent.push(data.to_vec());
        Ok(())
    }

    fn receive(&mut self, len: usize, timeout: Duration) -> Result<Vec<u8>> {
        self.reads.push((len, timeout));
        let n = len.min(self.incoming.len());
        Ok(self.incoming.drain(..n).collect())
    }

    fn flush(&mut self) -> Result<()> {
        self.flushes += 1;
        Ok(())
    }

    fn reset_input(&mut self) -> Result<()> {
        // Queued bytes are kept so tests can pre-seed the replies to the
        // whole initialization sequence.
        self.input_resets += 1;
        Ok(())
    }

    fn name(&self) -> String {
        "mock".to_string()
    }
}

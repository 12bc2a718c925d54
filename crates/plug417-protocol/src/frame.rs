//! Frame encoding/decoding utilities.
//!
//! Every message on the link, in either direction, is wrapped in the same
//! frame. There are no escape sequences; frame boundaries are found from the
//! fixed header bytes and the length byte alone.
//!
//! ```text
//! +------+------+-----+-------------------+----+-----+
//! | 0x55 | 0xAA | len | payload[0..len]   | cs | END |
//! +------+------+-----+-------------------+----+-----+
//! ```
//!
//! `cs` is the XOR of `len` and every payload byte. A frame is always
//! `len + 5` bytes long and `len` is in `1..=255`.
//!
//! All buffers here are fixed arrays sized to [`MAX_FRAME_SIZE`], so a noisy
//! or hostile length byte can never grow memory use.

use bytes::BufMut;
use log::{debug, trace};

use crate::constants::*;
use crate::error::{FramingError, ProtocolError, Result};

/// XOR-fold of the length byte followed by every payload byte.
pub fn checksum(length: u8, payload: &[u8]) -> u8 {
    payload.iter().fold(length, |cs, &byte| cs ^ byte)
}

// ============================================================================
// Frame
// ============================================================================

/// A validated frame payload, copied out of the receive buffer.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    len: u8,
    payload: [u8; MAX_PAYLOAD_SIZE],
}

impl Frame {
    /// Build a frame around a payload of 1 to 255 bytes.
    pub fn new(payload: &[u8]) -> Result<Self> {
        if payload.is_empty() || payload.len() > MAX_PAYLOAD_SIZE {
            return Err(ProtocolError::InvalidArgument(format!(
                "frame payload must be 1..={} bytes, got {}",
                MAX_PAYLOAD_SIZE,
                payload.len()
            )));
        }
        Ok(Self::from_valid(payload))
    }

    /// `payload` must be 1..=255 bytes.
    pub(crate) fn from_valid(payload: &[u8]) -> Self {
        let mut frame = Frame {
            len: payload.len() as u8,
            payload: [0u8; MAX_PAYLOAD_SIZE],
        };
        frame.payload[..payload.len()].copy_from_slice(payload);
        frame
    }

    /// Parse the frame at the start of `wire`.
    ///
    /// Bytes after the terminator are ignored.
    pub fn parse(wire: &[u8]) -> Result<Self> {
        if wire.len() < 3 {
            return Err(FramingError::Truncated.into());
        }
        if wire[0] != FRAME_HEADER0 {
            return Err(FramingError::BadHeader(wire[0]).into());
        }
        if wire[1] != FRAME_HEADER1 {
            return Err(FramingError::BadHeader(wire[1]).into());
        }
        let len = wire[2] as usize;
        if len == 0 {
            return Err(FramingError::ZeroLength.into());
        }
        if wire.len() < len + FRAME_OVERHEAD {
            return Err(FramingError::Truncated.into());
        }
        let payload = &wire[3..3 + len];
        if wire[4 + len] != FRAME_END {
            return Err(FramingError::BadTerminator(wire[4 + len]).into());
        }
        let computed = checksum(wire[2], payload);
        if wire[3 + len] != computed {
            return Err(FramingError::BadChecksum {
                received: wire[3 + len],
                computed,
            }
            .into());
        }
        Ok(Self::from_valid(payload))
    }

    /// Payload byte count (the wire `len` field).
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Frames always carry at least one payload byte.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The payload bytes.
    pub fn payload(&self) -> &[u8] {
        &self.payload[..self.len as usize]
    }

    /// Checksum this frame carries on the wire.
    pub fn checksum(&self) -> u8 {
        checksum(self.len, self.payload())
    }

    /// Total size on the wire.
    pub fn wire_len(&self) -> usize {
        self.len as usize + FRAME_OVERHEAD
    }

    /// Encode into a bounded wire buffer.
    pub fn to_wire(&self) -> WireFrame {
        let mut bytes = [0u8; MAX_FRAME_SIZE];
        {
            let mut buf = &mut bytes[..];
            buf.put_u8(FRAME_HEADER0);
            buf.put_u8(FRAME_HEADER1);
            buf.put_u8(self.len);
            buf.put_slice(self.payload());
            buf.put_u8(self.checksum());
            buf.put_u8(FRAME_END);
        }
        WireFrame {
            bytes,
            len: self.wire_len(),
        }
    }
}

impl std::fmt::Debug for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Frame")
            .field("len", &self.len)
            .field("payload", &hex::encode(self.payload()))
            .finish()
    }
}

/// An encoded frame held in a fixed scratch buffer.
#[derive(Clone, Copy)]
pub struct WireFrame {
    bytes: [u8; MAX_FRAME_SIZE],
    len: usize,
}

impl WireFrame {
    /// The bytes to put on the wire.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }
}

impl AsRef<[u8]> for WireFrame {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl std::fmt::Debug for WireFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "WireFrame({})", hex::encode(self.as_bytes()))
    }
}

// ============================================================================
// Decoder
// ============================================================================

/// Counters kept by a [`FrameDecoder`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecoderStats {
    /// Valid frames produced.
    pub frames: u64,
    /// Candidates rejected for a bad header, length or terminator.
    pub framing_errors: u64,
    /// Candidates rejected for a checksum mismatch.
    pub checksum_errors: u64,
    /// Bytes dropped while hunting for a header.
    pub discarded_bytes: u64,
}

enum Step {
    Pending,
    Complete(Frame),
    Rejected(FramingError),
}

/// Incremental frame decoder.
///
/// The parse state is the number of bytes accepted toward the current frame
/// plus the bytes themselves; the meaning of the next byte depends only on
/// that count and the length byte already read. Input may arrive one byte or
/// any number of bytes at a time.
///
/// When a candidate frame is rejected the decoder does not throw its bytes
/// away: everything after the rejected header byte is rescanned, so a valid
/// frame hidden behind a corrupt one is still found. Rescanned bytes live in
/// a second fixed buffer, the two together never hold more than one maximal
/// frame.
///
/// A rejection can only happen at a position the machine checks. A false
/// header followed by a large length byte therefore holds every following
/// byte, valid frames included, until `len + 5` bytes have arrived and the
/// terminator check fails. On a quiet link that may never happen; callers
/// that give up waiting should [`reset`](Self::reset) the decoder.
pub struct FrameDecoder {
    buf: [u8; MAX_FRAME_SIZE],
    count: usize,
    replay: [u8; MAX_FRAME_SIZE],
    replay_pos: usize,
    replay_len: usize,
    stats: DecoderStats,
}

impl Default for FrameDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameDecoder {
    /// Create an empty decoder.
    pub fn new() -> Self {
        FrameDecoder {
            buf: [0u8; MAX_FRAME_SIZE],
            count: 0,
            replay: [0u8; MAX_FRAME_SIZE],
            replay_pos: 0,
            replay_len: 0,
            stats: DecoderStats::default(),
        }
    }

    /// Feed bytes, stopping at the first complete frame.
    ///
    /// Returns how many bytes of `data` were consumed together with the
    /// frame, if one completed. Bytes after the frame are not consumed and
    /// should be offered again. Bytes held back from an earlier rejection are
    /// scanned before `data`, so calling this with an empty slice can still
    /// yield a frame while [`has_pending`](Self::has_pending) is true.
    pub fn decode(&mut self, data: &[u8]) -> (usize, Option<Frame>) {
        if let Some(frame) = self.drain_replay() {
            return (0, Some(frame));
        }
        for (i, &byte) in data.iter().enumerate() {
            if let Some(frame) = self.accept(byte) {
                return (i + 1, Some(frame));
            }
            if let Some(frame) = self.drain_replay() {
                return (i + 1, Some(frame));
            }
        }
        (data.len(), None)
    }

    /// Whether bytes from a rejected candidate are still waiting to be rescanned.
    pub fn has_pending(&self) -> bool {
        self.replay_pos < self.replay_len
    }

    /// Bytes accepted toward the frame currently being assembled.
    pub fn in_progress(&self) -> usize {
        self.count
    }

    /// Decoder counters.
    pub fn stats(&self) -> DecoderStats {
        self.stats
    }

    /// Drop any partial frame and held-back bytes.
    pub fn reset(&mut self) {
        self.count = 0;
        self.replay_pos = 0;
        self.replay_len = 0;
    }

    fn drain_replay(&mut self) -> Option<Frame> {
        while self.replay_pos < self.replay_len {
            let byte = self.replay[self.replay_pos];
            self.replay_pos += 1;
            if let Some(frame) = self.accept(byte) {
                return Some(frame);
            }
        }
        None
    }

    fn accept(&mut self, byte: u8) -> Option<Frame> {
        match self.step(byte) {
            Step::Pending => None,
            Step::Complete(frame) => {
                self.stats.frames += 1;
                trace!("frame complete: {:?}", frame);
                Some(frame)
            }
            Step::Rejected(err) => {
                match err {
                    FramingError::BadChecksum { .. } => self.stats.checksum_errors += 1,
                    _ => self.stats.framing_errors += 1,
                }
                debug!("frame rejected after {} bytes: {}", self.count, err);
                self.rewind();
                None
            }
        }
    }

    fn step(&mut self, byte: u8) -> Step {
        let pos = self.count;
        self.buf[pos] = byte;
        self.count += 1;

        match pos {
            0 => {
                if byte != FRAME_HEADER0 {
                    self.count = 0;
                    self.stats.discarded_bytes += 1;
                }
                Step::Pending
            }
            1 if byte != FRAME_HEADER1 => Step::Rejected(FramingError::BadHeader(byte)),
            1 => Step::Pending,
            2 if byte == 0 => Step::Rejected(FramingError::ZeroLength),
            2 => Step::Pending,
            _ => {
                let len = self.buf[2] as usize;
                if pos < 4 + len {
                    // payload bytes, then the checksum
                    return Step::Pending;
                }
                if byte != FRAME_END {
                    return Step::Rejected(FramingError::BadTerminator(byte));
                }
                let payload = &self.buf[3..3 + len];
                let computed = checksum(self.buf[2], payload);
                let received = self.buf[3 + len];
                if received != computed {
                    return Step::Rejected(FramingError::BadChecksum { received, computed });
                }
                let frame = Frame::from_valid(payload);
                self.count = 0;
                Step::Complete(frame)
            }
        }
    }

    /// Drop the rejected header byte and queue everything after it for rescanning.
    fn rewind(&mut self) {
        let head = self.count - 1;
        let tail = self.replay_len - self.replay_pos;
        let mut pending = [0u8; MAX_FRAME_SIZE];
        pending[..head].copy_from_slice(&self.buf[1..self.count]);
        pending[head..head + tail].copy_from_slice(&self.replay[self.replay_pos..self.replay_len]);
        self.replay = pending;
        self.replay_pos = 0;
        self.replay_len = head + tail;
        self.count = 0;
        self.stats.discarded_bytes += 1;
    }
}

impl std::fmt::Debug for FrameDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameDecoder")
            .field("in_progress", &self.count)
            .field("pending", &(self.replay_len - self.replay_pos))
            .field("stats", &self.stats)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PALETTE_9: [u8; 12] = [0x55, 0xAA, 0x07, 0x02, 0x00, 0x04, 0x00, 0x00, 0x00, 0x09, 0x08, 0xF0];
    const HANDSHAKE_OK: [u8; 6] = [0x55, 0xAA, 0x01, 0x00, 0x01, 0xF0];

    #[test]
    fn test_frame_encode() {
        let frame = Frame::new(&[0x02, 0x00, 0x04, 0x00, 0x00, 0x00, 0x09]).unwrap();
        let wire = frame.to_wire();
        assert_eq!(wire.as_bytes(), &PALETTE_9);
        assert_eq!(frame.wire_len(), 12);
    }

    #[test]
    fn test_frame_new_rejects_bad_sizes() {
        assert!(Frame::new(&[]).is_err());
        assert!(Frame::new(&[0u8; 256]).is_err());
        assert_eq!(Frame::new(&[0u8; 255]).unwrap().wire_len(), MAX_FRAME_SIZE);
    }

    #[test]
    fn test_parse() {
        let frame = Frame::parse(&PALETTE_9).unwrap();
        assert_eq!(frame.payload(), &PALETTE_9[3..10]);

        let mut corrupt = PALETTE_9;
        corrupt[10] ^= 0x01;
        assert_eq!(
            Frame::parse(&corrupt),
            Err(ProtocolError::Framing(FramingError::BadChecksum {
                received: 0x09,
                computed: 0x08
            }))
        );
        assert_eq!(
            Frame::parse(&PALETTE_9[..11]),
            Err(ProtocolError::Framing(FramingError::Truncated))
        );
    }

    #[test]
    fn test_decode_single_chunk() {
        let mut decoder = FrameDecoder::new();
        let (used, frame) = decoder.decode(&PALETTE_9);
        assert_eq!(used, PALETTE_9.len());
        assert_eq!(frame.unwrap().payload(), &PALETTE_9[3..10]);
        assert_eq!(decoder.in_progress(), 0);
    }

    #[test]
    fn test_decode_partial() {
        let mut decoder = FrameDecoder::new();

        let (used, frame) = decoder.decode(&HANDSHAKE_OK[..4]);
        assert_eq!(used, 4);
        assert!(frame.is_none());
        assert_eq!(decoder.in_progress(), 4);

        let (used, frame) = decoder.decode(&HANDSHAKE_OK[4..]);
        assert_eq!(used, 2);
        assert_eq!(frame.unwrap().payload(), &[0x00]);
    }

    #[test]
    fn test_decode_back_to_back_frames() {
        let mut decoder = FrameDecoder::new();
        let mut chunk = HANDSHAKE_OK.to_vec();
        chunk.extend_from_slice(&PALETTE_9);

        let (used, first) = decoder.decode(&chunk);
        assert_eq!(used, HANDSHAKE_OK.len());
        assert_eq!(first.unwrap().len(), 1);

        let (used, second) = decoder.decode(&chunk[used..]);
        assert_eq!(used, PALETTE_9.len());
        assert_eq!(second.unwrap().len(), 7);
    }

    #[test]
    fn test_decode_skips_garbage() {
        let mut decoder = FrameDecoder::new();
        let mut chunk = vec![0x00, 0x13, 0xF0, 0xAA];
        chunk.extend_from_slice(&HANDSHAKE_OK);

        let (_, frame) = decoder.decode(&chunk);
        assert_eq!(frame.unwrap().payload(), &[0x00]);
        assert_eq!(decoder.stats().discarded_bytes, 4);
    }

    #[test]
    fn test_decode_repeated_header_byte() {
        // 0x55 0x55 0xAA: the second 0x55 starts the real frame
        let mut decoder = FrameDecoder::new();
        let mut chunk = vec![0x55];
        chunk.extend_from_slice(&HANDSHAKE_OK);

        let (_, frame) = decoder.decode(&chunk);
        assert_eq!(frame.unwrap().payload(), &[0x00]);
        assert_eq!(decoder.stats().framing_errors, 1);
    }

    #[test]
    fn test_decode_checksum_error_then_valid() {
        let mut decoder = FrameDecoder::new();
        let mut corrupt = PALETTE_9;
        corrupt[10] = 0x77;
        let mut chunk = corrupt.to_vec();
        chunk.extend_from_slice(&HANDSHAKE_OK);

        let (_, frame) = decoder.decode(&chunk);
        assert_eq!(frame.unwrap().payload(), &[0x00]);
        assert_eq!(decoder.stats().checksum_errors, 1);
        assert_eq!(decoder.stats().frames, 1);
    }

    #[test]
    fn test_decode_false_header_with_long_length() {
        // A spurious header announcing 0x20 payload bytes swallows the real
        // frame; rescanning after the terminator check fails recovers it.
        let mut decoder = FrameDecoder::new();
        let mut chunk = vec![0x55, 0xAA, 0x20];
        chunk.extend_from_slice(&HANDSHAKE_OK);
        chunk.extend_from_slice(&[0u8; 0x20]);

        let mut frames = Vec::new();
        let mut offset = 0;
        loop {
            let (used, frame) = decoder.decode(&chunk[offset..]);
            offset += used;
            match frame {
                Some(frame) => frames.push(frame),
                None if !decoder.has_pending() => break,
                None => {}
            }
        }
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].payload(), &[0x00]);
        assert_eq!(decoder.stats().framing_errors, 1);
    }

    #[test]
    fn test_decode_zero_length() {
        let mut decoder = FrameDecoder::new();
        let mut chunk = vec![0x55, 0xAA, 0x00];
        chunk.extend_from_slice(&HANDSHAKE_OK);

        let (_, frame) = decoder.decode(&chunk);
        assert_eq!(frame.unwrap().payload(), &[0x00]);
        assert_eq!(decoder.stats().framing_errors, 1);
    }

    #[test]
    fn test_false_header_holds_frames_until_reset() {
        let mut decoder = FrameDecoder::new();
        let mut chunk = vec![0x55, 0xAA, 0xFF];
        chunk.extend_from_slice(&HANDSHAKE_OK);

        let (used, frame) = decoder.decode(&chunk);
        assert_eq!(used, chunk.len());
        assert!(frame.is_none());
        assert_eq!(decoder.in_progress(), 3 + HANDSHAKE_OK.len());

        decoder.reset();
        let (_, frame) = decoder.decode(&HANDSHAKE_OK);
        assert_eq!(frame.unwrap().payload(), &[0x00]);
    }

    #[test]
    fn test_reset() {
        let mut decoder = FrameDecoder::new();
        decoder.decode(&PALETTE_9[..5]);
        decoder.reset();
        assert_eq!(decoder.in_progress(), 0);
        assert!(decoder.decode(&PALETTE_9[5..]).1.is_none());
    }
}

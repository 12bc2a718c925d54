//! Codec laws checked over generated inputs.

use plug417_protocol::*;
use proptest::prelude::*;

/// Decode everything in `chunks`, feeding each chunk until it is consumed.
fn decode_chunks(chunks: &[&[u8]]) -> Vec<Frame> {
    let mut decoder = FrameDecoder::new();
    let mut frames = Vec::new();
    for chunk in chunks {
        let mut rest = *chunk;
        loop {
            let (used, frame) = decoder.decode(rest);
            rest = &rest[used..];
            match frame {
                Some(frame) => frames.push(frame),
                None if rest.is_empty() && !decoder.has_pending() => break,
                None => {}
            }
        }
    }
    frames
}

/// Bytes biased toward header, terminator and short length values.
fn noise_byte() -> impl Strategy<Value = u8> {
    prop_oneof![
        Just(FRAME_HEADER0),
        Just(FRAME_HEADER1),
        Just(FRAME_END),
        Just(0xFFu8),
        0u8..4,
        any::<u8>(),
    ]
}

proptest! {
    #[test]
    fn test_command_round_trip(functional: u8, page: u8, option: u8, value: u32) {
        let cmd = Command::new(functional, page, option, value);
        let wire = cmd.to_wire();
        prop_assert_eq!(wire.as_bytes().len(), COMMAND_PAYLOAD_SIZE + FRAME_OVERHEAD);

        let frames = decode_chunks(&[wire.as_bytes()]);
        prop_assert_eq!(frames.len(), 1);
        prop_assert_eq!(Command::decode(frames[0].payload()).unwrap(), cmd);
    }

    #[test]
    fn test_checksum_law(payload in prop::collection::vec(any::<u8>(), 1..=MAX_PAYLOAD_SIZE)) {
        let len = payload.len() as u8;
        let cs = checksum(len, &payload);
        let folded = payload.iter().fold(len ^ cs, |acc, &b| acc ^ b);
        prop_assert_eq!(folded, 0);
    }

    #[test]
    fn test_resync_after_garbage(
        garbage in prop::collection::vec(noise_byte(), 0..64),
        payload in prop::collection::vec(any::<u8>(), 1..32),
    ) {
        let frame = Frame::new(&payload).unwrap();
        let mut stream = garbage.clone();
        stream.extend_from_slice(frame.to_wire().as_bytes());
        // long enough to close any false candidate the garbage opened
        stream.extend_from_slice(&[0u8; MAX_FRAME_SIZE]);

        // garbage that happens to hold a valid frame is not garbage
        prop_assume!((0..garbage.len()).all(|at| Frame::parse(&stream[at..]).is_err()));

        let frames = decode_chunks(&[&stream]);
        prop_assert_eq!(frames.len(), 1);
        prop_assert_eq!(frames[0].payload(), &payload[..]);

        let singles: Vec<&[u8]> = stream.chunks(1).collect();
        prop_assert_eq!(decode_chunks(&singles), frames);
    }

    #[test]
    fn test_resync_after_corrupt_frame(
        payload in prop::collection::vec(any::<u8>(), 1..32),
        flip in 1u8..=255,
    ) {
        let frame = Frame::new(&payload).unwrap();
        let good = frame.to_wire();
        let mut bad = good.as_bytes().to_vec();
        let cs = bad.len() - 2;
        bad[cs] ^= flip;

        let mut stream = bad;
        stream.extend_from_slice(good.as_bytes());
        let frames = decode_chunks(&[&stream]);
        prop_assert_eq!(frames.len(), 1);
        prop_assert_eq!(frames[0].payload(), &payload[..]);
    }

    #[test]
    fn test_chunk_independence(
        payload in prop::collection::vec(any::<u8>(), 1..=MAX_PAYLOAD_SIZE),
        split in any::<prop::sample::Index>(),
    ) {
        let wire = Frame::new(&payload).unwrap().to_wire();
        let bytes = wire.as_bytes();

        let whole = decode_chunks(&[bytes]);

        let singles: Vec<&[u8]> = bytes.chunks(1).collect();
        let one_at_a_time = decode_chunks(&singles);

        let at = split.index(bytes.len() + 1);
        let (head, tail) = bytes.split_at(at);
        let split_in_two = decode_chunks(&[head, tail]);

        prop_assert_eq!(whole.len(), 1);
        prop_assert_eq!(&whole, &one_at_a_time);
        prop_assert_eq!(&whole, &split_in_two);
    }

    #[test]
    fn test_back_to_back_frames_survive(
        first in prop::collection::vec(any::<u8>(), 1..16),
        second in prop::collection::vec(any::<u8>(), 1..16),
    ) {
        let mut stream = Frame::new(&first).unwrap().to_wire().as_bytes().to_vec();
        stream.extend_from_slice(Frame::new(&second).unwrap().to_wire().as_bytes());

        let frames = decode_chunks(&[&stream]);
        prop_assert_eq!(frames.len(), 2);
        prop_assert_eq!(frames[0].payload(), &first[..]);
        prop_assert_eq!(frames[1].payload(), &second[..]);
    }
}

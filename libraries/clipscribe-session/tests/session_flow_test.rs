//! Cross-crate editing flow: select segments, extract, encode, play

use clipscribe_core::{SampleBuffer, SampleRate, TimeRange, TranscriptSegment};
use clipscribe_session::{EditingSession, Playback};

fn speech_session() -> EditingSession {
    let rate = 16_000u32;
    let frames = rate as usize * 5; // five seconds
    let samples = (0..frames)
        .map(|i| ((i as f32) * 0.01).sin() * 0.6)
        .collect();
    let buffer = SampleBuffer::new(SampleRate::new(rate), vec![samples]).unwrap();

    let segments = vec![
        TranscriptSegment {
            id: 0,
            text: "welcome back".into(),
            start: 0.25,
            end: 1.10,
        },
        TranscriptSegment {
            id: 1,
            text: "to the show".into(),
            start: 1.10,
            end: 2.40,
        },
        TranscriptSegment {
            id: 2,
            text: "today we talk about".into(),
            start: 2.90,
            end: 4.75,
        },
    ];
    EditingSession::new(buffer, segments)
}

#[test]
fn selecting_two_segments_yields_one_spanning_clip() {
    let mut session = speech_session();
    session.toggle_segment(0);
    session.toggle_segment(1);

    let clip = session.extract_clip().unwrap();
    assert_eq!(clip.range, TimeRange { start: 0.25, end: 2.40 });
    assert_eq!(clip.file_name, "clip_0:00.25-0:02.40.wav");

    // [0.25, 2.40) at 16 kHz: floor(38400) - floor(4000) = 34400 frames
    let expected_frames = 34_400;
    assert_eq!(clip.bytes.len(), 44 + expected_frames * 2);
    assert_eq!(&clip.bytes[0..4], b"RIFF");
    assert_eq!(
        u32::from_le_bytes([clip.bytes[24], clip.bytes[25], clip.bytes[26], clip.bytes[27]]),
        16_000
    );
}

#[test]
fn a_discontiguous_selection_spans_the_gap() {
    let mut session = speech_session();
    session.toggle_segment(0);
    session.toggle_segment(2);

    // Range covers the unselected middle segment too
    let range = session.selected_range().unwrap();
    assert_eq!(range.start, 0.25);
    assert_eq!(range.end, 4.75);
}

#[test]
fn waveform_and_playback_share_the_session() {
    let mut session = speech_session();
    let bins = session.waveform(640).unwrap();
    assert_eq!(bins.len(), 640);

    session.toggle_segment(1);
    let range = session.selected_range().unwrap();

    let mut playback = Playback::new();
    let handle = playback.start(range);
    assert!(handle.tick(0.5));
    assert!((handle.position_secs() - 1.60).abs() < 1e-9);

    // Starting a new playback replaces the old handle
    let flag = playback.active().unwrap().stop_flag();
    playback.start(range);
    assert!(flag.load(std::sync::atomic::Ordering::Acquire));
}

#[test]
fn failed_action_is_recoverable_per_session() {
    let mut session = speech_session();

    // A decode/transcription failure is recorded, shown, and cleared on retry
    session.set_error("network unreachable");
    assert!(matches!(
        session.state(),
        clipscribe_session::SessionState::Failed(_)
    ));
    session.clear_error();
    assert!(matches!(
        session.state(),
        clipscribe_session::SessionState::Ready
    ));

    // The session still works after recovery
    session.toggle_segment(0);
    assert!(session.extract_clip().is_ok());
}

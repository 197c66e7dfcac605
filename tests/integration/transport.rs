//! Transport integration tests
//!
//! Play/pause/stop, scrubbing and the poll loop, driven by rendering the
//! offline graph by hand.

use crate::helpers::tolerances::*;
use crate::helpers::*;
use approx::assert_relative_eq;
use percmix::prelude::*;
use percmix::sampler::Schedule;
use proptest::prelude::*;

const MARIMBA: Track = Track::Mallets(Mallets::Marimba);
const BONGOS: Track = Track::Latin(Latin::Bongos);

#[test]
fn test_initial_state() {
    let mixer = test_mixer_with(mix_of(&[MARIMBA]));

    assert_eq!(mixer.playback_state(), PlaybackState::Stopped);
    assert!(mixer.playback_state().is_stopped());
    assert_eq!(mixer.playhead(), 0);
    assert_eq!(mixer.duration_frames(), LOOP_FRAMES as i64);
    assert_relative_eq!(mixer.duration_seconds(), 0.1);
    assert!(mixer.display_link().is_paused());

    assert!(mixer.click().is_muted());
    assert_eq!(mixer.click().scheduled(), Schedule::Looping);

    assert!(!mixer.is_muted(&MARIMBA).unwrap());
    assert_eq!(mixer.player(&MARIMBA).unwrap().scheduled(), Schedule::Looping);
    // Tracks outside the mix stay muted and unarmed
    assert!(mixer.is_muted(&BONGOS).unwrap());
    assert_eq!(mixer.player(&BONGOS).unwrap().scheduled(), Schedule::Idle);
}

#[test]
fn test_play_advances_playhead() {
    let mut mixer = test_mixer_with(mix_of(&[MARIMBA]));

    mixer.play();
    assert_eq!(mixer.playback_state(), PlaybackState::Playing(0));
    assert!(!mixer.display_link().is_paused());
    assert!(is_player_running(&mixer, &MARIMBA));

    advance(&mut mixer, 300);
    assert_eq!(mixer.playhead(), 300);
    assert_eq!(mixer.playback_state(), PlaybackState::Playing(300));
    assert_eq!(cursor_of(&mixer, &MARIMBA), 300);
    assert_relative_eq!(mixer.playhead_seconds(), 300.0 / TEST_SAMPLE_RATE);
}

#[test]
fn test_play_is_idempotent() {
    let mut mixer = test_mixer();
    mixer.play();
    advance(&mut mixer, 100);
    mixer.play();
    assert_eq!(mixer.playhead(), 100);
    assert_eq!(mixer.click().render_frames(), 100);
}

#[test]
fn test_tick_ignored_while_stopped() {
    let mut mixer = test_mixer_with(mix_of(&[MARIMBA]));
    advance(&mut mixer, 200);
    assert_eq!(mixer.playhead(), 0);
    assert_eq!(mixer.click().render_frames(), 0);
}

#[test]
fn test_pause_preserves_published_position() {
    let mut mixer = test_mixer_with(mix_of(&[MARIMBA]));
    mixer.play();
    advance(&mut mixer, 300);
    // Rendered but not yet polled
    render_only(&mixer, 40);

    let before = mixer.playback_state();
    mixer.pause();
    assert_eq!(before, PlaybackState::Playing(300));
    assert_eq!(mixer.playback_state(), PlaybackState::Paused(300));
    assert_eq!(mixer.seek_offset(), 300);
    assert!(mixer.display_link().is_paused());
    assert_eq!(mixer.click().render_frames(), 0);

    let marimba = mixer.player(&MARIMBA).unwrap();
    assert!(!marimba.is_playing());
    assert_eq!(marimba.scheduled(), Schedule::Segment { start: 300 });
    assert_eq!(cursor_of(&mixer, &MARIMBA), 300);
}

#[test]
fn test_pause_during_scrub_session_keeps_target() {
    let mut mixer = test_mixer_with(mix_of(&[MARIMBA]));
    mixer.play();
    advance(&mut mixer, 300);

    mixer.begin_scrub();
    mixer.scrub(0.01);
    assert_eq!(mixer.playback_state(), PlaybackState::Playing(80));

    mixer.pause();
    assert_eq!(mixer.playback_state(), PlaybackState::Paused(80));
    assert_eq!(mixer.seek_offset(), 80);
    assert_eq!(
        mixer.player(&MARIMBA).unwrap().scheduled(),
        Schedule::Segment { start: 80 }
    );

    // Releasing the gesture does not resume a paused mix
    mixer.end_scrub();
    assert_eq!(mixer.playback_state(), PlaybackState::Paused(80));
    assert!(!mixer.is_playing());
}

#[test]
fn test_resume_continues_from_pause() {
    let mut mixer = test_mixer_with(mix_of(&[MARIMBA]));
    mixer.play();
    advance(&mut mixer, 300);
    mixer.pause();

    // Paused: nothing moves
    advance(&mut mixer, 100);
    assert_eq!(mixer.playhead(), 300);

    mixer.play();
    assert_eq!(mixer.playback_state(), PlaybackState::Playing(300));
    advance(&mut mixer, 100);
    assert_eq!(mixer.playhead(), 400);
    assert_eq!(cursor_of(&mixer, &MARIMBA), 400);
}

#[test]
fn test_pause_when_not_playing_is_noop() {
    let mut mixer = test_mixer();
    mixer.pause();
    assert_eq!(mixer.playback_state(), PlaybackState::Stopped);
    assert!(mixer.playback_state().is_stopped());
}

#[test]
fn test_stop_resets_everything() {
    let mut mixer = test_mixer_with(mix_of(&[MARIMBA, BONGOS]));
    mixer.play();
    advance(&mut mixer, 500);
    mixer.pause();
    mixer.play();
    advance(&mut mixer, 50);

    mixer.stop();
    assert!(mixer.playback_state().is_stopped());
    assert_eq!(mixer.playhead(), 0);
    assert_eq!(mixer.seek_offset(), 0);
    assert!(mixer.display_link().is_paused());
    for track in [MARIMBA, BONGOS] {
        let player = mixer.player(&track).unwrap();
        assert!(!player.is_playing());
        assert_eq!(player.scheduled(), Schedule::Looping);
        assert_eq!(cursor_of(&mixer, &track), 0);
    }
}

#[test]
fn test_toggle() {
    let mut mixer = test_mixer();

    mixer.toggle();
    assert_eq!(mixer.playback_state(), PlaybackState::Playing(0));
    advance(&mut mixer, 120);

    mixer.toggle();
    assert_eq!(mixer.playback_state(), PlaybackState::Paused(120));

    mixer.toggle();
    assert_eq!(mixer.playback_state(), PlaybackState::Playing(120));
}

#[test]
fn test_pause_if_playing() {
    let mut mixer = test_mixer();
    mixer.pause_if_playing();
    assert!(mixer.playback_state().is_stopped());

    mixer.play();
    advance(&mut mixer, 80);
    mixer.pause_if_playing();
    assert_eq!(mixer.playback_state(), PlaybackState::Paused(80));

    mixer.pause_if_playing();
    assert_eq!(mixer.playback_state(), PlaybackState::Paused(80));
}

#[test]
fn test_scrub_clamps_into_loop() {
    let mut mixer = test_mixer_with(mix_of(&[MARIMBA]));

    mixer.scrub(10.0);
    assert_eq!(mixer.playhead(), LOOP_FRAMES as i64 - 1);
    assert_eq!(
        mixer.player(&MARIMBA).unwrap().scheduled(),
        Schedule::Segment {
            start: LOOP_FRAMES - 1
        }
    );

    mixer.scrub(-3.0);
    assert_eq!(mixer.playhead(), 0);
    assert_eq!(mixer.seek_offset(), 0);

    mixer.scrub(f64::NAN);
    assert_eq!(mixer.playhead(), 0);
}

#[test]
fn test_scrub_while_stopped_pauses_at_target() {
    let mut mixer = test_mixer_with(mix_of(&[MARIMBA]));
    mixer.scrub(0.05);

    assert_eq!(mixer.playback_state(), PlaybackState::Paused(400));
    assert!(!mixer.playback_state().is_stopped());
    assert_eq!(cursor_of(&mixer, &MARIMBA), 400);

    mixer.play();
    advance(&mut mixer, 10);
    assert_eq!(mixer.playhead(), 410);
}

#[test]
fn test_scrub_while_playing_rearms_immediately() {
    let mut mixer = test_mixer_with(mix_of(&[MARIMBA]));
    mixer.play();
    advance(&mut mixer, 100);

    mixer.scrub(0.025);
    assert_eq!(mixer.playback_state(), PlaybackState::Playing(200));
    assert_eq!(mixer.seek_offset(), 200);
    assert_eq!(mixer.click().render_frames(), 0);
    assert_eq!(cursor_of(&mixer, &MARIMBA), 200);
    assert!(is_player_running(&mixer, &MARIMBA));

    advance(&mut mixer, 25);
    assert_eq!(mixer.playhead(), 225);
}

#[test]
fn test_scrub_session_suspends_poll() {
    let mut mixer = test_mixer_with(mix_of(&[MARIMBA]));
    mixer.play();
    advance(&mut mixer, 100);

    mixer.begin_scrub();
    assert!(mixer.is_scrubbing());
    assert!(mixer.display_link().is_paused());

    // Audio keeps rendering; the poll does not publish it
    render_only(&mixer, 50);
    mixer.tick();
    assert_eq!(mixer.playhead(), 100);

    mixer.scrub(0.05);
    mixer.scrub(0.0625);
    assert_eq!(mixer.playhead(), 500);
    // Not re-armed until release
    assert_eq!(cursor_of(&mixer, &MARIMBA), 150);

    mixer.end_scrub();
    assert!(!mixer.is_scrubbing());
    assert_eq!(mixer.playback_state(), PlaybackState::Playing(500));
    assert!(!mixer.display_link().is_paused());
    assert_eq!(cursor_of(&mixer, &MARIMBA), 500);

    advance(&mut mixer, 10);
    assert_eq!(mixer.playhead(), 510);
}

#[test]
fn test_scrub_session_while_paused_stays_paused() {
    let mut mixer = test_mixer_with(mix_of(&[MARIMBA]));
    mixer.play();
    advance(&mut mixer, 100);
    mixer.pause();

    mixer.begin_scrub();
    mixer.scrub(0.0125);
    mixer.end_scrub();

    assert_eq!(mixer.playback_state(), PlaybackState::Paused(100));
    assert_eq!(cursor_of(&mixer, &MARIMBA), 100);
    assert!(!is_player_running(&mixer, &MARIMBA));
}

#[test]
fn test_stop_ends_scrub_session() {
    let mut mixer = test_mixer();
    mixer.play();
    advance(&mut mixer, 100);
    mixer.begin_scrub();
    mixer.scrub(0.05);

    mixer.stop();
    assert!(!mixer.is_scrubbing());
    assert!(mixer.playback_state().is_stopped());

    // Releasing afterwards changes nothing
    mixer.end_scrub();
    assert!(mixer.playback_state().is_stopped());
}

#[test]
fn test_rendered_audio_follows_playhead() {
    let mut mixer = test_mixer_with(mix_of(&[MARIMBA]));

    assert_silence(&render_only(&mixer, 64), SILENCE_THRESHOLD);

    mixer.scrub(0.025);
    mixer.play();
    let out = render_only(&mixer, 8);
    // Frame k of the render plays asset frame 200 + k
    assert_relative_eq!(out[0], 200.0 / LOOP_FRAMES as f32, epsilon = FLOAT_EPSILON);
    assert_relative_eq!(out[2 * 5 + 1], 205.0 / LOOP_FRAMES as f32, epsilon = FLOAT_EPSILON);
}

#[test]
fn test_transport_events() {
    let mut mixer = test_mixer();
    let events = mixer.subscribe();

    mixer.play();
    advance(&mut mixer, 100);
    mixer.pause();

    assert_eq!(
        drain(&events),
        vec![
            MixerEvent::PlaybackChanged(PlaybackState::Playing(0)),
            MixerEvent::PositionChanged(100),
            MixerEvent::PlaybackChanged(PlaybackState::Paused(100)),
        ]
    );
}

#[derive(Debug, Clone)]
enum Op {
    Play,
    Pause,
    Stop,
    Toggle,
    Advance(usize),
    Scrub(f64),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Play),
        Just(Op::Pause),
        Just(Op::Stop),
        Just(Op::Toggle),
        (1usize..300).prop_map(Op::Advance),
        (-0.05f64..0.2).prop_map(Op::Scrub),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn test_transport_sequences(ops in prop::collection::vec(op(), 1..24)) {
        let mut mixer = test_mixer_with(mix_of(&[MARIMBA]));
        let length = mixer.duration_frames();

        for op in ops {
            let before = mixer.playback_state();
            match op {
                Op::Play => mixer.play(),
                Op::Pause => {
                    mixer.pause();
                    if before.is_playing() {
                        prop_assert_eq!(mixer.playback_state(), PlaybackState::Paused(before.position()));
                    } else {
                        prop_assert_eq!(mixer.playback_state(), before);
                    }
                }
                Op::Stop => {
                    mixer.stop();
                    prop_assert!(mixer.playback_state().is_stopped());
                    prop_assert_eq!(mixer.playhead(), 0);
                    prop_assert_eq!(mixer.seek_offset(), 0);
                }
                Op::Toggle => {
                    mixer.toggle();
                    prop_assert_eq!(mixer.is_playing(), !before.is_playing());
                }
                Op::Advance(frames) => advance(&mut mixer, frames),
                Op::Scrub(seconds) => {
                    mixer.scrub(seconds);
                    prop_assert_eq!(mixer.seek_offset(), mixer.playhead());
                }
            }
            prop_assert!(mixer.playhead() >= 0);
            prop_assert!(mixer.playhead() < length);
        }
    }
}

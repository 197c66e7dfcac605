//! Track set and per-track control integration tests
//!
//! Insertion must land on the shared playhead; removal silences only the
//! departing player.

use crate::helpers::tolerances::*;
use crate::helpers::*;
use approx::assert_relative_eq;
use percmix::prelude::*;
use percmix::sampler::Schedule;

const MARIMBA: Track = Track::Mallets(Mallets::Marimba);
const VIBES: Track = Track::Mallets(Mallets::Vibraphone);
const BONGOS: Track = Track::Latin(Latin::Bongos);
const GLOCK: Track = Track::Fill(Fill::Sound(FillSound::Glock));

#[test]
fn test_insert_while_playing_starts_at_playhead() {
    let mut mixer = test_mixer_with(mix_of(&[MARIMBA]));
    mixer.play();
    advance(&mut mixer, 300);
    assert_eq!(mixer.playback_state(), PlaybackState::Playing(300));

    assert!(mixer.insert_track(BONGOS).unwrap());
    let bongos = mixer.player(&BONGOS).unwrap();
    assert!(bongos.is_playing());
    assert!(!bongos.is_muted());
    assert_eq!(bongos.scheduled(), Schedule::Segment { start: 300 });
    assert_eq!(cursor_of(&mixer, &BONGOS), 300);

    render_only(&mixer, 10);
    assert_eq!(cursor_of(&mixer, &BONGOS), 310);
    assert_eq!(cursor_of(&mixer, &MARIMBA), 310);
}

#[test]
fn test_insert_during_scrub_session_uses_target() {
    let mut mixer = test_mixer_with(mix_of(&[MARIMBA]));
    mixer.play();
    advance(&mut mixer, 300);
    mixer.begin_scrub();
    mixer.scrub(0.01);

    mixer.insert_track(BONGOS).unwrap();
    assert_eq!(
        mixer.player(&BONGOS).unwrap().scheduled(),
        Schedule::Segment { start: 80 }
    );
}

#[test]
fn test_inserted_track_sounds_from_playhead() {
    let mut mixer = test_mixer();
    mixer.play();
    advance(&mut mixer, 400);

    mixer.insert_track(BONGOS).unwrap();
    let out = render_only(&mixer, 4);
    assert_relative_eq!(out[0], 400.0 / LOOP_FRAMES as f32, epsilon = FLOAT_EPSILON);
}

#[test]
fn test_insert_while_paused_arms_at_position() {
    let mut mixer = test_mixer_with(mix_of(&[MARIMBA]));
    mixer.play();
    advance(&mut mixer, 300);
    mixer.pause();

    mixer.insert_track(BONGOS).unwrap();
    let bongos = mixer.player(&BONGOS).unwrap();
    assert!(!bongos.is_playing());
    assert!(!bongos.is_muted());
    assert_eq!(bongos.scheduled(), Schedule::Segment { start: 300 });

    mixer.play();
    advance(&mut mixer, 50);
    assert_eq!(cursor_of(&mixer, &BONGOS), 350);
    assert_eq!(cursor_of(&mixer, &MARIMBA), 350);
}

#[test]
fn test_insert_while_stopped_arms_from_top() {
    let mut mixer = test_mixer();
    mixer.insert_track(BONGOS).unwrap();

    let bongos = mixer.player(&BONGOS).unwrap();
    assert!(!bongos.is_playing());
    assert!(!bongos.is_muted());
    assert_eq!(bongos.scheduled(), Schedule::Looping);
    assert_eq!(cursor_of(&mixer, &BONGOS), 0);
}

#[test]
fn test_insert_twice_is_noop() {
    let mut mixer = test_mixer_with(mix_of(&[MARIMBA]));
    let events = mixer.subscribe();
    assert!(!mixer.insert_track(MARIMBA).unwrap());
    assert_eq!(mixer.mix().len(), 1);
    assert!(drain(&events).is_empty());
}

#[test]
fn test_remove_halts_only_that_track() {
    let mut mixer = test_mixer_with(mix_of(&[MARIMBA, BONGOS]));
    mixer.play();
    advance(&mut mixer, 100);

    assert!(mixer.remove_track(&BONGOS));
    assert!(!mixer.mix().contains(&BONGOS));
    assert!(!is_player_running(&mixer, &BONGOS));
    assert_eq!(mixer.player(&BONGOS).unwrap().scheduled(), Schedule::Idle);
    assert!(is_player_running(&mixer, &MARIMBA));

    assert!(!mixer.remove_track(&BONGOS));
}

#[test]
fn test_shared_player_survives_removal() {
    let surprise = Track::surprise(FillSound::Glock);
    let mut mixer = test_mixer_with(mix_of(&[GLOCK]));
    mixer.play();
    advance(&mut mixer, 100);

    // Already sounding for the plain fill: left running, not re-armed
    mixer.insert_track(surprise).unwrap();
    assert_eq!(cursor_of(&mixer, &surprise), 100);

    mixer.remove_track(&GLOCK);
    assert!(is_player_running(&mixer, &surprise));

    mixer.remove_track(&surprise);
    assert!(!is_player_running(&mixer, &GLOCK));
}

#[test]
fn test_set_mix_swaps_tracks() {
    let mut mixer = test_mixer_with(mix_of(&[MARIMBA]));
    mixer.play();
    advance(&mut mixer, 200);
    let events = mixer.subscribe();

    mixer.set_mix(mix_of(&[VIBES, BONGOS])).unwrap();
    assert_eq!(mixer.mix(), &mix_of(&[VIBES, BONGOS]));
    assert!(!is_player_running(&mixer, &MARIMBA));
    for track in [VIBES, BONGOS] {
        assert!(is_player_running(&mixer, &track));
        assert_eq!(cursor_of(&mixer, &track), 200);
    }

    assert_eq!(
        drain(&events),
        vec![
            MixerEvent::TrackInserted(VIBES),
            MixerEvent::TrackInserted(BONGOS),
            MixerEvent::TrackRemoved(MARIMBA),
        ]
    );
}

#[test]
fn test_replace_category_selection() {
    let mut mixer = test_mixer_with(mix_of(&[MARIMBA, BONGOS]));
    let next = mixer.mix().with_category(Category::Mallets, &[VIBES]);
    mixer.set_mix(next).unwrap();
    assert_eq!(mixer.mix(), &mix_of(&[VIBES, BONGOS]));
}

#[test]
fn test_volume_survives_mute() {
    let mut mixer = test_mixer_with(mix_of(&[MARIMBA]));

    mixer.set_volume(&MARIMBA, 0.5).unwrap();
    assert_relative_eq!(mixer.volume(&MARIMBA).unwrap(), 0.5, epsilon = FLOAT_EPSILON);

    mixer.set_muted(&MARIMBA, true).unwrap();
    assert!(mixer.is_muted(&MARIMBA).unwrap());
    assert_relative_eq!(mixer.volume(&MARIMBA).unwrap(), 0.5, epsilon = FLOAT_EPSILON);

    assert!(!mixer.toggle_mute(&MARIMBA).unwrap());
    assert_relative_eq!(
        mixer.player(&MARIMBA).unwrap().node().level(),
        0.5,
        epsilon = FLOAT_EPSILON
    );
}

#[test]
fn test_pan_in_display_units() {
    let mut mixer = test_mixer_with(mix_of(&[MARIMBA]));

    mixer.set_pan(&MARIMBA, -67.5).unwrap();
    assert_relative_eq!(mixer.pan(&MARIMBA).unwrap(), -67.5, epsilon = 1e-4);
    assert_relative_eq!(mixer.controls(&MARIMBA).unwrap().pan, -0.5, epsilon = FLOAT_EPSILON);

    mixer.set_pan(&MARIMBA, 1000.0).unwrap();
    assert_relative_eq!(mixer.pan(&MARIMBA).unwrap(), 135.0, epsilon = 1e-4);
}

#[test]
fn test_pan_scale_is_configurable() {
    let mut mixer = Mixer::builder()
        .offline(TEST_SAMPLE_RATE)
        .assets(test_source())
        .pan_scale(90.0)
        .build()
        .unwrap();
    mixer.set_pan(&MARIMBA, 45.0).unwrap();
    assert_relative_eq!(mixer.controls(&MARIMBA).unwrap().pan, 0.5, epsilon = FLOAT_EPSILON);
}

#[test]
fn test_controls_never_touch_click() {
    let mut mixer = test_mixer_with(mix_of(&[MARIMBA]));
    mixer.set_volume(&MARIMBA, 0.3).unwrap();
    mixer.set_muted(&MARIMBA, true).unwrap();
    mixer.set_pan(&MARIMBA, 100.0).unwrap();

    assert!(mixer.click().is_muted());
    assert_eq!(mixer.click().node().pan(), 0.0);
}

#[test]
fn test_control_events() {
    let mut mixer = test_mixer_with(mix_of(&[MARIMBA]));
    let events = mixer.subscribe();
    mixer.set_volume(&MARIMBA, 0.8).unwrap();
    mixer.set_pan(&MARIMBA, 10.0).unwrap();
    assert_eq!(
        drain(&events),
        vec![
            MixerEvent::ControlsChanged(MARIMBA),
            MixerEvent::ControlsChanged(MARIMBA),
        ]
    );
}

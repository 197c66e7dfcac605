//! Directory asset loading integration tests
//!
//! Writes a full catalog of WAV loops into a temp directory and builds a
//! mixer from it.

use crate::helpers::*;
use percmix::prelude::*;
use percmix::CLICK_ASSET_KEY;
use std::path::Path;

fn write_loop(path: &Path, frames: usize) {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: TEST_SAMPLE_RATE as u32,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec).unwrap();
    for i in 0..frames {
        writer.write_sample((i % 128) as i16 * 64).unwrap();
    }
    writer.finalize().unwrap();
}

fn write_catalog(dir: &Path, frames: usize) {
    let keys = Track::catalog()
        .iter()
        .map(Track::asset_key)
        .chain([CLICK_ASSET_KEY])
        .collect::<Vec<_>>();
    for key in keys {
        write_loop(&dir.join(format!("{key}.wav")), frames);
    }
}

#[test]
fn test_build_from_directory() {
    let dir = tempfile::tempdir().unwrap();
    write_catalog(dir.path(), 1600);

    let mut mixer = Mixer::builder()
        .offline(TEST_SAMPLE_RATE)
        .asset_dir(dir.path())
        .mix(mix_of(&[Track::Mallets(Mallets::Marimba)]))
        .build()
        .unwrap();

    assert_eq!(mixer.duration_frames(), 1600);
    assert_eq!(mixer.players().len(), Track::catalog().len());

    mixer.play();
    advance(&mut mixer, 1000);
    assert_eq!(mixer.playhead(), 1000);
}

#[test]
fn test_missing_file_fails_build() {
    let dir = tempfile::tempdir().unwrap();
    write_catalog(dir.path(), 400);
    std::fs::remove_file(dir.path().join("clave.2-3.wav")).unwrap();

    let result = Mixer::builder()
        .offline(TEST_SAMPLE_RATE)
        .asset_dir(dir.path())
        .build();
    match result {
        Err(Error::Sampler(percmix::sampler::Error::AssetNotFound(key))) => {
            assert_eq!(key, "clave.2-3")
        }
        other => panic!("expected AssetNotFound, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_corrupt_file_fails_build() {
    let dir = tempfile::tempdir().unwrap();
    write_catalog(dir.path(), 400);
    std::fs::write(dir.path().join(format!("{CLICK_ASSET_KEY}.wav")), b"not a wav").unwrap();

    let result = Mixer::builder()
        .offline(TEST_SAMPLE_RATE)
        .asset_dir(dir.path())
        .build();
    assert!(matches!(
        result,
        Err(Error::Sampler(percmix::sampler::Error::Decode { .. }))
    ));
}

#[test]
fn test_config_from_json() {
    let dir = tempfile::tempdir().unwrap();
    write_catalog(dir.path(), 400);

    let json = format!(
        r#"{{
            "poll_rate_hz": 120.0,
            "seed": 3,
            "graph": {{ "sample_rate": {TEST_SAMPLE_RATE}, "output": "Offline" }},
            "asset_dir": {:?}
        }}"#,
        dir.path().to_string_lossy()
    );
    let config: MixerConfig = serde_json::from_str(&json).unwrap();

    let mixer = Mixer::builder().config(config).build().unwrap();
    assert_eq!(mixer.config().poll_rate_hz, 120.0);
    assert_eq!(
        mixer.display_link().interval(),
        std::time::Duration::from_secs_f64(1.0 / 120.0)
    );
}

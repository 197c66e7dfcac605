//! Loop asset lookup and decoding.

use crate::{Error, Result};
use percmix_core::Wave;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Resolves an asset key to decoded audio.
pub trait AssetSource: Send + Sync {
    fn load(&self, key: &str) -> Result<Arc<Wave>>;
}

/// Reads `<root>/<key>.wav`.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.wav"))
    }
}

impl AssetSource for DirectorySource {
    fn load(&self, key: &str) -> Result<Arc<Wave>> {
        let path = self.path_for(key);
        if !path.is_file() {
            return Err(Error::AssetNotFound(key.to_string()));
        }

        let wave = decode_wav(&path).map_err(|source| Error::Decode {
            key: key.to_string(),
            source,
        })?;
        if wave.len() == 0 {
            return Err(Error::EmptyAsset(key.to_string()));
        }

        tracing::debug!(
            key,
            frames = wave.len(),
            channels = wave.channels(),
            "decoded asset"
        );
        Ok(Arc::new(wave))
    }
}

/// Assets held in memory, keyed by asset key.
#[derive(Clone, Default)]
pub struct MemorySource {
    assets: HashMap<String, Arc<Wave>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, wave: Wave) {
        self.assets.insert(key.into(), Arc::new(wave));
    }

    pub fn with(mut self, key: impl Into<String>, wave: Wave) -> Self {
        self.insert(key, wave);
        self
    }

    pub fn contains(&self, key: &str) -> bool {
        self.assets.contains_key(key)
    }
}

impl AssetSource for MemorySource {
    fn load(&self, key: &str) -> Result<Arc<Wave>> {
        let wave = self
            .assets
            .get(key)
            .ok_or_else(|| Error::AssetNotFound(key.to_string()))?;
        if wave.len() == 0 {
            return Err(Error::EmptyAsset(key.to_string()));
        }
        Ok(Arc::clone(wave))
    }
}

/// Build a wave from per-channel sample buffers of equal length.
pub fn wave_from_channels(sample_rate: f64, channels: &[Vec<f32>]) -> Wave {
    let mut wave = Wave::new(0, sample_rate);
    for samples in channels {
        wave.insert_channel(wave.channels(), samples);
    }
    wave
}

/// Decode a WAV file, normalizing integer samples to `[-1, 1)`.
pub fn decode_wav(path: &Path) -> std::result::Result<Wave, hound::Error> {
    let mut reader = hound::WavReader::open(path)?;
    let spec = reader.spec();
    let channel_count = spec.channels.max(1) as usize;

    let interleaved: Vec<f32> = match spec.sample_format {
        hound::SampleFormat::Float => reader
            .samples::<f32>()
            .collect::<std::result::Result<_, _>>()?,
        hound::SampleFormat::Int => {
            let scale = 1.0 / (1u64 << (spec.bits_per_sample.clamp(1, 32) - 1)) as f32;
            reader
                .samples::<i32>()
                .map(|sample| sample.map(|s| s as f32 * scale))
                .collect::<std::result::Result<_, _>>()?
        }
    };

    let frames = interleaved.len() / channel_count;
    let mut channels = vec![Vec::with_capacity(frames); channel_count];
    for frame in interleaved.chunks_exact(channel_count) {
        for (channel, &sample) in channels.iter_mut().zip(frame) {
            channel.push(sample);
        }
    }

    Ok(wave_from_channels(spec.sample_rate as f64, &channels))
}

//! Builder for configuring and constructing a [`Mixer`].

use crate::mixer::Mixer;
use crate::{Error, Mix, MixerConfig, Result};
use percmix_catalog::{Track, CLICK_ASSET_KEY};
use percmix_core::{DisplayLink, GraphConfig, GraphOutput, RenderGraph};
use percmix_sampler::{load_player, AssetSource, DirectorySource, PlayerBank};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Every catalog asset is loaded up front, whatever the initial mix. A
/// missing or unreadable asset fails [`build`](Self::build).
///
/// # Example
///
/// ```ignore
/// use percmix::prelude::*;
///
/// let mixer = Mixer::builder()
///     .asset_dir("assets/loops")
///     .output_device(None)
///     .mix([Track::Mallets(Mallets::Marimba)].into_iter().collect())
///     .build()?;
/// ```
#[derive(Default)]
pub struct MixerBuilder {
    config: MixerConfig,
    source: Option<Box<dyn AssetSource>>,
    mix: Mix,
}

impl MixerBuilder {
    pub fn config(mut self, config: MixerConfig) -> Self {
        self.config = config;
        self
    }

    /// Load assets from `source`. Takes precedence over [`asset_dir`](Self::asset_dir).
    pub fn assets(mut self, source: impl AssetSource + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Load `<dir>/<asset key>.wav` files.
    pub fn asset_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.asset_dir = Some(dir.into());
        self
    }

    /// Initial mix. Default: empty.
    pub fn mix(mut self, mix: Mix) -> Self {
        self.mix = mix;
        self
    }

    /// Seed for surprise draws, for reproducible runs.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Default: 60 Hz
    pub fn poll_rate(mut self, hz: f64) -> Self {
        self.config.poll_rate_hz = hz;
        self
    }

    /// Default: 135
    pub fn pan_scale(mut self, scale: f32) -> Self {
        self.config.pan_scale = scale;
        self
    }

    /// Render on demand at `sample_rate` instead of to a device.
    pub fn offline(mut self, sample_rate: f64) -> Self {
        self.config.graph = GraphConfig::offline(sample_rate);
        self
    }

    /// Play through an output device. `None` selects the default device.
    pub fn output_device(mut self, index: Option<usize>) -> Self {
        self.config.graph.output = GraphOutput::Device { index };
        self
    }

    pub fn build(self) -> Result<Mixer> {
        let Self {
            config,
            source,
            mix,
        } = self;
        config.validate()?;

        let source: Box<dyn AssetSource> = match (source, &config.asset_dir) {
            (Some(source), _) => source,
            (None, Some(dir)) => Box::new(DirectorySource::new(dir.clone())),
            (None, None) => {
                return Err(Error::InvalidConfig(
                    "no asset source or asset directory given".to_string(),
                ))
            }
        };

        let mut graph = RenderGraph::new(config.graph.clone())?;
        graph.start()?;
        let sample_rate = graph.sample_rate();

        let click = load_player(source.as_ref(), CLICK_ASSET_KEY, sample_rate)?;
        let catalog = Track::catalog();
        let bank = PlayerBank::load(
            source.as_ref(),
            catalog.iter().map(Track::asset_key),
            sample_rate,
            config.pan_scale,
        )?;

        if let Some(track) = mix.iter().find(|t| !bank.contains(t.asset_key())) {
            return Err(Error::UnknownTrack(*track));
        }

        graph.attach(Arc::new(click.node().clone()));
        for player in bank.iter() {
            graph.attach(Arc::new(player.node().clone()));
        }

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let link = DisplayLink::new(config.poll_rate_hz);

        info!(
            sample_rate,
            players = bank.len(),
            tracks = mix.len(),
            "mixer ready"
        );
        Ok(Mixer::assemble(config, graph, click, bank, mix, link, rng))
    }
}

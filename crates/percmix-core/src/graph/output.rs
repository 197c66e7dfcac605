//! CPAL output stream rendering the mix bus.

use super::MixBus;
use crate::{Error, Result};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};

/// Wrapper to hold `cpal::Stream` in a `Send` context.
///
/// # Safety
/// `cpal::Stream` is `!Send` due to platform internals. The stream is only
/// created, held and dropped by the owning `RenderGraph`; it is never used
/// from another thread.
struct StreamHandle(#[allow(dead_code)] cpal::Stream);

unsafe impl Send for StreamHandle {}

pub(crate) struct DeviceOutput {
    sample_rate: f64,
    _stream: StreamHandle,
}

impl DeviceOutput {
    pub(crate) fn start(index: Option<usize>, bus: MixBus) -> Result<Self> {
        let device = get_device(index)?;
        let config = device.default_output_config()?;
        let sample_rate = config.sample_rate().0 as f64;

        let stream = match config.sample_format() {
            cpal::SampleFormat::F32 => build_stream::<f32>(&device, &config.into(), bus)?,
            cpal::SampleFormat::I16 => build_stream::<i16>(&device, &config.into(), bus)?,
            cpal::SampleFormat::U16 => build_stream::<u16>(&device, &config.into(), bus)?,
            format => {
                return Err(Error::InvalidConfig(format!(
                    "Unsupported sample format: {format:?}"
                )));
            }
        };

        stream.play()?;
        tracing::info!(
            device = %device.name().unwrap_or_default(),
            sample_rate,
            "audio output opened"
        );

        Ok(Self {
            sample_rate,
            _stream: StreamHandle(stream),
        })
    }

    pub(crate) fn sample_rate(&self) -> f64 {
        self.sample_rate
    }
}

pub(crate) fn list_devices() -> Result<Vec<String>> {
    cpal::default_host()
        .output_devices()?
        .enumerate()
        .map(|(i, d)| Ok(format!("{i}: {}", d.name()?)))
        .collect()
}

fn get_device(index: Option<usize>) -> Result<cpal::Device> {
    let host = cpal::default_host();

    match index {
        Some(i) => {
            let devices: Vec<_> = host.output_devices()?.collect();
            let count = devices.len();
            devices.into_iter().nth(i).ok_or_else(|| {
                Error::InvalidDevice(format!("Device index {i} out of range ({count} available)"))
            })
        }
        None => host
            .default_output_device()
            .ok_or_else(|| Error::InvalidDevice("No output device available".into())),
    }
}

fn build_stream<T>(
    device: &cpal::Device,
    config: &cpal::StreamConfig,
    bus: MixBus,
) -> Result<cpal::Stream>
where
    T: cpal::SizedSample + cpal::FromSample<f32>,
{
    let channels = config.channels as usize;

    // Grows on the first callback, then stable
    let mut stereo = Vec::<f32>::new();

    let stream = device.build_output_stream(
        config,
        move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                let frames = data.len() / channels;
                let needed = frames * 2;
                if stereo.len() < needed {
                    stereo.resize(needed, 0.0);
                }
                bus.render(&mut stereo[..needed]);
                write_output(data, channels, &stereo[..needed]);
            }));

            if result.is_err() {
                output_silence(data);
            }
        },
        |_err| {},
        None,
    )?;

    Ok(stream)
}

/// Spread the stereo bus over the device channels; extra channels get silence.
#[inline]
fn write_output<T: cpal::SizedSample + cpal::FromSample<f32>>(
    data: &mut [T],
    channels: usize,
    stereo: &[f32],
) {
    for (i, sample) in data.iter_mut().enumerate() {
        let frame = i / channels;
        let ch = i % channels;
        let value = match (channels, ch) {
            (1, _) => (stereo[frame * 2] + stereo[frame * 2 + 1]) * 0.5,
            (_, 0 | 1) => stereo[frame * 2 + ch],
            _ => 0.0,
        };
        *sample = T::from_sample(value);
    }
}

/// Output silence (panic recovery).
#[inline]
fn output_silence<T: cpal::SizedSample + cpal::FromSample<f32>>(data: &mut [T]) {
    for sample in data.iter_mut() {
        *sample = T::from_sample(0.0);
    }
}

//! # Play a mix
//!
//! Loads every loop from a directory of WAV files and plays a small mix
//! through the default output device.
//!
//! **Concepts:** building a mixer, driving the poll from the display link,
//! transport, solo, repeat, surprise fills
//!
//! ```bash
//! cargo run --example play_mix --features device -- path/to/loops
//! ```

use crossbeam_channel::select;
use percmix::prelude::*;
use std::io::{self, BufRead, Write};

fn main() -> percmix::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let dir = std::env::args().nth(1).unwrap_or_else(|| "assets".to_string());
    let mix: Mix = [
        Track::Mallets(Mallets::Marimba),
        Track::Latin(Latin::Clave(ClaveConfig::ThreeTwo)),
        Track::surprise(FillSound::Glock),
    ]
    .into_iter()
    .collect();

    let mut mixer = Mixer::builder()
        .asset_dir(dir)
        .output_device(None)
        .mix(mix)
        .build()?;
    mixer.set_repeat_mode(RepeatMode::Forever);
    let events = mixer.subscribe();

    println!("Mix: {}", names(mixer.mix()));
    println!("  p=play/pause  s=stop  r=cycle repeat  o=toggle solo on marimba");
    println!("  <seconds>=scrub  q=quit");
    println!();

    let (tx, commands) = crossbeam_channel::unbounded::<String>();
    std::thread::spawn(move || {
        for line in io::stdin().lock().lines().map_while(|l| l.ok()) {
            if tx.send(line.trim().to_string()).is_err() {
                break;
            }
        }
    });

    let ticks = mixer.display_link().ticks();
    mixer.play();

    loop {
        select! {
            recv(ticks) -> _ => mixer.tick(),
            recv(commands) -> line => {
                let Ok(line) = line else { break };
                match line.as_str() {
                    "q" => break,
                    "p" => mixer.toggle(),
                    "s" => mixer.stop(),
                    "r" => println!("repeat: {:?}", mixer.toggle_repeat()),
                    "o" => {
                        mixer.solo_insert(Track::Mallets(Mallets::Marimba))?;
                        mixer.toggle_solo();
                        println!("solo: {}", mixer.solo().is_on());
                    }
                    other => match other.parse::<f64>() {
                        Ok(seconds) => mixer.scrub(seconds),
                        Err(_) => println!("unknown command '{other}'"),
                    },
                }
            }
        }

        for event in events.try_iter() {
            match event {
                MixerEvent::PositionChanged(_) => {
                    print!(
                        "\r{:6.2}s / {:.2}s ",
                        mixer.playhead_seconds(),
                        mixer.duration_seconds()
                    );
                    let _ = io::stdout().flush();
                }
                MixerEvent::SurpriseRerolled { from, to } => {
                    println!("\nsurprise: {} -> {}", from.display_name(), to.display_name());
                }
                MixerEvent::LoopCompleted { repeat } => println!("\nloop done ({repeat:?})"),
                _ => {}
            }
        }
    }

    mixer.stop();
    Ok(())
}

fn names(mix: &Mix) -> String {
    mix.iter()
        .map(Track::display_name)
        .collect::<Vec<_>>()
        .join(", ")
}

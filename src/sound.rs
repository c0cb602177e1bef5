//! Optional sound effects.
//!
//! Loading is best-effort. Built with the `audio` feature, effects are
//! synthesized and played through the default output device; otherwise the
//! terminal bell marks the important moments. Any failure turns sound off
//! for the rest of the session without interrupting play.

use crate::games::GameEvent;
#[cfg(not(feature = "audio"))]
use std::io::{self, Write};

pub const SAMPLE_RATE: u32 = 44_100;

/// A single sine note.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub frequency_hz: f32,
    pub duration_ms: u32,
}

const fn tone(frequency_hz: f32, duration_ms: u32) -> Tone {
    Tone {
        frequency_hz,
        duration_ms,
    }
}

const WALL_HIT: &[Tone] = &[tone(330.0, 40)];
const FLOOR_BOUNCE: &[Tone] = &[tone(196.0, 60)];
const PADDLE_HIT: &[Tone] = &[tone(440.0, 50)];
const PLAYER_POINT: &[Tone] = &[tone(520.0, 90), tone(680.0, 120)];
const CPU_POINT: &[Tone] = &[tone(300.0, 90), tone(220.0, 140)];
const CLICK: &[Tone] = &[tone(880.0, 25)];
const SWAP: &[Tone] = &[tone(660.0, 35)];
const SOLVED: &[Tone] = &[tone(523.0, 90), tone(659.0, 90), tone(784.0, 160)];
const WON: &[Tone] = &[
    tone(523.0, 110),
    tone(659.0, 110),
    tone(784.0, 110),
    tone(1047.0, 240),
];
const LOST: &[Tone] = &[tone(392.0, 160), tone(311.0, 160), tone(262.0, 320)];

/// Notes played for an event, in order.
pub fn tones_for(event: GameEvent) -> &'static [Tone] {
    match event {
        GameEvent::WallHit => WALL_HIT,
        GameEvent::FloorBounce => FLOOR_BOUNCE,
        GameEvent::PaddleHit => PADDLE_HIT,
        GameEvent::PointScored { by_player: true } => PLAYER_POINT,
        GameEvent::PointScored { by_player: false } => CPU_POINT,
        GameEvent::TileChanged | GameEvent::TileSelected => CLICK,
        GameEvent::TilesSwapped => SWAP,
        GameEvent::Solved | GameEvent::LevelAdvanced => SOLVED,
        GameEvent::Won => WON,
        GameEvent::Lost => LOST,
    }
}

/// Whether the bell fallback should ring for an event.
///
/// Only outcomes ring; per-tick events like wall hits would be constant noise.
pub fn rings_bell(event: GameEvent) -> bool {
    matches!(
        event,
        GameEvent::Solved | GameEvent::Won | GameEvent::Lost | GameEvent::PointScored { .. }
    )
}

/// Render notes back-to-back as mono samples with a decaying envelope.
pub fn render_tones(tones: &[Tone], sample_rate: u32) -> Vec<f32> {
    let mut samples = Vec::new();
    for note in tones {
        let count = (sample_rate as u64 * note.duration_ms as u64 / 1000) as usize;
        let step = std::f32::consts::TAU * note.frequency_hz / sample_rate as f32;
        for i in 0..count {
            let envelope = 0.15 * (1.0 - i as f32 / count as f32);
            samples.push((step * i as f32).sin() * envelope);
        }
    }
    samples
}

#[cfg(feature = "audio")]
mod speaker {
    use rodio::{buffer::SamplesBuffer, OutputStream, OutputStreamHandle, Sink};

    pub struct Speaker {
        _stream: OutputStream,
        handle: OutputStreamHandle,
    }

    impl Speaker {
        pub fn open() -> Result<Self, rodio::StreamError> {
            let (stream, handle) = OutputStream::try_default()?;
            Ok(Self {
                _stream: stream,
                handle,
            })
        }

        pub fn play(&self, samples: Vec<f32>) -> bool {
            match Sink::try_new(&self.handle) {
                Ok(sink) => {
                    sink.append(SamplesBuffer::new(1, super::SAMPLE_RATE, samples));
                    sink.detach();
                    true
                }
                Err(_) => false,
            }
        }
    }
}

enum Output {
    #[cfg(feature = "audio")]
    Speaker(speaker::Speaker),
    #[cfg(not(feature = "audio"))]
    Bell,
}

pub struct Sound {
    output: Option<Output>,
}

impl Sound {
    /// Sound that never plays.
    pub fn disabled() -> Self {
        Self { output: None }
    }

    /// Open the best available output, or none if `enabled` is false.
    pub fn load(enabled: bool) -> Self {
        if !enabled {
            return Self::disabled();
        }

        Self {
            output: open_output(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.output.is_some()
    }

    /// Short label for the status line.
    pub fn output_name(&self) -> &'static str {
        match self.output {
            None => "off",
            #[cfg(feature = "audio")]
            Some(Output::Speaker(_)) => "speaker",
            #[cfg(not(feature = "audio"))]
            Some(Output::Bell) => "bell",
        }
    }

    pub fn play(&mut self, event: GameEvent) {
        let ok = match &self.output {
            None => return,
            #[cfg(feature = "audio")]
            Some(Output::Speaker(speaker)) => {
                speaker.play(render_tones(tones_for(event), SAMPLE_RATE))
            }
            #[cfg(not(feature = "audio"))]
            Some(Output::Bell) => !rings_bell(event) || ring_bell().is_ok(),
        };

        if !ok {
            tracing::debug!("sound output failed, disabling");
            self.output = None;
        }
    }
}

#[cfg(feature = "audio")]
fn open_output() -> Option<Output> {
    match speaker::Speaker::open() {
        Ok(speaker) => {
            tracing::info!("audio output opened");
            Some(Output::Speaker(speaker))
        }
        Err(e) => {
            tracing::debug!(error = %e, "no audio output, sound disabled");
            None
        }
    }
}

#[cfg(not(feature = "audio"))]
fn open_output() -> Option<Output> {
    Some(Output::Bell)
}

#[cfg(not(feature = "audio"))]
fn ring_bell() -> io::Result<()> {
    let mut stdout = io::stdout();
    stdout.write_all(b"\x07")?;
    stdout.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_sound_is_silent() {
        let mut sound = Sound::load(false);
        assert!(!sound.is_enabled());
        assert_eq!(sound.output_name(), "off");
        sound.play(GameEvent::Won);
        assert!(!sound.is_enabled());
    }

    #[test]
    fn test_every_event_has_tones() {
        let events = [
            GameEvent::WallHit,
            GameEvent::FloorBounce,
            GameEvent::PaddleHit,
            GameEvent::PointScored { by_player: true },
            GameEvent::PointScored { by_player: false },
            GameEvent::TileChanged,
            GameEvent::TileSelected,
            GameEvent::TilesSwapped,
            GameEvent::Solved,
            GameEvent::LevelAdvanced,
            GameEvent::Won,
            GameEvent::Lost,
        ];
        for event in events {
            assert!(!tones_for(event).is_empty(), "{:?}", event);
        }
    }

    #[test]
    fn test_render_length_and_amplitude() {
        let samples = render_tones(&[tone(440.0, 100), tone(880.0, 50)], 1000);
        assert_eq!(samples.len(), 150);
        assert!(samples.iter().all(|s| s.abs() <= 0.15));
    }

    #[test]
    fn test_bell_only_for_outcomes() {
        assert!(rings_bell(GameEvent::Won));
        assert!(rings_bell(GameEvent::Solved));
        assert!(!rings_bell(GameEvent::WallHit));
        assert!(!rings_bell(GameEvent::TileChanged));
    }
}

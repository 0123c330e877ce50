//! Background music
//!
//! The Korobeiniki loop, synthesized as a square wave the way the PC
//! speaker used to play it. An infinite `rodio::Source` walks the note
//! tables; playback runs on a detached thread for the life of the process.
//! Machines without a usable audio device get silence and the game carries
//! on.

use std::thread;
use std::time::Duration;

use rodio::{OutputStream, Sink, Source};

/// `(frequency_hz, duration_units)`; frequency 0 is a rest
type Note = (u16, u8);

/// One melody time unit
const NOTE_UNIT_MS: u64 = 100;

const SAMPLE_RATE: u32 = 44_100;

const AMPLITUDE: f32 = 0.15;

/// Main strain, two phrases with a breath between and after them
const MELODY_A: &[Note] = &[
    (1320, 4),
    (990, 2),
    (1056, 2),
    (1188, 2),
    (1320, 1),
    (1188, 1),
    (1056, 2),
    (990, 2),
    (880, 4),
    (880, 2),
    (1056, 2),
    (1320, 4),
    (1188, 2),
    (1056, 2),
    (990, 6),
    (1056, 2),
    (1188, 4),
    (1320, 4),
    (1056, 4),
    (880, 4),
    (880, 4),
    (0, 2),
    (1188, 4),
    (1408, 2),
    (1760, 4),
    (1584, 2),
    (1408, 2),
    (1320, 6),
    (1056, 2),
    (1320, 4),
    (1188, 2),
    (1056, 2),
    (990, 4),
    (990, 2),
    (1056, 2),
    (1188, 4),
    (1320, 4),
    (1056, 4),
    (880, 4),
    (880, 4),
    (0, 4),
];

/// Low strain at half tempo
const MELODY_B: &[Note] = &[
    (660, 8),
    (528, 8),
    (594, 8),
    (495, 8),
    (528, 8),
    (440, 8),
    (419, 8),
    (495, 8),
    (660, 8),
    (528, 8),
    (594, 8),
    (495, 8),
    (528, 4),
    (660, 4),
    (880, 8),
    (838, 16),
];

/// Full loop: main strain twice, low strain twice
const SECTIONS: [&[Note]; 4] = [MELODY_A, MELODY_A, MELODY_B, MELODY_B];

fn samples_for(units: u8) -> u64 {
    SAMPLE_RATE as u64 * units as u64 * NOTE_UNIT_MS / 1000
}

/// Endless mono sample stream over the note tables.
///
/// Square wave with hard note edges, like the speaker it imitates.
#[derive(Debug, Clone)]
struct ChipTune {
    section: usize,
    note: usize,
    sample_in_note: u64,
}

impl ChipTune {
    fn new() -> Self {
        Self {
            section: 0,
            note: 0,
            sample_in_note: 0,
        }
    }
}

impl Iterator for ChipTune {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        let (freq, units) = SECTIONS[self.section][self.note];

        let sample = if freq == 0 {
            0.0
        } else {
            let period = SAMPLE_RATE as f32 / freq as f32;
            let phase = (self.sample_in_note as f32 / period).fract();
            if phase < 0.5 {
                AMPLITUDE
            } else {
                -AMPLITUDE
            }
        };

        self.sample_in_note += 1;
        if self.sample_in_note >= samples_for(units) {
            self.sample_in_note = 0;
            self.note += 1;
            if self.note >= SECTIONS[self.section].len() {
                self.note = 0;
                self.section = (self.section + 1) % SECTIONS.len();
            }
        }

        Some(sample)
    }
}

impl Source for ChipTune {
    fn current_frame_len(&self) -> Option<usize> {
        None
    }

    fn channels(&self) -> u16 {
        1
    }

    fn sample_rate(&self) -> u32 {
        SAMPLE_RATE
    }

    fn total_duration(&self) -> Option<Duration> {
        None
    }
}

/// Start the music on its own thread and return immediately.
///
/// The thread owns the output stream; when the process exits the thread is
/// torn down with it and playback stops.
pub fn spawn_music() {
    thread::spawn(|| {
        let Ok((_stream, handle)) = OutputStream::try_default() else {
            return;
        };
        let Ok(sink) = Sink::try_new(&handle) else {
            return;
        };
        sink.append(ChipTune::new());
        sink.sleep_until_end();
    });
}

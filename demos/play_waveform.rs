//! Plays a continuously edited waveform curve through the default output.
//!
//! A scripted stand-in for the interactive editor: the curve is split into
//! five fragments up front, two interior control points ride sinusoids, the
//! sample buffer is refilled once per frame, and the audio callback loops
//! over the latest snapshot.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Result;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{FromSample, Sample, SampleFormat, StreamConfig};
use crossterm::event::{self, Event, KeyCode};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use wavecurve::{CubicBezier, SampleBuffer, SegmentedCurve, Vec2};

const FRAME_SIZE: usize = 512;
const PRECISION: u32 = 32;

struct EditorState {
    curve: SegmentedCurve,
    buffer: SampleBuffer,
    audio: Vec<f32>,
    cursor: usize,
    phase: f32,
}

impl EditorState {
    fn new() -> Result<Self> {
        let mut curve = SegmentedCurve::new(CubicBezier::new(
            Vec2::new(0.0, 0.0),
            Vec2::new(0.33, -1.0),
            Vec2::new(0.66, 1.0),
            Vec2::new(1.0, 0.0),
        ));
        for t in [0.15, 0.35, 0.70, 0.60] {
            curve.split_at(t)?;
        }

        let mut buffer = SampleBuffer::new();
        buffer.allocate(2, FRAME_SIZE);
        buffer.fill(&curve, PRECISION)?;

        let mut audio = Vec::new();
        buffer.snapshot_into(&mut audio);
        Ok(Self {
            curve,
            buffer,
            audio,
            cursor: 0,
            phase: 0.0,
        })
    }

    /// One edit-and-refill cycle; runs inside the shared lock.
    fn update(&mut self) {
        self.phase += 0.005;

        let lifted = Vec2::new(self.curve.control_point(6).x, self.phase.sin());
        let _ = self.curve.move_control_point(6, lifted);
        let wobbled = Vec2::new(
            self.curve.control_point(10).x,
            1.3 * (5.0 * self.phase).sin(),
        );
        let _ = self.curve.move_control_point(10, wobbled);

        self.buffer.allocate(2, FRAME_SIZE);
        match self.buffer.fill(&self.curve, PRECISION) {
            Ok(()) => self.buffer.snapshot_into(&mut self.audio),
            // Keep playing the previous frame's snapshot.
            Err(err) => eprintln!("skipping frame: {err}"),
        }
    }

    fn next_frame(&mut self) -> (f32, f32) {
        let left = self.audio[self.cursor];
        let right = self.audio[self.cursor + 1];
        self.cursor = (self.cursor + 2) % self.audio.len();
        (left, right)
    }
}

fn main() -> Result<()> {
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| anyhow::anyhow!("no output device available"))?;
    let config = device.default_output_config()?;

    let state = Arc::new(Mutex::new(EditorState::new()?));

    let stream = match config.sample_format() {
        SampleFormat::F32 => build_stream::<f32>(&device, &config.into(), state.clone())?,
        SampleFormat::I16 => build_stream::<i16>(&device, &config.into(), state.clone())?,
        SampleFormat::U16 => build_stream::<u16>(&device, &config.into(), state.clone())?,
        sample_format => {
            return Err(anyhow::anyhow!("unsupported sample format: {sample_format}"));
        }
    };
    stream.play()?;

    println!("playing the edited waveform; press q to quit");
    enable_raw_mode()?;
    loop {
        if event::poll(Duration::from_millis(16))? {
            if let Event::Key(key) = event::read()? {
                if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                    break;
                }
            }
        }
        state.lock().unwrap().update();
    }
    disable_raw_mode()?;
    Ok(())
}

fn build_stream<T>(
    device: &cpal::Device,
    config: &StreamConfig,
    state: Arc<Mutex<EditorState>>,
) -> Result<cpal::Stream>
where
    T: Sample + FromSample<f32> + cpal::SizedSample,
{
    let channels = config.channels as usize;
    let stream = device.build_output_stream(
        config,
        move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
            let mut state = state.lock().unwrap();
            for frame in data.chunks_mut(channels) {
                let (left, right) = state.next_frame();
                for (slot, value) in frame.iter_mut().zip([left, right].into_iter().cycle()) {
                    *slot = T::from_sample(value);
                }
            }
        },
        |err| eprintln!("audio stream error: {err}"),
        None,
    )?;
    Ok(stream)
}

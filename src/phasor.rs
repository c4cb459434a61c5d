// File: ./src/phasor.rs
/*! Phasor diagram simulator.

Rotating voltage phasors, their projections onto the real axis, and the
matching cosine traces in the time domain. The simulator owns the clock: it
only moves when `frame` is called while running, with the real time elapsed
since the previous frame.
*/
use num_complex::Complex64;
use std::f64::consts::PI;

pub const MIN_FREQUENCY_HZ: f64 = 0.1;
pub const MAX_FREQUENCY_HZ: f64 = 2.0;
pub const FREQUENCY_STEP_HZ: f64 = 0.1;
pub const MAX_AMPLITUDE: f64 = 100.0;

/// The time-domain graph shows a bit more than one period.
pub const WAVEFORM_SPAN: f64 = 2.5 * PI;
pub const WAVEFORM_SAMPLES: usize = 101;

pub const SUM_NAME: &str = "Sum";
pub const SUM_COLOR: &str = "#4CAF50";

#[derive(Debug, Clone, PartialEq)]
pub struct Phasor {
    pub name: String,
    /// Volts, 0..=100.
    pub amplitude: f64,
    /// Radians.
    pub phase: f64,
    pub color: String,
    pub show: bool,
}

impl Phasor {
    pub fn new(name: &str, amplitude: f64, phase: f64, color: &str) -> Self {
        Self {
            name: name.to_string(),
            amplitude: amplitude.clamp(0.0, MAX_AMPLITUDE),
            phase,
            color: color.to_string(),
            show: true,
        }
    }

    pub fn phase_degrees(&self) -> f64 {
        self.phase.to_degrees()
    }
}

pub fn default_phasors() -> Vec<Phasor> {
    vec![
        Phasor::new("U₀", 80.0, 0.0, "#2196F3"),
        Phasor::new("U₁", 60.0, PI / 3.0, "#E91E63"),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    Running,
    #[default]
    Paused,
}

/// Everything needed to draw one rotating vector and its trace.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorState {
    pub name: String,
    pub color: String,
    /// Current rotation angle in radians.
    pub angle: f64,
    pub magnitude: f64,
    pub tip: (f64, f64),
    /// Real component, where the dotted projection meets the axis.
    pub projection: f64,
    pub label: String,
    /// (angle, value) pairs over `0..=WAVEFORM_SPAN`.
    pub waveform: Vec<(f64, f64)>,
    /// The current point on the waveform.
    pub time_point: (f64, f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// ω·t
    pub angle: f64,
    pub vectors: Vec<VectorState>,
    pub sum: Option<VectorState>,
}

#[derive(Debug, Clone)]
pub struct PhasorSimulator {
    pub phasors: Vec<Phasor>,
    frequency_hz: f64,
    time: f64,
    state: RunState,
    pub show_sum: bool,
}

impl Default for PhasorSimulator {
    fn default() -> Self {
        Self::new(0.5)
    }
}

impl PhasorSimulator {
    pub fn new(frequency_hz: f64) -> Self {
        Self {
            phasors: default_phasors(),
            frequency_hz: frequency_hz.clamp(MIN_FREQUENCY_HZ, MAX_FREQUENCY_HZ),
            time: 0.0,
            state: RunState::Paused,
            show_sum: true,
        }
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn toggle_running(&mut self) -> RunState {
        self.state = match self.state {
            RunState::Running => RunState::Paused,
            RunState::Paused => RunState::Running,
        };
        log::debug!("Phasor simulation {:?} at t={:.3}", self.state, self.time);
        self.state
    }

    pub fn frequency(&self) -> f64 {
        self.frequency_hz
    }

    pub fn set_frequency(&mut self, hz: f64) {
        self.frequency_hz = hz.clamp(MIN_FREQUENCY_HZ, MAX_FREQUENCY_HZ);
    }

    /// Moves the frequency by whole slider steps, snapping to the 0.1 Hz grid.
    pub fn step_frequency(&mut self, steps: i32) {
        let raw = self.frequency_hz + f64::from(steps) * FREQUENCY_STEP_HZ;
        self.set_frequency((raw / FREQUENCY_STEP_HZ).round() * FREQUENCY_STEP_HZ);
    }

    pub fn omega(&self) -> f64 {
        2.0 * PI * self.frequency_hz
    }

    pub fn angle(&self) -> f64 {
        self.omega() * self.time
    }

    /// Advances simulated time by `dt` seconds if running.
    pub fn frame(&mut self, dt: f64) -> Frame {
        if self.is_running() && dt.is_finite() && dt > 0.0 {
            self.time += dt;
        }
        self.snapshot()
    }

    pub fn set_amplitude(&mut self, index: usize, volts: f64) {
        if let Some(p) = self.phasors.get_mut(index) {
            p.amplitude = volts.clamp(0.0, MAX_AMPLITUDE);
        }
    }

    pub fn set_phase_degrees(&mut self, index: usize, degrees: f64) {
        if let Some(p) = self.phasors.get_mut(index) {
            p.phase = degrees.clamp(-180.0, 180.0).to_radians();
        }
    }

    pub fn toggle_visibility(&mut self, index: usize) {
        if let Some(p) = self.phasors.get_mut(index) {
            p.show = !p.show;
        }
    }

    pub fn toggle_sum(&mut self) {
        self.show_sum = !self.show_sum;
    }

    pub fn snapshot(&self) -> Frame {
        let angle = self.angle();
        let visible: Vec<&Phasor> = self.phasors.iter().filter(|p| p.show).collect();

        let vectors = visible
            .iter()
            .map(|p| {
                vector_state(
                    &p.name,
                    &p.color,
                    angle,
                    p.amplitude,
                    p.phase,
                    angle + p.phase,
                )
            })
            .collect::<Vec<_>>();

        let sum = if self.show_sum && !visible.is_empty() {
            let tip: Complex64 = visible
                .iter()
                .map(|p| Complex64::from_polar(p.amplitude, angle + p.phase))
                .sum();

            // The rotation is common to every term, so the trace only
            // depends on the phase-only sum.
            let (magnitude, phase) = visible
                .iter()
                .map(|p| Complex64::from_polar(p.amplitude, p.phase))
                .sum::<Complex64>()
                .to_polar();

            let mut state = vector_state(SUM_NAME, SUM_COLOR, angle, magnitude, phase, tip.arg());
            state.tip = (tip.re, tip.im);
            state.projection = tip.re;
            state.label = value_label(SUM_NAME, tip.re);
            Some(state)
        } else {
            None
        };

        Frame {
            angle,
            vectors,
            sum,
        }
    }
}

fn vector_state(
    name: &str,
    color: &str,
    base_angle: f64,
    magnitude: f64,
    phase: f64,
    total_angle: f64,
) -> VectorState {
    let x = magnitude * total_angle.cos();
    let y = magnitude * total_angle.sin();
    let shown = display_angle(base_angle);
    VectorState {
        name: name.to_string(),
        color: color.to_string(),
        angle: total_angle,
        magnitude,
        tip: (x, y),
        projection: x,
        label: value_label(name, x),
        waveform: waveform(magnitude, phase),
        time_point: (shown, magnitude * (shown + phase).cos()),
    }
}

/// `"U₀: 80V (Real)"`
pub fn value_label(name: &str, value: f64) -> String {
    format!("{}: {}V (Real)", name, value.round() as i64)
}

/// Position of the current time on the waveform's horizontal axis.
pub fn display_angle(angle: f64) -> f64 {
    angle.rem_euclid(WAVEFORM_SPAN)
}

/// Samples `amplitude·cos(θ + phase)` for θ evenly spaced over the span.
pub fn waveform(amplitude: f64, phase: f64) -> Vec<(f64, f64)> {
    let last = (WAVEFORM_SAMPLES - 1) as f64;
    (0..WAVEFORM_SAMPLES)
        .map(|i| {
            let theta = i as f64 / last * WAVEFORM_SPAN;
            (theta, amplitude * (theta + phase).cos())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn starts_paused_with_two_oscillators() {
        let sim = PhasorSimulator::default();
        assert_eq!(sim.state(), RunState::Paused);
        assert_eq!(sim.phasors.len(), 2);
        assert_eq!(sim.phasors[0].amplitude, 80.0);
        assert!(close(sim.phasors[1].phase, PI / 3.0));
    }

    #[test]
    fn paused_frames_do_not_move_time() {
        let mut sim = PhasorSimulator::default();
        sim.frame(0.5);
        assert_eq!(sim.time(), 0.0);
        sim.toggle_running();
        sim.frame(0.25);
        sim.frame(0.25);
        assert!(close(sim.time(), 0.5));
        sim.toggle_running();
        sim.frame(1.0);
        assert!(close(sim.time(), 0.5));
    }

    #[test]
    fn labels_round_projection() {
        assert_eq!(value_label("U₀", 79.6), "U₀: 80V (Real)");
        assert_eq!(value_label("Sum", -0.2), "Sum: 0V (Real)");
    }

    #[test]
    fn waveform_has_fixed_sample_count() {
        let w = waveform(80.0, 0.0);
        assert_eq!(w.len(), WAVEFORM_SAMPLES);
        assert!(close(w[0].1, 80.0));
        assert!(close(w[100].0, WAVEFORM_SPAN));
    }

    #[test]
    fn frequency_clamps_and_steps() {
        let mut sim = PhasorSimulator::new(5.0);
        assert_eq!(sim.frequency(), MAX_FREQUENCY_HZ);
        sim.set_frequency(0.5);
        sim.step_frequency(-10);
        assert!(close(sim.frequency(), MIN_FREQUENCY_HZ));
        sim.step_frequency(3);
        assert!(close(sim.frequency(), 0.4));
    }
}

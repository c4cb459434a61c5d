// File: ./src/epicycle/mod.rs
// Decorative chain of rotating vectors drawing a signature from a fixed
// Fourier coefficient table.
pub mod coefficients;

use num_complex::Complex64;
use std::collections::VecDeque;
use std::f64::consts::TAU;

pub const DEFAULT_TRACE_LEN: usize = 500;
/// One full revolution takes 300 frames.
pub const TIME_STEP: f64 = TAU / 300.0;

pub type Complex = Complex64;

/// One link of the chain: drawn as a circle of `radius` around `center`
/// and a line from `center` to `tip`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Joint {
    pub center: Complex,
    pub tip: Complex,
    pub radius: f64,
}

/// A coefficient paired with its rotation frequency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Term {
    pub coef: Complex,
    pub frequency: i32,
}

#[derive(Debug, Clone)]
pub struct Epicycle {
    terms: Vec<Term>,
    time: f64,
    trace: VecDeque<Complex>,
    trace_cap: usize,
}

impl Default for Epicycle {
    fn default() -> Self {
        Self::new(DEFAULT_TRACE_LEN)
    }
}

impl Epicycle {
    /// Built from the bundled signature table.
    pub fn new(trace_cap: usize) -> Self {
        Self::with_table(
            coefficients::ZERO,
            &coefficients::POSITIVE,
            &coefficients::NEGATIVE,
            trace_cap,
        )
    }

    /// DC term first, then `+k`/`-k` pairs in order of `k`.
    pub fn with_table(
        zero: (f64, f64),
        positive: &[(f64, f64)],
        negative: &[(f64, f64)],
        trace_cap: usize,
    ) -> Self {
        let mut terms = vec![Term {
            coef: Complex::new(zero.0, zero.1),
            frequency: 0,
        }];
        for (i, p) in positive.iter().enumerate() {
            let k = i as i32 + 1;
            terms.push(Term {
                coef: Complex::new(p.0, p.1),
                frequency: k,
            });
            if let Some(n) = negative.get(i) {
                terms.push(Term {
                    coef: Complex::new(n.0, n.1),
                    frequency: -k,
                });
            }
        }
        Self {
            terms,
            time: 0.0,
            trace: VecDeque::with_capacity(trace_cap + 1),
            trace_cap,
        }
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    /// Newest point first.
    pub fn trace(&self) -> impl Iterator<Item = &Complex> {
        self.trace.iter()
    }

    pub fn trace_len(&self) -> usize {
        self.trace.len()
    }

    /// Joints of the chain at the current time, without advancing.
    pub fn chain(&self, scale: f64) -> Vec<Joint> {
        let mut pos = Complex::default();
        self.terms
            .iter()
            .map(|term| {
                let v = term.coef
                    * Complex::from_polar(1.0, self.time * f64::from(term.frequency))
                    * scale;
                let joint = Joint {
                    center: pos,
                    tip: pos + v,
                    radius: v.norm(),
                };
                pos = joint.tip;
                joint
            })
            .collect()
    }

    /// Bounding box (min, max) of the traced path over one revolution at
    /// scale 1, sampled at the animation's own time step.
    pub fn path_extent(&self) -> (Complex, Complex) {
        let mut sampler = Self {
            terms: self.terms.clone(),
            time: 0.0,
            trace: VecDeque::new(),
            trace_cap: 0,
        };
        let mut min = Complex::new(f64::INFINITY, f64::INFINITY);
        let mut max = Complex::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
        let steps = (TAU / TIME_STEP).ceil() as usize;
        for _ in 0..steps {
            let end = sampler.chain(1.0).last().map(|j| j.tip).unwrap_or_default();
            min = Complex::new(min.re.min(end.re), min.im.min(end.im));
            max = Complex::new(max.re.max(end.re), max.im.max(end.im));
            sampler.time += TIME_STEP;
        }
        (min, max)
    }

    /// Computes the chain, records its endpoint and advances the clock.
    ///
    /// Past a full revolution the clock restarts and the trace is dropped.
    pub fn step(&mut self, scale: f64) -> Vec<Joint> {
        let joints = self.chain(scale);
        let end = joints.last().map(|j| j.tip).unwrap_or_default();
        self.trace.push_front(end);
        if self.trace.len() > self.trace_cap {
            self.trace.pop_back();
        }

        self.time += TIME_STEP;
        if self.time > TAU {
            self.time = 0.0;
            self.trace.clear();
        }
        joints
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_harmonic_rotates_its_coefficient() {
        let mut e = Epicycle::with_table((0.0, 0.0), &[(0.0, 1.0)], &[], 10);
        e.step(1.0);
        let joints = e.chain(1.0);
        let expected = Complex::new(0.0, 1.0) * Complex::from_polar(1.0, TIME_STEP);
        assert!((joints[1].tip - expected).norm() < 1e-12);
    }

    #[test]
    fn terms_alternate_after_dc() {
        let e = Epicycle::default();
        let freqs: Vec<i32> = e.terms().iter().take(5).map(|t| t.frequency).collect();
        assert_eq!(freqs, vec![0, 1, -1, 2, -2]);
        assert_eq!(e.terms().len(), 1 + 2 * coefficients::POSITIVE.len());
    }

    #[test]
    fn dc_only_chain_is_static() {
        let mut e = Epicycle::with_table((3.0, 4.0), &[], &[], 10);
        let joints = e.step(2.0);
        assert_eq!(joints.len(), 1);
        assert_eq!(joints[0].tip, Complex::new(6.0, 8.0));
        assert!((joints[0].radius - 10.0).abs() < 1e-9);
    }
}

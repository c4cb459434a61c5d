// File: tests/epicycle_tests.rs
use coursedeck::epicycle::{Complex, DEFAULT_TRACE_LEN, Epicycle, TIME_STEP, coefficients};
use std::f64::consts::TAU;

#[test]
fn test_bundled_table_shape() {
    assert_eq!(coefficients::POSITIVE.len(), 128);
    assert_eq!(coefficients::NEGATIVE.len(), 128);
    let e = Epicycle::default();
    assert_eq!(e.terms().len(), 257);
    assert_eq!(e.terms()[0].frequency, 0);
}

#[test]
fn test_chain_starts_at_origin_and_links_up() {
    let e = Epicycle::default();
    let joints = e.chain(1.0);
    assert_eq!(joints.len(), e.terms().len());
    assert_eq!(joints[0].center, Complex::default());
    for pair in joints.windows(2) {
        assert_eq!(pair[0].tip, pair[1].center);
    }
}

#[test]
fn test_trace_is_capped() {
    let mut e = Epicycle::new(20);
    for _ in 0..50 {
        e.step(1.0);
    }
    assert_eq!(e.trace_len(), 20);
}

#[test]
fn test_newest_point_first() {
    let mut e = Epicycle::with_table((0.0, 0.0), &[(1.0, 0.0)], &[], 10);
    e.step(1.0);
    e.step(1.0);
    let points: Vec<Complex> = e.trace().copied().collect();
    // At t=0 the single term points along +x.
    assert!((points[1].re - 1.0).abs() < 1e-12);
    assert!((points[0].re - TIME_STEP.cos()).abs() < 1e-12);
    assert!((points[0].im - TIME_STEP.sin()).abs() < 1e-12);
}

#[test]
fn test_full_revolution_resets_clock_and_trace() {
    let mut e = Epicycle::new(DEFAULT_TRACE_LEN);
    let mut wrapped = false;
    for _ in 0..400 {
        let before = e.time();
        e.step(1.0);
        if e.time() < before {
            wrapped = true;
            assert_eq!(e.time(), 0.0);
            assert_eq!(e.trace_len(), 0);
            break;
        }
        assert!(e.time() <= TAU);
    }
    assert!(wrapped, "One revolution takes about 300 frames");
}

#[test]
fn test_scale_is_linear() {
    let e = Epicycle::default();
    let one = e.chain(1.0).last().unwrap().tip;
    let two = e.chain(2.0).last().unwrap().tip;
    assert!((two.re - 2.0 * one.re).abs() < 1e-6);
    assert!((two.im - 2.0 * one.im).abs() < 1e-6);
}

#[test]
fn test_path_extent_contains_start() {
    let e = Epicycle::default();
    let (min, max) = e.path_extent();
    let start = e.chain(1.0).last().unwrap().tip;
    assert!(min.re <= start.re && start.re <= max.re);
    assert!(min.im <= start.im && start.im <= max.im);
    assert!(max.re > min.re);
}

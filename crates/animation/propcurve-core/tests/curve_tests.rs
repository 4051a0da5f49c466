use propcurve_core::{AnimationCurve, Keyframe, Sample, WrapMode};

fn approx(a: f32, b: f32, eps: f32) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

fn mk_curve(keys: &[(f32, f32)], mode: WrapMode) -> AnimationCurve {
    let mut curve = AnimationCurve::new().with_wrap_mode(mode);
    for &k in keys {
        curve.add_keyframe(k);
    }
    curve
}

#[test]
fn add_keyframe_keeps_time_order() {
    let mut curve = AnimationCurve::new();
    assert_eq!(curve.add_keyframe((0.0, 0.0)), 0);
    assert_eq!(curve.add_keyframe((1.0, 1.0)), 1);
    assert_eq!(curve.keyframes()[0].time, 0.0);
    assert_eq!(curve.keyframes()[1].time, 1.0);

    assert_eq!(curve.add_keyframe((0.5, 0.75)), 1);
    let times: Vec<f32> = curve.keyframes().iter().map(|k| k.time).collect();
    assert_eq!(times, vec![0.0, 0.5, 1.0]);
}

#[test]
fn sort_invariant_holds_for_arbitrary_insertions() {
    let mut curve = AnimationCurve::new();
    // Deterministic scramble, including repeated times.
    let mut seed = 17u32;
    for _ in 0..200 {
        seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        let t = ((seed >> 16) % 50) as f32 * 0.5;
        curve.add_keyframe(Keyframe::new(t, t * 2.0));
    }
    assert_eq!(curve.len(), 200);
    for pair in curve.keyframes().windows(2) {
        assert!(pair[0].time <= pair[1].time, "{:?} > {:?}", pair[0], pair[1]);
    }
}

#[test]
fn basic_curve_scenario() {
    let curve = mk_curve(&[(0.0, 0.0), (500.0, 0.75), (1000.0, 1.0)], WrapMode::Once);

    let s = curve.evaluate(0.0, None);
    assert_eq!(s.index, Some(0));
    approx(s.value, 0.0, 1e-6);

    let s = curve.evaluate(500.0, None);
    assert_eq!(s.index, Some(1));
    approx(s.value, 0.75, 1e-6);

    let s = curve.evaluate(1000.0, None);
    assert_eq!(s.index, Some(2));
    approx(s.value, 1.0, 1e-6);

    let s = curve.evaluate(100.0, None);
    assert_eq!(s.index, Some(0));
    approx(s.value, 0.15, 1e-6);

    let s = curve.evaluate(10000.0, None);
    assert_eq!(s.index, Some(2));
    approx(s.value, 1.0, 1e-6);
}

#[test]
fn empty_curve_yields_empty_sample() {
    let curve = AnimationCurve::new();
    for t in [-10.0, 0.0, 1.0, 1e9] {
        assert_eq!(curve.evaluate(t, None), Sample::EMPTY);
        assert_eq!(curve.evaluate(t, Some(0)), Sample::EMPTY);
    }
    assert_eq!(Sample::EMPTY.index, None);
    assert_eq!(Sample::EMPTY.value, 0.0);
}

#[test]
fn single_keyframe_holds_its_value() {
    let curve = mk_curve(&[(100.0, 1.0)], WrapMode::Once);
    for t in [0.0, 100.0, 200.0] {
        let s = curve.evaluate(t, None);
        assert_eq!(s.index, Some(0), "t={t}");
        assert_eq!(s.value, 1.0, "t={t}");
    }
}

#[test]
fn once_clamps_outside_domain() {
    let curve = mk_curve(&[(10.0, 2.0), (20.0, 4.0), (30.0, -1.0)], WrapMode::Once);
    for t in [-100.0, -0.5, 0.0, 5.0, 10.0] {
        assert_eq!(curve.evaluate(t, None).value, 2.0, "t={t}");
    }
    for t in [30.0, 30.5, 1e6] {
        assert_eq!(curve.evaluate(t, None).value, -1.0, "t={t}");
    }
}

#[test]
fn hinted_sampling_advances_linearly() {
    let curve = mk_curve(&[(0.0, 0.0), (50.0, 0.5), (100.0, 1.0)], WrapMode::Once);
    let mut hint = None;
    for t in 0..=100 {
        let s = curve.evaluate(t as f32, hint);
        approx(s.value, t as f32 / 100.0, 1e-6);
        hint = s.index;
    }
}

#[test]
fn loop_wraps_time() {
    let curve = mk_curve(&[(0.0, 0.0), (50.0, 0.5), (100.0, 1.0)], WrapMode::Loop);
    let mut hint = None;
    for t in 0..=500 {
        let s = curve.evaluate(t as f32, hint);
        approx(s.value, (t % 100) as f32 / 100.0, 1e-5);
        hint = s.index;
    }
}

#[test]
fn loop_matches_modulo_of_last_time() {
    let curve = mk_curve(&[(0.0, 1.0), (40.0, 3.0), (100.0, 0.0)], WrapMode::Loop);
    assert_eq!(curve.evaluate(150.0, None), curve.evaluate(50.0, None));
    for i in 0..300 {
        let t = i as f32 * 1.7;
        let a = curve.evaluate(t, None);
        let b = curve.evaluate(t % 100.0, None);
        assert_eq!(a.index, b.index, "t={t}");
        approx(a.value, b.value, 1e-6);
    }
}

#[test]
fn loop_period_is_last_keyframe_time() {
    // First key is not at 0: the period is still last.time (100), and [0, 20) holds
    // the first value.
    let curve = mk_curve(&[(20.0, 5.0), (100.0, 9.0)], WrapMode::Loop);
    assert_eq!(curve.evaluate(110.0, None).value, 5.0);
    // 160 -> 60: halfway between (20, 5) and (100, 9)
    approx(curve.evaluate(160.0, None).value, 7.0, 1e-5);
}

#[test]
fn hints_never_change_results() {
    let curve = mk_curve(
        &[
            (0.0, 0.0),
            (3.0, 1.0),
            (3.0, 2.0),
            (7.0, -1.0),
            (12.0, 4.0),
            (13.0, 4.5),
            (30.0, 0.0),
        ],
        WrapMode::Once,
    );
    let mut hint = None;
    let mut t = -2.0;
    while t < 35.0 {
        let hinted = curve.evaluate(t, hint);
        let plain = curve.evaluate(t, None);
        assert_eq!(hinted, plain, "t={t}");
        hint = hinted.index;
        t += 0.37;
    }

    // Arbitrary (stale) hints too.
    for h in 0..10 {
        for step in 0..40 {
            let t = step as f32;
            assert_eq!(curve.evaluate(t, Some(h)), curve.evaluate(t, None), "t={t} h={h}");
        }
    }
}

#[test]
fn tick_domain_matches_float_domain() {
    let curve = mk_curve(&[(0.0, 0.0), (500.0, 0.75), (1000.0, 1.0)], WrapMode::Once);
    for ticks in [0u32, 1, 100, 499, 500, 999, 1000, 5000] {
        assert_eq!(
            curve.evaluate_ticks(ticks, None),
            curve.evaluate(ticks as f32, None),
            "ticks={ticks}"
        );
    }
}

#[test]
fn set_keyframes_sorts_stably() {
    let mut curve = AnimationCurve::new();
    curve.set_keyframes(vec![
        Keyframe::new(2.0, 20.0),
        Keyframe::new(1.0, 10.0),
        Keyframe::new(2.0, 21.0),
        Keyframe::new(0.0, 0.0),
    ]);
    let values: Vec<f32> = curve.keyframes().iter().map(|k| k.value).collect();
    assert_eq!(values, vec![0.0, 10.0, 20.0, 21.0]);
    assert_eq!(curve.duration(), 2.0);
}

#[test]
fn curve_json_round_trip_preserves_order_and_mode() {
    let curve = mk_curve(&[(0.0, 0.0), (50.0, 0.5), (100.0, 1.0)], WrapMode::Loop);
    let json = serde_json::to_string(&curve).expect("serialize curve");
    let back: AnimationCurve = serde_json::from_str(&json).expect("deserialize curve");
    assert_eq!(back, curve);
    assert_eq!(back.keyframes()[1].time, 50.0);
}

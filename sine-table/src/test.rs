use pretty_assertions::assert_eq;

use crate::{
    ParamsError, SINE_4096X32, SINE_512X16, TableParams, decode_word, encode_word, generate,
    sine_samples,
};

#[test]
fn sample_count_matches_depth() {
    for depth in [1, 2, 16, 512, 4096] {
        let params = TableParams::new(depth, 16, 16).unwrap();
        assert_eq!(sine_samples(&params).len(), depth);
    }
}

#[test]
fn first_sample_is_zero() {
    for params in [SINE_512X16, SINE_4096X32, TableParams::new(7, 8, 2).unwrap()] {
        assert_eq!(sine_samples(&params)[0], 0);
    }
}

#[test]
fn variant_a_quarter_period_spot_values() {
    let samples = sine_samples(&SINE_512X16);

    // 32767 / 16 = 2047.9375, truncated toward zero on both half-cycles.
    assert_eq!(samples[128], 2047);
    assert_eq!(samples[384], -2047);

    assert_eq!(encode_word(&SINE_512X16, samples[0]), 0);
    assert_eq!(encode_word(&SINE_512X16, samples[128]), 2047);
    assert_eq!(encode_word(&SINE_512X16, samples[384]), 63489);
}

#[test]
fn variant_b_quarter_period_spot_values() {
    let samples = sine_samples(&SINE_4096X32);

    // 2147483647 / 64 = 33554431.98..., truncated.
    assert_eq!(samples[1024], 33554431);
    assert_eq!(samples[3072], -33554431);

    assert_eq!(encode_word(&SINE_4096X32, samples[3072]), (1 << 32) - 33554431);
}

#[test]
fn half_period_antisymmetry_within_one_unit() {
    let samples = sine_samples(&SINE_512X16);
    let half = SINE_512X16.depth() / 2;

    for k in 0..half {
        let diff = (samples[half + k] + samples[k]).abs();
        assert!(diff <= 1, "index {k}: {} vs {}", samples[half + k], samples[k]);
    }
}

#[test]
fn samples_stay_within_peak_magnitude() {
    for params in [SINE_512X16, SINE_4096X32] {
        let peak = params.peak_magnitude();
        for sample in sine_samples(&params) {
            assert!(sample.abs() <= peak);
        }
    }
}

#[test]
fn encode_wraps_negatives_into_width() {
    let params = TableParams::new(4, 16, 16).unwrap();

    assert_eq!(encode_word(&params, 0), 0);
    assert_eq!(encode_word(&params, 2047), 2047);
    assert_eq!(encode_word(&params, -1), 65535);
    assert_eq!(encode_word(&params, -2047), 63489);
}

#[test]
fn decode_is_inverse_of_encode() {
    let params = TableParams::new(4, 16, 16).unwrap();

    for sample in [-2047, -1, 0, 1, 2047] {
        assert_eq!(decode_word(&params, encode_word(&params, sample)), sample);
    }
}

#[test]
fn shipped_variants_pass_validation() {
    assert_eq!(TableParams::new(512, 16, 16).unwrap(), SINE_512X16);
    assert_eq!(TableParams::new(4096, 32, 64).unwrap(), SINE_4096X32);
}

#[test]
fn full_scale_derives_from_amplitude_width() {
    assert_eq!(SINE_512X16.full_scale(), 32767.0);
    assert_eq!(SINE_4096X32.full_scale(), 2147483647.0);
    assert_eq!(SINE_512X16.peak_magnitude(), 2047);
    assert_eq!(SINE_4096X32.peak_magnitude(), 33554431);
}

#[test]
fn rejects_zero_depth() {
    assert_eq!(TableParams::new(0, 16, 16).unwrap_err(), ParamsError::ZeroDepth);
}

#[test]
fn rejects_out_of_range_widths() {
    assert_eq!(
        TableParams::new(512, 1, 16).unwrap_err(),
        ParamsError::UnsupportedWidth(1)
    );
    assert_eq!(
        TableParams::new(512, 64, 16).unwrap_err(),
        ParamsError::UnsupportedWidth(64)
    );
}

#[test]
fn rejects_zero_divisor() {
    assert_eq!(TableParams::new(512, 16, 0).unwrap_err(), ParamsError::ZeroDivisor);
}

#[test]
fn rejects_amplitude_too_wide_for_entries() {
    // 32-bit full scale into 16-bit entries: peak 2147483647/16 overflows.
    let err = TableParams::with_amplitude_width(512, 16, 32, 16).unwrap_err();
    assert_eq!(
        err,
        ParamsError::AmplitudeOverflow {
            peak: 134217727,
            width: 16,
        }
    );
}

#[test]
fn narrow_amplitude_into_wide_entries_is_fine() {
    // The reverse direction just wastes dynamic range, which is allowed.
    let params = TableParams::with_amplitude_width(512, 32, 16, 16).unwrap();
    assert_eq!(params.peak_magnitude(), 2047);
}

#[test]
fn generate_produces_in_range_document() {
    let params = TableParams::new(64, 8, 4).unwrap();
    let doc = generate(&params).unwrap();

    assert_eq!(doc.width(), 8);
    assert_eq!(doc.depth(), 64);
    for &word in doc.words() {
        assert!(word < 1 << 8);
    }
}

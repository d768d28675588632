//! Quantized sine-wave table generation.
//!
//! Samples one full cycle of `sin(2πi/N)`, scales it to a fraction of the
//! full-scale signed amplitude (deliberate headroom below the entry
//! width's dynamic range), truncates toward zero, and wraps negative
//! samples into the unsigned range via two's complement.

use std::f64::consts::PI;

use mif::{MifDocument, MifError};
use thiserror::Error;

/// 512 entries, 16-bit, peak at 1/16 of full scale. Written to `sine512.mif`.
pub const SINE_512X16: TableParams = TableParams {
    depth: 512,
    width: 16,
    amplitude_width: 16,
    amplitude_divisor: 16,
};

/// 4096 entries, 32-bit, peak at 1/64 of full scale. Written to `sine4096.mif`.
pub const SINE_4096X32: TableParams = TableParams {
    depth: 4096,
    width: 32,
    amplitude_width: 32,
    amplitude_divisor: 64,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParamsError {
    #[error("table depth must be positive")]
    ZeroDepth,

    #[error("entry width {0} out of supported range (2..=63 bits)")]
    UnsupportedWidth(u32),

    #[error("amplitude divisor must be positive")]
    ZeroDivisor,

    #[error("peak sample magnitude {peak} does not fit signed {width}-bit entries")]
    AmplitudeOverflow { peak: i64, width: u32 },
}

/// Validated generation parameters.
///
/// The unscaled sine peak is the full-scale signed amplitude
/// `2^amplitude_width / 2 - 1`; `amplitude_divisor` leaves headroom below
/// it, so the stored waveform peaks at `full_scale / divisor`. The
/// constructor rejects any combination whose peak would not fit the entry
/// width, so wraparound encoding can never silently overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableParams {
    depth: usize,
    width: u32,
    amplitude_width: u32,
    amplitude_divisor: u32,
}

impl TableParams {
    /// Parameters whose amplitude derives from the entry width itself.
    pub fn new(depth: usize, width: u32, amplitude_divisor: u32) -> Result<Self, ParamsError> {
        Self::with_amplitude_width(depth, width, width, amplitude_divisor)
    }

    /// Parameters with the full-scale amplitude decoupled from the entry
    /// width. Fails fast when the amplitude is too large for the entries,
    /// e.g. a 32-bit full scale feeding a 16-bit table.
    pub fn with_amplitude_width(
        depth: usize,
        width: u32,
        amplitude_width: u32,
        amplitude_divisor: u32,
    ) -> Result<Self, ParamsError> {
        if depth == 0 {
            return Err(ParamsError::ZeroDepth);
        }
        if !(2..=63).contains(&width) {
            return Err(ParamsError::UnsupportedWidth(width));
        }
        if !(2..=63).contains(&amplitude_width) {
            return Err(ParamsError::UnsupportedWidth(amplitude_width));
        }
        if amplitude_divisor == 0 {
            return Err(ParamsError::ZeroDivisor);
        }

        let params = Self {
            depth,
            width,
            amplitude_width,
            amplitude_divisor,
        };
        let max_signed = (1i64 << (width - 1)) - 1;
        let peak = params.peak_magnitude();
        if peak > max_signed {
            return Err(ParamsError::AmplitudeOverflow { peak, width });
        }
        Ok(params)
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn amplitude_divisor(&self) -> u32 {
        self.amplitude_divisor
    }

    /// Unscaled sine peak: the largest signed magnitude at the amplitude
    /// width, `2^amplitude_width / 2 - 1`.
    pub fn full_scale(&self) -> f64 {
        ((1u64 << self.amplitude_width) / 2 - 1) as f64
    }

    /// Truncated peak sample magnitude after headroom scaling.
    pub fn peak_magnitude(&self) -> i64 {
        (self.full_scale() * (1.0 / self.amplitude_divisor as f64)).trunc() as i64
    }
}

/// One cycle of the quantized sine wave, `depth` samples.
///
/// Fractional parts are discarded, not rounded; truncation toward zero is
/// the quantization policy and the table values depend on it bit-for-bit.
pub fn sine_samples(params: &TableParams) -> Vec<i64> {
    let depth = params.depth() as f64;
    let full_scale = params.full_scale();
    let divisor = params.amplitude_divisor() as f64;

    (0..params.depth())
        .map(|i| {
            let phase = 2.0 * PI * (i as f64) / depth;
            (full_scale * (phase.sin() / divisor)).trunc() as i64
        })
        .collect()
}

/// Two's-complement wraparound into the unsigned range of the entry width.
///
/// Negative samples become `sample + 2^width`; non-negative samples pass
/// through. Valid params guarantee `|sample| < 2^(width-1)`, so the result
/// always fits `width` bits.
pub fn encode_word(params: &TableParams, sample: i64) -> u64 {
    if sample < 0 {
        ((1i128 << params.width()) + i128::from(sample)) as u64
    } else {
        sample as u64
    }
}

/// Inverse of [`encode_word`]: recover the signed sample from a stored word.
pub fn decode_word(params: &TableParams, word: u64) -> i64 {
    let half = 1u64 << (params.width() - 1);
    if word >= half {
        (i128::from(word) - (1i128 << params.width())) as i64
    } else {
        word as i64
    }
}

/// Build the complete output document for `params`.
pub fn generate(params: &TableParams) -> Result<MifDocument, MifError> {
    let words = sine_samples(params)
        .into_iter()
        .map(|sample| encode_word(params, sample))
        .collect();
    MifDocument::new(params.width(), words)
}

#[cfg(test)]
mod test;

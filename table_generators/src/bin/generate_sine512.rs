//! Writes `sine512.mif`: 512 x 16-bit sine table at 1/16 amplitude.

use std::path::Path;
use std::process::ExitCode;

use mif::MifError;
use sine_table::{SINE_512X16, generate, sine_samples};
use tracing_subscriber::EnvFilter;

const OUTPUT_PATH: &str = "sine512.mif";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("sine512 generation failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), MifError> {
    let params = SINE_512X16;
    tracing::info!(
        depth = params.depth(),
        width = params.width(),
        divisor = params.amplitude_divisor(),
        "generating sine table"
    );

    let samples = sine_samples(&params);
    let quarter = params.depth() / 4;
    tracing::info!("sample at 0° (i=0): {} (expected 0)", samples[0]);
    tracing::info!(
        "sample at 90° (i={quarter}): {} (expected {})",
        samples[quarter],
        params.peak_magnitude()
    );
    tracing::info!(
        "sample at 180° (i={}): {} (expected ~0)",
        2 * quarter,
        samples[2 * quarter]
    );
    tracing::info!(
        "sample at 270° (i={}): {} (expected -{})",
        3 * quarter,
        samples[3 * quarter],
        params.peak_magnitude()
    );

    let document = generate(&params)?;
    document.write_to(Path::new(OUTPUT_PATH))?;
    tracing::info!("wrote {OUTPUT_PATH}");
    Ok(())
}

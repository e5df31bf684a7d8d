//! Conversion time must grow roughly linearly with the input.
//!
//! A 16x larger input may take up to 64x longer. Quadratic behaviour would take
//! around 256x.

use std::time::{Duration, Instant};

use mdlite_converters_html::{Error, convert};

const LINE: &str = "Простой текст с _курсивом_ и __жирным__ форматированием.";
const MAX_RATIO: f64 = 64.0;

/// Best of three runs.
fn time_conversion(input: &str) -> Result<Duration, Error> {
    let mut best = Duration::MAX;
    for _ in 0..3 {
        let now = Instant::now();
        let output = convert(input)?;
        best = best.min(now.elapsed());
        assert!(!output.is_empty());
    }
    Ok(best)
}

fn assert_near_linear(small: &str, large: &str) -> Result<(), Error> {
    let small_time = time_conversion(small)?.max(Duration::from_micros(100));
    let large_time = time_conversion(large)?;
    let ratio = large_time.as_secs_f64() / small_time.as_secs_f64();
    assert!(
        ratio < MAX_RATIO,
        "conversion of a {}x larger input took {ratio:.1}x longer ({small_time:?} vs {large_time:?})",
        large.len() / small.len()
    );
    Ok(())
}

#[test]
fn many_lines_scale_linearly() -> Result<(), Error> {
    let small = vec![LINE; 1_000].join("\n");
    let large = vec![LINE; 16_000].join("\n");
    assert_near_linear(&small, &large)
}

#[test]
fn long_line_of_unclosed_markers_scales_linearly() -> Result<(), Error> {
    let small = "__a _b ".repeat(2_000);
    let large = "__a _b ".repeat(32_000);
    assert_near_linear(&small, &large)
}

#[test]
fn long_line_of_abandoned_italics_scales_linearly() -> Result<(), Error> {
    let small = "_a __b_ ".repeat(2_000);
    let large = "_a __b_ ".repeat(32_000);
    assert_near_linear(&small, &large)
}

/// FFT size of the shared analyser node.
pub const FFT_SIZE: usize = 256;
/// Analyser smoothing time constant.
pub const SMOOTHING: f64 = 0.8;
/// Number of bars drawn by the player.
pub const BAR_COUNT: usize = 30;
/// Floor height, in percent, so silence still draws a sliver.
pub const MIN_BAR_HEIGHT: f32 = 10.0;

/// Anything that can fill a buffer with byte-scaled frequency magnitudes,
/// in the same shape as `AnalyserNode.getByteFrequencyData`.
pub trait FrequencySource {
    fn bin_count(&self) -> usize;

    fn byte_frequency_data(&mut self, out: &mut [u8]);
}

/// Reduce a frequency frame to [`BAR_COUNT`] bar heights in `[MIN_BAR_HEIGHT, 100]`.
///
/// Bar `i` takes the single bin at `floor(i / BAR_COUNT * bins.len())`
/// (nearest-bin decimation, no averaging).
pub fn decimate_bars(bins: &[u8]) -> [f32; BAR_COUNT] {
    let mut bars = [MIN_BAR_HEIGHT; BAR_COUNT];
    if bins.is_empty() {
        return bars;
    }
    for (i, bar) in bars.iter_mut().enumerate() {
        let idx = i * bins.len() / BAR_COUNT;
        let value = bins[idx] as f32;
        *bar = (value / 255.0 * 100.0).max(MIN_BAR_HEIGHT);
    }
    bars
}

/// Pull one frame from `source` and decimate it. `scratch` is resized to the
/// source's bin count and reused across frames.
pub fn sample_bars<S: FrequencySource + ?Sized>(source: &mut S, scratch: &mut Vec<u8>) -> [f32; BAR_COUNT] {
    scratch.resize(source.bin_count(), 0);
    source.byte_frequency_data(scratch);
    decimate_bars(scratch)
}

/// Static bars shown before anything plays.
pub fn idle_bars() -> [f32; BAR_COUNT] {
    let mut bars = [0.0; BAR_COUNT];
    for (i, bar) in bars.iter_mut().enumerate() {
        let phase = i as f32 * 0.7;
        *bar = 15.0 + 15.0 * (0.5 + 0.5 * phase.sin());
    }
    bars
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedBins(Vec<u8>);

    impl FrequencySource for FixedBins {
        fn bin_count(&self) -> usize {
            self.0.len()
        }

        fn byte_frequency_data(&mut self, out: &mut [u8]) {
            out.copy_from_slice(&self.0);
        }
    }

    #[test]
    fn test_bar_count_is_fixed() {
        for bins in [0usize, 1, 7, 29, 30, 31, 128, 1024, 16384] {
            let frame: Vec<u8> = (0..bins).map(|i| (i % 256) as u8).collect();
            assert_eq!(decimate_bars(&frame).len(), BAR_COUNT, "bins={bins}");
        }
    }

    #[test]
    fn test_nearest_bin_sampling() {
        // 128 bins (fftSize 256): bar i reads bin floor(i * 128 / 30)
        let frame: Vec<u8> = (0..128).map(|i| (i * 2) as u8).collect();
        let bars = decimate_bars(&frame);
        for (i, bar) in bars.iter().enumerate() {
            let idx = i * 128 / 30;
            let expected = (frame[idx] as f32 / 255.0 * 100.0).max(MIN_BAR_HEIGHT);
            assert!((bar - expected).abs() < 1e-4, "bar {i}: {bar} vs {expected}");
        }
    }

    #[test]
    fn test_silence_keeps_floor_and_full_scale_hits_top() {
        let silent = decimate_bars(&[0u8; 128]);
        assert!(silent.iter().all(|&b| b == MIN_BAR_HEIGHT));
        let loud = decimate_bars(&[255u8; 128]);
        assert!(loud.iter().all(|&b| (b - 100.0).abs() < 1e-4));
    }

    #[test]
    fn test_sample_bars_resizes_scratch() {
        let mut source = FixedBins(vec![128; 64]);
        let mut scratch = Vec::new();
        let bars = sample_bars(&mut source, &mut scratch);
        assert_eq!(scratch.len(), 64);
        assert_eq!(bars.len(), BAR_COUNT);
        assert!(bars[0] > 50.0);
    }

    #[test]
    fn test_idle_bars_in_range() {
        assert!(idle_bars().iter().all(|&b| (15.0..=30.0).contains(&b)));
    }
}

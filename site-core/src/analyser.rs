use crate::visualizer::FrequencySource;
use realfft::num_complex::Complex;
use realfft::{RealFftPlanner, RealToComplex};
use std::sync::Arc;

pub const MIN_DECIBELS: f64 = -100.0;
pub const MAX_DECIBELS: f64 = -30.0;

/// Software counterpart of the Web Audio `AnalyserNode`.
///
/// Keeps the last `fft_size` samples, applies a Blackman window, takes a real
/// FFT, smooths magnitudes over time and maps them to bytes between
/// [`MIN_DECIBELS`] and [`MAX_DECIBELS`], the same pipeline the browser uses
/// for `getByteFrequencyData`.
pub struct SoftwareAnalyser {
    fft_size: usize,
    smoothing: f64,
    fft: Arc<dyn RealToComplex<f32>>,
    window: Vec<f32>,
    history: Vec<f32>,
    input: Vec<f32>,
    spectrum: Vec<Complex<f32>>,
    smoothed: Vec<f64>,
}

fn blackman_window(size: usize) -> Vec<f32> {
    let alpha = 0.16;
    let a0 = (1.0 - alpha) / 2.0;
    let a1 = 0.5;
    let a2 = alpha / 2.0;
    (0..size)
        .map(|n| {
            let x = n as f64 / size as f64;
            let two_pi = 2.0 * std::f64::consts::PI;
            (a0 - a1 * (two_pi * x).cos() + a2 * (2.0 * two_pi * x).cos()) as f32
        })
        .collect()
}

impl SoftwareAnalyser {
    pub fn new(fft_size: usize, smoothing: f64) -> Self {
        let fft_size = fft_size.max(32).next_power_of_two();
        let fft = RealFftPlanner::<f32>::new().plan_fft_forward(fft_size);
        let input = fft.make_input_vec();
        let spectrum = fft.make_output_vec();
        Self {
            fft_size,
            smoothing: smoothing.clamp(0.0, 1.0),
            fft,
            window: blackman_window(fft_size),
            history: vec![0.0; fft_size],
            input,
            spectrum,
            smoothed: vec![0.0; fft_size / 2],
        }
    }

    pub fn fft_size(&self) -> usize {
        self.fft_size
    }

    /// Feed newly decoded samples. Only the most recent `fft_size` are kept.
    pub fn push_samples(&mut self, samples: &[f32]) {
        if samples.len() >= self.fft_size {
            self.history
                .copy_from_slice(&samples[samples.len() - self.fft_size..]);
            return;
        }
        self.history.rotate_left(samples.len());
        let start = self.fft_size - samples.len();
        self.history[start..].copy_from_slice(samples);
    }

    fn analyse(&mut self) {
        for (inp, (&s, &w)) in self
            .input
            .iter_mut()
            .zip(self.history.iter().zip(self.window.iter()))
        {
            *inp = s * w;
        }
        if let Err(e) = self.fft.process(&mut self.input, &mut self.spectrum) {
            log::warn!("software analyser FFT failed: {e}");
            self.spectrum.iter_mut().for_each(|c| *c = Complex::new(0.0, 0.0));
        }
        let scale = 1.0 / self.fft_size as f64;
        let tau = self.smoothing;
        for (smoothed, c) in self.smoothed.iter_mut().zip(self.spectrum.iter()) {
            let magnitude = c.norm() as f64 * scale;
            *smoothed = tau * *smoothed + (1.0 - tau) * magnitude;
        }
    }
}

fn magnitude_to_byte(magnitude: f64) -> u8 {
    if magnitude <= 0.0 {
        return 0;
    }
    let db = 20.0 * magnitude.log10();
    let scaled = 255.0 / (MAX_DECIBELS - MIN_DECIBELS) * (db - MIN_DECIBELS);
    scaled.floor().clamp(0.0, 255.0) as u8
}

impl FrequencySource for SoftwareAnalyser {
    fn bin_count(&self) -> usize {
        self.fft_size / 2
    }

    fn byte_frequency_data(&mut self, out: &mut [u8]) {
        self.analyse();
        for (byte, &m) in out.iter_mut().zip(self.smoothed.iter()) {
            *byte = magnitude_to_byte(m);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visualizer::{sample_bars, BAR_COUNT, FFT_SIZE, MIN_BAR_HEIGHT, SMOOTHING};

    fn tone(freq: f64, sample_rate: f64, len: usize) -> Vec<f32> {
        (0..len)
            .map(|i| (2.0 * std::f64::consts::PI * freq * i as f64 / sample_rate).sin() as f32)
            .collect()
    }

    #[test]
    fn test_bin_count_is_half_fft_size() {
        let analyser = SoftwareAnalyser::new(FFT_SIZE, SMOOTHING);
        assert_eq!(analyser.bin_count(), 128);
    }

    #[test]
    fn test_silence_reads_zero() {
        let mut analyser = SoftwareAnalyser::new(FFT_SIZE, SMOOTHING);
        analyser.push_samples(&[0.0; 512]);
        let mut bins = vec![0u8; analyser.bin_count()];
        analyser.byte_frequency_data(&mut bins);
        assert!(bins.iter().all(|&b| b == 0));
        let mut scratch = Vec::new();
        let bars = sample_bars(&mut analyser, &mut scratch);
        assert!(bars.iter().all(|&b| b == MIN_BAR_HEIGHT));
    }

    #[test]
    fn test_tone_peaks_in_expected_bin() {
        let sample_rate = 44_100.0;
        // Bin 16 of a 256-point FFT at 44.1 kHz
        let freq = 16.0 * sample_rate / FFT_SIZE as f64;
        let mut analyser = SoftwareAnalyser::new(FFT_SIZE, 0.0);
        analyser.push_samples(&tone(freq, sample_rate, 1024));
        let mut bins = vec![0u8; analyser.bin_count()];
        analyser.byte_frequency_data(&mut bins);
        let peak = *bins.iter().max().unwrap();
        assert_eq!(bins[16], peak);
        assert!(bins[16] > 200);
        assert!(bins[60] < bins[16] / 2, "far bin {}", bins[60]);
    }

    #[test]
    fn test_smoothing_decays_gradually() {
        let mut analyser = SoftwareAnalyser::new(FFT_SIZE, SMOOTHING);
        let freq = 16.0 * 44_100.0 / FFT_SIZE as f64;
        analyser.push_samples(&tone(freq, 44_100.0, 256));
        let mut bins = vec![0u8; analyser.bin_count()];
        for _ in 0..20 {
            analyser.byte_frequency_data(&mut bins);
        }
        let loud = bins[16];
        analyser.push_samples(&[0.0; 256]);
        analyser.byte_frequency_data(&mut bins);
        assert!(bins[16] > 0 && bins[16] <= loud);
    }

    #[test]
    fn test_bars_from_tone_have_fixed_length() {
        let mut analyser = SoftwareAnalyser::new(2048, SMOOTHING);
        analyser.push_samples(&tone(1000.0, 48_000.0, 4096));
        let mut scratch = Vec::new();
        assert_eq!(sample_bars(&mut analyser, &mut scratch).len(), BAR_COUNT);
        assert_eq!(scratch.len(), 1024);
    }
}

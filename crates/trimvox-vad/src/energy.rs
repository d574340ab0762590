/// Per-window squared-energy statistics.
///
/// Squaring makes the magnitude-based threshold indifferent to sign;
/// everything downstream works on these three numbers only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

impl EnergyStats {
    /// Single pass over the window: square each sample and track the
    /// minimum, maximum, and running sum of the squared values.
    pub fn analyze(window: &[i16]) -> Self {
        if window.is_empty() {
            return Self {
                min: 0.0,
                max: 0.0,
                mean: 0.0,
            };
        }

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0f64;

        for &sample in window {
            let s = sample as f64;
            let squared = s * s;
            min = min.min(squared);
            max = max.max(squared);
            sum += squared;
        }

        Self {
            min,
            max,
            mean: sum / window.len() as f64,
        }
    }

    /// Spread of squared energies within the window.
    pub fn spread(&self) -> f64 {
        self.max - self.min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_zero_window_has_zero_stats() {
        let stats = EnergyStats::analyze(&[0i16; 160]);
        assert_eq!(stats.min, 0.0);
        assert_eq!(stats.max, 0.0);
        assert_eq!(stats.mean, 0.0);
    }

    #[test]
    fn constant_amplitude_window_collapses_spread() {
        let stats = EnergyStats::analyze(&[1000i16; 160]);
        assert_eq!(stats.min, 1_000_000.0);
        assert_eq!(stats.max, 1_000_000.0);
        assert_eq!(stats.mean, 1_000_000.0);
        assert_eq!(stats.spread(), 0.0);
    }

    #[test]
    fn sign_does_not_matter() {
        let positive = EnergyStats::analyze(&[1000i16; 160]);
        let alternating: Vec<i16> = (0..160)
            .map(|i| if i % 2 == 0 { 1000 } else { -1000 })
            .collect();
        let mixed = EnergyStats::analyze(&alternating);
        assert_eq!(positive, mixed);
    }

    #[test]
    fn mixed_amplitudes() {
        let mut window = vec![100i16; 80];
        window.extend(vec![1000i16; 80]);
        let stats = EnergyStats::analyze(&window);
        assert_eq!(stats.min, 10_000.0);
        assert_eq!(stats.max, 1_000_000.0);
        assert_eq!(stats.mean, (10_000.0 + 1_000_000.0) / 2.0);
    }

    #[test]
    fn empty_window_is_all_zero() {
        let stats = EnergyStats::analyze(&[]);
        assert_eq!(stats.mean, 0.0);
        assert_eq!(stats.spread(), 0.0);
    }
}

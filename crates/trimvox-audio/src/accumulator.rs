use std::collections::VecDeque;

use crate::error::AudioError;

/// Buffers raw samples and hands out fixed-size windows for
/// classification, collecting accepted windows on the other side.
///
/// The input queue only shrinks by `step_size` per pull, so configuring
/// `step_size < window_size` yields overlapping windows. Trailing
/// samples shorter than one window are never pulled and never emitted.
pub struct FrameAccumulator {
    buffer: VecDeque<i16>,
    retained: Vec<i16>,
    window_size: usize,
    step_size: usize,
}

impl FrameAccumulator {
    pub fn new(window_size: usize, step_size: usize) -> Self {
        debug_assert!(window_size > 0 && step_size > 0);
        Self {
            buffer: VecDeque::with_capacity(window_size * 4),
            retained: Vec::new(),
            window_size,
            step_size,
        }
    }

    /// Append samples to the tail of the input queue. May be called once
    /// with a whole channel or incrementally.
    pub fn append(&mut self, samples: &[i16]) {
        self.buffer.extend(samples.iter().copied());
    }

    /// True iff a full window is buffered.
    pub fn has_window(&self) -> bool {
        self.buffer.len() >= self.window_size
    }

    /// Copy out the first `window_size` samples and drop `step_size`
    /// samples from the head of the queue.
    pub fn pull_window(&mut self) -> Result<Vec<i16>, AudioError> {
        if !self.has_window() {
            return Err(AudioError::InsufficientData {
                available: self.buffer.len(),
                needed: self.window_size,
            });
        }

        let window: Vec<i16> = self.buffer.iter().take(self.window_size).copied().collect();
        let drop = self.step_size.min(self.buffer.len());
        self.buffer.drain(..drop);
        Ok(window)
    }

    /// Append an accepted window to the output queue, in order.
    pub fn accept(&mut self, window: &[i16]) {
        self.retained.extend_from_slice(window);
    }

    /// Snapshot of the samples accepted so far.
    pub fn output(&self) -> &[i16] {
        &self.retained
    }

    /// Consume the accumulator, yielding the accepted samples.
    pub fn into_output(self) -> Vec<i16> {
        self.retained
    }

    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_window_until_enough_samples() {
        let mut acc = FrameAccumulator::new(160, 160);
        acc.append(&[0i16; 40]);
        assert!(!acc.has_window());
        assert!(matches!(
            acc.pull_window(),
            Err(AudioError::InsufficientData {
                available: 40,
                needed: 160
            })
        ));
    }

    #[test]
    fn incremental_appends_accumulate() {
        let mut acc = FrameAccumulator::new(160, 160);
        acc.append(&[1i16; 100]);
        assert!(!acc.has_window());
        acc.append(&[2i16; 100]);
        assert!(acc.has_window());
        assert_eq!(acc.buffered(), 200);
    }

    #[test]
    fn disjoint_windows_cover_the_stream() {
        let mut acc = FrameAccumulator::new(4, 4);
        acc.append(&[1, 2, 3, 4, 5, 6, 7, 8, 9]);

        assert_eq!(acc.pull_window().unwrap(), vec![1, 2, 3, 4]);
        assert_eq!(acc.pull_window().unwrap(), vec![5, 6, 7, 8]);
        // Trailing remainder stays buffered but can never form a window.
        assert!(!acc.has_window());
        assert_eq!(acc.buffered(), 1);
    }

    #[test]
    fn overlapping_windows_when_step_is_smaller() {
        let mut acc = FrameAccumulator::new(4, 2);
        acc.append(&[1, 2, 3, 4, 5, 6]);

        assert_eq!(acc.pull_window().unwrap(), vec![1, 2, 3, 4]);
        assert_eq!(acc.pull_window().unwrap(), vec![3, 4, 5, 6]);
        assert!(!acc.has_window());
    }

    #[test]
    fn accepted_windows_concatenate_in_order() {
        let mut acc = FrameAccumulator::new(4, 4);
        acc.append(&[1, 2, 3, 4, 5, 6, 7, 8]);

        let first = acc.pull_window().unwrap();
        acc.accept(&first);
        let second = acc.pull_window().unwrap();
        acc.accept(&second);

        assert_eq!(acc.output(), &[1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(acc.into_output(), vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn rejected_windows_leave_no_trace() {
        let mut acc = FrameAccumulator::new(4, 4);
        acc.append(&[1, 2, 3, 4, 5, 6, 7, 8]);

        let _ = acc.pull_window().unwrap();
        let second = acc.pull_window().unwrap();
        acc.accept(&second);

        assert_eq!(acc.output(), &[5, 6, 7, 8]);
    }

    #[test]
    fn window_count_matches_the_truncation_law() {
        for (len, window, step) in [(4000usize, 160usize, 160usize), (6000, 160, 160), (999, 100, 50)] {
            let mut acc = FrameAccumulator::new(window, step);
            let samples = vec![0i16; len];
            acc.append(&samples);

            let mut pulled = 0usize;
            while acc.has_window() {
                acc.pull_window().unwrap();
                pulled += 1;
            }

            let expected = if len >= window {
                (len - window) / step + 1
            } else {
                0
            };
            assert_eq!(pulled, expected, "len={} window={} step={}", len, window, step);
        }
    }
}

/// Frames timed before a measurement is taken.
const MAX_FRAME_COUNT: usize = 120;
/// Leading frames discarded; page load makes the first intervals noisy.
const SKIP_FRAME_COUNT: usize = MAX_FRAME_COUNT / 10;
/// Intervals further than this fraction from the mean are outliers.
const MARGIN_OF_ERROR: f64 = 0.2;

/// Measures the display refresh rate from animation-frame timestamps.
/// Reports exactly once, then goes quiet.
#[derive(Debug, Clone)]
pub struct FpsDetector {
    recent_timestamp: f64,
    timings: Vec<f64>,
    finished: bool,
}

impl FpsDetector {
    pub fn new(now_ms: f64) -> Self {
        Self {
            recent_timestamp: now_ms,
            timings: Vec::with_capacity(MAX_FRAME_COUNT + 1),
            finished: false,
        }
    }

    pub fn finished(&self) -> bool {
        self.finished
    }

    /// Record a frame at `now_ms`. Returns the detected frames per second on
    /// the frame that completes the measurement.
    pub fn record_frame(&mut self, now_ms: f64) -> Option<i64> {
        if self.finished {
            return None;
        }

        self.timings.push(now_ms - self.recent_timestamp);
        self.recent_timestamp = now_ms;

        if self.timings.len() <= MAX_FRAME_COUNT {
            return None;
        }

        self.timings.drain(..SKIP_FRAME_COUNT);
        let fps = Self::estimate(&self.timings);
        self.timings.clear();

        match fps {
            Some(fps) => {
                log::info!("detected frame rate: {fps} fps");
                self.finished = true;
                Some(fps)
            }
            None => {
                log::warn!("frame timings unusable, measuring again");
                None
            }
        }
    }

    /// Mean frame rate over the intervals that lie within the margin of the
    /// overall mean, rounded half to even.
    fn estimate(timings: &[f64]) -> Option<i64> {
        let avg = mean(timings)?;
        let margin = avg * MARGIN_OF_ERROR;
        let filtered: Vec<f64> = timings
            .iter()
            .copied()
            .filter(|timing| (avg - margin..=avg + margin).contains(timing))
            .collect();
        let filtered_avg = mean(&filtered).unwrap_or(avg);
        if filtered_avg <= 0.0 || !filtered_avg.is_finite() {
            return None;
        }
        Some((1000.0 / filtered_avg).round_ties_even() as i64)
    }
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

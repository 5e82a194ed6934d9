//! Positional scales.

/// Discrete scale mapping `count` ordered slots onto `[start, end]`.
///
/// Inner padding is expressed as a fraction of the step, with no outer
/// padding, so the first band starts at `start` and the last ends at `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandScale {
    count: usize,
    start: f64,
    step: f64,
    padding: f64,
}

impl BandScale {
    pub fn new(count: usize, start: f64, end: f64, padding: f64) -> Self {
        let padding = padding.clamp(0.0, 1.0);
        let slots = (count as f64 - padding).max(1.0);
        Self {
            count,
            start,
            step: (end - start) / slots,
            padding,
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Leading edge of slot `index`, or `None` when out of range.
    pub fn position(&self, index: usize) -> Option<f64> {
        (index < self.count).then(|| self.start + index as f64 * self.step)
    }

    pub fn bandwidth(&self) -> f64 {
        self.step * (1.0 - self.padding)
    }

    pub fn center(&self, index: usize) -> Option<f64> {
        self.position(index).map(|pos| pos + self.bandwidth() / 2.0)
    }
}

/// Continuous linear mapping from a value domain onto a screen range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// A zero-width domain maps everything to the middle of the range.
    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        if span == 0.0 || !span.is_finite() {
            return (r0 + r1) / 2.0;
        }
        r0 + (value - d0) / span * (r1 - r0)
    }
}

/// Upper bound on ticks per requested tick.
const MAX_TICKS_PER_COUNT: usize = 4;

/// Tick values on 1, 2 or 5 × 10^k steps, roughly `count` of them.
///
/// Spans too small to step through (subnormal differences) yield just the
/// domain endpoints.
pub fn nice_ticks(lo: f64, hi: f64, count: usize) -> Vec<f64> {
    if !(lo.is_finite() && hi.is_finite()) || hi <= lo || count == 0 {
        return Vec::new();
    }
    let raw_step = (hi - lo) / count as f64;
    let power = 10f64.powf(raw_step.log10().floor());
    let error = raw_step / power;
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    let step = factor * power;
    if !(step.is_finite() && step > 0.0) {
        return vec![lo, hi];
    }
    let first = (lo / step).ceil() as i64;
    let last = (hi / step).floor() as i64;
    let ticks = usize::try_from(last.saturating_sub(first)).unwrap_or(usize::MAX);
    if ticks > count.saturating_mul(MAX_TICKS_PER_COUNT) {
        return vec![lo, hi];
    }
    (first..=last).map(|idx| idx as f64 * step).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_scale_fills_range() {
        let scale = BandScale::new(4, 0.0, 100.0, 0.0);
        assert_eq!(scale.position(0), Some(0.0));
        assert_eq!(scale.position(3), Some(75.0));
        assert_eq!(scale.position(4), None);
        assert_eq!(scale.bandwidth(), 25.0);
    }

    #[test]
    fn band_scale_padding_shrinks_bands() {
        let scale = BandScale::new(2, 0.0, 30.0, 0.5);
        // step = 30 / 1.5
        assert_eq!(scale.position(1), Some(20.0));
        assert_eq!(scale.bandwidth(), 10.0);
        assert_eq!(scale.center(0), Some(5.0));
    }

    #[test]
    fn linear_scale_inverts_range() {
        let scale = LinearScale::new((0.0, 10.0), (100.0, 0.0));
        assert_eq!(scale.map(0.0), 100.0);
        assert_eq!(scale.map(2.5), 75.0);
        assert_eq!(LinearScale::new((3.0, 3.0), (0.0, 8.0)).map(3.0), 4.0);
    }

    #[test]
    fn nice_ticks_choose_round_steps() {
        assert_eq!(nice_ticks(0.0, 10.0, 5), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
        assert_eq!(
            nice_ticks(-3.2, 31.5, 5),
            vec![0.0, 5.0, 10.0, 15.0, 20.0, 25.0, 30.0]
        );
        assert_eq!(nice_ticks(0.0, 100.0, 4), vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
        assert!(nice_ticks(5.0, 5.0, 5).is_empty());
    }

    #[test]
    fn nice_ticks_subnormal_span_keeps_endpoints() {
        assert_eq!(nice_ticks(0.0, 5e-324, 5), vec![0.0, 5e-324]);
    }
}

//! Count-up interpolation for stat counters.
//!
//! Values are derived from elapsed wall-clock time rather than a tick count,
//! so a slow frame never stretches the animation past its duration.

/// Parses the leading integer of a counter's initial text.
///
/// Leading whitespace and a `+` sign are accepted; anything after the digits is
/// ignored, so `"500+"` yields 500. Text without leading digits, negative
/// values and values beyond `u64` yield `None`.
pub fn parse_seed(text: &str) -> Option<u64> {
    let text = text.trim_start();
    let text = text.strip_prefix('+').unwrap_or(text);
    let end = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    if end == 0 {
        return None;
    }
    text[..end].parse().ok()
}

pub fn render(value: u64, suffix: &str) -> String {
    format!("{}{}", value, suffix)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub value: u64,
    pub done: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountUp {
    target: u64,
    duration_ms: f64,
}

impl CountUp {
    pub fn new(target: u64, duration_ms: f64) -> Self {
        Self {
            target,
            duration_ms: if duration_ms.is_finite() {
                duration_ms.max(0.0)
            } else {
                0.0
            },
        }
    }

    /// Floored value after `elapsed_ms`; never exceeds the target.
    pub fn value_at(&self, elapsed_ms: f64) -> u64 {
        self.frame(elapsed_ms).value
    }

    pub fn frame(&self, elapsed_ms: f64) -> Frame {
        let elapsed_ms = if elapsed_ms.is_nan() { 0.0 } else { elapsed_ms.max(0.0) };
        if elapsed_ms >= self.duration_ms {
            return Frame {
                value: self.target,
                done: true,
            };
        }
        let progress = elapsed_ms / self.duration_ms;
        let value = ((self.target as f64) * progress).floor() as u64;
        Frame {
            value: value.min(self.target),
            done: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_parses_leading_integer() {
        assert_eq!(parse_seed("500"), Some(500));
        assert_eq!(parse_seed("  42 "), Some(42));
        assert_eq!(parse_seed("500+"), Some(500));
        assert_eq!(parse_seed("+7"), Some(7));
        assert_eq!(parse_seed("1,200"), Some(1));
        assert_eq!(parse_seed("0"), Some(0));
    }

    #[test]
    fn seed_rejects_non_numeric_text() {
        assert_eq!(parse_seed(""), None);
        assert_eq!(parse_seed("   "), None);
        assert_eq!(parse_seed("abc"), None);
        assert_eq!(parse_seed("+"), None);
        assert_eq!(parse_seed("-5"), None);
        assert_eq!(parse_seed("99999999999999999999999"), None);
    }

    #[test]
    fn completes_on_exact_target() {
        let count = CountUp::new(500, 2000.0);
        assert_eq!(count.frame(2000.0), Frame { value: 500, done: true });
        assert_eq!(count.frame(5000.0), Frame { value: 500, done: true });
        assert_eq!(render(count.frame(2000.0).value, "+"), "500+");
    }

    #[test]
    fn intermediate_frames_are_monotonic_and_bounded() {
        let count = CountUp::new(500, 2000.0);
        let mut last = 0;
        let mut elapsed = 0.0;
        while elapsed < 2000.0 {
            let frame = count.frame(elapsed);
            assert!(!frame.done);
            assert!(frame.value >= last);
            assert!(frame.value <= 500);
            last = frame.value;
            elapsed += 16.7;
        }
        assert!(count.frame(elapsed).done);
    }

    #[test]
    fn value_follows_wall_clock() {
        let count = CountUp::new(1000, 2000.0);
        assert_eq!(count.value_at(0.0), 0);
        assert_eq!(count.value_at(500.0), 250);
        assert_eq!(count.value_at(1000.0), 500);
        assert_eq!(count.value_at(1999.0), 999);
    }

    #[test]
    fn zero_duration_finishes_immediately() {
        let count = CountUp::new(12, 0.0);
        assert_eq!(count.frame(0.0), Frame { value: 12, done: true });
        assert!(CountUp::new(12, f64::NAN).frame(0.0).done);
    }

    #[test]
    fn zero_target_renders_zero() {
        let count = CountUp::new(0, 2000.0);
        assert_eq!(count.value_at(1000.0), 0);
        assert_eq!(count.frame(2000.0), Frame { value: 0, done: true });
    }

    #[test]
    fn negative_elapsed_is_start() {
        assert_eq!(CountUp::new(100, 2000.0).frame(-30.0), Frame { value: 0, done: false });
    }
}

/// Text of a stat counter split around its number, e.g. `"500+ events"`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterText {
    pub prefix: String,
    pub target: u64,
    pub suffix: String,
}

impl CounterText {
    /// Splits at the first run of digits. Returns `None` when there is no number.
    pub fn parse(text: &str) -> Option<Self> {
        let start = text.find(|c: char| c.is_ascii_digit())?;
        let rest = &text[start..];
        let len = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
        let target = rest[..len].parse().ok()?;
        Some(Self {
            prefix: text[..start].to_string(),
            target,
            suffix: rest[len..].to_string(),
        })
    }

    /// Text to display at `progress` (0.0 to 1.0) of the count-up.
    pub fn frame(&self, progress: f64) -> String {
        let eased = ease_out_cubic(progress.clamp(0.0, 1.0));
        let value = if progress >= 1.0 {
            self.target
        } else {
            (self.target as f64 * eased).floor() as u64
        };
        format!("{}{}{}", self.prefix, value, self.suffix)
    }
}

fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_prefix_and_suffix() {
        let text = CounterText::parse("over 500+ events").unwrap();
        assert_eq!(text.prefix, "over ");
        assert_eq!(text.target, 500);
        assert_eq!(text.suffix, "+ events");
        assert_eq!(text.frame(0.0), "over 0+ events");
        assert_eq!(text.frame(1.0), "over 500+ events");
    }

    #[test]
    fn frames_are_monotonic() {
        let text = CounterText::parse("98%").unwrap();
        let values: Vec<u64> = (0..=20)
            .map(|i| {
                let frame = text.frame(i as f64 / 20.0);
                frame.trim_end_matches('%').parse().unwrap()
            })
            .collect();
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(values.last(), Some(&98));
    }

    #[test]
    fn text_without_number_is_skipped() {
        assert_eq!(CounterText::parse("many"), None);
    }

    #[test]
    fn progress_past_the_end_is_clamped() {
        let text = CounterText::parse("12").unwrap();
        assert_eq!(text.frame(2.5), "12");
    }
}

//! Declarative scroll animation bindings consumed by the scheduler.

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Effect {
    Fade,
    /// Slide in from below by `distance` pixels.
    FadeUp { distance: f64 },
    FadeLeft { distance: f64 },
    FadeRight { distance: f64 },
    Scale { from: f64 },
}

impl Effect {
    /// Style applied before the element enters the viewport.
    pub fn initial_style(&self) -> Vec<(&'static str, String)> {
        let transform = match *self {
            Effect::Fade => None,
            Effect::FadeUp { distance } => Some(format!("translate3d(0, {distance}px, 0)")),
            Effect::FadeLeft { distance } => Some(format!("translate3d(-{distance}px, 0, 0)")),
            Effect::FadeRight { distance } => Some(format!("translate3d({distance}px, 0, 0)")),
            Effect::Scale { from } => Some(format!("scale({from})")),
        };
        let mut style = vec![("opacity", "0".to_string())];
        if let Some(transform) = transform {
            style.push(("transform", transform));
        }
        style
    }

    pub fn final_style(&self) -> Vec<(&'static str, String)> {
        let mut style = vec![("opacity", "1".to_string())];
        if *self != Effect::Fade {
            style.push(("transform", "none".to_string()));
        }
        style
    }
}

/// One-shot or repeating entrance effect for every element matching `selector`.
#[derive(Clone, Debug, PartialEq)]
pub struct Trigger {
    pub selector: &'static str,
    pub effect: Effect,
    /// Fraction of the element that must be visible, 0.0 to 1.0.
    pub threshold: f64,
    pub once: bool,
    pub duration_ms: u32,
    pub delay_ms: u32,
    /// Extra delay per matched element, in document order.
    pub stagger_ms: u32,
}

impl Trigger {
    pub fn new(selector: &'static str, effect: Effect) -> Self {
        Self {
            selector,
            effect,
            threshold: 0.2,
            once: true,
            duration_ms: config::REVEAL_DURATION_MS,
            delay_ms: 0,
            stagger_ms: 0,
        }
    }

    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold.clamp(0.0, 1.0);
        self
    }

    pub fn delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn stagger(mut self, stagger_ms: u32) -> Self {
        self.stagger_ms = stagger_ms;
        self
    }

    pub fn repeat(mut self) -> Self {
        self.once = false;
        self
    }

    pub fn delay_for(&self, index: usize) -> u32 {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.delay_ms.saturating_add(self.stagger_ms.saturating_mul(index))
    }

    pub fn transition(&self, index: usize) -> String {
        let delay = self.delay_for(index);
        format!(
            "opacity {d}ms ease-out {delay}ms, transform {d}ms cubic-bezier(0.22, 1, 0.36, 1) {delay}ms",
            d = self.duration_ms
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Binding {
    Reveal(Trigger),
    /// Counts the number inside each matching element up from zero, once.
    Counter {
        selector: &'static str,
        threshold: f64,
        duration_ms: u32,
    },
    /// Moves the element by up to `distance` pixels across the whole page scroll.
    Parallax {
        selector: &'static str,
        distance: f64,
    },
}

impl Binding {
    pub fn counter(selector: &'static str) -> Self {
        Binding::Counter {
            selector,
            threshold: 0.5,
            duration_ms: config::COUNTER_DURATION_MS,
        }
    }

    pub fn selector(&self) -> &'static str {
        match self {
            Binding::Reveal(trigger) => trigger.selector,
            Binding::Counter { selector, .. } | Binding::Parallax { selector, .. } => *selector,
        }
    }
}

/// Vertical offset for a parallax element at the given scroll position.
pub fn parallax_offset(scroll_y: f64, document_height: f64, viewport_height: f64, distance: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0) * distance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fade_up_starts_below_and_ends_in_place() {
        let effect = Effect::FadeUp { distance: 40.0 };
        assert_eq!(
            effect.initial_style(),
            vec![
                ("opacity", "0".to_string()),
                ("transform", "translate3d(0, 40px, 0)".to_string())
            ]
        );
        assert_eq!(
            effect.final_style(),
            vec![("opacity", "1".to_string()), ("transform", "none".to_string())]
        );
    }

    #[test]
    fn plain_fade_leaves_transform_alone() {
        assert_eq!(Effect::Fade.initial_style().len(), 1);
        assert_eq!(Effect::Fade.final_style().len(), 1);
    }

    #[test]
    fn stagger_accumulates_per_element() {
        let trigger = Trigger::new(".card", Effect::Fade).delay(100).stagger(150);
        assert_eq!(trigger.delay_for(0), 100);
        assert_eq!(trigger.delay_for(3), 550);
        assert!(trigger.transition(1).contains("250ms"));
    }

    #[test]
    fn threshold_is_clamped() {
        assert_eq!(Trigger::new("a", Effect::Fade).threshold(3.0).threshold, 1.0);
        assert_eq!(Trigger::new("a", Effect::Fade).threshold(-1.0).threshold, 0.0);
    }

    #[test]
    fn parallax_tracks_full_document_height() {
        assert_eq!(parallax_offset(0.0, 3000.0, 1000.0, 200.0), 0.0);
        assert_eq!(parallax_offset(1000.0, 3000.0, 1000.0, 200.0), 100.0);
        assert_eq!(parallax_offset(5000.0, 3000.0, 1000.0, 200.0), 200.0);
        assert_eq!(parallax_offset(100.0, 800.0, 1000.0, 200.0), 0.0);
    }
}

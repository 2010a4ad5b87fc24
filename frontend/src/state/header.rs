use std::rc::Rc;
use yew::prelude::*;

use crate::config;

/// One scroll event, from the previous `window.scrollY` to the current one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollMove {
    pub from: f64,
    pub to: f64,
}

/// Classes of the fixed header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeaderScroll {
    pub scrolled: bool,
    pub hidden: bool,
}

impl HeaderScroll {
    pub fn advance(self, step: ScrollMove) -> Self {
        let ScrollMove { from, to } = step;
        // Hide while scrolling down past the hero, show again on any upward scroll.
        let hidden = if to > config::HEADER_HIDE_AFTER {
            if to > from {
                true
            } else if to < from {
                false
            } else {
                self.hidden
            }
        } else {
            false
        };
        Self {
            scrolled: to > config::HEADER_SCROLLED_AT,
            hidden,
        }
    }
}

impl Reducible for HeaderScroll {
    type Action = ScrollMove;

    fn reduce(self: Rc<Self>, step: ScrollMove) -> Rc<Self> {
        let next = self.advance(step);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Feeds successive scroll positions starting from the top of the page.
    fn scroll_through(positions: &[f64]) -> HeaderScroll {
        let mut last_y = 0.0;
        positions.iter().fold(HeaderScroll::default(), |state, &y| {
            let next = state.advance(ScrollMove { from: last_y, to: y });
            last_y = y;
            next
        })
    }

    #[test]
    fn top_of_page_is_plain() {
        let state = scroll_through(&[0.0]);
        assert!(!state.scrolled);
        assert!(!state.hidden);
    }

    #[test]
    fn scrolled_class_after_threshold() {
        let state = scroll_through(&[config::HEADER_SCROLLED_AT + 1.0]);
        assert!(state.scrolled);
        assert!(!state.hidden);
    }

    #[test]
    fn hides_on_scroll_down_and_shows_on_scroll_up() {
        let down = scroll_through(&[500.0, 700.0]);
        assert!(down.hidden);
        let up = scroll_through(&[500.0, 700.0, 650.0]);
        assert!(!up.hidden);
        assert!(up.scrolled);
    }

    #[test]
    fn never_hidden_near_the_top() {
        let state = scroll_through(&[100.0, 200.0]);
        assert!(!state.hidden);
    }

    #[test]
    fn unchanged_classes_keep_the_same_state() {
        let state = Rc::new(scroll_through(&[500.0, 700.0]));
        let next = state.clone().reduce(ScrollMove { from: 700.0, to: 900.0 });
        assert!(Rc::ptr_eq(&state, &next));
        let shown = next.reduce(ScrollMove { from: 900.0, to: 850.0 });
        assert!(!shown.hidden);
    }
}

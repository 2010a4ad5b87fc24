use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::js_sys::{Array, Date};
use web_sys::{
    window, Document, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use super::bindings::{parallax_offset, Binding, Effect, Trigger};
use super::counter::CounterText;
use crate::config;

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Runs a list of [`Binding`]s against the current document.
///
/// Everything is torn down when the scheduler is dropped. Bindings whose
/// selector matches nothing, or that need an API the browser lacks, stay inactive.
pub struct Scheduler {
    observers: Vec<IntersectionObserver>,
    callbacks: Vec<ObserverCallback>,
    scroll_listener: Option<Closure<dyn FnMut()>>,
    alive: Rc<Cell<bool>>,
}

impl Scheduler {
    pub fn install(bindings: &[Binding]) -> Self {
        let mut scheduler = Self {
            observers: Vec::new(),
            callbacks: Vec::new(),
            scroll_listener: None,
            alive: Rc::new(Cell::new(true)),
        };
        let Some(document) = window().and_then(|w| w.document()) else {
            return scheduler;
        };

        let mut parallax = Vec::new();
        for binding in bindings {
            let elements = select_all(&document, binding.selector());
            if elements.is_empty() {
                debug!("No elements match {}", binding.selector());
                continue;
            }
            let installed = match binding {
                Binding::Reveal(trigger) => scheduler.reveal(trigger, &elements),
                Binding::Counter {
                    threshold,
                    duration_ms,
                    ..
                } => scheduler.count_up(*threshold, *duration_ms, &elements),
                Binding::Parallax { distance, .. } => {
                    parallax.extend(elements.into_iter().map(|el| (el, *distance)));
                    Ok(())
                }
            };
            if let Err(e) = installed {
                warn!("Animation for {} disabled: {:?}", binding.selector(), e);
            }
        }

        if !parallax.is_empty() {
            scheduler.parallax(parallax);
        }
        scheduler
    }

    fn reveal(&mut self, trigger: &Trigger, elements: &[HtmlElement]) -> Result<(), JsValue> {
        let effect: Effect = trigger.effect;
        let once = trigger.once;
        let observer = self.observer(trigger.threshold, move |entry, observer| {
            let Ok(target) = entry.target().dyn_into::<HtmlElement>() else {
                return;
            };
            if entry.is_intersecting() {
                apply_style(&target, &effect.final_style());
                if once {
                    observer.unobserve(&target);
                }
            } else if !once {
                apply_style(&target, &effect.initial_style());
            }
        });

        // Elements are only hidden once an observer exists to show them again.
        let observer = hide_when_watched(observer, elements, |index, el| {
            apply_style(el, &trigger.effect.initial_style());
            let _ = el.style().set_property("transition", &trigger.transition(index));
            let _ = el.style().set_property("will-change", "opacity, transform");
        })?;
        for el in elements {
            observer.observe(el);
        }
        Ok(())
    }

    fn count_up(&mut self, threshold: f64, duration_ms: u32, elements: &[HtmlElement]) -> Result<(), JsValue> {
        let alive = self.alive.clone();
        let observer = self.observer(threshold, move |entry, observer| {
            if !entry.is_intersecting() {
                return;
            }
            let target = entry.target();
            observer.unobserve(&target);

            let Some(text) = target.text_content().and_then(|t| CounterText::parse(&t)) else {
                return;
            };
            target.set_text_content(Some(&text.frame(0.0)));

            let alive = alive.clone();
            spawn_local(async move {
                let start = Date::now();
                let duration = f64::from(duration_ms.max(1));
                while alive.get() {
                    let progress = (Date::now() - start) / duration;
                    target.set_text_content(Some(&text.frame(progress)));
                    if progress >= 1.0 {
                        break;
                    }
                    TimeoutFuture::new(config::COUNTER_FRAME_MS).await;
                }
            });
        })?;
        for el in elements {
            observer.observe(el);
        }
        Ok(())
    }

    fn parallax(&mut self, elements: Vec<(HtmlElement, f64)>) {
        let Some(window) = window() else {
            return;
        };
        let window_clone = window.clone();
        let scroll_callback = Closure::wrap(Box::new(move || {
            let scroll_y = window_clone.scroll_y().unwrap_or(0.0);
            let viewport = window_clone
                .inner_height()
                .ok()
                .and_then(|h| h.as_f64())
                .unwrap_or(0.0);
            let document_height = window_clone
                .document()
                .and_then(|d| d.document_element())
                .map(|root| f64::from(root.scroll_height()))
                .unwrap_or(0.0);
            for (el, distance) in &elements {
                let offset = parallax_offset(scroll_y, document_height, viewport, *distance);
                let _ = el
                    .style()
                    .set_property("transform", &format!("translate3d(0, {offset:.1}px, 0)"));
            }
        }) as Box<dyn FnMut()>);

        if window
            .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
            .is_err()
        {
            warn!("Could not attach parallax scroll listener");
            return;
        }
        // Initial position
        let _ = scroll_callback
            .as_ref()
            .unchecked_ref::<web_sys::js_sys::Function>()
            .call0(&JsValue::NULL);
        self.scroll_listener = Some(scroll_callback);
    }

    /// Creates an observer owned by the scheduler; callers decide what it watches.
    fn observer(
        &mut self,
        threshold: f64,
        mut on_entry: impl FnMut(&IntersectionObserverEntry, &IntersectionObserver) + 'static,
    ) -> Result<IntersectionObserver, JsValue> {
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                on_entry(&entry, &observer);
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        options.set_root_margin("0px 0px -50px 0px");
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        self.observers.push(observer.clone());
        self.callbacks.push(callback);
        Ok(observer)
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        self.alive.set(false);
        for observer in &self.observers {
            observer.disconnect();
        }
        if let (Some(window), Some(listener)) = (window(), self.scroll_listener.as_ref()) {
            let _ = window.remove_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref());
        }
    }
}

fn select_all(document: &Document, selector: &str) -> Vec<HtmlElement> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Runs `hide` on every element, but only when `watcher` was created.
fn hide_when_watched<W, E, T>(
    watcher: Result<W, E>,
    elements: &[T],
    mut hide: impl FnMut(usize, &T),
) -> Result<W, E> {
    let watcher = watcher?;
    for (index, el) in elements.iter().enumerate() {
        hide(index, el);
    }
    Ok(watcher)
}

fn apply_style(el: &HtmlElement, style: &[(&'static str, String)]) {
    let declaration = el.style();
    for (name, value) in style {
        let _ = declaration.set_property(name, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_is_hidden_without_a_watcher() {
        let mut hidden = Vec::new();
        let result = hide_when_watched(Err::<(), _>("IntersectionObserver missing"), &["a", "b"], |_, el| {
            hidden.push(*el)
        });
        assert!(result.is_err());
        assert!(hidden.is_empty());
    }

    #[test]
    fn every_element_is_prepared_in_order_once_watched() {
        let mut hidden = Vec::new();
        let result = hide_when_watched(Ok::<_, ()>(7), &["a", "b", "c"], |index, el| hidden.push((index, *el)));
        assert_eq!(result, Ok(7));
        assert_eq!(hidden, vec![(0, "a"), (1, "b"), (2, "c")]);
    }
}

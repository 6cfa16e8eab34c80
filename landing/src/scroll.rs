//! Full-page scroll pagination.
//!
//! On wide viewports the landing pages through its sections one at a time:
//! wheel, swipe and keyboard gestures resolve through [`crate::pager`] and
//! exactly one section is mounted at any moment. Narrow viewports get the
//! same sections stacked in order with native scrolling.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::pager::{
    COOLDOWN_MS, NavIntent, Pager, counter_label, is_stacked_viewport, key_intent,
    progress_percent, swipe_intent, wheel_intent,
};

/// One entry in the pager: a dot label plus a renderer for the section body.
#[derive(Clone, Copy)]
pub struct Section {
    pub label: &'static str,
    pub render: fn() -> AnyView,
}

/// Cloneable handle around the pager signal.
///
/// All navigation goes through [`PagerHandle::navigate`], which schedules the
/// cool-down timer for every successful move.
#[derive(Clone, Copy)]
pub struct PagerHandle {
    pager: RwSignal<Pager>,
}

impl PagerHandle {
    pub fn new(total: usize) -> Self {
        Self {
            pager: RwSignal::new(Pager::new(total)),
        }
    }

    /// Reactive read of the active section index.
    pub fn current(&self) -> usize {
        self.pager.with(|pager| pager.current())
    }

    /// Reactive read of the cool-down latch.
    pub fn is_transitioning(&self) -> bool {
        self.pager.with(|pager| pager.is_transitioning())
    }

    pub fn navigate(&self, intent: NavIntent) -> Option<usize> {
        let moved = self.pager.try_update(|pager| pager.apply(intent)).flatten();
        if moved.is_some() {
            let pager = self.pager;
            set_timeout(
                move || pager.update(|pager| pager.settle()),
                Duration::from_millis(COOLDOWN_MS),
            );
        }
        moved
    }
}

/// How the landing navigates between sections on this viewport.
#[derive(Clone, Copy)]
pub enum SectionNav {
    /// Wide viewport: jumps go through the pager.
    Paged(PagerHandle),
    /// Narrow viewport: sections are stacked, jumps scroll the document.
    Stacked,
}

impl SectionNav {
    /// Picks the mode for the current viewport width.
    pub fn for_viewport(total: usize) -> Self {
        if viewport_is_stacked() {
            SectionNav::Stacked
        } else {
            SectionNav::Paged(PagerHandle::new(total))
        }
    }

    /// Jumps to a section, by pager index or by element id.
    pub fn go_to(&self, index: usize, dom_id: &str) {
        match self {
            SectionNav::Paged(handle) => {
                handle.navigate(NavIntent::Jump(index));
            }
            SectionNav::Stacked => scroll_to_element(dom_id),
        }
    }
}

fn viewport_is_stacked() -> bool {
    web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|width| width.as_f64())
        .is_some_and(|width| is_stacked_viewport(width as i32))
}

fn scroll_to_element(dom_id: &str) {
    if let Some(document) = web_sys::window().and_then(|window| window.document()) {
        if let Some(element) = document.get_element_by_id(dom_id) {
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
}

// ============================================================================
// Components
// ============================================================================

#[component]
pub fn ScrollSections(sections: Vec<Section>) -> impl IntoView {
    match expect_context::<SectionNav>() {
        SectionNav::Paged(handle) => paged_view(handle, sections).into_any(),
        SectionNav::Stacked => stacked_view(sections).into_any(),
    }
}

fn stacked_view(sections: Vec<Section>) -> impl IntoView {
    view! {
        <div class="section-stack">
            {sections.into_iter().map(|section| (section.render)()).collect_view()}
        </div>
    }
}

fn paged_view(handle: PagerHandle, sections: Vec<Section>) -> impl IntoView {
    let total = sections.len();
    let sections = StoredValue::new(sections);
    let current = Memo::new(move |_| handle.current());

    let container_ref = NodeRef::<leptos::html::Div>::new();
    attach_gesture_listeners(container_ref, handle);

    view! {
        <div node_ref=container_ref class="scroll-container">
            <div class="section-progress">
                <div
                    class="section-progress-fill"
                    style:width=move || format!("{}%", progress_percent(current.get(), total))
                ></div>
            </div>

            <div class="section-dots" role="navigation" aria-label="Sections">
                {(0..total)
                    .map(|index| {
                        let label = sections.with_value(|list| list[index].label);
                        view! {
                            <button
                                class=move || {
                                    if current.get() == index {
                                        "section-dot section-dot-active"
                                    } else {
                                        "section-dot"
                                    }
                                }
                                aria-label=format!("Go to section {}: {}", index + 1, label)
                                on:click=move |_| {
                                    handle.navigate(NavIntent::Jump(index));
                                }
                            ></button>
                        }
                    })
                    .collect_view()}
            </div>

            // Clicks are swallowed while a slide is in flight.
            <div class=move || {
                if handle.is_transitioning() {
                    "section-stage is-sliding"
                } else {
                    "section-stage"
                }
            }>
                {move || {
                    let index = current.get();
                    view! {
                        <div class="section-slide">
                            {sections.with_value(|list| (list[index].render)())}
                        </div>
                    }
                }}
            </div>

            <Show when=move || current.get() == 0>
                <div class="scroll-hint">
                    <span>"Scroll to navigate"</span>
                    <div class="scroll-hint-arrow"></div>
                </div>
            </Show>

            <div class="section-counter">{move || counter_label(current.get(), total)}</div>
        </div>
    }
}

// ============================================================================
// Gesture wiring
// ============================================================================

fn attach_gesture_listeners(container_ref: NodeRef<leptos::html::Div>, handle: PagerHandle) {
    let mut attached = false;
    Effect::new(move |_| {
        let Some(container) = container_ref.get() else {
            return;
        };
        if attached {
            return;
        }
        attached = true;

        // The wheel listener must not be passive or prevent_default cannot
        // cancel the native scroll.
        let wheel = Closure::wrap(Box::new(move |event: web_sys::WheelEvent| {
            event.prevent_default();
            if let Some(intent) = wheel_intent(event.delta_y()) {
                handle.navigate(intent);
            }
        }) as Box<dyn FnMut(_)>);
        let options = web_sys::AddEventListenerOptions::new();
        options.set_passive(false);
        container
            .add_event_listener_with_callback_and_add_event_listener_options(
                "wheel",
                wheel.as_ref().unchecked_ref(),
                &options,
            )
            .ok();
        wheel.forget();

        let touch_start_y = Rc::new(Cell::new(0i32));
        let start = Rc::clone(&touch_start_y);
        let touchstart = Closure::wrap(Box::new(move |event: web_sys::TouchEvent| {
            if let Some(touch) = event.touches().get(0) {
                start.set(touch.screen_y());
            }
        }) as Box<dyn FnMut(_)>);
        container
            .add_event_listener_with_callback("touchstart", touchstart.as_ref().unchecked_ref())
            .ok();
        touchstart.forget();

        let touchend = Closure::wrap(Box::new(move |event: web_sys::TouchEvent| {
            if let Some(touch) = event.changed_touches().get(0) {
                let delta = touch_start_y.get() - touch.screen_y();
                if let Some(intent) = swipe_intent(f64::from(delta)) {
                    handle.navigate(intent);
                }
            }
        }) as Box<dyn FnMut(_)>);
        container
            .add_event_listener_with_callback("touchend", touchend.as_ref().unchecked_ref())
            .ok();
        touchend.forget();

        let Some(window) = web_sys::window() else {
            return;
        };
        let keydown = Closure::wrap(Box::new(move |event: web_sys::KeyboardEvent| {
            if event_targets_editable(&event) {
                return;
            }
            if let Some(intent) = key_intent(&event.key()) {
                event.prevent_default();
                handle.navigate(intent);
            }
        }) as Box<dyn FnMut(_)>);
        window
            .add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref())
            .ok();
        keydown.forget();
    });
}

/// Keys typed into form fields stay with the field.
fn event_targets_editable(event: &web_sys::KeyboardEvent) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .is_some_and(|element| {
            matches!(element.tag_name().as_str(), "INPUT" | "TEXTAREA" | "SELECT")
        })
}

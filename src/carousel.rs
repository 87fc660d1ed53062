use std::rc::Rc;
use yew::Reducible;

/// Auto-advance period for the testimonial slider.
pub const ADVANCE_INTERVAL_MS: u32 = 3_000;
/// Horizontal travel (px) a drag must exceed before it counts as a swipe.
pub const SWIPE_THRESHOLD_PX: i32 = 50;

#[derive(Clone, PartialEq, Debug)]
struct Drag {
    start_x: i32,
    // a single drag changes the slide at most once
    swiped: bool,
}

/// State machine behind the testimonial slider: one active slide index,
/// wrapped modulo the slide count, driven by the auto-advance timer,
/// arrow/dot clicks and pointer drags.
#[derive(Clone, PartialEq, Debug)]
pub struct Slider {
    len: usize,
    active: usize,
    paused: bool,
    drag: Option<Drag>,
}

impl Slider {
    pub fn new(len: usize) -> Self {
        debug_assert!(len > 0);
        Self {
            len,
            active: 0,
            paused: false,
            drag: None,
        }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn next(&mut self) {
        self.active = (self.active + 1) % self.len;
    }

    pub fn prev(&mut self) {
        self.active = (self.active + self.len - 1) % self.len;
    }

    pub fn go_to(&mut self, index: usize) {
        if index < self.len {
            self.active = index;
        }
    }

    /// Timer callback; a paused slider ignores stray ticks.
    pub fn tick(&mut self) {
        if !self.paused {
            self.next();
        }
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn begin_drag(&mut self, x: i32) {
        self.drag = Some(Drag {
            start_x: x,
            swiped: false,
        });
    }

    /// Pointer moved to `x` during a drag. Crossing the swipe threshold
    /// changes the slide once; later movement in the same drag is ignored.
    pub fn drag_to(&mut self, x: i32) {
        let dx = match &self.drag {
            Some(drag) if !drag.swiped => x - drag.start_x,
            _ => return,
        };
        if dx.abs() <= SWIPE_THRESHOLD_PX {
            return;
        }
        if let Some(drag) = self.drag.as_mut() {
            drag.swiped = true;
        }
        if dx < 0 {
            self.next();
        } else {
            self.prev();
        }
    }

    pub fn end_drag(&mut self) {
        self.drag = None;
    }
}

pub enum SliderAction {
    Tick,
    Next,
    Prev,
    GoTo(usize),
    SetPaused(bool),
    DragStart(i32),
    DragMove(i32),
    DragEnd,
}

impl Reducible for Slider {
    type Action = SliderAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut slider = (*self).clone();
        match action {
            SliderAction::Tick => slider.tick(),
            SliderAction::Next => slider.next(),
            SliderAction::Prev => slider.prev(),
            SliderAction::GoTo(index) => slider.go_to(index),
            SliderAction::SetPaused(paused) => slider.set_paused(paused),
            SliderAction::DragStart(x) => slider.begin_drag(x),
            SliderAction::DragMove(x) => slider.drag_to(x),
            SliderAction::DragEnd => slider.end_drag(),
        }
        Rc::new(slider)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_forward_and_backward() {
        let mut slider = Slider::new(4);
        for expected in [1, 2, 3, 0, 1] {
            slider.next();
            assert_eq!(slider.active(), expected);
        }
        let mut slider = Slider::new(4);
        slider.prev();
        assert_eq!(slider.active(), 3);
    }

    #[test]
    fn stays_in_range_under_mixed_events() {
        let mut slider = Slider::new(3);
        for i in 0..100 {
            match i % 3 {
                0 => slider.next(),
                1 => slider.prev(),
                _ => slider.tick(),
            }
            assert!(slider.active() < 3);
        }
    }

    #[test]
    fn next_then_prev_is_identity() {
        for start in 0..4 {
            let mut slider = Slider::new(4);
            slider.go_to(start);
            slider.next();
            slider.prev();
            assert_eq!(slider.active(), start);
            slider.prev();
            slider.next();
            assert_eq!(slider.active(), start);
        }
    }

    #[test]
    fn go_to_jumps_and_ignores_out_of_range() {
        let mut slider = Slider::new(4);
        slider.go_to(2);
        assert_eq!(slider.active(), 2);
        slider.go_to(7);
        assert_eq!(slider.active(), 2);
    }

    #[test]
    fn tick_is_inert_while_paused() {
        let mut slider = Slider::new(4);
        slider.set_paused(true);
        slider.tick();
        slider.tick();
        assert_eq!(slider.active(), 0);
        slider.set_paused(false);
        slider.tick();
        assert_eq!(slider.active(), 1);
    }

    #[test]
    fn drag_below_threshold_does_nothing() {
        let mut slider = Slider::new(4);
        slider.begin_drag(200);
        slider.drag_to(160);
        slider.drag_to(250);
        slider.end_drag();
        assert_eq!(slider.active(), 0);
    }

    #[test]
    fn threshold_is_exclusive() {
        let mut slider = Slider::new(4);
        slider.begin_drag(100);
        slider.drag_to(50);
        assert_eq!(slider.active(), 0);
        slider.drag_to(49);
        assert_eq!(slider.active(), 1);
    }

    #[test]
    fn leftward_swipe_advances_once_per_drag() {
        let mut slider = Slider::new(4);
        slider.begin_drag(300);
        slider.drag_to(240);
        assert_eq!(slider.active(), 1);
        // further movement within the same drag is latched out
        slider.drag_to(150);
        slider.drag_to(40);
        slider.drag_to(400);
        assert_eq!(slider.active(), 1);
        slider.end_drag();
        // a fresh drag can trigger again
        slider.begin_drag(300);
        slider.drag_to(200);
        assert_eq!(slider.active(), 2);
    }

    #[test]
    fn rightward_swipe_goes_back() {
        let mut slider = Slider::new(4);
        slider.begin_drag(100);
        slider.drag_to(180);
        assert_eq!(slider.active(), 3);
    }

    #[test]
    fn move_without_drag_is_a_noop() {
        let mut slider = Slider::new(4);
        slider.drag_to(500);
        assert_eq!(slider.active(), 0);
        assert!(!slider.dragging());
    }

    #[test]
    fn reduce_applies_actions() {
        let slider = Rc::new(Slider::new(4));
        let slider = slider.reduce(SliderAction::Next);
        let slider = slider.reduce(SliderAction::GoTo(3));
        let slider = slider.reduce(SliderAction::Tick);
        assert_eq!(slider.active(), 0);
    }
}

use crate::constants::PERSPECTIVE_PX;
use instant::Instant;
use portfolio_core::TiltCard;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A tilt card together with the element it transforms.
pub struct CardSlot {
    pub element: web::HtmlElement,
    pub card: TiltCard,
    // Whether the last frame wrote a non-settled transform
    pub moving: bool,
}

pub type SharedCards = Rc<RefCell<Vec<CardSlot>>>;

pub struct FrameContext {
    pub cards: SharedCards,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn new(cards: SharedCards) -> Self {
        Self {
            cards,
            last_instant: Instant::now(),
        }
    }

    /// Step every card once. Returns true while any card is still moving.
    pub fn frame(&mut self) -> bool {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        let mut any_moving = false;
        for slot in self.cards.borrow_mut().iter_mut() {
            let still_moving = slot.card.step(dt_sec);
            // Write once more on the frame an axis settles so it lands exactly.
            if still_moving || slot.moving {
                let css = slot.card.current().to_css_transform(PERSPECTIVE_PX);
                _ = slot.element.style().set_property("transform", &css);
            }
            slot.moving = still_moving;
            any_moving |= still_moving;
        }
        any_moving
    }
}

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// requestAnimationFrame loop that parks itself once every card has settled
/// and is restarted by [`FrameLoop::wake`] on the next pointer event.
#[derive(Clone)]
pub struct FrameLoop {
    ctx: Rc<RefCell<FrameContext>>,
    tick: TickSlot,
    running: Rc<Cell<bool>>,
}

impl FrameLoop {
    pub fn new(frame_ctx: FrameContext) -> Self {
        let ctx = Rc::new(RefCell::new(frame_ctx));
        let tick: TickSlot = Rc::new(RefCell::new(None));
        let running = Rc::new(Cell::new(false));

        let ctx_tick = ctx.clone();
        let tick_clone = tick.clone();
        let running_tick = running.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if ctx_tick.borrow_mut().frame() {
                request_frame(&tick_clone);
            } else {
                running_tick.set(false);
            }
        }) as Box<dyn FnMut()>));

        Self { ctx, tick, running }
    }

    /// Schedule a frame unless the loop is already running.
    pub fn wake(&self) {
        if self.running.replace(true) {
            return;
        }
        // Time spent parked is not animation time.
        self.ctx.borrow_mut().last_instant = Instant::now();
        request_frame(&self.tick);
    }
}

fn request_frame(tick: &TickSlot) {
    let Some(w) = web::window() else { return };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

use crate::constants::{TILT_ATTR, TILT_SELECTOR};
use crate::dom;
use crate::frame::{CardSlot, FrameLoop, SharedCards};
use portfolio_core::{PointerSample, Rect, TiltCard, TiltPreset};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
fn element_rect(el: &web::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(
        r.left() as f32,
        r.top() as f32,
        r.width() as f32,
        r.height() as f32,
    )
}

/// Sample the pointer against the element's current rectangle. A detached
/// element yields no rectangle, which the calculator treats as neutral.
fn pointer_sample(ev: &web::PointerEvent, el: &web::Element) -> PointerSample {
    let (x, y) = (ev.client_x() as f32, ev.client_y() as f32);
    if el.is_connected() {
        PointerSample::new(x, y, element_rect(el))
    } else {
        PointerSample::detached(x, y)
    }
}

/// Register every `[data-tilt]` element as a card and wire its pointer events.
/// Returns how many cards were wired.
pub fn wire_tilt_cards(
    document: &web::Document,
    cards: &SharedCards,
    frame_loop: &FrameLoop,
) -> usize {
    let nodes = match document.query_selector_all(TILT_SELECTOR) {
        Ok(n) => n,
        Err(e) => {
            log::warn!("[tilt] selector failed: {:?}", e);
            return 0;
        }
    };

    let mut wired = 0;
    for i in 0..nodes.length() {
        let Some(el) = nodes.get(i).and_then(|n| n.dyn_into::<web::HtmlElement>().ok()) else {
            continue;
        };
        let attr = el.get_attribute(TILT_ATTR).unwrap_or_default();
        let Some(preset) = TiltPreset::from_attr(&attr) else {
            log::warn!("[tilt] unknown {}={:?}; skipping element", TILT_ATTR, attr);
            continue;
        };

        let index = {
            let mut list = cards.borrow_mut();
            list.push(CardSlot {
                element: el.clone(),
                card: TiltCard::new(preset),
                moving: false,
            });
            list.len() - 1
        };
        wire_card(&el, index, cards, frame_loop);
        wired += 1;
    }
    log::info!("[tilt] wired {} cards", wired);
    wired
}

fn wire_card(
    el: &web::HtmlElement,
    index: usize,
    cards: &SharedCards,
    frame_loop: &FrameLoop,
) {
    let target: &web::EventTarget = el.as_ref();

    let cards_move = cards.clone();
    let el_move: web::Element = el.clone().into();
    let loop_move = frame_loop.clone();
    dom::add_listener(target, "pointermove", move |ev: web::PointerEvent| {
        let sample = pointer_sample(&ev, &el_move);
        if let Some(slot) = cards_move.borrow_mut().get_mut(index) {
            slot.card.pointer_move(&sample);
        }
        loop_move.wake();
    });

    let cards_leave = cards.clone();
    let loop_leave = frame_loop.clone();
    dom::add_listener(target, "pointerleave", move |_ev: web::PointerEvent| {
        if let Some(slot) = cards_leave.borrow_mut().get_mut(index) {
            slot.card.pointer_leave();
        }
        loop_leave.wake();
    });
}

#![cfg(target_arch = "wasm32")]
use portfolio_core::{ContactController, EmailJsTransport, EmailTransport};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use web_sys as web;

mod config;
mod constants;
mod dom;
mod events;
mod feedback;
mod frame;
mod timers;

fn wire_tilt(document: &web::Document) {
    let cards: frame::SharedCards = Rc::new(RefCell::new(Vec::new()));
    let frame_loop = frame::FrameLoop::new(frame::FrameContext::new(cards.clone()));
    // The loop stays parked until the first pointer event on a card.
    events::wire_tilt_cards(document, &cards, &frame_loop);
}

fn wire_contact(document: &web::Document) {
    let Some(form) =
        dom::element_by_id::<web::HtmlFormElement>(document, constants::CONTACT_FORM_ID)
    else {
        log::info!("[contact] no #{} on this page", constants::CONTACT_FORM_ID);
        return;
    };

    let site = config::load(document);
    let transport: Rc<dyn EmailTransport> = Rc::new(EmailJsTransport::new(&site.emailjs));
    let controller = Rc::new(RefCell::new(ContactController::new(site.emailjs)));

    events::wire_contact_form(events::ContactWiring {
        document: document.clone(),
        form,
        controller,
        transport,
        dismiss_timer: timers::OneShotTimer::new(),
        site_url: site.site_url,
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    // Listeners are page-lifetime; wiring twice would double every handler.
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        log::warn!("init called twice; ignoring");
        return Ok(());
    }

    let document =
        dom::window_document().ok_or_else(|| anyhow::anyhow!("no window or document"))?;

    wire_tilt(&document);
    wire_contact(&document);
    Ok(())
}

use crate::dom;
use crate::feedback;
use crate::timers::OneShotTimer;
use portfolio_core::{
    ContactController, DismissTicket, EmailTransport, FieldName, SubmissionMetadata,
    SubmissionPhase, SubmitStart,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

#[derive(Clone)]
pub struct ContactWiring {
    pub document: web::Document,
    pub form: web::HtmlFormElement,
    pub controller: Rc<RefCell<ContactController>>,
    pub transport: Rc<dyn EmailTransport>,
    pub dismiss_timer: OneShotTimer,
    // Overrides the page origin in the `website_url` template variable
    pub site_url: Option<String>,
}

impl ContactWiring {
    fn render(&self) {
        feedback::render(&self.document, &self.controller.borrow());
    }
}

pub fn wire_contact_form(w: ContactWiring) {
    wire_input(&w);
    wire_submit(&w);
    w.render();
}

/// Name and value of the control that fired an `input` event.
fn control_value(ev: &web::Event) -> Option<(String, String)> {
    let target = ev.target()?;
    if let Some(input) = target.dyn_ref::<web::HtmlInputElement>() {
        return Some((input.name(), input.value()));
    }
    if let Some(area) = target.dyn_ref::<web::HtmlTextAreaElement>() {
        return Some((area.name(), area.value()));
    }
    None
}

fn wire_input(w: &ContactWiring) {
    let w = w.clone();
    let target: web::EventTarget = w.form.clone().into();
    dom::add_listener(&target, "input", move |ev: web::Event| {
        let Some((name, value)) = control_value(&ev) else {
            return;
        };
        let field = match name.parse::<FieldName>() {
            Ok(f) => f,
            Err(e) => {
                log::debug!("[contact] {}", e);
                return;
            }
        };
        let was_failed = w.controller.borrow().phase() == SubmissionPhase::Failed;
        w.controller.borrow_mut().update_field(field, value);
        if was_failed {
            w.dismiss_timer.cancel();
            w.render();
        }
    });
}

fn wire_submit(w: &ContactWiring) {
    let w = w.clone();
    let target: web::EventTarget = w.form.clone().into();
    dom::add_listener(&target, "submit", move |ev: web::Event| {
        ev.prevent_default();
        submit(&w);
    });
}

fn submit(w: &ContactWiring) {
    let origin = w.site_url.clone().or_else(dom::page_origin);
    let metadata = SubmissionMetadata::now(origin.as_deref());
    let start = w.controller.borrow_mut().begin_submit(metadata);

    match start {
        SubmitStart::Ignored => {}
        SubmitStart::Rejected(ticket) => {
            w.render();
            schedule_dismiss(w, ticket);
        }
        SubmitStart::Send(request) => {
            w.dismiss_timer.cancel();
            feedback::set_inputs_disabled(&w.form, true);
            w.render();

            let w = w.clone();
            spawn_local(async move {
                let result = w.transport.send(&request).await;
                let ticket = w.controller.borrow_mut().finish_submit(result);
                feedback::set_inputs_disabled(&w.form, false);
                feedback::sync_inputs(&w.form, &w.controller.borrow());
                w.render();
                if let Some(ticket) = ticket {
                    schedule_dismiss(&w, ticket);
                }
            });
        }
    }
}

fn schedule_dismiss(w: &ContactWiring, ticket: DismissTicket) {
    let w_fire = w.clone();
    w.dismiss_timer.schedule(ticket.delay, move || {
        let applied = w_fire.controller.borrow_mut().dismiss(ticket);
        if applied {
            w_fire.render();
        }
    });
}

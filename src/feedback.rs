use crate::constants::{
    ERROR_BANNER_ID, ERROR_PREFIX, SUBMIT_BUTTON_ID, SUBMIT_LABEL_IDLE, SUBMIT_LABEL_RETRY,
    SUBMIT_LABEL_SENDING, SUBMIT_LABEL_SENT, SUCCESS_BANNER_ID,
};
use crate::dom;
use portfolio_core::{ContactController, ContactError, FieldName, SubmissionPhase, MSG_SUCCESS};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Reflect the controller's phase onto the button and the two banners.
pub fn render(document: &web::Document, controller: &ContactController) {
    let phase = controller.phase();

    if let Some(button) = dom::element_by_id::<web::HtmlButtonElement>(document, SUBMIT_BUTTON_ID) {
        button.set_disabled(!controller.can_submit());
        let label = match phase {
            SubmissionPhase::Submitting => SUBMIT_LABEL_SENDING,
            SubmissionPhase::Succeeded => SUBMIT_LABEL_SENT,
            // A transport failure can be resent as-is; anything else needs an edit first.
            SubmissionPhase::Failed
                if controller.error().is_some_and(ContactError::is_retryable) =>
            {
                SUBMIT_LABEL_RETRY
            }
            SubmissionPhase::Idle | SubmissionPhase::Failed => SUBMIT_LABEL_IDLE,
        };
        button.set_text_content(Some(label));
        let busy = phase == SubmissionPhase::Submitting;
        _ = button.set_attribute("aria-busy", if busy { "true" } else { "false" });
    }

    if let Some(el) = document.get_element_by_id(SUCCESS_BANNER_ID) {
        if controller.is_submitted() {
            el.set_text_content(Some(&format!("✓ {}", MSG_SUCCESS)));
            dom::set_visible(&el, true);
        } else {
            dom::set_visible(&el, false);
        }
    }

    if let Some(el) = document.get_element_by_id(ERROR_BANNER_ID) {
        match controller.error_message() {
            Some(msg) => {
                el.set_text_content(Some(&format!("{}{}", ERROR_PREFIX, msg)));
                dom::set_visible(&el, true);
            }
            None => {
                el.set_text_content(None);
                dom::set_visible(&el, false);
            }
        }
    }
}

fn for_each_control(form: &web::HtmlFormElement, mut f: impl FnMut(FieldName, &web::Element)) {
    for field in FieldName::ALL {
        if let Some(el) = form.get_with_name(field.as_str()) {
            f(field, &el);
        }
    }
}

/// Push controller field values back into the inputs (after a successful send).
pub fn sync_inputs(form: &web::HtmlFormElement, controller: &ContactController) {
    for_each_control(form, |field, el| {
        let value = controller.fields().get(field);
        if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
            input.set_value(value);
        } else if let Some(area) = el.dyn_ref::<web::HtmlTextAreaElement>() {
            area.set_value(value);
        }
    });
}

/// Inputs are read-only while a message is in flight.
pub fn set_inputs_disabled(form: &web::HtmlFormElement, disabled: bool) {
    for_each_control(form, |_, el| {
        if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
            input.set_disabled(disabled);
        } else if let Some(area) = el.dyn_ref::<web::HtmlTextAreaElement>() {
            area.set_disabled(disabled);
        }
    });
}

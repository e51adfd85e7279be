// Host-side tests for the web front-end's DOM hooks.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use portfolio_core::TiltPreset;

#[test]
fn element_ids_are_distinct_and_selector_friendly() {
    let ids = [
        SITE_CONFIG_ID,
        CONTACT_FORM_ID,
        SUBMIT_BUTTON_ID,
        SUCCESS_BANNER_ID,
        ERROR_BANNER_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        assert!(!a.contains(char::is_whitespace), "{a}");
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn tilt_selector_matches_attribute() {
    assert_eq!(TILT_SELECTOR, format!("[{}]", TILT_ATTR));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn perspective_dwarfs_depth_lift() {
    // The card must never be pushed through the viewer.
    assert!(PERSPECTIVE_PX > portfolio_core::MAX_DEPTH_LIFT * 10.0);
}

#[test]
fn preset_names_resolve() {
    for name in ["project", "about", "stat", ""] {
        assert!(TiltPreset::from_attr(name).is_some(), "{name:?}");
    }
}

#[test]
fn submit_labels_differ_per_phase() {
    assert_ne!(SUBMIT_LABEL_IDLE, SUBMIT_LABEL_SENDING);
    assert_ne!(SUBMIT_LABEL_SENDING, SUBMIT_LABEL_SENT);
    assert_ne!(SUBMIT_LABEL_IDLE, SUBMIT_LABEL_SENT);
    assert_ne!(SUBMIT_LABEL_RETRY, SUBMIT_LABEL_IDLE);
    assert_ne!(SUBMIT_LABEL_RETRY, SUBMIT_LABEL_SENDING);
}

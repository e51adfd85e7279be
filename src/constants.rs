/// DOM hooks and presentation constants for the web front-end.
///
/// Kept free of `web_sys` so host tests can `include!` this file.

// Element ids expected in index.html
pub const SITE_CONFIG_ID: &str = "site-config"; // <script type="application/json">
pub const CONTACT_FORM_ID: &str = "contact-form";
pub const SUBMIT_BUTTON_ID: &str = "contact-submit";
pub const SUCCESS_BANNER_ID: &str = "contact-success";
pub const ERROR_BANNER_ID: &str = "contact-error";

// Any element carrying this attribute becomes a tilt card; the value picks a
// preset ("project", "about", "stat") or gives max degrees directly.
pub const TILT_ATTR: &str = "data-tilt";
pub const TILT_SELECTOR: &str = "[data-tilt]";

// Perspective distance applied in every tilt transform
pub const PERSPECTIVE_PX: f32 = 1000.0;

// Class toggled to hide banners
pub const HIDDEN_CLASS: &str = "hidden";

// Submit button labels per phase
pub const SUBMIT_LABEL_IDLE: &str = "Send Message →";
pub const SUBMIT_LABEL_SENDING: &str = "Sending...";
pub const SUBMIT_LABEL_SENT: &str = "✓ Message Sent";
pub const SUBMIT_LABEL_RETRY: &str = "Try Again →";

// Prefix shown in front of error text
pub const ERROR_PREFIX: &str = "⚠ ";

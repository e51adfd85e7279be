//! Platform-independent logic behind the portfolio site's interactive bits.
//!
//! Nothing here touches the DOM; the web front-end feeds in pointer samples
//! and form events and renders what comes back.

pub mod config;
pub mod contact;
pub mod motion;
pub mod tilt;
pub mod transport;

pub use config::*;
pub use contact::*;
pub use motion::*;
pub use tilt::*;
pub use transport::*;

//! panelkit — a headless async-resource toolkit.
//!
//! DESIGN
//! ======
//! One parameterized abstraction replaces the copy-pasted
//! fetch/loading/error/success component: [`AsyncResourcePanel`] owns a
//! single request lifecycle and publishes a four-state [`RequestState`]
//! through a watch channel. Callers supply an [`Endpoint`] and a render
//! function mapping the payload to their view type; the panel owns
//! everything else (supersession, timeouts, unmount discard).
//!
//! Alongside the panel live the two other recurring widget shapes:
//! [`FormField`] (validate + submit one input) and [`BoundedCounter`]
//! (saturating quantity stepper), plus [`FlagStore`], a versioned
//! replacement for ad hoc local-storage booleans.
//!
//! ERROR HANDLING
//! ==============
//! No operation panics or lets an error escape a component boundary.
//! Every failure settles into local state as a [`PanelError`], a
//! four-variant taxonomy with human-readable `Display` messages.

pub mod config;
pub mod counter;
pub mod error;
pub mod fetch;
pub mod form;
pub mod panel;
pub mod state;
pub mod store;
pub mod validate;

pub use config::FetchConfig;
pub use counter::BoundedCounter;
pub use error::PanelError;
pub use fetch::{Endpoint, Fetcher, Method};
pub use form::FormField;
pub use panel::{AsyncResourcePanel, PanelView};
pub use state::RequestState;
pub use store::FlagStore;

//! # bankfront
//!
//! Interaction core for the Meridian Bank landing page.
//!
//! The crate holds everything about the page that is not markup:
//!
//! - [`controller`] - carousel auto-advance plus debounced hover menus
//! - [`timer`] / [`clock`] - deadline timers on caller-supplied time
//! - [`content`] / [`types`] - slides, menus, features and footer records
//! - [`login`] - sign-in form state
//! - [`config`] - default-valued settings with TOML and env layering
//! - [`wakeup`] - the single host timer aimed at the next deadline
//!
//! Nothing here touches the DOM, so it builds and tests on any target. The
//! `bankfront-landing` crate wires it to Leptos and browser timers.
//!
//! ```rust
//! use bankfront::{clock::Timestamp, content::SLIDES, controller::*};
//!
//! let mut controller =
//!     InteractionController::new(SLIDES.len(), ControllerSettings::default())?;
//! controller.mount(Timestamp::ZERO);
//! controller.tick(Timestamp::from_millis(5_000));
//! assert_eq!(controller.current_index(), 1);
//! # Ok::<(), bankfront::error::InteractionError>(())
//! ```

pub mod carousel;
pub mod clock;
pub mod config;
pub mod content;
pub mod controller;
pub mod error;
pub mod login;
pub mod menu;
pub mod timer;
pub mod types;
pub mod wakeup;

pub use config::AppConfig;
pub use controller::{ControllerSettings, InteractionController, TickOutcome};
pub use error::{ConfigError, InteractionError};

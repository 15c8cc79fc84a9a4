//! Navigation assembly for day-folder programs.
//!
//! [`resolve`] locates a folder and its numeric neighbours in a [`Program`]
//! snapshot; [`render`] turns that into a validated [`Message`] for a
//! [`Sender`]. The rest of the crate covers the pieces a chat driver needs
//! around that: paged day keyboards, the delivery calendar and browse paths.
//!
//! Everything here is a pure function of its inputs.
//!
//! [`Program`]: daybook_model::Program

pub mod browse;
pub mod error;
pub mod keyboard;
pub mod message;
pub mod schedule;
pub mod state;
pub mod template;

pub use browse::BrowsePath;
pub use error::{BrowseError, NavigationError, Result};
pub use keyboard::{Button, CallbackAction, Keyboard, KeyboardLayout, day_selection};
pub use message::{
    DEFAULT_TEMPLATE, LinkKind, Message, NavLink, RenderOptions, Sender, render,
};
pub use state::{NavigationState, resolve};
pub use template::{Placeholder, TemplateValues, substitute, unknown_placeholders};

//! Navigation messages and the collaborator that delivers them.

use daybook_markup::{MarkupError, RenderedText, decode_utf8, parse, validate_str};
use daybook_model::{FolderEntry, FragmentId, Ordinal};
use serde::Serialize;
use tracing::debug;

use crate::keyboard::CallbackAction;
use crate::state::NavigationState;
use crate::template::{TemplateValues, substitute};

/// Template used when a folder has no navigation descriptor.
pub const DEFAULT_TEMPLATE: &str = "<b>{current}</b> ({position}/{total})";

/// Presentation settings for navigation messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Label pattern for a day; `{n}` is replaced by the ordinal.
    pub label_format: String,
    pub home_label: String,
    pub wants_web_preview: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            label_format: "Day {n}".to_string(),
            home_label: "🏠 Main menu".to_string(),
            wants_web_preview: false,
        }
    }
}

impl RenderOptions {
    pub fn label(&self, ordinal: Ordinal) -> String {
        self.label_format.replace("{n}", &ordinal.to_string())
    }
}

/// What a link leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    Previous,
    Next,
    Home,
    Folder,
    Parent,
}

/// A button attached to a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub kind: LinkKind,
    pub label: String,
    pub callback: String,
}

impl NavLink {
    pub fn new(kind: LinkKind, label: impl Into<String>, callback: impl ToString) -> Self {
        Self {
            kind,
            label: label.into(),
            callback: callback.to_string(),
        }
    }
}

/// The unit handed to a [`Sender`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub text: RenderedText,
    pub wants_web_preview: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<NavLink>,
}

impl Message {
    pub fn new(text: RenderedText, wants_web_preview: bool) -> Self {
        Self {
            text,
            wants_web_preview,
            links: Vec::new(),
        }
    }
}

/// Delivers messages. Retries, rate limits and length limits are the
/// implementor's business.
pub trait Sender {
    type Error;

    fn send(&mut self, message: Message) -> Result<(), Self::Error>;
}

/// Build the navigation message for a resolved folder.
///
/// A descriptor is checked as written before substitution so error
/// positions refer to the file the author edited. Substituted values are
/// escaped, so the result fails only if the template itself is broken.
pub fn render(
    state: &NavigationState<'_>,
    options: &RenderOptions,
) -> Result<Message, MarkupError> {
    let values = template_values(state, options);
    let (origin, raw) = match &state.current.navigation_descriptor {
        Some(descriptor) => {
            let template = decode_utf8(descriptor)?;
            parse(descriptor)?;
            (
                descriptor.origin().clone(),
                substitute(template, &values),
            )
        }
        None => (
            default_origin(state.current),
            default_text(state, &values),
        ),
    };
    let text = validate_str(origin.clone(), &raw)?;
    debug!(origin = %origin, chars = text.char_count(), "rendered navigation");

    Ok(Message {
        text,
        wants_web_preview: options.wants_web_preview,
        links: links(state, options),
    })
}

fn template_values(state: &NavigationState<'_>, options: &RenderOptions) -> TemplateValues {
    let label = |entry: Option<&FolderEntry>| {
        entry
            .map(|e| options.label(e.ordinal))
            .unwrap_or_default()
    };
    TemplateValues {
        previous: label(state.previous),
        next: label(state.next),
        current: options.label(state.current.ordinal),
        position: state.position,
        total: state.total,
    }
}

fn default_origin(entry: &FolderEntry) -> FragmentId {
    FragmentId::new(format!("{}/navigation", entry.name))
}

fn default_text(state: &NavigationState<'_>, values: &TemplateValues) -> String {
    let mut text = substitute(DEFAULT_TEMPLATE, values);
    if state.previous.is_some() {
        text.push_str(&substitute("\n◀ {previous}", values));
    }
    if state.next.is_some() {
        text.push_str(&substitute("\n{next} ▶", values));
    }
    text
}

fn links(state: &NavigationState<'_>, options: &RenderOptions) -> Vec<NavLink> {
    let mut links = Vec::with_capacity(3);
    if let Some(previous) = state.previous {
        links.push(NavLink::new(
            LinkKind::Previous,
            format!("◀ {}", options.label(previous.ordinal)),
            CallbackAction::SelectDay(previous.ordinal),
        ));
    }
    if let Some(next) = state.next {
        links.push(NavLink::new(
            LinkKind::Next,
            format!("{} ▶", options.label(next.ordinal)),
            CallbackAction::SelectDay(next.ordinal),
        ));
    }
    links.push(NavLink::new(
        LinkKind::Home,
        options.home_label.clone(),
        CallbackAction::MainMenu,
    ));
    links
}

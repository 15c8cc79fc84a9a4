//! Paged day-selection keyboards and their callback grammar.

use std::fmt;

use daybook_model::Ordinal;
use serde::Serialize;

use crate::message::RenderOptions;

const PREV_PAGE: &str = "nav_prev_page_";
const NEXT_PAGE: &str = "nav_next_page_";
const SELECT_DAY: &str = "day_";
const PAGE_INFO: &str = "nav_page_info";
const MAIN_MENU: &str = "nav_main";

/// Grid dimensions for the day-selection keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyboardLayout {
    pub days_per_page: usize,
    pub buttons_per_row: usize,
}

impl Default for KeyboardLayout {
    fn default() -> Self {
        Self {
            days_per_page: 12,
            buttons_per_row: 3,
        }
    }
}

impl KeyboardLayout {
    /// Zero dimensions are treated as one.
    pub fn new(days_per_page: usize, buttons_per_row: usize) -> Self {
        Self {
            days_per_page: days_per_page.max(1),
            buttons_per_row: buttons_per_row.max(1),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Button {
    pub text: String,
    pub callback: String,
}

impl Button {
    fn new(text: impl Into<String>, action: &CallbackAction) -> Self {
        Self {
            text: text.into(),
            callback: action.to_string(),
        }
    }
}

/// One page of day buttons followed by an optional navigation row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Keyboard {
    pub rows: Vec<Vec<Button>>,
    /// Zero-based page actually shown.
    pub page: usize,
    pub total_pages: usize,
}

impl Keyboard {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn buttons(&self) -> impl Iterator<Item = &Button> {
        self.rows.iter().flatten()
    }
}

/// Build the keyboard page for `days`. Out-of-range pages are clamped.
pub fn day_selection(
    days: &[Ordinal],
    page: usize,
    layout: KeyboardLayout,
    options: &RenderOptions,
) -> Keyboard {
    let layout = KeyboardLayout::new(layout.days_per_page, layout.buttons_per_row);
    if days.is_empty() {
        return Keyboard::default();
    }
    let total_pages = days.len().div_ceil(layout.days_per_page);
    let page = page.min(total_pages - 1);

    let mut rows: Vec<Vec<Button>> = days
        .chunks(layout.days_per_page)
        .nth(page)
        .unwrap_or_default()
        .chunks(layout.buttons_per_row)
        .map(|row| {
            row.iter()
                .map(|day| Button::new(options.label(*day), &CallbackAction::SelectDay(*day)))
                .collect()
        })
        .collect();

    let mut nav = Vec::new();
    if page > 0 {
        nav.push(Button::new("◀ Back", &CallbackAction::PrevPage(page - 1)));
    }
    if total_pages > 1 {
        nav.push(Button::new(
            format!("📄 {}/{}", page + 1, total_pages),
            &CallbackAction::PageInfo,
        ));
    }
    if page + 1 < total_pages {
        nav.push(Button::new("Next ▶", &CallbackAction::NextPage(page + 1)));
    }
    if !nav.is_empty() {
        rows.push(nav);
    }

    Keyboard {
        rows,
        page,
        total_pages,
    }
}

/// Decoded button callback data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackAction {
    SelectDay(Ordinal),
    PrevPage(usize),
    NextPage(usize),
    PageInfo,
    MainMenu,
}

impl CallbackAction {
    /// `None` for anything outside the grammar.
    pub fn parse(data: &str) -> Option<Self> {
        if let Some(n) = data.strip_prefix(SELECT_DAY) {
            return parse_number(n).map(|n| Self::SelectDay(Ordinal::new(n)));
        }
        if let Some(p) = data.strip_prefix(PREV_PAGE) {
            return parse_number(p).map(|p| Self::PrevPage(p as usize));
        }
        if let Some(p) = data.strip_prefix(NEXT_PAGE) {
            return parse_number(p).map(|p| Self::NextPage(p as usize));
        }
        match data {
            PAGE_INFO => Some(Self::PageInfo),
            MAIN_MENU => Some(Self::MainMenu),
            _ => None,
        }
    }
}

fn parse_number(digits: &str) -> Option<u32> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

impl fmt::Display for CallbackAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SelectDay(day) => write!(f, "{SELECT_DAY}{day}"),
            Self::PrevPage(page) => write!(f, "{PREV_PAGE}{page}"),
            Self::NextPage(page) => write!(f, "{NEXT_PAGE}{page}"),
            Self::PageInfo => f.write_str(PAGE_INFO),
            Self::MainMenu => f.write_str(MAIN_MENU),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn days(range: std::ops::RangeInclusive<u32>) -> Vec<Ordinal> {
        range.map(Ordinal::new).collect()
    }

    fn callbacks(row: &[Button]) -> Vec<&str> {
        row.iter().map(|b| b.callback.as_str()).collect()
    }

    #[test]
    fn single_page_has_no_navigation_row() {
        let kb = day_selection(
            &days(1..=5),
            0,
            KeyboardLayout::default(),
            &RenderOptions::default(),
        );
        assert_eq!(kb.total_pages, 1);
        assert_eq!(kb.rows.len(), 2);
        assert_eq!(callbacks(&kb.rows[0]), ["day_1", "day_2", "day_3"]);
        assert_eq!(callbacks(&kb.rows[1]), ["day_4", "day_5"]);
        assert_eq!(kb.rows[0][0].text, "Day 1");
    }

    #[test]
    fn middle_page_has_full_navigation_row() {
        let kb = day_selection(
            &days(1..=30),
            1,
            KeyboardLayout::default(),
            &RenderOptions::default(),
        );
        assert_eq!(kb.total_pages, 3);
        assert_eq!(kb.rows[0][0].callback, "day_13");
        let nav = kb.rows.last().expect("nav row");
        assert_eq!(
            callbacks(nav),
            ["nav_prev_page_0", "nav_page_info", "nav_next_page_2"]
        );
        assert_eq!(nav[1].text, "📄 2/3");
    }

    #[test]
    fn page_is_clamped() {
        let kb = day_selection(
            &days(1..=13),
            99,
            KeyboardLayout::default(),
            &RenderOptions::default(),
        );
        assert_eq!(kb.page, 1);
        assert_eq!(callbacks(&kb.rows[0]), ["day_13"]);
        assert_eq!(
            callbacks(kb.rows.last().expect("nav row")),
            ["nav_prev_page_0", "nav_page_info"]
        );
    }

    #[test]
    fn empty_days_give_empty_keyboard() {
        let kb = day_selection(&[], 3, KeyboardLayout::default(), &RenderOptions::default());
        assert!(kb.is_empty());
        assert_eq!(kb.total_pages, 0);
    }

    #[test]
    fn zero_layout_is_usable() {
        let kb = day_selection(
            &days(1..=2),
            0,
            KeyboardLayout::new(0, 0),
            &RenderOptions::default(),
        );
        assert_eq!(kb.total_pages, 2);
        assert_eq!(kb.rows[0].len(), 1);
    }

    #[test]
    fn parses_callback_grammar() {
        assert_eq!(
            CallbackAction::parse("day_5"),
            Some(CallbackAction::SelectDay(Ordinal::new(5)))
        );
        assert_eq!(
            CallbackAction::parse("nav_prev_page_1"),
            Some(CallbackAction::PrevPage(1))
        );
        assert_eq!(
            CallbackAction::parse("nav_next_page_2"),
            Some(CallbackAction::NextPage(2))
        );
        assert_eq!(CallbackAction::parse("nav_page_info"), Some(CallbackAction::PageInfo));
        assert_eq!(CallbackAction::parse("nav_main"), Some(CallbackAction::MainMenu));
        for bad in ["day_", "day_x", "day_-1", "nav_next_page_", "nav", "", "day_+3"] {
            assert_eq!(CallbackAction::parse(bad), None, "{bad}");
        }
    }

    #[test]
    fn display_matches_parse() {
        for action in [
            CallbackAction::SelectDay(Ordinal::new(12)),
            CallbackAction::PrevPage(0),
            CallbackAction::NextPage(4),
            CallbackAction::PageInfo,
            CallbackAction::MainMenu,
        ] {
            assert_eq!(CallbackAction::parse(&action.to_string()), Some(action));
        }
    }
}

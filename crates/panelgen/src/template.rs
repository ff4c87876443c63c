//! Slot-based template rendering.
//!
//! A template is plain text containing slot tokens such as `SLUG` or
//! `PORTENUMS`. Rendering replaces every occurrence of each supplied slot's
//! token in a single left-to-right pass. Text inserted for a slot is never
//! scanned again, so a fragment that happens to contain another token is
//! emitted as is. Tokens of slots that were not supplied stay in the output
//! verbatim.

use std::fmt;

use indexmap::IndexMap;

/// A named placeholder recognized in templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Current year, for copyright headers.
    Year,
    /// Sanitized module identifier.
    Slug,
    /// Param/input/output/light enums.
    PortEnums,
    /// Widget placement calls.
    AddWidgets,
    /// Port and light configuration calls.
    ConfigWidgetName,
    /// Parameter descriptor `case` entries.
    CaseParamDescriptions,
}

impl Slot {
    /// Every slot.
    pub const ALL: [Slot; 6] = [
        Slot::Year,
        Slot::Slug,
        Slot::PortEnums,
        Slot::AddWidgets,
        Slot::ConfigWidgetName,
        Slot::CaseParamDescriptions,
    ];

    /// The literal token marking this slot in template text.
    pub fn token(self) -> &'static str {
        match self {
            Slot::Year => "YEAR",
            Slot::Slug => "SLUG",
            Slot::PortEnums => "PORTENUMS",
            Slot::AddWidgets => "ADDWIDGETS",
            Slot::ConfigWidgetName => "CONFIGWIDGETNAME",
            Slot::CaseParamDescriptions => "CASEPARAMDESCRIPTIONS",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Fragments to substitute, keyed by slot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlotValues(IndexMap<Slot, String>);

impl SlotValues {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the fragment for `slot`.
    pub fn with(mut self, slot: Slot, fragment: impl Into<String>) -> Self {
        self.insert(slot, fragment);
        self
    }

    /// Adds or replaces the fragment for `slot`.
    pub fn insert(&mut self, slot: Slot, fragment: impl Into<String>) {
        self.0.insert(slot, fragment.into());
    }

    /// Returns the fragment supplied for `slot`.
    pub fn get(&self, slot: Slot) -> Option<&str> {
        self.0.get(&slot).map(String::as_str)
    }

    /// Iterates over supplied slots in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Slot, &str)> {
        self.0.iter().map(|(slot, fragment)| (*slot, fragment.as_str()))
    }
}

/// A text template with slot tokens.
///
/// # Examples
///
/// ```
/// use panelgen::template::{Slot, SlotValues, Template};
///
/// let template = Template::new("struct SLUG : Module {}; // YEAR");
/// let values = SlotValues::new().with(Slot::Slug, "Gain");
///
/// assert_eq!(template.render(&values), "struct Gain : Module {}; // YEAR");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    text: String,
}

impl Template {
    /// Wraps template text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Returns the raw template text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the slots whose token occurs in the template.
    pub fn tokens_present(&self) -> Vec<Slot> {
        Slot::ALL
            .into_iter()
            .filter(|slot| self.text.contains(slot.token()))
            .collect()
    }

    /// Renders the template in a single pass.
    ///
    /// At each position the earliest token of a supplied slot is replaced by
    /// its fragment; when two tokens start at the same position the longer
    /// one wins. Inserted fragments are not rescanned.
    pub fn render(&self, values: &SlotValues) -> String {
        let mut candidates: Vec<(&str, &str)> = values
            .iter()
            .map(|(slot, fragment)| (slot.token(), fragment))
            .collect();
        candidates.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

        let mut rendered = String::with_capacity(self.text.len());
        let mut rest = self.text.as_str();

        loop {
            let next = candidates
                .iter()
                .filter_map(|(token, fragment)| {
                    rest.find(token).map(|pos| (pos, *token, *fragment))
                })
                // `min_by_key` keeps the first minimum, i.e. the longest token.
                .min_by_key(|(pos, _, _)| *pos);

            match next {
                Some((pos, token, fragment)) => {
                    rendered.push_str(&rest[..pos]);
                    rendered.push_str(fragment);
                    rest = &rest[pos + token.len()..];
                }
                None => {
                    rendered.push_str(rest);
                    return rendered;
                }
            }
        }
    }
}

impl From<&str> for Template {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Template {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replaces_every_occurrence() {
        let template = Template::new("SLUG and SLUG");
        let values = SlotValues::new().with(Slot::Slug, "Gain");

        assert_eq!(template.render(&values), "Gain and Gain");
    }

    #[test]
    fn test_unsupplied_token_is_left_verbatim() {
        let template = Template::new("// Copyright YEAR\nstruct SLUG {};");
        let values = SlotValues::new().with(Slot::Slug, "Gain");

        assert_eq!(template.render(&values), "// Copyright YEAR\nstruct Gain {};");
    }

    #[test]
    fn test_inserted_text_is_not_rescanned() {
        let template = Template::new("ADDWIDGETS / YEAR");
        let values = SlotValues::new()
            .with(Slot::AddWidgets, "widget for SLUG in YEAR")
            .with(Slot::Year, "2026")
            .with(Slot::Slug, "Gain");

        assert_eq!(template.render(&values), "widget for SLUG in YEAR / 2026");
    }

    #[test]
    fn test_result_does_not_depend_on_insertion_order() {
        let template = Template::new("YEAR SLUG PORTENUMS");
        let forward = SlotValues::new()
            .with(Slot::Year, "SLUG")
            .with(Slot::Slug, "PORTENUMS")
            .with(Slot::PortEnums, "enums");
        let backward = SlotValues::new()
            .with(Slot::PortEnums, "enums")
            .with(Slot::Slug, "PORTENUMS")
            .with(Slot::Year, "SLUG");

        assert_eq!(template.render(&forward), "SLUG PORTENUMS enums");
        assert_eq!(template.render(&forward), template.render(&backward));
    }

    #[test]
    fn test_unknown_text_untouched() {
        let template = Template::new("NUM_PARAMS, NUM_INPUTS");
        let values = SlotValues::new().with(Slot::Slug, "X");

        assert_eq!(template.render(&values), "NUM_PARAMS, NUM_INPUTS");
    }

    #[test]
    fn test_empty_values() {
        let template = Template::new("SLUG YEAR");
        assert_eq!(template.render(&SlotValues::new()), "SLUG YEAR");
    }

    #[test]
    fn test_tokens_present() {
        let template = Template::new("YEAR SLUG ADDWIDGETS");

        assert_eq!(
            template.tokens_present(),
            vec![Slot::Year, Slot::Slug, Slot::AddWidgets]
        );
    }
}

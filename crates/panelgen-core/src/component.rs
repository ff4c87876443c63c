//! Components extracted from a panel and their semantic categories.

use std::fmt;

use crate::{geometry::Shape, identifier::Identifier};

/// Semantic category of a component, selected by its fill color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// A knob, slider or switch (red).
    Param,
    /// An input jack (lime).
    Input,
    /// An output jack (blue).
    Output,
    /// An indicator light (magenta).
    Light,
    /// A free-form custom widget (yellow).
    Widget,
}

impl Category {
    /// All categories in generation order.
    pub const ALL: [Category; 5] = [
        Category::Param,
        Category::Input,
        Category::Output,
        Category::Light,
        Category::Widget,
    ];

    /// Maps a lower-cased color string to its category.
    ///
    /// Exactly one category is returned for a recognized alias; anything else
    /// is unclassified.
    ///
    /// # Examples
    ///
    /// ```
    /// use panelgen_core::component::Category;
    ///
    /// assert_eq!(Category::from_color("#f00"), Some(Category::Param));
    /// assert_eq!(Category::from_color("lime"), Some(Category::Input));
    /// assert_eq!(Category::from_color("#123456"), None);
    /// ```
    pub fn from_color(color: &str) -> Option<Self> {
        match color {
            "#ff0000" | "#f00" | "red" => Some(Self::Param),
            "#00ff00" | "#0f0" | "lime" => Some(Self::Input),
            "#0000ff" | "#00f" | "blue" => Some(Self::Output),
            "#ff00ff" | "#f0f" | "magenta" => Some(Self::Light),
            "#ffff00" | "#ff0" | "yellow" => Some(Self::Widget),
            _ => None,
        }
    }

    /// Suffix appended to a component name to form its enum member.
    ///
    /// Widgets have no enum member.
    pub fn enum_suffix(self) -> Option<&'static str> {
        match self {
            Self::Param => Some("PARAM"),
            Self::Input => Some("INPUT"),
            Self::Output => Some("OUTPUT"),
            Self::Light => Some("LIGHT"),
            Self::Widget => None,
        }
    }

    /// Name of the enum type listing this category's members.
    pub fn enum_name(self) -> Option<&'static str> {
        match self {
            Self::Param => Some("ParamId"),
            Self::Input => Some("InputId"),
            Self::Output => Some("OutputId"),
            Self::Light => Some("LightId"),
            Self::Widget => None,
        }
    }

    /// Count terminator closing this category's enum.
    pub fn count_terminator(self) -> Option<&'static str> {
        match self {
            Self::Param => Some("NUM_PARAMS"),
            Self::Input => Some("NUM_INPUTS"),
            Self::Output => Some("NUM_OUTPUTS"),
            Self::Light => Some("NUM_LIGHTS"),
            Self::Widget => None,
        }
    }

    /// Plural noun used in summaries.
    pub fn plural(self) -> &'static str {
        match self {
            Self::Param => "params",
            Self::Input => "inputs",
            Self::Output => "outputs",
            Self::Light => "lights",
            Self::Widget => "custom widgets",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Param => "param",
            Self::Input => "input",
            Self::Output => "output",
            Self::Light => "light",
            Self::Widget => "widget",
        };
        f.write_str(name)
    }
}

/// One shape found in the panel's components layer.
///
/// The name is the sanitized, upper-cased identifier of the shape's label.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentElement {
    name: Identifier,
    override_class: Option<String>,
    shape: Shape,
    color: String,
}

impl ComponentElement {
    /// Creates a component from an already resolved label, shape and color.
    ///
    /// `label` is the display part of the raw label; it is sanitized and
    /// upper-cased here. `color` is normalized to lower case.
    pub fn new(
        label: &str,
        override_class: Option<String>,
        shape: Shape,
        color: impl Into<String>,
    ) -> Self {
        Self {
            name: Identifier::sanitize(label).to_upper(),
            override_class: override_class.filter(|cls| !cls.is_empty()),
            shape,
            color: color.into().to_lowercase(),
        }
    }

    /// Returns the component identifier.
    pub fn name(&self) -> &Identifier {
        &self.name
    }

    /// Returns the explicit rendering class given after `#` in the label, if any.
    pub fn override_class(&self) -> Option<&str> {
        self.override_class.as_deref()
    }

    /// Returns the component geometry.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Returns the normalized fill color.
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Returns the category selected by this component's color, if any.
    pub fn category(&self) -> Option<Category> {
        Category::from_color(&self.color)
    }

    /// Returns the enum member naming this component within `category`.
    ///
    /// # Examples
    ///
    /// ```
    /// use panelgen_core::{component::{Category, ComponentElement}, geometry::Shape};
    ///
    /// let gain = ComponentElement::new("Gain", None, Shape::ellipse(1.0, 1.0, 1.0), "red");
    /// assert_eq!(gain.enum_member(Category::Param).as_deref(), Some("GAIN_PARAM"));
    /// ```
    pub fn enum_member(&self, category: Category) -> Option<String> {
        category
            .enum_suffix()
            .map(|suffix| format!("{}_{suffix}", self.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_alias_maps_to_exactly_one_category() {
        let table = [
            (["#ff0000", "#f00", "red"], Category::Param),
            (["#00ff00", "#0f0", "lime"], Category::Input),
            (["#0000ff", "#00f", "blue"], Category::Output),
            (["#ff00ff", "#f0f", "magenta"], Category::Light),
            (["#ffff00", "#ff0", "yellow"], Category::Widget),
        ];

        for (aliases, expected) in table {
            for alias in aliases {
                assert_eq!(Category::from_color(alias), Some(expected), "{alias}");
            }
        }
    }

    #[test]
    fn test_unknown_colors() {
        assert_eq!(Category::from_color("#123456"), None);
        assert_eq!(Category::from_color("green"), None);
        assert_eq!(Category::from_color(""), None);
    }

    #[test]
    fn test_element_name_is_sanitized_and_uppercased() {
        let el = ComponentElement::new("cutoff freq", None, Shape::ellipse(0.0, 0.0, 1.0), "#F00");

        assert_eq!(el.name(), "CUTOFF_FREQ");
        assert_eq!(el.color(), "#f00");
        assert_eq!(el.category(), Some(Category::Param));
    }

    #[test]
    fn test_empty_override_class_is_dropped() {
        let el = ComponentElement::new(
            "Gain",
            Some(String::new()),
            Shape::ellipse(0.0, 0.0, 1.0),
            "red",
        );
        assert_eq!(el.override_class(), None);

        let el = ComponentElement::new(
            "Gain",
            Some("sspo::LargeKnob".to_string()),
            Shape::ellipse(0.0, 0.0, 1.0),
            "red",
        );
        assert_eq!(el.override_class(), Some("sspo::LargeKnob"));
    }

    #[test]
    fn test_enum_member() {
        let el = ComponentElement::new("in", None, Shape::ellipse(0.0, 0.0, 1.0), "lime");

        assert_eq!(el.enum_member(Category::Input).as_deref(), Some("IN_INPUT"));
        assert_eq!(el.enum_member(Category::Widget), None);
    }
}

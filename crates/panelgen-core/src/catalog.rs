//! The classified, reading-order sorted collection of panel components.

use log::{info, warn};

use crate::component::{Category, ComponentElement};

/// Components grouped by [`Category`], each list sorted in reading order.
///
/// Lists are sorted once when the catalog is built and never reordered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentCatalog {
    params: Vec<ComponentElement>,
    inputs: Vec<ComponentElement>,
    outputs: Vec<ComponentElement>,
    lights: Vec<ComponentElement>,
    widgets: Vec<ComponentElement>,
}

impl ComponentCatalog {
    /// Partitions raw components by color and sorts each category.
    ///
    /// Components whose color is not a recognized alias are dropped and
    /// logged. Sorting uses the key `cy + 0.01 * cx` and is stable.
    ///
    /// # Examples
    ///
    /// ```
    /// use panelgen_core::{
    ///     catalog::ComponentCatalog,
    ///     component::{Category, ComponentElement},
    ///     geometry::Shape,
    /// };
    ///
    /// let elements = vec![
    ///     ComponentElement::new("b", None, Shape::ellipse(0.0, 20.0, 1.0), "red"),
    ///     ComponentElement::new("a", None, Shape::ellipse(0.0, 10.0, 1.0), "#f00"),
    ///     ComponentElement::new("x", None, Shape::ellipse(0.0, 10.0, 1.0), "#123456"),
    /// ];
    /// let catalog = ComponentCatalog::classify(elements);
    ///
    /// let names: Vec<_> = catalog.get(Category::Param).iter().map(|c| c.name().to_string()).collect();
    /// assert_eq!(names, ["A", "B"]);
    /// assert_eq!(catalog.len(), 2);
    /// ```
    pub fn classify(elements: impl IntoIterator<Item = ComponentElement>) -> Self {
        let mut catalog = Self::default();

        for element in elements {
            match element.category() {
                Some(category) => catalog.list_mut(category).push(element),
                None => warn!(
                    name = element.name().as_str(),
                    color = element.color();
                    "Component color does not match any category, skipping"
                ),
            }
        }

        for category in Category::ALL {
            catalog
                .list_mut(category)
                .sort_by(|a, b| a.shape().reading_order_key().total_cmp(&b.shape().reading_order_key()));
        }

        info!("{}", catalog.summary());
        catalog
    }

    /// Returns the components of one category in sorted order.
    pub fn get(&self, category: Category) -> &[ComponentElement] {
        match category {
            Category::Param => &self.params,
            Category::Input => &self.inputs,
            Category::Output => &self.outputs,
            Category::Light => &self.lights,
            Category::Widget => &self.widgets,
        }
    }

    /// Returns the parameter components.
    pub fn params(&self) -> &[ComponentElement] {
        &self.params
    }

    /// Returns the input components.
    pub fn inputs(&self) -> &[ComponentElement] {
        &self.inputs
    }

    /// Returns the output components.
    pub fn outputs(&self) -> &[ComponentElement] {
        &self.outputs
    }

    /// Returns the indicator light components.
    pub fn lights(&self) -> &[ComponentElement] {
        &self.lights
    }

    /// Returns the free-form widget components.
    pub fn widgets(&self) -> &[ComponentElement] {
        &self.widgets
    }

    /// Iterates over every category paired with its components, in generation order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[ComponentElement])> {
        Category::ALL
            .into_iter()
            .map(move |category| (category, self.get(category)))
    }

    /// Total number of classified components.
    pub fn len(&self) -> usize {
        self.iter().map(|(_, list)| list.len()).sum()
    }

    /// Returns `true` if no component was classified.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// One-line description of how many components each category holds.
    pub fn summary(&self) -> String {
        format!(
            "Found {} {}, {} {}, {} {}, {} {}, and {} {} in \"components\" layer.",
            self.params.len(),
            Category::Param.plural(),
            self.inputs.len(),
            Category::Input.plural(),
            self.outputs.len(),
            Category::Output.plural(),
            self.lights.len(),
            Category::Light.plural(),
            self.widgets.len(),
            Category::Widget.plural(),
        )
    }

    fn list_mut(&mut self, category: Category) -> &mut Vec<ComponentElement> {
        match category {
            Category::Param => &mut self.params,
            Category::Input => &mut self.inputs,
            Category::Output => &mut self.outputs,
            Category::Light => &mut self.lights,
            Category::Widget => &mut self.widgets,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Shape;

    fn circle(name: &str, cx: f64, cy: f64, color: &str) -> ComponentElement {
        ComponentElement::new(name, None, Shape::ellipse(cx, cy, 1.0), color)
    }

    fn names(list: &[ComponentElement]) -> Vec<String> {
        list.iter().map(|c| c.name().to_string()).collect()
    }

    #[test]
    fn test_reading_order() {
        let catalog = ComponentCatalog::classify(vec![
            circle("a", 10.0, 5.0, "red"),
            circle("b", 0.0, 5.0, "red"),
            circle("c", 5.0, 0.0, "red"),
        ]);

        assert_eq!(names(catalog.params()), ["C", "B", "A"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let catalog = ComponentCatalog::classify(vec![
            circle("first", 1.0, 1.0, "lime"),
            circle("second", 1.0, 1.0, "lime"),
            circle("third", 1.0, 1.0, "lime"),
        ]);

        assert_eq!(names(catalog.inputs()), ["FIRST", "SECOND", "THIRD"]);
    }

    #[test]
    fn test_categories_are_sorted_independently() {
        let catalog = ComponentCatalog::classify(vec![
            circle("out_low", 0.0, 90.0, "blue"),
            circle("in_low", 0.0, 80.0, "lime"),
            circle("out_high", 0.0, 10.0, "#00f"),
            circle("in_high", 0.0, 20.0, "#0f0"),
        ]);

        assert_eq!(names(catalog.inputs()), ["IN_HIGH", "IN_LOW"]);
        assert_eq!(names(catalog.outputs()), ["OUT_HIGH", "OUT_LOW"]);
    }

    #[test]
    fn test_classification_is_exclusive() {
        let catalog = ComponentCatalog::classify(vec![circle("gain", 0.0, 0.0, "#f00")]);

        assert_eq!(catalog.params().len(), 1);
        for category in [Category::Input, Category::Output, Category::Light, Category::Widget] {
            assert!(catalog.get(category).is_empty(), "{category} should be empty");
        }
    }

    #[test]
    fn test_unknown_color_is_dropped() {
        let catalog = ComponentCatalog::classify(vec![circle("odd", 0.0, 0.0, "#123456")]);

        assert!(catalog.is_empty());
    }

    #[test]
    fn test_summary() {
        let catalog = ComponentCatalog::classify(vec![
            circle("p", 0.0, 0.0, "red"),
            circle("i", 0.0, 0.0, "lime"),
            circle("j", 0.0, 0.0, "lime"),
            circle("w", 0.0, 0.0, "yellow"),
        ]);

        assert_eq!(
            catalog.summary(),
            "Found 1 params, 2 inputs, 0 outputs, 0 lights, and 1 custom widgets in \"components\" layer."
        );
        assert_eq!(catalog.len(), 4);
    }
}

#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;
    use crate::geometry::Shape;

    fn check_lists_are_sorted(points: Vec<(f64, f64)>) -> Result<(), TestCaseError> {
        let elements = points
            .iter()
            .enumerate()
            .map(|(i, (cx, cy))| {
                ComponentElement::new(&format!("c{i}"), None, Shape::ellipse(*cx, *cy, 1.0), "red")
            })
            .collect::<Vec<_>>();
        let catalog = ComponentCatalog::classify(elements);

        prop_assert_eq!(catalog.params().len(), points.len());
        for pair in catalog.params().windows(2) {
            prop_assert!(pair[0].shape().reading_order_key() <= pair[1].shape().reading_order_key());
        }
        Ok(())
    }

    proptest! {
        #[test]
        fn lists_are_sorted(points in prop::collection::vec((0.0f64..500.0, 0.0f64..500.0), 0..32)) {
            check_lists_are_sorted(points)?;
        }
    }
}

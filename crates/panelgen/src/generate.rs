//! Source fragment generators.
//!
//! Each generator is a pure function of the classified catalog and the
//! generator configuration, producing the text substituted for one template
//! slot. Categories are always emitted in catalog order and each category's
//! components in their sorted order.

mod enums;
mod params;
mod ports;
mod widgets;

pub use enums::port_enums;
pub use params::case_param_descriptions;
pub use ports::config_widget_names;
pub use widgets::add_widgets;

/// Formats a millimeter value as a float in shortest round-trip form.
///
/// Integral values keep one fractional digit (`2.0`), and negative zero
/// prints as `0.0`.
fn mm(value: f64) -> String {
    if value == 0.0 {
        return "0.0".to_string();
    }
    format!("{value:?}")
}

/// Formats a value as a C++ `float` literal (`0.5f`, `1.0f`).
fn float_literal(value: f64) -> String {
    if value == 0.0 {
        return "0.0f".to_string();
    }
    format!("{value:?}f")
}

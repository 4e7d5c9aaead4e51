//! Tooltip text for hovered records.

use crate::data::dataset::Record;
use crate::data::dimension::{XDimension, YDimension};

/// The three tooltip lines for one record: state name, then the X and Y
/// dimension readings with their prefixes and unit suffixes.
///
/// Both value lines key off the dimension actually bound to their own axis,
/// so e.g. the "Smokes: " prefix appears exactly when smokes drives Y.
pub fn tooltip_lines(record: &Record, x_dim: XDimension, y_dim: YDimension) -> [String; 3] {
    [
        record.state.clone(),
        format!(
            "{}{}{}",
            x_dim.tooltip_prefix(),
            record.x_value(x_dim),
            x_dim.tooltip_suffix()
        ),
        format!(
            "{}{}{}",
            y_dim.tooltip_prefix(),
            record.y_value(y_dim),
            y_dim.tooltip_suffix()
        ),
    ]
}

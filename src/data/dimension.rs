//! Axis dimension enumerations.
//!
//! Each record carries six numeric measures; exactly one X dimension and one
//! Y dimension are bound to the chart axes at a time. The two sets are
//! disjoint: demographic measures drive X, health outcomes drive Y.

/// Dimensions selectable for the horizontal axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum XDimension {
    #[default]
    Poverty,
    Age,
    Income,
}

/// Dimensions selectable for the vertical axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YDimension {
    #[default]
    Obesity,
    Smokes,
    Healthcare,
}

impl XDimension {
    /// All X dimensions, in display order (top label first).
    pub const ALL: [XDimension; 3] = [XDimension::Poverty, XDimension::Age, XDimension::Income];

    /// CSV column name this dimension reads from.
    pub fn column(self) -> &'static str {
        match self {
            XDimension::Poverty => "poverty",
            XDimension::Age => "age",
            XDimension::Income => "income",
        }
    }

    /// Text of the clickable axis-label control.
    pub fn control_label(self) -> &'static str {
        match self {
            XDimension::Poverty => "In Poverty (%)",
            XDimension::Age => "Age (Median)",
            XDimension::Income => "Household Income (Median)",
        }
    }

    /// Prefix shown before the value in the tooltip's X line.
    pub fn tooltip_prefix(self) -> &'static str {
        match self {
            XDimension::Poverty => "Poverty: ",
            XDimension::Age => "Age: ",
            XDimension::Income => "HHI: ",
        }
    }

    /// Unit suffix for the tooltip's X line. Only poverty is a percentage.
    pub fn tooltip_suffix(self) -> &'static str {
        match self {
            XDimension::Poverty => "%",
            XDimension::Age | XDimension::Income => "",
        }
    }
}

impl YDimension {
    /// All Y dimensions, in display order (innermost label first).
    pub const ALL: [YDimension; 3] = [
        YDimension::Obesity,
        YDimension::Smokes,
        YDimension::Healthcare,
    ];

    /// CSV column name this dimension reads from.
    pub fn column(self) -> &'static str {
        match self {
            YDimension::Obesity => "obesity",
            YDimension::Smokes => "smokes",
            YDimension::Healthcare => "healthcare",
        }
    }

    /// Text of the clickable axis-label control.
    pub fn control_label(self) -> &'static str {
        match self {
            YDimension::Obesity => "Obesity (%)",
            YDimension::Smokes => "Smokes (%)",
            YDimension::Healthcare => "Lacks Healthcare (%)",
        }
    }

    /// Prefix shown before the value in the tooltip's Y line.
    pub fn tooltip_prefix(self) -> &'static str {
        match self {
            YDimension::Obesity => "Obesity: ",
            YDimension::Smokes => "Smokes: ",
            YDimension::Healthcare => "Healthcare: ",
        }
    }

    /// Unit suffix for the tooltip's Y line. Every Y measure is a percentage.
    pub fn tooltip_suffix(self) -> &'static str {
        "%"
    }
}

use riskplot::{tooltip_lines, Record, XDimension, YDimension};

fn mk_record() -> Record {
    Record {
        id: "1".to_string(),
        state: "Alabama".to_string(),
        abbr: "AL".to_string(),
        poverty: 19.3,
        age: 38.1,
        income: 42830.0,
        obesity: 33.5,
        smokes: 21.1,
        healthcare: 13.9,
    }
}

#[test]
fn first_line_is_the_state_name() {
    let lines = tooltip_lines(&mk_record(), XDimension::Poverty, YDimension::Obesity);
    assert_eq!(lines[0], "Alabama");
}

#[test]
fn poverty_line_carries_a_percent_suffix() {
    let lines = tooltip_lines(&mk_record(), XDimension::Poverty, YDimension::Obesity);
    assert_eq!(lines[1], "Poverty: 19.3%");
}

#[test]
fn age_and_income_lines_carry_no_suffix() {
    let lines = tooltip_lines(&mk_record(), XDimension::Age, YDimension::Obesity);
    assert_eq!(lines[1], "Age: 38.1");
    let lines = tooltip_lines(&mk_record(), XDimension::Income, YDimension::Obesity);
    assert_eq!(lines[1], "HHI: 42830");
}

#[test]
fn y_line_always_carries_a_percent_suffix() {
    for y in YDimension::ALL {
        let lines = tooltip_lines(&mk_record(), XDimension::Age, y);
        assert!(
            lines[2].ends_with('%'),
            "Y line '{}' should end with %",
            lines[2]
        );
    }
}

#[test]
fn smokes_prefix_follows_the_y_selection() {
    // The Y prefix must key off the Y axis even when X is something else.
    let lines = tooltip_lines(&mk_record(), XDimension::Age, YDimension::Smokes);
    assert_eq!(lines[2], "Smokes: 21.1%");
    let lines = tooltip_lines(&mk_record(), XDimension::Poverty, YDimension::Healthcare);
    assert_eq!(lines[2], "Healthcare: 13.9%");
}

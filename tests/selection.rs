use riskplot::scale::padded_domain;
use riskplot::{ChartEvent, ChartState, Dataset, Record, XDimension, YDimension, TRANSITION_SECS};

fn mk_record(abbr: &str, values: [f64; 6]) -> Record {
    let [poverty, age, income, obesity, smokes, healthcare] = values;
    Record {
        id: abbr.to_string(),
        state: abbr.to_string(),
        abbr: abbr.to_string(),
        poverty,
        age,
        income,
        obesity,
        smokes,
        healthcare,
    }
}

fn mk_dataset() -> Dataset {
    Dataset {
        records: vec![
            mk_record("AA", [10.0, 30.0, 40000.0, 15.0, 10.0, 5.0]),
            mk_record("BB", [20.0, 40.0, 60000.0, 25.0, 30.0, 15.0]),
        ],
    }
}

fn close(a: (f64, f64), b: (f64, f64)) -> bool {
    (a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9
}

#[test]
fn initial_state_is_poverty_vs_obesity_settled() {
    let data = mk_dataset();
    let state = ChartState::new(&data);
    assert_eq!(state.x_dim, XDimension::Poverty);
    assert_eq!(state.y_dim, YDimension::Obesity);
    assert!(!state.is_animating(0.0));
    assert!(close(state.x_domain_at(0.0), (8.0, 24.0)));
    assert!(close(state.y_domain_at(0.0), (12.0, 30.0)));
}

#[test]
fn selecting_the_active_dimension_is_a_noop() {
    let data = mk_dataset();
    let mut state = ChartState::new(&data);
    let before = state.clone();
    let changed = state.apply(&data, ChartEvent::SelectX(XDimension::Poverty), 0.0);
    assert!(!changed, "re-selecting the active X dimension must not report a change");
    assert_eq!(state, before, "selection, domain, and motion must be untouched");
    let changed = state.apply(&data, ChartEvent::SelectY(YDimension::Obesity), 0.0);
    assert!(!changed);
    assert_eq!(state, before);
}

#[test]
fn selecting_y_leaves_the_x_axis_untouched() {
    let data = mk_dataset();
    let mut state = ChartState::new(&data);
    assert!(state.apply(&data, ChartEvent::SelectX(XDimension::Age), 0.0));
    let x_before = state.x_motion;

    // Well past the X transition, switch the Y axis only.
    assert!(state.apply(&data, ChartEvent::SelectY(YDimension::Smokes), 100.0));
    assert_eq!(state.x_dim, XDimension::Age, "X selection must survive a Y click");
    assert_eq!(state.y_dim, YDimension::Smokes);
    assert_eq!(state.x_motion, x_before, "a Y click must not restart the X motion");
    assert!(close(
        state.y_motion.target(),
        padded_domain(data.y_values(YDimension::Smokes))
    ));
}

#[test]
fn round_trip_restores_the_original_domain() {
    let data = mk_dataset();
    let mut state = ChartState::new(&data);
    let original = state.x_motion.target();
    state.apply(&data, ChartEvent::SelectX(XDimension::Age), 0.0);
    state.apply(&data, ChartEvent::SelectX(XDimension::Poverty), 10.0);
    assert!(close(state.x_motion.target(), original));
    assert!(close(state.x_domain_at(10.0 + TRANSITION_SECS), original));
}

#[test]
fn transition_settles_after_its_duration() {
    let data = mk_dataset();
    let mut state = ChartState::new(&data);
    state.apply(&data, ChartEvent::SelectX(XDimension::Age), 0.0);
    assert!(state.is_animating(0.5));
    assert!(!state.is_animating(TRANSITION_SECS));
    assert!(close(
        state.x_domain_at(TRANSITION_SECS),
        padded_domain(data.x_values(XDimension::Age))
    ));
}

#[test]
fn midflight_retarget_continues_from_the_displayed_domain() {
    let data = mk_dataset();
    let mut state = ChartState::new(&data);
    state.apply(&data, ChartEvent::SelectX(XDimension::Age), 0.0);
    let displayed = state.x_domain_at(0.5);
    // Halfway through, the displayed domain is already partway to age.
    assert!(!close(displayed, (8.0, 24.0)));

    state.apply(&data, ChartEvent::SelectX(XDimension::Income), 0.5);
    assert!(
        close(state.x_domain_at(0.5), displayed),
        "retargeting must not snap the displayed domain"
    );
    assert!(close(
        state.x_motion.target(),
        padded_domain(data.x_values(XDimension::Income))
    ));
}

#[test]
fn reset_settles_both_axes_on_the_new_records() {
    let data = mk_dataset();
    let mut state = ChartState::new(&data);
    state.apply(&data, ChartEvent::SelectX(XDimension::Age), 0.0);

    let replacement = Dataset {
        records: vec![mk_record("CC", [5.0, 35.0, 50000.0, 20.0, 12.0, 8.0])],
    };
    state.reset(&replacement);
    assert_eq!(state.x_dim, XDimension::Age, "reset keeps the selections");
    assert!(!state.is_animating(0.1));
    assert!(close(
        state.x_domain_at(0.1),
        padded_domain(replacement.x_values(XDimension::Age))
    ));
    assert!(close(state.y_domain_at(0.1), (16.0, 24.0)));
}

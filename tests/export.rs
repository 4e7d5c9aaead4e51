use riskplot::data::export::{write_snapshot_csv, write_snapshot_json};
use riskplot::{Dataset, Record, XDimension, YDimension};

fn mk_dataset() -> Dataset {
    let mk = |abbr: &str, values: [f64; 6]| Record {
        id: abbr.to_string(),
        state: format!("State {abbr}"),
        abbr: abbr.to_string(),
        poverty: values[0],
        age: values[1],
        income: values[2],
        obesity: values[3],
        smokes: values[4],
        healthcare: values[5],
    };
    Dataset {
        records: vec![
            mk("AA", [10.0, 30.0, 40000.0, 15.0, 10.0, 5.0]),
            mk("BB", [20.0, 40.0, 60000.0, 25.0, 30.0, 15.0]),
        ],
    }
}

#[test]
fn csv_snapshot_has_the_nine_column_header() {
    let mut buf = Vec::new();
    write_snapshot_csv(&mut buf, &mk_dataset()).unwrap();
    let s = String::from_utf8(buf).unwrap();
    let lines: Vec<&str> = s.trim().split('\n').collect();
    assert_eq!(lines[0], "id,state,abbr,poverty,age,income,obesity,smokes,healthcare");
    assert_eq!(lines.len(), 3, "header plus one line per record");
    assert!(lines[1].starts_with("AA,State AA,AA,10,30,40000,"));
}

#[test]
fn json_snapshot_records_the_axis_selection() {
    let mut buf = Vec::new();
    write_snapshot_json(&mut buf, &mk_dataset(), XDimension::Age, YDimension::Smokes).unwrap();
    let v: serde_json::Value = serde_json::from_slice(&buf).unwrap();
    assert_eq!(v["x_dimension"], "age");
    assert_eq!(v["y_dimension"], "smokes");
    let records = v["records"].as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["abbr"], "AA");
    assert_eq!(records[1]["income"], 60000.0);
}

#[test]
fn coerced_nan_measures_serialize_as_null() {
    let mut data = mk_dataset();
    data.records[0].poverty = f64::NAN;
    let mut buf = Vec::new();
    write_snapshot_json(&mut buf, &data, XDimension::Poverty, YDimension::Obesity).unwrap();
    let v: serde_json::Value = serde_json::from_slice(&buf).unwrap();
    assert!(v["records"][0]["poverty"].is_null());
    assert_eq!(v["records"][1]["poverty"], 20.0);
}

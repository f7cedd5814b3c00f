use serde_json::json;

use super::*;

#[test]
fn accepts_well_formed_payload() {
    let args = JumpArgs::validate(&json!({ "location": "f", "row": 0, "col": 0 })).expect("valid");
    assert_eq!(args.location, "f");
    assert_eq!(args.position(), Position::new(0, 0));
}

#[test]
fn accepts_empty_location() {
    assert!(JumpArgs::validate(&json!({ "location": "", "row": 1, "col": 2 })).is_ok());
}

#[test]
fn accepts_fractional_coordinates() {
    let args = JumpArgs::validate(&json!({ "location": "f", "row": 2.5, "col": 0.75 })).expect("valid");
    assert_eq!(args.row, 2.5);
    assert_eq!(args.position(), Position::new(2, 0));
}

#[test]
fn rejects_negative_coordinates() {
    assert_eq!(
        JumpArgs::validate(&json!({ "location": "f", "row": -1, "col": 0 })),
        Err(JumpArgsError::OutOfRange {
            field: "row",
            value: -1.0
        })
    );
}

#[test]
fn rejects_non_finite_coordinates() {
    // JSON has no NaN; serde_json turns it into null.
    assert_eq!(
        JumpArgs::validate(&json!({ "location": "f", "row": f64::NAN, "col": 0 })),
        Err(JumpArgsError::NotANumber("row"))
    );
    assert_eq!(
        JumpArgs::validate(&json!({ "location": "f", "row": 0, "col": "3" })),
        Err(JumpArgsError::NotANumber("col"))
    );
}

#[test]
fn rejects_missing_or_mistyped_location() {
    assert_eq!(JumpArgs::validate(&json!({ "row": 1, "col": 1 })), Err(JumpArgsError::MissingLocation));
    assert_eq!(
        JumpArgs::validate(&json!({ "location": 7, "row": 1, "col": 1 })),
        Err(JumpArgsError::MissingLocation)
    );
}

#[test]
fn rejects_non_objects() {
    assert_eq!(JumpArgs::validate(&json!(null)), Err(JumpArgsError::NotAnObject));
    assert_eq!(JumpArgs::validate(&json!(["f", 0, 0])), Err(JumpArgsError::NotAnObject));
}

#[test]
fn survives_json_round_trip() {
    let uri = Url::parse("file:///work/main.go").unwrap();
    let args = JumpArgs::at(&uri, Position::new(12, 4));

    let value = args.to_value();
    assert_eq!(value, json!({ "location": "file:///work/main.go", "row": 12, "col": 4 }));
    assert_eq!(JumpArgs::validate(&value), Ok(args.clone()));
    assert_eq!(serde_json::from_value::<JumpArgs>(value).unwrap(), args);
}

#[test]
fn fractional_coordinates_serialize_as_floats() {
    let args = JumpArgs {
        location: "f".to_string(),
        row: 1.5,
        col: 0.0,
    };
    assert_eq!(args.to_value(), json!({ "location": "f", "row": 1.5, "col": 0 }));
}

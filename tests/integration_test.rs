#![cfg(all(
    feature = "validate",
    feature = "dispatch",
    feature = "guard",
    feature = "generator"
))]
//! End-to-end scenarios combining several combinators.

use std::collections::BTreeMap;

use combinate::prelude::*;
use combinate::{curry2, partial};

type Record = BTreeMap<&'static str, &'static str>;

/// A loosely typed input: only the record variant carries keys.
#[derive(Debug, Clone)]
enum Value {
    Record(Record),
    Text(&'static str),
}

impl Keyed for Value {
    fn has_key(&self, key: &str) -> bool {
        match self {
            Self::Record(fields) => fields.has_key(key),
            Self::Text(_) => false,
        }
    }
}

fn record(pairs: &[(&'static str, &'static str)]) -> Value {
    Value::Record(pairs.iter().copied().collect())
}

#[test]
fn test_fruit_pipeline() {
    let is_record = cond("arg must be a record", |subject: &Value| {
        matches!(subject, Value::Record(_))
    });
    let fruit_checks = validator([is_record.clone(), has_keys(["type", "color"])]);

    assert!(fruit_checks.check(&record(&[("type", "gala"), ("color", "green")])).is_empty());
    assert_eq!(
        fruit_checks.check(&record(&[("type", "cara cara")])),
        vec!["Must have values for keys: type color"]
    );
    assert_eq!(
        fruit_checks.check(&record(&[])),
        vec!["Must have values for keys: type color"]
    );
    assert_eq!(
        fruit_checks.check(&Value::Text("apple")),
        vec!["arg must be a record", "Must have values for keys: type color"]
    );

    let describe = condition1([is_record, has_keys(["type", "color"])]).guard(|fruit: Value| match fruit {
        Value::Record(fields) => format!("{} {}", fields["color"], fields["type"]),
        Value::Text(text) => text.to_owned(),
    });

    assert_eq!(
        describe(record(&[("type", "gala"), ("color", "green")])).as_deref(),
        Ok("green gala")
    );
    assert_eq!(
        describe(record(&[("color", "orange")]))
            .unwrap_err()
            .to_string(),
        "Must have values for keys: type color"
    );
    assert_eq!(
        describe(Value::Text("gala")).unwrap_err().messages(),
        ["arg must be a record", "Must have values for keys: type color"]
    );
}

#[test]
fn test_checked_square_through_adapters() {
    let square_precondition = condition1([
        cond("arg must not be zero", complement(|value: &i64| *value == 0)),
        cond("arg must be positive", |value: &i64| *value > 0),
    ]);
    let checked_square = square_precondition.guard(|value: i64| value * value);

    let results: Vec<Result<i64, String>> = [3, 0, -2]
        .into_iter()
        .map(|value| checked_square(value).map_err(|error| error.to_string()))
        .collect();

    assert_eq!(
        results,
        vec![
            Ok(9),
            Err(String::from("arg must not be zero, arg must be positive")),
            Err(String::from("arg must be positive")),
        ]
    );
}

#[test]
fn test_sparse_product_with_fnull() {
    let safe_mult = fnull(|total: i64, element: i64| total * element, (1, 1));
    let values = vec![Some(2), None, Some(3), None, Some(7)];
    let product = values
        .into_iter()
        .fold(1, |total, element| safe_mult((Some(total), element)));
    assert_eq!(product, 42);
}

#[test]
fn test_curried_and_partial_configuration() {
    fn scale(value: i64, factor: i64, offset: i64) -> i64 {
        value * factor + offset
    }

    let doubled_plus_one = partial!(|value: i64, factor: i64| scale(value, factor, 1), __, __);
    let by_ten = curry2!(doubled_plus_one)(10);
    assert_eq!(by_ten(4), 41);

    let mapped = mapcat(|value: i64| [by_ten(value), by_ten(-value)], vec![1, 2]);
    assert_eq!(mapped, vec![11, -9, 21, -19]);
}

#[derive(Debug)]
enum Shape {
    Circle { radius: f64 },
    Square { side: f64 },
}

impl Tagged for Shape {
    fn tag(&self) -> &str {
        match self {
            Self::Circle { .. } => "circle",
            Self::Square { .. } => "square",
        }
    }
}

#[test]
fn test_dispatch_with_validated_fallback() {
    let area = Dispatch::new()
        .or(isa("circle", |shape: &Shape| match shape {
            Shape::Circle { radius } => std::f64::consts::PI * radius * radius,
            Shape::Square { .. } => f64::NAN,
        }))
        .or(isa("square", |shape: &Shape| match shape {
            Shape::Square { side } => side * side,
            Shape::Circle { .. } => f64::NAN,
        }));

    let positive_size = validator([cond("size must be positive", |shape: &Shape| match shape {
        Shape::Circle { radius } => *radius > 0.0,
        Shape::Square { side } => *side > 0.0,
    })]);

    let shapes = [Shape::Square { side: 3.0 }, Shape::Circle { radius: -1.0 }];
    let reports: Vec<(Option<f64>, Vec<String>)> = shapes
        .iter()
        .map(|shape| (area.resolve(shape), positive_size.check(shape)))
        .collect();

    assert_eq!(reports[0], (Some(9.0), Vec::new()));
    assert_eq!(reports[1].1, vec!["size must be positive"]);
    assert!(reports[1].0.is_some());
}

#[test]
fn test_generated_parameter_names() {
    let mut names = UniqueStrings::starting_at(0);
    let generated: Result<Vec<String>, _> = repeatedly(3, |_| names.generate("argument")).into_iter().collect();
    let parameters = interpose(String::from(", "), generated.unwrap());
    assert_eq!(parameters.concat(), "argument0, argument1, argument2");
}

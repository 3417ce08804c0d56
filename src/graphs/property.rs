use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Weight;

pub type Properties = BTreeMap<String, PropertyValue>;

/// A dynamically typed property as stored on nodes and relationships.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Null,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),
    List(Vec<PropertyValue>),
}

impl PropertyValue {
    /// Interprets the value as a relationship weight. Returns `None` for
    /// anything that is not a finite number.
    pub fn as_weight(&self) -> Option<Weight> {
        let weight = match self {
            PropertyValue::Integer(value) => *value as Weight,
            PropertyValue::Float(value) => *value,
            PropertyValue::String(value) => value.trim().parse::<Weight>().ok()?,
            _ => return None,
        };

        weight.is_finite().then_some(weight)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        PropertyValue::Float(value)
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        PropertyValue::Integer(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::String(value.to_string())
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Boolean(value)
    }
}

#[cfg(test)]
mod tests {
    use super::PropertyValue;

    #[test]
    fn numeric_values_are_weights() {
        assert_eq!(PropertyValue::Float(12.0).as_weight(), Some(12.0));
        assert_eq!(PropertyValue::Integer(3).as_weight(), Some(3.0));
        assert_eq!(PropertyValue::from(" 2.5 ").as_weight(), Some(2.5));
    }

    #[test]
    fn non_numeric_values_are_not_weights() {
        assert_eq!(PropertyValue::Null.as_weight(), None);
        assert_eq!(PropertyValue::Boolean(true).as_weight(), None);
        assert_eq!(PropertyValue::from("heavy").as_weight(), None);
        assert_eq!(PropertyValue::Float(f64::NAN).as_weight(), None);
        assert_eq!(PropertyValue::Float(f64::INFINITY).as_weight(), None);
        assert_eq!(
            PropertyValue::List(vec![PropertyValue::Integer(1)]).as_weight(),
            None
        );
    }

    #[test]
    fn json_numbers_keep_their_kind() {
        let integer: PropertyValue = serde_json::from_str("12").unwrap();
        let float: PropertyValue = serde_json::from_str("12.0").unwrap();
        assert_eq!(integer, PropertyValue::Integer(12));
        assert_eq!(float, PropertyValue::Float(12.0));
    }
}

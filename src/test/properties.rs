use crate::property::{Properties, PropertyValue};

pub(crate) fn id(id: &str) -> Properties {
    let mut properties = Properties::new();
    properties.insert("id".to_string(), id.into());
    properties
}

/// Every kind of property value, including nested containers, in a non-alphabetical order.
pub(crate) fn mixed() -> Properties {
    let mut properties = Properties::new();
    properties.insert("name".to_string(), "river".into());
    properties.insert("count".to_string(), 42.into());
    properties.insert("large".to_string(), PropertyValue::Integer(i64::MAX));
    properties.insert("ratio".to_string(), 0.25.into());
    properties.insert("visible".to_string(), false.into());
    properties.insert("missing".to_string(), PropertyValue::Null);
    properties.insert(
        "tags".to_string(),
        PropertyValue::from(vec![
            PropertyValue::from("a"),
            PropertyValue::from(1),
            PropertyValue::Null,
        ]),
    );
    properties.insert(
        "meta".to_string(),
        [
            ("z", PropertyValue::from(1)),
            ("a", PropertyValue::from(vec![1.5, 2.5])),
        ]
        .into_iter()
        .collect(),
    );
    properties
}

/// Builds a [`Value`](crate::Value) from JSON-like syntax.
///
/// Literals go through `Value::from`, so integers become
/// [`Number::Integer`](crate::Number::Integer) and string literals become
/// [`Value::String`](crate::Value::String). Decimals have no literal form;
/// build them with `Value::from(decimal)`.
///
/// ```rust
/// use serde_props::props;
///
/// let doc = props!({"server": {"port": 8080, "tags": ["a", "b"]}});
/// assert_eq!(doc.to_string(), r#"{"server":{"port":8080,"tags":["a","b"]}}"#);
/// ```
#[macro_export]
macro_rules! props {
    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Array(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::props!($elem)),*])
    };

    ({}) => {
        $crate::Value::Object($crate::PropsMap::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::PropsMap::new();
        $(
            object.insert($key.to_string(), $crate::props!($value));
        )*
        $crate::Value::Object(object)
    }};

    ($other:expr) => {
        $crate::Value::from($other)
    };
}

#[cfg(test)]
mod tests {
    use crate::{Number, PropsMap, Value};

    #[test]
    fn test_props_macro_primitives() {
        assert_eq!(props!(true), Value::Bool(true));
        assert_eq!(props!(false), Value::Bool(false));
        assert_eq!(props!(42), Value::Number(Number::from(42)));
        assert_eq!(props!("hello"), Value::String("hello".to_string()));
    }

    #[test]
    fn test_props_macro_arrays() {
        assert_eq!(props!([]), Value::Array(vec![]));
        assert_eq!(
            props!([1, "foo", true]),
            Value::Array(vec![Value::from(1), Value::from("foo"), Value::Bool(true)])
        );
    }

    #[test]
    fn test_props_macro_objects() {
        assert_eq!(props!({}), Value::Object(PropsMap::new()));

        let obj = props!({"a": {"b": 1}, "c": "x"});
        let map = obj.as_object().unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(obj.get("a").and_then(|a| a.get("b")), Some(&Value::from(1)));
        assert_eq!(map.get("c"), Some(&Value::from("x")));
    }
}

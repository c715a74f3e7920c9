//! Typed extraction from parsed documents.
//!
//! [`Value`] implements [`serde::Deserializer`], so a parsed document can be
//! read straight into any `T: Deserialize`:
//!
//! ```rust
//! use serde::Deserialize;
//! use serde_props::from_str;
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct Server { host: String, port: u16, tags: Vec<String> }
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct Config { server: Server, debug: bool }
//!
//! let config: Config = from_str("server.host=localhost\nserver.port=8080\n\
//!                                server.tags=a,b\ndebug=false").unwrap();
//! assert_eq!(config.server.port, 8080);
//! assert_eq!(config.server.tags, vec!["a", "b"]);
//! ```
//!
//! ## Number mapping
//!
//! Integers are offered as `i64` or `u64` when they fit. Larger integers
//! and all decimals are offered as `f64`, so precision may be lost when
//! deserializing them into Rust primitives.

use crate::{Error, Number, Result, Value};
use serde::de::value::{MapDeserializer, SeqDeserializer};
use serde::de::{self, DeserializeOwned, IntoDeserializer, Visitor};
use serde::forward_to_deserialize_any;

/// Deserializes an instance of `T` from a [`Value`].
///
/// # Errors
///
/// Returns [`Error::Custom`] when the value's shape does not match `T`.
pub fn from_value<T>(value: Value) -> Result<T>
where
    T: DeserializeOwned,
{
    T::deserialize(value)
}

fn visit_number<'de, V>(number: Number, visitor: V) -> Result<V::Value>
where
    V: Visitor<'de>,
{
    if let Some(i) = number.as_i64() {
        return visitor.visit_i64(i);
    }
    if let Some(u) = number.as_u64() {
        return visitor.visit_u64(u);
    }
    visitor.visit_f64(number.as_f64())
}

impl<'de> de::Deserializer<'de> for Value {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        match self {
            Value::Bool(b) => visitor.visit_bool(b),
            Value::Number(n) => visit_number(n, visitor),
            Value::String(s) => visitor.visit_string(s),
            Value::Array(arr) => {
                let mut seq = SeqDeserializer::<_, Error>::new(arr.into_iter());
                let value = visitor.visit_seq(&mut seq)?;
                seq.end()?;
                Ok(value)
            }
            Value::Object(obj) => {
                let mut map = MapDeserializer::<_, Error>::new(obj.into_iter());
                let value = visitor.visit_map(&mut map)?;
                map.end()?;
                Ok(value)
            }
        }
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_some(self)
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        match self {
            Value::String(variant) => visitor.visit_enum(variant.into_deserializer()),
            other => Err(Error::custom(format!(
                "expected a unit variant name, found {}",
                other
            ))),
        }
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct seq tuple tuple_struct map struct
        identifier ignored_any
    }
}

impl<'de> IntoDeserializer<'de, Error> for Value {
    type Deserializer = Self;

    fn into_deserializer(self) -> Self::Deserializer {
        self
    }
}

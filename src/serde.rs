use crate::Decimal;
use core::fmt;
use core::str::FromStr;
use serde::{de, ser};

// Serialized as the canonical string so no precision is lost in transit.
impl ser::Serialize for Decimal {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

struct DecimalVisitor;

impl de::Visitor<'_> for DecimalVisitor {
    type Value = Decimal;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "a string containing a decimal number")
    }

    fn visit_str<E>(self, value: &str) -> Result<Decimal, E>
    where
        E: de::Error,
    {
        Decimal::from_str(value).map_err(|_| E::invalid_value(de::Unexpected::Str(value), &self))
    }
}

impl<'de> de::Deserialize<'de> for Decimal {
    fn deserialize<D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_str(DecimalVisitor)
    }
}

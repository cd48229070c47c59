//! Serde support, through the canonical text forms.

use std::fmt;

use crate::cal::datetime::{LocalDate, LocalTime, LocalDateTime};


macro_rules! text_serde {
    ($type: ident, $visitor: ident, $expecting: expr) => {
        impl ::serde::Serialize for $type {
            #[inline]
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $type {
            #[inline]
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<$type, D::Error> {
                use ::serde::de;

                struct $visitor;

                impl<'de> de::Visitor<'de> for $visitor {
                    type Value = $type;

                    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                        f.write_str($expecting)
                    }

                    #[inline]
                    fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<$type, E> {
                        let text = std::str::from_utf8(value).map_err(de::Error::custom)?;
                        self.visit_str(text)
                    }

                    #[inline]
                    fn visit_str<E: de::Error>(self, value: &str) -> Result<$type, E> {
                        value.parse().map_err(de::Error::custom)
                    }
                }

                deserializer.deserialize_str($visitor)
            }
        }
    };
}

text_serde!(LocalDate, LocalDateVisitor, "a date written as YYYY-MM-DD");
text_serde!(LocalTime, LocalTimeVisitor, "a time written as HH:MM:SS[.fraction]");
text_serde!(LocalDateTime, LocalDateTimeVisitor, "a date-time written as YYYY-MM-DDTHH:MM:SS[.fraction]");

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};

/// Formats a record member for the `{Name: value,...}` debug rendering.
pub trait FieldDisplay {
    fn fmt_field(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

macro_rules! field_display_via_display {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl FieldDisplay for $ty {
                fn fmt_field(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Display::fmt(self, f)
                }
            }
        )+
    };
}

field_display_via_display!(String, bool, i32, i64, DateTime<Utc>);

impl<T: FieldDisplay> FieldDisplay for Vec<T> {
    fn fmt_field(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (index, item) in self.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            item.fmt_field(f)?;
        }
        f.write_str("]")
    }
}

impl<K: FieldDisplay, V: FieldDisplay> FieldDisplay for BTreeMap<K, V> {
    fn fmt_field(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (index, (key, value)) in self.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            key.fmt_field(f)?;
            f.write_str("=")?;
            value.fmt_field(f)?;
        }
        f.write_str("}")
    }
}

/// Declares a closed set of wire strings as a Rust enum.
///
/// Each variant maps to exactly one wire value. Parsing is an exact,
/// case-sensitive lookup; anything outside the table is rejected with
/// [`DomainError::InvalidArgument`](crate::DomainError::InvalidArgument).
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$variant_meta:meta])* $variant:ident => $value:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $( $(#[$variant_meta])* $variant ),+
        }

        impl $name {
            const VALUES: &'static [$name] = &[$($name::$variant),+];

            pub const fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $value ),+
                }
            }

            pub fn values() -> &'static [$name] {
                Self::VALUES
            }

            pub fn from_value(value: &str) -> Result<Self, $crate::DomainError> {
                if value.is_empty() {
                    return Err($crate::DomainError::empty_value());
                }
                match value {
                    $( $value => Ok($name::$variant), )+
                    other => Err($crate::DomainError::unknown_value(other)),
                }
            }
        }

        impl $crate::WireEnum for $name {
            const TYPE_NAME: &'static str = stringify!($name);

            fn values() -> &'static [Self] {
                Self::VALUES
            }

            fn as_str(&self) -> &'static str {
                $name::as_str(self)
            }

            fn from_value(value: &str) -> Result<Self, $crate::DomainError> {
                $name::from_value(value)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::DomainError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                Self::from_value(value)
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = <::std::borrow::Cow<'de, str> as ::serde::Deserialize>::deserialize(deserializer)?;
                Self::from_value(&raw).map_err(::serde::de::Error::custom)
            }
        }

        impl $crate::FieldDisplay for $name {
            fn fmt_field(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

/// Adds the fluent `with_*` setters, `new()`, and the `{Name: value,...}`
/// `Display` rendering to a record whose members are all `Option<T>`.
///
/// ```ignore
/// fluent_record!(Tag {
///     with_key(key: String) => "Key",
///     with_value(value: String) => "Value",
/// });
/// ```
#[macro_export]
macro_rules! fluent_record {
    ($record:ident { $( $setter:ident($field:ident: $ty:ty) => $wire:literal ),* $(,)? }) => {
        impl $record {
            pub fn new() -> Self {
                Self::default()
            }

            $(
                pub fn $setter(mut self, value: impl Into<$ty>) -> Self {
                    self.$field = Some(value.into());
                    self
                }
            )*
        }

        impl ::std::fmt::Display for $record {
            #[allow(unused_assignments, unused_mut, unused_variables)]
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str("{")?;
                let mut separator = "";
                $(
                    if let Some(value) = &self.$field {
                        f.write_str(separator)?;
                        f.write_str($wire)?;
                        f.write_str(": ")?;
                        $crate::FieldDisplay::fmt_field(value, f)?;
                        separator = ",";
                    }
                )*
                f.write_str("}")
            }
        }

        impl $crate::FieldDisplay for $record {
            fn fmt_field(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(self, f)
            }
        }
    };
}

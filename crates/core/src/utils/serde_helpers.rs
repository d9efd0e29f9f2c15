//! Serde utility helpers for case-insensitive deserialization

/// Macro to implement case-insensitive deserialization for enums
///
/// Usage:
/// ```ignore
/// impl_case_insensitive_deserialize!(
///     MyEnum,
///     Variant1 => "variant1",
///     Variant2 => "variant2"
/// );
/// ```
#[macro_export]
macro_rules! impl_case_insensitive_deserialize {
    ($enum_type:ty, $($variant:ident => $str_val:expr),+ $(,)?) => {
        impl<'de> serde::Deserialize<'de> for $enum_type {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                match s.to_lowercase().as_str() {
                    $(
                        $str_val => Ok(Self::$variant),
                    )+
                    _ => Err(serde::de::Error::custom(format!(
                        "unknown variant '{}', expected one of: {}",
                        s,
                        vec![$($str_val),+].join(", ")
                    ))),
                }
            }
        }
    };
}

//! Macro for implementing Display and FromStr for label enums
//!
//! Generates both conversions from one variant-to-label table. Parsing is
//! case-insensitive; display always uses the table's lowercase label.
//!
//! # Example
//!
//! ```rust
//! use buildingx_domain::impl_domain_label_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Feature {
//!     DeviceInfo,
//!     Connectivity,
//! }
//!
//! impl_domain_label_conversions!(Feature {
//!     DeviceInfo => "deviceinfo",
//!     Connectivity => "connectivity",
//! });
//!
//! assert_eq!("DeviceInfo".parse::<Feature>(), Ok(Feature::DeviceInfo));
//! assert_eq!(Feature::Connectivity.to_string(), "connectivity");
//! ```

/// Implements Display and FromStr traits for label enums
///
/// # Arguments
///
/// * `$enum_name` - The name of the enum type
/// * `$variant => $str` - Mapping of enum variants to their lowercase labels
#[macro_export]
macro_rules! impl_domain_label_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => write!(f, $str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}

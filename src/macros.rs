//! Macros for building fields literally.
//!
//! # Examples
//!
//! ```
//! use rust_log_formatter::fields;
//!
//! let fields = fields! {
//!     "user_id" => 42,
//!     "action" => "login",
//! };
//! let keys: Vec<&str> = fields.ordered_keys().collect();
//! assert_eq!(keys, ["user_id", "action"]);
//! ```

/// Build a [`Fields`](crate::Fields) map, keeping the written key order.
///
/// A key written twice keeps its first position and takes the last value.
///
/// # Examples
///
/// ```
/// use rust_log_formatter::{fields, FieldValue};
///
/// let empty = fields! {};
/// assert!(empty.is_empty());
///
/// let fields = fields! { "a" => 1, "b" => "two", "a" => 3 };
/// assert_eq!(fields.get("a"), Some(&FieldValue::Int(3)));
/// assert_eq!(fields.ordered_keys().next(), Some("a"));
/// ```
#[macro_export]
macro_rules! fields {
    () => {
        $crate::Fields::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut fields = $crate::Fields::new();
        $(
            fields.insert($key, $value);
        )+
        fields
    }};
}

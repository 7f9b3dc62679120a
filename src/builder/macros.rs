//! Macros for ergonomic trigger map construction.

/// Build a [`Triggers`](crate::core::Triggers) map from `key => value` pairs.
///
/// # Example
///
/// ```
/// use ratchet::triggers;
///
/// let triggers = triggers! {
///     "hash" => "potatoes",
///     "tag" => "v1",
/// };
///
/// assert_eq!(triggers.len(), 2);
/// assert!(triggers!().is_empty());
/// ```
#[macro_export]
macro_rules! triggers {
    () => {
        $crate::core::Triggers::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut triggers = $crate::core::Triggers::new();
        $(
            triggers.insert($key, $value);
        )+
        triggers
    }};
}

//! Macros for declaring variables.

/// Declare fresh variable names, each labelled with its identifier.
///
/// # Example
///
/// ```
/// use typevar::names;
///
/// names!(accumulator, counter);
/// assert_eq!(counter.label(), "counter");
/// assert_ne!(accumulator, counter);
/// ```
#[macro_export]
macro_rules! names {
    ($($name:ident),+ $(,)?) => {
        $(
            let $name = $crate::core::Name::new(stringify!($name));
        )+
    };
}

macro_rules! all_the_tuples {
    ($name:ident) => {
        $name!([]);
        $name!([T1]);
        $name!([T1, T2]);
        $name!([T1, T2, T3]);
        $name!([T1, T2, T3, T4]);
        $name!([T1, T2, T3, T4, T5]);
        $name!([T1, T2, T3, T4, T5, T6]);
        $name!([T1, T2, T3, T4, T5, T6, T7]);
        $name!([T1, T2, T3, T4, T5, T6, T7, T8]);
        $name!([T1, T2, T3, T4, T5, T6, T7, T8, T9]);
        $name!([T1, T2, T3, T4, T5, T6, T7, T8, T9, T10]);
        $name!([T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11]);
        $name!([T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11, T12]);
    };
}

/// Creates a `Box<dyn Port>` from an adapter value, optionally including supertraits.
///
/// # Syntax
/// ```text
/// boxed!(value; Trait [+ SuperTrait1 [+ SuperTrait2 ...]])
/// ```
///
/// # Examples
/// ```rust
/// use hexon::boxed;
///
/// trait Adder: Send + Sync {
///     fn add(&self, a: f64, b: f64) -> f64;
/// }
///
/// struct AdderAdapter;
///
/// impl Adder for AdderAdapter {
///     fn add(&self, a: f64, b: f64) -> f64 {
///         a + b
///     }
/// }
///
/// let adder: Box<dyn Adder> = boxed!(AdderAdapter; Adder);
/// assert_eq!(adder.add(1.0, 2.0), 3.0);
/// ```
#[macro_export]
macro_rules! boxed {
    ($val:expr ; $port:tt $($super_traits:tt)*) => {{
        $crate::__private::Box::new($val) as $crate::__private::Box<dyn $port $($super_traits)*>
    }};
}

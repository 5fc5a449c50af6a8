#[macro_export]
macro_rules! nested {
    // Handle null
    (null) => {
        $crate::SparseValue::Null
    };

    // Handle true
    (true) => {
        $crate::SparseValue::Bool(true)
    };

    // Handle false
    (false) => {
        $crate::SparseValue::Bool(false)
    };

    // Handle empty array
    ([]) => {
        $crate::SparseValue::Array(vec![])
    };

    // Handle non-empty array
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::SparseValue::Array(vec![$($crate::nested!($elem)),*])
    };

    // Handle empty object
    ({}) => {
        $crate::SparseValue::Object($crate::SparseMap::new())
    };

    // Handle non-empty object
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::SparseMap::new();
        $(
            object.insert($key.to_string(), $crate::nested!($value));
        )*
        $crate::SparseValue::Object(object)
    }};

    // Fallback for any other expression
    ($other:expr) => {{
        $crate::to_value(&$other).unwrap_or($crate::SparseValue::Null)
    }};
}

//! Numeric comparisons: `GreaterThan:N`, `LessThan:N`.
//!
//! Both are strict. `N` may be any float literal (`50`, `-1.5`).

crate::rule! {
    /// Passes when the number is strictly greater than the argument.
    pub greater_than("GreaterThan") for number, arg(bound: f64);
    rule(input) { input > bound }
    error(input) { format!("must be greater than {bound}") }
}

crate::rule! {
    /// Passes when the number is strictly less than the argument.
    pub less_than("LessThan") for number, arg(bound: f64);
    rule(input) { input < bound }
    error(input) { format!("must be less than {bound}") }
}

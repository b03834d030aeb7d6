/// My ternary expression handler.  Rust's `if` is already an
/// expression, but `cargo fmt` spreads it over five lines, and the
/// border rules of the seam search read far better as one-liners.
#[macro_export]
macro_rules! cq {
    ($condition: expr, $_true: expr, $_false: expr) => {
        if $condition {
            $_true
        } else {
            $_false
        }
    };
}

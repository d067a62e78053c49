// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression: literals, consts, or vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! push_line {
    // Report line shorthand!

    // Blank separator line
    ($lines:expr) => {
        $lines.push(::std::string::String::new())
    };
    // format!-style line
    ($lines:expr, $($arg:tt)+) => {
        $lines.push(::std::format!($($arg)+))
    };
}

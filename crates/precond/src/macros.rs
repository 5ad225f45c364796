//! Early-return guard macro.

/// Returns early with a [`CheckError`](crate::CheckError) when a condition is false.
///
/// The enclosing function may return any error type implementing
/// `From<CheckError>`. Without a message the failure reads
/// `Condition failed - <condition source>`.
///
/// ```
/// use precond::CheckError;
///
/// fn halve(n: i32) -> Result<i32, CheckError> {
///     precond::verify!(n % 2 == 0, "cannot halve {} evenly", n);
///     Ok(n / 2)
/// }
///
/// assert_eq!(halve(4).unwrap(), 2);
/// assert_eq!(halve(3).unwrap_err().message(), "cannot halve 3 evenly");
/// ```
#[macro_export]
macro_rules! verify {
    ($cond:expr $(,)?) => {
        if !$cond {
            return ::std::result::Result::Err(::std::convert::From::from(
                $crate::verify::__macro_failure(::std::string::String::from(concat!(
                    "Condition failed - ",
                    stringify!($cond)
                ))),
            ));
        }
    };
    ($cond:expr, $($arg:tt)+) => {
        if !$cond {
            return ::std::result::Result::Err(::std::convert::From::from(
                $crate::verify::__macro_failure(::std::format!($($arg)+)),
            ));
        }
    };
}

//! When an arithmetic or conversion operation goes wrong.

use alloc::boxed::Box;
use alloc::string::ToString;
use core::fmt::{self, Debug, Display};
use core::result;

/// This type represents all possible errors that can occur when operating
/// on or constructing a big integer.
pub struct Error {
    /// This `Box` allows us to keep the size of `Error` as small as
    /// possible. Fallible operations return `Result<T, Error>` from tight
    /// arithmetic loops, and a large `Error` type would be paid for on
    /// every call.
    err: Box<ErrorImpl>,
}

/// Alias for a `Result` with the error type `bigint::Error`.
pub type Result<T> = result::Result<T, Error>;

impl Error {
    /// Zero-based byte offset at which a parse error was detected.
    ///
    /// For errors that did not originate from parsing text, the position
    /// is zero.
    pub fn position(&self) -> usize {
        self.err.position
    }

    /// Specifies the cause of this error.
    ///
    /// Useful when precise error handling or translation of error
    /// messages is required.
    pub fn code(&self) -> &ErrorCode {
        &self.err.code
    }

    /// Categorizes the cause of this error.
    ///
    /// - `Category::Arithmetic` - an operation with no defined result,
    ///   such as division by zero
    /// - `Category::Parse` - text that does not spell a valid integer
    /// - `Category::Conversion` - a checked narrowing that did not fit
    /// - `Category::Unsupported` - a radix this crate does not implement
    pub fn classify(&self) -> Category {
        match self.err.code {
            ErrorCode::DivisionByZero => Category::Arithmetic,
            ErrorCode::EmptyInput | ErrorCode::InvalidDigit(_) => Category::Parse,
            ErrorCode::NarrowingOverflow => Category::Conversion,
            ErrorCode::UnsupportedRadix(_) => Category::Unsupported,
        }
    }

    /// Returns true if this error was caused by an operation with no
    /// defined numeric result.
    pub fn is_arithmetic(&self) -> bool {
        self.classify() == Category::Arithmetic
    }

    /// Returns true if this error was caused by input that does not spell
    /// a valid integer in the requested radix.
    pub fn is_parse(&self) -> bool {
        self.classify() == Category::Parse
    }

    /// Returns true if this error was caused by a value that does not fit
    /// the narrower target type.
    pub fn is_conversion(&self) -> bool {
        self.classify() == Category::Conversion
    }

    /// Returns true if this error was caused by requesting a radix that
    /// is not implemented.
    pub fn is_unsupported(&self) -> bool {
        self.classify() == Category::Unsupported
    }

    pub(crate) fn new(code: ErrorCode) -> Error {
        Error {
            err: Box::new(ErrorImpl { code, position: 0 }),
        }
    }

    pub(crate) fn parse(code: ErrorCode, position: usize) -> Error {
        Error {
            err: Box::new(ErrorImpl { code, position }),
        }
    }

    pub(crate) fn division_by_zero() -> Error {
        Error::new(ErrorCode::DivisionByZero)
    }

    pub(crate) fn narrowing_overflow() -> Error {
        Error::new(ErrorCode::NarrowingOverflow)
    }

    pub(crate) fn unsupported_radix(radix: u32) -> Error {
        Error::new(ErrorCode::UnsupportedRadix(radix))
    }
}

/// Categorizes the cause of a `bigint::Error`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Category {
    /// The error was caused by an operation with no defined numeric
    /// result, such as division by zero.
    Arithmetic,

    /// The error was caused by text that does not spell a valid integer
    /// in the requested radix.
    Parse,

    /// The error was caused by a checked narrowing conversion of a value
    /// that does not fit the target type.
    Conversion,

    /// The error was caused by requesting a radix this crate does not
    /// implement.
    Unsupported,
}

struct ErrorImpl {
    code: ErrorCode,
    position: usize,
}

/// This type describes all possible errors that can occur when operating
/// on or constructing a big integer.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorCode {
    /// Division or remainder with a divisor of zero.
    DivisionByZero,

    /// No digits were found in the input text.
    EmptyInput,

    /// A character in the input text is not a digit of the requested
    /// radix.
    InvalidDigit(char),

    /// A checked narrowing conversion was attempted on a value that does
    /// not fit the target type.
    NarrowingOverflow,

    /// Only radix 2 and radix 10 construction are implemented.
    UnsupportedRadix(u32),
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorCode::DivisionByZero => f.write_str("division by zero"),
            ErrorCode::EmptyInput => f.write_str("no digits found in input"),
            ErrorCode::InvalidDigit(ch) => {
                write!(f, "invalid digit `{}` for the requested radix", ch)
            }
            ErrorCode::NarrowingOverflow => f.write_str("value out of range of the target type"),
            ErrorCode::UnsupportedRadix(radix) => {
                write!(f, "radix {} is not implemented, only 2 and 10 are", radix)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_parse() {
            write!(f, "{} at position {}", self.err.code, self.err.position)
        } else {
            Display::fmt(&self.err.code, f)
        }
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_parse() {
            write!(
                f,
                "Error({:?}, position: {})",
                self.err.code.to_string(),
                self.err.position
            )
        } else {
            write!(f, "Error({:?})", self.err.code.to_string())
        }
    }
}

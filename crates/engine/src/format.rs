//! crates/engine/src/format.rs
//! The two-mode format engine.
//!
//! A call site commits to one of two mutually exclusive modes by the entry
//! point it invokes; the mode is never inferred from the template text.
//! Ordered mode substitutes `{0}`, `{1}`, … positionally and never fails:
//! a placeholder with no matching argument is left in the output verbatim.
//! Printf mode interprets a small, fully validated set of `%`-directives and
//! fails fast with a [`FormatError`] on any arity or type mismatch.

use std::borrow::Cow;
use std::fmt;

use thiserror::Error;

/// Error raised by printf-mode formatting.
///
/// Ordered-argument mode never produces one of these; a mismatched ordered
/// placeholder is defined pass-through behavior instead.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum FormatError {
    /// A directive had no argument left to consume.
    #[error("printf directive `%{directive}` has no argument at position {index}")]
    MissingArgument {
        /// The directive character.
        directive: char,
        /// Zero-based position of the argument the directive tried to consume.
        index: usize,
    },
    /// An argument's type cannot satisfy the directive that consumed it.
    #[error("printf directive `%{directive}` at position {index} cannot format a {supplied} value")]
    TypeMismatch {
        /// The directive character.
        directive: char,
        /// Zero-based position of the offending argument.
        index: usize,
        /// Kind label of the supplied argument.
        supplied: &'static str,
    },
    /// The template used a directive outside the supported set.
    #[error("unsupported printf directive `%{directive}`")]
    UnsupportedDirective {
        /// The directive character.
        directive: char,
    },
    /// The template ended with a bare `%`.
    #[error("format template ends with a bare `%`")]
    DanglingPercent,
    /// More arguments were supplied than the template's directives consume.
    #[error("{extra} printf argument(s) supplied beyond the directives in the template")]
    TrailingArguments {
        /// Number of unconsumed arguments.
        extra: usize,
    },
}

/// A positional formatting argument.
///
/// Call sites normally construct these through `From` conversions (strings,
/// integers, floats, bools, chars); the convenience macros do so implicitly.
#[derive(Clone, Debug, PartialEq)]
pub enum FormatArg<'a> {
    /// Text argument.
    Str(Cow<'a, str>),
    /// Signed integer argument.
    Int(i64),
    /// Unsigned integer argument.
    UInt(u64),
    /// Floating-point argument.
    Float(f64),
    /// Boolean argument.
    Bool(bool),
    /// Character argument.
    Char(char),
}

impl FormatArg<'_> {
    /// Kind label used in [`FormatError`] diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Str(_) => "string",
            Self::Int(_) => "signed integer",
            Self::UInt(_) => "unsigned integer",
            Self::Float(_) => "float",
            Self::Bool(_) => "bool",
            Self::Char(_) => "char",
        }
    }
}

impl fmt::Display for FormatArg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(value) => f.write_str(value),
            Self::Int(value) => write!(f, "{value}"),
            Self::UInt(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Char(value) => write!(f, "{value}"),
        }
    }
}

impl<'a> From<&'a str> for FormatArg<'a> {
    fn from(value: &'a str) -> Self {
        Self::Str(Cow::Borrowed(value))
    }
}

impl From<String> for FormatArg<'_> {
    fn from(value: String) -> Self {
        Self::Str(Cow::Owned(value))
    }
}

impl<'a> From<&'a String> for FormatArg<'a> {
    fn from(value: &'a String) -> Self {
        Self::Str(Cow::Borrowed(value.as_str()))
    }
}

impl<'a> From<Cow<'a, str>> for FormatArg<'a> {
    fn from(value: Cow<'a, str>) -> Self {
        Self::Str(value)
    }
}

impl From<bool> for FormatArg<'_> {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<char> for FormatArg<'_> {
    fn from(value: char) -> Self {
        Self::Char(value)
    }
}

impl From<f32> for FormatArg<'_> {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for FormatArg<'_> {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

macro_rules! int_format_arg {
    ($($signed:ty),*; $($unsigned:ty),*) => {
        $(impl From<$signed> for FormatArg<'_> {
            fn from(value: $signed) -> Self {
                Self::Int(i64::from(value))
            }
        })*
        $(impl From<$unsigned> for FormatArg<'_> {
            fn from(value: $unsigned) -> Self {
                Self::UInt(u64::from(value))
            }
        })*
    };
}

int_format_arg!(i8, i16, i32, i64; u8, u16, u32, u64);

impl From<isize> for FormatArg<'_> {
    fn from(value: isize) -> Self {
        Self::Int(value as i64)
    }
}

impl From<usize> for FormatArg<'_> {
    fn from(value: usize) -> Self {
        Self::UInt(value as u64)
    }
}

/// A format template plus arguments, committed to one formatting mode.
#[derive(Clone, Debug)]
pub enum MessageFormat<'a> {
    /// Indexed `{0}`/`{1}` placeholders substituted positionally.
    Ordered {
        /// The format template.
        template: &'a str,
        /// Positional arguments.
        args: &'a [FormatArg<'a>],
    },
    /// `%`-directives consumed positionally with per-directive type checks.
    Printf {
        /// The format template.
        template: &'a str,
        /// Positional arguments.
        args: &'a [FormatArg<'a>],
    },
}

impl MessageFormat<'_> {
    /// Renders the template into final message text.
    pub fn render(&self) -> Result<String, FormatError> {
        match self {
            Self::Ordered { template, args } => Ok(format_ordered(template, args)),
            Self::Printf { template, args } => format_printf(template, args),
        }
    }
}

/// Renders an ordered-argument template.
///
/// Placeholders are `{N}` with a decimal index. A placeholder whose index has
/// no matching argument is emitted verbatim, as is any brace text that does
/// not parse as a placeholder. This pass-through is load-bearing for
/// compatibility and covered by tests; it is not an error.
///
/// # Examples
///
/// ```
/// use engine::{format_ordered, FormatArg};
///
/// let args = [FormatArg::from("Hey"), FormatArg::from(42)];
/// assert_eq!(format_ordered("{0}:{1}", &args), "Hey:42");
/// assert_eq!(format_ordered("{0} and {7}", &args), "Hey and {7}");
/// ```
#[must_use]
pub fn format_ordered(template: &str, args: &[FormatArg<'_>]) -> String {
    use fmt::Write as _;

    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        output.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];

        match after_open.find('}') {
            Some(close) if close > 0 && after_open[..close].bytes().all(|b| b.is_ascii_digit()) => {
                let digits = &after_open[..close];
                match digits.parse::<usize>().ok().and_then(|index| args.get(index)) {
                    Some(arg) => {
                        // Display on String never fails.
                        let _ = write!(output, "{arg}");
                    }
                    None => {
                        // Out-of-range (or absurdly long) index: keep the
                        // placeholder text verbatim.
                        output.push('{');
                        output.push_str(digits);
                        output.push('}');
                    }
                }
                rest = &after_open[close + 1..];
            }
            _ => {
                // Not a placeholder; emit the brace literally and move on.
                output.push('{');
                rest = after_open;
            }
        }
    }

    output.push_str(rest);
    output
}

/// Renders a printf-style template, validating every directive.
///
/// Supported directives: `%s` (string), `%d`/`%i` (signed or unsigned
/// integer), `%u` (unsigned integer), `%f` (float), `%x`/`%X` (unsigned
/// integer as hex), `%c` (char), and `%%` for a literal percent. Arguments
/// are consumed strictly left to right; a type or arity mismatch raises a
/// [`FormatError`] instead of producing corrupt output.
pub fn format_printf(template: &str, args: &[FormatArg<'_>]) -> Result<String, FormatError> {
    use fmt::Write as _;

    let mut output = String::with_capacity(template.len());
    let mut chars = template.chars();
    let mut next_arg = 0usize;

    while let Some(ch) = chars.next() {
        if ch != '%' {
            output.push(ch);
            continue;
        }

        let directive = chars.next().ok_or(FormatError::DanglingPercent)?;
        if directive == '%' {
            output.push('%');
            continue;
        }

        let arg = args.get(next_arg).ok_or(FormatError::MissingArgument {
            directive,
            index: next_arg,
        })?;

        let mismatch = || FormatError::TypeMismatch {
            directive,
            index: next_arg,
            supplied: arg.kind(),
        };

        match (directive, arg) {
            ('s', FormatArg::Str(value)) => output.push_str(value),
            ('d' | 'i', FormatArg::Int(value)) => {
                let _ = write!(output, "{value}");
            }
            ('d' | 'i', FormatArg::UInt(value)) => {
                let _ = write!(output, "{value}");
            }
            ('u', FormatArg::UInt(value)) => {
                let _ = write!(output, "{value}");
            }
            ('f', FormatArg::Float(value)) => {
                let _ = write!(output, "{value}");
            }
            ('x', FormatArg::UInt(value)) => {
                let _ = write!(output, "{value:x}");
            }
            ('X', FormatArg::UInt(value)) => {
                let _ = write!(output, "{value:X}");
            }
            ('c', FormatArg::Char(value)) => output.push(*value),
            ('s' | 'd' | 'i' | 'u' | 'f' | 'x' | 'X' | 'c', _) => return Err(mismatch()),
            _ => return Err(FormatError::UnsupportedDirective { directive }),
        }

        next_arg += 1;
    }

    if next_arg < args.len() {
        return Err(FormatError::TrailingArguments {
            extra: args.len() - next_arg,
        });
    }

    Ok(output)
}

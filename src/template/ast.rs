//! Token types for judgment format strings

/// Value-producing specifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Specifier {
    /// `%b`
    Before,
    /// `%a`
    After,
    /// `%c`
    Accuracy,
    /// `%s`
    Score,
    /// `%p`
    Percent,
    /// `%t`
    TimeDependence,
    /// `%B`
    BeforeSegment,
    /// `%A`
    AfterSegment,
    /// `%C`
    AccuracySegment,
    /// `%T`
    TimeDependenceSegment,
}

/// Which specifiers a format string may expand
///
/// `%%`, `%n` and literal passthrough of unknown specifiers apply to both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grammar {
    /// Judgment texts: every specifier
    Full,
    /// Timing segment texts: only `%t`
    Restricted,
}

impl Grammar {
    /// Resolve a specifier character under this grammar
    #[inline]
    pub fn specifier(self, c: char) -> Option<Specifier> {
        let spec = match c {
            't' => Specifier::TimeDependence,
            _ if self == Grammar::Restricted => return None,
            'b' => Specifier::Before,
            'a' => Specifier::After,
            'c' => Specifier::Accuracy,
            's' => Specifier::Score,
            'p' => Specifier::Percent,
            'B' => Specifier::BeforeSegment,
            'A' => Specifier::AfterSegment,
            'C' => Specifier::AccuracySegment,
            'T' => Specifier::TimeDependenceSegment,
            _ => return None,
        };
        Some(spec)
    }
}

/// Scanned piece of a format string
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Text copied as is, escapes already resolved
    Literal(String),
    Value(Specifier),
}

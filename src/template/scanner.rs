//! Format string scanner shared by both grammars

use crate::template::ast::{Grammar, Token};
use smallvec::SmallVec;

/// Token buffer; most judgment texts fit inline
pub type Tokens = SmallVec<[Token; 8]>;

/// Split a format string into literal runs and value specifiers
///
/// Every `%` consumes the character after it. A `%` at the very end reads a
/// synthesized space instead, so it comes out as the literal `"% "`.
/// Unknown specifiers are kept verbatim. Adjacent literals are merged.
pub fn scan(source: &str, grammar: Grammar) -> Tokens {
    let mut tokens = Tokens::new();
    let mut literal = String::new();
    let mut rest = source;

    while let Some(pos) = rest.find('%') {
        literal.push_str(&rest[..pos]);

        let mut chars = rest[pos + 1..].chars();
        let c = chars.next().unwrap_or(' ');

        match c {
            '%' => literal.push('%'),
            'n' => literal.push('\n'),
            _ => match grammar.specifier(c) {
                Some(spec) => {
                    flush_literal(&mut tokens, &mut literal);
                    tokens.push(Token::Value(spec));
                }
                None => {
                    literal.push('%');
                    literal.push(c);
                }
            },
        }

        rest = chars.as_str();
    }

    literal.push_str(rest);
    flush_literal(&mut tokens, &mut literal);
    tokens
}

#[inline]
fn flush_literal(tokens: &mut Tokens, literal: &mut String) {
    if !literal.is_empty() {
        tokens.push(Token::Literal(std::mem::take(literal)));
    }
}

pub mod token;

use log::trace;
pub use token::{Token, TokenKind};

/// Splits the input into tokens on every single space, classifying each piece.
///
/// Spaces are not trimmed or collapsed: `"a  b"` and leading or trailing spaces produce empty
/// [`TokenKind::Name`] tokens, exactly as splitting on `' '` would.
pub fn tokenize(input: &str) -> impl Iterator<Item = Token<'_>> + '_ {
    let mut start = 0;
    input.split(' ').map(move |lexeme| {
        let span = start..start + lexeme.len();
        start = span.end + 1;
        let token = Token { span, kind: TokenKind::classify(lexeme), lexeme };
        trace!("token {:?} {:?} at {:?}", token.kind, token.lexeme, token.span);
        token
    })
}

/// Returns an owned array containing all of the tokens produced by the tokenizer, in order.
pub fn tokenize_complete(input: &str) -> Box<[Token<'_>]> {
    tokenize(input).collect()
}

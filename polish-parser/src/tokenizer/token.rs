use logos::Logos;
use std::ops::Range;

/// The different kinds of tokens that can appear in a prefix expression.
///
/// The tokenizer never lexes whole source strings with this type. Source text is split on single
/// spaces first, and each piece is then classified as exactly one [`TokenKind`] with
/// [`TokenKind::classify`].
#[derive(Logos, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    #[token("+")]
    Add,

    #[token("-")]
    Sub,

    #[token("*")]
    Mul,

    #[regex(r"-?[0-9]+")]
    Int,

    /// Anything else, such as `x` or `abc`. This includes the empty token produced by repeated,
    /// leading or trailing spaces.
    #[regex(r"[^ ]+", priority = 0)]
    Name,
}

impl TokenKind {
    /// Classifies a single space-free piece of text.
    ///
    /// A piece is an operator or an integer only if the whole piece matches; `+5`, `x-1` and
    /// `--2` are all names.
    pub fn classify(lexeme: &str) -> Self {
        let mut lexer = TokenKind::lexer(lexeme);
        match lexer.next() {
            Some(Ok(kind)) if lexer.span() == (0..lexeme.len()) && lexer.next().is_none() => kind,
            _ => TokenKind::Name,
        }
    }

    /// Returns true if the token is a binary operator.
    pub fn is_operator(self) -> bool {
        matches!(self, TokenKind::Add | TokenKind::Sub | TokenKind::Mul)
    }
}

/// A token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'source> {
    /// The region of the source code that this token originated from.
    pub span: Range<usize>,

    /// The kind of token.
    pub kind: TokenKind,

    /// The raw lexeme of the token.
    pub lexeme: &'source str,
}

impl Token<'_> {
    /// Returns true if the token is a binary operator.
    pub fn is_operator(&self) -> bool {
        self.kind.is_operator()
    }
}

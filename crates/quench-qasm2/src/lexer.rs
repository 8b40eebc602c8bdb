//! Lexer for `OpenQASM` 2.0.

use logos::Logos;
use std::fmt;
use std::ops::Range;

/// Tokens for `OpenQASM` 2.0.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
#[logos(skip r"//[^\n]*")]
pub enum Token {
    // Keywords
    #[token("OPENQASM")]
    OpenQasm,

    #[token("include")]
    Include,

    #[token("qreg")]
    Qreg,

    #[token("creg")]
    Creg,

    #[token("gate")]
    Gate,

    #[token("opaque")]
    Opaque,

    #[token("if")]
    If,

    #[token("measure")]
    Measure,

    #[token("barrier")]
    Barrier,

    #[token("reset")]
    Reset,

    // Constants
    #[token("pi")]
    Pi,

    // Literals
    #[regex(r"[0-9]+\.[0-9]*([eE][+-]?[0-9]+)?", |lex| lex.slice().parse::<f64>().ok())]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", |lex| lex.slice().parse::<f64>().ok())]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+", |lex| lex.slice().parse::<f64>().ok())]
    FloatLiteral(f64),

    #[regex(r"[0-9]+", |lex| lex.slice().parse::<u64>().ok())]
    IntLiteral(u64),

    #[regex(r#""[^"]*""#, |lex| {
        let s = lex.slice();
        Some(s[1..s.len()-1].to_string())
    })]
    StringLiteral(String),

    // Identifiers
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),

    // Operators and punctuation
    #[token("->")]
    Arrow,

    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("*")]
    Star,

    #[token("/")]
    Slash,

    #[token("^")]
    Caret,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token("[")]
    LBracket,

    #[token("]")]
    RBracket,

    #[token("{")]
    LBrace,

    #[token("}")]
    RBrace,

    #[token(",")]
    Comma,

    #[token(";")]
    Semicolon,

    #[token("==")]
    EqEq,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::OpenQasm => write!(f, "OPENQASM"),
            Token::Include => write!(f, "include"),
            Token::Qreg => write!(f, "qreg"),
            Token::Creg => write!(f, "creg"),
            Token::Gate => write!(f, "gate"),
            Token::Opaque => write!(f, "opaque"),
            Token::If => write!(f, "if"),
            Token::Measure => write!(f, "measure"),
            Token::Barrier => write!(f, "barrier"),
            Token::Reset => write!(f, "reset"),
            Token::Pi => write!(f, "pi"),
            Token::FloatLiteral(v) => write!(f, "{v}"),
            Token::IntLiteral(v) => write!(f, "{v}"),
            Token::StringLiteral(s) => write!(f, "\"{s}\""),
            Token::Identifier(s) => write!(f, "{s}"),
            Token::Arrow => write!(f, "->"),
            Token::Plus => write!(f, "+"),
            Token::Minus => write!(f, "-"),
            Token::Star => write!(f, "*"),
            Token::Slash => write!(f, "/"),
            Token::Caret => write!(f, "^"),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
            Token::LBracket => write!(f, "["),
            Token::RBracket => write!(f, "]"),
            Token::LBrace => write!(f, "{{"),
            Token::RBrace => write!(f, "}}"),
            Token::Comma => write!(f, ","),
            Token::Semicolon => write!(f, ";"),
            Token::EqEq => write!(f, "=="),
        }
    }
}

/// A token together with its byte span in the source.
#[derive(Debug, Clone)]
pub struct SpannedToken {
    /// The token.
    pub token: Token,
    /// Byte range in the source text.
    pub span: Range<usize>,
}

/// Tokenize a source string.
///
/// Returns spanned tokens, or the byte span of the first invalid input.
pub fn tokenize(source: &str) -> Result<Vec<SpannedToken>, Range<usize>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push(SpannedToken {
                token,
                span: lexer.span(),
            }),
            Err(()) => return Err(lexer.span()),
        }
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_header() {
        let tokens = tokenize("OPENQASM 2.0;\ninclude \"qelib1.inc\";").unwrap();
        assert_eq!(tokens[0].token, Token::OpenQasm);
        assert_eq!(tokens[1].token, Token::FloatLiteral(2.0));
        assert_eq!(tokens[2].token, Token::Semicolon);
        assert_eq!(tokens[3].token, Token::Include);
        assert_eq!(
            tokens[4].token,
            Token::StringLiteral("qelib1.inc".to_string())
        );
    }

    #[test]
    fn test_tokenize_gate_line() {
        let tokens = tokenize("cp(pi/4) q[1], q[0];").unwrap();
        let kinds: Vec<_> = tokens.iter().map(|t| t.token.clone()).collect();
        assert_eq!(kinds[0], Token::Identifier("cp".to_string()));
        assert_eq!(kinds[1], Token::LParen);
        assert_eq!(kinds[2], Token::Pi);
        assert_eq!(kinds[3], Token::Slash);
        assert_eq!(kinds[4], Token::IntLiteral(4));
    }

    #[test]
    fn test_tokenize_measure() {
        let tokens = tokenize("measure q[0] -> c[0];").unwrap();
        assert_eq!(tokens[0].token, Token::Measure);
        assert!(tokens.iter().any(|t| t.token == Token::Arrow));
    }

    #[test]
    fn test_comments_skipped() {
        let tokens = tokenize("// header comment\nh q[0]; // trailing\n").unwrap();
        assert_eq!(tokens[0].token, Token::Identifier("h".to_string()));
    }

    #[test]
    fn test_invalid_input() {
        let err = tokenize("h q[0]; @").unwrap_err();
        assert_eq!(&"h q[0]; @"[err], "@");
    }
}

use crate::ast::{Function, Span};
use crate::error::{LexError, LexErrorKind};
use logos::Logos;
use std::fmt;

#[derive(Logos, Debug, PartialEq, Eq, Hash, Clone)] // chumsky 需要 Eq 和 Hash
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(error = LexErrorKind)]
pub enum Token {
    // --- 运算符 (Operators) ---
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("^")]
    Caret,

    // --- 符号 (Symbols) ---
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(",")]
    Comma,

    // --- 数据 (Data) ---
    // 为了 Hash 实现，数字先存 String，AST 阶段再转 f64
    #[regex(r"[0-9.]+", number)]
    Number(String),

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", function)]
    Ident(Function),
}

/// 数字：一串数字，中间最多一个小数点，小数点不能在首尾
fn number(lex: &mut logos::Lexer<Token>) -> Result<String, LexErrorKind> {
    let s = lex.slice();
    let well_formed = !s.starts_with('.') && !s.ends_with('.') && s.matches('.').count() <= 1;
    if well_formed {
        Ok(s.to_string())
    } else {
        Err(LexErrorKind::MalformedNumber)
    }
}

fn function(lex: &mut logos::Lexer<Token>) -> Result<Function, LexErrorKind> {
    Function::from_name(lex.slice()).ok_or(LexErrorKind::UnknownFunction)
}

impl Token {
    /// 该 token 之后必须跟一个操作数
    pub fn expects_operand(&self) -> bool {
        matches!(
            self,
            Token::Plus
                | Token::Minus
                | Token::Star
                | Token::Slash
                | Token::Percent
                | Token::Caret
                | Token::LParen
                | Token::Comma
        )
    }

    /// 该 token 可以作为操作数的开头
    pub fn starts_operand(&self) -> bool {
        matches!(
            self,
            Token::Number(_) | Token::Ident(_) | Token::LParen | Token::Minus
        )
    }

    /// 用于错误信息
    pub fn describe(&self) -> String {
        format!("'{}'", self)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Plus => f.write_str("+"),
            Token::Minus => f.write_str("-"),
            Token::Star => f.write_str("*"),
            Token::Slash => f.write_str("/"),
            Token::Percent => f.write_str("%"),
            Token::Caret => f.write_str("^"),
            Token::LParen => f.write_str("("),
            Token::RParen => f.write_str(")"),
            Token::Comma => f.write_str(","),
            Token::Number(n) => f.write_str(n),
            Token::Ident(function) => write!(f, "{}", function),
        }
    }
}

/// 把文本切分成带位置的 token 序列，遇到第一个非法片段即失败
pub fn tokenize(text: &str) -> Result<Vec<(Token, Span)>, LexError> {
    Token::lexer(text)
        .spanned()
        .map(|(tok, span)| match tok {
            Ok(tok) => Ok((tok, span)),
            Err(kind) => Err(LexError {
                kind,
                text: text.get(span.clone()).unwrap_or_default().to_string(),
                span,
            }),
        })
        .collect()
}

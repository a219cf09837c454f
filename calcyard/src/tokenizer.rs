use std::fmt;

use lexers::{scan_longest, scan_number, skip_whitespace, Scanner};
use log::trace;

use crate::functions::FuncKind;
use crate::registry::{OperatorTable, PUNCTUATION, SYMBOLS};

#[derive(Clone, PartialEq, Debug)]
pub enum Token {
    Number(f64),
    Symbol(String),
    Function(String),
    Operator(String),
    OParen,
    CParen,
    Comma,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", n),
            Token::Symbol(s) | Token::Function(s) | Token::Operator(s) => write!(f, "{}", s),
            Token::OParen => write!(f, "("),
            Token::CParen => write!(f, ")"),
            Token::Comma => write!(f, ","),
        }
    }
}

/// Splits disambiguated input into tokens known to the registries.
/// Whitespace separates tokens. Numbers are tried first, then the longest
/// registered word. Characters matching neither are dropped.
pub struct Tokenizer<'a, I: Iterator<Item = char>> {
    src: Scanner<I>,
    ops: &'a OperatorTable,
    words: Vec<String>,
}

impl<'a, I: Iterator<Item = char>> Tokenizer<'a, I> {
    pub fn new(source: I, ops: &'a OperatorTable) -> Self {
        // priority on equal length: punctuation, operators, functions, symbols
        let mut words: Vec<String> = PUNCTUATION.iter().map(|p| p.to_string()).collect();
        let mut op_tokens: Vec<&str> = ops.tokens().collect();
        op_tokens.sort_unstable();
        words.extend(op_tokens.into_iter().map(String::from));
        words.extend(FuncKind::ALL.iter().map(|f| f.name().to_string()));
        words.extend(SYMBOLS.iter().map(|(name, _)| name.to_string()));
        Tokenizer { src: Scanner::new(source), ops, words }
    }

    fn classify(&self, word: String) -> Token {
        match word.as_str() {
            "(" => return Token::OParen,
            ")" => return Token::CParen,
            "," => return Token::Comma,
            _ => (),
        }
        if self.ops.get(&word).is_some() {
            Token::Operator(word)
        } else if FuncKind::from_name(&word).is_some() {
            Token::Function(word)
        } else {
            Token::Symbol(word)
        }
    }

    fn get_token(&mut self) -> Option<Token> {
        loop {
            skip_whitespace(&mut self.src);
            self.src.ignore();
            if let Some(num) = scan_number(&mut self.src) {
                match num.parse::<f64>() {
                    Ok(n) => return Some(Token::Number(n)),
                    Err(e) => {
                        trace!("dropping number {:?}: {}", num, e);
                        continue;
                    }
                }
            }
            if let Some(word) = scan_longest(&mut self.src, &self.words) {
                return Some(self.classify(word));
            }
            // unknown char: skip it and keep scanning
            let dropped = self.src.next()?;
            trace!("dropping unknown character {:?}", dropped);
        }
    }
}

impl<'a, I: Iterator<Item = char>> Iterator for Tokenizer<'a, I> {
    type Item = Token;
    fn next(&mut self) -> Option<Self::Item> {
        self.get_token()
    }
}

///////////////////////////////////////////////////////////////////////////////

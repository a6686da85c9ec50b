//! Input tokenization.
//!
//! Converts raw player input into a stream of tokens.

/// A token from player input.
#[derive(Clone, Debug, PartialEq)]
pub enum InputToken {
    /// A lowercase word
    Word(String),
    /// A quoted string (preserved as-is)
    QuotedString(String),
    /// End of input
    End,
}

impl InputToken {
    /// The token's text, if it has any.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Word(w) | Self::QuotedString(w) => Some(w.as_str()),
            Self::End => None,
        }
    }
}

/// Tokenizes player input.
pub struct InputTokenizer;

impl InputTokenizer {
    /// Tokenizes a raw input string into tokens.
    ///
    /// - Converts words to lowercase
    /// - Strips sentence punctuation (hyphens survive, so "t-shirt" is one word)
    /// - Preserves quoted strings as atomic units
    #[must_use]
    pub fn tokenize(input: &str) -> Vec<InputToken> {
        let mut tokens = Vec::new();
        let mut chars = input.chars();
        let mut current_word = String::new();

        while let Some(ch) = chars.next() {
            match ch {
                '"' => {
                    flush(&mut current_word, &mut tokens);
                    let quoted: String = chars.by_ref().take_while(|&c| c != '"').collect();
                    tokens.push(InputToken::QuotedString(quoted));
                }
                c if c.is_whitespace() => flush(&mut current_word, &mut tokens),
                '.' | ',' | '!' | '?' | ';' | ':' => {}
                _ => current_word.push(ch),
            }
        }

        flush(&mut current_word, &mut tokens);
        tokens.push(InputToken::End);
        tokens
    }
}

fn flush(word: &mut String, tokens: &mut Vec<InputToken>) {
    if !word.is_empty() {
        tokens.push(InputToken::Word(word.to_lowercase()));
        word.clear();
    }
}

use logos::{internal::LexerInternal, Lexer, Logos};

#[derive(Clone)]
pub struct Extras<'a> {
    pub arena: &'a bumpalo::Bump,
}

#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(extras = Extras<'s>)]
pub enum Token<'a> {
    #[token("[")]
    BracketOpen,

    #[token("]")]
    BracketClose,

    #[token("{")]
    BraceOpen,

    #[token("}")]
    BraceClose,

    #[token("(")]
    ParenOpen,

    #[token(")")]
    ParenClose,

    #[token(":")]
    Colon,

    #[token("=")]
    Equal,

    #[token("!")]
    Exclam,

    #[token("&")]
    Ampersand,

    #[token("|")]
    Pipe,

    #[regex(r"@[_a-zA-Z][_0-9a-zA-Z]*", |lex| &lex.slice()[1..])]
    DirectiveName(&'a str),

    #[regex(r"[_a-zA-Z][_0-9a-zA-Z]*", |lex| lex.slice())]
    Name(&'a str),

    #[regex(r"-?([1-9][0-9]*|0)[.][0-9]+([eE][+-]?[0-9]+)?", |lex| lex.slice())]
    #[regex("-?([1-9][0-9]*|0)[eE][+-]?[0-9]+", |lex| lex.slice())]
    Float(&'a str),

    #[regex(r"-?([1-9][0-9]*|0)", |lex| lex.slice())]
    Integer(&'a str),

    #[token("\"", lex_string)]
    String(&'a str),

    #[token("\"\"\"", lex_block_string)]
    BlockString(&'a str),

    #[error]
    #[regex(r"([\x{FEFF} ,\t\n\r\f]+|#[^\n\r]*)+", logos::skip)]
    Error,

    /// Token indicates the end of the input
    End,
}

#[derive(Logos, Debug, PartialEq)]
enum BlockPart {
    #[regex(r#"[^"\\\r\n]+"#)]
    #[token("\"")]
    #[token("\"\"")]
    #[token("\\")]
    Text,

    #[regex(r"\r\n|\r|\n")]
    Newline,

    #[token(r#"\""""#)]
    EscapedEndBlock,

    #[token(r#"""""#)]
    EndBlock,

    #[error]
    Error,
}

#[derive(Logos, Debug, PartialEq)]
enum StringPart {
    #[regex(r#"[^\n\r\\"]+"#)]
    Text,

    #[regex(r"\\u[0-9a-fA-F][0-9a-fA-F][0-9a-fA-F][0-9a-fA-F]")]
    EscapedCodepoint,

    #[token(r#"\""#)]
    EscapedQuote,
    #[token(r#"\\"#)]
    EscapedBackslash,
    #[token(r#"\/"#)]
    EscapedSlash,
    #[token(r#"\b"#)]
    EscapedBackspace,
    #[token(r#"\f"#)]
    EscapedLinefeed,
    #[token(r#"\n"#)]
    EscapedNewline,
    #[token(r#"\r"#)]
    EscapedReturn,
    #[token(r#"\t"#)]
    EscapedTab,

    #[token("\"")]
    EndString,

    #[error]
    Error,
}

#[inline]
fn lex_escaped_string<'a>(lex: &mut Lexer<'a, Token<'a>>, mut output: String) -> Option<&'a str> {
    let mut sublex = StringPart::lexer(lex.remainder());
    while let Some(token) = sublex.next() {
        match token {
            StringPart::Error => break,
            StringPart::Text => output.push_str(sublex.slice()),
            StringPart::EscapedQuote => output.push('"'),
            StringPart::EscapedBackslash => output.push('\\'),
            StringPart::EscapedSlash => output.push('/'),
            StringPart::EscapedBackspace => output.push(8 as char),
            StringPart::EscapedLinefeed => output.push(12 as char),
            StringPart::EscapedNewline => output.push('\n'),
            StringPart::EscapedReturn => output.push('\r'),
            StringPart::EscapedTab => output.push('\t'),
            StringPart::EscapedCodepoint => {
                let code = parse_codepoint(sublex.slice())?;
                let code = if (0xD800..=0xDBFF).contains(&code) {
                    // A high surrogate must be followed by an escaped low surrogate
                    if sublex.next() != Some(StringPart::EscapedCodepoint) {
                        return None;
                    }
                    let low = parse_codepoint(sublex.slice())?;
                    if !(0xDC00..=0xDFFF).contains(&low) {
                        return None;
                    }
                    0x10000 + ((code - 0xD800) << 10) + (low - 0xDC00)
                } else {
                    code
                };
                output.push(std::char::from_u32(code)?);
            }
            StringPart::EndString => {
                lex.bump_unchecked(sublex.span().end);
                return Some(lex.extras.arena.alloc(output));
            }
        }
    }
    None
}

/// Parses the hex digits of a `\uXXXX` escape.
fn parse_codepoint(escape: &str) -> Option<u32> {
    use lexical_core::*;
    const FORMAT: u128 = NumberFormatBuilder::hexadecimal();
    const OPTIONS: ParseIntegerOptions = ParseIntegerOptions::new();
    parse_with_options::<u32, FORMAT>(escape[2..].as_bytes(), &OPTIONS).ok()
}

fn lex_string<'a>(lex: &mut Lexer<'a, Token<'a>>) -> Option<&'a str> {
    // Strings without escape sequences are sliced from the source directly
    let remainder = lex.remainder();
    for (i, c) in remainder.char_indices() {
        match c {
            '\n' | '\r' => return None,
            '\\' => {
                lex.bump_unchecked(i);
                return lex_escaped_string(lex, remainder[0..i].to_string());
            }
            '"' => {
                lex.bump_unchecked(i + 1);
                return Some(&remainder[0..i]);
            }
            _ => {}
        }
    }
    None
}

fn lex_block_string<'a>(lex: &mut Lexer<'a, Token<'a>>) -> Option<&'a str> {
    let mut raw = String::new();
    let mut sublex = BlockPart::lexer(lex.remainder());
    while let Some(token) = sublex.next() {
        match token {
            BlockPart::Text => raw.push_str(sublex.slice()),
            BlockPart::Newline => raw.push('\n'),
            BlockPart::EscapedEndBlock => raw.push_str("\"\"\""),
            BlockPart::EndBlock => {
                lex.bump_unchecked(sublex.span().end);
                return Some(lex.extras.arena.alloc(block_string_value(&raw)));
            }
            BlockPart::Error => break,
        }
    }
    None
}

/// Strips the common indentation of all lines but the first and removes leading and trailing
/// blank lines from a raw block of text, as GraphQL does for block strings.
pub(crate) fn block_string_value(raw: &str) -> String {
    let lines: Vec<&str> = raw.lines().collect();

    let common_indent = lines
        .iter()
        .skip(1)
        .filter_map(|line| {
            let indent = line.len() - line.trim_start_matches([' ', '\t']).len();
            (indent < line.len()).then_some(indent)
        })
        .min()
        .unwrap_or(0);

    let is_blank = |line: &&str| line.trim_matches([' ', '\t']).is_empty();
    let first = lines.iter().position(|line| !is_blank(line));
    let last = lines.iter().rposition(|line| !is_blank(line));

    let mut output = String::with_capacity(raw.len());
    if let (Some(first), Some(last)) = (first, last) {
        for (index, line) in lines.iter().enumerate().take(last + 1).skip(first) {
            if index > first {
                output.push('\n');
            }
            if index == 0 {
                output.push_str(line);
            } else {
                output.push_str(line.get(common_indent..).unwrap_or(""));
            }
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::{block_string_value, Extras, Token};
    use bumpalo::Bump;
    use logos::Logos;

    #[test]
    fn empty() {
        let arena = Bump::new();
        let mut lex = Token::lexer_with_extras("", Extras { arena: &arena });
        assert_eq!(lex.next(), None);
        let mut lex = Token::lexer_with_extras(",,       # comment\n", Extras { arena: &arena });
        assert_eq!(lex.next(), None);
    }

    #[test]
    fn symbols() {
        let arena = Bump::new();
        let extras = Extras { arena: &arena };
        let mut lex = Token::lexer_with_extras("[]{}()=:!&|", extras);
        assert_eq!(lex.next(), Some(Token::BracketOpen));
        assert_eq!(lex.next(), Some(Token::BracketClose));
        assert_eq!(lex.next(), Some(Token::BraceOpen));
        assert_eq!(lex.next(), Some(Token::BraceClose));
        assert_eq!(lex.next(), Some(Token::ParenOpen));
        assert_eq!(lex.next(), Some(Token::ParenClose));
        assert_eq!(lex.next(), Some(Token::Equal));
        assert_eq!(lex.next(), Some(Token::Colon));
        assert_eq!(lex.next(), Some(Token::Exclam));
        assert_eq!(lex.next(), Some(Token::Ampersand));
        assert_eq!(lex.next(), Some(Token::Pipe));
        assert_eq!(lex.next(), None);
    }

    #[test]
    fn names_and_directives() {
        let arena = Bump::new();
        let mut lex = Token::lexer_with_extras(
            "# comment\n type Query @deprecated",
            Extras { arena: &arena },
        );
        assert_eq!(lex.next(), Some(Token::Name("type")));
        assert_eq!(lex.next(), Some(Token::Name("Query")));
        assert_eq!(lex.next(), Some(Token::DirectiveName("deprecated")));
        assert_eq!(lex.next(), None);
    }

    #[test]
    fn numbers() {
        let arena = Bump::new();
        let mut lex =
            Token::lexer_with_extras("1 -123 0 1.0 -10.10E10 1e1", Extras { arena: &arena });
        assert_eq!(lex.next(), Some(Token::Integer("1")));
        assert_eq!(lex.next(), Some(Token::Integer("-123")));
        assert_eq!(lex.next(), Some(Token::Integer("0")));
        assert_eq!(lex.next(), Some(Token::Float("1.0")));
        assert_eq!(lex.next(), Some(Token::Float("-10.10E10")));
        assert_eq!(lex.next(), Some(Token::Float("1e1")));
        assert_eq!(lex.next(), None);
    }

    #[test]
    fn strings() {
        let arena = Bump::new();
        let mut lex = Token::lexer_with_extras("\"hello world\"", Extras { arena: &arena });
        assert_eq!(lex.next(), Some(Token::String("hello world")));
        assert_eq!(lex.next(), None);
        let mut lex = Token::lexer_with_extras("\"\"", Extras { arena: &arena });
        assert_eq!(lex.next(), Some(Token::String("")));
        assert_eq!(lex.next(), None);
        let mut lex =
            Token::lexer_with_extras("\"hello \\\" \\n \\u0041\"", Extras { arena: &arena });
        assert_eq!(lex.next(), Some(Token::String("hello \" \n A")));
        assert_eq!(lex.next(), None);
    }

    #[test]
    fn surrogate_pairs() {
        let arena = Bump::new();
        let mut lex =
            Token::lexer_with_extras(r#""\u00e9 \uD83D\uDE00""#, Extras { arena: &arena });
        assert_eq!(lex.next(), Some(Token::String("\u{e9} \u{1F600}")));
        assert_eq!(lex.next(), None);
        let mut lex = Token::lexer_with_extras(r#""\uD83D""#, Extras { arena: &arena });
        assert_eq!(lex.next(), Some(Token::Error));
        let mut lex = Token::lexer_with_extras(r#""\uD83D\u0041""#, Extras { arena: &arena });
        assert_eq!(lex.next(), Some(Token::Error));
    }

    #[test]
    fn block_strings() {
        let arena = Bump::new();
        let mut lex = Token::lexer_with_extras("\"\"\"hello block\"\"\"", Extras { arena: &arena });
        assert_eq!(lex.next(), Some(Token::BlockString("hello block")));
        assert_eq!(lex.next(), None);
        let mut lex = Token::lexer_with_extras("\"\"\"\"\"\"", Extras { arena: &arena });
        assert_eq!(lex.next(), Some(Token::BlockString("")));
        assert_eq!(lex.next(), None);
        let mut lex = Token::lexer_with_extras(r#""""a " b "" c""""#, Extras { arena: &arena });
        assert_eq!(lex.next(), Some(Token::BlockString(r#"a " b "" c"#)));
        assert_eq!(lex.next(), None);
        let mut lex = Token::lexer_with_extras(
            "\"\"\"\n    first\n      second \\\"\"\"\n    \"\"\"",
            Extras { arena: &arena },
        );
        assert_eq!(
            lex.next(),
            Some(Token::BlockString("first\n  second \"\"\""))
        );
        assert_eq!(lex.next(), None);
    }

    #[test]
    fn bad_strings() {
        let arena = Bump::new();
        let mut lex = Token::lexer_with_extras("\"\\ \"", Extras { arena: &arena });
        assert_eq!(lex.next(), Some(Token::Error));
        let mut lex = Token::lexer_with_extras("\"\n\"", Extras { arena: &arena });
        assert_eq!(lex.next(), Some(Token::Error));
        let mut lex = Token::lexer_with_extras("\"\"\"unterminated", Extras { arena: &arena });
        assert_eq!(lex.next(), Some(Token::Error));
    }

    #[test]
    fn dedents_blocks() {
        assert_eq!(block_string_value("\n  a\n    b\n  \n"), "a\n  b");
        assert_eq!(block_string_value("first\n  second"), "first\nsecond");
        assert_eq!(block_string_value("  \n \n"), "");
    }
}

//! Shell-like word splitting for curl command lines.
//!
//! A word is a run of bare characters and quoted sections with no whitespace
//! between them. Quote characters stay in the word; callers unquote operands
//! when they consume them (see [`unquote`]).

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LexingState {
    Start,
    ReadingWord,
    ReadingSingleQuote,
    ReadingDoubleQuote,
}

struct LexingFSM {
    input: Vec<char>,
    pos: usize,
    state: LexingState,
    word: String,
    /// Where the open quote started: input position and word length before it.
    open_quote: Option<(usize, usize)>,
}

impl LexingFSM {
    fn new(line: &str) -> Self {
        LexingFSM {
            input: line.chars().collect(),
            pos: 0,
            state: LexingState::Start,
            word: String::new(),
            open_quote: None,
        }
    }

    fn make_tokens(mut self) -> Vec<String> {
        let mut out = Vec::new();

        loop {
            match self.read_char() {
                Some(ch) => match self.state {
                    LexingState::Start | LexingState::ReadingWord => {
                        self.handle_unquoted(ch, &mut out)
                    }
                    LexingState::ReadingSingleQuote => self.handle_quoted(ch, '\''),
                    LexingState::ReadingDoubleQuote => self.handle_quoted(ch, '"'),
                },
                None => match self.open_quote.take() {
                    // Unterminated quote: drop the quote character, close the
                    // word before it and rescan the rest as unquoted text.
                    Some((quote_pos, word_len)) => {
                        self.word.truncate(word_len);
                        self.finish_word(&mut out);
                        self.pos = quote_pos + 1;
                        self.state = LexingState::Start;
                    }
                    None => break,
                },
            }
        }

        self.finish_word(&mut out);
        out
    }

    fn read_char(&mut self) -> Option<char> {
        let ch = self.input.get(self.pos).copied();
        if ch.is_some() {
            self.pos += 1;
        }
        ch
    }

    fn handle_unquoted(&mut self, ch: char, out: &mut Vec<String>) {
        match ch {
            c if c.is_whitespace() => {
                self.finish_word(out);
                self.state = LexingState::Start;
            }
            '\'' => self.open(ch, LexingState::ReadingSingleQuote),
            '"' => self.open(ch, LexingState::ReadingDoubleQuote),
            c => {
                self.word.push(c);
                self.state = LexingState::ReadingWord;
            }
        }
    }

    fn open(&mut self, quote: char, state: LexingState) {
        self.open_quote = Some((self.pos - 1, self.word.len()));
        self.word.push(quote);
        self.state = state;
    }

    fn handle_quoted(&mut self, ch: char, quote: char) {
        self.word.push(ch);
        if ch == quote {
            self.open_quote = None;
            self.state = LexingState::ReadingWord;
        }
    }

    fn finish_word(&mut self, out: &mut Vec<String>) {
        if !self.word.is_empty() {
            out.push(std::mem::take(&mut self.word));
        }
    }
}

/// Split a command line into words, keeping quote characters in place.
///
/// Never fails: an unterminated quote is dropped and the text after it is
/// split as if it were unquoted.
pub fn tokenize(input: &str) -> Vec<String> {
    LexingFSM::new(input).make_tokens()
}

/// Remove a leading `name` followed by whitespace (and any whitespace before
/// it). Input that does not start with the command name is returned as is.
pub fn strip_command_name<'a>(input: &'a str, name: &str) -> &'a str {
    let trimmed = input.trim_start();
    match trimmed.strip_prefix(name) {
        Some(rest) if rest.starts_with(char::is_whitespace) => rest.trim_start(),
        _ => input,
    }
}

/// Strip one matching pair of surrounding `"` or `'`.
pub fn unquote(token: &str) -> &str {
    for quote in ['"', '\''] {
        if token.len() >= 2 {
            if let Some(inner) = token
                .strip_prefix(quote)
                .and_then(|t| t.strip_suffix(quote))
            {
                return inner;
            }
        }
    }
    token
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(input: &str) -> Vec<String> {
        tokenize(input)
    }

    #[test]
    fn splits_on_any_whitespace() {
        assert_eq!(
            words("-X POST\thttps://a.example\n -v"),
            ["-X", "POST", "https://a.example", "-v"]
        );
        assert!(words("   ").is_empty());
        assert!(words("").is_empty());
    }

    #[test]
    fn quoted_runs_keep_spaces_and_quotes() {
        assert_eq!(
            words(r#"-H "Authorization: Bearer abc" -d '{"a": 1}'"#),
            ["-H", r#""Authorization: Bearer abc""#, "-d", r#"'{"a": 1}'"#]
        );
    }

    #[test]
    fn adjacent_runs_join_into_one_word() {
        assert_eq!(words(r#"a"b c"d'e f'"#), [r#"a"b c"d'e f'"#]);
    }

    #[test]
    fn other_quote_kind_is_literal_inside_quotes() {
        assert_eq!(words(r#""it's" x"#), [r#""it's""#, "x"]);
    }

    #[test]
    fn unterminated_quote_is_dropped() {
        assert_eq!(words(r#"abc"def ghi"#), ["abc", "def", "ghi"]);
        assert_eq!(words(r#"-d "abc"#), ["-d", "abc"]);
        assert_eq!(words(r#"' "x y""#), [r#""x y""#]);
    }

    #[test]
    fn empty_quotes_form_a_word() {
        assert_eq!(words(r#"'' """#), ["''", r#""""#]);
    }

    #[test]
    fn strip_command_name_requires_whitespace() {
        assert_eq!(strip_command_name("  curl  -X GET", "curl"), "-X GET");
        assert_eq!(strip_command_name("curl\nhttps://a", "curl"), "https://a");
        assert_eq!(strip_command_name("curlie x", "curl"), "curlie x");
        assert_eq!(strip_command_name("Curl x", "curl"), "Curl x");
        assert_eq!(strip_command_name("curl", "curl"), "curl");
    }

    #[test]
    fn unquote_matching_pairs_only() {
        assert_eq!(unquote(r#""abc""#), "abc");
        assert_eq!(unquote("'abc'"), "abc");
        assert_eq!(unquote(r#""abc'"#), r#""abc'"#);
        assert_eq!(unquote(r#"""#), r#"""#);
        assert_eq!(unquote("''"), "");
        assert_eq!(unquote("plain"), "plain");
    }
}

/// How a keyword is matched against an operation's searchable text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryMatcher {
    /// Single-word query: the whole lowercased keyword must appear
    Substring(String),
    /// Multi-word query: every token must appear
    AllTokens(Vec<String>),
}

impl QueryMatcher {
    pub fn new(keyword: &str) -> Self {
        let keyword = keyword.to_lowercase();
        if keyword.chars().any(char::is_whitespace) {
            Self::AllTokens(tokenize_query(&keyword))
        } else {
            Self::Substring(keyword)
        }
    }

    /// `text` must already be lowercased
    pub fn matches(&self, text: &str) -> bool {
        match self {
            Self::Substring(keyword) => text.contains(keyword.as_str()),
            Self::AllTokens(tokens) => tokens.iter().all(|token| text.contains(token.as_str())),
        }
    }
}

/// Split a query on runs of whitespace, `-` and `_`, dropping empty tokens
pub fn tokenize_query(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

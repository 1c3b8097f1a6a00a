//! Pre-processing applied to both sides before scoring.

/// Lower-case alphanumerics, turn everything else into spaces, and trim.
pub fn default_process(name: &str) -> String {
    let folded: String = name
        .chars()
        .map(|ch| {
            if ch.is_alphanumeric() {
                ch.to_lowercase().next().unwrap_or(ch)
            } else {
                ' '
            }
        })
        .collect();
    folded.trim().to_string()
}

/// A processed string kept as chars, with its sorted token list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Processed {
    chars: Vec<char>,
    tokens: Vec<String>,
}

impl Processed {
    pub fn new(name: &str) -> Self {
        let text = default_process(name);
        let mut tokens: Vec<String> = text.split_whitespace().map(str::to_string).collect();
        tokens.sort();
        Self {
            chars: text.chars().collect(),
            tokens,
        }
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Tokens in sorted order, duplicates kept.
    pub fn sorted_tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }
}

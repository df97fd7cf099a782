/// A raw page request from a front-end: typed text or a number
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageRequest {
    Index(i64),
    Text(String),
}

impl PageRequest {
    /// The requested index, or `None` when the text holds no integer
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            PageRequest::Index(index) => Some(*index),
            PageRequest::Text(text) => parse_page_number(text),
        }
    }
}

impl From<i64> for PageRequest {
    fn from(index: i64) -> Self {
        PageRequest::Index(index)
    }
}

impl From<i32> for PageRequest {
    fn from(index: i32) -> Self {
        PageRequest::Index(i64::from(index))
    }
}

impl From<usize> for PageRequest {
    fn from(index: usize) -> Self {
        PageRequest::Index(i64::try_from(index).unwrap_or(i64::MAX))
    }
}

impl From<&str> for PageRequest {
    fn from(text: &str) -> Self {
        PageRequest::Text(text.to_string())
    }
}

impl From<String> for PageRequest {
    fn from(text: String) -> Self {
        PageRequest::Text(text)
    }
}

/// Parse the leading integer of a page-number field
///
/// Leading whitespace and a single sign are accepted, then as many decimal
/// digits as follow; anything after the digits is ignored ("12abc" is 12).
/// Returns `None` when no digit is present. Values too large for `i64`
/// saturate, since callers clamp to the page range anyway.
pub fn parse_page_number(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits: &str = {
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        &rest[..end]
    };
    if digits.is_empty() {
        return None;
    }

    let magnitude = digits.bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    Some(if negative { -magnitude } else { magnitude })
}

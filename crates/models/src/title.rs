use crate::error::{Error, ErrorKind, Result};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::ops::Deref;
use std::str::FromStr;

/// Normalize a raw book name into its canonical form.
///
/// Surrounding whitespace is trimmed, then every word is title-cased: a
/// cased character that follows another cased character is lowercased, any
/// other cased character is uppercased. Anything that isn't a cased
/// character (spaces, digits, punctuation) starts a new word, so
/// `"o'brien's  ODYSSEY"` becomes `"O'Brien'S  Odyssey"`. Inner whitespace is
/// kept as-is.
///
/// Word boundaries are decided on the characters written, not the ones read:
/// `İ` lowercases to `i` and a combining dot, and the dot ends the word. This
/// keeps every normalized string a fixed point of `normalize`.
pub fn normalize(raw: &str) -> String {
    let mut normalized = String::with_capacity(raw.len());
    let mut previous_cased = false;
    for c in raw.trim().chars() {
        push_title_cased(&mut normalized, c, &mut previous_cased);
    }
    normalized
}

fn is_cased(c: char) -> bool {
    c.is_uppercase() || c.is_lowercase()
}

fn push_title_cased(out: &mut String, c: char, previous_cased: &mut bool) {
    if !is_cased(c) {
        out.push(c);
        *previous_cased = false;
        return;
    }
    let mapped: Vec<char> = if *previous_cased {
        c.to_lowercase().collect()
    } else {
        c.to_uppercase().collect()
    };
    if mapped == [c] {
        out.push(c);
        *previous_cased = true;
        return;
    }
    // Multi-character mappings (ß -> SS, İ -> i + U+0307) are cased one
    // written character at a time.
    for m in mapped {
        push_title_cased(out, m, previous_cased);
    }
}

/// A normalized, non-empty book name.
///
/// This is the only key used to identify a book. Two raw inputs that differ
/// only in letter case or surrounding whitespace produce equal titles.
/// Ordering is lexicographic over the normalized string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BookTitle(String);

impl BookTitle {
    /// Normalize `raw` into a title, failing with [`ErrorKind::EmptyTitle`]
    /// when nothing but whitespace was given.
    pub fn new(raw: impl AsRef<str>) -> Result<Self> {
        let normalized = normalize(raw.as_ref());
        if normalized.is_empty() {
            exn::bail!(ErrorKind::EmptyTitle);
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Accept a name that is already in canonical form, as read back from
    /// storage. Fails with [`ErrorKind::NotNormalized`] when normalizing it
    /// would produce a different key.
    pub fn from_normalized(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            exn::bail!(ErrorKind::EmptyTitle);
        }
        if normalize(&name) != name {
            exn::bail!(ErrorKind::NotNormalized(name));
        }
        Ok(Self(name))
    }
}

impl FromStr for BookTitle {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl Deref for BookTitle {
    type Target = str;
    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for BookTitle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for BookTitle {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

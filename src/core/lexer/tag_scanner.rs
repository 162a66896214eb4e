//! Tag boundary detection over raw markup text.
//!
//! The scanner only knows about `<` and `>`. It does not build a tree, match
//! closing tags, or decode entities: every opening tag is reported on its own,
//! so a tag nested inside another tag is seen exactly like a top-level one.

const COMMENT_START: &str = "<!--";
const COMMENT_END: &str = "-->";

/// An opening tag found in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag<'a> {
    /// Tag name as written (`p`, `other-component`).
    pub name: &'a str,
    /// Everything between the tag name and the closing `>`, possibly spanning lines.
    pub attributes: &'a str,
    /// Literal text between this tag's `>` and the next tag start (or end of input).
    /// A stray `<` such as `a < b` is part of the text.
    pub following_text: &'a str,
    /// Byte offset of the tag's `<`.
    pub offset: usize,
}

/// Lazy iterator over the opening tags of a markup string, in document order.
pub struct TagScanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> TagScanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn finish(&mut self) -> Option<Tag<'a>> {
        self.pos = self.input.len();
        None
    }
}

impl<'a> Iterator for TagScanner<'a> {
    type Item = Tag<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let input = self.input;
        let bytes = input.as_bytes();

        loop {
            let start = find_markup_start(bytes, self.pos)?;

            if input[start..].starts_with(COMMENT_START) {
                // Searching from `<!` makes `<!-->` and `<!--->` complete comments.
                let body = start + 2;
                match input[body..].find(COMMENT_END) {
                    Some(end) => {
                        self.pos = body + end + COMMENT_END.len();
                        continue;
                    }
                    None => return self.finish(),
                }
            }

            // Closing tags, doctype and processing instructions carry no keys.
            if !bytes[start + 1].is_ascii_alphabetic() {
                match find_byte(bytes, start + 1, b'>') {
                    Some(end) => {
                        self.pos = end + 1;
                        continue;
                    }
                    None => return self.finish(),
                }
            }

            let name_start = start + 1;
            let mut name_end = name_start;
            while name_end < bytes.len() && is_tag_name_byte(bytes[name_end]) {
                name_end += 1;
            }

            let Some(close) = find_tag_end(bytes, name_end) else {
                return self.finish();
            };

            let content_start = close + 1;
            let content_end = find_markup_start(bytes, content_start).unwrap_or(bytes.len());
            self.pos = content_start;

            return Some(Tag {
                name: &input[name_start..name_end],
                attributes: &input[name_end..close],
                following_text: &input[content_start..content_end],
                offset: start,
            });
        }
    }
}

fn is_tag_name_byte(b: u8) -> bool {
    !b.is_ascii_whitespace() && b != b'>' && b != b'/'
}

/// Whether the `<` at `at` opens markup: a tag, closing tag, comment, doctype
/// or processing instruction. Any other `<` is plain text.
fn starts_markup(bytes: &[u8], at: usize) -> bool {
    matches!(
        bytes.get(at + 1),
        Some(&b) if b.is_ascii_alphabetic() || matches!(b, b'/' | b'!' | b'?')
    )
}

fn find_markup_start(bytes: &[u8], mut from: usize) -> Option<usize> {
    loop {
        let at = find_byte(bytes, from, b'<')?;
        if starts_markup(bytes, at) {
            return Some(at);
        }
        from = at + 1;
    }
}

fn find_byte(bytes: &[u8], from: usize, needle: u8) -> Option<usize> {
    bytes
        .get(from..)?
        .iter()
        .position(|&b| b == needle)
        .map(|rel| from + rel)
}

/// Find the `>` closing a tag whose attributes start at `from`.
///
/// A `>` inside a quoted attribute value does not close the tag. If the quotes
/// never balance (an apostrophe in a bare attribute, say), the first `>` wins.
fn find_tag_end(bytes: &[u8], from: usize) -> Option<usize> {
    let mut quote: Option<u8> = None;
    for (i, &b) in bytes.iter().enumerate().skip(from) {
        match quote {
            Some(q) if b == q => quote = None,
            Some(_) => {}
            None if b == b'"' || b == b'\'' => quote = Some(b),
            None if b == b'>' => return Some(i),
            None => {}
        }
    }
    find_byte(bytes, from, b'>')
}

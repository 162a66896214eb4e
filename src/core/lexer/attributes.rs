//! Attribute tokenizer for the raw text of a single tag.

/// Result of looking up one attribute by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeLookup<'a> {
    /// `name="value"`, `name='value'` or `name=value`. The value is raw, not entity-decoded.
    Value(&'a str),
    /// Boolean form: the name is present without `=`.
    NoValue,
    Absent,
}

/// Attributes of one tag, in declaration order.
#[derive(Debug, Default)]
pub struct TagAttributes<'a> {
    entries: Vec<(&'a str, Option<&'a str>)>,
}

impl<'a> TagAttributes<'a> {
    /// Tokenize the text between a tag name and its `>`.
    ///
    /// Whitespace (including newlines) may surround `=`. Anything that cannot
    /// start an attribute name, such as the `/` of a self-closing tag, is skipped.
    pub fn parse(raw: &'a str) -> Self {
        let bytes = raw.as_bytes();
        let len = bytes.len();
        let mut entries = Vec::new();
        let mut k = 0;

        let skip_whitespace = |k: &mut usize| {
            while *k < len && bytes[*k].is_ascii_whitespace() {
                *k += 1;
            }
        };

        loop {
            skip_whitespace(&mut k);
            if k >= len {
                break;
            }

            let name_start = k;
            while k < len && is_name_byte(bytes[k]) {
                k += 1;
            }
            if name_start == k {
                k += 1;
                continue;
            }
            let name = &raw[name_start..k];

            skip_whitespace(&mut k);
            if k >= len || bytes[k] != b'=' {
                entries.push((name, None));
                continue;
            }

            k += 1;
            skip_whitespace(&mut k);
            let value = if k < len && (bytes[k] == b'"' || bytes[k] == b'\'') {
                let quote = bytes[k];
                k += 1;
                let value_start = k;
                while k < len && bytes[k] != quote {
                    k += 1;
                }
                let value = &raw[value_start..k];
                if k < len {
                    k += 1;
                }
                value
            } else {
                let value_start = k;
                while k < len && !bytes[k].is_ascii_whitespace() {
                    k += 1;
                }
                &raw[value_start..k]
            };
            entries.push((name, Some(value)));
        }

        Self { entries }
    }

    /// Look up an attribute by exact, case-sensitive name. The first declaration wins.
    pub fn read(&self, name: &str) -> AttributeLookup<'a> {
        match self.entries.iter().find(|(n, _)| *n == name) {
            Some(&(_, Some(value))) => AttributeLookup::Value(value),
            Some(&(_, None)) => AttributeLookup::NoValue,
            None => AttributeLookup::Absent,
        }
    }
}

fn is_name_byte(b: u8) -> bool {
    !b.is_ascii_whitespace() && !matches!(b, b'=' | b'/' | b'"' | b'\'' | b'>')
}

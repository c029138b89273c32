/// Bounds-safe, trimmed positional access over one pipe-delimited line.
pub struct Fields<'a> {
    raw: Vec<&'a str>,
}

impl<'a> Fields<'a> {
    /// Splits a line on `|`. Trailing empties are preserved so positional
    /// indexes stay stable.
    pub fn split(line: &'a str) -> Self {
        Fields {
            raw: line.split('|').collect(),
        }
    }

    /// Number of delimited fields.
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// The field at `idx`, whitespace-trimmed. Index past the end yields the
    /// empty string.
    pub fn get(&self, idx: usize) -> &'a str {
        self.raw.get(idx).map(|s| s.trim()).unwrap_or("")
    }

    /// Owned copy of the field at `idx`.
    pub fn owned(&self, idx: usize) -> String {
        self.get(idx).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_yields_empty() {
        let fields = Fields::split("16|MPRICE|P01");
        assert_eq!(fields.get(0), "16");
        assert_eq!(fields.get(2), "P01");
        assert_eq!(fields.get(3), "");
        assert_eq!(fields.get(99), "");
    }

    #[test]
    fn fields_are_trimmed() {
        let fields = Fields::split(" 16 | MPRICE |  P01  ");
        assert_eq!(fields.get(0), "16");
        assert_eq!(fields.get(1), "MPRICE");
        assert_eq!(fields.get(2), "P01");
    }

    #[test]
    fn trailing_empties_keep_positions() {
        let fields = Fields::split("a|b|||");
        assert_eq!(fields.len(), 5);
        assert_eq!(fields.get(3), "");
    }
}

/// A raw search string split into its boolean-operator parts. All tokens are
/// lowercased; quoted spans land only in `phrases`, never in the other sets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedQuery {
	pub required: Vec<String>,
	pub excluded: Vec<String>,
	pub phrases: Vec<String>,
	pub normal: Vec<String>,
}
impl ParsedQuery {
	pub fn is_empty(&self) -> bool {
		self.required.is_empty()
			&& self.excluded.is_empty()
			&& self.phrases.is_empty()
			&& self.normal.is_empty()
	}
}

/// Single-pass scan: double quotes delimit exact phrases, everything else is
/// whitespace-tokenized with `+term` marking required and `-term` excluded.
/// Lenient by design; no input is ever rejected.
pub fn parse_query(raw: &str) -> ParsedQuery {
	let mut out = ParsedQuery::default();
	let mut in_quote = false;
	let mut phrase = String::new();
	let mut remaining = String::new();

	for ch in raw.chars() {
		if ch == '"' {
			if in_quote {
				if !phrase.is_empty() {
					out.phrases.push(phrase.to_lowercase());
				}

				phrase.clear();

				in_quote = false;
			} else {
				in_quote = true;
			}
		} else if in_quote {
			phrase.push(ch);
		} else {
			remaining.push(ch);
		}
	}

	// An unterminated quote never closes, so its partial content is dropped.

	for word in remaining.split_whitespace() {
		if let Some(term) = word.strip_prefix('+') {
			if !term.is_empty() {
				out.required.push(term.to_lowercase());
			}
		} else if let Some(term) = word.strip_prefix('-') {
			if !term.is_empty() {
				out.excluded.push(term.to_lowercase());
			}
		} else {
			out.normal.push(word.to_lowercase());
		}
	}

	out
}

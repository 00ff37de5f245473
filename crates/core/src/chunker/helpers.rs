//! Text splitting and overlap utilities used by the chunking strategies.

/// Length in codepoints. All size accounting goes through this, never `len()`.
pub(crate) fn char_count(text: &str) -> usize {
    text.chars().count()
}

/// Split `text` at sentence boundaries: `.`, `!`, or `?` followed by
/// whitespace. Returns trimmed, non-empty fragments; input with no boundary
/// comes back as a single sentence.
///
/// The scan walks bytes; the markers are all ASCII, so a split point can
/// never land inside a multi-byte sequence.
pub(crate) fn split_sentences(text: &str) -> Vec<String> {
    let bytes = text.as_bytes();
    let mut sentences = Vec::new();
    let mut start = 0;

    let mut i = 0;
    while i < bytes.len() {
        let is_terminal = matches!(bytes[i], b'.' | b'!' | b'?');
        if is_terminal && i + 1 < bytes.len() && bytes[i + 1].is_ascii_whitespace() {
            let s = text[start..=i].trim();
            if !s.is_empty() {
                sentences.push(s.to_string());
            }
            i += 1;
            while i < bytes.len() && bytes[i].is_ascii_whitespace() {
                i += 1;
            }
            start = i;
            continue;
        }
        i += 1;
    }

    // Remainder
    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail.to_string());
    }
    sentences
}

/// Split `text` at blank-line boundaries: a whitespace run containing a
/// second newline. Returns trimmed, non-empty paragraphs.
pub(crate) fn split_paragraphs(text: &str) -> Vec<String> {
    let bytes = text.as_bytes();
    let mut paragraphs = Vec::new();
    let mut start = 0;

    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'\n' {
            let mut j = i + 1;
            let mut blank = false;
            while j < bytes.len() && bytes[j].is_ascii_whitespace() {
                if bytes[j] == b'\n' {
                    blank = true;
                }
                j += 1;
            }
            if blank {
                let p = text[start..i].trim();
                if !p.is_empty() {
                    paragraphs.push(p.to_string());
                }
                start = j;
                i = j;
                continue;
            }
        }
        i += 1;
    }

    let tail = text[start..].trim();
    if !tail.is_empty() {
        paragraphs.push(tail.to_string());
    }
    paragraphs
}

/// Extract trailing context from `chunk` to seed the next one: the last
/// `overlap` codepoints, preferring to start just after a space when one
/// falls in the first half of the window (avoids a leading word fragment).
///
/// Returns the trimmed text with exactly one trailing space appended, or an
/// empty string when there is too little content to usefully overlap.
pub(crate) fn overlap_text(chunk: &str, overlap: usize) -> String {
    let chunk_len = char_count(chunk);
    if overlap == 0 || chunk_len <= overlap {
        return String::new();
    }

    let tail: String = chunk.chars().skip(chunk_len - overlap).collect();

    let tail = match tail.chars().position(|c| c == ' ') {
        Some(first_space) if first_space * 2 < overlap => {
            tail.chars().skip(first_space + 1).collect()
        }
        _ => tail,
    };

    let trimmed = tail.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("{trimmed} ")
    }
}

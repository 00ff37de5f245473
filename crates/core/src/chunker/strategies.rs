//! Chunking strategies: sentence accumulation, paragraph accumulation with
//! sentence fallback, and fixed windows with word-boundary snapping.

use super::helpers::{char_count, overlap_text, split_paragraphs, split_sentences};
use super::types::{ChunkConfig, ChunkStrategy};

/// Chunk `content` with the configured strategy.
///
/// Content is trimmed first; empty or whitespace-only input yields an empty
/// vector. Every returned chunk is trimmed and non-empty. Never fails and
/// never loops, whatever the input or configuration.
pub fn chunk_text(content: &str, config: &ChunkConfig) -> Vec<String> {
    let content = content.trim();
    if content.is_empty() {
        return Vec::new();
    }

    let chunks = match config.strategy {
        ChunkStrategy::Sentence => chunk_by_sentence(content, config),
        ChunkStrategy::Paragraph => chunk_by_paragraph(content, config),
        ChunkStrategy::Fixed => chunk_by_fixed(content, config),
    };

    tracing::debug!(
        strategy = %config.strategy,
        chunk_size = config.chunk_size,
        overlap = config.overlap,
        chunks = chunks.len(),
        "chunked content"
    );
    chunks
}

// ── Sentence strategy ───────────────────────────────────────────────

/// Accumulate sentences up to `chunk_size` codepoints, seeding each new
/// buffer with overlap from the one just flushed. A single sentence longer
/// than `chunk_size` is emitted whole: sentence integrity wins over the
/// size bound.
fn chunk_by_sentence(content: &str, config: &ChunkConfig) -> Vec<String> {
    let sentences = split_sentences(content);
    if sentences.is_empty() {
        return vec![content.to_string()];
    }

    let mut chunks = Vec::new();
    let mut current = String::new();

    for sentence in sentences {
        // Joining costs one space, counted in codepoints.
        if !current.is_empty()
            && char_count(&current) + 1 + char_count(&sentence) > config.chunk_size
        {
            chunks.push(current.trim().to_string());
            current = format!("{}{}", overlap_text(&current, config.overlap), sentence);
        } else if current.is_empty() {
            current = sentence;
        } else {
            current.push(' ');
            current.push_str(&sentence);
        }
    }

    if !current.trim().is_empty() {
        chunks.push(current.trim().to_string());
    }

    chunks.retain(|c| !c.is_empty());
    chunks
}

// ── Paragraph strategy ──────────────────────────────────────────────

/// Accumulate paragraphs joined by blank lines. An oversized paragraph is
/// re-chunked by sentences and its pieces appended directly. The buffer
/// reset here deliberately carries no overlap, unlike the sentence strategy.
fn chunk_by_paragraph(content: &str, config: &ChunkConfig) -> Vec<String> {
    let paragraphs = split_paragraphs(content);
    if paragraphs.is_empty() {
        return vec![content.to_string()];
    }

    let mut chunks = Vec::new();
    let mut current = String::new();

    for paragraph in paragraphs {
        if char_count(&paragraph) > config.chunk_size {
            if !current.is_empty() {
                chunks.push(current.trim().to_string());
                current.clear();
            }
            chunks.extend(chunk_by_sentence(&paragraph, config));
            continue;
        }

        // The blank-line join costs two codepoints.
        if !current.is_empty()
            && char_count(&current) + 2 + char_count(&paragraph) > config.chunk_size
        {
            chunks.push(current.trim().to_string());
            current = paragraph;
        } else if current.is_empty() {
            current = paragraph;
        } else {
            current.push_str("\n\n");
            current.push_str(&paragraph);
        }
    }

    if !current.trim().is_empty() {
        chunks.push(current.trim().to_string());
    }

    chunks.retain(|c| !c.is_empty());
    chunks
}

// ── Fixed strategy ──────────────────────────────────────────────────

/// Cut fixed-length windows by codepoint offset, snapping each cut to the
/// nearest space on either side when one exists. The cursor always advances
/// by at least one codepoint, so the loop terminates even when
/// `overlap >= chunk_size`.
fn chunk_by_fixed(content: &str, config: &ChunkConfig) -> Vec<String> {
    let chars: Vec<char> = content.chars().collect();
    let total = chars.len();

    let mut chunks = Vec::new();
    let mut position = 0usize;

    while position < total {
        let mut chunk_end = (position + config.chunk_size).min(total);

        // Snap to a word boundary unless the window already reaches the end.
        // The backward search stays inside the current window so the cut can
        // never regress behind the cursor.
        if chunk_end < total {
            let next_space = chars[chunk_end..]
                .iter()
                .position(|c| *c == ' ')
                .map(|i| chunk_end + i);
            let prev_space = chars[position..chunk_end]
                .iter()
                .rposition(|c| *c == ' ')
                .map(|i| position + i)
                .filter(|p| *p > position);

            chunk_end = match (next_space, prev_space) {
                (Some(next), Some(prev)) => {
                    if next - chunk_end < chunk_end - prev {
                        next
                    } else {
                        prev
                    }
                }
                (None, Some(prev)) => prev,
                (Some(next), None) => next,
                (None, None) => chunk_end,
            };
        }

        let piece: String = chars[position..chunk_end].iter().collect();
        chunks.push(piece.trim().to_string());

        position = (position + 1).max(chunk_end.saturating_sub(config.overlap));
    }

    chunks.retain(|c| !c.is_empty());
    chunks
}

//! Packs rendered lines into length-bounded chunks.

use crate::domain::model::{Chunk, RenderLine};

/// Byte offset of the `n`-th character of `s`, or `s.len()` past the end.
fn char_boundary(s: &str, n: usize) -> usize {
    s.char_indices().nth(n).map(|(i, _)| i).unwrap_or(s.len())
}

/// Greedily packs `lines` into chunks of at most `max_length` characters.
///
/// Every candidate line is charged one extra character for the joining
/// newline, including the first line of a chunk. A line that cannot fit even
/// in an empty chunk is hard-split at `max_length` and its remainder seeds the
/// next chunk.
pub fn paginate(lines: &[RenderLine], max_length: usize) -> Vec<Chunk> {
    let max_length = max_length.max(1);
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for line in lines {
        let line_len = line.chars().count();

        if current_len + line_len + 1 <= max_length {
            if !current.is_empty() {
                current.push('\n');
                current_len += 1;
            }
            current.push_str(line);
            current_len += line_len;
        } else if !current.is_empty() {
            chunks.push(Chunk::new(std::mem::take(&mut current)));
            current.push_str(line);
            current_len = line_len;
        } else {
            let split = char_boundary(line, max_length);
            chunks.push(Chunk::new(&line[..split]));
            current.push_str(&line[split..]);
            current_len = line_len - max_length;
        }
    }

    if !current.is_empty() {
        chunks.push(Chunk::new(current));
    }

    tracing::debug!(
        lines = lines.len(),
        chunks = chunks.len(),
        max_length,
        "paginated rendered output"
    );
    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(chunks: &[Chunk]) -> Vec<&str> {
        chunks.iter().map(Chunk::as_str).collect()
    }

    #[test]
    fn test_single_oversized_line_is_hard_split() {
        let chunks = paginate(&["a".repeat(5000)], 4000);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].char_len(), 4000);
        assert_eq!(chunks[1].char_len(), 1000);
    }

    #[test]
    fn test_lines_are_packed_greedily() {
        let lines: Vec<String> = vec!["aaa".into(), "bbb".into(), "ccc".into(), "dd".into()];
        // "aaa\nbbb" = 7 chars; adding "ccc" would need 7 + 3 + 1 = 11 > 10
        let chunks = paginate(&lines, 10);
        assert_eq!(texts(&chunks), vec!["aaa\nbbb", "ccc\ndd"]);
    }

    #[test]
    fn test_newline_charge_applies_to_first_line() {
        // a line of exactly max_length does not fit an empty chunk
        let lines: Vec<String> = vec!["abcde".into(), "f".into()];
        let chunks = paginate(&lines, 5);
        assert_eq!(texts(&chunks), vec!["abcde", "f"]);
    }

    #[test]
    fn test_remainder_of_split_joins_following_lines() {
        let lines: Vec<String> = vec!["abcdefgh".into(), "x".into()];
        let chunks = paginate(&lines, 6);
        assert_eq!(texts(&chunks), vec!["abcdef", "gh\nx"]);
    }

    #[test]
    fn test_chunks_fit_and_reconstruct_input() {
        let lines: Vec<String> = (1..=200)
            .map(|i| format!("{}. Предмет номер {}:    {}.5", i, i, i * 7))
            .collect();
        let chunks = paginate(&lines, 300);

        assert!(chunks.len() > 1);
        for chunk in &chunks {
            assert!(chunk.char_len() <= 300);
        }

        let rebuilt: Vec<&str> = chunks.iter().flat_map(Chunk::lines).collect();
        assert_eq!(rebuilt.join("\n"), lines.join("\n"));
    }

    #[test]
    fn test_split_respects_character_boundaries() {
        let chunks = paginate(&["яяяяя".to_string()], 3);
        assert_eq!(texts(&chunks), vec!["яяя", "яя"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(paginate(&[], 4000).is_empty());
    }
}

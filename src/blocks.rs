/// Split a digest into blocks of at most `max_chars` characters, packing
/// consecutive paragraphs greedily.
///
/// Paragraphs are maximal runs of text separated by blank lines; runs of two
/// or more newlines count as a single separator. A paragraph that is longer
/// than `max_chars` on its own is emitted as one oversized block rather than
/// truncated, so no content is ever lost. An empty digest yields no blocks.
pub fn split_blocks(digest: &str, max_chars: usize) -> Vec<String> {
    let paragraphs = digest
        .split("\n\n")
        .map(|p| p.trim_matches('\n'))
        .filter(|p| !p.is_empty());

    let mut blocks = Vec::new();
    let mut current = String::new();

    for paragraph in paragraphs {
        if current.is_empty() {
            current.push_str(paragraph);
        } else if current.chars().count() + 2 + paragraph.chars().count() <= max_chars {
            current.push_str("\n\n");
            current.push_str(paragraph);
        } else {
            blocks.push(std::mem::take(&mut current));
            current.push_str(paragraph);
        }
    }

    if !current.is_empty() {
        blocks.push(current);
    }

    blocks
}

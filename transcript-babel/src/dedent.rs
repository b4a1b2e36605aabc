//! First-line baseline dedent for code blocks
//!
//! Preformatted blocks in rendered chat markup usually carry the indentation
//! of the container they were rendered in. The only reliable marker of the
//! block's real left margin is the first line with content, so that line's
//! leading whitespace is the baseline.
//!
//! Contract: the baseline is stripped from the first content line only. Every
//! following line is returned untouched, so `"   a\n  b\n    c"` becomes
//! `"a\n  b\n    c"`. Callers that need a uniform dedent across all lines must
//! normalize before calling. Downstream formatting relies on this exact
//! behavior, so it is not "fixed" into a per-line dedent.

/// Strip the first content line's leading spaces/tabs.
///
/// Leading blank lines are dropped before the baseline is taken; input with no
/// content line yields an empty string. Lines are joined with `\n` and the end
/// of the text is not normalized.
pub fn dedent(text: &str) -> String {
    let mut lines = text.split('\n').skip_while(|line| line.trim().is_empty());

    let Some(first) = lines.next() else {
        return String::new();
    };

    let baseline = first.len() - first.trim_start_matches([' ', '\t']).len();

    let mut output = String::with_capacity(text.len());
    output.push_str(&first[baseline..]);
    for line in lines {
        output.push('\n');
        output.push_str(line);
    }
    output
}

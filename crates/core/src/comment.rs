//! Documentation comments for generated declarations.

/// Convert a free-text summary into a JSDoc block.
///
/// A single-line summary becomes `/** text */`; anything longer becomes a
/// block with one ` * ` line per input line. Returns `None` for blank input.
/// The result carries no indentation and no trailing newline.
pub fn doc_comment(summary: &str) -> Option<String> {
    let summary = summary.trim();
    if summary.is_empty() {
        return None;
    }
    // `*/` would close the comment early.
    let summary = summary.replace("*/", "*\\/");

    let lines: Vec<&str> = summary.lines().map(str::trim_end).collect();
    if let [line] = lines.as_slice() {
        return Some(format!("/** {line} */"));
    }

    let mut out = String::from("/**\n");
    for line in lines {
        if line.is_empty() {
            out.push_str(" *\n");
        } else {
            out.push_str(" * ");
            out.push_str(line);
            out.push('\n');
        }
    }
    out.push_str(" */");
    Some(out)
}

/// Doc text for a declaration, with a `@deprecated` tag appended when
/// `deprecation` is set. An empty reason yields a bare tag.
pub fn with_deprecation(summary: Option<&str>, deprecation: Option<&str>) -> Option<String> {
    let summary = summary.map(str::trim).filter(|s| !s.is_empty());
    let Some(reason) = deprecation else {
        return summary.map(str::to_string);
    };
    let tag = match reason.trim() {
        "" => "@deprecated".to_string(),
        reason => format!("@deprecated {reason}"),
    };
    Some(match summary {
        Some(summary) => format!("{summary}\n\n{tag}"),
        None => tag,
    })
}

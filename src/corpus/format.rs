use super::types::Hymn;

const RULE: &str = "--------------------------------";

/// Renders a hymn as plain text: header, verses, then the chorus if present.
pub fn format_hymn(hymn: &Hymn) -> String {
    let mut out = format!("Hymn {}: {}\n{}\n", hymn.number, hymn.title, RULE);

    for verse in &hymn.verses {
        out.push_str(&format!("Verse {}\n", verse.number));
        push_block(&mut out, &verse.lines);
    }

    if let Some(chorus) = &hymn.chorus {
        out.push_str("Chorus\n");
        push_block(&mut out, &chorus.lines);
    }

    out
}

/// Appends each line, then the blank line that closes the block.
fn push_block(out: &mut String, lines: &[String]) {
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }
    out.push('\n');
}

/// One line per hymn, `"<number>. <title>"`, in the given order.
pub fn format_listing<'a>(hymns: impl IntoIterator<Item = &'a Hymn>) -> String {
    hymns
        .into_iter()
        .map(|hymn| format!("{}. {}\n", hymn.number, hymn.title))
        .collect()
}

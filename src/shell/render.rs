use std::io::{self, Write};

use colored::Colorize;

use crate::ext::SystemTimeExt;
use crate::filesystem::{Entry, NodeKind};

/// Writes one line per entry: the bare name, or
/// `<kind><permissions>  <modified>  <name>` in long format.
pub fn write_listing<'a>(
    output: &mut impl Write,
    entries: impl IntoIterator<Item = Entry<'a>>,
    long_format: bool,
    color: bool,
) -> io::Result<()> {
    for entry in entries {
        let name = display_name(&entry, color);
        if long_format {
            writeln!(
                output,
                "{}{}  {}  {}",
                entry.kind,
                entry.permissions,
                entry.modified.to_listing_string(),
                name
            )?;
        } else {
            writeln!(output, "{name}")?;
        }
    }

    Ok(())
}

fn display_name(entry: &Entry<'_>, color: bool) -> String {
    match entry.kind {
        NodeKind::Directory if color => entry.name.blue().bold().to_string(),
        _ => entry.name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, SystemTime};

    use super::*;

    fn entries() -> Vec<Entry<'static>> {
        let modified = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        vec![
            Entry {
                name: "docs",
                kind: NodeKind::Directory,
                permissions: "755",
                modified,
            },
            Entry {
                name: "notes.txt",
                kind: NodeKind::File,
                permissions: "644",
                modified,
            },
        ]
    }

    fn render(long_format: bool, color: bool) -> String {
        let mut output = Vec::new();
        write_listing(&mut output, entries(), long_format, color).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn short_listing_prints_names() {
        assert_eq!(render(false, false), "docs\nnotes.txt\n");
    }

    #[test]
    fn long_listing_prints_kind_permissions_and_time() {
        let stamp = (SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000)).to_listing_string();

        assert_eq!(
            render(true, false),
            format!("d755  {stamp}  docs\n-644  {stamp}  notes.txt\n")
        );
    }

    #[test]
    fn empty_listing_prints_nothing() {
        let mut output = Vec::new();
        write_listing(&mut output, Vec::<Entry>::new(), true, false).unwrap();
        assert!(output.is_empty());
    }

    #[test]
    fn color_only_styles_directories() {
        colored::control::set_override(true);
        let rendered = render(false, true);
        colored::control::unset_override();
        let mut lines = rendered.lines();

        assert!(lines.next().unwrap().contains("\u{1b}["));
        assert_eq!(lines.next(), Some("notes.txt"));
    }
}

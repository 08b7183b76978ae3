//! Document Renderer
//!
//! Renders extracted interface entries as markdown into an explicit
//! output sink. The sink is threaded in by the caller; nothing here
//! redirects or mutates a process-wide stream.

use std::io::{self, Write};

use ifdoc_extractor::InterfaceEntry;

/// Render all entries, in order, as markdown reference documentation.
///
/// Each block is a heading, an optional description paragraph, and a
/// property table, followed by a blank line pair. An interface without
/// properties still gets its heading and the table header rows.
pub fn render_markdown(entries: &[InterfaceEntry], out: &mut dyn Write) -> io::Result<()> {
    for entry in entries {
        writeln!(out, "# Interface: {}\n", entry.name)?;

        if !entry.description.is_empty() {
            writeln!(out, "{}\n", entry.description)?;
        }

        writeln!(out, "| Property | Type | Required |")?;
        writeln!(out, "|----------|------|----------|")?;

        for prop in &entry.properties {
            let required = if prop.required { "Yes" } else { "No" };
            writeln!(out, "| {} | {} | {} |", prop.name, prop.type_annotation, required)?;
        }

        write!(out, "\n\n")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ifdoc_extractor::{InterfaceEntry, PropertyEntry};

    fn render_to_string(entries: &[InterfaceEntry]) -> String {
        let mut out = Vec::new();
        render_markdown(entries, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn property(name: &str, type_annotation: &str, required: bool) -> PropertyEntry {
        PropertyEntry {
            name: name.to_string(),
            type_annotation: type_annotation.to_string(),
            required,
        }
    }

    #[test]
    fn should_render_heading_and_property_table() {
        let mut entry = InterfaceEntry::new("Foo", "");
        entry.properties.push(property("bar", "string", true));
        entry.properties.push(property("baz", "number", false));

        let output = render_to_string(&[entry]);

        assert_eq!(
            output,
            "# Interface: Foo\n\n\
             | Property | Type | Required |\n\
             |----------|------|----------|\n\
             | bar | string | Yes |\n\
             | baz | number | No |\n\
             \n\n"
        );
    }

    #[test]
    fn should_render_empty_table_for_interface_without_properties() {
        let entry = InterfaceEntry::new("Empty", "");

        let output = render_to_string(&[entry]);

        assert_eq!(
            output,
            "# Interface: Empty\n\n\
             | Property | Type | Required |\n\
             |----------|------|----------|\n\
             \n\n"
        );
    }

    #[test]
    fn should_render_description_paragraph_when_present() {
        let entry = InterfaceEntry::new("Widget", "Configuration for a widget.");

        let output = render_to_string(&[entry]);

        assert!(output.starts_with(
            "# Interface: Widget\n\nConfiguration for a widget.\n\n| Property"
        ));
    }

    #[test]
    fn should_render_entries_in_sequence_order() {
        let entries = vec![
            InterfaceEntry::new("Second", ""),
            InterfaceEntry::new("First", ""),
        ];

        let output = render_to_string(&entries);

        let second = output.find("# Interface: Second").unwrap();
        let first = output.find("# Interface: First").unwrap();
        assert!(second < first);
    }

    #[test]
    fn should_render_nothing_for_empty_input() {
        assert_eq!(render_to_string(&[]), "");
    }
}

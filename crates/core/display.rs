use std::io::{self, Write};

use bookfind::Volume;

const MISSING_FIELD: &str = "N/A";

/// Writes one formatted block per volume, 1-indexed, in the given order.
///
/// Absent fields are shown as "N/A", an absent or empty author list included.
/// Writes nothing when `volumes` is empty.
pub fn write_volumes<W: Write>(out: &mut W, volumes: &[Volume]) -> io::Result<()> {
    for (index, volume) in volumes.iter().enumerate() {
        let title = volume.title.as_deref().unwrap_or(MISSING_FIELD);
        let authors = volume
            .authors
            .as_deref()
            .filter(|authors| !authors.is_empty())
            .map_or_else(|| MISSING_FIELD.to_owned(), |authors| authors.join(", "));
        let published_date = volume.published_date.as_deref().unwrap_or(MISSING_FIELD);
        let description = volume.description.as_deref().unwrap_or(MISSING_FIELD);

        writeln!(out, "Book {}:", index + 1)?;
        writeln!(out, "  Title: {title}")?;
        writeln!(out, "  Author(s): {authors}")?;
        writeln!(out, "  Published Date: {published_date}")?;
        writeln!(out, "  Description: {description}")?;
        writeln!(out)?;
    }

    Ok(())
}

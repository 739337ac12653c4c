//! Rendering of prospect lists for the terminal.

use serde::Serialize;

use crate::error::Result;
use crate::prospect::Prospect;

/// Marker shown next to contacted prospects in plain output.
const CONTACTED_MARK: &str = "●";

/// Number of id characters shown in tables.
const SHORT_ID_LEN: usize = 8;

/// Render a titled list, one prospect per line.
#[must_use]
pub fn render_plain(title: &str, people: &[&Prospect]) -> String {
    let mut out = format!("{title}\n{}\n", "=".repeat(title.chars().count()));

    if people.is_empty() {
        out.push_str("(no prospects)\n");
        return out;
    }

    for p in people {
        out.push_str(&p.name);
        if p.is_contacted() {
            out.push(' ');
            out.push_str(CONTACTED_MARK);
        }
        out.push('\n');
        out.push_str("  ");
        out.push_str(&p.email_address);
        out.push_str(&format!("  [{}]\n", short_id(p)));
    }
    out
}

/// Render an aligned table with id, name, email and contacted columns.
#[must_use]
pub fn render_table(people: &[&Prospect]) -> String {
    let headers = ["ID", "NAME", "EMAIL", "CONTACTED"];
    let rows: Vec<[String; 4]> = people
        .iter()
        .map(|p| {
            [
                short_id(p),
                p.name.clone(),
                p.email_address.clone(),
                if p.is_contacted() { "yes" } else { "no" }.to_string(),
            ]
        })
        .collect();

    let widths: Vec<usize> = (0..headers.len())
        .map(|i| {
            rows.iter()
                .map(|row| row[i].chars().count())
                .max()
                .unwrap_or(0)
                .max(headers[i].len())
        })
        .collect();

    let format_row = |cells: &[&str]| -> String {
        cells
            .iter()
            .zip(widths.iter())
            .map(|(cell, &width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let header_line = format_row(&headers[..]);
    let divider = "-".repeat(header_line.chars().count());

    let mut out = format!("{header_line}\n{divider}\n");
    for row in &rows {
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        out.push_str(&format_row(cells.as_slice()));
        out.push('\n');
    }
    out
}

/// Render prospects as a JSON array in the persisted record format.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn short_id(p: &Prospect) -> String {
    p.id().to_string().chars().take(SHORT_ID_LEN).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Prospect> {
        vec![
            Prospect::new("Alice", "alice@example.com"),
            Prospect::new("Bob", "bob@example.com").toggled(),
        ]
    }

    #[test]
    fn test_render_plain() {
        let people = sample();
        let refs: Vec<&Prospect> = people.iter().collect();
        let out = render_plain("Everyone", &refs);

        assert!(out.starts_with("Everyone\n========\n"));
        assert!(out.contains("Alice\n  alice@example.com"));
        assert!(out.contains(&format!("Bob {CONTACTED_MARK}\n")));
        assert!(!out.contains(&format!("Alice {CONTACTED_MARK}")));
    }

    #[test]
    fn test_render_plain_empty() {
        let out = render_plain("Contacted people", &[]);
        assert!(out.contains("(no prospects)"));
    }

    #[test]
    fn test_render_table() {
        let people = sample();
        let refs: Vec<&Prospect> = people.iter().collect();
        let out = render_table(&refs);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("ID"));
        assert!(lines[1].chars().all(|c| c == '-'));
        assert!(lines[2].contains("Alice") && lines[2].ends_with("no"));
        assert!(lines[3].contains("Bob") && lines[3].ends_with("yes"));
        // Name column is aligned
        assert_eq!(lines[2].find("Alice"), lines[3].find("Bob"));
    }

    #[test]
    fn test_render_json() {
        let people = sample();
        let refs: Vec<&Prospect> = people.iter().collect();
        let out = render_json(&refs).unwrap();

        let parsed: Vec<Prospect> = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, people);
    }

    #[test]
    fn test_short_id() {
        let p = Prospect::new("Alice", "alice@example.com");
        assert_eq!(short_id(&p).len(), SHORT_ID_LEN);
        assert!(p.id().to_string().starts_with(&short_id(&p)));
    }
}

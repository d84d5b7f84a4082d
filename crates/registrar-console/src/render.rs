//! Plain-text rendering of registry views.

use registrar_core::{Choice, College, Faculty, Program, RecordId, Section, Student};

/// A record that renders as one table row.
pub trait Tabular {
    /// Column headers.
    fn headers() -> &'static [&'static str];

    /// Cell values, one per header.
    fn cells(&self) -> Vec<String>;
}

impl Tabular for College {
    fn headers() -> &'static [&'static str] {
        &["ID", "Code", "Name"]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.id.to_string(), self.code.clone(), self.name.clone()]
    }
}

impl Tabular for Program {
    fn headers() -> &'static [&'static str] {
        &["ID", "College", "Name"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.college_id.to_string(),
            self.name.clone(),
        ]
    }
}

impl Tabular for Section {
    fn headers() -> &'static [&'static str] {
        &["ID", "Section", "Program", "College"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.section_code.clone(),
            self.program_name
                .clone()
                .unwrap_or_else(|| self.program_id.to_string()),
            self.college_name.clone().unwrap_or_default(),
        ]
    }
}

impl Tabular for Faculty {
    fn headers() -> &'static [&'static str] {
        &["ID", "Full Name", "Username", "Email", "Employment"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.full_name.clone(),
            self.username.clone(),
            self.email.clone(),
            self.employment_type.clone(),
        ]
    }
}

impl Tabular for Student {
    fn headers() -> &'static [&'static str] {
        &["ID", "Student No.", "Name", "Email", "Section"]
    }

    fn cells(&self) -> Vec<String> {
        let name = [
            Some(self.first_name.as_str()),
            self.middle_name.as_deref().filter(|m| !m.is_empty()),
            Some(self.last_name.as_str()),
        ]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ");
        vec![
            self.id.to_string(),
            self.student_number.clone(),
            name,
            self.email.clone().unwrap_or_default(),
            self.section_code
                .clone()
                .unwrap_or_else(|| self.section_id.to_string()),
        ]
    }
}

/// Render `rows` as an aligned text table, or a placeholder when empty.
pub fn table<T: Tabular>(rows: &[T]) -> String {
    if rows.is_empty() {
        return "(no records)\n".to_string();
    }
    let headers = T::headers();
    let cells: Vec<Vec<String>> = rows.iter().map(Tabular::cells).collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, headers.iter().map(|h| h.to_string()), &widths);
    push_row(&mut out, widths.iter().map(|w| "-".repeat(*w)), &widths);
    for row in cells {
        push_row(&mut out, row.into_iter(), &widths);
    }
    out
}

fn push_row(out: &mut String, cells: impl Iterator<Item = String>, widths: &[usize]) {
    let line = cells
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}

/// Render a selector level, marking the selected option.
pub fn choices(label: &str, options: &[Choice], selected: Option<RecordId>) -> String {
    let mut out = format!("{label}:\n");
    if options.is_empty() {
        out.push_str("  (none)\n");
    }
    for choice in options {
        let marker = if Some(choice.id) == selected { '*' } else { ' ' };
        out.push_str(&format!("  {marker} {:>4}  {}\n", choice.id, choice.label));
    }
    out
}

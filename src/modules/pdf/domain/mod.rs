use chrono::{DateTime, NaiveDate, Utc};

pub fn contact_line(email: &str, phone: &str) -> String {
    if phone.is_empty() {
        format!("Email: {email}")
    } else {
        format!("Email: {email} | Phone: {phone}")
    }
}

/// `Jan 2024 - Mar 2025`, or `Jan 2024 - Present` while ongoing.
pub fn project_date_range(start: NaiveDate, end: Option<NaiveDate>) -> String {
    let end = end
        .map(|d| d.format("%b %Y").to_string())
        .unwrap_or_else(|| "Present".to_string());
    format!("{} - {}", start.format("%b %Y"), end)
}

pub fn footer_line(updated_at: DateTime<Utc>, full_name: &str) -> String {
    format!(
        "Generated on {} | {} Professional CV",
        updated_at.format("%B %d, %Y"),
        full_name
    )
}

pub fn pdf_filename(full_name: &str) -> String {
    format!("{}_CV.pdf", full_name.replace(' ', "_"))
}

/// Greedy word wrap on character counts. Explicit newlines start a new
/// line; words longer than `max_chars` are split.
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut current = String::new();
        let mut current_len = 0;

        for word in paragraph.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();

            while word.len() > max_chars {
                if current_len > 0 {
                    lines.push(std::mem::take(&mut current));
                    current_len = 0;
                }
                let rest = word.split_off(max_chars);
                lines.push(word.into_iter().collect());
                word = rest;
            }

            let needed = if current_len == 0 { word.len() } else { current_len + 1 + word.len() };
            if needed > max_chars {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            if current_len > 0 {
                current.push(' ');
                current_len += 1;
            }
            current.extend(word.iter());
            current_len += word.len();
        }

        if current_len > 0 || paragraph.trim().is_empty() {
            lines.push(current);
        }
    }

    lines
}

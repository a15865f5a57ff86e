use once_cell::sync::Lazy;
use regex::Regex;
use std::cmp::Reverse;

/// Technology names that must survive translation verbatim.
pub const TECHNICAL_TERMS: [&str; 80] = [
    "Python", "Django", "JavaScript", "React", "Vue", "Angular", "Node.js",
    "PostgreSQL", "MySQL", "MongoDB", "Redis", "Docker", "Kubernetes",
    "AWS", "Azure", "GCP", "Git", "GitHub", "GitLab", "CI/CD", "API",
    "REST", "GraphQL", "HTML", "CSS", "SCSS", "TypeScript", "Java",
    "C++", "C#", "PHP", "Ruby", "Go", "Rust", "Swift", "Kotlin",
    "Flask", "FastAPI", "Express", "Spring", "Laravel", "Symfony",
    "TensorFlow", "PyTorch", "scikit-learn", "NumPy", "Pandas",
    "Jupyter", "Anaconda", "Linux", "Ubuntu", "CentOS", "Windows",
    "macOS", "iOS", "Android", "Unity", "Unreal", "Blender",
    "Photoshop", "Illustrator", "Figma", "Sketch", "Adobe",
    "Webpack", "Babel", "npm", "yarn", "pip", "composer",
    "Terraform", "Ansible", "Jenkins", "Nginx", "Apache",
    "Elasticsearch", "Kafka", "RabbitMQ", "Celery", "Gunicorn",
];

// Longest first so "JavaScript" wins over "Java".
static PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    let mut terms = TECHNICAL_TERMS.to_vec();
    terms.sort_by_key(|term| Reverse(term.len()));
    terms
        .into_iter()
        .map(|term| {
            Regex::new(&format!("(?i){}", regex::escape(term)))
                .expect("escaped literal is a valid pattern")
        })
        .collect()
});

/// Text with technical terms swapped for `TECH_TERM_{n}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtectedText {
    pub text: String,
    placeholders: Vec<(String, String)>,
}

impl ProtectedText {
    pub fn placeholder_count(&self) -> usize {
        self.placeholders.len()
    }

    /// Put the original spellings back. Highest index first, so
    /// `TECH_TERM_1` never eats the prefix of `TECH_TERM_10`.
    pub fn restore(&self, translated: &str) -> String {
        self.placeholders
            .iter()
            .rev()
            .fold(translated.to_string(), |acc, (placeholder, original)| {
                acc.replace(placeholder, original)
            })
    }
}

pub fn protect_terms(text: &str) -> ProtectedText {
    let mut protected = text.to_string();
    let mut placeholders: Vec<(String, String)> = Vec::new();

    for pattern in PATTERNS.iter() {
        let spellings: Vec<String> = pattern
            .find_iter(&protected)
            .filter(|m| is_bounded(&protected, m.start(), m.end()))
            .map(|m| m.as_str().to_string())
            .collect();

        for spelling in spellings {
            if placeholders.iter().any(|(_, seen)| *seen == spelling) {
                continue;
            }
            let placeholder = format!("TECH_TERM_{}", placeholders.len());
            protected = replace_bounded(&protected, &spelling, &placeholder);
            placeholders.push((placeholder, spelling));
        }
    }

    ProtectedText {
        text: protected,
        placeholders,
    }
}

/// Skill names that are themselves technologies are never sent for translation.
pub fn is_technical_term(name: &str) -> bool {
    let name = name.trim();
    TECHNICAL_TERMS
        .iter()
        .any(|term| term.eq_ignore_ascii_case(name))
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_bounded(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
}

fn replace_bounded(text: &str, needle: &str, replacement: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for (start, _) in text.match_indices(needle) {
        let end = start + needle.len();
        if start < last || !is_bounded(text, start, end) {
            continue;
        }
        out.push_str(&text[last..start]);
        out.push_str(replacement);
        last = end;
    }
    out.push_str(&text[last..]);
    out
}

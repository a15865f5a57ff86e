use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Rgb,
};

use crate::modules::cv::application::ports::outgoing::CvDetailView;
use crate::modules::pdf::application::ports::outgoing::{CvPdfRenderer, PdfError};
use crate::modules::pdf::domain::{contact_line, footer_line, project_date_range, wrap_text};

// A4 in millimetres; one-inch side margins.
const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN_X: f32 = 25.4;
const MARGIN_TOP: f32 = 25.4;
const MARGIN_BOTTOM: f32 = 15.0;
const CONTENT_WIDTH: f32 = PAGE_WIDTH - 2.0 * MARGIN_X;
const SECOND_COLUMN_X: f32 = MARGIN_X + CONTENT_WIDTH / 2.0;
const CONTACT_URL_X: f32 = MARGIN_X + 50.8;

const PT_TO_MM: f32 = 0.352_778;
/// Average Helvetica glyph width as a fraction of the font size.
const AVG_GLYPH_EM: f32 = 0.5;

const TITLE_SIZE: f32 = 24.0;
const HEADING_SIZE: f32 = 16.0;
const BODY_SIZE: f32 = 11.0;
const SMALL_SIZE: f32 = 10.0;

const ACCENT: (f32, f32, f32) = (0.0, 0.482, 1.0);
const MUTED: (f32, f32, f32) = (0.4, 0.4, 0.4);
const ONGOING: (f32, f32, f32) = (0.157, 0.655, 0.271);
const BLACK: (f32, f32, f32) = (0.0, 0.0, 0.0);

#[derive(Clone, Copy)]
enum Weight {
    Regular,
    Bold,
}

#[derive(Default, Clone, Copy)]
pub struct PrintPdfRenderer;

impl CvPdfRenderer for PrintPdfRenderer {
    fn render(&self, cv: &CvDetailView) -> Result<Vec<u8>, PdfError> {
        render_cv_pdf(cv)
    }
}

/// A4 CV with built-in Helvetica fonts; pages are added as content flows.
pub fn render_cv_pdf(cv: &CvDetailView) -> Result<Vec<u8>, PdfError> {
    layout(cv)?.finish()
}

fn layout(cv: &CvDetailView) -> Result<PdfWriter, PdfError> {
    let mut pdf = PdfWriter::new(&format!("{} CV", cv.full_name))?;

    pdf.centered(&cv.full_name, TITLE_SIZE, Weight::Bold, ACCENT);
    pdf.gap(4.0);
    pdf.centered(&contact_line(&cv.email, &cv.phone), SMALL_SIZE, Weight::Regular, MUTED);
    pdf.gap(7.0);

    if !cv.bio.trim().is_empty() {
        pdf.heading("Professional Summary");
        pdf.paragraph(&cv.bio, BODY_SIZE, Weight::Regular, BLACK);
        pdf.gap(5.0);
    }

    if !cv.skills.is_empty() {
        pdf.heading("Core Skills");
        for pair in cv.skills.chunks(2) {
            let names: Vec<&str> = pair.iter().map(|s| s.name.as_str()).collect();
            let levels: Vec<&str> = pair.iter().map(|s| s.proficiency.display_name()).collect();
            pdf.columns(&names, BODY_SIZE, Weight::Bold, BLACK);
            pdf.columns(&levels, SMALL_SIZE, Weight::Regular, MUTED);
            pdf.gap(3.0);
        }
        pdf.gap(3.0);
    }

    if !cv.projects.is_empty() {
        pdf.heading("Professional Projects");
        for project in &cv.projects {
            if project.is_ongoing {
                pdf.text_pair(
                    &project.title,
                    "(Ongoing)",
                    BODY_SIZE,
                    ONGOING,
                );
            } else {
                pdf.paragraph(&project.title, BODY_SIZE, Weight::Bold, BLACK);
            }
            pdf.line(
                &project_date_range(project.start_date, project.end_date),
                BODY_SIZE,
                Weight::Regular,
                MUTED,
            );
            if !project.description.trim().is_empty() {
                pdf.paragraph(&project.description, BODY_SIZE, Weight::Regular, BLACK);
            }
            if !project.technologies_list.is_empty() {
                pdf.paragraph(
                    &format!("Technologies: {}", project.technologies_list.join(", ")),
                    BODY_SIZE,
                    Weight::Regular,
                    BLACK,
                );
            }
            if let Some(ref url) = project.url {
                pdf.paragraph(&format!("URL: {url}"), BODY_SIZE, Weight::Regular, ACCENT);
            }
            pdf.gap(4.0);
        }
    }

    if !cv.contacts.is_empty() {
        pdf.heading("Contact & Social Media");
        for contact in &cv.contacts {
            pdf.labelled(contact.contact_type.display_name(), &contact.url, SMALL_SIZE);
        }
    }

    pdf.gap(10.0);
    pdf.centered(
        &footer_line(cv.updated_at, &cv.full_name),
        SMALL_SIZE,
        Weight::Regular,
        MUTED,
    );

    Ok(pdf)
}

fn rgb((r, g, b): (f32, f32, f32)) -> Color {
    Color::Rgb(Rgb::new(r, g, b, None))
}

fn line_height(size: f32) -> f32 {
    size * PT_TO_MM * 1.35
}

fn text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * PT_TO_MM * AVG_GLYPH_EM
}

fn chars_per_line(width: f32, size: f32) -> usize {
    (width / (size * PT_TO_MM * AVG_GLYPH_EM)).floor() as usize
}

/// Cursor over the current page; `y` is measured from the bottom edge.
struct PdfWriter {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    y: f32,
    page_count: usize,
}

impl PdfWriter {
    fn new(title: &str) -> Result<Self, PdfError> {
        let (doc, page, layer) =
            PdfDocument::new(title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| PdfError::Font(e.to_string()))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| PdfError::Font(e.to_string()))?;
        let layer = doc.get_page(page).get_layer(layer);

        Ok(Self {
            doc,
            layer,
            regular,
            bold,
            y: PAGE_HEIGHT - MARGIN_TOP,
            page_count: 1,
        })
    }

    fn finish(self) -> Result<Vec<u8>, PdfError> {
        self.doc
            .save_to_bytes()
            .map_err(|e| PdfError::Write(e.to_string()))
    }

    fn font(&self, weight: Weight) -> &IndirectFontRef {
        match weight {
            Weight::Regular => &self.regular,
            Weight::Bold => &self.bold,
        }
    }

    fn ensure_space(&mut self, height: f32) {
        if self.y - height >= MARGIN_BOTTOM {
            return;
        }
        let (page, layer) = self
            .doc
            .add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.y = PAGE_HEIGHT - MARGIN_TOP;
        self.page_count += 1;
    }

    fn gap(&mut self, mm: f32) {
        self.y -= mm;
    }

    /// Advance one line and return the baseline.
    fn next_baseline(&mut self, size: f32) -> f32 {
        let height = line_height(size);
        self.ensure_space(height);
        self.y -= height;
        self.y
    }

    fn put(&self, text: &str, size: f32, weight: Weight, color: (f32, f32, f32), x: f32, y: f32) {
        self.layer.set_fill_color(rgb(color));
        self.layer
            .use_text(text, size, Mm(x), Mm(y), self.font(weight));
    }

    fn line(&mut self, text: &str, size: f32, weight: Weight, color: (f32, f32, f32)) {
        let y = self.next_baseline(size);
        self.put(text, size, weight, color, MARGIN_X, y);
    }

    fn paragraph(&mut self, text: &str, size: f32, weight: Weight, color: (f32, f32, f32)) {
        for line in wrap_text(text, chars_per_line(CONTENT_WIDTH, size)) {
            self.line(&line, size, weight, color);
        }
    }

    fn centered(&mut self, text: &str, size: f32, weight: Weight, color: (f32, f32, f32)) {
        for line in wrap_text(text, chars_per_line(CONTENT_WIDTH, size)) {
            let x = ((PAGE_WIDTH - text_width(&line, size)) / 2.0).max(MARGIN_X);
            let y = self.next_baseline(size);
            self.put(&line, size, weight, color, x, y);
        }
    }

    fn heading(&mut self, text: &str) {
        self.gap(4.0);
        // Keep a heading together with at least two body lines.
        self.ensure_space(line_height(HEADING_SIZE) + 2.0 * line_height(BODY_SIZE));
        self.line(text, HEADING_SIZE, Weight::Bold, ACCENT);
        self.gap(2.0);
    }

    /// Up to two cells on one baseline.
    fn columns(&mut self, cells: &[&str], size: f32, weight: Weight, color: (f32, f32, f32)) {
        let y = self.next_baseline(size);
        let max_chars = chars_per_line(CONTENT_WIDTH / 2.0 - 4.0, size);
        for (cell, x) in cells.iter().zip([MARGIN_X, SECOND_COLUMN_X]) {
            let clipped: String = cell.chars().take(max_chars).collect();
            self.put(&clipped, size, weight, color, x, y);
        }
    }

    /// Bold title followed by a coloured marker on the same line.
    fn text_pair(&mut self, title: &str, marker: &str, size: f32, marker_color: (f32, f32, f32)) {
        let max_chars = chars_per_line(CONTENT_WIDTH, size).saturating_sub(marker.len() + 1);
        let mut lines = wrap_text(title, max_chars);
        let last = lines.pop().unwrap_or_default();

        for line in lines {
            self.line(&line, size, Weight::Bold, BLACK);
        }
        let y = self.next_baseline(size);
        self.put(&last, size, Weight::Bold, BLACK, MARGIN_X, y);
        let marker_x = MARGIN_X + text_width(&last, size) + size * PT_TO_MM;
        self.put(marker, size, Weight::Regular, marker_color, marker_x, y);
    }

    /// Bold label column with a wrapped value column.
    fn labelled(&mut self, label: &str, value: &str, size: f32) {
        let value_width = PAGE_WIDTH - MARGIN_X - CONTACT_URL_X;
        let lines = wrap_text(value, chars_per_line(value_width, size));

        let y = self.next_baseline(size);
        self.put(label, size, Weight::Bold, BLACK, MARGIN_X, y);

        let mut lines = lines.into_iter();
        if let Some(first) = lines.next() {
            self.put(&first, size, Weight::Regular, ACCENT, CONTACT_URL_X, y);
        }
        for rest in lines {
            let y = self.next_baseline(size);
            self.put(&rest, size, Weight::Regular, ACCENT, CONTACT_URL_X, y);
        }
        self.gap(1.5);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::contact::domain::ContactType;
    use crate::modules::cv::application::ports::outgoing::{ContactItem, ProjectItem, SkillItem};
    use crate::modules::cv::application::service::test_doubles::sample_cv_detail;
    use crate::modules::skill::domain::Proficiency;
    use chrono::NaiveDate;

    fn full_cv() -> CvDetailView {
        let mut cv = sample_cv_detail(1);
        cv.skills = vec![
            SkillItem {
                id: 1,
                name: "Rust".to_string(),
                proficiency: Proficiency::Expert,
            },
            SkillItem {
                id: 2,
                name: "SQL".to_string(),
                proficiency: Proficiency::Advanced,
            },
            SkillItem {
                id: 3,
                name: "Go".to_string(),
                proficiency: Proficiency::Beginner,
            },
        ];
        cv.projects = vec![ProjectItem {
            id: 1,
            title: "Analytical Engine".to_string(),
            description: "Designed the first published algorithm.".to_string(),
            technologies: "Punch cards, Brass".to_string(),
            technologies_list: vec!["Punch cards".to_string(), "Brass".to_string()],
            url: Some("https://example.com/engine".to_string()),
            start_date: NaiveDate::from_ymd_opt(1842, 1, 1).unwrap(),
            end_date: None,
            is_ongoing: true,
        }];
        cv.contacts = vec![ContactItem {
            id: 1,
            contact_type: ContactType::Github,
            value: "ada".to_string(),
            url: "https://github.com/ada".to_string(),
        }];
        cv
    }

    #[test]
    fn renders_a_pdf_document() {
        let bytes = render_cv_pdf(&full_cv()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn short_cv_fits_on_one_page() {
        let writer = layout(&full_cv()).unwrap();
        assert_eq!(writer.page_count, 1);
    }

    #[test]
    fn long_bio_breaks_onto_new_pages() {
        let mut cv = sample_cv_detail(1);
        cv.bio = "Worked on difference engines and notes. ".repeat(400);

        let writer = layout(&cv).unwrap();
        assert!(writer.page_count > 1);
        assert!(writer.y >= MARGIN_BOTTOM);
    }

    #[test]
    fn empty_cv_still_renders() {
        let mut cv = sample_cv_detail(1);
        cv.bio = String::new();
        cv.phone = String::new();

        assert!(render_cv_pdf(&cv).unwrap().starts_with(b"%PDF"));
    }
}

//! PDF export: fixed-layout, single-to-multi-page rendering.
//!
//! The export runs in two steps. `compose_lines` turns the resume into a
//! flat sequence of styled lines (pure, easy to test); `render_pdf` walks
//! that sequence with a vertical cursor, breaking to a new page whenever
//! the next line would land past the printable height. Line advance is a
//! fixed constant for every line, headings included.

use chrono::NaiveDate;
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument};
use tracing::debug;

use crate::errors::AppError;
use crate::export::text_metrics::HELVETICA;
use crate::export::underscore_whitespace;
use crate::models::resume::Resume;

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 20.0;
const BOTTOM_MARGIN_MM: f32 = 20.0;
const LINE_HEIGHT_MM: f32 = 7.0;
const CONTENT_WIDTH_MM: f32 = PAGE_WIDTH_MM - 2.0 * MARGIN_MM;

const NAME_SIZE_PT: f32 = 20.0;
const HEADING_SIZE_PT: f32 = 14.0;
const BODY_SIZE_PT: f32 = 11.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    /// Full name at the top: large, bold.
    Name,
    /// Section headings ("WORK EXPERIENCE" …): bold.
    SectionHeading,
    /// Per-entry title lines ("{position} at {company}"): bold, body size.
    EntryTitle,
    Body,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfLine {
    pub text: String,
    pub style: LineStyle,
}

fn line(text: impl Into<String>, style: LineStyle) -> PdfLine {
    PdfLine {
        text: text.into(),
        style,
    }
}

/// Flattens the resume into the export line sequence: name, present-only
/// contact lines, then each non-empty section in fixed order.
pub fn compose_lines(resume: &Resume) -> Vec<PdfLine> {
    let mut lines = Vec::new();
    let info = &resume.personal_info;

    lines.push(line(info.full_name.as_str(), LineStyle::Name));
    for contact in [&info.email, &info.phone, &info.location] {
        if !contact.is_empty() {
            lines.push(line(contact.as_str(), LineStyle::Body));
        }
    }

    if !info.summary.trim().is_empty() {
        lines.push(line("PROFESSIONAL SUMMARY", LineStyle::SectionHeading));
        for wrapped in HELVETICA.wrap(&info.summary, CONTENT_WIDTH_MM, BODY_SIZE_PT) {
            lines.push(line(wrapped, LineStyle::Body));
        }
    }

    if !resume.experience.is_empty() {
        lines.push(line("WORK EXPERIENCE", LineStyle::SectionHeading));
        for exp in &resume.experience {
            lines.push(line(
                format!("{} at {}", exp.position, exp.company),
                LineStyle::EntryTitle,
            ));
            let end = if exp.end_date.is_empty() {
                "Present"
            } else {
                exp.end_date.as_str()
            };
            lines.push(line(format!("{} - {}", exp.start_date, end), LineStyle::Body));
            for wrapped in HELVETICA.wrap(&exp.description, CONTENT_WIDTH_MM, BODY_SIZE_PT) {
                lines.push(line(wrapped, LineStyle::Body));
            }
        }
    }

    if !resume.education.is_empty() {
        lines.push(line("EDUCATION", LineStyle::SectionHeading));
        for edu in &resume.education {
            lines.push(line(
                format!("{} in {}", edu.degree, edu.field),
                LineStyle::EntryTitle,
            ));
            lines.push(line(
                format!("{} ({})", edu.institution, edu.end_date),
                LineStyle::Body,
            ));
        }
    }

    if !resume.skills.is_empty() {
        lines.push(line("SKILLS", LineStyle::SectionHeading));
        let joined = resume
            .skills
            .iter()
            .map(|s| s.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        for wrapped in HELVETICA.wrap(&joined, CONTENT_WIDTH_MM, BODY_SIZE_PT) {
            lines.push(line(wrapped, LineStyle::Body));
        }
    }

    lines
}

/// How many pages the line sequence occupies under the fixed cursor rule.
pub fn page_count(line_count: usize) -> usize {
    let per_page = ((PAGE_HEIGHT_MM - MARGIN_MM - BOTTOM_MARGIN_MM) / LINE_HEIGHT_MM) as usize + 1;
    if line_count == 0 {
        1
    } else {
        line_count.div_ceil(per_page)
    }
}

/// Renders the resume to PDF bytes.
pub fn render_pdf(resume: &Resume) -> Result<Vec<u8>, AppError> {
    let lines = compose_lines(resume);
    debug!(
        "Rendering {} line(s) across {} page(s)",
        lines.len(),
        page_count(lines.len())
    );

    let (doc, page, layer) = PdfDocument::new(
        "Resume",
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Layer 1",
    );
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| AppError::Render(e.to_string()))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| AppError::Render(e.to_string()))?;

    let mut current_layer = doc.get_page(page).get_layer(layer);
    // cursor is measured from the top edge; printpdf's origin is bottom-left
    let mut y_from_top = MARGIN_MM;

    for pdf_line in &lines {
        if y_from_top > PAGE_HEIGHT_MM - BOTTOM_MARGIN_MM {
            let (next_page, next_layer) =
                doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
            current_layer = doc.get_page(next_page).get_layer(next_layer);
            y_from_top = MARGIN_MM;
        }

        let (font, size): (&IndirectFontRef, f32) = match pdf_line.style {
            LineStyle::Name => (&bold, NAME_SIZE_PT),
            LineStyle::SectionHeading => (&bold, HEADING_SIZE_PT),
            LineStyle::EntryTitle => (&bold, BODY_SIZE_PT),
            LineStyle::Body => (&regular, BODY_SIZE_PT),
        };

        current_layer.use_text(
            pdf_line.text.clone(),
            size,
            Mm(MARGIN_MM),
            Mm(PAGE_HEIGHT_MM - y_from_top),
            font,
        );
        y_from_top += LINE_HEIGHT_MM;
    }

    doc.save_to_bytes()
        .map_err(|e| AppError::Render(e.to_string()))
}

/// `{fullName}_Resume_{YYYY-MM-DD}.pdf`, whitespace runs replaced by
/// underscores.
pub fn pdf_filename(full_name: &str, date: NaiveDate) -> String {
    format!(
        "{}_Resume_{}.pdf",
        underscore_whitespace(full_name),
        date.format("%Y-%m-%d")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{Experience, PersonalInfo};
    use crate::models::sample::sample_resume;

    fn texts(lines: &[PdfLine]) -> Vec<&str> {
        lines.iter().map(|l| l.text.as_str()).collect()
    }

    #[test]
    fn test_sections_appear_in_fixed_order() {
        let lines = compose_lines(&sample_resume());
        let all = texts(&lines);
        let pos = |needle: &str| all.iter().position(|t| *t == needle).unwrap();
        assert_eq!(pos("John Smith"), 0);
        assert!(pos("PROFESSIONAL SUMMARY") < pos("WORK EXPERIENCE"));
        assert!(pos("WORK EXPERIENCE") < pos("EDUCATION"));
        assert!(pos("EDUCATION") < pos("SKILLS"));
    }

    #[test]
    fn test_empty_contact_lines_are_omitted() {
        let mut resume = sample_resume();
        resume.personal_info.phone = String::new();
        let lines = compose_lines(&resume);
        assert!(!texts(&lines).contains(&"+1 (555) 123-4567"));
        assert!(texts(&lines).contains(&"john.smith@email.com"));
    }

    #[test]
    fn test_empty_sections_emit_no_heading() {
        let resume = Resume {
            personal_info: PersonalInfo {
                full_name: "Jane Doe".to_string(),
                ..PersonalInfo::default()
            },
            ..Resume::default()
        };
        let lines = compose_lines(&resume);
        assert_eq!(lines.len(), 1, "only the name line: {lines:?}");
        assert_eq!(lines[0].style, LineStyle::Name);
    }

    #[test]
    fn test_empty_end_date_renders_as_present() {
        let resume = Resume {
            experience: vec![Experience {
                id: "exp-t".to_string(),
                company: "Acme".to_string(),
                position: "Engineer".to_string(),
                start_date: "2020-01".to_string(),
                end_date: String::new(),
                description: String::new(),
            }],
            ..Resume::default()
        };
        let lines = compose_lines(&resume);
        assert!(texts(&lines).contains(&"2020-01 - Present"));
    }

    #[test]
    fn test_skills_join_names_without_levels() {
        let lines = compose_lines(&sample_resume());
        let skills_line = lines.last().unwrap();
        assert_eq!(
            skills_line.text,
            "JavaScript, React, Node.js, Python, SQL"
        );
        assert!(!skills_line.text.contains("Expert"));
    }

    #[test]
    fn test_education_lines_use_degree_and_institution_format() {
        let lines = compose_lines(&sample_resume());
        let all = texts(&lines);
        assert!(all.contains(&"Bachelor of Science in Computer Science"));
        assert!(all.contains(&"University of Technology (2019-05)"));
    }

    #[test]
    fn test_page_count_grows_with_line_count() {
        assert_eq!(page_count(0), 1);
        assert_eq!(page_count(10), 1);
        let per_page = ((PAGE_HEIGHT_MM - MARGIN_MM - BOTTOM_MARGIN_MM) / LINE_HEIGHT_MM) as usize + 1;
        assert_eq!(page_count(per_page), 1);
        assert_eq!(page_count(per_page + 1), 2);
    }

    #[test]
    fn test_render_pdf_produces_a_pdf_header() {
        let bytes = render_pdf(&sample_resume()).unwrap();
        assert!(bytes.starts_with(b"%PDF"), "missing PDF magic");
    }

    #[test]
    fn test_render_pdf_handles_a_blank_resume() {
        let bytes = render_pdf(&Resume::blank()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_pdf_filename_shape() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        assert_eq!(
            pdf_filename("John Smith", date),
            "John_Smith_Resume_2025-06-01.pdf"
        );
    }
}

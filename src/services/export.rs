//! Print/export pipeline: validation and standalone document rendering.

use crate::domain::{
    GroupKind, GroupPreview, PresentationState, Resume, ResumePreview, SimpleFieldKind, Template,
};
use crate::error::{ExportError, ExportResult, ValidationError};
use regex::Regex;
use std::fmt::Write as _;
use std::fs::{self, OpenOptions};
use std::io::{self, Write as _};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

/// Check the preconditions of an export: a name, and an email shaped like
/// `localpart@domain.tld`.
pub fn validate(resume: &Resume) -> Result<(), ValidationError> {
    if resume.value(SimpleFieldKind::Name).trim().is_empty() {
        return Err(ValidationError::MissingName);
    }

    let email = resume.value(SimpleFieldKind::Email).trim();
    if email.is_empty() {
        return Err(ValidationError::MissingEmail);
    }
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(())
}

/// Permissive email check
pub fn is_valid_email(email: &str) -> bool {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"))
        .is_match(email)
}

/// A rendered, self-contained document ready for the print flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintDocument {
    pub html: String,
    pub template: Template,
}

impl PrintDocument {
    /// Combine a preview snapshot with presentation-derived styling
    pub fn render(preview: &ResumePreview, presentation: &PresentationState) -> Self {
        let mut html = String::with_capacity(4096);
        html.push_str("<!DOCTYPE html>\n");
        let _ = writeln!(
            html,
            "<html lang=\"en\" data-theme=\"{}\" data-template=\"{}\">",
            presentation.theme.as_str(),
            presentation.template.as_str()
        );
        html.push_str("<head>\n<meta charset=\"utf-8\">\n");
        let _ = writeln!(html, "<title>{} - Resume</title>", escape_html(&preview.name));
        html.push_str(&stylesheet(presentation));
        html.push_str("</head>\n<body>\n");
        html.push_str(&preview_markup(preview, presentation.template));
        html.push_str("</body>\n</html>\n");

        Self {
            html,
            template: presentation.template,
        }
    }

    /// Write the document into a fresh file under `dir` and return its path.
    ///
    /// Never reuses a name: a later export in the same second gets a
    /// numeric suffix instead of replacing the earlier document.
    pub fn write_to(&self, dir: &Path) -> ExportResult<PathBuf> {
        fs::create_dir_all(dir).map_err(|source| ExportError::Write {
            path: dir.to_path_buf(),
            source,
        })?;

        let stem = document_stem();
        let mut attempt = 0u32;
        loop {
            let path = dir.join(document_file_name(&stem, attempt));
            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(mut file) => {
                    if let Err(source) = file.write_all(self.html.as_bytes()) {
                        return Err(ExportError::Write { path, source });
                    }
                    tracing::info!("Wrote print document {:?}", path);
                    return Ok(path);
                }
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => attempt += 1,
                Err(source) => return Err(ExportError::Write { path, source }),
            }
        }
    }
}

fn document_stem() -> String {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    format!("resume-{}", secs)
}

fn document_file_name(stem: &str, attempt: u32) -> String {
    match attempt {
        0 => format!("{}.html", stem),
        n => format!("{}-{}.html", stem, n),
    }
}

/// Element id of a group's preview container
fn preview_id(kind: GroupKind) -> &'static str {
    match kind {
        GroupKind::Experience => "experiencePreview",
        GroupKind::Education => "educationPreview",
        GroupKind::Project => "projectPreview",
        GroupKind::Certification => "certificationPreview",
        GroupKind::Language => "languagePreview",
    }
}

fn preview_markup(preview: &ResumePreview, template: Template) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "<div id=\"resume-preview\" class=\"template-{}\">",
        template.as_str()
    );
    let _ = writeln!(out, "<h1 id=\"namePreview\">{}</h1>", escape_html(&preview.name));
    let _ = writeln!(
        out,
        "<p class=\"contact\"><span id=\"emailPreview\">{}</span> | <span id=\"phonePreview\">{}</span></p>",
        escape_html(&preview.email),
        escape_html(&preview.phone)
    );

    let _ = writeln!(
        out,
        "<section>\n<h3>Summary</h3>\n<p id=\"summaryPreview\">{}</p>\n</section>",
        escape_html(&preview.summary)
    );

    out.push_str("<section>\n<h3>Skills</h3>\n<ul id=\"skillsPreview\">\n");
    for skill in &preview.skills {
        let _ = writeln!(out, "<li>{}</li>", escape_html(skill));
    }
    out.push_str("</ul>\n</section>\n");

    for section in &preview.sections {
        let _ = writeln!(out, "<section>\n<h3>{}</h3>", section.title);
        let _ = writeln!(out, "<div id=\"{}\">", preview_id(section.kind));
        match &section.body {
            GroupPreview::Placeholder(text) => {
                let _ = writeln!(out, "<p class=\"placeholder\">{}</p>", escape_html(text));
            }
            GroupPreview::Paragraphs(paragraphs) => {
                for p in paragraphs {
                    let _ = writeln!(out, "<p>{}</p>", escape_html(p));
                }
            }
        }
        out.push_str("</div>\n</section>\n");
    }

    out.push_str("</div>\n");
    out
}

/// Per-template heading borders and section padding
struct TemplateRules {
    heading_border: &'static str,
    section_heading_border: &'static str,
    section_padding: &'static str,
}

fn template_rules(template: Template) -> TemplateRules {
    match template {
        Template::Classic => TemplateRules {
            heading_border: "border-bottom: 2px solid var(--accent-color);",
            section_heading_border: "border-bottom: 1px solid var(--rule-color);",
            section_padding: "0",
        },
        Template::Modern => TemplateRules {
            heading_border: "border-left: 6px solid var(--accent-color); padding-left: 12px;",
            section_heading_border: "border-left: 4px solid var(--accent-color); padding-left: 8px;",
            section_padding: "8px 0",
        },
        Template::Minimal => TemplateRules {
            heading_border: "border: none;",
            section_heading_border: "border: none; text-transform: uppercase; letter-spacing: 0.08em;",
            section_padding: "4px 0",
        },
        Template::Creative => TemplateRules {
            heading_border: "border-bottom: 4px double var(--accent-color);",
            section_heading_border: "border-bottom: 2px dashed var(--accent-color);",
            section_padding: "12px 16px",
        },
    }
}

fn stylesheet(presentation: &PresentationState) -> String {
    let (background, foreground, muted, rule) = if presentation.theme.is_dark() {
        ("#1e1e1e", "#e0e0e0", "#777", "#444")
    } else {
        ("#ffffff", "#333", "#999", "#eee")
    };
    let rules = template_rules(presentation.template);

    format!(
        r#"<style>
  :root {{
    --accent-color: {accent};
    --font-family: {font};
    --rule-color: {rule};
  }}
  body {{
    font-family: var(--font-family);
    line-height: 1.6;
    padding: 40px;
    max-width: 800px;
    margin: 0 auto;
    background: {background};
    color: {foreground};
  }}
  h1 {{
    color: var(--accent-color);
    {heading_border}
    padding-bottom: 10px;
    margin-bottom: 10px;
  }}
  h3 {{
    color: var(--accent-color);
    margin-top: 25px;
    margin-bottom: 10px;
    padding-bottom: 5px;
    {section_heading_border}
  }}
  section {{ padding: {section_padding}; }}
  ul {{ padding-left: 20px; }}
  p {{ margin: 5px 0; }}
  .placeholder {{ color: {muted}; font-style: italic; }}
  @media print {{
    body {{ padding: 0; font-size: 14px; }}
    button {{ display: none; }}
  }}
  @page {{
    size: A4;
    margin: 1cm;
  }}
</style>
"#,
        accent = escape_css(&presentation.accent_color),
        font = escape_css(&presentation.font_family),
        rule = rule,
        background = background,
        foreground = foreground,
        muted = muted,
        heading_border = rules.heading_border,
        section_heading_border = rules.section_heading_border,
        section_padding = rules.section_padding,
    )
}

/// Escape text for element content and attribute values
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Keep user-supplied values from closing the declaration or the style block
fn escape_css(value: &str) -> String {
    value
        .chars()
        .filter(|c| !matches!(c, ';' | '{' | '}' | '<' | '>'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Theme;
    use tempfile::TempDir;

    fn resume(name: &str, email: &str) -> Resume {
        let mut resume = Resume::new();
        resume.field_mut(SimpleFieldKind::Name).value = name.to_string();
        resume.field_mut(SimpleFieldKind::Email).value = email.to_string();
        resume
    }

    #[test]
    fn test_validate_order_of_checks() {
        assert_eq!(validate(&resume("  ", "")), Err(ValidationError::MissingName));
        assert_eq!(validate(&resume("Jane Doe", " ")), Err(ValidationError::MissingEmail));
        assert_eq!(
            validate(&resume("Jane Doe", "bad-email")),
            Err(ValidationError::InvalidEmail)
        );
        assert_eq!(validate(&resume("Jane Doe", " jane@example.com ")), Ok(()));
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last+tag@sub.example.org"));
        assert!(!is_valid_email("jane@example"));
        assert!(!is_valid_email("jane doe@example.com"));
        assert!(!is_valid_email("jane@@example.com"));
        assert!(!is_valid_email("@example.com"));
    }

    #[test]
    fn test_document_carries_content_and_presentation() {
        let mut r = resume("Jane <Doe>", "jane@example.com");
        r.field_mut(SimpleFieldKind::Skills).value = "Rust, Go".to_string();
        r.group_mut(GroupKind::Experience).push("Engineer, Acme".to_string());
        let preview = ResumePreview::render(&r);
        let presentation = PresentationState {
            theme: Theme::Dark,
            template: Template::Modern,
            accent_color: "#ff0066".to_string(),
            font_family: "Georgia, serif".to_string(),
        };

        let doc = PrintDocument::render(&preview, &presentation);
        assert!(doc.html.contains("data-theme=\"dark\""));
        assert!(doc.html.contains("class=\"template-modern\""));
        assert!(doc.html.contains("--accent-color: #ff0066;"));
        assert!(doc.html.contains("--font-family: Georgia, serif;"));
        assert!(doc.html.contains("background: #1e1e1e;"));
        assert!(doc.html.contains("border-left: 4px solid var(--accent-color)"));
        assert!(doc.html.contains("<h1 id=\"namePreview\">Jane &lt;Doe&gt;</h1>"));
        assert!(doc.html.contains("<li>Rust</li>\n<li>Go</li>"));
        assert!(doc.html.contains("<p>Engineer, Acme</p>"));
        assert!(doc
            .html
            .contains("<p class=\"placeholder\">Your education entries will appear here</p>"));
    }

    #[test]
    fn test_light_classic_styling() {
        let preview = ResumePreview::render(&resume("Jane", "jane@example.com"));
        let doc = PrintDocument::render(&preview, &PresentationState::default());
        assert!(doc.html.contains("background: #ffffff;"));
        assert!(doc.html.contains("border-bottom: 2px solid var(--accent-color);"));
        assert!(doc.html.contains("size: A4;"));
    }

    #[test]
    fn test_css_values_cannot_escape_declaration() {
        assert_eq!(escape_css("red; } body { x"), "red  body  x");
    }

    #[test]
    fn test_write_to_creates_directory() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("exports");
        let preview = ResumePreview::render(&resume("Jane", "jane@example.com"));
        let doc = PrintDocument::render(&preview, &PresentationState::default());

        let path = doc.write_to(&dir).unwrap();
        assert!(path.starts_with(&dir));
        assert_eq!(path.extension().unwrap(), "html");
        assert_eq!(fs::read_to_string(path).unwrap(), doc.html);
    }

    #[test]
    fn test_back_to_back_exports_keep_both_documents() {
        let temp = TempDir::new().unwrap();
        let first = PrintDocument::render(
            &ResumePreview::render(&resume("First", "first@example.com")),
            &PresentationState::default(),
        );
        let second = PrintDocument::render(
            &ResumePreview::render(&resume("Second", "second@example.com")),
            &PresentationState::default(),
        );

        let first_path = first.write_to(temp.path()).unwrap();
        let second_path = second.write_to(temp.path()).unwrap();

        assert_ne!(first_path, second_path);
        assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 2);
        assert!(fs::read_to_string(&first_path).unwrap().contains("First"));
        assert!(fs::read_to_string(&second_path).unwrap().contains("Second"));
    }

    #[test]
    fn test_document_file_name_suffix() {
        assert_eq!(document_file_name("resume-7", 0), "resume-7.html");
        assert_eq!(document_file_name("resume-7", 2), "resume-7-2.html");
    }
}

//! Section Formatter: turns one record into one LaTeX fragment.
//!
//! `render_*` functions take typed records and cannot fail. `format_*`
//! functions take generic records and fail with `MissingField` when a required
//! field is absent. No I/O happens here.

use crate::errors::CvError;
use crate::records::models::{Education, Experience, Information, Qualifications};
use crate::records::record::Record;
use crate::render::templates::{LINKEDIN_PROFILE_URL, SKILL_SEPARATOR};

pub fn format_experience(record: &Record) -> Result<String, CvError> {
    Experience::try_from(record).map(|exp| render_experience(&exp))
}

pub fn format_education(record: &Record) -> Result<String, CvError> {
    Education::try_from(record).map(|edu| render_education(&edu))
}

pub fn format_qualifications(record: &Record) -> Result<String, CvError> {
    Qualifications::try_from(record).map(|q| render_qualifications(&q))
}

pub fn format_information(record: &Record) -> Result<String, CvError> {
    Information::try_from(record).map(|info| render_information(&info))
}

/// Company and dates, title with the optional promotion, description, then
/// the combined skills line.
pub fn render_experience(exp: &Experience) -> String {
    // An absent promotion drops the whole \grayed{} construct.
    let promotion = exp
        .promotion
        .as_deref()
        .map(|p| format!(r" \grayed{{{p}}}"))
        .unwrap_or_default();
    let skills = exp.all_skills().collect::<Vec<_>>().join(SKILL_SEPARATOR);

    format!(
        r"
{{\large\textbf{{{company}}}}}\dates{{{start} -- {end}}}

\textbf{{{title}}}{promotion} \\
\\
{description}\\
\smaller{{{skills}}}\\
",
        company = exp.company,
        start = exp.start,
        end = exp.end,
        title = exp.title,
        description = exp.description,
    )
}

/// Degree and field with the year, university, and an itemize holding the
/// optional specialization followed by the thesis.
pub fn render_education(edu: &Education) -> String {
    let specialization = edu
        .specialization
        .as_deref()
        .map(|s| format!("    \\item Specialization in \\textbf{{{s}}}\n"))
        .unwrap_or_default();
    let thesis = format!(r"    \item \textbf{{Thesis:}} {}", edu.thesis);

    format!(
        r"
    {{\large {degree} in \textbf{{{name}}}}} \dates{{{year}}}

    at {university}
    \begin{{itemize}}
    {specialization}{thesis}
    \end{{itemize}}
    ",
        degree = edu.degree,
        name = edu.name,
        year = edu.year,
        university = edu.university,
    )
}

/// Four headed itemize groups: languages, programming, tools, skills.
pub fn render_qualifications(q: &Qualifications) -> String {
    let languages: String = q
        .languages()
        .into_iter()
        .map(|(language, proficiency)| format!(r"\item {language} --- {}", proficiency.label()))
        .collect();
    let programming = items(&q.programming);
    let tools = items(&q.tools);
    let skills = items(&q.skills);

    format!(
        r"
\headleft{{Languages}}
\begin{{itemize}}
{languages}
\end{{itemize}}

\headleft{{Programming Languages}}
\begin{{itemize}}
{programming}
\end{{itemize}}

\headleft{{Tools and Frameworks}}
\begin{{itemize}}
{tools}
\end{{itemize}}

\headleft{{Skills}}
\begin{{itemize}}
{skills}
\end{{itemize}}
"
    )
}

/// Headline, biography and the contact block.
pub fn render_information(info: &Information) -> String {
    format!(
        r"
    \headleft{{{identity}}}
    {description}

    \headleft{{Contact Information}}

    \href{{mailto:{email}}}{{{email}}}

    \href{{{LINKEDIN_PROFILE_URL}{linkedin}}}{{LinkedIn/{linkedin}}}
    ",
        identity = info.identity,
        description = info.description,
        email = info.email,
        linkedin = info.linkedin,
    )
}

fn items(entries: &[String]) -> String {
    entries
        .iter()
        .map(|entry| format!(r"\item {entry}"))
        .collect()
}

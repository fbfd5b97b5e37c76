//! Site data: the CV as JSON for a web front end.
//!
//! Built from the same sorted records as the LaTeX document, plus coursework,
//! which is attached to the education record it references.

use serde::Serialize;

use crate::errors::CvError;
use crate::records::models::{
    convert_all, Coursework, Education, Experience, Information, Proficiency, Qualifications,
    SiteConfig,
};
use crate::records::sorter::DEFAULT_ID;
use crate::export::SiteSources;
use crate::render::CvSources;

/// Programming languages shown as highlighted.
const HIGHLIGHTED_LANGUAGES: usize = 4;
/// Tools shown as highlighted.
const HIGHLIGHTED_TOOLS: usize = 3;

/// Thesis text that marks a degree still in progress.
const UNFINISHED_THESIS: &str = "unfinished";

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SiteData {
    pub general: GeneralInfo,
    pub technical_domains: Vec<TechnicalDomain>,
    pub languages: Vec<SpokenLanguage>,
    pub experience: Vec<ExperienceView>,
    pub education: Vec<EducationView>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GeneralInfo {
    pub title: String,
    pub summary: String,
    pub email: String,
    pub linkedin: String,
    pub github: Option<String>,
    pub cv_pdf_link: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DomainType {
    Language,
    Tool,
    Skill,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TechnicalDomain {
    #[serde(rename = "type")]
    pub domain_type: DomainType,
    pub skill: String,
    pub is_highlighted: bool,
    pub order_index: usize,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SpokenLanguage {
    pub language: String,
    pub proficiency: Proficiency,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ExperienceView {
    pub id: String,
    pub company: String,
    pub role: String,
    pub period: String,
    pub promotion: Option<String>,
    pub description: String,
    pub location: Option<String>,
    pub order_index: usize,
    /// programming ++ tools ++ skills.
    pub skills: Vec<String>,
    pub programming_skills: Vec<String>,
    pub tool_skills: Vec<String>,
    pub domain_skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EducationView {
    pub id: String,
    pub institution: String,
    pub degree: String,
    pub specialization: Option<String>,
    pub year: String,
    /// `None` while the degree is unfinished.
    pub thesis: Option<String>,
    pub location: Option<String>,
    pub coursework: Vec<String>,
    pub order_index: usize,
    pub programming_skills: Vec<String>,
    pub tool_skills: Vec<String>,
    pub domain_skills: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Conversion
// ────────────────────────────────────────────────────────────────────────────

/// Builds site data from the document sources and the export-only records.
pub fn build_site_data(sources: &CvSources, site: &SiteSources) -> Result<SiteData, CvError> {
    let information = Information::try_from(&sources.information)?;
    let qualifications = Qualifications::try_from(&sources.qualifications)?;
    let experience: Vec<Experience> = convert_all(&sources.experience)?;
    let education: Vec<Education> = convert_all(&sources.education)?;
    let coursework: Vec<Coursework> = convert_all(&site.coursework)?;
    let config = site
        .config
        .as_ref()
        .map(SiteConfig::try_from)
        .transpose()?
        .unwrap_or_default();

    Ok(SiteData {
        general: general_info(&information, &config),
        technical_domains: technical_domains(&qualifications),
        languages: qualifications
            .languages()
            .into_iter()
            .map(|(language, proficiency)| SpokenLanguage {
                language: language.to_string(),
                proficiency,
            })
            .collect(),
        experience: experience
            .iter()
            .enumerate()
            .map(|(index, exp)| experience_view(exp, index))
            .collect(),
        education: education
            .iter()
            .enumerate()
            .map(|(index, edu)| education_view(edu, index, &coursework))
            .collect(),
    })
}

fn general_info(info: &Information, config: &SiteConfig) -> GeneralInfo {
    GeneralInfo {
        title: info.identity.clone(),
        summary: info.description.trim().to_string(),
        email: info.email.clone(),
        linkedin: format!("linkedin.com/in/{}", info.linkedin),
        github: info.github.as_ref().map(|handle| format!("github.com/{handle}")),
        cv_pdf_link: config.cv_pdf_link.clone(),
    }
}

fn technical_domains(q: &Qualifications) -> Vec<TechnicalDomain> {
    let group = |items: &[String], domain_type: DomainType, highlighted: usize| {
        items
            .iter()
            .enumerate()
            .map(|(index, skill)| TechnicalDomain {
                domain_type,
                skill: skill.clone(),
                is_highlighted: index < highlighted,
                order_index: index,
            })
            .collect::<Vec<_>>()
    };

    let mut domains = group(&q.programming, DomainType::Language, HIGHLIGHTED_LANGUAGES);
    domains.extend(group(&q.tools, DomainType::Tool, HIGHLIGHTED_TOOLS));
    domains.extend(group(&q.skills, DomainType::Skill, usize::MAX));
    domains
}

fn experience_view(exp: &Experience, order_index: usize) -> ExperienceView {
    ExperienceView {
        id: format!("exp-{}", exp.id.unwrap_or(DEFAULT_ID)),
        company: exp.company.clone(),
        role: exp.title.clone(),
        period: format!("{} – {}", exp.start, exp.end),
        promotion: exp.promotion.clone(),
        description: exp.description.trim().to_string(),
        location: exp.location.clone(),
        order_index,
        skills: exp
            .programming
            .iter()
            .chain(&exp.tools)
            .chain(&exp.skills)
            .cloned()
            .collect(),
        programming_skills: exp.programming.clone(),
        tool_skills: exp.tools.clone(),
        domain_skills: exp.skills.clone(),
    }
}

fn education_view(edu: &Education, order_index: usize, coursework: &[Coursework]) -> EducationView {
    let id = edu.id.unwrap_or(DEFAULT_ID);
    // Only the first matching coursework record counts.
    let courses = coursework
        .iter()
        .find(|c| c.education_id == id)
        .map(|c| c.courses.clone())
        .unwrap_or_default();

    EducationView {
        id: format!("edu-{id}"),
        institution: edu.university.clone(),
        degree: format!("{} {}", edu.degree, edu.name),
        specialization: edu.specialization.clone(),
        year: edu.year.clone(),
        thesis: Some(edu.thesis.clone()).filter(|t| t.as_str() != UNFINISHED_THESIS),
        location: edu.location.clone(),
        coursework: courses,
        order_index,
        programming_skills: edu.programming.clone(),
        tool_skills: edu.tools.clone(),
        domain_skills: edu.skills.clone(),
    }
}

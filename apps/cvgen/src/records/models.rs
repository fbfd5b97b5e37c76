//! Typed views of the generic records, one struct per category.
//!
//! Conversion from `Record` is where required fields are enforced. Optional
//! text is `Option<String>`, never an empty string.

use serde::Serialize;

use crate::errors::CvError;
use crate::records::record::{Record, ID_FIELD};

#[derive(Debug, Clone, PartialEq)]
pub struct Experience {
    pub company: String,
    pub title: String,
    pub start: String,
    pub end: String,
    pub promotion: Option<String>,
    pub skills: Vec<String>,
    pub programming: Vec<String>,
    pub tools: Vec<String>,
    pub description: String,
    pub location: Option<String>,
    pub id: Option<i64>,
}

impl Experience {
    /// Declared skills, then programming languages, then tools.
    pub fn all_skills(&self) -> impl Iterator<Item = &str> {
        self.skills
            .iter()
            .chain(&self.programming)
            .chain(&self.tools)
            .map(String::as_str)
    }
}

impl TryFrom<&Record> for Experience {
    type Error = CvError;

    fn try_from(record: &Record) -> Result<Self, Self::Error> {
        Ok(Experience {
            company: record.require_text("company")?,
            title: record.require_text("title")?,
            start: record.require_text("start")?,
            end: record.require_text("end")?,
            promotion: record.optional_text("promotion")?,
            skills: record.require_list("skills")?,
            programming: record.optional_list("programming")?,
            tools: record.optional_list("tools")?,
            description: record.require_text("description")?,
            location: record.optional_text("location")?,
            id: record.optional_integer(ID_FIELD)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Education {
    pub university: String,
    /// Field of study.
    pub name: String,
    pub degree: String,
    pub year: String,
    pub specialization: Option<String>,
    pub thesis: String,
    pub location: Option<String>,
    pub programming: Vec<String>,
    pub tools: Vec<String>,
    pub skills: Vec<String>,
    pub id: Option<i64>,
}

impl TryFrom<&Record> for Education {
    type Error = CvError;

    fn try_from(record: &Record) -> Result<Self, Self::Error> {
        Ok(Education {
            university: record.require_text("university")?,
            name: record.require_text("name")?,
            degree: record.require_text("degree")?,
            year: record.require_text("year")?,
            specialization: record.optional_text("specialization")?,
            thesis: record.require_text("thesis")?,
            location: record.optional_text("location")?,
            programming: record.optional_list("programming")?,
            tools: record.optional_list("tools")?,
            skills: record.optional_list("skills")?,
            id: record.optional_integer(ID_FIELD)?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Proficiency {
    Native,
    Fluent,
    Professional,
}

impl Proficiency {
    pub fn label(&self) -> &'static str {
        match self {
            Proficiency::Native => "Native",
            Proficiency::Fluent => "Fluent",
            Proficiency::Professional => "Professional",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Qualifications {
    pub native_language: String,
    pub fluent_languages: Vec<String>,
    pub professional_language: Vec<String>,
    pub programming: Vec<String>,
    pub tools: Vec<String>,
    pub skills: Vec<String>,
}

impl Qualifications {
    /// Spoken languages in display order: native, fluent, professional.
    pub fn languages(&self) -> Vec<(&str, Proficiency)> {
        std::iter::once((self.native_language.as_str(), Proficiency::Native))
            .chain(
                self.fluent_languages
                    .iter()
                    .map(|l| (l.as_str(), Proficiency::Fluent)),
            )
            .chain(
                self.professional_language
                    .iter()
                    .map(|l| (l.as_str(), Proficiency::Professional)),
            )
            .collect()
    }
}

impl TryFrom<&Record> for Qualifications {
    type Error = CvError;

    fn try_from(record: &Record) -> Result<Self, Self::Error> {
        Ok(Qualifications {
            native_language: record.require_text("native_language")?,
            fluent_languages: record.require_list("fluent_languages")?,
            professional_language: record.require_list("professional_language")?,
            programming: record.require_list("programming")?,
            tools: record.require_list("tools")?,
            skills: record.require_list("skills")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Information {
    /// Headline shown above the biography.
    pub identity: String,
    pub description: String,
    pub email: String,
    /// LinkedIn handle, not a URL.
    pub linkedin: String,
    pub github: Option<String>,
}

impl TryFrom<&Record> for Information {
    type Error = CvError;

    fn try_from(record: &Record) -> Result<Self, Self::Error> {
        Ok(Information {
            identity: record.require_text("identity")?,
            description: record.require_text("description")?,
            email: record.require_text("email")?,
            linkedin: record.require_text("linkedin")?,
            github: record.optional_text("github")?,
        })
    }
}

/// Courses taken as part of the education record with id `education_id`.
#[derive(Debug, Clone, PartialEq)]
pub struct Coursework {
    pub education_id: i64,
    pub courses: Vec<String>,
}

impl TryFrom<&Record> for Coursework {
    type Error = CvError;

    fn try_from(record: &Record) -> Result<Self, Self::Error> {
        Ok(Coursework {
            education_id: record.require_integer("education_id")?,
            courses: record.require_list("courses")?,
        })
    }
}

/// Settings that only the site export reads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SiteConfig {
    /// Where the compiled PDF is published.
    pub cv_pdf_link: Option<String>,
}

impl TryFrom<&Record> for SiteConfig {
    type Error = CvError;

    fn try_from(record: &Record) -> Result<Self, Self::Error> {
        Ok(SiteConfig {
            cv_pdf_link: record.optional_text("cv_pdf_link")?,
        })
    }
}

/// Converts every record, stopping at the first failure.
pub fn convert_all<'a, T>(records: &'a [Record]) -> Result<Vec<T>, CvError>
where
    T: TryFrom<&'a Record, Error = CvError>,
{
    records.iter().map(T::try_from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::category::Category;
    use serde_yaml_ng::Mapping;

    fn make_record(category: Category, yaml: &str) -> Record {
        let fields: Mapping = serde_yaml_ng::from_str(yaml).unwrap();
        Record::new(category, "test.yaml", fields)
    }

    const EXPERIENCE_YAML: &str = r#"
company: Bodil Energi
title: Tech Lead
start: Aug 2024
end: Present
promotion: Promoted June 2025
skills: [Grid stabilization]
programming: [Python, TypeScript]
tools: [Kubernetes]
description: Built control algorithms.
id: 4
"#;

    #[test]
    fn test_experience_conversion() {
        let record = make_record(Category::Experience, EXPERIENCE_YAML);
        let exp = Experience::try_from(&record).unwrap();
        assert_eq!(exp.company, "Bodil Energi");
        assert_eq!(exp.promotion.as_deref(), Some("Promoted June 2025"));
        assert_eq!(exp.id, Some(4));
        assert_eq!(exp.location, None);
    }

    #[test]
    fn test_experience_all_skills_order() {
        let record = make_record(Category::Experience, EXPERIENCE_YAML);
        let exp = Experience::try_from(&record).unwrap();
        let all: Vec<_> = exp.all_skills().collect();
        assert_eq!(
            all,
            vec!["Grid stabilization", "Python", "TypeScript", "Kubernetes"]
        );
    }

    #[test]
    fn test_experience_without_programming_or_tools() {
        let record = make_record(
            Category::Experience,
            "company: A\ntitle: B\nstart: 2020\nend: 2021\nskills: [X]\ndescription: D",
        );
        let exp = Experience::try_from(&record).unwrap();
        assert_eq!(exp.all_skills().collect::<Vec<_>>(), vec!["X"]);
        assert_eq!(exp.promotion, None);
    }

    #[test]
    fn test_experience_missing_description_fails() {
        let record = make_record(
            Category::Experience,
            "company: A\ntitle: B\nstart: 2020\nend: 2021\nskills: [X]",
        );
        let err = Experience::try_from(&record).unwrap_err();
        assert!(
            matches!(err, CvError::MissingField { field: "description", category: Category::Experience, .. }),
            "got {err:?}"
        );
    }

    #[test]
    fn test_education_numeric_year() {
        let record = make_record(
            Category::Education,
            "university: DTU\nname: Mathematics\ndegree: MSc\nyear: 2022\nthesis: Stochastic control\nspecialization: ''",
        );
        let edu = Education::try_from(&record).unwrap();
        assert_eq!(edu.year, "2022");
        assert_eq!(edu.specialization, None, "empty specialization is absent");
    }

    #[test]
    fn test_qualifications_language_order() {
        let record = make_record(
            Category::Qualifications,
            "native_language: Danish\nfluent_languages: [English]\nprofessional_language: [German]\nprogramming: []\ntools: []\nskills: []",
        );
        let q = Qualifications::try_from(&record).unwrap();
        assert_eq!(
            q.languages(),
            vec![
                ("Danish", Proficiency::Native),
                ("English", Proficiency::Fluent),
                ("German", Proficiency::Professional),
            ]
        );
    }

    #[test]
    fn test_information_requires_linkedin() {
        let record = make_record(
            Category::Information,
            "identity: Engineer\ndescription: Bio\nemail: a@b.c",
        );
        let err = Information::try_from(&record).unwrap_err();
        assert!(matches!(err, CvError::MissingField { field: "linkedin", .. }));
    }

    #[test]
    fn test_coursework_requires_integer_education_id() {
        let record = make_record(
            Category::Coursework,
            "education_id: 2\ncourses: [Measure Theory, Topology]",
        );
        let cw = Coursework::try_from(&record).unwrap();
        assert_eq!(cw.education_id, 2);
        assert_eq!(cw.courses.len(), 2);
    }

    #[test]
    fn test_convert_all_stops_at_first_error() {
        let records = vec![
            make_record(Category::Coursework, "education_id: 1\ncourses: [A]"),
            make_record(Category::Coursework, "courses: [B]"),
        ];
        let result: Result<Vec<Coursework>, _> = convert_all(&records);
        assert!(matches!(
            result,
            Err(CvError::MissingField { field: "education_id", .. })
        ));
    }

    #[test]
    fn test_site_config_pdf_link_optional() {
        let record = make_record(Category::SiteConfig, "cv_pdf_link: https://example.com/cv.pdf");
        let config = SiteConfig::try_from(&record).unwrap();
        assert_eq!(config.cv_pdf_link.as_deref(), Some("https://example.com/cv.pdf"));

        let record = make_record(Category::SiteConfig, "cv_pdf_link: ''");
        assert_eq!(SiteConfig::try_from(&record).unwrap(), SiteConfig::default());
    }
}

//! The sample resume returned by the stub parser.
//!
//! Stands in for real PDF/DOCX extraction until a parsing backend exists.

use crate::models::resume::{Education, Experience, PersonalInfo, Resume, Skill, SkillLevel};

/// A fully populated demo resume. Entry ids use the same prefixes as the
/// editor id generator but a fixed numbering, so uploaded and hand-added
/// entries never collide (generated ids are process-unique counters).
pub fn sample_resume() -> Resume {
    Resume {
        personal_info: PersonalInfo {
            full_name: "John Smith".to_string(),
            email: "john.smith@email.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            location: "New York, NY".to_string(),
            summary: "Experienced software developer with 5+ years of experience in \
                      full-stack development. Passionate about creating efficient and \
                      scalable solutions."
                .to_string(),
        },
        experience: vec![
            Experience {
                id: "exp-sample-1".to_string(),
                company: "Tech Corp".to_string(),
                position: "Senior Software Engineer".to_string(),
                start_date: "2021-03".to_string(),
                end_date: "Present".to_string(),
                description: "Led development of web applications using React and Node.js. \
                              Collaborated with cross-functional teams to deliver \
                              high-quality software solutions."
                    .to_string(),
            },
            Experience {
                id: "exp-sample-2".to_string(),
                company: "StartupXYZ".to_string(),
                position: "Full Stack Developer".to_string(),
                start_date: "2019-06".to_string(),
                end_date: "2021-02".to_string(),
                description: "Developed and maintained multiple client projects using \
                              various technologies including Python, JavaScript, and SQL \
                              databases."
                    .to_string(),
            },
        ],
        education: vec![Education {
            id: "edu-sample-1".to_string(),
            institution: "University of Technology".to_string(),
            degree: "Bachelor of Science".to_string(),
            field: "Computer Science".to_string(),
            start_date: "2015-09".to_string(),
            end_date: "2019-05".to_string(),
            gpa: "3.8".to_string(),
        }],
        skills: vec![
            skill("skill-sample-1", "JavaScript", SkillLevel::Expert),
            skill("skill-sample-2", "React", SkillLevel::Expert),
            skill("skill-sample-3", "Node.js", SkillLevel::Advanced),
            skill("skill-sample-4", "Python", SkillLevel::Advanced),
            skill("skill-sample-5", "SQL", SkillLevel::Intermediate),
        ],
    }
}

fn skill(id: &str, name: &str, level: SkillLevel) -> Skill {
    Skill {
        id: id.to_string(),
        name: name.to_string(),
        level,
    }
}

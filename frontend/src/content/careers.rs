use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Internship {
    pub id: u32,
    pub title: &'static str,
    pub icon: &'static str,
    pub department: &'static str,
    pub duration: &'static str,
    pub location: &'static str,
    pub kind: &'static str,
    pub description: &'static str,
    pub requirements: &'static [&'static str],
    pub stipend: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Perk {
    pub title: &'static str,
    pub description: &'static str,
}

pub const PERKS: &[Perk] = &[
    Perk { title: "Real Projects", description: "Work on actual client projects, not just simulations" },
    Perk { title: "Mentorship", description: "Learn directly from experienced industry professionals" },
    Perk { title: "Flexible Hours", description: "Balance your studies with practical work experience" },
    Perk { title: "Certificate", description: "Receive official internship completion certificate" },
    Perk { title: "PPO Opportunity", description: "Top performers get Pre-Placement Offers" },
    Perk { title: "Stipend", description: "Competitive monthly stipend for all interns" },
];

pub const INTERNSHIPS: &[Internship] = &[
    Internship {
        id: 1,
        title: "Web Development Intern",
        icon: "💻",
        department: "Development",
        duration: "1-6 Months",
        location: "Noida, UP (Hybrid)",
        kind: "Internship",
        description: "Join our web development team to work on real-world projects using React, Next.js, and Node.js. Learn from experienced developers and contribute to client projects.",
        requirements: &[
            "Currently pursuing B.Tech/BCA/MCA or equivalent",
            "Basic knowledge of HTML, CSS, JavaScript",
            "Familiarity with React is a plus",
            "Strong problem-solving skills",
        ],
        stipend: "₹6,000 - ₹10,000/month",
    },
    Internship {
        id: 2,
        title: "Mobile App Development Intern",
        icon: "📱",
        department: "Development",
        duration: "1-6 Months",
        location: "Noida, UP (Hybrid)",
        kind: "Internship",
        description: "Work on cross-platform mobile applications using React Native and Flutter. Gain hands-on experience in building production-ready mobile apps.",
        requirements: &[
            "Currently pursuing B.Tech/BCA/MCA or equivalent",
            "Basic understanding of mobile app development",
            "Knowledge of JavaScript or Dart",
            "Passion for mobile technologies",
        ],
        stipend: "₹6,000 - ₹10,000/month",
    },
    Internship {
        id: 3,
        title: "Cloud & DevOps Intern",
        icon: "☁️",
        department: "Infrastructure",
        duration: "1-6 Months",
        location: "Noida, UP (Remote)",
        kind: "Internship",
        description: "Learn cloud infrastructure management with AWS/Azure. Work on CI/CD pipelines, containerization, and infrastructure automation.",
        requirements: &[
            "Currently pursuing B.Tech/MCA or equivalent",
            "Basic knowledge of Linux",
            "Interest in cloud technologies",
            "Understanding of Git version control",
        ],
        stipend: "₹10,000 - ₹12,000/month",
    },
    Internship {
        id: 4,
        title: "UI/UX Design Intern",
        icon: "🎨",
        department: "Design",
        duration: "1-6 Months",
        location: "Noida, UP (Hybrid)",
        kind: "Internship",
        description: "Create beautiful user interfaces and experiences for web and mobile applications. Work with Figma, Adobe XD, and collaborate with development teams.",
        requirements: &[
            "Currently pursuing Design/B.Tech or equivalent",
            "Proficiency in Figma or Adobe XD",
            "Strong visual design skills",
            "Portfolio showcasing design work",
        ],
        stipend: "₹8,000 - ₹12,000/month",
    },
    Internship {
        id: 5,
        title: "Digital Marketing Intern",
        icon: "📣",
        department: "Marketing",
        duration: "1-6 Months",
        location: "Noida, UP (Hybrid)",
        kind: "Internship",
        description: "Assist in planning and executing digital marketing campaigns across social media, SEO, and content marketing. Learn analytics and performance optimization.",
        requirements: &[
            "Currently pursuing BBA/MBA/Mass Communication",
            "Understanding of social media platforms",
            "Basic knowledge of SEO",
            "Excellent written communication",
        ],
        stipend: "₹8,000 - ₹12,000/month",
    },
    Internship {
        id: 6,
        title: "Data Analytics Intern",
        icon: "📈",
        department: "Analytics",
        duration: "1-6 Months",
        location: "Noida, UP (Remote)",
        kind: "Internship",
        description: "Work with data visualization tools and help create insightful dashboards. Learn SQL, Python, and business intelligence tools.",
        requirements: &[
            "Currently pursuing B.Tech/BCA/Statistics",
            "Basic knowledge of SQL",
            "Familiarity with Excel/Google Sheets",
            "Interest in data analysis and visualization",
        ],
        stipend: "₹10,000 - ₹15,000/month",
    },
];

/// `mailto:` link that opens a pre-filled application for `position`, or a
/// generic one when no position is given.
pub fn application_mailto(position: Option<&str>) -> String {
    let position = position.unwrap_or("[Position Name]");
    let subject = format!("Internship Application - {position}");
    let body = format!(
        "Hi {} Team,\r\n\r\nI am interested in applying for the {position} internship position.\r\n\r\nPlease find my resume attached.\r\n\r\nRegards,\r\n[Your Name]",
        config::COMPANY_NAME
    );
    format!(
        "mailto:{}?subject={}&body={}",
        config::CAREERS_EMAIL,
        urlencoding::encode(&subject),
        urlencoding::encode(&body)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mailto_encodes_subject_and_body() {
        let link = application_mailto(Some("UI/UX Design Intern"));
        assert!(link.starts_with("mailto:careers@zenithpact.com?subject="));
        assert!(link.contains("subject=Internship%20Application%20-%20UI%2FUX%20Design%20Intern"));
        assert!(link.contains("%0D%0A%0D%0A"));
        assert!(!link.contains(' '));
    }

    #[test]
    fn generic_mailto_uses_placeholder_position() {
        let link = application_mailto(None);
        assert!(link.contains("%5BPosition%20Name%5D"));
    }

    #[test]
    fn internship_ids_are_unique() {
        let mut ids: Vec<u32> = INTERNSHIPS.iter().map(|i| i.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), INTERNSHIPS.len());
    }
}

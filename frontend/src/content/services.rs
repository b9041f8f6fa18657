//! Service catalogue: the summary cards on `/services` and the detail pages
//! under `/services/:service_id`.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServiceSummary {
    pub slug: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub highlights: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProcessStep {
    pub step: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServiceDetail {
    pub slug: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub hero_image: &'static str,
    pub showcase_image: &'static str,
    pub features: &'static [&'static str],
    pub technologies: &'static [&'static str],
    pub benefits: &'static [&'static str],
    pub process: &'static [ProcessStep],
}

pub const SERVICES: &[ServiceSummary] = &[
    ServiceSummary {
        slug: "web-development",
        icon: "💻",
        title: "Web Development",
        description: "Build responsive, scalable, and high-performance web applications using cutting-edge technologies like React, Next.js, and Node.js.",
        highlights: &["Custom Web Apps", "E-commerce Solutions", "CMS Development"],
    },
    ServiceSummary {
        slug: "mobile-app-development",
        icon: "📱",
        title: "Mobile App Development",
        description: "Create stunning native and cross-platform mobile applications for iOS and Android that deliver exceptional user experiences.",
        highlights: &["iOS & Android Apps", "React Native", "Flutter Development"],
    },
    ServiceSummary {
        slug: "cloud-solutions",
        icon: "☁️",
        title: "Cloud Solutions",
        description: "Leverage the power of cloud computing with AWS, Azure, and Google Cloud to scale your infrastructure and optimize costs.",
        highlights: &["Cloud Migration", "DevOps Services", "Infrastructure Management"],
    },
    ServiceSummary {
        slug: "ai-data-integration",
        icon: "🧠",
        title: "AI & Data Integration",
        description: "Harness the power of artificial intelligence and machine learning to unlock insights and automate processes.",
        highlights: &["Machine Learning", "Data Analytics", "AI Chatbots"],
    },
    ServiceSummary {
        slug: "digital-transformation",
        icon: "🚀",
        title: "Digital Transformation",
        description: "Transform your business with digital solutions that streamline operations and enhance customer engagement.",
        highlights: &["Process Automation", "Digital Strategy", "Innovation Consulting"],
    },
    ServiceSummary {
        slug: "cybersecurity",
        icon: "🛡️",
        title: "Cybersecurity",
        description: "Protect your digital assets with comprehensive security solutions including penetration testing and security audits.",
        highlights: &["Security Audits", "Threat Detection", "Compliance Management"],
    },
];

pub const SERVICE_DETAILS: &[ServiceDetail] = &[
    ServiceDetail {
        slug: "web-development",
        icon: "💻",
        title: "Web Development",
        tagline: "Build powerful web applications that drive business growth",
        description: "Our web development services combine cutting-edge technology with creative design to deliver responsive, scalable, and high-performance web applications. We specialize in modern frameworks and technologies that ensure your web presence stands out in the digital landscape.",
        hero_image: "https://images.unsplash.com/photo-1547658719-da2b51169166?w=1200&h=600&fit=crop",
        showcase_image: "https://images.unsplash.com/photo-1498050108023-c5249f4df085?w=1200&h=600&fit=crop",
        features: &[
            "Custom Web Applications",
            "E-commerce Solutions",
            "Content Management Systems",
            "Progressive Web Apps (PWA)",
            "API Development & Integration",
            "Responsive Design",
        ],
        technologies: &[
            "React",
            "Next.js",
            "Node.js",
            "MongoDB",
            "PostgreSQL",
            "GraphQL",
        ],
        benefits: &[
            "Scalable architecture that grows with your business",
            "SEO-optimized for better search engine visibility",
            "Fast loading times and optimal performance",
            "Cross-browser compatibility",
            "Secure and maintainable codebase",
        ],
        process: &[
            ProcessStep { step: "Discovery", description: "Understanding your business goals and requirements" },
            ProcessStep { step: "Design", description: "Creating wireframes and visual designs" },
            ProcessStep { step: "Development", description: "Building your application with best practices" },
            ProcessStep { step: "Testing", description: "Rigorous quality assurance and testing" },
            ProcessStep { step: "Deployment", description: "Launching your application to production" },
            ProcessStep { step: "Support", description: "Ongoing maintenance and updates" },
        ],
    },
    ServiceDetail {
        slug: "mobile-app-development",
        icon: "📱",
        title: "Mobile App Development",
        tagline: "Create exceptional mobile experiences for iOS and Android",
        description: "Transform your ideas into stunning mobile applications that users love. Our team builds native and cross-platform apps that deliver seamless performance, intuitive interfaces, and engaging user experiences across all devices.",
        hero_image: "https://images.unsplash.com/photo-1512941937669-90a1b58e7e9c?w=1200&h=600&fit=crop",
        showcase_image: "https://images.unsplash.com/photo-1551650975-87deedd944c3?w=1200&h=600&fit=crop",
        features: &[
            "Native iOS & Android Apps",
            "Cross-Platform Development",
            "App Store Optimization",
            "Push Notifications",
            "Offline Functionality",
            "In-App Purchases",
        ],
        technologies: &[
            "React Native",
            "Flutter",
            "Swift",
            "Kotlin",
            "Firebase",
            "Redux",
        ],
        benefits: &[
            "Single codebase for multiple platforms",
            "Native-like performance and feel",
            "Reduced development time and costs",
            "Easy maintenance and updates",
            "Access to device features and sensors",
        ],
        process: &[
            ProcessStep { step: "Strategy", description: "Defining app goals and target audience" },
            ProcessStep { step: "UX/UI Design", description: "Crafting intuitive user interfaces" },
            ProcessStep { step: "Development", description: "Building robust mobile applications" },
            ProcessStep { step: "Testing", description: "Testing across devices and OS versions" },
            ProcessStep { step: "Launch", description: "Publishing to App Store and Play Store" },
            ProcessStep { step: "Optimization", description: "Monitoring and improving performance" },
        ],
    },
    ServiceDetail {
        slug: "cloud-solutions",
        icon: "☁️",
        title: "Cloud Solutions",
        tagline: "Scale your infrastructure with modern cloud technology",
        description: "Leverage the power of cloud computing to transform your IT infrastructure. We help businesses migrate to the cloud, optimize costs, and build scalable solutions using industry-leading platforms like AWS, Azure, and Google Cloud.",
        hero_image: "https://images.unsplash.com/photo-1451187580459-43490279c0fa?w=1200&h=600&fit=crop",
        showcase_image: "https://images.unsplash.com/photo-1558494949-ef010cbdcc31?w=1200&h=600&fit=crop",
        features: &[
            "Cloud Migration Services",
            "Infrastructure as Code",
            "DevOps & CI/CD",
            "Cloud Security",
            "Disaster Recovery",
            "Cost Optimization",
        ],
        technologies: &[
            "AWS",
            "Azure",
            "Google Cloud",
            "Docker",
            "Kubernetes",
            "Terraform",
        ],
        benefits: &[
            "Reduced infrastructure costs",
            "Enhanced scalability and flexibility",
            "Improved reliability and uptime",
            "Automatic updates and patches",
            "Global reach and performance",
        ],
        process: &[
            ProcessStep { step: "Assessment", description: "Evaluating your current infrastructure" },
            ProcessStep { step: "Planning", description: "Designing cloud architecture" },
            ProcessStep { step: "Migration", description: "Moving workloads to the cloud" },
            ProcessStep { step: "Optimization", description: "Fine-tuning performance and costs" },
            ProcessStep { step: "Monitoring", description: "Continuous monitoring and alerts" },
            ProcessStep { step: "Management", description: "Ongoing support and maintenance" },
        ],
    },
    ServiceDetail {
        slug: "ai-data-integration",
        icon: "🧠",
        title: "AI & Data Integration",
        tagline: "Unlock the power of artificial intelligence and data",
        description: "Harness cutting-edge AI and machine learning technologies to unlock valuable insights from your data. Our solutions help automate processes, predict trends, and make data-driven decisions that propel your business forward.",
        hero_image: "https://images.unsplash.com/photo-1677442136019-21780ecad995?w=1200&h=600&fit=crop",
        showcase_image: "https://images.unsplash.com/photo-1620712943543-bcc4688e7485?w=1200&h=600&fit=crop",
        features: &[
            "Machine Learning Models",
            "Natural Language Processing",
            "Computer Vision",
            "Predictive Analytics",
            "AI Chatbots",
            "Data Pipeline Automation",
        ],
        technologies: &[
            "Python",
            "TensorFlow",
            "PyTorch",
            "Scikit-learn",
            "OpenAI",
            "Apache Spark",
        ],
        benefits: &[
            "Automated decision-making processes",
            "Enhanced customer experiences",
            "Improved operational efficiency",
            "Data-driven insights and predictions",
            "Competitive advantage through innovation",
        ],
        process: &[
            ProcessStep { step: "Data Analysis", description: "Understanding your data landscape" },
            ProcessStep { step: "Model Design", description: "Creating AI/ML architectures" },
            ProcessStep { step: "Training", description: "Training models with your data" },
            ProcessStep { step: "Validation", description: "Testing accuracy and performance" },
            ProcessStep { step: "Integration", description: "Deploying into your systems" },
            ProcessStep { step: "Refinement", description: "Continuous learning and improvement" },
        ],
    },
    ServiceDetail {
        slug: "digital-transformation",
        icon: "🚀",
        title: "Digital Transformation",
        tagline: "Transform your business for the digital age",
        description: "Navigate the complexities of digital transformation with our comprehensive consulting and implementation services. We help organizations modernize operations, enhance customer engagement, and drive innovation through strategic digital initiatives.",
        hero_image: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=1200&h=600&fit=crop",
        showcase_image: "https://images.unsplash.com/photo-1553877522-43269d4ea984?w=1200&h=600&fit=crop",
        features: &[
            "Digital Strategy Consulting",
            "Process Automation",
            "Change Management",
            "Innovation Workshops",
            "Legacy System Modernization",
            "Customer Experience Enhancement",
        ],
        technologies: &[
            "RPA Tools",
            "Low-Code Platforms",
            "Analytics Tools",
            "CRM Systems",
            "ERP Solutions",
            "Workflow Automation",
        ],
        benefits: &[
            "Streamlined business processes",
            "Reduced operational costs",
            "Improved employee productivity",
            "Enhanced customer satisfaction",
            "Faster time-to-market for innovations",
        ],
        process: &[
            ProcessStep { step: "Assessment", description: "Analyzing current digital maturity" },
            ProcessStep { step: "Strategy", description: "Developing transformation roadmap" },
            ProcessStep { step: "Pilot", description: "Testing solutions in controlled environment" },
            ProcessStep { step: "Implementation", description: "Rolling out across organization" },
            ProcessStep { step: "Training", description: "Empowering teams with new tools" },
            ProcessStep { step: "Evolution", description: "Continuous improvement and adaptation" },
        ],
    },
    ServiceDetail {
        slug: "cybersecurity",
        icon: "🛡️",
        title: "Cybersecurity",
        tagline: "Protect your digital assets with enterprise-grade security",
        description: "Safeguard your business from cyber threats with our comprehensive security solutions. We provide end-to-end protection including vulnerability assessments, penetration testing, security audits, and compliance management to keep your data and systems secure.",
        hero_image: "https://images.unsplash.com/photo-1550751827-4bd374c3f58b?w=1200&h=600&fit=crop",
        showcase_image: "https://images.unsplash.com/photo-1563986768609-322da13575f3?w=1200&h=600&fit=crop",
        features: &[
            "Security Audits & Assessments",
            "Penetration Testing",
            "Threat Detection & Response",
            "Compliance Management",
            "Security Training",
            "Incident Response Planning",
        ],
        technologies: &[
            "SIEM Tools",
            "Firewalls",
            "IDS/IPS",
            "Encryption",
            "VPN",
            "Multi-Factor Authentication",
        ],
        benefits: &[
            "Protection against cyber threats",
            "Regulatory compliance assurance",
            "Reduced risk of data breaches",
            "Enhanced customer trust",
            "Business continuity protection",
        ],
        process: &[
            ProcessStep { step: "Risk Assessment", description: "Identifying security vulnerabilities" },
            ProcessStep { step: "Strategy", description: "Developing security framework" },
            ProcessStep { step: "Implementation", description: "Deploying security measures" },
            ProcessStep { step: "Testing", description: "Validating security controls" },
            ProcessStep { step: "Monitoring", description: "24/7 threat monitoring" },
            ProcessStep { step: "Response", description: "Rapid incident response and recovery" },
        ],
    },
    ServiceDetail {
        slug: "seo-optimization",
        icon: "🔍",
        title: "SEO Optimization",
        tagline: "Boost your online visibility and dominate search rankings",
        description: "Our comprehensive SEO services help your business rank higher in search engines, drive organic traffic, and convert visitors into customers. We use data-driven strategies and proven techniques to improve your online presence.",
        hero_image: "https://images.unsplash.com/photo-1571677208710-96a80db23cd5?w=1200&h=600&fit=crop",
        showcase_image: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=1200&h=600&fit=crop",
        features: &[
            "Technical SEO Audit",
            "On-Page Optimization",
            "Content Strategy & Optimization",
            "Link Building & Outreach",
            "Local SEO",
            "SEO Analytics & Reporting",
        ],
        technologies: &[
            "Google Analytics",
            "SEMrush",
            "Ahrefs",
            "Google Search Console",
            "Schema Markup",
            "Screaming Frog",
        ],
        benefits: &[
            "Increased organic traffic and visibility",
            "Higher search engine rankings",
            "Better user experience and site performance",
            "Improved conversion rates",
            "Long-term sustainable growth",
        ],
        process: &[
            ProcessStep { step: "Audit", description: "Comprehensive SEO analysis and competitor research" },
            ProcessStep { step: "Strategy", description: "Custom SEO roadmap and keyword targeting" },
            ProcessStep { step: "Optimization", description: "Technical and on-page improvements" },
            ProcessStep { step: "Content", description: "Quality content creation and optimization" },
            ProcessStep { step: "Link Building", description: "Authority building through quality backlinks" },
            ProcessStep { step: "Monitoring", description: "Continuous tracking and optimization" },
        ],
    },
    ServiceDetail {
        slug: "digital-marketing",
        icon: "📣",
        title: "Digital Marketing",
        tagline: "Drive growth with data-driven marketing campaigns",
        description: "Our digital marketing services combine creativity with analytics to create campaigns that resonate with your audience and drive measurable results. From social media to email marketing, we cover all aspects of digital promotion.",
        hero_image: "https://images.unsplash.com/photo-1533750349088-cd871a92f312?w=1200&h=600&fit=crop",
        showcase_image: "https://images.unsplash.com/photo-1557838923-2985c318be48?w=1200&h=600&fit=crop",
        features: &[
            "Social Media Marketing",
            "Pay-Per-Click (PPC) Advertising",
            "Email Marketing Campaigns",
            "Content Marketing",
            "Influencer Marketing",
            "Marketing Automation",
        ],
        technologies: &[
            "Google Ads",
            "Facebook Ads",
            "Mailchimp",
            "HubSpot",
            "Hootsuite",
            "Google Tag Manager",
        ],
        benefits: &[
            "Increased brand awareness and reach",
            "Higher engagement and conversions",
            "Better ROI on marketing spend",
            "Data-driven decision making",
            "Scalable growth strategies",
        ],
        process: &[
            ProcessStep { step: "Research", description: "Audience analysis and market research" },
            ProcessStep { step: "Planning", description: "Campaign strategy and channel selection" },
            ProcessStep { step: "Creation", description: "Compelling content and ad creation" },
            ProcessStep { step: "Launch", description: "Campaign deployment across channels" },
            ProcessStep { step: "Optimization", description: "A/B testing and performance tuning" },
            ProcessStep { step: "Reporting", description: "Detailed analytics and insights" },
        ],
    },
    ServiceDetail {
        slug: "uiux-design",
        icon: "🎨",
        title: "UI/UX Design",
        tagline: "Create beautiful experiences that users love",
        description: "Our UI/UX design services focus on creating intuitive, engaging, and aesthetically pleasing digital experiences. We combine user research, design thinking, and creative expertise to craft interfaces that delight users and achieve business goals.",
        hero_image: "https://images.unsplash.com/photo-1561070791-2526d30994b5?w=1200&h=600&fit=crop",
        showcase_image: "https://images.unsplash.com/photo-1581291518857-4e27b48ff24e?w=1200&h=600&fit=crop",
        features: &[
            "User Research & Analysis",
            "Wireframing & Prototyping",
            "Visual Design & Branding",
            "Interaction Design",
            "Usability Testing",
            "Design System Creation",
        ],
        technologies: &[
            "Figma",
            "Adobe XD",
            "Sketch",
            "InVision",
            "Principle",
            "Framer",
        ],
        benefits: &[
            "Enhanced user satisfaction and engagement",
            "Reduced development costs through early testing",
            "Improved conversion rates",
            "Consistent brand experience",
            "Competitive advantage in the market",
        ],
        process: &[
            ProcessStep { step: "Research", description: "Understanding users and their needs" },
            ProcessStep { step: "Ideation", description: "Brainstorming and concept development" },
            ProcessStep { step: "Wireframing", description: "Low-fidelity layouts and flows" },
            ProcessStep { step: "Design", description: "High-fidelity visual design" },
            ProcessStep { step: "Prototype", description: "Interactive prototypes for testing" },
            ProcessStep { step: "Handoff", description: "Developer-ready design specifications" },
        ],
    },
    ServiceDetail {
        slug: "business-analytics",
        icon: "📈",
        title: "Business Analytics",
        tagline: "Transform data into actionable business insights",
        description: "Our business analytics services help you make informed decisions by turning complex data into clear, actionable insights. We build custom dashboards, predictive models, and reporting systems that drive strategic decision-making.",
        hero_image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=1200&h=600&fit=crop",
        showcase_image: "https://images.unsplash.com/photo-1543286386-713bdd548da4?w=1200&h=600&fit=crop",
        features: &[
            "Data Visualization Dashboards",
            "Predictive Analytics",
            "Custom Reporting Solutions",
            "Business Intelligence",
            "Data Mining & Analysis",
            "KPI Tracking & Monitoring",
        ],
        technologies: &[
            "Power BI",
            "Tableau",
            "Python",
            "R",
            "SQL",
            "Google Data Studio",
        ],
        benefits: &[
            "Data-driven strategic decisions",
            "Improved operational efficiency",
            "Identification of growth opportunities",
            "Real-time performance monitoring",
            "Better resource allocation",
        ],
        process: &[
            ProcessStep { step: "Assessment", description: "Understanding data sources and business goals" },
            ProcessStep { step: "Data Collection", description: "Gathering and integrating data" },
            ProcessStep { step: "Analysis", description: "Statistical analysis and pattern recognition" },
            ProcessStep { step: "Visualization", description: "Creating intuitive dashboards" },
            ProcessStep { step: "Insights", description: "Generating actionable recommendations" },
            ProcessStep { step: "Implementation", description: "Deploying analytics solutions" },
        ],
    },
];

pub fn find_service(slug: &str) -> Option<&'static ServiceDetail> {
    SERVICE_DETAILS.iter().find(|service| service.slug == slug)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn every_summary_card_links_to_a_detail_page() {
        for summary in SERVICES {
            let detail = find_service(summary.slug)
                .unwrap_or_else(|| panic!("no detail page for {}", summary.slug));
            assert_eq!(detail.title, summary.title);
        }
    }

    #[test]
    fn unknown_slug_has_no_detail() {
        assert!(find_service("time-travel").is_none());
        assert!(find_service("").is_none());
    }

    #[test]
    fn detail_tables_are_complete() {
        let mut slugs = HashSet::new();
        for detail in SERVICE_DETAILS {
            assert!(slugs.insert(detail.slug), "duplicate slug {}", detail.slug);
            assert_eq!(detail.process.len(), 6, "{}", detail.slug);
            assert!(!detail.features.is_empty());
            assert!(!detail.technologies.is_empty());
            assert!(!detail.benefits.is_empty());
        }
        assert_eq!(SERVICE_DETAILS.len(), 10);
    }
}

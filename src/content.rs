//! Copy and data for the landing page sections.

pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        icon: "🎨",
        title: "UI/UX Design",
        description: "Intuitive, beautiful interfaces that guide users to take action while delighting them at every step.",
    },
    Service {
        icon: "💻",
        title: "Development",
        description: "Fast, responsive, and accessible code that ensures your landing page performs flawlessly on all devices.",
    },
    Service {
        icon: "📈",
        title: "CRO",
        description: "Data-driven conversion rate optimization to maximize the effectiveness of your landing page.",
    },
    Service {
        icon: "🔍",
        title: "SEO",
        description: "On-page optimization to help your landing page rank higher in search results and drive organic traffic.",
    },
    Service {
        icon: "📱",
        title: "Responsive Design",
        description: "Fluid layouts that adapt perfectly to any screen size, ensuring a consistent experience for all users.",
    },
    Service {
        icon: "📊",
        title: "Analytics",
        description: "Comprehensive tracking and reporting to measure performance and identify opportunities for improvement.",
    },
];

#[derive(Debug, PartialEq)]
pub struct CaseStudy {
    pub title: &'static str,
    pub category: &'static str,
    pub conversion_increase: &'static str,
    pub image: &'static str,
    pub description: &'static str,
}

pub const ALL_CATEGORIES: &str = "All";
pub const CASE_STUDY_CATEGORIES: &[&str] = &[ALL_CATEGORIES, "SaaS", "E-commerce", "Mobile App"];

pub const CASE_STUDIES: &[CaseStudy] = &[
    CaseStudy {
        title: "Fintech SaaS Platform",
        category: "SaaS",
        conversion_increase: "143%",
        image: "https://images.unsplash.com/photo-1518770660439-4636190af475?auto=format&fit=crop&w=1740&q=80",
        description: "Redesigned the landing page for a fintech platform, resulting in a 143% increase in sign-ups.",
    },
    CaseStudy {
        title: "E-commerce Product Launch",
        category: "E-commerce",
        conversion_increase: "89%",
        image: "https://images.unsplash.com/photo-1486312338219-ce68d2c6f44d?auto=format&fit=crop&w=1172&q=80",
        description: "Created a high-converting product launch page that increased pre-orders by 89%.",
    },
    CaseStudy {
        title: "Health & Wellness App",
        category: "Mobile App",
        conversion_increase: "112%",
        image: "https://images.unsplash.com/photo-1649972904349-6e44c42644a7?auto=format&fit=crop&w=1172&q=80",
        description: "Designed and developed a landing page for a health app, increasing downloads by 112%.",
    },
];

pub fn filter_case_studies(category: &str) -> Vec<&'static CaseStudy> {
    CASE_STUDIES
        .iter()
        .filter(|study| category == ALL_CATEGORIES || study.category == category)
        .collect()
}

pub struct ProcessStep {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const PROCESS_STEPS: &[ProcessStep] = &[
    ProcessStep {
        number: "01",
        title: "Discovery",
        description: "We start by understanding your business, goals, target audience, and the specific challenges you're facing.",
    },
    ProcessStep {
        number: "02",
        title: "Strategy",
        description: "Based on our research, we develop a tailored strategy to create a landing page that will achieve your specific goals.",
    },
    ProcessStep {
        number: "03",
        title: "Design",
        description: "Our designers create beautiful, conversion-focused mockups that align with your brand and resonate with your audience.",
    },
    ProcessStep {
        number: "04",
        title: "Development",
        description: "We transform the designs into a fully functional, responsive landing page with clean, optimized code.",
    },
    ProcessStep {
        number: "05",
        title: "Testing",
        description: "We conduct thorough testing to ensure your landing page works flawlessly across all devices and browsers.",
    },
    ProcessStep {
        number: "06",
        title: "Launch & Optimize",
        description: "After launch, we continuously monitor performance and make data-driven improvements to maximize conversions.",
    },
];

pub struct Integration {
    pub name: &'static str,
    pub logo: &'static str,
}

pub const INTEGRATIONS: &[Integration] = &[
    Integration { name: "Firebase", logo: "/media/firebasegoogle.png" },
    Integration { name: "Stripe", logo: "/media/stripe.png" },
    Integration { name: "WordPress", logo: "/media/wordpress.png" },
    Integration { name: "Twilio", logo: "/media/twilio.png" },
    Integration { name: "Mailchimp", logo: "/media/mailchimp.png" },
    Integration { name: "Figma", logo: "/integrations/figma.png" },
    Integration { name: "Hubspot", logo: "/media/hubspot.png" },
    Integration { name: "WhatsApp", logo: "/media/whatsapp.png" },
    Integration { name: "Lottie Files", logo: "/media/lottiefiles.png" },
];

pub struct Testimonial {
    pub name: &'static str,
    pub position: &'static str,
    pub company: &'static str,
    pub text: &'static str,
    pub image: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Sarah Johnson",
        position: "CEO at TechFlow",
        company: "TechFlow",
        text: "Working with this agency has been a game-changer for our business. Their attention to detail and innovative approach resulted in a website that perfectly represents our brand and has significantly increased our conversions.",
        image: "/testimonials/person1.jpg",
    },
    Testimonial {
        name: "Michael Chen",
        position: "Founder",
        company: "Innovate Solutions",
        text: "The team's expertise in both design and development enabled us to launch our product ahead of schedule. Their collaborative approach and technical knowledge made the entire process smooth and successful.",
        image: "/testimonials/person2.jpg",
    },
    Testimonial {
        name: "Emily Rodriguez",
        position: "Marketing Director",
        company: "Brand Elevate",
        text: "From concept to execution, the agency delivered beyond our expectations. Our website now perfectly captures our brand essence while providing an exceptional user experience for our customers.",
        image: "/testimonials/person3.jpg",
    },
    Testimonial {
        name: "David Park",
        position: "CTO",
        company: "Future Systems",
        text: "I've worked with many digital agencies, but none have matched their level of technical expertise and creativity. They don't just build websites; they craft digital experiences that drive growth.",
        image: "/testimonials/person4.jpg",
    },
];

pub const CONTACT_EMAIL: &str = "team@thedigitalfront.in";
pub const WHATSAPP_LINK: &str =
    "https://wa.me/9284613155?text=Hey!%20I'm%20interested%20in%20your%20Web%20Agency%20services";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_category_shows_every_project() {
        assert_eq!(filter_case_studies(ALL_CATEGORIES).len(), CASE_STUDIES.len());
    }

    #[test]
    fn category_filter_is_exact() {
        let saas = filter_case_studies("SaaS");
        assert_eq!(saas.len(), 1);
        assert_eq!(saas[0].title, "Fintech SaaS Platform");
        assert!(filter_case_studies("saas").is_empty());
    }

    #[test]
    fn every_project_category_is_selectable() {
        for study in CASE_STUDIES {
            assert!(CASE_STUDY_CATEGORIES.contains(&study.category));
        }
    }
}

pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub gradient: &'static str,
}

pub static FEATURES: [Feature; 3] = [
    Feature {
        icon: "</>",
        title: "Clean Code",
        description: "Writing maintainable, scalable, and efficient code following best practices and modern standards.",
        gradient: "blue-purple",
    },
    Feature {
        icon: "◐",
        title: "UI/UX Design",
        description: "Creating beautiful, intuitive interfaces that provide exceptional user experiences across all devices.",
        gradient: "purple-pink",
    },
    Feature {
        icon: "⚡",
        title: "Performance",
        description: "Optimizing applications for speed, accessibility, and seamless performance on all platforms.",
        gradient: "pink-orange",
    },
];

pub struct Project {
    pub title: &'static str,
    pub summary: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub live_url: &'static str,
    pub source_url: &'static str,
    pub gradient: &'static str,
}

pub static PROJECTS: [Project; 6] = [
    Project {
        title: "E-Commerce Platform",
        summary: "Modern e-commerce solution with React, Next.js, and Stripe integration",
        description: "A full-stack e-commerce solution built with React, Next.js, and Stripe. Features include user authentication, product catalog, shopping cart, and payment processing.",
        tags: &["React", "Next.js", "TypeScript", "Tailwind", "Stripe", "MongoDB"],
        live_url: "#",
        source_url: "#",
        gradient: "blue-purple",
    },
    Project {
        title: "Dashboard Analytics",
        summary: "Real-time analytics dashboard with interactive charts and data visualization",
        description: "Real-time analytics dashboard with interactive charts, data visualization, and responsive design. Built with React and D3.js for dynamic data representation.",
        tags: &["React", "D3.js", "Node.js", "MongoDB", "Socket.io", "Chart.js"],
        live_url: "#",
        source_url: "#",
        gradient: "purple-pink",
    },
    Project {
        title: "Mobile App Landing",
        summary: "Responsive landing page for mobile app with smooth animations",
        description: "Responsive landing page for a mobile application with smooth animations, modern design, and optimized performance across all devices.",
        tags: &["React", "GSAP", "Framer Motion", "Tailwind", "Responsive"],
        live_url: "#",
        source_url: "#",
        gradient: "pink-orange",
    },
    Project {
        title: "Task Management App",
        summary: "Collaborative task management with real-time updates",
        description: "Collaborative task management application with real-time updates, drag-and-drop functionality, and team collaboration features.",
        tags: &["React", "Redux", "Node.js", "Socket.io", "PostgreSQL"],
        live_url: "#",
        source_url: "#",
        gradient: "green-blue",
    },
    Project {
        title: "Weather App",
        summary: "Location-based forecasts with interactive maps",
        description: "Beautiful weather application with location-based forecasts, interactive maps, and detailed weather information with smooth animations.",
        tags: &["React", "API Integration", "Geolocation", "CSS Animations"],
        live_url: "#",
        source_url: "#",
        gradient: "cyan-blue",
    },
    Project {
        title: "Portfolio Website",
        summary: "Personal portfolio showcasing projects and skills",
        description: "Personal portfolio website showcasing projects and skills with modern design, smooth animations, and responsive layout.",
        tags: &["Next.js", "GSAP", "Tailwind", "TypeScript", "Responsive"],
        live_url: "#",
        source_url: "#",
        gradient: "purple-indigo",
    },
];

/// The home page previews the first few projects.
pub const PREVIEWED_PROJECTS: usize = 3;

pub struct Skill {
    pub name: &'static str,
    pub level: u8,
}

pub static SKILLS: [Skill; 6] = [
    Skill { name: "React/Next.js", level: 95 },
    Skill { name: "TypeScript", level: 90 },
    Skill { name: "Tailwind CSS", level: 95 },
    Skill { name: "GSAP/Framer Motion", level: 85 },
    Skill { name: "Node.js", level: 80 },
    Skill { name: "GraphQL", level: 75 },
];

pub struct Stat {
    pub number: &'static str,
    pub label: &'static str,
}

pub static STATS: [Stat; 4] = [
    Stat { number: "50+", label: "Projects Completed" },
    Stat { number: "1000+", label: "Cups of Coffee" },
    Stat { number: "3+", label: "Years Experience" },
    Stat { number: "25+", label: "Happy Clients" },
];

pub static SERVICES: [&str; 4] = ["Web Development", "UI/UX Design", "Mobile Apps", "Consulting"];

pub static CONTACT_DETAILS: [(&str, &str); 3] = [
    ("Email", "hello@frontenddev.com"),
    ("Phone", "+1 (555) 123-4567"),
    ("Location", "San Francisco, CA"),
];

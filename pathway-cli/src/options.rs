//! Static option lists seeding the assessment pickers.
//!
//! Inert configuration: the service scores whatever strings it receives,
//! these only populate the interactive prompts. `pathway catalog skills`
//! shows what the service itself knows.

pub const SKILLS: &[&str] = &[
    "Programming",
    "Python",
    "JavaScript",
    "Java",
    "C++",
    "React",
    "Node.js",
    "Data Analysis",
    "SQL",
    "Excel",
    "Statistics",
    "Machine Learning",
    "Design",
    "Figma",
    "Adobe Creative Suite",
    "UI/UX Design",
    "Graphic Design",
    "Marketing",
    "SEO/SEM",
    "Social Media Marketing",
    "Content Marketing",
    "Project Management",
    "Agile/Scrum",
    "Leadership",
    "Communication",
    "Problem Solving",
    "Critical Thinking",
    "Analytical Thinking",
    "Database Management",
    "Cloud Computing",
    "DevOps",
    "Cybersecurity",
    "Business Analysis",
    "Financial Analysis",
    "Sales",
    "Customer Service",
    "Research",
    "Writing",
    "Presentation",
    "Team Management",
];

pub const INTERESTS: &[&str] = &[
    "Technology",
    "Programming",
    "Software Development",
    "AI/Machine Learning",
    "Data Science",
    "Web Development",
    "Mobile Development",
    "Game Development",
    "Design",
    "Art",
    "Creativity",
    "User Experience",
    "Visual Design",
    "Marketing",
    "Digital Marketing",
    "Social Media",
    "Branding",
    "Business",
    "Entrepreneurship",
    "Strategy",
    "Finance",
    "Investment",
    "Sales",
    "Customer Relations",
    "Business Development",
    "Education",
    "Teaching",
    "Training",
    "Research",
    "Writing",
    "Healthcare",
    "Medicine",
    "Psychology",
    "Counseling",
    "Engineering",
    "Architecture",
    "Construction",
    "Manufacturing",
    "Media",
    "Journalism",
    "Photography",
    "Video Production",
    "Sports",
    "Fitness",
    "Wellness",
    "Travel",
    "Food",
    "Music",
];

pub const EXPERIENCE_LEVELS: &[&str] = &[
    "Entry Level (0-2 years)",
    "Mid Level (3-5 years)",
    "Senior Level (6+ years)",
    "Lead/Principal (8+ years)",
];

pub const CATEGORIES: &[&str] = &[
    "Technology",
    "Design",
    "Marketing",
    "Business",
    "Finance",
    "Sales",
    "Human Resources",
    "Healthcare",
    "Education",
    "Engineering",
];

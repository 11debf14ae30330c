//! Fixed vocabularies the generators draw from
//!
//! Names come from curated lists rather than a fake-data corpus, so a seeded
//! run is fully reproducible. First and last names give about ten thousand
//! distinct `first.last` emails.

use worksim_shared::models::project::ProjectType;
use worksim_shared::models::team::TeamFunction;

pub const FIRST_NAMES: &[&str] = &[
    "Aaron", "Abigail", "Adrian", "Aisha", "Alejandro", "Alice", "Amara", "Amelia", "Ana", "Andre",
    "Anika", "Arjun", "Ava", "Ayumi", "Benjamin", "Bianca", "Bruno", "Caleb", "Camila", "Carlos",
    "Carmen", "Chen", "Chloe", "Daniel", "David", "Diana", "Divya", "Dmitri", "Elena", "Elif",
    "Elijah", "Emeka", "Emily", "Emma", "Ethan", "Farah", "Fatima", "Felix", "Freya", "Gabriel",
    "Grace", "Hana", "Hannah", "Hassan", "Hiroshi", "Hugo", "Ibrahim", "Ines", "Isabel", "Ivan",
    "Jamal", "James", "Jana", "Javier", "Julia", "Kai", "Kavya", "Kenji", "Khalid", "Lara",
    "Laura", "Leah", "Leon", "Liam", "Lina", "Lucas", "Lucia", "Maja", "Malik", "Marcus", "Maria",
    "Mateo", "Maya", "Mei", "Mohammed", "Nadia", "Naomi", "Nikhil", "Noah", "Nora", "Olivia",
    "Omar", "Oscar", "Paulo", "Priya", "Rafael", "Ravi", "Rosa", "Ruth", "Samuel", "Sara",
    "Sebastian", "Sofia", "Tariq", "Tomas", "Uma", "Valentina", "Victor", "Wei", "Yara", "Yusuf",
    "Zoe",
];

pub const LAST_NAMES: &[&str] = &[
    "Abara", "Adeyemi", "Ahmed", "Alvarez", "Anderson", "Andersson", "Bauer", "Becker", "Bianchi",
    "Brown", "Campbell", "Castillo", "Chen", "Clark", "Costa", "Cruz", "Davis", "Diaz", "Dubois",
    "Edwards", "Eriksen", "Evans", "Fernandez", "Fischer", "Flores", "Garcia", "Gomez", "Gonzalez",
    "Gupta", "Hall", "Hansen", "Hernandez", "Hoffmann", "Horvat", "Ibrahim", "Ito", "Ivanova",
    "Jackson", "Jansen", "Johnson", "Jones", "Kaur", "Khan", "Kim", "Kowalski", "Kumar", "Larsen",
    "Lee", "Lewis", "Lopez", "Martin", "Martinez", "Mehta", "Meyer", "Miller", "Moreau", "Morris",
    "Muller", "Murphy", "Nakamura", "Nelson", "Nguyen", "Novak", "Okafor", "Oliveira", "Ortiz",
    "Park", "Patel", "Perez", "Petrov", "Quinn", "Ramirez", "Reddy", "Reyes", "Richter", "Rivera",
    "Roberts", "Rossi", "Russo", "Sanchez", "Santos", "Sato", "Schmidt", "Schneider", "Silva",
    "Singh", "Smith", "Suzuki", "Tanaka", "Taylor", "Thomas", "Torres", "Turner", "Walker", "Wang",
    "Weber", "Williams", "Wilson", "Wright", "Yamamoto", "Young", "Zhang",
];

pub const JOB_TITLES: &[&str] = &[
    "Product Manager",
    "Backend Engineer",
    "Frontend Engineer",
    "Data Scientist",
    "Marketing Manager",
    "Content Strategist",
    "Sales Executive",
    "Customer Success Manager",
    "Operations Analyst",
];

pub const TIMEZONES: &[&str] = &["UTC", "US/Pacific", "US/Eastern", "Europe/Berlin", "Asia/Kolkata"];

pub const COLOR_NAMES: &[&str] = &[
    "Amber", "Azure", "Coral", "Crimson", "Cyan", "Emerald", "Gold", "Indigo", "Ivory", "Jade",
    "Lavender", "Magenta", "Maroon", "Navy", "Olive", "Orchid", "Scarlet", "Silver", "Teal",
    "Violet",
];

pub const DESCRIPTIVE_WORDS: &[&str] = &[
    "Atlas", "Beacon", "Bridge", "Compass", "Delta", "Ember", "Falcon", "Frontier", "Harbor",
    "Horizon", "Keystone", "Lighthouse", "Meridian", "Momentum", "Nova", "Orbit", "Pioneer",
    "Summit", "Vector", "Vista",
];

pub const SHORT_DESCRIPTION: &str =
    "Short task description with 1–3 sentences describing the work and expected outcome.";

pub const DETAILED_DESCRIPTION: &str = "Detailed task description:\n\
    - Context about the customer or feature.\n\
    - Steps required to complete the work.\n\
    - Acceptance criteria and edge cases.\n";

pub const COMMENT_BODIES: &[&str] = &[
    "Added more details based on stakeholder feedback.",
    "Please review before the end of sprint.",
    "Blocked on dependency from another team.",
    "Customer reported this again, increasing priority.",
    "Updated acceptance criteria to cover edge cases.",
];

pub const TAG_NAMES: [&str; 10] = [
    "Customer Escalation",
    "Tech Debt",
    "Regression",
    "Launch Blocker",
    "Nice to Have",
    "Churn Risk",
    "Security",
    "Performance",
    "UX Feedback",
    "Internal Only",
];

/// Project names a team of the given function picks from
pub fn project_names(function: TeamFunction) -> &'static [&'static str] {
    match function {
        TeamFunction::Engineering => &[
            "API Platform – Q1 Roadmap",
            "Billing Service – Reliability",
            "Auth Service – Hardening",
            "Data Pipeline – Refactor",
        ],
        TeamFunction::Marketing => &[
            "Product Launch – Q2 Campaign",
            "Content Calendar – Blog & SEO",
            "ABM – Enterprise Outreach",
            "Webinar Series – Customer Stories",
        ],
        TeamFunction::Sales => &[
            "Mid-Market Expansion Program",
            "Enterprise Pipeline – Q3",
            "Partner Co-Selling Motion",
        ],
        TeamFunction::Operations => &[
            "Onboarding Process Improvement",
            "Vendor Management Program",
            "Internal Tools Rollout",
        ],
    }
}

/// Task names for a project type
pub fn task_names(project_type: ProjectType) -> &'static [&'static str] {
    match project_type {
        ProjectType::ProductDev => &[
            "Auth – Fix token refresh bug",
            "Billing – Implement proration logic",
            "Dashboard – Add usage analytics widget",
            "API – Improve rate limiting error messages",
            "Data – Backfill missing usage events",
        ],
        ProjectType::Marketing => &[
            "Q2 Launch – Draft landing page copy",
            "SEO – Update pillar page internal links",
            "Email – Set up nurture sequence",
            "Webinar – Confirm speakers and schedule",
            "Social – Prepare launch announcement assets",
        ],
        ProjectType::Operations => &[
            "Onboarding – Update checklist for new hires",
            "Vendor – Review contract renewals",
            "Finance – Reconcile monthly invoices",
            "Support – Document escalation playbook",
        ],
    }
}

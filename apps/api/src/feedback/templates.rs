// Static texts returned alongside every analysed resume.

/// Cover letter template. Replace `{skills}` before returning.
/// The bracketed placeholders are left for the candidate to fill in.
pub const COVER_LETTER_TEMPLATE: &str = r#"Dear Hiring Manager,

I am writing to express my keen interest in a role at your company. With a strong foundation in technologies like {skills}, I am confident that I possess the skills and experience necessary to be a valuable asset to your team.

My resume highlights my ability to [mention a key achievement from your resume, e.g., 'lead projects to successful completion' or 'develop efficient and scalable software solutions']. I am particularly drawn to this opportunity because [mention something specific about the company or role].

I am eager to learn more about this opportunity and discuss how my background can contribute to your organization's success. Thank you for your time and consideration.

Sincerely,
[Your Name]
"#;

pub const ANALYSIS_MISTAKES: [&str; 3] = [
    "Resume lacks a professional summary. A summary helps recruiters quickly understand your background.",
    "Some bullet points are descriptive rather than achievement-oriented. Use action verbs and quantify results.",
    "Contact information could be more prominent.",
];

pub const ANALYSIS_SUGGESTIONS: [&str; 3] = [
    "Add a 2-3 sentence 'Professional Summary' at the top highlighting your key skills and career goals.",
    "Rewrite bullet points to show impact. Instead of 'Worked on a project', try 'Developed a feature that increased user engagement by 15%'.",
    "Ensure your email, phone number, and LinkedIn profile URL are clearly visible at the top of the resume.",
];

use crate::models::job::Job;

/// The fixed job board served by `/jobs/`.
pub fn mock_jobs() -> Vec<Job> {
    vec![
        job(
            1,
            "Frontend Developer",
            "We're looking for a skilled frontend developer with React experience.",
            &["React", "JavaScript", "CSS", "HTML"],
        ),
        job(
            2,
            "Backend Developer",
            "Backend developer with Python and FastAPI experience needed.",
            &["Python", "FastAPI", "SQL", "API Design"],
        ),
        job(
            3,
            "Full Stack Developer",
            "Full stack developer with React and Python experience.",
            &["React", "Python", "JavaScript", "FastAPI"],
        ),
    ]
}

fn job(id: u64, title: &str, description: &str, skills: &[&str]) -> Job {
    Job {
        id,
        title: title.to_string(),
        description: description.to_string(),
        skills_required: skills.iter().map(|s| s.to_string()).collect(),
    }
}

// Prompt templates for the model gateway. Placeholders are filled with
// llm_client::prompts::render.

/// Replace `{text}`.
pub const SKILL_EXTRACTION_PROMPT: &str = "\
Extract a concise and precise list of technical skills, separated by commas, from the following text. \
Do not include job titles or non-technical skills. \
Respond with the comma-separated list only.

{text}";

/// Replace `{skills}` and `{json_only}`.
pub const JOB_RECOMMENDATION_PROMPT: &str = r#"Based on the provided skills, recommend suitable job roles categorized by experience level ("junior", "mid", "senior").

Skills: {skills}

Return a JSON object in this precise format:
{
  "junior": ["Job Title 1", "Job Title 2"],
  "mid": ["Job Title 3", "Job Title 4"],
  "senior": ["Job Title 5"]
}

{json_only}"#;

/// Replace `{skills}` and `{job_desc}`.
pub const COVER_LETTER_PROMPT: &str = "\
Generate a concise cover letter highlighting the following skills for the given job description.

Resume Skills: {skills}
Job Description: {job_desc}";

/// Replace `{text}` and `{json_only}`.
pub const CANDIDATE_PROFILE_PROMPT: &str = r#"From the following resume text, extract the candidate's name, a comma-separated list of their technical skills, their email address, and their phone number.

Return a JSON object with exactly these keys, each a string or null when not found:
{
  "name": "Jane Doe",
  "skills": "python, sql, docker",
  "email": "jane@example.com",
  "phone": "+1 555 0100"
}

{json_only}

Text:
{text}"#;

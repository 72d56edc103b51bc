/// System persona for resume rewriting.
pub const RESUME_WRITER_SYSTEM: &str = "You are an expert resume writer.";

/// Builds the rewrite instruction. Both values are embedded verbatim.
pub fn build_enhance_prompt(resume_text: &str, target_role: &str) -> String {
    format!(
        "Improve the following resume for the role of {target_role}.\n\
         Make it professional, ATS-friendly, concise, and keyword optimized.\n\
         \n\
         Resume:\n\
         {resume_text}"
    )
}

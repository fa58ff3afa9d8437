use crate::{
    error::{AppError, AppResult},
    models::Candidate,
};

/// Extracts movie candidates from a text-generator reply
///
/// Tolerates markdown code fences and chatter around the JSON array. A bare
/// object is read as a one-element list. Entries without a title are dropped.
pub fn parse_candidates(reply: &str) -> AppResult<Vec<Candidate>> {
    let body = strip_code_fence(reply).trim();

    let json = match (body.find('['), body.rfind(']')) {
        (Some(start), Some(end)) if start < end => body[start..=end].to_string(),
        _ => format!("[{}]", body),
    };

    let candidates: Vec<Candidate> = serde_json::from_str(&json)
        .map_err(|e| AppError::Parse(format!("invalid candidate list: {}", e)))?;

    let candidates: Vec<Candidate> = candidates
        .into_iter()
        .filter(|candidate| !candidate.title.trim().is_empty())
        .map(|mut candidate| {
            candidate.title = candidate.title.trim().to_string();
            candidate
        })
        .collect();

    if candidates.is_empty() {
        return Err(AppError::Parse("reply contained no candidates".to_string()));
    }

    Ok(candidates)
}

fn strip_code_fence(text: &str) -> &str {
    let Some(open) = text.find("```") else {
        return text;
    };

    let rest = &text[open + 3..];
    let rest = rest.strip_prefix("json").unwrap_or(rest);

    match rest.rfind("```") {
        Some(close) => &rest[..close],
        None => rest,
    }
}

pub fn git_commit_hash() -> &'static str {
    match option_env!("AUTHPORTAL_WEB_GIT_SHA") {
        Some(value) if !value.is_empty() => value,
        _ => "unknown",
    }
}

/// First seven characters of the commit hash, or `"dev"` outside git builds.
pub fn short_commit_hash() -> &'static str {
    let hash = git_commit_hash();
    if hash.len() >= 7 && hash.is_char_boundary(7) && hash != "unknown" {
        &hash[..7]
    } else {
        "dev"
    }
}

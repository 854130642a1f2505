use std::process::Command;

/// Owner and name of the GitHub repository for the current directory, if any
pub fn get_current_repo() -> Option<(String, String)> {
    let output = Command::new("git")
        .args(["remote", "get-url", "origin"])
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }

    let url = String::from_utf8_lossy(&output.stdout).trim().to_string();
    parse_github_url(&url)
}

/// Extract (owner, repo) from an SSH or HTTPS GitHub remote URL
pub fn parse_github_url(url: &str) -> Option<(String, String)> {
    // SSH: git@github.com:owner/repo.git
    // HTTPS: https://github.com/owner/repo.git
    let path = if let Some(rest) = url.strip_prefix("git@github.com:") {
        rest
    } else if url.contains("github.com") {
        url.split("github.com")
            .nth(1)?
            .trim_start_matches(|c| c == '/' || c == ':')
    } else {
        return None;
    };

    let path = path.strip_suffix(".git").unwrap_or(path);
    let mut parts = path.split('/');
    let owner = parts.next()?;
    let repo = parts.next()?;
    if owner.is_empty() || repo.is_empty() {
        return None;
    }

    Some((owner.to_string(), repo.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ssh_remote() {
        assert_eq!(
            parse_github_url("git@github.com:webcompat/web-bugs.git"),
            Some(("webcompat".to_string(), "web-bugs".to_string()))
        );
    }

    #[test]
    fn parses_https_remote() {
        assert_eq!(
            parse_github_url("https://github.com/webcompat/web-bugs.git"),
            Some(("webcompat".to_string(), "web-bugs".to_string()))
        );
    }

    #[test]
    fn parses_remote_without_git_suffix() {
        assert_eq!(
            parse_github_url("https://github.com/webcompat/web-bugs"),
            Some(("webcompat".to_string(), "web-bugs".to_string()))
        );
    }

    #[test]
    fn rejects_non_github_remote() {
        assert_eq!(parse_github_url("https://gitlab.com/foo/bar.git"), None);
    }

    #[test]
    fn rejects_url_without_repo() {
        assert_eq!(parse_github_url("https://github.com/webcompat"), None);
        assert_eq!(parse_github_url("https://github.com/webcompat/"), None);
    }
}

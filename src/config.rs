
/// Third-party contact form, embedded as-is.
pub const CONTACT_FORM_URL: &str = "https://clients.sonoreviews.com/widget/form/qgEwrwA0T2Cpp90yzBWl";

/// Base path the site is served under. On GitHub Actions `GITHUB_REPOSITORY`
/// is `owner/repo` and project pages live at `/repo/`; everywhere else it's `/`.
pub fn base_path_for(repository: Option<&str>) -> String {
    repository
        .and_then(|r| r.split('/').nth(1))
        .filter(|repo| !repo.is_empty())
        .map(|repo| format!("/{}/", repo))
        .unwrap_or_else(|| "/".to_string())
}

pub fn asset_base() -> String {
    base_path_for(option_env!("GITHUB_REPOSITORY"))
}

pub fn asset_url(path: &str) -> String {
    format!("{}{}", asset_base(), path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_builds_serve_from_root() {
        assert_eq!(base_path_for(None), "/");
        assert_eq!(base_path_for(Some("")), "/");
    }

    #[test]
    fn ci_builds_serve_from_repo_name() {
        assert_eq!(base_path_for(Some("stelliform/site")), "/site/");
    }

    #[test]
    fn repository_without_name_falls_back_to_root() {
        assert_eq!(base_path_for(Some("stelliform")), "/");
        assert_eq!(base_path_for(Some("stelliform/")), "/");
    }

    #[test]
    fn asset_urls_have_a_single_slash() {
        let url = asset_url("/hero.mp4");
        assert!(url.ends_with("/hero.mp4"));
        assert!(!url.contains("//"));
    }

    #[test]
    fn contact_form_url_is_passed_through() {
        assert!(CONTACT_FORM_URL.starts_with("https://clients.sonoreviews.com/widget/form/"));
    }
}

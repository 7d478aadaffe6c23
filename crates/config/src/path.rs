use itertools::Itertools;

static SLUG_INVALID_CHARS: once_cell::sync::Lazy<regex::Regex> =
    once_cell::sync::Lazy::new(|| regex::Regex::new(r"([^a-zA-Z0-9]+)").unwrap());

/// Create an ASCII slug for a heading, transliterating non-latin text.
pub fn slugify<S: AsRef<str>>(name: S) -> String {
    slugify_str(name.as_ref())
}

fn slugify_str(name: &str) -> String {
    let name = deunicode::deunicode_with_tofu(name, "-");
    let slug = SLUG_INVALID_CHARS.replace_all(&name, "-");
    slug.trim_matches('-').to_lowercase()
}

#[cfg(test)]
mod test_slug {
    use super::*;

    #[test]
    fn test_slugify() {
        let actual = slugify("___filE-worlD-__09___");
        assert_eq!(actual, "file-world-09");
    }

    #[test]
    fn test_slugify_cjk() {
        let actual = slugify("开始使用");
        assert_eq!(actual, "kai-shi-shi-yong");
    }

    #[test]
    fn test_slugify_mixed() {
        let actual = slugify("Dummy 文档");
        assert_eq!(actual, "dummy-wen-dang");
    }
}

pub fn split_ext(name: &str) -> (&str, Option<&str>) {
    name.rsplit_once('.')
        .map(|(n, e)| (n, Some(e)))
        .unwrap_or_else(|| (name, None))
}

/// Normalize a document path to the slash-separated, root-relative form
/// renderers substitute into URL templates.
pub fn normalize_doc_path(path: &str) -> String {
    // Handle the user doing windows-style
    let path = path.replace('\\', "/");
    path.split('/')
        .filter(|s| !s.is_empty() && *s != ".")
        .join("/")
}

#[cfg(test)]
mod test_normalize {
    use super::*;

    #[test]
    fn normalize_doc_path_plain() {
        assert_eq!(
            normalize_doc_path("guides/admin-guide.md"),
            "guides/admin-guide.md"
        );
    }

    #[test]
    fn normalize_doc_path_leading_slash() {
        assert_eq!(normalize_doc_path("/adapters/uoj.md"), "adapters/uoj.md");
    }

    #[test]
    fn normalize_doc_path_windows() {
        assert_eq!(
            normalize_doc_path(r"guides\dev-guide.md"),
            "guides/dev-guide.md"
        );
    }

    #[test]
    fn normalize_doc_path_blank_segments() {
        assert_eq!(normalize_doc_path("./guides//index.md"), "guides/index.md");
    }

    #[test]
    fn split_ext_none() {
        assert_eq!(split_ext("admin-guide"), ("admin-guide", None));
    }

    #[test]
    fn split_ext_some() {
        assert_eq!(split_ext("admin-guide.html"), ("admin-guide", Some("html")));
    }
}

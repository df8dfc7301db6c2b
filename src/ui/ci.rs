//! GitHub Actions workflow commands.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationLevel {
    Warning,
    Error,
}

impl AnnotationLevel {
    fn as_str(self) -> &'static str {
        match self {
            AnnotationLevel::Warning => "warning",
            AnnotationLevel::Error => "error",
        }
    }
}

/// `::error file=...,title=stowbox::message`
pub fn github_annotation(level: AnnotationLevel, message: &str, file: Option<&str>) -> String {
    let mut props = Vec::new();
    if let Some(file) = file {
        props.push(format!("file={}", escape(file)));
    }
    props.push("title=stowbox".to_string());

    format!("::{} {}::{}", level.as_str(), props.join(","), escape(message))
}

pub fn in_github_actions() -> bool {
    std::env::var_os("GITHUB_ACTIONS").is_some()
}

fn escape(s: &str) -> String {
    s.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}

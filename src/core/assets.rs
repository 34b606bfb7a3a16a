//! Embedded workspace document templates.
//!
//! The four core documents are baked into the binary so provisioning works
//! with no external files installed. Templates are the "absent credentials"
//! rendition of each document; `PROFILE.md` in particular is what profile
//! synchronization falls back to when the org config source is unavailable.

/// Macro to embed workspace document templates at compile time as text.
macro_rules! embedded_templates {
    ($($name:expr => $const_name:ident),* $(,)?) => {
        $(
            pub const $const_name: &str =
                include_str!(concat!("../../templates/", $name));
        )*

        pub fn get_template(name: &str) -> Option<&'static str> {
            match name {
                $( $name => Some($const_name), )*
                _ => None,
            }
        }

        pub fn list_templates() -> Vec<&'static str> {
            vec![ $( $name, )* ]
        }
    };
}

embedded_templates! {
    "PROFILE.md" => TEMPLATE_PROFILE,
    "STYLE.md" => TEMPLATE_STYLE,
    "TOOLS.md" => TEMPLATE_TOOLS,
    "DECISIONS.md" => TEMPLATE_DECISIONS,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_listed_templates_resolve_nonempty() {
        for name in list_templates() {
            let content = get_template(name).expect("listed template should resolve");
            assert!(!content.trim().is_empty(), "{} is empty", name);
        }
    }

    #[test]
    fn unknown_template_is_none() {
        assert!(get_template("BUDGET.md").is_none());
    }
}

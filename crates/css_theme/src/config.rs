//! Typed TOML configuration loading.

use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::error::{ThemeError, ThemeResult};
use crate::theme::Theme;

/// Generic TOML-backed config loader.
///
/// `ConfigLoader<T>` handles only filesystem access and TOML deserialization. Semantic checks
/// (such as variable name validation) happen while `T` deserializes.
///
/// ```rust
/// # use std::path::Path;
/// # use css_theme::{ConfigLoader, Theme};
/// let loader = ConfigLoader::<Theme>::new(Path::new("/workspace"), "themes/dark.toml");
/// assert!(loader.path().ends_with("themes/dark.toml"));
/// ```
#[derive(Clone, Debug)]
pub struct ConfigLoader<T> {
    path: PathBuf,
    _marker: PhantomData<T>,
}

impl<T> ConfigLoader<T>
where
    T: DeserializeOwned,
{
    /// Create a loader for the given root-relative path.
    pub fn new(root: &Path, relative_path: &str) -> Self {
        Self::at(root.join(relative_path))
    }

    /// Create a loader for an explicit path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _marker: PhantomData,
        }
    }

    /// Load and deserialize the configuration file.
    ///
    /// Missing files, unreadable files, and TOML parse failures are all surfaced as
    /// [`ThemeErrorCategory::Config`](crate::error::ThemeErrorCategory::Config) errors targeting
    /// the config path.
    pub fn load(&self) -> ThemeResult<T> {
        tracing::debug!(path = %self.path.display(), "loading theme config");
        let body = fs::read_to_string(&self.path).map_err(|err| {
            ThemeError::config(format!("failed to read config: {err}")).with_path(&self.path)
        })?;
        toml::from_str(&body).map_err(|err| {
            ThemeError::config(format!("failed to parse config: {err}"))
                .with_path(&self.path)
                .with_hint("see the [colors], [typography], [body], [button], [card], [modal] and [[custom]] tables")
        })
    }

    /// Return the config path on disk.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Loads a [`Theme`] from a TOML file.
pub fn load_theme(path: &Path) -> ThemeResult<Theme> {
    ConfigLoader::<Theme>::at(path).load()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::ThemeErrorCategory;
    use crate::variable::DeclarationKind;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_test_root() -> PathBuf {
        std::env::temp_dir().join(format!(
            "css-theme-config-test-{}",
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .expect("time")
                .as_nanos()
        ))
    }

    #[test]
    fn load_reads_theme_tables() {
        let root = unique_test_root();
        fs::create_dir_all(root.join("themes")).expect("create theme dir");
        fs::write(
            root.join("themes/brand.toml"),
            r##"
name = "Brand"

[colors]
primary = "#6f42c1"

[body]
font_family = "Inter, sans-serif"

[[custom]]
selector = ".sidebar"

[[custom.variables]]
name = "sidebar-width"
value = "16rem"

[[custom.variables]]
name = "overflow-y"
value = "auto"
kind = "property"
"##,
        )
        .expect("write theme");

        let theme = ConfigLoader::<Theme>::new(&root, "themes/brand.toml")
            .load()
            .expect("load theme");
        assert_eq!(theme.name.as_deref(), Some("Brand"));
        assert_eq!(theme.colors.primary.as_deref(), Some("#6f42c1"));
        assert_eq!(theme.custom.len(), 1);
        assert_eq!(theme.custom[0].variables[1].kind, DeclarationKind::Property);
        assert_eq!(
            theme.to_stylesheet(),
            ":root {\n  --bs-primary: #6f42c1;\n}\n\
             \n\
             body {\n  font-family: Inter, sans-serif;\n}\n\
             \n\
             .sidebar {\n  --sidebar-width: 16rem;\n  overflow-y: auto;\n}\n"
        );

        let _ = fs::remove_dir_all(root);
    }

    #[test]
    fn load_reports_missing_file_as_config_error() {
        let root = unique_test_root();
        let err = load_theme(&root.join("missing.toml")).expect_err("missing theme should fail");
        assert_eq!(err.category, ThemeErrorCategory::Config);
        assert!(err.to_string().contains("missing.toml"));
    }

    #[test]
    fn load_rejects_invalid_variable_names() {
        let root = unique_test_root();
        fs::create_dir_all(&root).expect("create temp root");
        let path = root.join("invalid.toml");
        fs::write(
            &path,
            "[[custom]]\nselector = \":root\"\n\n[[custom.variables]]\nname = \"--double\"\nvalue = \"1\"\n",
        )
        .expect("write theme");

        let err = load_theme(&path).expect_err("prefixed name should fail");
        assert_eq!(err.category, ThemeErrorCategory::Config);
        assert!(err.message.contains("--double"));

        let _ = fs::remove_dir_all(root);
    }

    #[test]
    fn load_rejects_unknown_fields() {
        let root = unique_test_root();
        fs::create_dir_all(&root).expect("create temp root");
        let path = root.join("typo.toml");
        fs::write(&path, "[colors]\nprimry = \"#000\"\n").expect("write theme");

        let err = load_theme(&path).expect_err("unknown field should fail");
        assert_eq!(err.category, ThemeErrorCategory::Config);
        assert!(err.hint.is_some());

        let _ = fs::remove_dir_all(root);
    }

    #[test]
    fn load_rejects_blank_custom_selector() {
        let root = unique_test_root();
        fs::create_dir_all(&root).expect("create temp root");
        let path = root.join("blank-selector.toml");
        fs::write(
            &path,
            "[[custom]]\nselector = \"\"\n\n[[custom.variables]]\nname = \"gap\"\nvalue = \"1rem\"\n",
        )
        .expect("write theme");

        let err = load_theme(&path).expect_err("blank selector should fail");
        assert_eq!(err.category, ThemeErrorCategory::Config);
        assert!(err.message.contains("selector must not be blank"));
        assert!(err.to_string().contains("blank-selector.toml"));

        let _ = fs::remove_dir_all(root);
    }
}

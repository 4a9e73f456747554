//! Quiz settings loader.
//!
//! Loads and merges:
//! - System defaults: `<PRJ_ROOT>/packages/conf/quiz.yaml`
//! - User overrides:  `<PRJ_CONFIG_HOME>/omni-quiz/settings.yaml`
//!
//! Merge precedence is user over system, field by field.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use serde::Deserialize;

use omni_quiz::FactorCoverage;

const DEFAULT_SYSTEM_SETTINGS_RELATIVE_PATH: &str = "packages/conf/quiz.yaml";
const DEFAULT_USER_SETTINGS_RELATIVE_PATH: &str = "omni-quiz/settings.yaml";
const DEFAULT_CONFIG_HOME_RELATIVE_PATH: &str = ".config";
const DEFAULT_DATA_DIR_RELATIVE_PATH: &str = "packages/data/quiz";
const DEFAULT_QUESTIONS_FILE: &str = "questions.txt";
static CONFIG_HOME_OVERRIDE: OnceLock<PathBuf> = OnceLock::new();

/// Merged quiz settings. Every field is optional; accessors apply defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizSettings {
    #[serde(default)]
    pub quiz: QuizSection,
    /// Explicit catalog menu. When absent, `*.people` files are discovered.
    #[serde(default)]
    pub catalogs: Option<Vec<CatalogEntry>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizSection {
    pub data_dir: Option<PathBuf>,
    pub questions_file: Option<String>,
    pub question_count: Option<usize>,
    pub coverage: Option<FactorCoverage>,
    pub seed: Option<u64>,
}

/// One catalog menu entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    /// File name, relative to the data directory unless absolute.
    pub file: PathBuf,
}

impl QuizSettings {
    fn merge(self, overlay: Self) -> Self {
        Self {
            quiz: self.quiz.merge(overlay.quiz),
            catalogs: overlay.catalogs.or(self.catalogs),
        }
    }

    /// Data directory, resolved against `project_root` when relative.
    #[must_use]
    pub fn data_dir(&self, project_root: &Path) -> PathBuf {
        let configured = self
            .quiz
            .data_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR_RELATIVE_PATH));
        under_root(project_root, &configured)
    }

    /// Question file inside `data_dir`.
    #[must_use]
    pub fn questions_path(&self, data_dir: &Path) -> PathBuf {
        let file = self
            .quiz
            .questions_file
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_QUESTIONS_FILE);
        under_root(data_dir, Path::new(file))
    }

    /// Similarity coverage, defaulting to union.
    #[must_use]
    pub fn coverage(&self) -> FactorCoverage {
        self.quiz.coverage.unwrap_or_default()
    }
}

impl QuizSection {
    fn merge(self, overlay: Self) -> Self {
        Self {
            data_dir: overlay.data_dir.or(self.data_dir),
            questions_file: overlay.questions_file.or(self.questions_file),
            question_count: overlay.question_count.or(self.question_count),
            coverage: overlay.coverage.or(self.coverage),
            seed: overlay.seed.or(self.seed),
        }
    }
}

/// Load settings from the default system and user locations.
pub fn load_quiz_settings() -> QuizSettings {
    let (system_path, user_path) = quiz_settings_paths();
    load_quiz_settings_from_paths(&system_path, &user_path)
}

#[doc(hidden)]
pub fn quiz_settings_paths() -> (PathBuf, PathBuf) {
    let root = project_root();
    let system_path = root.join(DEFAULT_SYSTEM_SETTINGS_RELATIVE_PATH);
    let user_path = resolve_config_home(&root).join(DEFAULT_USER_SETTINGS_RELATIVE_PATH);
    (system_path, user_path)
}

#[doc(hidden)]
pub fn load_quiz_settings_from_paths(system: &Path, user: &Path) -> QuizSettings {
    load_one(system).merge(load_one(user))
}

fn load_one(path: &Path) -> QuizSettings {
    if !path.exists() {
        return QuizSettings::default();
    }
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(error) => {
            tracing::warn!(
                path = %path.display(),
                error = %error,
                "failed to read settings file; ignoring"
            );
            return QuizSettings::default();
        }
    };
    match serde_yaml::from_str::<QuizSettings>(&raw) {
        Ok(value) => {
            tracing::debug!(path = %path.display(), "loaded quiz settings");
            value
        }
        Err(error) => {
            tracing::warn!(
                path = %path.display(),
                error = %error,
                "failed to parse settings yaml; ignoring file"
            );
            QuizSettings::default()
        }
    }
}

/// `PRJ_ROOT`, or the current directory.
#[must_use]
pub fn project_root() -> PathBuf {
    env_path("PRJ_ROOT")
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

/// Point the user settings lookup at `dir` (CLI `--conf`).
///
/// Relative directories resolve against the project root. Only the first
/// call takes effect.
pub fn set_config_home_override(dir: impl Into<PathBuf>) {
    let dir = dir.into();
    if dir.as_os_str().is_empty() {
        return;
    }
    if let Err(rejected) = CONFIG_HOME_OVERRIDE.set(dir)
        && CONFIG_HOME_OVERRIDE.get() != Some(&rejected)
    {
        tracing::warn!(
            rejected = %rejected.display(),
            "quiz config home already chosen; keeping the first --conf"
        );
    }
}

fn resolve_config_home(project_root: &Path) -> PathBuf {
    let home = CONFIG_HOME_OVERRIDE
        .get()
        .cloned()
        .or_else(|| env_path("PRJ_CONFIG_HOME"))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_HOME_RELATIVE_PATH));
    under_root(project_root, &home)
}

/// Trimmed, non-empty environment variable as a path.
fn env_path(name: &str) -> Option<PathBuf> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// `path` unchanged when absolute, otherwise joined onto `root`.
fn under_root(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

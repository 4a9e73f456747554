//! Parser for the line-oriented record files.
//!
//! One record per line: `<text>.<sep><factor>:<weight> <factor>:<weight> ...`
//! The text (or profile name) runs up to the first `.`; the rest is a list of
//! whitespace-separated factor tokens. Blank lines are skipped.
//!
//! ```text
//! I like to make plans. O:-1 C:1
//! Planner. O:-1 C:1 E:0
//! ```

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::error::QuizError;
use crate::record::{FactorId, Profile, Question};

/// Errors while reading or parsing record files.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("unable to open {}: {source}", path.display())]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// A line does not follow the record format.
    #[error("line {line}: {message}")]
    Syntax {
        /// 1-based line number.
        line: usize,
        /// What went wrong.
        message: String,
    },

    /// A line parsed but the record is invalid.
    #[error("line {line}: {source}")]
    Record {
        /// 1-based line number.
        line: usize,
        /// Validation failure.
        source: QuizError,
    },
}

impl LoadError {
    fn syntax(line: usize, message: impl Into<String>) -> Self {
        Self::Syntax {
            line,
            message: message.into(),
        }
    }
}

/// Label plus factor pairs of one record line.
type RecordParts = (String, Vec<(FactorId, i32)>);

/// Split a record line into its label and factor pairs.
///
/// Returns `Ok(None)` for blank lines.
fn split_record(line_no: usize, line: &str) -> Result<Option<RecordParts>, LoadError> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return Ok(None);
    }
    let (label, rest) = line
        .split_once('.')
        .ok_or_else(|| LoadError::syntax(line_no, "missing '.' after record text"))?;

    let factors = rest
        .split_whitespace()
        .map(|token| parse_factor(line_no, token))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Some((label.trim().to_string(), factors)))
}

fn parse_factor(line_no: usize, token: &str) -> Result<(FactorId, i32), LoadError> {
    let (factor, value) = token.split_once(':').ok_or_else(|| {
        LoadError::syntax(line_no, format!("expected <factor>:<value>, got {token:?}"))
    })?;
    let mut chars = factor.chars();
    let id = match (chars.next(), chars.next()) {
        (Some(id), None) => id,
        _ => {
            return Err(LoadError::syntax(
                line_no,
                format!("factor id must be one character, got {factor:?}"),
            ));
        }
    };
    let value = value
        .parse::<i32>()
        .map_err(|e| LoadError::syntax(line_no, format!("bad value for factor {id:?}: {e}")))?;
    Ok((id, value))
}

/// Parse a single question line.
///
/// # Errors
///
/// Syntax errors, or a question with no factors or a weight other than ±1.
pub fn parse_question_line(line_no: usize, line: &str) -> Result<Option<Question>, LoadError> {
    let Some((text, factors)) = split_record(line_no, line)? else {
        return Ok(None);
    };
    Question::new(text, factors)
        .map(Some)
        .map_err(|source| LoadError::Record {
            line: line_no,
            source,
        })
}

/// Parse a single profile line. Lines with an empty name are skipped.
///
/// # Errors
///
/// Syntax errors only; any integer score is accepted.
pub fn parse_profile_line(line_no: usize, line: &str) -> Result<Option<Profile>, LoadError> {
    let Some((name, factors)) = split_record(line_no, line)? else {
        return Ok(None);
    };
    if name.is_empty() {
        log::debug!("line {line_no}: skipping profile without a name");
        return Ok(None);
    }
    Ok(Some(Profile::new(name, factors)))
}

/// Parse a whole question file body into a text-ordered pool.
///
/// A repeated question text keeps its first occurrence.
///
/// # Errors
///
/// The first malformed line.
pub fn parse_questions(content: &str) -> Result<BTreeSet<Question>, LoadError> {
    let mut pool = BTreeSet::new();
    for (idx, line) in content.lines().enumerate() {
        if let Some(question) = parse_question_line(idx + 1, line)?
            && !pool.insert(question)
        {
            log::debug!("line {}: duplicate question text ignored", idx + 1);
        }
    }
    Ok(pool)
}

/// Parse a whole profile file body, in file order.
///
/// # Errors
///
/// The first malformed line.
pub fn parse_profiles(content: &str) -> Result<Vec<Profile>, LoadError> {
    let mut profiles = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        if let Some(profile) = parse_profile_line(idx + 1, line)? {
            profiles.push(profile);
        }
    }
    Ok(profiles)
}

fn read(path: &Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and parse a question file.
///
/// # Errors
///
/// IO failures and malformed lines.
pub fn load_questions(path: impl AsRef<Path>) -> Result<BTreeSet<Question>, LoadError> {
    let path = path.as_ref();
    let pool = parse_questions(&read(path)?)?;
    log::info!("Loaded {} questions from {}", pool.len(), path.display());
    Ok(pool)
}

/// Read and parse a profile file.
///
/// # Errors
///
/// IO failures and malformed lines.
pub fn load_profiles(path: impl AsRef<Path>) -> Result<Vec<Profile>, LoadError> {
    let path = path.as_ref();
    let profiles = parse_profiles(&read(path)?)?;
    log::info!("Loaded {} profiles from {}", profiles.len(), path.display());
    Ok(profiles)
}

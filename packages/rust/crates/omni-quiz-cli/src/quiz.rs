//! Quiz flows: the interactive session and the one-shot match.

use std::collections::BTreeSet;
use std::io::{BufRead, Write};

use anyhow::{Context, Result, anyhow, bail};
use rand::Rng;
use serde::Serialize;

use omni_quiz::{Match, Matcher, Question, QuizSession, RawScores, clamp_question_count};

use crate::catalogs::CatalogSource;
use crate::prompt::Prompter;

/// Options for an interactive run.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Requested question count; prompted when `None` or out of range.
    pub question_count: Option<usize>,
    /// Emit JSON lines instead of prose.
    pub json: bool,
    pub matcher: Matcher,
}

/// One match result as printed with `--json`.
#[derive(Debug, Serialize)]
pub struct MatchReport<'a> {
    pub catalog: &'a str,
    pub rank: usize,
    pub name: &'a str,
    pub similarity: f64,
}

impl<'a> MatchReport<'a> {
    fn new(catalog: &'a str, rank: usize, found: &Match<'a>) -> Self {
        Self {
            catalog,
            rank,
            name: found.profile.name(),
            similarity: found.similarity,
        }
    }
}

/// Ask questions, then compare the answers against catalogs until the user
/// quits. Returns the raw scores the comparisons used.
///
/// # Errors
///
/// Fails on IO errors, an empty question pool, no catalogs, or input ending before every
/// question is answered. Catalog and match failures are reported and the menu
/// continues.
pub fn run_interactive<R, W, G>(
    prompter: &mut Prompter<R, W>,
    pool: BTreeSet<Question>,
    rng: G,
    catalogs: &[CatalogSource],
    options: &RunOptions,
) -> Result<RawScores>
where
    R: BufRead,
    W: Write,
    G: Rng,
{
    if pool.is_empty() {
        bail!("no questions available");
    }
    if catalogs.is_empty() {
        bail!("no catalogs to match against; add `.people` files or a `catalogs` list in settings");
    }
    let count = match options
        .question_count
        .and_then(|requested| clamp_question_count(requested, pool.len()))
    {
        Some(count) => count,
        None => prompter.ask_question_count(pool.len())?,
    };
    tracing::info!(count, pool = pool.len(), "starting quiz");

    let mut session = QuizSession::new(pool, rng);
    for _ in 0..count {
        let question = session.next_question()?;
        let answer = prompter.ask_answer(&question)?;
        session.answer(question, answer);
    }
    let scores = session.scores();
    tracing::debug!(?scores, "aggregated answers");

    while let Some(choice) = prompter.choose_catalog(catalogs)? {
        let source = &catalogs[choice];
        if let Err(error) = report_best(prompter.output(), source, &scores, options) {
            tracing::warn!(catalog = %source.name, error = %error, "match failed");
            writeln!(prompter.output(), "\nError: {error:#}")?;
        }
    }
    writeln!(prompter.output(), "Goodbye!")?;
    Ok(scores)
}

fn report_best<W: Write>(
    out: &mut W,
    source: &CatalogSource,
    scores: &RawScores,
    options: &RunOptions,
) -> Result<()> {
    let catalog = source.load()?;
    let found = catalog
        .best_match(&options.matcher, scores)
        .with_context(|| format!("cannot match against {}", source.name))?;
    if options.json {
        // the menu prompt leaves its line open
        writeln!(out)?;
        let report = MatchReport::new(catalog.name(), 1, &found);
        writeln!(out, "{}", serde_json::to_string(&report)?)?;
    } else {
        writeln!(out, "\nYou got {}!", found.profile.name())?;
    }
    Ok(())
}

/// Match raw scores against one catalog and print the best (or top `k`).
///
/// # Errors
///
/// Fails if the catalog cannot be loaded or matching fails.
pub fn run_match<W: Write>(
    out: &mut W,
    source: &CatalogSource,
    scores: &RawScores,
    top: Option<usize>,
    json: bool,
    matcher: &Matcher,
) -> Result<()> {
    let catalog = source.load()?;
    let ranked = match top {
        Some(k) => {
            let mut ranked = matcher.rank(scores, &catalog)?;
            ranked.truncate(k.max(1));
            ranked
        }
        None => vec![catalog.best_match(matcher, scores)?],
    };

    for (idx, found) in ranked.iter().enumerate() {
        if json {
            let report = MatchReport::new(catalog.name(), idx + 1, found);
            writeln!(out, "{}", serde_json::to_string(&report)?)?;
        } else if top.is_some() {
            writeln!(
                out,
                "{:>2}. {} ({:.3})",
                idx + 1,
                found.profile.name(),
                found.similarity
            )?;
        } else {
            writeln!(out, "You got {}!", found.profile.name())?;
        }
    }
    Ok(())
}

/// Parse `O=2,C=-1` style raw scores. Later duplicates overwrite earlier ones.
///
/// # Errors
///
/// Fails on a malformed pair or an empty list.
pub fn parse_scores(input: &str) -> Result<RawScores> {
    let mut scores = RawScores::new();
    for pair in input.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let (factor, value) = pair
            .split_once(['=', ':'])
            .ok_or_else(|| anyhow!("expected <factor>=<score>, got {pair:?}"))?;
        let mut chars = factor.trim().chars();
        let (Some(id), None) = (chars.next(), chars.next()) else {
            bail!("factor id must be one character, got {factor:?}");
        };
        let value: i32 = value
            .trim()
            .parse()
            .with_context(|| format!("bad score for factor {id:?}"))?;
        scores.insert(id, value);
    }
    if scores.is_empty() {
        bail!("no scores given");
    }
    Ok(scores)
}

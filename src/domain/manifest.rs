//! Provisioning manifest model and parser (`provision.yml`).

use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

use minijinja::{Environment, UndefinedBehavior};
use serde::Deserialize;
use url::Url;

use crate::domain::AppError;
use crate::domain::step::{Step, StepAction};

/// Raw manifest document as it appears on disk.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManifestDoc {
    /// Variables interpolated into step fields via `{{ name }}`.
    #[serde(default)]
    pub vars: BTreeMap<String, String>,
    /// Ordered step list.
    #[serde(default)]
    pub steps: Vec<StepEntry>,
}

/// One raw step entry. Exactly one of `run` / `fetch` / `clone` must be set.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StepEntry {
    pub name: String,
    #[serde(default)]
    pub run: Option<RunField>,
    #[serde(default)]
    pub fetch: Option<FetchEntry>,
    #[serde(default, rename = "clone")]
    pub clone_repo: Option<CloneEntry>,
    /// Whether a failure halts the run. Defaults to true.
    #[serde(default = "default_required")]
    pub required: bool,
    /// Working directory for `run` commands.
    #[serde(default)]
    pub dir: Option<String>,
    /// Extra environment variables for `run` commands.
    #[serde(default)]
    pub env: BTreeMap<String, String>,
}

/// A command either as one whitespace-split line or as an explicit argv
/// list. The list form is for arguments that contain spaces; the string
/// form gets no shell interpretation of any kind.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RunField {
    Line(String),
    Argv(Vec<String>),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FetchEntry {
    pub url: String,
    pub dest: String,
    #[serde(default)]
    pub sha256: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CloneEntry {
    pub url: String,
    pub dest: String,
    #[serde(default)]
    pub branch: Option<String>,
}

fn default_required() -> bool {
    true
}

/// Parse and validate manifest content into an ordered step plan.
pub fn parse_manifest_content(content: &str) -> Result<Vec<Step>, AppError> {
    let doc: ManifestDoc = serde_yaml::from_str(content)
        .map_err(|e| AppError::Parse { what: "provision.yml".into(), details: e.to_string() })?;

    if doc.steps.is_empty() {
        return Err(AppError::Validation(
            "No steps specified in provision.yml. Add steps to the 'steps' list.".into(),
        ));
    }

    let interpolator = Interpolator::new(&doc.vars);

    let mut seen = BTreeSet::new();
    let mut plan = Vec::with_capacity(doc.steps.len());
    for entry in &doc.steps {
        let step = build_step(entry, &interpolator)?;
        if !seen.insert(step.name.clone()) {
            return Err(AppError::Validation(format!("Duplicate step name '{}'", step.name)));
        }
        plan.push(step);
    }

    Ok(plan)
}

fn build_step(entry: &StepEntry, interpolator: &Interpolator<'_>) -> Result<Step, AppError> {
    let name = entry.name.trim();
    if name.is_empty() {
        return Err(AppError::Validation("Step names must not be empty".into()));
    }

    let action = match (&entry.run, &entry.fetch, &entry.clone_repo) {
        (Some(run), None, None) => build_command(name, run, interpolator)?,
        (None, Some(fetch), None) => build_fetch(name, fetch, interpolator)?,
        (None, None, Some(clone)) => build_clone(name, clone, interpolator)?,
        _ => {
            return Err(AppError::Validation(format!(
                "Step '{}' must declare exactly one of 'run', 'fetch', or 'clone'",
                name
            )));
        }
    };

    let dir = entry
        .dir
        .as_deref()
        .map(|dir| interpolator.render(name, dir))
        .transpose()?
        .map(PathBuf::from);

    let mut env = BTreeMap::new();
    for (key, value) in &entry.env {
        env.insert(key.clone(), interpolator.render(name, value)?);
    }

    Ok(Step { name: name.to_string(), action, required: entry.required, dir, env })
}

fn build_command(
    name: &str,
    run: &RunField,
    interpolator: &Interpolator<'_>,
) -> Result<StepAction, AppError> {
    let argv: Vec<String> = match run {
        RunField::Line(line) => {
            interpolator.render(name, line)?.split_whitespace().map(str::to_string).collect()
        }
        RunField::Argv(args) => {
            args.iter().map(|arg| interpolator.render(name, arg)).collect::<Result<_, _>>()?
        }
    };

    let mut parts = argv.into_iter();
    let program = match parts.next() {
        Some(program) if !program.is_empty() => program,
        _ => return Err(AppError::Validation(format!("Step '{}' has an empty command", name))),
    };

    Ok(StepAction::Command { program, args: parts.collect() })
}

fn build_fetch(
    name: &str,
    fetch: &FetchEntry,
    interpolator: &Interpolator<'_>,
) -> Result<StepAction, AppError> {
    let url = parse_url(name, &interpolator.render(name, &fetch.url)?)?;
    let dest = PathBuf::from(interpolator.render(name, &fetch.dest)?);
    let sha256 = fetch.sha256.as_deref().map(|s| interpolator.render(name, s)).transpose()?;

    if let Some(digest) = &sha256 {
        if digest.len() != 64 || !digest.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(AppError::Validation(format!(
                "Step '{}' has an invalid sha256 (expected 64 hex characters)",
                name
            )));
        }
    }

    Ok(StepAction::Fetch { url, dest, sha256 })
}

fn build_clone(
    name: &str,
    clone: &CloneEntry,
    interpolator: &Interpolator<'_>,
) -> Result<StepAction, AppError> {
    let url = parse_url(name, &interpolator.render(name, &clone.url)?)?;
    let dest = PathBuf::from(interpolator.render(name, &clone.dest)?);
    let branch = clone.branch.as_deref().map(|b| interpolator.render(name, b)).transpose()?;

    Ok(StepAction::Clone { url, dest, branch })
}

fn parse_url(name: &str, value: &str) -> Result<Url, AppError> {
    Url::parse(value).map_err(|e| {
        AppError::Validation(format!("Step '{}' has an invalid url '{}': {}", name, value, e))
    })
}

/// Renders `{{ var }}` references in step fields against the manifest's
/// `vars` map. Undefined variables are errors.
struct Interpolator<'v> {
    env: Environment<'static>,
    vars: &'v BTreeMap<String, String>,
}

impl<'v> Interpolator<'v> {
    fn new(vars: &'v BTreeMap<String, String>) -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        Self { env, vars }
    }

    fn render(&self, step: &str, value: &str) -> Result<String, AppError> {
        if !value.contains("{{") && !value.contains("{%") {
            return Ok(value.to_string());
        }
        self.env
            .render_str(value, self.vars)
            .map_err(|e| AppError::Template { step: step.to_string(), details: e.to_string() })
    }
}

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::debug;

use test_scope_core::services::{
    CargoTargetIndex, CargoWorkspace, IdentityExpander, LibtestFilterBuilder,
    TreeSitterSuiteRepository,
};
use test_scope_core::{
    CancelToken, Error, ResolutionOutcome, ScopeResolver, Symbol, collect_test_suites,
};

fn workspace_root(root: Option<&Path>) -> Result<PathBuf> {
    let root = match root {
        Some(root) => root.to_path_buf(),
        None => std::env::current_dir().context("cannot determine current directory")?,
    };
    root.canonicalize()
        .with_context(|| format!("workspace root '{}' not found", root.display()))
}

fn build_resolver(root: &Path) -> ScopeResolver {
    let workspace = Arc::new(CargoWorkspace::new(root));
    ScopeResolver::new(
        workspace.clone(),
        Arc::new(TreeSitterSuiteRepository::new()),
        Arc::new(CargoTargetIndex::new(root)),
        Arc::new(LibtestFilterBuilder::new()),
        Arc::new(IdentityExpander),
        workspace.clone(),
    )
    .with_boundary(workspace)
}

fn cancel_on_ctrl_c() -> CancelToken {
    let cancel = CancelToken::new();
    let handle = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            handle.cancel();
        }
    });
    cancel
}

pub async fn directory_command(dir: &Path, root: Option<&Path>, json: bool) -> Result<i32> {
    let root = workspace_root(root)?;
    let dir = dir
        .canonicalize()
        .with_context(|| format!("directory '{}' not found", dir.display()))?;
    debug!("resolving directory {} under {}", dir.display(), root.display());

    let resolver = build_resolver(&root);
    let cancel = cancel_on_ctrl_c();
    match resolver.resolve_directory(&dir, &cancel).await {
        Ok(outcome) => report(&outcome, json),
        Err(Error::Cancelled) => {
            eprintln!("cancelled");
            Ok(130)
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn selection_command(
    dir: &Path,
    suites: &[String],
    root: Option<&Path>,
    json: bool,
) -> Result<i32> {
    let root = workspace_root(root)?;
    let dir = dir
        .canonicalize()
        .with_context(|| format!("directory '{}' not found", dir.display()))?;

    let workspace = CargoWorkspace::new(&root);
    let repository = TreeSitterSuiteRepository::new();
    let cancel = cancel_on_ctrl_c();
    let found = match collect_test_suites(&repository, &workspace, &dir, &cancel) {
        Ok(found) => found,
        Err(Error::Cancelled) => {
            eprintln!("cancelled");
            return Ok(130);
        }
        Err(e) => return Err(e.into()),
    };

    let selection: Vec<Symbol> = found
        .into_iter()
        .filter(|symbol| {
            symbol
                .name
                .as_deref()
                .is_some_and(|name| suites.iter().any(|wanted| wanted == name))
        })
        .collect();
    if selection.len() < suites.len() {
        debug!(
            "only {} of {} requested suites were found beneath {}",
            selection.len(),
            suites.len(),
            dir.display()
        );
    }

    let resolver = build_resolver(&root);
    report(&resolver.resolve_symbols(&selection), json)
}

fn report(outcome: &ResolutionOutcome, json: bool) -> Result<i32> {
    if json {
        println!("{}", serde_json::to_string_pretty(outcome)?);
    }
    Ok(match outcome {
        ResolutionOutcome::Resolved(context) => {
            if !json {
                println!("{}", context.description);
                println!("target: {}", context.target);
                match &context.test_filter {
                    Some(filter) => println!("filter: {filter}"),
                    None => println!("filter: (entire target)"),
                }
            }
            0
        }
        ResolutionOutcome::NoMatch => {
            if !json {
                println!("no matching test target");
            }
            1
        }
        ResolutionOutcome::Conflict => {
            if !json {
                println!("selection spans more than one test target");
            }
            1
        }
    })
}

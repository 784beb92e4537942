//! Tree and maintainer resolution commands
//!
//! Shared plumbing for every command that needs the resolved tree: load the
//! manifest from `MAINTAINERS_FILE_PATH`, fetch the patch set, collect the
//! changed files, and reduce them to one merge target.

use pw_client::{Patch, PatchworkClient};
use pw_maintainers::MaintainersFile;

use crate::cli::{ResourceArgs, ResourceKind};
use crate::error::{CliError, Result};

/// Load the manifest named by the required environment variable.
pub(crate) fn load_maintainers() -> Result<MaintainersFile> {
    let path =
        std::env::var("MAINTAINERS_FILE_PATH").map_err(|_| CliError::MaintainersPathNotSet)?;
    Ok(MaintainersFile::load(path)?)
}

/// The patch itself, or every patch of the series in series order.
pub(crate) fn fetch_patches(
    client: &PatchworkClient,
    resource: &ResourceArgs,
) -> Result<Vec<Patch>> {
    match resource.kind {
        ResourceKind::Patch => Ok(vec![client.get_patch(resource.id)?]),
        ResourceKind::Series => Ok(client.series_patches(resource.id)?),
    }
}

/// All files touched across the patch set.
pub(crate) fn changed_files_of(patches: &[Patch]) -> Vec<String> {
    let mut files = Vec::new();
    for patch in patches {
        if let Some(diff) = &patch.diff {
            files.extend(pw_maintainers::changed_files(diff));
        }
    }
    files
}

/// Resolve the whole patch set to its common-denominator tree.
pub(crate) fn resolve_tree(maintainers: &mut MaintainersFile, patches: &[Patch]) -> String {
    let files = changed_files_of(patches);
    tracing::debug!(files = files.len(), "resolving changed files");
    maintainers.tree_for_files(&files)
}

/// The tree's short name: the last path segment of its URL.
pub(crate) fn short_name(tree: &str) -> &str {
    tree.rsplit('/').next().unwrap_or(tree)
}

/// Print the resolved tree's short name.
pub fn run_list_trees(client: &PatchworkClient, resource: &ResourceArgs) -> Result<()> {
    let mut maintainers = load_maintainers()?;
    let patches = fetch_patches(client, resource)?;
    let tree = resolve_tree(&mut maintainers, &patches);
    println!("{}", short_name(&tree));
    Ok(())
}

/// Print the resolved tree's maintainers, one per line.
pub fn run_list_maintainers(client: &PatchworkClient, resource: &ResourceArgs) -> Result<()> {
    let mut maintainers = load_maintainers()?;
    let patches = fetch_patches(client, resource)?;
    let tree = resolve_tree(&mut maintainers, &patches);
    for maintainer in maintainers.maintainers_for(&tree) {
        println!("{maintainer}");
    }
    Ok(())
}

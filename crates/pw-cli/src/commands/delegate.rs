//! Delegate assignment command
//!
//! Walks the resolved maintainer list in order and assigns the first
//! maintainer with exactly one Patchwork account as delegate on every patch
//! in the set. Ambiguous accounts and malformed maintainer lines are
//! reported on stderr and skipped; they never abort the run.

use pw_client::{Patch, PatchworkClient};

use crate::cli::ResourceArgs;
use crate::commands::resolve::{fetch_patches, load_maintainers, resolve_tree};
use crate::error::Result;

/// Outcome of trying one maintainer as the delegate.
enum Attempt {
    /// The maintainer's account was chosen; delegation is done
    Assigned,
    /// No unique account for this maintainer; try the next one
    NoUniqueUser,
}

/// Delegate the patch set to the first maintainer of the resolved tree.
pub fn run_set_delegate(
    client: &PatchworkClient,
    resource: &ResourceArgs,
    skip_delegated: bool,
) -> Result<()> {
    let mut maintainers = load_maintainers()?;
    let patches = fetch_patches(client, resource)?;
    let tree = resolve_tree(&mut maintainers, &patches);

    let list = maintainers.maintainers_for(&tree);
    if list.is_empty() {
        eprintln!("No maintainers matched. Not setting a delegate.");
        return Ok(());
    }

    for maintainer in &list {
        let Some(email) = maintainer.email() else {
            eprintln!("Unexpected maintainer format: '{maintainer}'");
            continue;
        };
        if let Attempt::Assigned = delegate_to(client, &patches, email, skip_delegated)? {
            break;
        }
    }
    Ok(())
}

/// Assign one candidate as delegate on every patch that needs it.
fn delegate_to(
    client: &PatchworkClient,
    patches: &[Patch],
    email: &str,
    skip_delegated: bool,
) -> Result<Attempt> {
    let users = client.find_users(email)?;
    if users.len() != 1 {
        // Zero or multiple accounts: there is no safe choice.
        eprintln!("Cannot choose a Patchwork user associated with {email} to delegate to.");
        return Ok(Attempt::NoUniqueUser);
    }
    let user = &users[0];

    for patch in patches {
        if let Some(delegate) = &patch.delegate {
            if delegate.email == user.email || skip_delegated {
                println!(
                    "Patch {} is already delegated to {}. Skipping..",
                    patch.id,
                    delegate.email.as_deref().unwrap_or("<unknown>")
                );
                continue;
            }
        }
        println!(
            "Delegating patch {} to {}..",
            patch.id,
            user.email.as_deref().unwrap_or(email)
        );
        client.set_delegate(patch.id, user.id)?;
    }
    Ok(Attempt::Assigned)
}

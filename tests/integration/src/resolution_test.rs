//! End-to-end resolution over the fixture MAINTAINERS file
//!
//! Exercises the complete flow: diff text -> changed files -> per-file tree
//! -> common-denominator reduction -> maintainer lookup.

use pretty_assertions::assert_eq;
use pw_maintainers::{MaintainersFile, changed_files};
use pw_test_utils::ManifestBuilder;

fn fixture() -> MaintainersFile {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../test-fixtures/MAINTAINERS");
    MaintainersFile::load(path).expect("load fixture manifest")
}

#[test]
fn test_single_driver_resolves_to_its_subtree() {
    let mut maintainers = fixture();
    let tree = maintainers.tree_for_files(&["drivers/net/mlx5/mlx5_flow.c"]);
    assert_eq!(tree, "git://dpdk.org/next/dpdk-next-net-mlx");
}

#[test]
fn test_sibling_drivers_reduce_to_parent_net_tree() {
    let mut maintainers = fixture();
    let tree = maintainers.tree_for_files(&[
        "drivers/net/mlx5/mlx5_flow.c",
        "drivers/net/i40e/i40e_ethdev.c",
    ]);
    assert_eq!(tree, "git://dpdk.org/next/dpdk-next-net");
}

#[test]
fn test_virtio_alias_folds_into_net_family() {
    let mut maintainers = fixture();
    let tree = maintainers.tree_for_files(&[
        "drivers/net/virtio/virtio_ethdev.c",
        "drivers/net/mlx5/mlx5_rxq.c",
    ]);
    assert_eq!(tree, "git://dpdk.org/next/dpdk-next-net");
}

#[test]
fn test_driver_without_subtree_uses_section_tree() {
    let mut maintainers = fixture();
    let tree = maintainers.tree_for_files(&["drivers/net/cnxk/cnxk_ethdev.c"]);
    assert_eq!(tree, "git://dpdk.org/next/dpdk-next-net");
}

#[test]
fn test_unknown_files_route_to_main_tree() {
    let mut maintainers = fixture();
    let tree = maintainers.tree_for_files(&["app/test/test_mempool.c"]);
    assert_eq!(tree, "git://dpdk.org/dpdk");
}

#[test]
fn test_treeless_library_routes_to_main_tree() {
    // lib/eal has maintainers but declares no tree anywhere.
    let mut maintainers = fixture();
    let tree = maintainers.tree_for_files(&["lib/eal/common/eal_common_options.c"]);
    assert_eq!(tree, "git://dpdk.org/dpdk");
}

#[test]
fn test_doc_changes_never_pick_the_doc_pattern() {
    let mut maintainers = fixture();
    let tree = maintainers.tree_for_files(&["doc/guides/nics/mlx5.rst"]);
    assert_eq!(tree, "git://dpdk.org/dpdk");
}

#[test]
fn test_common_driver_files_yield_to_the_unambiguous_tree() {
    // drivers/common/qat pulls the crypto tree in; dropping the shared
    // subsystem leaves the mlx net tree unanimous.
    let mut maintainers = fixture();
    let tree = maintainers.tree_for_files(&[
        "drivers/common/qat/qat_device.c",
        "drivers/net/mlx5/mlx5_txq.c",
    ]);
    assert_eq!(tree, "git://dpdk.org/next/dpdk-next-net-mlx");
}

#[test]
fn test_crypto_and_net_disagree_and_fall_back_to_main() {
    let mut maintainers = fixture();
    let tree = maintainers.tree_for_files(&[
        "drivers/crypto/qat/qat_sym.c",
        "drivers/net/mlx5/mlx5_flow.c",
    ]);
    assert_eq!(tree, "git://dpdk.org/dpdk");
}

#[test]
fn test_maintainer_lookup_for_resolved_tree() {
    let mut maintainers = fixture();
    let tree = maintainers.tree_for_files(&["drivers/net/ice/ice_main.c"]);
    assert_eq!(tree, "git://dpdk.org/next/dpdk-next-net-intel");

    let list = maintainers.maintainers_for(&tree);
    let lines: Vec<&str> = list.iter().map(|m| m.as_str()).collect();
    assert_eq!(lines, vec!["Robin Teal <robin.teal@example.com>"]);
}

#[test]
fn test_main_tree_has_project_admins() {
    let maintainers = fixture();
    let list = maintainers.maintainers_for("git://dpdk.org/dpdk");
    let emails: Vec<&str> = list.iter().filter_map(|m| m.email()).collect();
    assert_eq!(
        emails,
        vec!["morgan.vale@example.com", "alex.reyes@example.com"]
    );
}

#[test]
fn test_unbound_tree_has_no_maintainers() {
    let maintainers = fixture();
    assert!(maintainers.maintainers_for("git://dpdk.org/next/dpdk-next-unknown").is_empty());
}

#[test]
fn test_diff_to_maintainers_pipeline() {
    let diff = "\
diff --git a/drivers/net/i40e/i40e_rxtx.c b/drivers/net/i40e/i40e_rxtx.c
--- a/drivers/net/i40e/i40e_rxtx.c
+++ b/drivers/net/i40e/i40e_rxtx.c
@@ -1 +1 @@
-a
+b
diff --git a/drivers/net/ice/ice_rxtx.c b/drivers/net/ice/ice_rxtx.c
--- a/drivers/net/ice/ice_rxtx.c
+++ b/drivers/net/ice/ice_rxtx.c
@@ -1 +1 @@
-a
+b
";
    let files = changed_files(diff);
    assert_eq!(files.len(), 2);

    let mut maintainers = fixture();
    let tree = maintainers.tree_for_files(&files);
    assert_eq!(tree, "git://dpdk.org/next/dpdk-next-net-intel");
}

#[test]
fn test_builder_manifest_loads_from_disk() {
    let temp = ManifestBuilder::new()
        .section("General Project Administration")
        .block()
        .line("Main Branch")
        .tree("git://example.org/main")
        .maintainer("Admin <admin@example.com>")
        .section("Drivers")
        .tree("git://example.org/next/main-next-drivers")
        .block()
        .pattern("drivers/widget/")
        .into_temp();

    let mut maintainers = MaintainersFile::load(temp.path()).expect("load built manifest");
    // The widget block carries no tree, so the section header wins; a single
    // tree reduces to itself.
    let tree = maintainers.tree_for_files(&["drivers/widget/widget.c"]);
    assert_eq!(tree, "git://example.org/next/main-next-drivers");

    let admins = maintainers.maintainers_for("git://example.org/main");
    assert_eq!(admins.len(), 1);
    assert_eq!(admins[0].email(), Some("admin@example.com"));
}

#[test]
fn test_resolution_reuses_the_pattern_cache() {
    let mut maintainers = fixture();
    let first = maintainers.resolve("drivers/net/mlx5/mlx5_flow.c");
    let second = maintainers.resolve("drivers/net/mlx5/mlx5_rxq.c");
    assert_eq!(first.pattern, second.pattern);
    assert_eq!(first.tree, second.tree);
}

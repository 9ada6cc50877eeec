//! Walks over trees, graphs, linked lists and directory hierarchies. None of
//! them touch their input; each hands back the values in the order it visited
//! them.

#[cfg(feature = "fs")]
pub mod fs;
pub mod graph;
pub mod list;
pub mod tree;

#[cfg(feature = "fs")]
pub use fs::{walk_manual_stack, walk_top_down, DirectoryLister, OsFileSystem, DEFAULT_MAX_ITEMS};
pub use graph::{bfs, dfs_iterative, dfs_recursive, Graph};
pub use list::{traverse_linked_list, ListNode};
pub use tree::TreeNode;

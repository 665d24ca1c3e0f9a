// Resolution stages of the dive pipeline
pub mod containers;
pub mod locate;
pub mod node;
pub mod owners;
pub mod siblings;

// Re-export commonly used items
pub use containers::container_entries;
pub use locate::locate_pod;
pub use node::profile_node;
pub use owners::resolve_owners;
pub use siblings::collect_siblings;

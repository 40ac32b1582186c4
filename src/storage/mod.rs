// The persistence port. The scoring and ranking code never sees a concrete
// storage mechanism; everything goes through string keys and string values,
// so the backing store can be swapped without touching game logic.

pub mod file;
pub mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use async_trait::async_trait;

use crate::errors::Result;

#[async_trait]
pub trait Storage: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;

    async fn set(&self, key: &str, value: String) -> Result<()>;

    /// Writes every entry in one durable step. Transitions that touch two
    /// collections at once (match completion, bulk import) go through here so
    /// a crash cannot leave a match in both collections or in neither.
    async fn set_many(&self, entries: Vec<(String, String)>) -> Result<()>;

    async fn remove(&self, key: &str) -> Result<()>;
}

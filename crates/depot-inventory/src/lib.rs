//! Inventory store interface for depot.
//!
//! The inventory is the durable record of which content units belong to which
//! repository version. Depot's sync core never persists anything itself: it
//! reads the prior version's listing through the [`InventoryStore`] trait and
//! leaves all writes to the host system's apply engine. [`InMemoryInventory`]
//! is a `HashMap`-based store for tests and embedding.

pub mod error;
pub mod memory;
pub mod record;
pub mod traits;

pub use error::{InventoryError, InventoryResult};
pub use memory::InMemoryInventory;
pub use record::ContentRecord;
pub use traits::InventoryStore;

use crate::record::InventoryRecord;

/// Data-provider seam: supplies the records for one display cycle.
///
/// Callers load once per cycle and hand the same slice to every consumer.
pub trait InventorySource {
    type Error;

    fn load(&self) -> Result<Vec<InventoryRecord>, Self::Error>;
}

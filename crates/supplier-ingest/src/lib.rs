//! Boundary collaborators around the matcher: CSV inputs, registry
//! preparation, supplier screening and CSV outputs.

pub mod error;
pub mod read;
pub mod registry;
pub mod screening;
pub mod write;

pub use error::{IngestError, Result};
pub use read::{RegistryColumns, RegistryRow, normalize_header, read_registry_rows, read_supplier_names};
pub use registry::prepare_registry;
pub use screening::{ScreenedSupplier, ScreeningReport, screen_suppliers};
pub use write::{match_table_header, write_match_table, write_registry};

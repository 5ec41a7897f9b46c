//! Administrative CRUD surface. Every entity is editable here; the catalog
//! invariants hold regardless because they run inside the entity layer.

pub mod address;
pub mod catalog;
pub mod gallery;
pub mod masters;
pub mod reviews;

pub mod codec;
pub mod resolver;
pub mod table;

pub use codec::{ListQuery, SortOrder};
pub use resolver::{FieldValue, Listable, Page, resolve};
pub use table::TableState;

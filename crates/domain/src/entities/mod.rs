//! Domain entities - Objects with identity and lifecycle

mod notebook_entry;
mod scenario;

pub use notebook_entry::{DifficultWord, ErrorItem, NotebookEntry};
pub use scenario::PracticeScenario;

//! Knowledge Records
//!
//! The single entity the backend manages, plus the unsaved upload draft.
//!
//! ## Wire Format
//!
//! ```json
//! { "_id": "65f1c0", "namedoc": "Handbook", "description_doc": "Onboarding notes" }
//! ```

mod types;

pub use types::{Draft, Record, UploadFile};

//! Course registration: validated student records, a JSON-backed roster and
//! the interactive menu that ties them together.

pub mod app;
pub mod config;
pub mod console;
pub mod core;
pub mod error;
pub mod logging;
pub mod storage;
pub mod test_utils;
pub mod utils;

pub use app::App;
pub use config::AppConfig;
pub use console::{Console, MenuChoice, Reporter};
pub use crate::core::{Named, Person, Student};
pub use error::{RegistrationError, Result};
pub use storage::EnrollmentStore;

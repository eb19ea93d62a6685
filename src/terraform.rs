pub mod version;

pub use version::{DECLARATION_KEY, DEFAULT_TERRAFORM_VERSION, Declaration, ExpectedVersion};

pub mod git_command;
pub mod path_locator;
pub mod process_command;

pub use git_command::GitCommandAdapter;
pub use path_locator::PathExecutableLocator;
pub use process_command::CommandProcessRunner;

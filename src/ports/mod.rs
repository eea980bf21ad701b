mod executable_locator;
mod git;
mod process_runner;

pub use executable_locator::ExecutableLocator;
pub use git::GitPort;
pub use process_runner::{Invocation, ProcessExit, ProcessRunner};

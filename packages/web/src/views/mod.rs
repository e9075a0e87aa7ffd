mod shell;
pub use shell::Shell;

mod home;
pub use home::Home;

mod practice;
pub use practice::Practice;

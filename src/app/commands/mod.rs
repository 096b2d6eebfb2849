pub mod dependencies;
pub mod init;
pub mod vite_vue;

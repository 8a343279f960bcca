pub mod agent;
pub mod email;
pub mod merchant;
pub mod password;
pub mod phone;
pub mod token;

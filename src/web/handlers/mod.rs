//! HTML template rendering and login flow handlers.

mod home;
mod login;
mod token;

pub use home::home_handler;
pub use login::{login_page_handler, login_submit_handler};
pub use token::token_login_handler;

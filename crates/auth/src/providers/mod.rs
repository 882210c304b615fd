//! Stock implementations of the external collaborators.
//!
//! - `StaticLoginPage`: a login page fixed at configuration time
//! - `PassthroughExchanger`: treats the authorization code as the ID token

mod login_page;
mod passthrough;

pub use login_page::StaticLoginPage;
pub use passthrough::PassthroughExchanger;

mod root;
mod state;

pub(crate) use state::DashState;

pub use root::App;

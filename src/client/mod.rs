//! Orientor API client

pub mod api;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod orientor;

pub use api::{
    AuthApi, ChatApi, MessageApi, PeerApi, ProfileApi, ResumeApi, SearchApi, SpaceApi, UserApi,
};
#[cfg(test)]
pub use mock::MockOrientorClient;
pub use orientor::OrientorClient;

/// The full backend surface used by the CLI.
///
/// Blanket-implemented for anything that implements every sub-trait.
pub trait OrientorApi:
    AuthApi + UserApi + ProfileApi + PeerApi + MessageApi + ChatApi + SearchApi + SpaceApi + ResumeApi
{
}

impl<T> OrientorApi for T where
    T: AuthApi
        + UserApi
        + ProfileApi
        + PeerApi
        + MessageApi
        + ChatApi
        + SearchApi
        + SpaceApi
        + ResumeApi
{
}

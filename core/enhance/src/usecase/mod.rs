//! ユースケース

mod enhance;
mod profiles;

pub use enhance::EnhanceUseCase;
pub use profiles::ListProfilesUseCase;

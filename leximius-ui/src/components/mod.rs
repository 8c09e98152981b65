//! Component contracts
//!
//! Each component is an explicit configuration struct mapping closed
//! variant/size enumerations to fixed class bundles, plus the structural
//! flags that change what gets rendered rather than how it looks.

mod alert;
mod avatar;
mod badge;
mod button;
mod card;
mod input;

pub use alert::{Alert, DismissHandler};
pub use avatar::{Avatar, AvatarContent};
pub use badge::Badge;
pub use button::Button;
pub use card::{Card, CardVariant};
pub use input::{Input, InputKind};

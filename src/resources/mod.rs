//! Resource facades.
//!
//! Each facade borrows the [`Client`](crate::Client), shapes parameters into a
//! [`Request`](crate::Request) and returns the transport result unchanged.

mod channels;
mod chats;
mod contacts;
mod groups;
mod messages;
mod profile;
mod sessions;
mod status;

pub use channels::Channels;
pub use chats::{Chats, Page};
pub use contacts::{ContactQuery, Contacts, SortBy, SortOrder};
pub use groups::Groups;
pub use messages::{
    ContactCard, FileOptions, ImageOptions, Messages, Poll, SeenOptions, TextOptions, VideoOptions,
    VoiceOptions,
};
pub use profile::Profile;
pub use sessions::{NewSession, QrFormat, Sessions};
pub use status::Status;

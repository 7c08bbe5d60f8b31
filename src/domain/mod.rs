//! Domain layer - entities mirrored from the backend schema and the error
//! taxonomy shared by every operation

pub mod content;
pub mod dj;
pub mod error;
pub mod event;
pub mod mailing;
pub mod media;

pub use content::{Content, ContentCreate, ContentUpdate};
pub use dj::{Dj, DjCreate, DjSocials, DjUpdate};
pub use error::DomainError;
pub use event::{Event, EventCreate, EventUpdate, TicketStatus};
pub use mailing::{MailingListEntry, MailingListPage, MailingListResponse};
pub use media::{UploadSignature, UploadedImage};

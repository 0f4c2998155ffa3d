mod envelope;
pub use self::envelope::Envelope;

mod paste;
pub use self::paste::{Author, Paste, PasteFile, Visibility};

mod request;
pub use self::request::{ContentFormat, CreatePaste, FileContent, FileInput, UpdatePaste};

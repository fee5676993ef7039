mod recording_folder_store;
mod recording_user_store;

pub use recording_folder_store::RecordingFolderStore;
pub use recording_user_store::{RecordingUserStore, SharedUsers};

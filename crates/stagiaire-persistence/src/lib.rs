pub mod dataset_store;
pub mod image;
pub mod local_storage;
pub mod store;
pub mod traits;

pub use dataset_store::DatasetStore;
pub use image::{image_data_url, mime_for_path};
pub use local_storage::{LocalStorage, AUTH_USER_ID_KEY, PROFILE_IMAGE_KEY, THEME_KEY};
pub use store::{AtomicWriter, JsonFileStore};
pub use traits::*;

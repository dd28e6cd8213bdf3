use std::sync::Arc;

use bliss_actions::{Actions, FormActionResult, RawForm, SongActionResult};
use bliss_audio::DataUri;
use serde::Serialize;

use crate::details::{BirthdayDetails, Blob};
use crate::notification::Notification;
use crate::resource::{ObjectUrl, ResourceSlot, ResourceStore};

/// Image shown when no photo has been uploaded
pub const PLACEHOLDER_IMAGE: &str = "https://placehold.co/200x200.png";

const SONG_FILE_NAME: &str = "birthday-song.wav";

/// Display data for one render of the card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardView {
    pub headline: String,
    pub age_line: String,
    pub message: String,
    /// Uploaded photo URL, or [`PLACEHOLDER_IMAGE`]
    pub image_src: String,
    pub image_alt: String,
    pub song_url: Option<String>,
    pub is_singing: bool,
    pub sing_label: &'static str,
}

/// State of the card currently on screen
///
/// At most one image URL and one song URL are live at any time. All
/// mutation goes through the methods here.
#[derive(Debug)]
pub struct CardState {
    details: BirthdayDetails,
    image: ResourceSlot,
    song: ResourceSlot,
    is_singing: bool,
}

impl CardState {
    /// A fresh card with the default details
    pub fn new(store: Arc<dyn ResourceStore>) -> Self {
        Self::with_details(store, BirthdayDetails::default())
    }

    pub fn with_details(store: Arc<dyn ResourceStore>, details: BirthdayDetails) -> Self {
        let mut image = ResourceSlot::new(store.clone());
        image.replace(details.image.as_ref());

        Self {
            details,
            image,
            song: ResourceSlot::new(store),
            is_singing: false,
        }
    }

    pub const fn details(&self) -> &BirthdayDetails {
        &self.details
    }

    pub const fn is_singing(&self) -> bool {
        self.is_singing
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image.url().map(ObjectUrl::as_str)
    }

    pub fn song_url(&self) -> Option<&str> {
        self.song.url().map(ObjectUrl::as_str)
    }

    /// Reconcile edited details into the card
    ///
    /// Returns `false` and touches nothing when `details` equals what is
    /// already shown. A changed image gets a new URL and the old one is
    /// released.
    pub fn update(&mut self, details: BirthdayDetails) -> bool {
        if details == self.details {
            return false;
        }

        if details.image != self.details.image {
            self.image.replace(details.image.as_ref());
        }
        self.details = details;

        true
    }

    /// Current values as the message form would submit them
    pub fn form_fields(&self) -> RawForm {
        [
            ("name", self.details.name.clone()),
            ("age", self.details.age.to_string()),
            ("interests", self.details.interests.clone()),
        ]
        .into_iter()
        .map(|(key, value)| (key.to_owned(), value))
        .collect()
    }

    /// Merge a message action result
    ///
    /// Only a generated message changes the card; failures leave it as is.
    pub fn apply_message_result(&mut self, result: &FormActionResult) -> Notification {
        match result.generated_message() {
            Some(message) => {
                self.details.message = message.to_owned();
                Notification::success("New birthday message generated.")
            }
            None => Notification::from_issues(result.status_message(), result.issues()),
        }
    }

    /// Submit `form` and merge the outcome
    pub async fn submit_message(&mut self, actions: &Actions, form: &RawForm) -> Notification {
        let result = actions.submit_message_request(form).await;
        self.apply_message_result(&result)
    }

    /// Mark a song request as in flight
    ///
    /// Returns the name to sing, or `None` while a previous request is still
    /// outstanding.
    pub fn begin_song(&mut self) -> Option<String> {
        if self.is_singing {
            tracing::debug!("song request ignored, one is already in flight");
            return None;
        }

        self.is_singing = true;
        Some(self.details.name.clone())
    }

    /// Clear the in-flight flag and merge a song result
    ///
    /// A new song replaces and releases the previous one. Failures keep the
    /// previous song and return a notification.
    pub fn finish_song(&mut self, result: &SongActionResult) -> Option<Notification> {
        self.is_singing = false;

        match result {
            SongActionResult::Song { song_url } => match DataUri::parse(song_url) {
                Ok(uri) => {
                    let blob = Blob::new(SONG_FILE_NAME, uri.mime_type, uri.data);
                    self.song.replace(Some(&blob));
                    None
                }
                Err(e) => {
                    tracing::warn!(error = %e, "song result is not a playable data uri");
                    Some(Notification::error(format!("Failed to generate the birthday song: {e}")))
                }
            },
            SongActionResult::Failed { error } => Some(Notification::error(error.clone())),
        }
    }

    /// Request a song for the current name and merge the outcome
    ///
    /// Does nothing and returns `None` while a song is already in flight.
    /// Dropping the future before it completes clears the in-flight flag and
    /// leaves the previous song in place.
    pub async fn sing(&mut self, actions: &Actions) -> Option<Notification> {
        let name = self.begin_song()?;
        let result = {
            let _in_flight = InFlight(&mut self.is_singing);
            actions.submit_song_request(&name).await
        };
        self.finish_song(&result)
    }

    pub fn view(&self) -> CardView {
        let details = &self.details;

        CardView {
            headline: format!("Happy Birthday, {}!", details.name),
            age_line: format!("You're {} years old!", details.age),
            message: details.message.clone(),
            image_src: self.image_url().unwrap_or(PLACEHOLDER_IMAGE).to_owned(),
            image_alt: format!("Photo of {}", details.name),
            song_url: self.song_url().map(ToOwned::to_owned),
            is_singing: self.is_singing,
            sing_label: if self.is_singing {
                "Generating Song..."
            } else {
                "Sing Happy Birthday!"
            },
        }
    }

    /// Release every live resource at session end
    pub fn teardown(&mut self) {
        self.image.clear();
        self.song.clear();
    }
}

/// Clears the singing flag when a song request ends, however it ends
struct InFlight<'a>(&'a mut bool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}

/*!
 * waha-rs - A small, blocking Rust client for the WAHA WhatsApp HTTP API
 *
 * Every call goes through one transport core that attaches the API key,
 * applies the timeout, decodes the body by content type and maps status
 * codes onto a small error taxonomy. Resource facades (sessions, messages,
 * chats, contacts, groups, status, profile, channels) only shape parameters.
 */

pub mod client;
pub mod configuration;
pub mod error;
pub mod media;
pub mod request;
pub mod resources;
pub mod response;

/// The main entry point for the WAHA library.
///
/// Provides static methods for process-wide configuration.
pub struct Waha;

impl Waha {
    /// Configure the defaults used by [`Client::new`].
    ///
    /// # Examples
    ///
    /// ```
    /// use waha_rs::Waha;
    ///
    /// Waha::configure(|config| {
    ///     config.set_base_url("http://localhost:3000");
    ///     config.set_api_key("YOUR_API_KEY");
    /// });
    /// ```
    pub fn configure<F>(config_fn: F)
    where
        F: FnOnce(&mut configuration::Configuration),
    {
        configuration::Configuration::configure_global(config_fn);
    }

    /// Create a client from the configured defaults.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use waha_rs::{TextOptions, Waha};
    ///
    /// let client = Waha::client()?;
    /// let result = client.messages().send_text(
    ///     "default",
    ///     "1234567890@c.us",
    ///     "Hello from waha-rs!",
    ///     &TextOptions::default(),
    /// )?;
    /// println!("{:?}", result.as_json());
    /// # Ok::<(), waha_rs::Error>(())
    /// ```
    pub fn client() -> Result<client::Client, error::Error> {
        client::Client::new()
    }
}

// Re-export main components for easy access
pub use client::{Client, API_KEY_HEADER};
pub use configuration::Configuration;
pub use error::Error;
pub use media::{MediaFile, MediaSource, ResponseMode};
pub use request::{Method, Request};
pub use resources::*;
pub use response::{classify, Payload};

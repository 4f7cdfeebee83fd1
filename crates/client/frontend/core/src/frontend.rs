//! Trait describing a runnable client front-end.
use anyhow::Result;
use async_trait::async_trait;
use runtime::Runtime;

/// Frontend abstraction for UI layers.
///
/// The frontend owns the [`Runtime`] for the length of the session: it reads
/// input, advances frames with [`Runtime::step`], and renders the resulting
/// state. Event subscribers obtained through [`Runtime::event_bus`] keep
/// working while it runs.
///
/// # Implementations
///
/// - `CliFrontend`: Terminal-based UI (ratatui + crossterm)
///
/// # Example Implementation
///
/// ```no_run
/// use async_trait::async_trait;
/// use client_frontend_core::Frontend;
/// use game_core::PlayerInput;
/// use runtime::Runtime;
/// use anyhow::Result;
///
/// struct Headless {
///     frames: u32,
/// }
///
/// #[async_trait]
/// impl Frontend for Headless {
///     async fn run(&mut self, mut runtime: Runtime) -> Result<()> {
///         for _ in 0..self.frames {
///             runtime.step(PlayerInput::IDLE, 16)?;
///         }
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait Frontend: Send {
    /// Run the frontend loop until the user quits.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend or the simulation fails fatally.
    async fn run(&mut self, runtime: Runtime) -> Result<()>;
}

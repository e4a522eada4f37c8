//! Authenticated landing screen slice.

mod render;

pub use render::render_menu;

/// Menu screen state.
///
/// The navigation contract carries no parameters between destinations;
/// the email shown here comes from the provider's session snapshot.
#[derive(Debug)]
pub struct MenuScreen {
    pub email: String,
}

impl MenuScreen {
    pub fn new(email: String) -> Self {
        Self { email }
    }
}

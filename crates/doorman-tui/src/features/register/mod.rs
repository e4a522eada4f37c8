//! Registration screen slice.

mod render;
mod update;

pub use render::render_register;
pub use update::{RegisterAction, handle_key, handle_paste};

use doorman_core::validate::{RegistrationInput, RegistrationValidity, check_registration};

use crate::common::TextField;

/// Fields on the registration form, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterField {
    Email,
    Password,
    RepeatPassword,
    FirstName,
    LastName,
    Age,
}

impl RegisterField {
    const ORDER: [RegisterField; 6] = [
        RegisterField::Email,
        RegisterField::Password,
        RegisterField::RepeatPassword,
        RegisterField::FirstName,
        RegisterField::LastName,
        RegisterField::Age,
    ];

    pub fn next(self) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + 1) % Self::ORDER.len()]
    }

    pub fn previous(self) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    pub fn is_password(self) -> bool {
        matches!(self, RegisterField::Password | RegisterField::RepeatPassword)
    }
}

impl Default for RegisterField {
    fn default() -> Self {
        RegisterField::Email
    }
}

/// Registration screen state.
///
/// Owned by `Screen::Register` and dropped when the user navigates away.
#[derive(Debug, Default)]
pub struct RegisterScreen {
    pub email: TextField,
    pub password: TextField,
    pub repeat_password: TextField,
    pub first_name: TextField,
    pub last_name: TextField,
    pub age: TextField,
    pub password_visible: bool,
    pub repeat_visible: bool,
    pub focus: RegisterField,
    /// Provider-reported failure message, shown inline until the next
    /// completed submission.
    pub error: Option<String>,
}

impl RegisterScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focused_field_mut(&mut self) -> &mut TextField {
        match self.focus {
            RegisterField::Email => &mut self.email,
            RegisterField::Password => &mut self.password,
            RegisterField::RepeatPassword => &mut self.repeat_password,
            RegisterField::FirstName => &mut self.first_name,
            RegisterField::LastName => &mut self.last_name,
            RegisterField::Age => &mut self.age,
        }
    }

    /// Field validity, recomputed from the current values.
    ///
    /// Called on every render and before submission; the predicates are
    /// cheap enough that nothing is cached.
    pub fn validity(&self) -> RegistrationValidity {
        check_registration(RegistrationInput {
            email: self.email.value(),
            password: self.password.value(),
            repeat_password: self.repeat_password.value(),
            first_name: self.first_name.value(),
            last_name: self.last_name.value(),
            age: self.age.value(),
        })
    }
}

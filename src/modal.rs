//! A confirmation dialog that is dismissed by clicking its backdrop.

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

/// Where a click inside an open dialog landed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClickTarget {
    /// The dialog container itself, outside its content box.
    Backdrop,
    /// Anything nested inside the dialog's content.
    Content,
}

/// Only one dialog is tracked; opening an open dialog is a no-op.
#[derive(Clone, Debug, Default)]
pub struct Modal {
    visibility: Visibility,
}

impl Modal {
    pub fn new() -> Modal {
        Modal::default()
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_visible(&self) -> bool {
        self.visibility == Visibility::Visible
    }

    pub fn open(&mut self) {
        self.visibility = Visibility::Visible;
    }

    pub fn close(&mut self) {
        self.visibility = Visibility::Hidden;
    }

    /// Returns `true` if the click dismissed the dialog.
    pub fn on_click(&mut self, target: ClickTarget) -> bool {
        match target {
            ClickTarget::Backdrop if self.is_visible() => {
                self.close();
                true
            }
            _ => false,
        }
    }
}
